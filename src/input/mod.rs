//! Typed input events and their normalization.

pub mod events;

pub use events::{EventHandled, InputEvent, WheelDelta, WheelDirection};
