//! # zoomlet
//!
//! A pannable, zoomable viewer control for host-embedded images,
//! inspired by Leaflet-style zoom interactions.
//!
//! A [`ZoomController`] owns one element's pan/zoom state: it converts
//! pointer and wheel input into a 2D affine transform (translation plus
//! uniform scale), clamps pan offsets so the content never scrolls fully
//! out of its container, anchors zoom at the cursor, and renders the
//! result as inline style through the [`HostElement`] seam. The
//! [`ControllerRegistry`] tracks attached controllers and owns their
//! teardown.
//!
//! The crate is headless: hosts implement [`HostElement`] over their own
//! element handles and feed [`InputEvent`]s in; nothing here depends on a
//! particular UI toolkit or document binding.

pub mod core;
pub mod host;
pub mod input;
pub mod registry;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::InteractionOptions,
    controller::{ControllerState, ZoomCallback, ZoomController},
    geom::{Point, Rect},
    transform::{PanBounds, Transform},
};

pub use crate::host::{FixedElement, HostElement, StyleProperty};

pub use crate::input::events::{EventHandled, InputEvent, WheelDelta, WheelDirection};

pub use crate::registry::{AttachParams, ControllerRegistry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ZoomError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ZoomError {
    #[error("attach requires a target node")]
    MissingNode,

    #[error("target node has no parent container")]
    MissingParent,

    #[error("{0} is not implemented")]
    Unsupported(&'static str),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = ZoomError;
