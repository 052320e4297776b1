//! Core transform state: geometry, clamping, configuration, and the
//! per-element controller.

pub mod config;
pub mod constants;
pub mod controller;
pub mod geom;
pub mod transform;
