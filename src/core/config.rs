//! Behavior tuning for attached controllers.
//!
//! Options are serde-derived so hosts can keep interaction presets as
//! plain JSON and hand them to [`crate::registry::AttachParams`].

use crate::core::constants::DEFAULT_ZOOM_STEP;
use serde::{Deserialize, Serialize};

/// Per-controller interaction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionOptions {
    /// Whether pointer dragging pans the zoomed content.
    pub dragging: bool,
    /// Whether wheel input adjusts the zoom factor.
    pub scroll_wheel_zoom: bool,
    /// Zoom factor increment per wheel tick.
    pub zoom_step: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            dragging: true,
            scroll_wheel_zoom: true,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl InteractionOptions {
    /// Loads options from a JSON document; absent fields keep defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
