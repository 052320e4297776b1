//! Engine-wide magic numbers in a single place, so tweaking behavior
//! does not mean hunting through the handlers.

/// Zoom factor increment applied per wheel tick.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// The identity zoom factor; the control never zooms below this.
pub const MIN_ZOOM_FACTOR: f64 = 1.0;

/// Tolerance for comparing zoom factors against the identity threshold.
/// Repeated fractional wheel steps accumulate float error, so exact
/// equality with 1.0 is never reliable.
pub const ZOOM_EPSILON: f64 = 1e-3;
