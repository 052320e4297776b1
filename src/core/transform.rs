use crate::core::constants::ZOOM_EPSILON;
use crate::core::geom::Point;
use serde::{Deserialize, Serialize};

/// The rendered view transform: a pixel translation plus a uniform scale
/// around a percentage-based origin (CSS-style transforms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in pixels
    pub translate: Point,
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
    /// Transform origin in percent of the element's size
    pub origin: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Point::new(0.0, 0.0),
            scale: 1.0,
            origin: Point::new(0.0, 0.0),
        }
    }
}

impl Transform {
    pub fn new(translate: Point, scale: f64, origin: Point) -> Self {
        Self {
            translate,
            scale,
            origin,
        }
    }

    /// Create identity transform (no change)
    pub fn identity() -> Self {
        Self::default()
    }

    /// Check if this is effectively an identity transform
    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < ZOOM_EPSILON
            && self.translate.x.abs() < 0.1
            && self.translate.y.abs() < 0.1
    }

    /// Renders the transform as a CSS `transform` property value.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// Renders the origin as a CSS `transform-origin` property value.
    pub fn origin_css(&self) -> String {
        format!("{}% {}%", self.origin.x, self.origin.y)
    }
}

/// The pan clamp window: per-axis minimum and maximum translation keeping
/// the zoomed content from scrolling fully out of its container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanBounds {
    pub min: Point,
    pub max: Point,
}

impl PanBounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// A zero-size window pinning the translation to the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Limits a translation into the window, lower bound first so the
    /// upper bound wins when zooming has pushed `min` above `max`.
    pub fn limit(&self, point: Point) -> Point {
        let mut limited = point;
        if limited.x < self.min.x {
            limited.x = self.min.x;
        }
        if limited.x > self.max.x {
            limited.x = self.max.x;
        }
        if limited.y < self.min.y {
            limited.y = self.min.y;
        }
        if limited.y > self.max.y {
            limited.y = self.max.y;
        }
        limited
    }

    /// Checks whether a translation already lies inside the window.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let transform = Transform::identity();
        assert!(transform.is_identity());
        assert_eq!(transform.to_css(), "translate(0px, 0px) scale(1)");
        assert_eq!(transform.origin_css(), "0% 0%");
    }

    #[test]
    fn test_scaled_transform_css() {
        let transform = Transform::new(Point::new(-40.0, 25.0), 1.3, Point::new(0.0, 0.0));
        assert!(!transform.is_identity());
        assert_eq!(transform.to_css(), "translate(-40px, 25px) scale(1.3)");
    }

    #[test]
    fn test_near_identity_tolerance() {
        let transform = Transform::new(Point::new(0.0, 0.0), 1.0 + 1e-12, Point::new(0.0, 0.0));
        assert!(transform.is_identity());
    }

    #[test]
    fn test_limit_clamps_both_axes() {
        let bounds = PanBounds::new(Point::new(-100.0, -50.0), Point::new(0.0, 0.0));

        assert_eq!(
            bounds.limit(Point::new(-150.0, 10.0)),
            Point::new(-100.0, 0.0)
        );
        assert_eq!(
            bounds.limit(Point::new(-30.0, -20.0)),
            Point::new(-30.0, -20.0)
        );
    }

    #[test]
    fn test_limit_upper_bound_wins_on_inverted_window() {
        // Zooming a small element inside a larger container can push the
        // lower bound above the upper bound; the upper bound must win.
        let bounds = PanBounds::new(Point::new(90.0, 90.0), Point::new(0.0, 0.0));

        assert_eq!(bounds.limit(Point::new(50.0, 120.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_window_pins_to_origin() {
        let bounds = PanBounds::zero();
        assert_eq!(bounds.limit(Point::new(33.0, -7.0)), Point::new(0.0, 0.0));
        assert!(bounds.contains(&Point::new(0.0, 0.0)));
        assert!(!bounds.contains(&Point::new(1.0, 0.0)));
    }
}
