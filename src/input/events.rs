use crate::core::geom::Point;
use serde::{Deserialize, Serialize};

/// Input events fed to an attached controller by its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary pointer pressed on the element
    PointerDown { position: Point },
    /// Pointer moved; only meaningful while a drag session is active
    PointerMove { position: Point },
    /// Pointer released
    PointerUp,
    /// Pointer left the document surface; ends a drag like a release
    PointerLeave,
    /// Wheel tick over the element
    Wheel { delta: WheelDelta, position: Point },
    /// Host-native drag gesture starting on the element; always suppressed
    DragStart,
}

impl InputEvent {
    /// Gets the position associated with this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position } => Some(*position),
            InputEvent::PointerMove { position } => Some(*position),
            InputEvent::Wheel { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Checks if this event ends an active drag session.
    pub fn ends_drag(&self) -> bool {
        matches!(self, InputEvent::PointerUp | InputEvent::PointerLeave)
    }
}

/// Wheel input as reported by the host, in either of the two event
/// shapes found in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WheelDelta {
    /// Legacy scroll events report a line `detail`, negative on
    /// forward/up scroll.
    Legacy { detail: f64 },
    /// Standard wheel events report a `wheel_delta`, positive on
    /// forward/up scroll.
    Standard { delta: f64 },
}

/// Signed scroll direction after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Forward/up scroll: zoom in
    In,
    /// Backward/down scroll: zoom out
    Out,
}

impl WheelDelta {
    /// Maps either event shape to a signed direction. This is the single
    /// normalization point; the zoom algorithm never inspects raw deltas.
    pub fn direction(&self) -> WheelDirection {
        let forward = match self {
            WheelDelta::Legacy { detail } => *detail < 0.0,
            WheelDelta::Standard { delta } => *delta > 0.0,
        };
        if forward {
            WheelDirection::In
        } else {
            WheelDirection::Out
        }
    }
}

/// Whether an event was consumed by the controller. Hosts should suppress
/// their default handling (scrolling, text selection, native drags) for
/// handled events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_position() {
        let down = InputEvent::PointerDown {
            position: Point::new(100.0, 200.0),
        };
        assert_eq!(down.position(), Some(Point::new(100.0, 200.0)));

        assert_eq!(InputEvent::PointerUp.position(), None);
        assert_eq!(InputEvent::DragStart.position(), None);
    }

    #[test]
    fn test_ends_drag() {
        assert!(InputEvent::PointerUp.ends_drag());
        assert!(InputEvent::PointerLeave.ends_drag());
        assert!(!InputEvent::PointerDown {
            position: Point::new(0.0, 0.0)
        }
        .ends_drag());
    }

    #[test]
    fn test_legacy_wheel_direction() {
        assert_eq!(
            WheelDelta::Legacy { detail: -3.0 }.direction(),
            WheelDirection::In
        );
        assert_eq!(
            WheelDelta::Legacy { detail: 3.0 }.direction(),
            WheelDirection::Out
        );
        // A zero detail never reads as forward scroll
        assert_eq!(
            WheelDelta::Legacy { detail: 0.0 }.direction(),
            WheelDirection::Out
        );
    }

    #[test]
    fn test_standard_wheel_direction() {
        assert_eq!(
            WheelDelta::Standard { delta: 120.0 }.direction(),
            WheelDirection::In
        );
        assert_eq!(
            WheelDelta::Standard { delta: -120.0 }.direction(),
            WheelDirection::Out
        );
        assert_eq!(
            WheelDelta::Standard { delta: 0.0 }.direction(),
            WheelDirection::Out
        );
    }
}
