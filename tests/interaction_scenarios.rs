//! End-to-end interaction scenarios driven through the public API:
//! a registry, in-memory host elements, and raw input events.

use std::cell::Cell;
use std::rc::Rc;

use zoomlet::{
    AttachParams, ControllerRegistry, ControllerState, EventHandled, FixedElement, HostElement,
    InputEvent, InteractionOptions, Point, Rect, StyleProperty, WheelDelta, ZoomError,
};

/// A 400x400 image filling a 400x400 container: zoom ceiling (2*400)/400 = 2.
fn viewer_element(id: &str) -> (Rc<FixedElement>, Rc<FixedElement>) {
    let container = FixedElement::new(format!("{id}-container"), Rect::from_size(400.0, 400.0));
    let element = FixedElement::child_of(&container, id, Rect::from_size(400.0, 400.0), 400.0);
    (container, element)
}

fn wheel(direction: f64, x: f64, y: f64) -> InputEvent {
    InputEvent::Wheel {
        delta: WheelDelta::Standard {
            delta: direction * 120.0,
        },
        position: Point::new(x, y),
    }
}

#[test]
fn full_session_zoom_drag_and_release() {
    let (_container, element) = viewer_element("img");
    let zoom_ins = Rc::new(Cell::new(0u32));
    let zoom_outs = Rc::new(Cell::new(0u32));

    let mut registry = ControllerRegistry::new();
    let ins = zoom_ins.clone();
    let outs = zoom_outs.clone();
    registry
        .attach(
            AttachParams::new(element.clone() as Rc<dyn HostElement>)
                .on_zoom_in(move || ins.set(ins.get() + 1))
                .on_zoom_out(move || outs.set(outs.get() + 1)),
        )
        .unwrap();

    // Two wheel ticks at an off-center cursor
    registry.with_controller_mut("img", |c| {
        c.handle_input(wheel(1.0, 300.0, 100.0));
        c.handle_input(wheel(1.0, 300.0, 100.0));
        assert_eq!(c.state(), ControllerState::Zoomed);
        assert!((c.zoom_factor() - 1.2).abs() < 1e-9);
    });
    assert_eq!(zoom_ins.get(), 1);

    // Drag while zoomed, then release
    registry.with_controller_mut("img", |c| {
        c.handle_input(InputEvent::PointerDown {
            position: Point::new(200.0, 200.0),
        });
        assert_eq!(c.state(), ControllerState::Dragging);
        c.handle_input(InputEvent::PointerMove {
            position: Point::new(170.0, 230.0),
        });
        c.handle_input(InputEvent::PointerUp);
        assert_eq!(c.state(), ControllerState::Zoomed);

        let bounds = c.pan_bounds();
        let translate = c.translate();
        assert!(translate.x >= bounds.min.x && translate.x <= bounds.max.x);
        assert!(translate.y >= bounds.min.y && translate.y <= bounds.max.y);
    });
    assert!(!element.capture_held());

    // Zoom all the way back out
    registry.with_controller_mut("img", |c| {
        c.handle_input(wheel(-1.0, 200.0, 200.0));
        c.handle_input(wheel(-1.0, 200.0, 200.0));
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.translate(), Point::new(0.0, 0.0));
    });
    assert_eq!(zoom_outs.get(), 1);

    registry.detach(None);
    assert!(registry.is_empty());
    assert_eq!(element.style_count(), 0);
}

#[test]
fn rendered_translate_stays_in_bounds_across_mixed_input() {
    let (_container, element) = viewer_element("img");
    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(element.clone() as Rc<dyn HostElement>))
        .unwrap();

    let script = [
        wheel(1.0, 10.0, 390.0),
        InputEvent::PointerDown {
            position: Point::new(50.0, 50.0),
        },
        InputEvent::PointerMove {
            position: Point::new(300.0, -40.0),
        },
        wheel(1.0, 380.0, 20.0),
        InputEvent::PointerMove {
            position: Point::new(-200.0, 500.0),
        },
        InputEvent::PointerUp,
        wheel(-1.0, 200.0, 200.0),
        InputEvent::PointerDown {
            position: Point::new(0.0, 0.0),
        },
        InputEvent::PointerMove {
            position: Point::new(999.0, 999.0),
        },
        InputEvent::PointerLeave,
    ];

    registry.with_controller_mut("img", |c| {
        for event in script {
            c.handle_input(event);
            let bounds = c.pan_bounds();
            let translate = c.translate();
            assert!(
                translate.x >= bounds.min.x
                    && translate.x <= bounds.max.x
                    && translate.y >= bounds.min.y
                    && translate.y <= bounds.max.y,
                "translate {translate:?} escaped bounds {bounds:?}"
            );
        }
    });
}

#[test]
fn zoom_ceiling_honors_literal_formula() {
    // 100x100 element, 200x200 container, 50px natural height:
    // ceiling = (2 * 50) / 200 = 0.5
    let container = FixedElement::new("container", Rect::from_size(200.0, 200.0));
    let element = FixedElement::child_of(&container, "thumb", Rect::from_size(100.0, 100.0), 50.0);

    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(element as Rc<dyn HostElement>))
        .unwrap();

    registry.with_controller_mut("thumb", |c| {
        assert!((c.max_zoom_factor() - 0.5).abs() < 1e-9);

        // With a sub-identity ceiling the control can never leave Idle
        c.handle_input(wheel(1.0, 100.0, 100.0));
        assert_eq!(c.zoom_factor(), 1.0);
        assert_eq!(c.state(), ControllerState::Idle);
    });
}

#[test]
fn detach_all_with_two_controllers() {
    let (_ca, a) = viewer_element("a");
    let (_cb, b) = viewer_element("b");

    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(a.clone() as Rc<dyn HostElement>))
        .unwrap();
    registry
        .attach(AttachParams::new(b.clone() as Rc<dyn HostElement>))
        .unwrap();
    assert_eq!(registry.len(), 2);

    registry.detach(None);

    assert!(registry.is_empty());
    assert_eq!(a.style_count(), 0);
    assert_eq!(b.style_count(), 0);
    assert!(!a.capture_held());
    assert!(!b.capture_held());
}

#[test]
fn detach_one_leaves_the_other_running() {
    let (_ca, a) = viewer_element("a");
    let (_cb, b) = viewer_element("b");

    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(a.clone() as Rc<dyn HostElement>))
        .unwrap();
    registry
        .attach(AttachParams::new(b.clone() as Rc<dyn HostElement>))
        .unwrap();

    // Zoom b so it has live state worth preserving
    registry.with_controller_mut("b", |c| {
        c.handle_input(wheel(1.0, 200.0, 200.0));
    });

    registry.detach(Some("a"));

    assert_eq!(registry.element_ids(), vec!["b"]);
    assert_eq!(a.style_count(), 0);
    assert_eq!(b.style(StyleProperty::Cursor).as_deref(), Some("move"));
    registry.with_controller_mut("b", |c| {
        assert!((c.zoom_factor() - 1.1).abs() < 1e-9);
        assert_eq!(c.state(), ControllerState::Zoomed);
    });
}

#[test]
fn controllers_keep_independent_state() {
    let (_ca, a) = viewer_element("a");
    let (_cb, b) = viewer_element("b");

    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(a as Rc<dyn HostElement>))
        .unwrap();
    registry
        .attach(AttachParams::new(b as Rc<dyn HostElement>))
        .unwrap();

    registry.with_controller_mut("a", |c| {
        c.handle_input(wheel(1.0, 200.0, 200.0));
        c.handle_input(wheel(1.0, 200.0, 200.0));
    });

    assert!((registry.controller("a").unwrap().zoom_factor() - 1.2).abs() < 1e-9);
    assert_eq!(registry.controller("b").unwrap().zoom_factor(), 1.0);
}

#[test]
fn attach_failure_modes() {
    let mut registry = ControllerRegistry::new();

    // No node at all
    assert!(matches!(
        registry.attach(AttachParams::default()),
        Err(ZoomError::MissingNode)
    ));

    // A node outside any container
    let orphan = FixedElement::new("orphan", Rect::from_size(100.0, 100.0));
    assert!(matches!(
        registry.attach(AttachParams::new(orphan as Rc<dyn HostElement>)),
        Err(ZoomError::MissingParent)
    ));

    assert!(registry.is_empty());
}

#[test]
fn json_options_flow_through_attach() {
    let (_container, element) = viewer_element("img");
    let options = InteractionOptions::from_json(r#"{ "zoom_step": 0.5 }"#).unwrap();

    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(element as Rc<dyn HostElement>).options(options))
        .unwrap();

    registry.with_controller_mut("img", |c| {
        c.handle_input(wheel(1.0, 200.0, 200.0));
        assert!((c.zoom_factor() - 1.5).abs() < 1e-9);
    });
}

#[test]
fn handled_events_signal_default_suppression() {
    let (_container, element) = viewer_element("img");
    let mut registry = ControllerRegistry::new();
    registry
        .attach(AttachParams::new(element as Rc<dyn HostElement>))
        .unwrap();

    registry.with_controller_mut("img", |c| {
        assert_eq!(
            c.handle_input(wheel(-1.0, 200.0, 200.0)),
            EventHandled::Handled,
            "wheel ticks are consumed even when they cannot zoom out"
        );
        assert_eq!(c.handle_input(InputEvent::DragStart), EventHandled::Handled);
        assert_eq!(
            c.handle_input(InputEvent::PointerMove {
                position: Point::new(1.0, 1.0)
            }),
            EventHandled::NotHandled,
            "moves without a drag session pass through"
        );
    });
}
