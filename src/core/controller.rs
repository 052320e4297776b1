use crate::{
    core::{
        config::InteractionOptions,
        constants::{MIN_ZOOM_FACTOR, ZOOM_EPSILON},
        geom::{Point, Rect},
        transform::{PanBounds, Transform},
    },
    host::{HostElement, StyleProperty},
    input::{EventHandled, InputEvent, WheelDelta, WheelDirection},
    Error, Result,
};
use std::rc::Rc;

/// Threshold-crossing notification callback type
pub type ZoomCallback = Box<dyn Fn()>;

/// Observable interaction state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// At identity zoom; dragging has no effect
    Idle,
    /// Zoomed in, no drag session active
    Zoomed,
    /// Zoomed in with an active drag session
    Dragging,
}

/// An active drag: held exactly while document-level pointer observation
/// is acquired on the host, and dropped when the pointer is released or
/// leaves the document.
struct DragSession {
    click: Point,
}

/// Owns one element's pan/zoom state: converts input events into
/// transform updates, enforces the clamping invariants, and renders the
/// transform to the element as inline style.
pub struct ZoomController {
    element: Rc<dyn HostElement>,
    parent: Rc<dyn HostElement>,

    /// Element geometry; refreshed from the live layout on every wheel tick
    element_rect: Rect,
    /// Container geometry snapshot taken at attach time
    parent_rect: Rect,
    /// Parent-minus-element size at attach time, assumed constant after
    delta_width: f64,
    delta_height: f64,

    options: InteractionOptions,

    zoom_factor: f64,
    max_zoom_factor: f64,
    transform_origin: Point,

    translate: Point,
    last_translate: Point,
    pan_bounds: PanBounds,

    drag: Option<DragSession>,

    on_zoom_in: Option<ZoomCallback>,
    on_zoom_out: Option<ZoomCallback>,
}

impl ZoomController {
    /// Binds a controller to `element`: snapshots geometry, computes the
    /// zoom ceiling from the content's natural height, and injects the
    /// interaction styles on the element and its container.
    pub fn attach(
        element: Rc<dyn HostElement>,
        options: InteractionOptions,
        on_zoom_in: Option<ZoomCallback>,
        on_zoom_out: Option<ZoomCallback>,
    ) -> Result<Self> {
        let parent = element.parent().ok_or(Error::MissingParent)?;

        let element_rect = element.bounding_rect();
        let parent_rect = parent.bounding_rect();
        let delta_width = parent_rect.width - element_rect.width;
        let delta_height = parent_rect.height - element_rect.height;

        // Cap zoom so the content cannot exceed twice its natural pixel
        // height relative to the container.
        let max_zoom_factor = element.natural_height() * 2.0 / parent_rect.height;

        element.set_style(StyleProperty::Cursor, "move");
        element.set_style(StyleProperty::UserSelect, "none");
        element.set_style(StyleProperty::MozUserSelect, "none");
        parent.set_style(StyleProperty::UserSelect, "none");
        parent.set_style(StyleProperty::MozUserSelect, "none");

        log::debug!(
            "attached controller to '{}' (max zoom factor {:.3})",
            element.id(),
            max_zoom_factor
        );

        Ok(Self {
            element,
            parent,
            element_rect,
            parent_rect,
            delta_width,
            delta_height,
            options,
            zoom_factor: MIN_ZOOM_FACTOR,
            max_zoom_factor,
            transform_origin: Point::new(0.0, 0.0),
            translate: Point::new(0.0, 0.0),
            last_translate: Point::new(0.0, 0.0),
            pan_bounds: PanBounds::zero(),
            drag: None,
            on_zoom_in,
            on_zoom_out,
        })
    }

    /// Dispatches one input event. Hosts should suppress their default
    /// handling when `Handled` comes back.
    pub fn handle_input(&mut self, event: InputEvent) -> EventHandled {
        match event {
            InputEvent::PointerDown { position } => self.on_pointer_down(position),
            InputEvent::PointerMove { position } => self.on_pointer_move(position),
            InputEvent::PointerUp | InputEvent::PointerLeave => self.on_pointer_end(),
            InputEvent::Wheel { delta, position } => self.on_wheel(delta, position),
            // Native drag gestures on the element are always suppressed
            InputEvent::DragStart => EventHandled::Handled,
        }
    }

    fn on_pointer_down(&mut self, position: Point) -> EventHandled {
        if !self.options.dragging {
            return EventHandled::NotHandled;
        }

        match self.drag.as_mut() {
            // Repeated press while already observing: rebase the click point
            Some(session) => session.click = position,
            None => {
                self.element.begin_pointer_capture();
                self.drag = Some(DragSession { click: position });
            }
        }

        EventHandled::Handled
    }

    fn on_pointer_move(&mut self, position: Point) -> EventHandled {
        let Some(session) = &self.drag else {
            return EventHandled::NotHandled;
        };
        // Dragging only pans when actually zoomed in
        if self.at_min_zoom() {
            return EventHandled::NotHandled;
        }

        self.translate = self
            .last_translate
            .add(&position.subtract(&session.click));
        self.apply_transform();

        EventHandled::Handled
    }

    fn on_pointer_end(&mut self) -> EventHandled {
        if self.drag.take().is_none() {
            return EventHandled::NotHandled;
        }

        self.element.end_pointer_capture();
        // The next drag continues from here, not from the origin
        self.last_translate = self.translate;

        EventHandled::Handled
    }

    fn on_wheel(&mut self, delta: WheelDelta, position: Point) -> EventHandled {
        if !self.options.scroll_wheel_zoom {
            return EventHandled::NotHandled;
        }

        let step = match delta.direction() {
            WheelDirection::In => self.options.zoom_step,
            WheelDirection::Out => -self.options.zoom_step,
        };

        // Already at minimum zoom: an outward tick is consumed but does nothing
        if self.at_min_zoom() && step < 0.0 {
            return EventHandled::Handled;
        }

        if self.at_min_zoom() && step > 0.0 {
            log::debug!("'{}' crossing zoom-in threshold", self.element.id());
            if let Some(callback) = &self.on_zoom_in {
                callback();
            }
        }

        let prospective = self.zoom_factor + step;
        if (prospective - MIN_ZOOM_FACTOR).abs() < ZOOM_EPSILON {
            log::debug!("'{}' crossing zoom-out threshold", self.element.id());
            if let Some(callback) = &self.on_zoom_out {
                callback();
            }
        }

        self.zoom_factor = if prospective <= self.max_zoom_factor {
            prospective
        } else {
            self.max_zoom_factor
        };

        if self.zoom_factor > MIN_ZOOM_FACTOR + ZOOM_EPSILON {
            self.element_rect = self.element.bounding_rect();

            // The pan range widens as zoom grows; only the lower bound
            // tracks the factor, the upper bound keeps its last value.
            self.pan_bounds.min = Point::new(
                -((self.parent_rect.width - self.delta_width) * self.zoom_factor
                    - self.parent_rect.width),
                -((self.parent_rect.height - self.delta_height) * self.zoom_factor
                    - self.parent_rect.height),
            );

            // Recenter so the point under the cursor lands in the middle
            // of the container viewport.
            let cursor = self.element_rect.relative_to(&position);
            self.translate = Point::new(
                self.parent_rect.width / 2.0 - cursor.x,
                self.parent_rect.height / 2.0 - cursor.y,
            );
            self.last_translate = self.translate;

            self.apply_transform();
        } else {
            // Landed on (or below) the identity threshold: snap back to
            // the untransformed state.
            self.reset_to_identity();
            self.apply_transform();
        }

        EventHandled::Handled
    }

    fn reset_to_identity(&mut self) {
        self.zoom_factor = MIN_ZOOM_FACTOR;
        self.translate = Point::new(0.0, 0.0);
        self.last_translate = Point::new(0.0, 0.0);
        self.pan_bounds = PanBounds::zero();
    }

    /// The single clamp-before-paint point: limits the translation into
    /// the pan window, then writes the transform through the host.
    /// Handlers are free to store out-of-range offsets; only this clamps.
    fn apply_transform(&mut self) {
        self.translate = self.pan_bounds.limit(self.translate);

        let transform = self.transform();
        self.element
            .set_style(StyleProperty::TransformOrigin, &transform.origin_css());
        self.element
            .set_style(StyleProperty::Transform, &transform.to_css());

        log::trace!("'{}' zoom factor {}", self.element.id(), self.zoom_factor);
    }

    /// Releases any held drag capture and reverts every injected style on
    /// the element and its container. Call exactly once per attach.
    pub fn teardown(&mut self) {
        if self.drag.take().is_some() {
            self.element.end_pointer_capture();
        }

        for property in [
            StyleProperty::TransformOrigin,
            StyleProperty::Transform,
            StyleProperty::Cursor,
            StyleProperty::UserSelect,
            StyleProperty::MozUserSelect,
        ] {
            self.element.remove_style(property);
        }
        self.parent.remove_style(StyleProperty::UserSelect);
        self.parent.remove_style(StyleProperty::MozUserSelect);

        log::debug!("detached controller from '{}'", self.element.id());
    }

    fn at_min_zoom(&self) -> bool {
        (self.zoom_factor - MIN_ZOOM_FACTOR).abs() < ZOOM_EPSILON
    }

    /// Identity of the element this controller is bound to.
    pub fn element_id(&self) -> &str {
        self.element.id()
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn max_zoom_factor(&self) -> f64 {
        self.max_zoom_factor
    }

    /// The current (clamped-at-last-render) pan offset in pixels.
    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn pan_bounds(&self) -> PanBounds {
        self.pan_bounds
    }

    /// The transform as last rendered to the element.
    pub fn transform(&self) -> Transform {
        Transform::new(self.translate, self.zoom_factor, self.transform_origin)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn state(&self) -> ControllerState {
        if self.at_min_zoom() {
            ControllerState::Idle
        } else if self.drag.is_some() {
            ControllerState::Dragging
        } else {
            ControllerState::Zoomed
        }
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }
}
