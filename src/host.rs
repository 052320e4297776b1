//! The seam between controllers and the host document.
//!
//! Controllers never talk to a concrete UI toolkit or DOM binding; they
//! read geometry from and write inline styles through [`HostElement`].
//! Hosts implement the trait over whatever element handle they have and
//! feed [`crate::input::InputEvent`]s in return.

use crate::core::geom::Rect;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Inline style properties a controller may inject on a host element.
/// Teardown removes exactly this set and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Cursor,
    UserSelect,
    MozUserSelect,
    Transform,
    TransformOrigin,
}

impl StyleProperty {
    /// The CSS property name as written to a style attribute.
    pub fn name(&self) -> &'static str {
        match self {
            StyleProperty::Cursor => "cursor",
            StyleProperty::UserSelect => "user-select",
            StyleProperty::MozUserSelect => "-moz-user-select",
            StyleProperty::Transform => "transform",
            StyleProperty::TransformOrigin => "transform-origin",
        }
    }
}

/// A visual node a controller can be attached to.
///
/// Geometry reads assume the element and its parent sit in a live layout
/// tree; what a zero-sized rect means is up to the host, and the control
/// does not guard against it.
pub trait HostElement {
    /// Stable identity for this element, used to match `detach` calls.
    fn id(&self) -> &str;

    /// The element's current bounding rectangle in screen pixels.
    fn bounding_rect(&self) -> Rect;

    /// The element's layout container, if it has one.
    fn parent(&self) -> Option<Rc<dyn HostElement>>;

    /// Intrinsic pixel height of the hosted content (for an image, its
    /// natural height). Falls back to the layout height.
    fn natural_height(&self) -> f64 {
        self.bounding_rect().height
    }

    /// Writes an inline style property.
    fn set_style(&self, property: StyleProperty, value: &str);

    /// Removes a previously written inline style property.
    fn remove_style(&self, property: StyleProperty);

    /// Acquires document-level pointer observation for a drag session.
    /// Called at most once per session; released by
    /// [`HostElement::end_pointer_capture`].
    fn begin_pointer_capture(&self) {}

    /// Releases the drag-session pointer observation.
    fn end_pointer_capture(&self) {}
}

/// An in-memory [`HostElement`] with fixed geometry and a recorded style
/// map. Backs headless runs and tests; real hosts wrap their own element
/// handles instead.
pub struct FixedElement {
    id: String,
    rect: Rect,
    natural_height: f64,
    parent: Option<Rc<FixedElement>>,
    styles: RefCell<HashMap<StyleProperty, String>>,
    captures_held: Cell<u32>,
    captures_begun: Cell<u32>,
}

impl FixedElement {
    pub fn new(id: impl Into<String>, rect: Rect) -> Rc<Self> {
        let height = rect.height;
        Self::with_natural_height(id, rect, height)
    }

    /// Creates an element whose intrinsic content height differs from its
    /// layout height (a scaled-down image, for instance).
    pub fn with_natural_height(
        id: impl Into<String>,
        rect: Rect,
        natural_height: f64,
    ) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            rect,
            natural_height,
            parent: None,
            styles: RefCell::new(HashMap::new()),
            captures_held: Cell::new(0),
            captures_begun: Cell::new(0),
        })
    }

    /// Creates a child element laid out inside `parent`.
    pub fn child_of(
        parent: &Rc<FixedElement>,
        id: impl Into<String>,
        rect: Rect,
        natural_height: f64,
    ) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            rect,
            natural_height,
            parent: Some(Rc::clone(parent)),
            styles: RefCell::new(HashMap::new()),
            captures_held: Cell::new(0),
            captures_begun: Cell::new(0),
        })
    }

    /// Reads back an injected style value, if present.
    pub fn style(&self, property: StyleProperty) -> Option<String> {
        self.styles.borrow().get(&property).cloned()
    }

    /// Number of injected style properties currently present.
    pub fn style_count(&self) -> usize {
        self.styles.borrow().len()
    }

    /// Whether a drag capture is currently held on this element.
    pub fn capture_held(&self) -> bool {
        self.captures_held.get() > 0
    }

    /// Total number of capture acquisitions over the element's lifetime.
    pub fn captures_begun(&self) -> u32 {
        self.captures_begun.get()
    }
}

impl HostElement for FixedElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn parent(&self) -> Option<Rc<dyn HostElement>> {
        self.parent
            .as_ref()
            .map(|parent| Rc::clone(parent) as Rc<dyn HostElement>)
    }

    fn natural_height(&self) -> f64 {
        self.natural_height
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        self.styles.borrow_mut().insert(property, value.to_string());
    }

    fn remove_style(&self, property: StyleProperty) {
        self.styles.borrow_mut().remove(&property);
    }

    fn begin_pointer_capture(&self) {
        self.captures_held.set(self.captures_held.get() + 1);
        self.captures_begun.set(self.captures_begun.get() + 1);
    }

    fn end_pointer_capture(&self) {
        self.captures_held
            .set(self.captures_held.get().saturating_sub(1));
    }
}
