//! Tracks the set of active controllers and owns their lifecycle.

use crate::{
    core::{
        config::InteractionOptions,
        controller::{ZoomCallback, ZoomController},
    },
    host::HostElement,
    Error, Result,
};
use std::rc::Rc;

/// Construction parameters for [`ControllerRegistry::attach`].
///
/// `node` is required; the registry reports its absence as
/// [`Error::MissingNode`] rather than panicking. Callbacks are optional
/// zero-argument notifications fired on zoom threshold crossings.
pub struct AttachParams {
    pub node: Option<Rc<dyn HostElement>>,
    pub on_zoom_in: Option<ZoomCallback>,
    pub on_zoom_out: Option<ZoomCallback>,
    pub options: InteractionOptions,
}

impl AttachParams {
    pub fn new(node: Rc<dyn HostElement>) -> Self {
        Self {
            node: Some(node),
            ..Default::default()
        }
    }

    pub fn on_zoom_in(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_zoom_in = Some(Box::new(callback));
        self
    }

    pub fn on_zoom_out(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_zoom_out = Some(Box::new(callback));
        self
    }

    pub fn options(mut self, options: InteractionOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for AttachParams {
    fn default() -> Self {
        Self {
            node: None,
            on_zoom_in: None,
            on_zoom_out: None,
            options: InteractionOptions::default(),
        }
    }
}

/// An ordered collection of active [`ZoomController`]s: append-only on
/// attach, order-preserving first-match removal on detach. Nothing stops
/// a caller from attaching the same node twice; the duplicate simply gets
/// its own controller.
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: Vec<ZoomController>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller bound to `params.node` and appends it.
    pub fn attach(&mut self, params: AttachParams) -> Result<()> {
        let node = params.node.ok_or(Error::MissingNode)?;
        let controller = ZoomController::attach(
            node,
            params.options,
            params.on_zoom_in,
            params.on_zoom_out,
        )?;
        self.controllers.push(controller);
        Ok(())
    }

    /// Tears down controllers: all of them when `node` is `None`,
    /// otherwise only the first controller bound to the matching element.
    pub fn detach(&mut self, node: Option<&str>) {
        match node {
            None => {
                for controller in &mut self.controllers {
                    controller.teardown();
                }
                self.controllers.clear();
            }
            Some(id) => {
                if let Some(index) = self
                    .controllers
                    .iter()
                    .position(|controller| controller.element_id() == id)
                {
                    self.controllers[index].teardown();
                    self.controllers.remove(index);
                }
            }
        }
    }

    /// Gets a reference to the controller bound to the given element.
    pub fn controller(&self, id: &str) -> Option<&ZoomController> {
        self.controllers
            .iter()
            .find(|controller| controller.element_id() == id)
    }

    /// Applies a function to the controller bound to the given element.
    /// This is how hosts route input events:
    /// `registry.with_controller_mut("img", |c| c.handle_input(event))`.
    pub fn with_controller_mut<F, R>(&mut self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut ZoomController) -> R,
    {
        self.controllers
            .iter_mut()
            .find(|controller| controller.element_id() == id)
            .map(f)
    }

    /// Lists attached element ids in attach order.
    pub fn element_ids(&self) -> Vec<String> {
        self.controllers
            .iter()
            .map(|controller| controller.element_id().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Declared contract point: recompute geometry after a container
    /// resize. Not yet supported.
    pub fn resize(&mut self) -> Result<()> {
        Err(Error::Unsupported("resize"))
    }

    /// Declared contract point: show the minimap overview. Not yet
    /// supported.
    pub fn show_overview(&mut self) -> Result<()> {
        Err(Error::Unsupported("overview"))
    }

    /// Declared contract point: hide the minimap overview. Not yet
    /// supported.
    pub fn hide_overview(&mut self) -> Result<()> {
        Err(Error::Unsupported("overview"))
    }
}
