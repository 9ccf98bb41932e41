//! Keyboard dispatcher: resolves key events to handlers and runs them

use std::rc::Rc;

use crate::document::Document;

use super::binding::{Binding, BindingSpec};
use super::handlers::{on_delete, on_enter, on_format, on_tab};
use super::registry::{BindingRegistry, Handler};
use super::types::{keys, KeyEvent, Platform};

/// Owns the binding registry and dispatches raw key events against it.
///
/// Dispatch is synchronous and runs to completion: all handlers matching
/// one event execute sequentially, then the caller decides whether to
/// suppress the event's default action based on the return value.
pub struct Keyboard<D> {
    registry: BindingRegistry<D>,
    platform: Platform,
}

impl<D> Keyboard<D> {
    /// An empty keyboard using the build-target platform convention.
    pub fn new() -> Self {
        Self::on_platform(Platform::current())
    }

    /// An empty keyboard with an explicit modifier convention.
    pub fn on_platform(platform: Platform) -> Self {
        Self {
            registry: BindingRegistry::new(),
            platform,
        }
    }

    /// Register a handler for a binding spec. Invalid specs log a warning
    /// and register nothing; registration order is preserved per key code.
    pub fn add_binding(&mut self, spec: impl Into<BindingSpec>, handler: Handler<D>) {
        self.registry.add(spec, handler);
    }

    /// Remove entries exactly equal to the normalized spec, optionally
    /// restricted to one handler. Returns the removed handlers.
    pub fn remove_matching(
        &mut self,
        spec: impl Into<BindingSpec>,
        handler: Option<&Handler<D>>,
    ) -> Vec<Handler<D>> {
        self.registry.remove_matching(spec, handler)
    }

    /// Remove one specific handler's entries for an exactly-equal binding.
    pub fn remove_binding(
        &mut self,
        spec: impl Into<BindingSpec>,
        handler: &Handler<D>,
    ) -> Vec<Handler<D>> {
        self.registry.remove_binding(spec, handler)
    }

    /// Whether a binding's modifier constraints admit this event under the
    /// keyboard's platform convention. Key-code equality is not checked
    /// here; the registry already buckets entries by key code.
    pub fn matches(&self, event: &KeyEvent, binding: &Binding) -> bool {
        binding.meta_or_ctrl.admits(self.platform.meta_signal(event))
            && binding.shift.admits(event.shift)
            && binding.alt.admits(event.alt)
    }
}

impl<D: Document> Keyboard<D> {
    /// A keyboard pre-loaded with the stock editing bindings:
    /// Meta+B/I/U format toggles, Enter, Backspace, Delete, and Tab.
    pub fn with_defaults() -> Self {
        let mut keyboard = Self::new();
        keyboard.register_defaults();
        keyboard
    }

    fn register_defaults(&mut self) {
        self.add_binding(
            BindingSpec::key('b').meta(true),
            Rc::new(|doc, range, _| on_format(doc, "bold", range)),
        );
        self.add_binding(
            BindingSpec::key('i').meta(true),
            Rc::new(|doc, range, _| on_format(doc, "italic", range)),
        );
        self.add_binding(
            BindingSpec::key('u').meta(true),
            Rc::new(|doc, range, _| on_format(doc, "underline", range)),
        );
        self.add_binding(keys::ENTER, Rc::new(|doc, range, _| on_enter(doc, range)));
        self.add_binding(
            keys::BACKSPACE,
            Rc::new(|doc, range, _| on_delete(doc, true, range)),
        );
        self.add_binding(
            keys::DELETE,
            Rc::new(|doc, range, _| on_delete(doc, false, range)),
        );
        self.add_binding(
            keys::TAB,
            Rc::new(|doc, range, event| {
                on_tab(doc, range, event);
            }),
        );
    }

    /// Dispatch a raw key event.
    ///
    /// Finds all registered bindings for the event's key code whose modifier
    /// constraints match, fetches the selection range once, and invokes the
    /// handlers in registration order. Returns `true` iff at least one
    /// handler ran, in which case the caller must suppress the event's
    /// default action.
    ///
    /// Ordering contract: all matched handlers observe the same range
    /// snapshot. A handler must not assume siblings earlier in the same
    /// dispatch left the document unchanged.
    pub fn dispatch(&self, doc: &mut D, event: &KeyEvent) -> bool {
        let matched: Vec<Handler<D>> = self
            .registry
            .entries(event.key_code)
            .iter()
            .filter(|(binding, _)| self.matches(event, binding))
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        if matched.is_empty() {
            return false;
        }

        tracing::debug!(
            key_code = event.key_code,
            handlers = matched.len(),
            "dispatching key event"
        );

        let range = doc.selection();
        for handler in matched {
            handler(doc, range, event);
        }
        true
    }
}

impl<D> Default for Keyboard<D> {
    fn default() -> Self {
        Self::new()
    }
}
