//! Binding registry: key code → ordered (Binding, Handler) pairs

use std::collections::HashMap;
use std::rc::Rc;

use crate::document::Range;

use super::binding::{Binding, BindingSpec};
use super::types::KeyEvent;

/// An editing-command handler. Receives the document, the selection range
/// fetched for this dispatch, and the raw event for modifier inspection.
///
/// Handlers are reference-counted so removal can match on handler identity.
pub type Handler<D> = Rc<dyn Fn(&mut D, Range, &KeyEvent)>;

/// Stores registered bindings per key code, preserving registration order.
///
/// Order is semantically significant: it determines handler execution order
/// during dispatch. Matching itself is independent per entry.
pub struct BindingRegistry<D> {
    bindings: HashMap<u32, Vec<(Binding, Handler<D>)>>,
}

impl<D> BindingRegistry<D> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Normalize `spec` and append `(binding, handler)` under its key code.
    ///
    /// Appends, never replaces: prior entries for the same key code stay
    /// registered. An invalid spec logs a warning and registers nothing.
    pub fn add(&mut self, spec: impl Into<BindingSpec>, handler: Handler<D>) {
        let spec = spec.into();
        let Some(binding) = spec.normalize() else {
            tracing::warn!("Ignoring invalid key binding: {:?}", spec);
            return;
        };
        self.bindings
            .entry(binding.key_code)
            .or_default()
            .push((binding, handler));
    }

    /// Remove every entry whose binding equals the normalized `spec` on the
    /// full shape, including tri-state modifiers. When `handler` is given,
    /// only entries holding that same handler are removed.
    ///
    /// Returns the removed handlers; empty when normalization fails or no
    /// entries exist for the key code.
    pub fn remove_matching(
        &mut self,
        spec: impl Into<BindingSpec>,
        handler: Option<&Handler<D>>,
    ) -> Vec<Handler<D>> {
        let Some(binding) = spec.into().normalize() else {
            return Vec::new();
        };
        let Some(entries) = self.bindings.get_mut(&binding.key_code) else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        entries.retain(|(stored, stored_handler)| {
            let hit = *stored == binding
                && handler.is_none_or(|target| Rc::ptr_eq(stored_handler, target));
            if hit {
                removed.push(Rc::clone(stored_handler));
            }
            !hit
        });
        removed
    }

    /// Remove one specific handler's entries for an exactly-equal binding.
    pub fn remove_binding(
        &mut self,
        spec: impl Into<BindingSpec>,
        handler: &Handler<D>,
    ) -> Vec<Handler<D>> {
        self.remove_matching(spec, Some(handler))
    }

    /// Registered entries for a key code, in registration order.
    pub fn entries(&self, key_code: u32) -> &[(Binding, Handler<D>)] {
        self.bindings
            .get(&key_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered entries across all key codes.
    pub fn len(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D> Default for BindingRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
