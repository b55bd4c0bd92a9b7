//! Activation listeners attached to rendered cards.
//!
//! Registering returns a [`Disposable`]; a presenter keeps those and
//! disposes them before rendering again, so stale cards never stay wired.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Input modality a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Pointer,
    Keyboard,
}

/// A concrete user activation of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Click,
    Enter,
    Space,
}

impl Activation {
    pub fn trigger(self) -> Trigger {
        match self {
            Activation::Click => Trigger::Pointer,
            Activation::Enter | Activation::Space => Trigger::Keyboard,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    target: usize,
    trigger: Trigger,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
}

/// Handle that removes its listener when disposed.
#[must_use = "dropping a Disposable leaves its listener registered"]
#[derive(Debug)]
pub struct Disposable {
    id: ListenerId,
}

impl Disposable {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns false if the listener was already gone.
    pub fn dispose(self, registry: &mut ListenerRegistry) -> bool {
        registry.listeners.remove(&self.id).is_some()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, target: usize, trigger: Trigger) -> Disposable {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, Listener { target, trigger });
        Disposable { id }
    }

    /// Resolve an activation on `target` to the target it was bound to.
    pub fn dispatch(&self, target: usize, activation: Activation) -> Option<usize> {
        let trigger = activation.trigger();
        self.listeners
            .values()
            .find(|l| l.target == target && l.trigger == trigger)
            .map(|l| l.target)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = ListenerRegistry::new();
        let _click = registry.register(3, Trigger::Pointer);

        assert_eq!(registry.dispatch(3, Activation::Click), Some(3));
        assert_eq!(registry.dispatch(3, Activation::Enter), None);
        assert_eq!(registry.dispatch(4, Activation::Click), None);
    }

    #[test]
    fn test_keyboard_listener_accepts_enter_and_space() {
        let mut registry = ListenerRegistry::new();
        let _keys = registry.register(0, Trigger::Keyboard);

        assert_eq!(registry.dispatch(0, Activation::Enter), Some(0));
        assert_eq!(registry.dispatch(0, Activation::Space), Some(0));
    }

    #[test]
    fn test_dispose_removes_listener() {
        let mut registry = ListenerRegistry::new();
        let a = registry.register(0, Trigger::Pointer);
        let b = registry.register(1, Trigger::Pointer);
        assert_ne!(a.id(), b.id());
        assert_eq!(registry.len(), 2);

        assert!(a.dispose(&mut registry));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch(0, Activation::Click), None);
        assert_eq!(registry.dispatch(1, Activation::Click), Some(1));

        assert!(b.dispose(&mut registry));
        assert!(registry.is_empty());
    }
}
