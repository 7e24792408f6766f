//! Global pointer-down listeners.
//!
//! The host dispatches every pointer-down it receives, wherever it landed, to
//! all subscribed listeners. Widgets use this to notice interactions outside
//! themselves. A [`Subscription`] removes its listener when dropped, so a
//! listener lives exactly as long as the widget holding it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::layout::Position;

type Listener = Rc<dyn Fn(Position)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Registry of pointer-down listeners shared by every widget on screen
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every pointer-down
    pub fn subscribe(&self, listener: impl Fn(Position) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        tracing::trace!(id, "Pointer listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer-down to every listener.
    /// Listeners may subscribe or unsubscribe while being called; those
    /// changes apply from the next dispatch.
    pub fn dispatch(&self, position: Position) {
        let listeners: Vec<Listener> = self.registry.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener(position);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle to a registered listener; dropping it unsubscribes
#[must_use = "dropping a Subscription removes its listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().listeners.contains_key(&self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Hub already gone: nothing left to unregister from
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(id = self.id, "Pointer listener unsubscribed");
        }
    }
}
