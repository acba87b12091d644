//! Change notification for host-visible tool properties.
//!
//! A host UI (toolbar toggle, glyph picker) subscribes to a tool and is
//! called back with the new value whenever a property is set. Listeners
//! are removed when their [`Subscription`] is dropped.

use std::cell::RefCell;
use std::rc::Rc;

/// A property change, carrying the value that was just set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolProperty {
    Active(bool),
    Character(char),
}

impl ToolProperty {
    /// Stable property name, as shown in host bindings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active(_) => "active",
            Self::Character(_) => "char",
        }
    }
}

pub type PropertyListener = Rc<dyn Fn(ToolProperty)>;

/// Fan-out of property changes to subscribed listeners.
#[derive(Default)]
pub struct PropertyNotifier {
    listeners: Rc<RefCell<Vec<PropertyListener>>>,
}

impl PropertyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: PropertyListener) -> Subscription {
        self.listeners.borrow_mut().push(Rc::clone(&listener));
        Subscription {
            listener,
            listeners: Rc::clone(&self.listeners),
        }
    }

    pub fn notify(&self, change: ToolProperty) {
        log::trace!("notify {} = {change:?}", change.name());
        // Snapshot so a listener may drop its own subscription.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            (listener)(change);
        }
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    listener: PropertyListener,
    listeners: Rc<RefCell<Vec<PropertyListener>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|item| !Rc::ptr_eq(item, &self.listener));
    }
}
