// ============================================================================
// REACTIVITY - subscriber registry for change notifications
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callbacks fired after every state change. Components register on mount and
/// unsubscribe on unmount, so the list never grows across re-renders.
#[derive(Default)]
pub struct Subscribers {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(SubscriptionId, Callback)>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.callbacks.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify every subscriber. The list is snapshotted first so a callback
    /// may subscribe or unsubscribe without a double borrow.
    pub fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}
