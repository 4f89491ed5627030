//! # Cart Store
//!
//! Single owned container for the cart state. The UI layer holds one
//! `CartStore`, dispatches intents into it and reads through selectors.
//!
//! Each dispatch swaps in a new `Arc<CartState>`, so observers can detect a
//! change by pointer identity (`Arc::ptr_eq`) and old snapshots stay valid.

use crate::item::AddItem;
use crate::state::{reduce, CartAction, CartState};
use std::sync::Arc;
use tracing::debug;

/// Handle returned by [`CartStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartState)>;

/// Owned cart state container
pub struct CartStore {
    state: Arc<CartState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    version: u64,
}

impl CartStore {
    /// Create a store holding an empty cart
    pub fn new() -> Self {
        Self::with_state(CartState::default())
    }

    /// Create a store seeded with an existing state
    pub fn with_state(state: CartState) -> Self {
        Self {
            state: Arc::new(state),
            listeners: Vec::new(),
            next_subscription: 0,
            version: 0,
        }
    }

    /// Apply an action and notify subscribers.
    ///
    /// Actions are applied in call order; listeners run in registration
    /// order after the new state is installed.
    pub fn dispatch(&mut self, action: CartAction) -> Arc<CartState> {
        let next = Arc::new(reduce(&self.state, &action));
        self.state = Arc::clone(&next);
        self.version += 1;

        debug!(
            version = self.version,
            items = next.len(),
            quantity = next.total_quantity(),
            "cart action applied: {:?}",
            action
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&*next);
        }
        next
    }

    /// Dispatch an add-item intent
    pub fn add_item(&mut self, payload: AddItem) -> Arc<CartState> {
        self.dispatch(CartAction::AddItem(payload))
    }

    /// Current state snapshot
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    /// Read a derived value from the current state
    pub fn select<T>(&self, selector: impl FnOnce(&CartState) -> T) -> T {
        selector(self.state.as_ref())
    }

    /// Number of dispatches applied so far
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Register a listener called with the new state after every dispatch
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn add(id: &str, title: &str, price: f64) -> AddItem {
        AddItem::new(id, title, price).unwrap()
    }

    #[test]
    fn test_dispatch_replaces_state_identity() {
        let mut store = CartStore::new();
        let before = store.state();

        let after = store.add_item(add("a", "Shirt", 20.0));

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&after, &store.state()));
        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_repeat_dispatch_is_a_new_value_each_time() {
        let mut store = CartStore::new();
        let first = store.add_item(add("a", "Shirt", 20.0));
        let second = store.add_item(add("a", "Shirt", 20.0));

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.get("a").unwrap().quantity, 1);
        assert_eq!(second.get("a").unwrap().quantity, 2);
    }

    #[test]
    fn test_select() {
        let mut store = CartStore::new();
        store.add_item(add("a", "Shirt", 20.0));
        store.add_item(add("b", "Pants", 35.0));
        store.add_item(add("a", "Shirt", 20.0));

        assert_eq!(store.select(CartState::total_quantity), 3);
        let titles = store.select(|s| s.items().iter().map(|i| i.title.clone()).collect::<Vec<_>>());
        assert_eq!(titles, ["Shirt", "Pants"]);
    }

    #[test]
    fn test_subscribers_see_every_dispatch_in_order() {
        let mut store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.total_quantity()));

        store.add_item(add("a", "Shirt", 20.0));
        store.add_item(add("a", "Shirt", 20.0));
        store.add_item(add("b", "Pants", 35.0));

        assert_eq!(*seen.borrow(), [1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add_item(add("a", "Shirt", 20.0));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(add("a", "Shirt", 20.0));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_with_state_seed() {
        let seed = CartState::new().add_item(&add("a", "Shirt", 20.0));
        let mut store = CartStore::with_state(seed);
        store.add_item(add("a", "Shirt", 20.0));
        assert_eq!(store.state().get("a").unwrap().quantity, 2);
        assert_eq!(store.version(), 1);
    }
}
