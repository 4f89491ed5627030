//! # Cart State Engine
//!
//! `CartState` is a plain value. Every transition takes the current state by
//! reference and returns a new one; the input is never touched, so anyone
//! still holding an old snapshot keeps seeing the old items.
//!
//! ```text
//!   CartState ──► reduce(state, CartAction) ──► CartState'
//!                      │
//!                      └── AddItem: id present? ── yes ──► quantity + 1
//!                                              └─ no ──► append, quantity 1
//! ```

use crate::error::{CartError, CartResult};
use crate::item::{validate_id, validate_price, AddItem, LineItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The cart as a whole: line items in insertion order, unique by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCartState")]
pub struct CartState {
    items: Vec<LineItem>,
}

#[derive(Deserialize)]
struct RawCartState {
    items: Vec<LineItem>,
}

/// A saved cart is only accepted if the engine could have produced it:
/// unique non-blank ids, valid prices, quantities of at least 1.
impl TryFrom<RawCartState> for CartState {
    type Error = CartError;

    fn try_from(raw: RawCartState) -> CartResult<Self> {
        let mut seen = HashSet::with_capacity(raw.items.len());
        let mut items = Vec::with_capacity(raw.items.len());
        for mut item in raw.items {
            validate_id(&item.id)?;
            item.price = validate_price(item.price)?;
            if item.quantity == 0 {
                return Err(CartError::invalid("quantity", "must be at least 1"));
            }
            if !seen.insert(item.id.clone()) {
                return Err(CartError::invalid(
                    "id",
                    format!("{:?} appears more than once", item.id),
                ));
            }
            items.push(item);
        }
        Ok(CartState { items })
    }
}

impl CartState {
    /// Empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an add-item intent and return the next state.
    ///
    /// A repeat add for an id already in the cart only bumps its quantity;
    /// the title and price from the first insertion are kept even when the
    /// payload carries different ones.
    pub fn add_item(&self, payload: &AddItem) -> CartState {
        let mut items = self.items.clone();
        match items.iter().position(|item| item.id == payload.id()) {
            Some(index) => items[index] = items[index].incremented(),
            None => items.push(LineItem::from_payload(payload)),
        }
        CartState { items }
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Find an item by id
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all items (cart badge count)
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Intents that can be dispatched against the cart.
///
/// Only adding is supported; removal, decrement and clear would be new
/// variants here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product
    AddItem(AddItem),
}

impl CartAction {
    /// Parse an action from its JSON form, e.g.
    /// `{"type":"add_item","payload":{"id":"a","title":"Shirt","price":20}}`
    pub fn from_json(json: &str) -> CartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<AddItem> for CartAction {
    fn from(payload: AddItem) -> Self {
        CartAction::AddItem(payload)
    }
}

/// Apply an action to a state, producing the next state
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddItem(payload) => state.add_item(payload),
    }
}
