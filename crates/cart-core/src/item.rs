//! # Line Item Types
//!
//! The cart's line items and the add-item intent payload.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// One distinct product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within the cart
    pub id: String,

    /// Display name (not part of identity)
    pub title: String,

    /// Unit price, fixed when the item was first added
    pub price: f64,

    /// Quantity, always at least 1
    pub quantity: u32,
}

impl LineItem {
    /// Create a fresh line item (quantity 1) from an add payload
    pub fn from_payload(payload: &AddItem) -> Self {
        Self {
            id: payload.id.clone(),
            title: payload.title.clone(),
            price: payload.price,
            quantity: 1,
        }
    }

    /// Copy of this item with quantity bumped by one
    pub(crate) fn incremented(&self) -> Self {
        Self {
            quantity: self.quantity.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Payload of the "add item" intent.
///
/// Only `AddItem::new` (or deserialization, which goes through it) can build
/// one, so an `AddItem` in hand always has a non-blank id and a finite,
/// non-negative price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAddItem")]
pub struct AddItem {
    id: String,
    title: String,
    price: f64,
}

#[derive(Deserialize)]
struct RawAddItem {
    id: String,
    title: String,
    price: f64,
}

/// Check a product id the way the cart does: anything but blank.
pub fn validate_id(id: &str) -> CartResult<()> {
    if id.trim().is_empty() {
        return Err(CartError::invalid("id", "must not be empty"));
    }
    Ok(())
}

/// Check a unit price and return it with `-0.0` folded into `0.0`
pub fn validate_price(price: f64) -> CartResult<f64> {
    if !price.is_finite() {
        return Err(CartError::invalid("price", "must be a finite number"));
    }
    if price < 0.0 {
        return Err(CartError::invalid(
            "price",
            format!("must be non-negative, got {price}"),
        ));
    }
    Ok(price + 0.0)
}

impl TryFrom<RawAddItem> for AddItem {
    type Error = CartError;

    fn try_from(raw: RawAddItem) -> CartResult<Self> {
        AddItem::new(raw.id, raw.title, raw.price)
    }
}

impl AddItem {
    /// Validate and build an add-item payload
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> CartResult<Self> {
        let id = id.into();
        validate_id(&id)?;
        let price = validate_price(price)?;

        Ok(Self {
            id,
            title: title.into(),
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
