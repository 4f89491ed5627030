//! # cart-core
//!
//! Cart state engine for the quickcart storefront.
//!
//! This crate provides:
//! - `CartState` and the pure `add_item` transition
//! - `AddItem` payloads, validated at construction
//! - `CartAction` and `reduce` for dispatching intents
//! - `CartStore`, the owned container the UI dispatches into
//! - `Product` and `ProductCatalog` for the storefront listing
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{AddItem, CartStore};
//!
//! let mut store = CartStore::new();
//! store.add_item(AddItem::new("a", "Shirt", 20.0)?);
//! store.add_item(AddItem::new("a", "Shirt", 20.0)?);
//!
//! let state = store.state();
//! assert_eq!(state.items()[0].quantity, 2);
//! # Ok::<(), cart_core::CartError>(())
//! ```

pub mod error;
pub mod item;
pub mod product;
pub mod state;
pub mod store;

// Re-exports for convenience
pub use error::{CartError, CartResult};
pub use item::{AddItem, LineItem};
pub use product::{Product, ProductCatalog};
pub use state::{reduce, CartAction, CartState};
pub use store::{CartStore, SubscriptionId};
