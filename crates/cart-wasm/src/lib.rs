//! # cart-wasm
//!
//! WebAssembly bindings for quickcart-rs.
//!
//! The storefront UI owns one `WasmCart` and dispatches into it; the cart
//! modal reads `items()` back out and re-renders when `revision()` changes.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCart } from 'quickcart-wasm';
//!
//! await init();
//!
//! const cart = new WasmCart();
//! cart.add_item('a', 'Shirt', 20);
//! cart.dispatch({ type: 'add_item', payload: { id: 'b', title: 'Pants', price: 35 } });
//!
//! console.log(cart.items(), cart.total_quantity());
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use cart_core::{item, AddItem, CartAction, CartError, CartResult, CartStore};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: CartError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-side cart: one store per page
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct WasmCart {
    store: CartStore,
}

#[wasm_bindgen]
impl WasmCart {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product. Rejects a blank id or a bad price.
    #[wasm_bindgen]
    pub fn add_item(&mut self, id: String, title: String, price: f64) -> Result<(), JsValue> {
        self.try_add_item(id, title, price).map_err(to_js)
    }

    /// Dispatch an action object, e.g. `{ type: 'add_item', payload: {...} }`
    #[wasm_bindgen]
    pub fn dispatch(&mut self, action: JsValue) -> Result<(), JsValue> {
        let action: CartAction = serde_wasm_bindgen::from_value(action)
            .map_err(|e| JsValue::from_str(&format!("Invalid cart action: {}", e)))?;
        self.store.dispatch(action);
        Ok(())
    }

    /// Dispatch an action given as a JSON string
    #[wasm_bindgen]
    pub fn dispatch_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.try_dispatch_json(json).map_err(to_js)
    }

    /// Line items in insertion order, as plain JS objects
    #[wasm_bindgen]
    pub fn items(&self) -> Result<JsValue, JsValue> {
        let state = self.store.state();
        serde_wasm_bindgen::to_value(state.items())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize cart: {}", e)))
    }

    /// Line items as a JSON string
    #[wasm_bindgen]
    pub fn items_json(&self) -> Result<String, JsValue> {
        self.try_items_json().map_err(to_js)
    }

    /// Number of distinct line items
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.store.select(|s| s.len())
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.store.select(|s| s.is_empty())
    }

    /// Total units in the cart (badge count)
    #[wasm_bindgen]
    pub fn total_quantity(&self) -> u32 {
        let total = self.store.select(|s| s.total_quantity());
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// Bumped on every dispatch; compare to decide whether to re-render
    #[wasm_bindgen]
    pub fn revision(&self) -> f64 {
        self.store.version() as f64
    }
}

impl WasmCart {
    fn try_add_item(&mut self, id: String, title: String, price: f64) -> CartResult<()> {
        let payload = AddItem::new(id, title, price)?;
        self.store.add_item(payload);
        Ok(())
    }

    fn try_dispatch_json(&mut self, json: &str) -> CartResult<()> {
        let action = CartAction::from_json(json)?;
        self.store.dispatch(action);
        Ok(())
    }

    fn try_items_json(&self) -> CartResult<String> {
        let state = self.store.state();
        Ok(serde_json::to_string(state.items())?)
    }
}

/// True if the cart would accept this id in an add-item payload
#[wasm_bindgen]
pub fn validate_product_id(product_id: &str) -> bool {
    item::validate_id(product_id).is_ok()
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read_back() {
        let mut cart = WasmCart::new();
        cart.try_add_item("a".into(), "Shirt".into(), 20.0).unwrap();
        cart.try_add_item("a".into(), "Shirt".into(), 20.0).unwrap();
        cart.try_add_item("b".into(), "Pants".into(), 35.0).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.revision(), 3.0);
        assert_eq!(
            cart.try_items_json().unwrap(),
            r#"[{"id":"a","title":"Shirt","price":20.0,"quantity":2},{"id":"b","title":"Pants","price":35.0,"quantity":1}]"#
        );
    }

    #[test]
    fn test_invalid_add_leaves_cart_untouched() {
        let mut cart = WasmCart::new();
        let err = cart.try_add_item("".into(), "Shirt".into(), 20.0).unwrap_err();
        assert!(err.is_invalid_payload());
        assert!(cart.try_add_item("a".into(), "Shirt".into(), -1.0).is_err());

        assert!(cart.is_empty());
        assert_eq!(cart.revision(), 0.0);
    }

    #[test]
    fn test_dispatch_json() {
        let mut cart = WasmCart::new();
        cart.try_dispatch_json(r#"{"type":"add_item","payload":{"id":"a","title":"Shirt","price":20}}"#)
            .unwrap();
        cart.try_dispatch_json(r#"{"type":"add_item","payload":{"id":"a","title":"Different Name","price":99}}"#)
            .unwrap();

        assert_eq!(
            cart.try_items_json().unwrap(),
            r#"[{"id":"a","title":"Shirt","price":20.0,"quantity":2}]"#
        );
        assert!(cart.try_dispatch_json("{}").is_err());
    }

    #[test]
    fn test_product_id_check_matches_cart() {
        let long_id = "x".repeat(150);
        for id in ["tee-classic", "a b", long_id.as_str()] {
            assert!(validate_product_id(id));
            let mut cart = WasmCart::new();
            assert!(cart.try_add_item(id.into(), "Item".into(), 1.0).is_ok());
        }
        for id in ["", "   "] {
            assert!(!validate_product_id(id));
            let mut cart = WasmCart::new();
            assert!(cart.try_add_item(id.into(), "Item".into(), 1.0).is_err());
        }
    }
}
