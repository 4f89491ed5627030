//! # Cart Summary
//!
//! Text rendering of the cart modal contents.

use cart_core::CartState;

/// Render the cart as the modal would show it: a header with the unit
/// count, then one line per item in cart order.
pub fn render_summary(state: &CartState) -> String {
    if state.is_empty() {
        return "Your cart is empty".to_string();
    }

    let units = state.total_quantity();
    let mut out = format!(
        "Your cart ({} {})\n",
        units,
        if units == 1 { "item" } else { "items" }
    );
    for item in state.items() {
        out.push_str(&format!(
            "  {} x {} @ {:.2}\n",
            item.title, item.quantity, item.price
        ));
    }
    out
}
