//! # cart-cli
//!
//! Native shell around the quickcart engine.
//!
//! This crate provides:
//! - `AppConfig` loaded from the environment (`.env` supported)
//! - `AppState` holding the product listing and the cart store
//! - `render_summary` for the cart modal contents
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUICKCART_CATALOG` | searched under `config/` | Product listing (TOML) |
//! | `ENVIRONMENT` | `development` | Deployment environment |
//! | `RUST_LOG` | `info` | Log filter |

pub mod state;
pub mod view;

pub use state::{AppConfig, AppState};
pub use view::render_summary;
