//! # quickcart
//!
//! Loads the storefront listing, adds the given products to a fresh cart
//! and prints the cart summary.
//!
//! ## Usage
//!
//! ```bash
//! quickcart tee-classic tee-classic chino-slim
//! quickcart --catalog config/products.toml --json cap-logo
//! ```

use cart_cli::{render_summary, AppConfig, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "quickcart", version, about = "Add storefront products to a cart")]
struct Cli {
    /// Product ids to add, one unit each, in order
    products: Vec<String>,

    /// Product listing to load instead of the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the final cart state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut config = AppConfig::from_env();
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }

    let mut state = AppState::new(config)?;
    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.len());

    state
        .store
        .subscribe(|cart| debug!(items = cart.len(), "cart updated"));
    state.add_products(&cli.products)?;

    let cart = state.store.state();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&*cart)?);
    } else {
        println!("{}", render_summary(&cart));
    }

    Ok(())
}
