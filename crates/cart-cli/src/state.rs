//! # Application State
//!
//! Configuration, product listing and the cart store for the shell.

use anyhow::Context;
use cart_core::{AddItem, CartResult, CartStore, ProductCatalog};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CATALOG_PATHS: [&str; 3] = [
    "config/products.toml",
    "../config/products.toml",
    "../../config/products.toml",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit product listing path; searched for when unset
    pub catalog_path: Option<PathBuf>,
    /// Environment (development, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            catalog_path: catalog_path_from(std::env::var_os("QUICKCART_CATALOG")),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Override the listing path (from the command line)
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// An unset or empty `QUICKCART_CATALOG` means "search the default paths"
fn catalog_path_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Shell state: one listing, one cart
#[derive(Debug)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Product listing
    pub catalog: ProductCatalog,
    /// The cart
    pub store: CartStore,
}

impl AppState {
    /// Load the product listing and start with an empty cart
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => find_catalog()?,
        };

        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: AppConfig, catalog: ProductCatalog) -> Self {
        Self {
            config,
            catalog,
            store: CartStore::new(),
        }
    }

    /// Add one unit of each product id, in order.
    ///
    /// Every id is resolved against the listing first, so an unknown id
    /// leaves the cart untouched.
    pub fn add_products<S: AsRef<str>>(&mut self, ids: &[S]) -> anyhow::Result<()> {
        let payloads = ids
            .iter()
            .map(|id| -> CartResult<AddItem> {
                let product = self.catalog.require(id.as_ref())?;
                product.to_add_item()
            })
            .collect::<CartResult<Vec<_>>>()?;

        for payload in payloads {
            info!(product_id = payload.id(), "adding to cart");
            self.store.add_item(payload);
        }
        Ok(())
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<ProductCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let catalog = ProductCatalog::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn find_catalog() -> anyhow::Result<ProductCatalog> {
    for path in CATALOG_PATHS {
        let path = Path::new(path);
        if path.is_file() {
            return load_catalog(path);
        }
    }

    warn!("No product listing found, using empty catalog");
    Ok(ProductCatalog::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{CartError, Product};

    fn test_state() -> AppState {
        let mut catalog = ProductCatalog::new();
        catalog.add(Product::new("a", "Shirt", 20.0));
        catalog.add(Product::new("b", "Pants", 35.0));
        let config = AppConfig {
            catalog_path: None,
            environment: "test".to_string(),
        };
        AppState::with_catalog(config, catalog)
    }

    #[test]
    fn test_add_products_in_order() {
        let mut state = test_state();
        state.add_products(&["a", "a", "b"]).unwrap();

        let cart = state.store.state();
        let summary: Vec<(&str, u32)> = cart
            .items()
            .iter()
            .map(|i| (i.id.as_str(), i.quantity))
            .collect();
        assert_eq!(summary, [("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_unknown_product_adds_nothing() {
        let mut state = test_state();
        let err = state.add_products(&["a", "nope"]).unwrap_err();

        assert_eq!(
            err.downcast_ref::<CartError>(),
            Some(&CartError::ProductNotFound {
                product_id: "nope".into()
            })
        );
        assert!(state.store.state().is_empty());
        assert_eq!(state.store.version(), 0);
    }

    #[test]
    fn test_load_bundled_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/products.toml");
        let config = AppConfig {
            catalog_path: None,
            environment: "test".to_string(),
        }
        .with_catalog_path(path);

        let state = AppState::new(config).unwrap();
        assert!(state.catalog.get("tee-classic").is_some());
        assert!(!state.config.is_production());
    }

    #[test]
    fn test_empty_catalog_env_falls_back_to_search() {
        assert_eq!(catalog_path_from(None), None);
        assert_eq!(catalog_path_from(Some(OsString::new())), None);
        assert_eq!(
            catalog_path_from(Some(OsString::from("shop/products.toml"))),
            Some(PathBuf::from("shop/products.toml"))
        );
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("does/not/exist.toml")),
            environment: "test".to_string(),
        };
        assert!(AppState::new(config).is_err());
    }
}
