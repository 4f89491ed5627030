//! # Product Listing
//!
//! Storefront products that feed add-item intents into the cart.
//! Products are loaded from `config/products.toml`.

use crate::error::{CartError, CartResult};
use crate::item::AddItem;
use serde::{Deserialize, Serialize};

/// A product shown in the storefront listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g., "tee-classic")
    pub id: String,

    /// Display name
    pub title: String,

    /// Unit price
    pub price: f64,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: None,
            image_url: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// The add-item intent for one unit of this product
    pub fn to_add_item(&self) -> CartResult<AddItem> {
        AddItem::new(self.id.clone(), self.title.clone(), self.price)
    }
}

/// Product listing (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the listing
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by ID, failing with `ProductNotFound`
    pub fn require(&self, id: &str) -> CartResult<&Product> {
        self.get(id).ok_or_else(|| CartError::ProductNotFound {
            product_id: id.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load the listing from a TOML string.
    ///
    /// Every product must produce a valid add payload, so a listing with a
    /// blank id or a negative price is rejected here rather than at the cart.
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        let catalog: ProductCatalog = toml::from_str(toml_str)?;
        for product in &catalog.products {
            product.to_add_item().map_err(|e| {
                CartError::Catalog(format!("product {:?}: {}", product.id, e))
            })?;
        }
        Ok(catalog)
    }
}
