//! Read-only product catalog.
//!
//! The cart only ever references products by [`ProductId`]. Lookups go
//! through the [`ProductLookup`] trait so the reducer can be driven by the
//! built-in [`Catalog`] or by any other source a caller injects.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Errors that can occur when building a [`Catalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
    /// A product has a price below zero.
    #[error("product {id} has a negative price: {price}")]
    NegativePrice {
        /// Offending product.
        id: ProductId,
        /// The rejected price.
        price: Decimal,
    },
    /// The catalog document could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with no description or image.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            image: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Catalog provider consulted by the cart reducer.
pub trait ProductLookup {
    /// Find a product by id, or `None` if the catalog has no such product.
    fn find_by_id(&self, id: &ProductId) -> Option<&Product>;
}

impl<T: ProductLookup + ?Sized> ProductLookup for &T {
    fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        (**self).find_by_id(id)
    }
}

/// An in-memory, validated product list.
///
/// Products keep the order they were supplied in, which is the order the
/// shop displays them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id, or
    /// [`CatalogError::NegativePrice`] if any price is below zero.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a YAML product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed YAML, otherwise the
    /// same validation errors as [`Catalog::new`].
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_yaml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(products)
    }

    /// Parse a JSON product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the
    /// same validation errors as [`Catalog::new`].
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(products)
    }

    /// The built-in products the demo shop ships with.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            Product::new("p1", "Mauve Linen Blazer", Decimal::new(8999, 2))
                .with_description("Relaxed single-breasted blazer in washed linen.")
                .with_image("product-1.jpg"),
            Product::new("p2", "Ivory Silk Blouse", Decimal::new(6450, 2))
                .with_description("Fluid silk blouse with a softly draped neckline.")
                .with_image("product-2.jpg"),
            Product::new("p3", "Charcoal Wool Trousers", Decimal::new(7200, 2))
                .with_description("Tailored high-rise trousers with pressed creases.")
                .with_image("product-3.jpg"),
            Product::new("p4", "Camel Cashmere Scarf", Decimal::new(4999, 2))
                .with_description("Lightweight scarf knitted from pure cashmere.")
                .with_image("product-4.jpg"),
            Product::new("p5", "Olive Leather Tote", Decimal::new(12900, 2))
                .with_description("Structured everyday tote in vegetable-tanned leather.")
                .with_image("product-5.jpg"),
        ];
        Self { products }
    }

    /// Iterate over the products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
