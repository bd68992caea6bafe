//! # Product Catalog
//!
//! The fixed lookup table of sellable products, loaded once at startup.
//!
//! ## Dataset Format
//! ```text
//! [
//!   { "itemName": "Potato Chips", "category": "snacks",
//!     "description": "Original salted, 50 g", "unitPrice": 20, "inventory": 150 },
//!   ...
//! ]
//! ```
//! Product ids are assigned as the 1-based position in this array, so the
//! order of the dataset is part of its identity.
//!
//! A default dataset is embedded at compile time ([`ProductCatalog::builtin`]);
//! callers that read an alternative file pass its contents to
//! [`ProductCatalog::from_json`].

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_price_cents;

/// The dataset shipped with the dashboard.
const BUILTIN_CATALOG: &str = include_str!("../../../data/pos_items.json");

/// Category key → display name used by charts and tables.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("stationary", "Stationery"),
    ("small_it_gadgets", "IT Gadgets"),
    ("snacks", "Snacks"),
    ("consumer_products", "Consumer Products"),
    ("simple_medicines", "Medicines"),
];

/// Resolves a category key to its display name.
///
/// Unmapped keys pass through verbatim.
///
/// ## Example
/// ```rust
/// use pos_core::category_label;
///
/// assert_eq!(category_label("small_it_gadgets"), "IT Gadgets");
/// assert_eq!(category_label("garden"), "garden");
/// ```
pub fn category_label(key: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// One record of the catalog dataset, as stored on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    item_name: String,
    category: String,
    #[serde(default)]
    description: String,
    /// The number's shortest decimal rendering is parsed into exact cents.
    unit_price: serde_json::Number,
    #[serde(default)]
    inventory: i64,
}

/// Read-only product lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Loads the dataset embedded in the binary.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a catalog dataset and assigns 1-based ids in load order.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidCatalog`] if the JSON does not match the dataset
    ///   format or a price is not a valid amount
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;

        let products = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let price = Money::parse_decimal(&record.unit_price.to_string())
                    .and_then(|price| validate_price_cents(price.cents()).map(|_| price))
                    .map_err(|e| {
                        CoreError::InvalidCatalog(format!("{}: {}", record.item_name, e))
                    })?;

                Ok(Product {
                    id: index as i64 + 1,
                    name: record.item_name,
                    category: record.category,
                    description: record.description,
                    unit_price_cents: price.cents(),
                    inventory: record.inventory,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(ProductCatalog { products })
    }

    /// Looks up a product by its catalog id.
    pub fn get(&self, id: i64) -> Option<&Product> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.products.get(index)
    }

    /// Looks up a product, failing with [`CoreError::ProductNotFound`].
    pub fn require(&self, id: i64) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
