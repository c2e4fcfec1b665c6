use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable identifier assigned to a product when the catalog is loaded.
/// Cart lines are keyed by this, never by the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product-{}", self.0)
    }
}

/// Image URLs keyed by size variant (`thumbnail`, `mobile`, `tablet`, `desktop`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSet(BTreeMap<String, String>);

impl ImageSet {
    pub const DESKTOP: &'static str = "desktop";

    /// Look up the URL for a variant
    pub fn variant(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// URL of the desktop variant, the one rendered on product cards
    pub fn desktop(&self) -> Option<&str> {
        self.variant(Self::DESKTOP)
    }
}

impl<K, V> FromIterator<(K, V)> for ImageSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One record of the catalog document as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub image: ImageSet,
}

/// A purchasable product. Read-only once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: ImageSet,
}

impl Product {
    pub fn from_record(id: ProductId, record: ProductRecord) -> Self {
        Self {
            id,
            name: record.name,
            category: record.category,
            price: record.price,
            image: record.image,
        }
    }
}

/// The product list fetched once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, assigning ids in document order
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let products = records
            .into_iter()
            .zip(0u32..)
            .map(|(record, raw)| Product::from_record(ProductId::new(raw), record))
            .collect();
        Self { products }
    }

    /// Accept a decoded catalog document. A `null` document is rejected.
    pub fn from_payload(payload: Option<Vec<ProductRecord>>) -> Result<Self, CatalogError> {
        payload
            .map(Self::from_records)
            .ok_or(CatalogError::MissingData)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
