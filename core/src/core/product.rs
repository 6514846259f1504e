// trolley/src/core/product.rs

//! The priced entity as the cart and comparison set see it: a snapshot
//! frozen at add time, never re-fetched or live-synced afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminates the two purchasable catalog families. The serialized form
/// doubles as the prefix of a line item's composite id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
  Equipment,
  Bundle,
}

impl ProductKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProductKind::Equipment => "EQUIPMENT",
      ProductKind::Bundle => "BUNDLE",
    }
  }
}

impl fmt::Display for ProductKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A point-in-time copy of the product the shopper acted on.
///
/// Prices are integer cents. The price recorded here is the price charged
/// for the lifetime of the cart entry, regardless of later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
  pub id: String,
  pub name: String,
  pub price_cents: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_price_cents: Option<i64>,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub stock: u32,
}

impl ProductSnapshot {
  /// Convenience constructor for the common case; optional fields default.
  pub fn new<S: Into<String>>(id: S, name: S, price_cents: i64) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      price_cents,
      original_price_cents: None,
      images: Vec::new(),
      stock: 0,
    }
  }
}
