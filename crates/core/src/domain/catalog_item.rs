use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// A wellness service offered by professionals. The descriptive text fields
/// (`name`, `description`, `category`) are the ones the concierge matcher
/// scans; the commercial attributes are irrelevant to matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellnessService {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub rating: f64,
    pub review_count: u32,
    pub duration_minutes: u32,
}

/// A wellness product sold in the storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
}
