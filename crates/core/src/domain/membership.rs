use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MembershipId(pub String);

/// A recurring membership plan with its marketing copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub name: String,
    pub price: Decimal,
    pub price_description: String,
    pub description: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}
