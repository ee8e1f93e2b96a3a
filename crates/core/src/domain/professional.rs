use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionalId(pub String);

/// A verified wellness professional offering services in the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
