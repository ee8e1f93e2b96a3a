use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::membership::MembershipId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub loyalty_points: i64,
    pub is_admin: bool,
    pub is_professional: bool,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_id: Option<MembershipId>,
}
