use serde::{Deserialize, Serialize};

/// The signed-in user as `/api/auth/current` reports it. The endpoint
/// answers `null` for anonymous visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub avatar: String,
    #[serde(rename = "_id")]
    pub id: String,
}
