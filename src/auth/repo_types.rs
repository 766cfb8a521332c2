use serde::{Deserialize, Serialize};

/// Registered user held in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Handle as registered, original casing.
    #[serde(rename = "userHandle")]
    pub handle: String,
    /// Argon2 PHC string, not exposed in JSON.
    #[serde(skip_serializing)]
    pub password_hash: String,
}
