use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::validation::{char_len, into_string, present, MIN_CREDENTIAL_LEN};

/// Handle + plaintext password that passed shape validation.
#[derive(Clone)]
pub struct Credentials {
    pub handle: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("handle", &self.handle)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "userHandle")]
    pub user_handle: Option<Value>,
    pub password: Option<Value>,
}

impl SignupRequest {
    pub fn validate(self) -> AppResult<Credentials> {
        if !present(&self.user_handle) || !present(&self.password) {
            return Err(AppError::validation("Invalid request body"));
        }
        let (Some(handle), Some(password)) =
            (into_string(self.user_handle), into_string(self.password))
        else {
            return Err(AppError::validation("Invalid request body"));
        };
        if char_len(&handle) < MIN_CREDENTIAL_LEN || char_len(&password) < MIN_CREDENTIAL_LEN {
            return Err(AppError::validation(
                "UserHandle and password have at least 6 characters",
            ));
        }
        Ok(Credentials { handle, password })
    }
}

/// Request body for `POST /login`. Anything besides the two known keys lands in `extra`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userHandle")]
    pub user_handle: Option<Value>,
    pub password: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginRequest {
    pub fn validate(self) -> AppResult<Credentials> {
        if !self.extra.is_empty() {
            return Err(AppError::validation("Request contains unexpected fields"));
        }
        let (Some(handle), Some(password)) =
            (into_string(self.user_handle), into_string(self.password))
        else {
            return Err(AppError::validation(
                "Invalid data type for userHandle or password",
            ));
        };
        if handle.is_empty() || password.is_empty() {
            return Err(AppError::validation("Invalid request body"));
        }
        Ok(Credentials { handle, password })
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "jsonWebToken")]
    pub json_web_token: String,
}
