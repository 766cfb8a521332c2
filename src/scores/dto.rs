use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::scores::repo_types::ScoreRecord;
use crate::validation::{into_string, present};

/// Request body for `POST /high-scores`.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub level: Option<Value>,
    #[serde(rename = "userHandle")]
    pub user_handle: Option<Value>,
    pub score: Option<Value>,
    pub timestamp: Option<Value>,
}

impl SubmitScoreRequest {
    pub fn validate(self) -> AppResult<ScoreRecord> {
        let all_present = [&self.level, &self.user_handle, &self.score, &self.timestamp]
            .into_iter()
            .all(present);
        if !all_present {
            return Err(AppError::validation("Invalid request body"));
        }

        let score = match self.score {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f >= 0.0) => n,
            _ => return Err(AppError::validation("Score must be a positive integer")),
        };

        let (Some(level), Some(user_handle), Some(timestamp)) = (
            into_string(self.level),
            into_string(self.user_handle),
            self.timestamp,
        ) else {
            return Err(AppError::validation("Invalid request body"));
        };

        Ok(ScoreRecord {
            level,
            user_handle,
            score,
            timestamp,
        })
    }
}

/// Query string for `GET /high-scores`.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreQuery {
    pub level: Option<String>,
    pub page: Option<String>,
}
