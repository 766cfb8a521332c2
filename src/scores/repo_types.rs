use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A submitted high score. `score` and `timestamp` keep the JSON exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub level: String,
    #[serde(rename = "userHandle")]
    pub user_handle: String,
    pub score: Number,
    pub timestamp: Value,
}

impl ScoreRecord {
    /// Numeric value used for ordering.
    pub fn value(&self) -> f64 {
        self.score.as_f64().unwrap_or_default()
    }
}
