use tokio::sync::RwLock;

use crate::scores::repo_types::ScoreRecord;

/// In-memory, append-only score log.
#[derive(Debug, Default)]
pub struct ScoreStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, record: ScoreRecord) {
        self.records.write().await.push(record);
    }

    /// Records with exactly this level, in insertion order.
    pub async fn by_level(&self, level: &str) -> Vec<ScoreRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
