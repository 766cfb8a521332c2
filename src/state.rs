use crate::auth::repo::CredentialStore;
use crate::config::AppConfig;
use crate::scores::repo::ScoreStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<CredentialStore>,
    pub scores: Arc<ScoreStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Fresh, empty stores around the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self::from_parts(
            Arc::new(config),
            Arc::new(CredentialStore::new()),
            Arc::new(ScoreStore::new()),
        )
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<CredentialStore>,
        scores: Arc<ScoreStore>,
    ) -> Self {
        Self {
            config,
            users,
            scores,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::new(AppConfig::for_tests())
    }
}
