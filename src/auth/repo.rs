use tokio::sync::RwLock;

use crate::auth::repo_types::User;

/// In-memory user collection. Handles compare case-insensitively.
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: RwLock<Vec<User>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user without any uniqueness check.
    pub async fn add(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Append a user unless the handle is already taken. Returns whether it was stored.
    pub async fn add_if_absent(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        let needle = user.handle.to_lowercase();
        if users.iter().any(|u| u.handle.to_lowercase() == needle) {
            return false;
        }
        users.push(user);
        true
    }

    /// First user, in registration order, whose handle matches ignoring case.
    pub async fn find_by_handle(&self, handle: &str) -> Option<User> {
        let needle = handle.to_lowercase();
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.handle.to_lowercase() == needle)
            .cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
