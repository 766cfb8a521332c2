use tracing::{info, warn};

use crate::auth::{
    dto::Credentials,
    jwt::JwtKeys,
    password::{hash_password_blocking, verify_password_blocking},
    repo_types::User,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

const BAD_CREDENTIALS: &str = "Unauthorized, incorrect username or password";

/// Store a new user with a hashed password.
pub async fn register(state: &AppState, creds: Credentials) -> AppResult<()> {
    let unique = state.config.enforce_unique_handles;
    if unique && state.users.find_by_handle(&creds.handle).await.is_some() {
        warn!(handle = %creds.handle, "handle already registered");
        return Err(AppError::validation("User already exists"));
    }

    let password_hash = hash_password_blocking(creds.password).await?;
    let user = User {
        handle: creds.handle,
        password_hash,
    };

    if unique {
        // The lookup above ran before hashing; re-check under the write lock.
        let handle = user.handle.clone();
        if !state.users.add_if_absent(user).await {
            warn!(handle = %handle, "handle registered concurrently");
            return Err(AppError::validation("User already exists"));
        }
        info!(handle = %handle, "user registered");
    } else {
        info!(handle = %user.handle, "user registered");
        state.users.add(user).await;
    }
    Ok(())
}

/// Check credentials and issue a session token for the stored handle.
pub async fn login(state: &AppState, creds: Credentials) -> AppResult<String> {
    let Some(user) = state.users.find_by_handle(&creds.handle).await else {
        warn!(handle = %creds.handle, "login unknown handle");
        return Err(AppError::auth(BAD_CREDENTIALS));
    };

    let ok = verify_password_blocking(creds.password, user.password_hash.clone()).await?;
    if !ok {
        warn!(handle = %user.handle, "login invalid password");
        return Err(AppError::auth(BAD_CREDENTIALS));
    }

    let token = JwtKeys::new(&state.config.jwt).sign(&user.handle)?;
    info!(handle = %user.handle, "user logged in");
    Ok(token)
}
