use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    /// Reject signups whose handle collides case-insensitively with an existing one.
    pub enforce_unique_handles: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET_KEY").unwrap_or_else(|_| "12345abc".into()),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "highscores".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "highscores-players".into()),
            ttl_minutes: parse_var("JWT_TTL_MINUTES", 60)?,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("PORT", 3000)?,
            jwt,
            enforce_unique_handles: parse_var("ENFORCE_UNIQUE_HANDLES", false)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("parse {name}={raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            jwt: JwtConfig {
                secret: "test-secret".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 60,
            },
            enforce_unique_handles: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_to_default_when_unset() {
        let port: u16 = parse_var("HIGHSCORES_TEST_UNSET_PORT", 3000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn parse_var_reports_the_offending_variable() {
        std::env::set_var("HIGHSCORES_TEST_BAD_PORT", "not-a-port");
        let err = parse_var::<u16>("HIGHSCORES_TEST_BAD_PORT", 3000).unwrap_err();
        assert!(err.to_string().contains("HIGHSCORES_TEST_BAD_PORT"));
        std::env::remove_var("HIGHSCORES_TEST_BAD_PORT");
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let mut cfg = AppConfig::for_tests();
        cfg.port = 8081;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
    }
}
