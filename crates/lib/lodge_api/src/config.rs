//! API server configuration.

use lodge_core::auth::bootstrap::SeedAdmin;
use lodge_core::auth::jwt::resolve_jwt_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Admin account created on first run, if configured.
    pub seed_admin: Option<SeedAdmin>,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                 | Default                              |
    /// |--------------------------|--------------------------------------|
    /// | `BIND_ADDR`              | `127.0.0.1:3100`                     |
    /// | `DATABASE_URL`           | `postgres://localhost:5432/lodge`    |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file    |
    /// | `SEED_ADMIN_EMAIL`       | unset (no seeding)                   |
    /// | `SEED_ADMIN_PASSWORD`    | unset (no seeding)                   |
    /// | `CORS_ORIGINS`           | unset (any origin)                   |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3100".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/lodge".into()),
            jwt_secret: resolve_jwt_secret(),
            seed_admin: SeedAdmin::from_env(),
            cors_origins: parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default()),
        }
    }
}

/// Split a comma-separated origin list. `*` anywhere means any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_split() {
        assert_eq!(
            vec!["https://example.com", "http://localhost:5173"],
            parse_origins(" https://example.com, http://localhost:5173 ,")
        );
    }

    #[test]
    fn wildcard_or_empty_means_any() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins("https://example.com,*").is_empty());
    }
}
