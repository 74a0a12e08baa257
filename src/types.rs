pub use crate::utils::database;
use async_trait::async_trait;
use axum::http::HeaderValue;
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub cors_origin: CorsOrigin,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub admin_secret: Option<String>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub cors_origin: CorsOrigin,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub admin_secret: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

const DEFAULT_JWT_EXPIRES_IN: &str = "7d";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so callers other
    /// than the binary never have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = non_empty("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| ConfigError::Invalid {
                key: "PORT",
                reason: err.to_string(),
            })?,
            None => 8000,
        };
        let environment =
            AppEnvironment::from(non_empty("APP_ENV").unwrap_or_else(|| "development".to_string()));
        let cors_origin = match non_empty("CORS_ORIGIN") {
            Some(origin) if origin.trim() != "*" => {
                HeaderValue::from_str(origin.trim())
                    .map(CorsOrigin::Exact)
                    .map_err(|err| ConfigError::Invalid {
                        key: "CORS_ORIGIN",
                        reason: err.to_string(),
                    })?
            }
            _ => CorsOrigin::Any,
        };

        let raw_expires_in =
            non_empty("JWT_EXPIRES_IN").unwrap_or_else(|| DEFAULT_JWT_EXPIRES_IN.to_string());
        let jwt_expires_in =
            humantime::parse_duration(&raw_expires_in).map_err(|err| ConfigError::Invalid {
                key: "JWT_EXPIRES_IN",
                reason: err.to_string(),
            })?;
        if jwt_expires_in.is_zero() {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRES_IN",
                reason: "token lifetime must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment,
                port,
                cors_origin,
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expires_in,
                admin_secret: non_empty("ADMIN_SECRET"),
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(self.database.url.as_str()).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                cors_origin: self.app.cors_origin,
            },
            db_conn,
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                jwt_expires_in: self.auth.jwt_expires_in,
                admin_secret: self.auth.admin_secret,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/food"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.environment, AppEnvironment::Development);
        assert_eq!(config.app.cors_origin, CorsOrigin::Any);
        assert_eq!(config.auth.jwt_expires_in, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(config.auth.admin_secret, None);
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/food"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRES_IN", "2h"),
            ("ADMIN_SECRET", "let-me-in"),
            ("CORS_ORIGIN", "http://localhost:3000"),
            ("PORT", "9000"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(config.app.port, 9000);
        assert_eq!(config.app.environment, AppEnvironment::Production);
        assert_eq!(
            config.app.cors_origin,
            CorsOrigin::Exact(HeaderValue::from_static("http://localhost:3000"))
        );
        assert_eq!(config.auth.jwt_expires_in, Duration::from_secs(2 * 60 * 60));
        assert_eq!(config.auth.admin_secret.as_deref(), Some("let-me-in"));
    }

    #[test]
    fn rejects_missing_required_values() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "secret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRES_IN", "forever"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_EXPIRES_IN", .. }));
    }
}
