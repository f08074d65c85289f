use std::{env, str::FromStr, time::Duration};

use axum::http::HeaderValue;

use crate::{
    error::{AppError, Result},
    services::design::code::MAX_CODE_LENGTH,
};

pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub viewer: ViewerConfig,
    pub designs: DesignsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub max_concurrent_requests: usize,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Byte budget for cached designs, weighed by stored string length.
    pub designs_max_bytes: u64,
    pub designs_ttl: Duration,
}

/// Static credential pair guarding the viewer routes.
#[derive(Clone)]
pub struct ViewerConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ViewerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DesignsConfig {
    pub code_length: usize,
    pub max_code_attempts: u32,
    pub max_svg_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env_or_default("HOST", "127.0.0.1"),
                port: env_or_parse("PORT", 8080)?,
                allowed_origin: env_or_default("ALLOWED_ORIGIN", ANY_ORIGIN),
                max_concurrent_requests: env_or_parse("SERVER_MAX_CONCURRENT_REQUESTS", 100)?,
                max_body_bytes: env_or_parse("MAX_BODY_BYTES", 2 * 1024 * 1024)?,
            },
            database: DatabaseConfig {
                url: env_or_default("DATABASE_URL", "sqlite://designs.db?mode=rwc"),
                max_connections: env_or_parse("DB_MAX_CONNECTIONS", 10)?,
                min_connections: env_or_parse("DB_MIN_CONNECTIONS", 1)?,
                connect_timeout: Duration::from_secs(env_or_parse("DB_CONNECT_TIMEOUT_SECS", 10)?),
                idle_timeout: Duration::from_secs(env_or_parse("DB_IDLE_TIMEOUT_SECS", 300)?),
            },
            cache: CacheConfig {
                designs_max_bytes: env_or_parse("CACHE_DESIGNS_MAX_BYTES", 64 * 1024 * 1024)?, // 64MiB
                designs_ttl: Duration::from_secs(env_or_parse("CACHE_DESIGNS_TTL_SECS", 600)?),
            },
            viewer: ViewerConfig {
                username: env_required("ADMIN_USER")?,
                password: env_required("ADMIN_PASS")?,
            },
            designs: DesignsConfig {
                code_length: env_or_parse("CODE_LENGTH", 6)?,
                max_code_attempts: env_or_parse("CODE_MAX_ATTEMPTS", 5)?,
                max_svg_bytes: env_or_parse("MAX_SVG_BYTES", 1_500_000)?, // ~1.5MB
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewer.username.is_empty() || self.viewer.password.is_empty() {
            return Err(AppError::Config(
                "ADMIN_USER and ADMIN_PASS must not be empty".into(),
            ));
        }

        if !(4..=MAX_CODE_LENGTH).contains(&self.designs.code_length) {
            return Err(AppError::Config(format!(
                "CODE_LENGTH must be between 4 and {MAX_CODE_LENGTH}"
            )));
        }

        if self.designs.max_code_attempts == 0 {
            return Err(AppError::Config(
                "CODE_MAX_ATTEMPTS must be positive".into(),
            ));
        }

        if self.designs.max_svg_bytes > self.server.max_body_bytes {
            return Err(AppError::Config(
                "MAX_SVG_BYTES cannot exceed MAX_BODY_BYTES".into(),
            ));
        }

        if self.server.allowed_origin != ANY_ORIGIN
            && HeaderValue::from_str(&self.server.allowed_origin).is_err()
        {
            return Err(AppError::Config(
                "ALLOWED_ORIGIN must be '*' or a valid origin".into(),
            ));
        }

        Ok(())
    }
}

impl ServerConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origin == ANY_ORIGIN
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid value for {key}"))),
        Err(_) => Ok(default),
    }
}

fn env_required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::Config(format!("{key} is required")))
}
