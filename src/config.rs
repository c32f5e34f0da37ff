use std::collections::HashMap;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Source of configuration values. Production reads the process environment,
/// tests pass a map.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(key))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn parsed<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key).filter(|v| !v.trim().is_empty()) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
        }
    }
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.to_string())
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_files() {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperAdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub public_url: String,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub super_admin: Option<SuperAdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let db_max_connections = source.parsed("DB_MAX_CONNECTIONS", 50u32)?;
        let db_min_connections = source.parsed("DB_MIN_CONNECTIONS", 10u32)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let api_prefix = source.or_default("API_PREFIX", "/api/v1");
        let api_prefix = format!("/{}", api_prefix.trim_matches('/'));

        let super_admin = match (source.get("SUPER_ADMIN_EMAIL"), source.get("SUPER_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Some(SuperAdminSeed {
                    email: email.trim().to_lowercase(),
                    password,
                    name: source.or_default("SUPER_ADMIN_NAME", "Super Admin"),
                })
            }
            _ => None,
        };

        let host = source.or_default("HOST", "127.0.0.1");
        let port = source.parsed("PORT", 3001u16)?;
        let public_url = source
            .or_default("PUBLIC_URL", &format!("http://{host}:{port}"))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            environment: source.or_default("RUST_ENV", "development"),
            database_url: source.required("DATABASE_URL")?,
            host,
            port,
            api_prefix,
            public_url,
            run_migrations: source.parsed("RUN_MIGRATIONS", false)?,
            db_max_connections,
            db_min_connections,
            super_admin,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute base of the link sent in verification emails.
    pub fn verify_email_url(&self) -> String {
        format!("{}{}/auth/verify-email", self.public_url, self.api_prefix)
    }
}
