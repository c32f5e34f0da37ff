use crate::config::{ConfigError, EnvSource, ProcessEnv};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,       // seconds
    pub refresh_token_expiry: i64,      // seconds
    pub verification_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let secret_key = source.required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let access_token_expiry = source.parsed("JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = source.parsed("JWT_REFRESH_EXPIRY", 604_800i64)?;
        let verification_token_expiry = source.parsed("JWT_VERIFICATION_EXPIRY", 86_400i64)?;

        if access_token_expiry <= 0 || access_token_expiry > 86_400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY",
                reason: "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        if verification_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_VERIFICATION_EXPIRY",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: source.or_default("JWT_ISSUER", "wedding-marketplace"),
            access_token_expiry,
            refresh_token_expiry,
            verification_token_expiry,
        })
    }
}
