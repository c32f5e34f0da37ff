use crate::config::{ConfigError, EnvSource, ProcessEnv};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpMode {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub from_email: String,
    pub mode: SmtpMode,
}

impl SmtpConfig {
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// `None` when `EMAIL_FROM` is not set.
    pub fn from_source(source: &impl EnvSource) -> Result<Option<Self>, ConfigError> {
        let Some(from_email) = source.get("EMAIL_FROM").filter(|v| !v.trim().is_empty()) else {
            return Ok(None);
        };

        let mode = if source.get("RUST_ENV").as_deref() == Some("test") {
            SmtpMode::Local {
                host: source.or_default("SMTP_HOST", "localhost"),
                port: source.parsed("SMTP_PORT", 1025u16)?,
            }
        } else {
            SmtpMode::Relay {
                server: source.required("SMTP_SERVER")?,
                username: source.required("SMTP_USERNAME")?,
                password: source.required("SMTP_PASSWORD")?,
            }
        };

        Ok(Some(Self {
            from_email: from_email.trim().to_string(),
            mode,
        }))
    }
}
