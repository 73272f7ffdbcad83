//! Application configuration.
//!
//! Loaded from environment variables with the `SALLY` prefix and `__` as the
//! section separator, e.g. `SALLY__SERVER__PORT=9000` or
//! `SALLY__AI__GROQ_API_KEY=gsk-...`. A local `.env` file is honored in
//! development via `dotenvy`.

mod ai;
mod error;
mod intake;
mod server;

pub use ai::AiConfig;
pub use error::ConfigError;
pub use intake::IntakeConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root configuration for the intake service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Reply generator settings.
    pub ai: AiConfig,

    /// Intake flow settings.
    #[serde(default)]
    pub intake: IntakeConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required value is missing, a value cannot
    /// be deserialized, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine; real deployments set variables directly.
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SALLY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("intake.sensitive_phrases")
                    .with_list_parse_key("intake.education_levels")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.intake.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[test]
    fn validate_rejects_blank_api_key() {
        let app = AppConfig {
            server: ServerConfig::default(),
            ai: AiConfig {
                groq_api_key: Secret::new(String::new()),
                model: "m".to_string(),
                base_url: "https://example.com".to_string(),
                timeout_secs: 20,
                max_retries: 2,
            },
            intake: IntakeConfig::default(),
        };
        assert!(matches!(app.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_accepts_sane_config() {
        let app = AppConfig {
            server: ServerConfig::default(),
            ai: AiConfig {
                groq_api_key: Secret::new("gsk-test".to_string()),
                model: "m".to_string(),
                base_url: "https://example.com".to_string(),
                timeout_secs: 20,
                max_retries: 2,
            },
            intake: IntakeConfig::default(),
        };
        assert!(app.validate().is_ok());
    }
}
