//! Intake flow configuration: script location, sensitive phrases, exports
//! and the fixed reply strings.

use serde::Deserialize;

use crate::domain::intake::{EngineMessages, ValidationRules};

use super::error::ConfigError;

/// Settings for the scripted conversation itself.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Path to the JSON script file.
    #[serde(default = "default_script_path")]
    pub script_path: String,

    /// Directory transcripts are exported into.
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: String,

    /// Phrases that trigger the sensitive-topic hand-off, matched
    /// case-insensitively as substrings.
    #[serde(default)]
    pub sensitive_phrases: Vec<String>,

    /// Education-level labels accepted by the validator. Empty keeps the
    /// built-in labels.
    #[serde(default)]
    pub education_levels: Vec<String>,

    /// Override for the sensitive-topic hand-off reply.
    #[serde(default)]
    pub handoff_message: Option<String>,

    /// Override for the apology used when reply generation fails.
    #[serde(default)]
    pub fallback_message: Option<String>,

    /// Override for the prefix put before a re-prompted question.
    #[serde(default)]
    pub reprompt_prefix: Option<String>,

    /// Override for the closing message once the script is exhausted.
    #[serde(default)]
    pub closing_message: Option<String>,
}

fn default_script_path() -> String {
    "questions.json".to_string()
}

fn default_transcript_dir() -> String {
    "transcripts".to_string()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            script_path: default_script_path(),
            transcript_dir: default_transcript_dir(),
            sensitive_phrases: Vec::new(),
            education_levels: Vec::new(),
            handoff_message: None,
            fallback_message: None,
            reprompt_prefix: None,
            closing_message: None,
        }
    }
}

impl IntakeConfig {
    /// Builds the engine's fixed reply strings, applying any overrides on
    /// top of the defaults.
    pub fn engine_messages(&self) -> EngineMessages {
        let mut messages = EngineMessages::default();
        if let Some(handoff) = &self.handoff_message {
            messages.handoff = handoff.clone();
        }
        if let Some(fallback) = &self.fallback_message {
            messages.fallback = fallback.clone();
        }
        if let Some(prefix) = &self.reprompt_prefix {
            messages.reprompt_prefix = prefix.clone();
        }
        if let Some(closing) = &self.closing_message {
            messages.closing = closing.clone();
        }
        messages
    }

    /// Builds the validator rules, applying the label override if set.
    pub fn validation_rules(&self) -> ValidationRules {
        let mut rules = ValidationRules::default();
        if !self.education_levels.is_empty() {
            rules.education_levels = self.education_levels.clone();
        }
        rules
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.script_path.trim().is_empty() {
            return Err(ConfigError::validation("intake.script_path must be set"));
        }
        if self.transcript_dir.trim().is_empty() {
            return Err(ConfigError::validation(
                "intake.transcript_dir must be set",
            ));
        }
        Ok(())
    }
}
