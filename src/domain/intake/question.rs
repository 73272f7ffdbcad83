//! Question definitions for the intake script.
//!
//! Questions are immutable records loaded once at startup. Each carries the
//! prompt text, whether a valid answer is required before the script may
//! advance, and the answer type the validator should enforce.

use serde::{Deserialize, Serialize};

/// The kind of answer a scripted question expects.
///
/// Unrecognized or absent values in the script file fall back to
/// [`AnswerType::FreeText`], so adding new types to a script never breaks
/// older deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    /// Exact yes/no membership (localized equivalents included).
    YesNo,
    /// At least eight numeric digits, non-digits ignored.
    Phone,
    /// Must mention one of the configured education-level labels.
    EducationLevel,
    /// Any non-empty text; option membership is not enforced.
    MultipleChoice,
    /// Any non-empty text. The unknown-value fallback, which serde requires
    /// to be the last variant.
    #[default]
    #[serde(other)]
    FreeText,
}

/// A single scripted question, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    /// Prompt text shown to the visitor.
    pub text: String,

    /// If true, the script does not advance until a type-valid answer arrives.
    #[serde(default)]
    pub mandatory: bool,

    /// Expected answer type; defaults to free text when absent.
    #[serde(default)]
    pub answer_type: AnswerType,
}

impl QuestionDefinition {
    /// Creates a new question definition.
    pub fn new(text: impl Into<String>, mandatory: bool, answer_type: AnswerType) -> Self {
        Self {
            text: text.into(),
            mandatory,
            answer_type,
        }
    }

    /// Creates an optional free-text question.
    pub fn free_text(text: impl Into<String>) -> Self {
        Self::new(text, false, AnswerType::FreeText)
    }

    /// Creates a mandatory question of the given type.
    pub fn mandatory(text: impl Into<String>, answer_type: AnswerType) -> Self {
        Self::new(text, true, answer_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod answer_type {
        use super::*;

        #[test]
        fn default_is_free_text() {
            assert_eq!(AnswerType::default(), AnswerType::FreeText);
        }

        #[test]
        fn deserializes_from_snake_case() {
            let t: AnswerType = serde_json::from_str("\"yes_no\"").unwrap();
            assert_eq!(t, AnswerType::YesNo);

            let t: AnswerType = serde_json::from_str("\"education_level\"").unwrap();
            assert_eq!(t, AnswerType::EducationLevel);
        }

        #[test]
        fn unknown_value_falls_back_to_free_text() {
            let t: AnswerType = serde_json::from_str("\"zip_code\"").unwrap();
            assert_eq!(t, AnswerType::FreeText);
        }

        #[test]
        fn every_named_variant_deserializes_to_itself() {
            for (name, expected) in [
                ("\"yes_no\"", AnswerType::YesNo),
                ("\"phone\"", AnswerType::Phone),
                ("\"education_level\"", AnswerType::EducationLevel),
                ("\"multiple_choice\"", AnswerType::MultipleChoice),
                ("\"free_text\"", AnswerType::FreeText),
            ] {
                let t: AnswerType = serde_json::from_str(name).unwrap();
                assert_eq!(t, expected, "{name} should not hit the fallback");
            }
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&AnswerType::MultipleChoice).unwrap();
            assert_eq!(json, "\"multiple_choice\"");
        }
    }

    mod question_definition {
        use super::*;

        #[test]
        fn missing_fields_take_defaults() {
            let q: QuestionDefinition = serde_json::from_str(r#"{"text":"Name?"}"#).unwrap();
            assert_eq!(q.text, "Name?");
            assert!(!q.mandatory);
            assert_eq!(q.answer_type, AnswerType::FreeText);
        }

        #[test]
        fn full_definition_deserializes() {
            let q: QuestionDefinition = serde_json::from_str(
                r#"{"text":"Phone?","mandatory":true,"answer_type":"phone"}"#,
            )
            .unwrap();
            assert!(q.mandatory);
            assert_eq!(q.answer_type, AnswerType::Phone);
        }

        #[test]
        fn constructors_set_fields() {
            let q = QuestionDefinition::mandatory("Degree?", AnswerType::EducationLevel);
            assert!(q.mandatory);
            assert_eq!(q.answer_type, AnswerType::EducationLevel);

            let q = QuestionDefinition::free_text("Anything else?");
            assert!(!q.mandatory);
            assert_eq!(q.answer_type, AnswerType::FreeText);
        }
    }
}
