//! Answer validation for mandatory questions.
//!
//! Pure classification of whether a raw answer satisfies a declared
//! [`AnswerType`]. Never fails: validation outcomes are plain booleans, and
//! a re-prompt (not an error) is how the engine reacts to a false result.
//!
//! The recognized yes/no words and education-level labels are configuration
//! inputs so deployments can localize without touching the engine.

use super::question::AnswerType;

/// Configurable word lists the validator matches against.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    /// Accepted yes/no answers, matched trimmed and case-insensitively.
    pub yes_no_words: Vec<String>,
    /// Education-level labels, matched as case-insensitive substrings.
    pub education_levels: Vec<String>,
    /// Minimum digit count for a phone answer.
    pub min_phone_digits: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            yes_no_words: vec![
                "yes".to_string(),
                "no".to_string(),
                // Portuguese equivalents from the reference deployment.
                "sim".to_string(),
                "não".to_string(),
                "nao".to_string(),
            ],
            education_levels: vec![
                "Primary Education Complete".to_string(),
                "Secondary Education Complete".to_string(),
                "Higher Education Complete".to_string(),
                "Postgraduate In Progress".to_string(),
                "Postgraduate Complete".to_string(),
            ],
            min_phone_digits: 8,
        }
    }
}

/// Pure answer classifier, parameterized by [`ValidationRules`].
#[derive(Debug, Clone, Default)]
pub struct AnswerValidator {
    rules: ValidationRules,
}

impl AnswerValidator {
    /// Creates a validator with the given rules.
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Returns true if the raw answer satisfies the declared type.
    pub fn validate(&self, raw: &str, answer_type: AnswerType) -> bool {
        let trimmed = raw.trim();
        match answer_type {
            AnswerType::YesNo => self.is_yes_no(trimmed),
            AnswerType::Phone => Self::digit_count(trimmed) >= self.rules.min_phone_digits,
            AnswerType::FreeText => !trimmed.is_empty(),
            AnswerType::EducationLevel => self.mentions_education_level(trimmed),
            // Option membership is intentionally not checked; any non-empty
            // choice is accepted.
            AnswerType::MultipleChoice => !trimmed.is_empty(),
        }
    }

    fn is_yes_no(&self, trimmed: &str) -> bool {
        let lower = trimmed.to_lowercase();
        self.rules
            .yes_no_words
            .iter()
            .any(|word| word.to_lowercase() == lower)
    }

    fn mentions_education_level(&self, trimmed: &str) -> bool {
        let lower = trimmed.to_lowercase();
        self.rules
            .education_levels
            .iter()
            .any(|label| lower.contains(&label.to_lowercase()))
    }

    fn digit_count(trimmed: &str) -> usize {
        trimmed.chars().filter(|c| c.is_ascii_digit()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn validator() -> AnswerValidator {
        AnswerValidator::default()
    }

    mod yes_no {
        use super::*;

        #[test]
        fn accepts_exact_members() {
            assert!(validator().validate("yes", AnswerType::YesNo));
            assert!(validator().validate("no", AnswerType::YesNo));
        }

        #[test]
        fn accepts_localized_equivalents() {
            assert!(validator().validate("sim", AnswerType::YesNo));
            assert!(validator().validate("não", AnswerType::YesNo));
            assert!(validator().validate("nao", AnswerType::YesNo));
        }

        #[test]
        fn is_case_insensitive_and_trims() {
            assert!(validator().validate("  YES  ", AnswerType::YesNo));
            assert!(validator().validate("Sim", AnswerType::YesNo));
        }

        #[test]
        fn rejects_non_members() {
            assert!(!validator().validate("talvez", AnswerType::YesNo));
            assert!(!validator().validate("maybe", AnswerType::YesNo));
        }

        #[test]
        fn rejects_partial_matches() {
            assert!(!validator().validate("yes please", AnswerType::YesNo));
            assert!(!validator().validate("nope", AnswerType::YesNo));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn accepts_long_digit_strings() {
            assert!(validator().validate("55839871683", AnswerType::Phone));
        }

        #[test]
        fn rejects_short_digit_strings() {
            assert!(!validator().validate("12345", AnswerType::Phone));
            assert!(!validator().validate("15", AnswerType::Phone));
        }

        #[test]
        fn ignores_formatting_characters() {
            assert!(validator().validate("(55) 8399-9999", AnswerType::Phone));
            assert!(validator().validate("+55 83 9999 9999", AnswerType::Phone));
        }

        #[test]
        fn rejects_text_without_enough_digits() {
            assert!(!validator().validate("call me maybe 123", AnswerType::Phone));
        }
    }

    mod free_text {
        use super::*;

        #[test]
        fn accepts_any_non_empty_text() {
            assert!(validator().validate("Maria", AnswerType::FreeText));
        }

        #[test]
        fn rejects_empty_and_whitespace() {
            assert!(!validator().validate("", AnswerType::FreeText));
            assert!(!validator().validate("   \n\t", AnswerType::FreeText));
        }
    }

    mod education_level {
        use super::*;

        #[test]
        fn accepts_exact_label() {
            assert!(validator().validate("Higher Education Complete", AnswerType::EducationLevel));
        }

        #[test]
        fn accepts_label_inside_sentence() {
            assert!(validator().validate(
                "I have Postgraduate In Progress right now",
                AnswerType::EducationLevel
            ));
        }

        #[test]
        fn is_case_insensitive() {
            assert!(validator().validate("primary education complete", AnswerType::EducationLevel));
        }

        #[test]
        fn rejects_unknown_labels() {
            assert!(!validator().validate("PhD", AnswerType::EducationLevel));
            assert!(!validator().validate("", AnswerType::EducationLevel));
        }

        #[test]
        fn custom_labels_replace_defaults() {
            let rules = ValidationRules {
                education_levels: vec!["Ensino Superior Completo".to_string()],
                ..Default::default()
            };
            let v = AnswerValidator::new(rules);
            assert!(v.validate("ensino superior completo", AnswerType::EducationLevel));
            assert!(!v.validate("Higher Education Complete", AnswerType::EducationLevel));
        }
    }

    mod multiple_choice {
        use super::*;

        #[test]
        fn accepts_any_non_empty_choice() {
            assert!(validator().validate("option B", AnswerType::MultipleChoice));
            assert!(validator().validate("7", AnswerType::MultipleChoice));
        }

        #[test]
        fn rejects_empty_choice() {
            assert!(!validator().validate("  ", AnswerType::MultipleChoice));
        }
    }

    proptest! {
        #[test]
        fn phone_accepts_iff_eight_or_more_digits(s in "[0-9a-z +()-]{0,30}") {
            let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
            prop_assert_eq!(
                validator().validate(&s, AnswerType::Phone),
                digits >= 8
            );
        }

        #[test]
        fn free_text_accepts_iff_non_blank(s in "\\PC{0,40}") {
            prop_assert_eq!(
                validator().validate(&s, AnswerType::FreeText),
                !s.trim().is_empty()
            );
        }
    }
}
