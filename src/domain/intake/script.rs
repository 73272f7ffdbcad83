//! The intake script catalog.
//!
//! An immutable, ordered list of [`QuestionDefinition`]s loaded once at
//! startup. The engine only ever reads from it; an empty catalog is a fatal
//! configuration error because no sensible question flow exists without one.

use thiserror::Error;

use super::question::QuestionDefinition;

/// Errors raised while building or loading a script catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The script contained no questions.
    #[error("script catalog contains no questions")]
    Empty,

    /// The script file could not be read.
    #[error("failed to read script file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The script file was not valid JSON in the expected shape.
    #[error("failed to parse script file '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable ordered list of scripted questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCatalog {
    questions: Vec<QuestionDefinition>,
}

impl ScriptCatalog {
    /// Creates a catalog from an ordered question list.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Empty` if the list contains no questions.
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { questions })
    }

    /// Returns the question at the given script position, if any.
    pub fn get(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    /// Returns the number of questions in the script.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog has no questions.
    ///
    /// Always false for a constructed catalog; kept for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::question::AnswerType;

    fn sample_questions() -> Vec<QuestionDefinition> {
        vec![
            QuestionDefinition::mandatory("Name?", AnswerType::FreeText),
            QuestionDefinition::mandatory("Phone?", AnswerType::Phone),
            QuestionDefinition::free_text("Anything else?"),
        ]
    }

    #[test]
    fn rejects_empty_question_list() {
        let result = ScriptCatalog::new(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn preserves_question_order() {
        let catalog = ScriptCatalog::new(sample_questions()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().text, "Name?");
        assert_eq!(catalog.get(1).unwrap().text, "Phone?");
        assert_eq!(catalog.get(2).unwrap().text, "Anything else?");
    }

    #[test]
    fn get_past_end_returns_none() {
        let catalog = ScriptCatalog::new(sample_questions()).unwrap();
        assert!(catalog.get(3).is_none());
    }
}
