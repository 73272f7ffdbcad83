//! JSON Script Loader - reads the intake script from a JSON file.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "questions": [
//!     { "text": "What is your name?", "mandatory": true, "answer_type": "free_text" },
//!     { "text": "Anything else?" }
//!   ]
//! }
//! ```
//!
//! Unknown `answer_type` values fall back to free text; a file with no
//! questions is rejected because the engine cannot run without a script.

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::domain::intake::{CatalogError, QuestionDefinition, ScriptCatalog};

#[derive(Debug, Deserialize)]
struct ScriptFile {
    questions: Vec<QuestionDefinition>,
}

/// Loads a [`ScriptCatalog`] from a JSON script file.
///
/// # Errors
///
/// - `CatalogError::Io` if the file cannot be read
/// - `CatalogError::Malformed` if the JSON does not match the expected shape
/// - `CatalogError::Empty` if the file contains no questions
pub async fn load_script(path: impl AsRef<Path>) -> Result<ScriptCatalog, CatalogError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

    parse_script(&raw, &path.display().to_string())
}

/// Parses script JSON into a catalog. Split out so tests can exercise the
/// format without touching the filesystem.
pub fn parse_script(raw: &str, path: &str) -> Result<ScriptCatalog, CatalogError> {
    let file: ScriptFile = serde_json::from_str(raw).map_err(|source| CatalogError::Malformed {
        path: path.to_string(),
        source,
    })?;

    ScriptCatalog::new(file.questions)
}
