//! Error types for dspg-journal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journal application
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a journal workspace: {0}")]
    NotInitialized(PathBuf),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Duplicate article id in catalog: {0}")]
    DuplicateArticle(String),

    #[error("Text too short for analysis: {length} characters (minimum {minimum})")]
    TextTooShort { length: usize, minimum: usize },

    #[error("Invalid manuscript: {0}")]
    InvalidManuscript(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotInitialized(_) => 2,
            JournalError::ArticleNotFound(_) => 3,
            JournalError::TextTooShort { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotInitialized(path) => {
                format!(
                    "Not a journal workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'dspg-journal init' in this directory to create a config\n\
                    • Navigate to a directory containing .dspg-journal/\n\
                    • Set DSPG_JOURNAL_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            JournalError::ArticleNotFound(id) => {
                format!(
                    "Article not found: '{}'\n\n\
                    Suggestions:\n\
                    • Article ids look like 'dsp-2024-001'\n\
                    • Use 'dspg-journal search' to list available articles\n\
                    • Use 'dspg-journal archives' to browse by issue",
                    id
                )
            }
            JournalError::TextTooShort { length, minimum } => {
                format!(
                    "Please enter at least {} characters for analysis (got {}).\n\n\
                    Suggestions:\n\
                    • Paste a full paragraph or abstract\n\
                    • Pass a file: dspg-journal check manuscript.md",
                    minimum, length
                )
            }
            JournalError::InvalidManuscript(msg) => {
                format!(
                    "Invalid manuscript: {}\n\n\
                    Required fields: title, abstract, author_name, email\n\
                    Example:\n\
                    title = \"My Paper\"\n\
                    abstract = \"...\"\n\
                    keywords = \"AI, Education\"\n\
                    author_name = \"Dr. Jane Roe\"\n\
                    email = \"jane@example.edu\"",
                    msg
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: dspg-journal config model gemini-2.5-flash",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = JournalError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("dspg-journal init"));
        assert!(msg.contains("DSPG_JOURNAL_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_article_not_found_suggestions() {
        let err = JournalError::ArticleNotFound("nope".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("dspg-journal search"));
    }

    #[test]
    fn test_text_too_short_message() {
        let err = JournalError::TextTooShort {
            length: 12,
            minimum: 50,
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("at least 50 characters"));
        assert!(msg.contains("got 12"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(JournalError::NotInitialized(PathBuf::new()).exit_code(), 2);
        assert_eq!(JournalError::ArticleNotFound(String::new()).exit_code(), 3);
        assert_eq!(
            JournalError::TextTooShort {
                length: 0,
                minimum: 1
            }
            .exit_code(),
            4
        );
        assert_eq!(JournalError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = JournalError::Analysis("timeout".to_string());
        assert_eq!(err.display_with_suggestions(), "Analysis error: timeout");
    }
}
