//! Seed catalog loading

use crate::domain::{Article, EditorialMember, JournalProfile};
use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../seed/catalog.toml");

/// Everything the journal knows at startup: masthead, board and published articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub journal: JournalProfile,
    #[serde(default)]
    pub board: Vec<EditorialMember>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Catalog {
    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| {
            JournalError::Config(format!(
                "Failed to parse catalog {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(contents)?;
        tracing::debug!(
            articles = catalog.articles.len(),
            board = catalog.board.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Load `path` if given, otherwise the builtin catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.journal.acronym, "DSPG Journal");
        assert_eq!(catalog.articles.len(), 3);
        assert_eq!(catalog.board.len(), 5);

        let first = &catalog.articles[0];
        assert_eq!(first.id, "dsp-2024-001");
        assert_eq!(first.year(), 2024);
        assert_eq!(first.references.len(), 3);
        assert!(first.content.is_none());
    }

    #[test]
    fn test_load_custom_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[journal]
name = "Test Journal"
acronym = "TJ"

[[articles]]
id = "t-1"
title = "Only Article"
abstract = "Nothing to see."
authors = ["A. Author"]
publication_date = "2022-07-01"
volume = 1
issue = 2
keywords = ["Testing"]
doi = "10.0/t-1"
"#,
        )
        .unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.journal.acronym, "TJ");
        assert!(catalog.board.is_empty());
        assert_eq!(catalog.articles[0].views, 0);
        assert!(catalog.articles[0].references.is_empty());
    }

    #[test]
    fn test_load_malformed_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(&path, "[journal]\nname = 3\n").unwrap();

        match Catalog::load_from_file(&path) {
            Err(JournalError::Config(msg)) => assert!(msg.contains("Failed to parse catalog")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
