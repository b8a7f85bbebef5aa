//! In-memory article store

use crate::domain::Article;
use crate::error::{JournalError, Result};
use std::collections::HashMap;

/// Read access to published articles
pub trait ArticleRepository {
    /// Exact lookup by id; `None` when absent
    fn get_by_id(&self, id: &str) -> Option<&Article>;

    /// Every article in insertion order
    fn articles(&self) -> &[Article];
}

/// Articles loaded once at startup and never mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleStore {
    articles: Vec<Article>,
    index: HashMap<String, usize>,
}

impl InMemoryArticleStore {
    /// Build the store, rejecting duplicate article ids
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut index = HashMap::with_capacity(articles.len());
        for (pos, article) in articles.iter().enumerate() {
            if index.insert(article.id.clone(), pos).is_some() {
                return Err(JournalError::DuplicateArticle(article.id.clone()));
            }
        }

        Ok(InMemoryArticleStore { articles, index })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleRepository for InMemoryArticleStore {
    fn get_by_id(&self, id: &str) -> Option<&Article> {
        self.index.get(id).map(|&pos| &self.articles[pos])
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::fixtures::article;
    use crate::infrastructure::Catalog;

    #[test]
    fn test_get_by_id_finds_every_article() {
        let catalog = Catalog::builtin().unwrap();
        let store = InMemoryArticleStore::new(catalog.articles.clone()).unwrap();

        for a in &catalog.articles {
            assert_eq!(store.get_by_id(&a.id), Some(a));
        }
        assert_eq!(store.get_by_id("nonexistent"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = InMemoryArticleStore::new(vec![article("dsp-1", "T", &[])]).unwrap();
        assert!(store.get_by_id("DSP-1").is_none());
        assert!(store.get_by_id("dsp-").is_none());
        assert!(store.get_by_id("dsp-1").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemoryArticleStore::new(vec![article("x", "A", &[]), article("x", "B", &[])]);
        match result {
            Err(JournalError::DuplicateArticle(id)) => assert_eq!(id, "x"),
            other => panic!("Expected DuplicateArticle, got {:?}", other),
        }
    }

    #[test]
    fn test_preserves_insertion_order() {
        let store = InMemoryArticleStore::new(vec![
            article("b", "B", &[]),
            article("a", "A", &[]),
        ])
        .unwrap();
        let ids: Vec<&str> = store.articles().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
