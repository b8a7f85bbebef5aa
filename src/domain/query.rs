//! Article queries
//!
//! Stateless views over a slice of articles. Nothing here can fail: a query
//! with no matches yields an empty vector.
//!
//! # Examples
//!
//! ```
//! use dspg_journal::domain::query;
//! use dspg_journal::infrastructure::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hits = query::search(&catalog.articles, "cyber");
//! assert_eq!(hits.len(), 1);
//! ```

use crate::domain::Article;
use std::collections::HashSet;

/// Maximum number of related articles returned
pub const RELATED_LIMIT: usize = 3;

/// Case-insensitive substring search over title, abstract, authors and keywords.
///
/// An article matches when any of those fields contains the query. The empty
/// query is a substring of everything and therefore returns every article.
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| matches_query(article, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(article: &Article, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&article.title)
        || contains(&article.abstract_text)
        || article.authors.iter().any(|author| contains(author))
        || article.keywords.iter().any(|keyword| contains(keyword))
}

/// Articles sharing at least one keyword with `keywords`, excluding `article_id`.
///
/// Keywords compare case-insensitively and exactly (no substring matching).
/// Results keep store order and are cut at [`RELATED_LIMIT`]; they are not
/// ranked by overlap.
pub fn related_to<'a>(
    articles: &'a [Article],
    article_id: &str,
    keywords: &[String],
) -> Vec<&'a Article> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    articles
        .iter()
        .filter(|article| article.id != article_id)
        .filter(|article| {
            article
                .keywords
                .iter()
                .any(|k| wanted.contains(&k.to_lowercase()))
        })
        .take(RELATED_LIMIT)
        .collect()
}
