//! Browse articles use case

use crate::domain::{group_by_year, query, ArchiveYear, Article};
use crate::error::{JournalError, Result};
use crate::infrastructure::ArticleRepository;

/// Article page data: the article and what to read next
#[derive(Debug, Clone)]
pub struct ArticleView<'a> {
    pub article: &'a Article,
    pub related: Vec<&'a Article>,
}

/// Service answering lookups, searches and archive listings
pub struct ArticleService<'a, R: ArticleRepository> {
    repository: &'a R,
}

impl<'a, R: ArticleRepository> ArticleService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        ArticleService { repository }
    }

    pub fn get(&self, id: &str) -> Option<&'a Article> {
        self.repository.get_by_id(id)
    }

    /// Lookup that turns a miss into [`JournalError::ArticleNotFound`]
    pub fn require(&self, id: &str) -> Result<&'a Article> {
        self.get(id)
            .ok_or_else(|| JournalError::ArticleNotFound(id.to_string()))
    }

    pub fn search(&self, query: &str) -> Vec<&'a Article> {
        let found = query::search(self.repository.articles(), query);
        tracing::debug!(query, hits = found.len(), "Searched articles");
        found
    }

    pub fn related(&self, article_id: &str, keywords: &[String]) -> Vec<&'a Article> {
        query::related_to(self.repository.articles(), article_id, keywords)
    }

    /// The article plus up to three related articles found through its own keywords
    pub fn view(&self, id: &str) -> Result<ArticleView<'a>> {
        let article = self.require(id)?;
        Ok(ArticleView {
            article,
            related: self.related(&article.id, &article.keywords),
        })
    }

    pub fn archives(&self) -> Vec<ArchiveYear<'a>> {
        group_by_year(self.repository.articles())
    }
}
