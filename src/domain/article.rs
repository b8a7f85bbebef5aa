//! Published article records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A published article. Immutable once loaded into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub publication_date: NaiveDate,
    pub volume: u32,
    pub issue: u32,
    pub keywords: Vec<String>,
    pub doi: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub citations: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl Article {
    /// Publication year
    pub fn year(&self) -> i32 {
        self.publication_date.year()
    }

    /// Format an APA-style citation line for this article.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use dspg_journal::domain::Article;
    ///
    /// let article = Article {
    ///     id: "a".into(),
    ///     title: "On Things".into(),
    ///     abstract_text: String::new(),
    ///     authors: vec!["A. One".into(), "B. Two".into()],
    ///     publication_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    ///     volume: 12,
    ///     issue: 1,
    ///     keywords: vec![],
    ///     doi: String::new(),
    ///     views: 0,
    ///     downloads: 0,
    ///     citations: 0,
    ///     content: None,
    ///     pdf_url: None,
    ///     references: vec![],
    /// };
    /// assert_eq!(
    ///     article.apa_citation("DSPG Journal"),
    ///     "A. One, B. Two (2024). On Things. DSPG Journal, 12(1)."
    /// );
    /// ```
    pub fn apa_citation(&self, journal_acronym: &str) -> String {
        format!(
            "{} ({}). {}. {}, {}({}).",
            self.authors.join(", "),
            self.year(),
            self.title,
            journal_acronym,
            self.volume,
            self.issue
        )
    }

    /// Text handed to the summary assistant: abstract followed by full text, if any.
    pub fn summary_source(&self) -> String {
        match &self.content {
            Some(content) => format!("{} {}", self.abstract_text, content),
            None => format!("{} ", self.abstract_text),
        }
    }

    /// Whether `name` appears verbatim in the author list.
    pub fn has_author(&self, name: &str) -> bool {
        self.authors.iter().any(|author| author == name)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::article;

    #[test]
    fn test_apa_citation_single_author() {
        let a = article("x", "Green Engineering", &[]);
        assert_eq!(
            a.apa_citation("DSPG Journal"),
            "Test Author (2024). Green Engineering. DSPG Journal, 1(1)."
        );
    }

    #[test]
    fn test_summary_source_appends_content() {
        let mut a = article("x", "T", &[]);
        assert_eq!(a.summary_source(), "Abstract of T ");

        a.content = Some("Body".to_string());
        assert_eq!(a.summary_source(), "Abstract of T Body");
    }

    #[test]
    fn test_has_author_is_exact() {
        let a = article("x", "T", &[]);
        assert!(a.has_author("Test Author"));
        assert!(!a.has_author("test author"));
        assert!(!a.has_author("Test"));
    }
}
