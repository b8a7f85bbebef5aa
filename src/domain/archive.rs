//! Archive grouping by year, volume and issue

use crate::domain::Article;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// One issue of the journal and the articles published in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveIssue<'a> {
    pub volume: u32,
    pub issue: u32,
    pub articles: Vec<&'a Article>,
}

/// All issues that appeared in one publication year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveYear<'a> {
    pub year: i32,
    pub issues: Vec<ArchiveIssue<'a>>,
}

/// Group articles newest year first, then by (volume, issue) descending.
/// Articles inside an issue keep store order.
pub fn group_by_year(articles: &[Article]) -> Vec<ArchiveYear<'_>> {
    let mut years: BTreeMap<Reverse<i32>, BTreeMap<Reverse<(u32, u32)>, Vec<&Article>>> =
        BTreeMap::new();

    for article in articles {
        years
            .entry(Reverse(article.year()))
            .or_default()
            .entry(Reverse((article.volume, article.issue)))
            .or_default()
            .push(article);
    }

    years
        .into_iter()
        .map(|(Reverse(year), issues)| ArchiveYear {
            year,
            issues: issues
                .into_iter()
                .map(|(Reverse((volume, issue)), articles)| ArchiveIssue {
                    volume,
                    issue,
                    articles,
                })
                .collect(),
        })
        .collect()
}
