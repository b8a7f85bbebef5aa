//! Dashboard counters

use crate::domain::{Article, Principal, Submission, SubmissionStatus};

/// Headline numbers shown above a dashboard's manuscript table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub submissions: usize,
    pub under_review: usize,
    pub published: usize,
}

impl DashboardSummary {
    /// `visible` is what the principal is allowed to see (everything for editors).
    pub fn compute(principal: &Principal, visible: &[&Submission], articles: &[Article]) -> Self {
        let published = if principal.role.sees_all_submissions() {
            articles.len()
        } else {
            articles
                .iter()
                .filter(|article| article.has_author(&principal.name))
                .count()
        };

        DashboardSummary {
            submissions: visible.len(),
            under_review: visible
                .iter()
                .filter(|s| s.status == SubmissionStatus::UnderReview)
                .count(),
            published,
        }
    }
}
