//! Dashboard use case

use crate::domain::{DashboardSummary, Principal, Submission};
use crate::infrastructure::{ArticleRepository, SubmissionLedger};

/// What a signed-in person sees on their dashboard
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub principal: &'a Principal,
    pub summary: DashboardSummary,
    pub submissions: Vec<&'a Submission>,
}

impl DashboardView<'_> {
    pub fn heading(&self) -> &'static str {
        if self.principal.role.sees_all_submissions() {
            "All Incoming Manuscripts"
        } else {
            "My Manuscripts"
        }
    }
}

pub struct DashboardService<'a, R: ArticleRepository> {
    repository: &'a R,
    ledger: &'a SubmissionLedger,
}

impl<'a, R: ArticleRepository> DashboardService<'a, R> {
    pub fn new(repository: &'a R, ledger: &'a SubmissionLedger) -> Self {
        DashboardService { repository, ledger }
    }

    /// Editors see every submission; everyone else sees their own
    pub fn view(&self, principal: &'a Principal) -> DashboardView<'a> {
        let submissions: Vec<&'a Submission> = if principal.role.sees_all_submissions() {
            self.ledger.list_all().iter().collect()
        } else {
            self.ledger.list_for(principal)
        };

        let summary =
            DashboardSummary::compute(principal, &submissions, self.repository.articles());

        DashboardView {
            principal,
            summary,
            submissions,
        }
    }
}
