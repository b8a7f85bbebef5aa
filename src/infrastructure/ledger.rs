//! Append-only submission ledger

use crate::domain::{Principal, Submission};

/// Submissions recorded during this session, in arrival order.
///
/// Ids are caller-generated and not checked for uniqueness; a repeated id is
/// accepted and logged.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLedger {
    submissions: Vec<Submission>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, submission: Submission) {
        if self.submissions.iter().any(|s| s.id == submission.id) {
            tracing::warn!(id = %submission.id, "Submission id already in ledger");
        }
        tracing::debug!(id = %submission.id, email = %submission.email, "Recorded submission");
        self.submissions.push(submission);
    }

    /// Submissions whose author id or email belongs to `principal`
    pub fn list_for(&self, principal: &Principal) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|submission| principal.owns(submission))
            .collect()
    }

    pub fn list_all(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}
