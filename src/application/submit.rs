//! Submit manuscripts use case

use crate::domain::{submission_id, Manuscript, Principal, Submission};
use crate::error::Result;
use crate::infrastructure::SubmissionLedger;
use chrono::{DateTime, Utc};

/// Service turning submission forms into ledger entries
pub struct SubmissionService<'a> {
    ledger: &'a mut SubmissionLedger,
}

impl<'a> SubmissionService<'a> {
    pub fn new(ledger: &'a mut SubmissionLedger) -> Self {
        SubmissionService { ledger }
    }

    /// Validate one form and append it to the ledger.
    ///
    /// `batch_index` is the position of this form among those submitted at `now`.
    pub fn submit(
        &mut self,
        manuscript: Manuscript,
        principal: Option<&Principal>,
        now: DateTime<Utc>,
        batch_index: usize,
    ) -> Result<Submission> {
        let manuscript = match principal {
            Some(p) => manuscript.prefill_from(p),
            None => manuscript,
        };
        let submission =
            manuscript.into_submission(submission_id(now, batch_index), principal, now)?;

        tracing::info!(id = %submission.id, title = %submission.title, "Manuscript submitted");
        self.ledger.append(submission.clone());
        Ok(submission)
    }

    /// Submit several forms at the same instant. Stops at the first invalid form;
    /// forms before it stay in the ledger.
    pub fn submit_all(
        &mut self,
        manuscripts: Vec<Manuscript>,
        principal: Option<&Principal>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Submission>> {
        manuscripts
            .into_iter()
            .enumerate()
            .map(|(idx, manuscript)| self.submit(manuscript, principal, now, idx))
            .collect()
    }
}
