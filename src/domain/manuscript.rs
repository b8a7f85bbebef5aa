//! Submission form data and its conversion into a ledger record

use crate::domain::{Principal, Submission, SubmissionStatus, GUEST_AUTHOR_ID};
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an author fills in on the submission form.
///
/// `keywords` is the raw comma-separated text from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manuscript {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl Manuscript {
    /// Fill author name and email from the signed-in principal where the form left them blank.
    pub fn prefill_from(mut self, principal: &Principal) -> Self {
        if self.author_name.trim().is_empty() {
            self.author_name = principal.name.clone();
        }
        if self.email.trim().is_empty() {
            self.email = principal.email.clone();
        }
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("abstract", &self.abstract_text),
            ("author_name", &self.author_name),
            ("email", &self.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(JournalError::InvalidManuscript(format!(
                    "missing required field '{}'",
                    field
                )));
            }
        }

        if !self.email.contains('@') {
            return Err(JournalError::InvalidManuscript(format!(
                "invalid email address '{}'",
                self.email
            )));
        }

        Ok(())
    }

    /// Split the comma-separated keyword text, trimming and dropping empty entries.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the ledger record for this manuscript, submitted at `now`.
    pub fn into_submission(
        self,
        id: String,
        principal: Option<&Principal>,
        now: DateTime<Utc>,
    ) -> Result<Submission> {
        self.validate()?;

        let keywords = self.keyword_list();
        let author_id = principal
            .map(|p| p.id.clone())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| GUEST_AUTHOR_ID.to_string());

        Ok(Submission {
            id,
            title: self.title.trim().to_string(),
            author_id,
            author_name: self.author_name.trim().to_string(),
            email: self.email.trim().to_string(),
            abstract_text: self.abstract_text.trim().to_string(),
            keywords,
            status: SubmissionStatus::Submitted,
            submitted_at: now,
            last_updated: now,
            file_url: self.file_url,
        })
    }
}

/// Submission id derived from the submission time, with a batch position suffix
/// for every manuscript after the first submitted in the same run.
pub fn submission_id(now: DateTime<Utc>, batch_index: usize) -> String {
    if batch_index == 0 {
        format!("sub-{}", now.timestamp_millis())
    } else {
        format!("sub-{}-{}", now.timestamp_millis(), batch_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> Manuscript {
        Manuscript {
            title: "  Solar Kilns ".to_string(),
            abstract_text: "Drying timber with sunlight.".to_string(),
            keywords: "Energy, , Timber ,Drying".to_string(),
            author_name: "Dr. Jane Roe".to_string(),
            email: "jane@example.edu".to_string(),
            institution: "DSPG".to_string(),
            file_url: None,
        }
    }

    #[test]
    fn test_keyword_list_trims_and_drops_empty() {
        assert_eq!(form().keyword_list(), vec!["Energy", "Timber", "Drying"]);
        assert!(Manuscript::default().keyword_list().is_empty());
    }

    #[test]
    fn test_validate_requires_fields() {
        let mut m = form();
        m.title = "   ".to_string();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("'title'"));

        let mut m = form();
        m.email = "not-an-email".to_string();
        assert!(matches!(
            m.validate(),
            Err(JournalError::InvalidManuscript(_))
        ));
    }

    #[test]
    fn test_into_submission_sets_workflow_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let principal = Principal::new("u-1", "jane@example.edu");

        let sub = form()
            .into_submission(submission_id(now, 0), Some(&principal), now)
            .unwrap();

        assert_eq!(sub.id, format!("sub-{}", now.timestamp_millis()));
        assert_eq!(sub.title, "Solar Kilns");
        assert_eq!(sub.author_id, "u-1");
        assert_eq!(sub.status, SubmissionStatus::Submitted);
        assert_eq!(sub.submitted_at, now);
        assert_eq!(sub.last_updated, now);
    }

    #[test]
    fn test_into_submission_without_principal_is_guest() {
        let now = Utc::now();
        let sub = form().into_submission("s1".to_string(), None, now).unwrap();
        assert_eq!(sub.author_id, GUEST_AUTHOR_ID);
    }

    #[test]
    fn test_prefill_keeps_form_values() {
        let principal = Principal::new("u-1", "signed-in@example.edu").with_name("Signed In");

        let blank = Manuscript {
            title: "T".to_string(),
            ..Default::default()
        }
        .prefill_from(&principal);
        assert_eq!(blank.email, "signed-in@example.edu");
        assert_eq!(blank.author_name, "Signed In");

        let filled = form().prefill_from(&principal);
        assert_eq!(filled.email, "jane@example.edu");
    }

    #[test]
    fn test_submission_id_batch_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ms = now.timestamp_millis();
        assert_eq!(submission_id(now, 0), format!("sub-{}", ms));
        assert_eq!(submission_id(now, 2), format!("sub-{}-2", ms));
    }
}
