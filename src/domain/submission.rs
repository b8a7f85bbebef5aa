//! Manuscript submissions and the people who make them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author id recorded when nobody is signed in
pub const GUEST_AUTHOR_ID: &str = "guest";

/// Workflow status of a submission.
///
/// The set is closed; no transition rules are defined between the states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    #[default]
    Submitted,
    UnderReview,
    RevisionRequired,
    Accepted,
    Rejected,
}

impl SubmissionStatus {
    /// Human-readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "Draft",
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::UnderReview => "Under Review",
            SubmissionStatus::RevisionRequired => "Revision Required",
            SubmissionStatus::Accepted => "Accepted",
            SubmissionStatus::Rejected => "Rejected",
        }
    }
}

/// A manuscript under consideration. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub author_name: String,
    pub email: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Role of the person looking at the dashboard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    #[default]
    Author,
    Editor,
    Reviewer,
    Admin,
}

impl UserRole {
    /// Editors see every submission in the ledger
    pub fn sees_all_submissions(&self) -> bool {
        matches!(self, UserRole::Editor)
    }
}

/// Identity used to look up a person's submissions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl Principal {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Principal {
            id: id.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Matches on author id OR email, so submissions made before an account existed are found too.
    pub fn owns(&self, submission: &Submission) -> bool {
        submission.author_id == self.id || submission.email == self.email
    }
}
