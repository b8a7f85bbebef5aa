//! Domain layer - Records and stateless journal logic

pub mod archive;
pub mod article;
pub mod dashboard;
pub mod journal;
pub mod manuscript;
pub mod originality;
pub mod query;
pub mod submission;

pub use archive::{group_by_year, ArchiveIssue, ArchiveYear};
pub use article::Article;
pub use dashboard::DashboardSummary;
pub use journal::{EditorialMember, JournalProfile};
pub use manuscript::{submission_id, Manuscript};
pub use originality::{FlaggedSection, OriginalityReport, ScoreBand, Verdict};
pub use submission::{Principal, Submission, SubmissionStatus, UserRole, GUEST_AUTHOR_ID};
