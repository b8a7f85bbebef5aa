//! Application layer - Use cases and orchestration

pub mod assistant;
pub mod browse;
pub mod dashboard;
pub mod init;
pub mod manage_config;
pub mod session;
pub mod submit;

pub use assistant::AssistantService;
pub use browse::{ArticleService, ArticleView};
pub use dashboard::{DashboardService, DashboardView};
pub use manage_config::ConfigService;
pub use session::Journal;
pub use submit::SubmissionService;
