//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_archives, format_article, format_article_list, format_board, format_dashboard,
    format_report,
};
