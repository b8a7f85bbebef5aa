//! CLI command definitions

use crate::domain::UserRole;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dspg-journal")]
#[command(about = "Browse articles, submit manuscripts and check originality", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Article catalog to load instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config file (default: discovered .dspg-journal/config.toml)
    #[arg(long, global = true, value_name = "FILE", env = "DSPG_JOURNAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search titles, abstracts, authors and keywords
    Search {
        /// Text to look for (case-insensitive); omit to list every article
        #[arg(default_value = "")]
        query: String,
    },

    /// Show an article with its citation and related articles
    Show {
        /// Article id (e.g., dsp-2024-001)
        id: String,

        /// Also print the reference list
        #[arg(short, long)]
        references: bool,
    },

    /// List articles related to an article by shared keywords
    Related {
        /// Article id
        id: String,
    },

    /// Browse past issues by year, volume and issue
    Archives,

    /// Show the journal profile and editorial board
    Board,

    /// Submit manuscript forms (TOML files or directories of them)
    Submit {
        /// Manuscript files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Id of the signed-in user (default: guest)
        #[arg(long)]
        user_id: Option<String>,

        /// Email of the signed-in user
        #[arg(long)]
        email: Option<String>,

        /// Display name of the signed-in user
        #[arg(long)]
        name: Option<String>,

        /// Dashboard role
        #[arg(long, value_enum, default_value_t = UserRole::Author)]
        role: UserRole,
    },

    /// Check a manuscript for originality using the analysis service
    Check {
        /// Text or Markdown file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Generate an AI summary of an article
    Summary {
        /// Article id
        id: String,
    },

    /// Create a workspace config
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
