//! dspg-journal - Academic journal catalog and submission desk
//!
//! An in-memory article store with search and related-article discovery, an
//! append-only submission ledger with author and editor dashboards, and an
//! originality checker that delegates analysis to an external model.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
