//! Journal session: the owned state behind one run of the program

use crate::domain::{EditorialMember, JournalProfile};
use crate::error::Result;
use crate::infrastructure::{Catalog, InMemoryArticleStore, SubmissionLedger};

/// Article store and submission ledger for one session.
///
/// Built once from a catalog and lent to services by reference. The ledger
/// starts empty and lives exactly as long as this value.
#[derive(Debug)]
pub struct Journal {
    pub profile: JournalProfile,
    pub board: Vec<EditorialMember>,
    store: InMemoryArticleStore,
    ledger: SubmissionLedger,
}

impl Journal {
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let store = InMemoryArticleStore::new(catalog.articles)?;
        tracing::info!(articles = store.len(), "Journal session started");

        Ok(Journal {
            profile: catalog.journal,
            board: catalog.board,
            store,
            ledger: SubmissionLedger::new(),
        })
    }

    pub fn store(&self) -> &InMemoryArticleStore {
        &self.store
    }

    pub fn ledger(&self) -> &SubmissionLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut SubmissionLedger {
        &mut self.ledger
    }
}
