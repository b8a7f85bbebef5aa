//! Journal profile and editorial board

use serde::{Deserialize, Serialize};

/// Masthead information for the journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalProfile {
    pub name: String,
    pub acronym: String,
    #[serde(default)]
    pub impact_factor: Option<String>,
    #[serde(default)]
    pub five_year_impact: Option<String>,
    #[serde(default)]
    pub indexing_partners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub affiliation: String,
}
