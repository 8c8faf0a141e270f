// src/models.rs
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

/// What the store keeps per site. The site itself is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub email: String,
    pub password: String,
}

/// A stored login together with the site it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub site: String,
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn from_record(site: &str, record: LoginRecord) -> Self {
        Self {
            site: site.to_string(),
            email: record.email,
            password: record.password,
        }
    }
}

// Whole on-disk document: site -> record
pub type StoreDocument = BTreeMap<String, LoginRecord>;

// Outcome of a legacy import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub lines_read: usize,
    pub sites_written: usize,
}
