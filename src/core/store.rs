// src/core/store.rs
use crate::models::{Credential, LoginRecord, StoreDocument};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No data file found")]
    StoreMissing,

    #[error("No details for {0} exist")]
    NoSuchSite(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Data file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Failed to encode data file: {0}")]
    Encode(serde_json::Error),

    #[error("Failed to replace data file: {0}")]
    Persist(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Credential store backed by a single JSON document.
///
/// Nothing is cached between calls: every operation reads the file, and every
/// mutation writes the whole document back before returning.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Insert or replace the record for `site`.
    pub fn upsert(&self, site: &str, email: &str, password: &str) -> Result<()> {
        if site.is_empty() {
            return Err(StoreError::Validation("site must not be empty".into()));
        }

        let mut document = self.load()?.unwrap_or_default();

        let replaced = document
            .insert(
                site.to_string(),
                LoginRecord {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .is_some();

        self.save(&document)?;

        if replaced {
            log::info!("Updated login for {}", site);
        } else {
            log::info!("Saved new login for {}", site);
        }
        Ok(())
    }

    /// Insert or replace several records with a single write.
    pub fn upsert_many<I>(&self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = Credential>,
    {
        let mut document = self.load()?.unwrap_or_default();
        let mut written = 0;

        for entry in entries {
            if entry.site.is_empty() {
                return Err(StoreError::Validation("site must not be empty".into()));
            }
            document.insert(
                entry.site,
                LoginRecord {
                    email: entry.email,
                    password: entry.password,
                },
            );
            written += 1;
        }

        self.save(&document)?;
        log::info!("Wrote {} login(s) to {}", written, self.path.display());
        Ok(written)
    }

    pub fn lookup(&self, site: &str) -> Result<Credential> {
        if site.is_empty() {
            return Err(StoreError::Validation("site must not be empty".into()));
        }

        let mut document = self.load()?.ok_or(StoreError::StoreMissing)?;

        match document.remove(site) {
            Some(record) => Ok(Credential::from_record(site, record)),
            None => {
                log::debug!("No record for {} in {}", site, self.path.display());
                Err(StoreError::NoSuchSite(site.to_string()))
            }
        }
    }

    /// All stored sites in sorted order. A missing file means no sites.
    pub fn sites(&self) -> Result<Vec<String>> {
        Ok(self
            .load()?
            .map(|document| document.into_keys().collect())
            .unwrap_or_default())
    }

    // None when the file does not exist yet
    fn load(&self) -> Result<Option<StoreDocument>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_str(&content)?;
        Ok(Some(document))
    }

    fn save(&self, document: &StoreDocument) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let buf = encode_document(document)?;

        // Write next to the target and rename over it
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&buf)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Persist(e.error.to_string()))?;

        log::debug!("Flushed {} record(s) to {}", document.len(), self.path.display());
        Ok(())
    }
}

// Pretty JSON with 4-space indentation
fn encode_document(document: &StoreDocument) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(document, &mut serializer).map_err(StoreError::Encode)?;
    Ok(buf)
}
