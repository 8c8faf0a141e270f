// src/importers/legacy.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::core::store::{CredentialStore, StoreError};
use crate::models::{Credential, ImportSummary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Format error at line {0}: {1}")]
    FormatError(usize, String),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

const SEPARATOR_PADDING: &str = "  ";

/// Reads the plain-text log written by the first version of the tool,
/// one `site  |  login  |  password` entry per line.
pub struct LegacyImporter {
    delimiter: char,
}

impl LegacyImporter {
    pub fn new() -> Self {
        Self { delimiter: '|' }
    }

    pub fn import(&self, path: &Path, store: &CredentialStore) -> Result<ImportSummary, ImportError> {
        let file = File::open(path)?;
        let entries = self.parse(BufReader::new(file))?;
        let lines_read = entries.len();

        if entries.is_empty() {
            log::info!("{} has no entries to import", path.display());
            return Ok(ImportSummary::default());
        }

        let mut distinct: Vec<&str> = entries.iter().map(|e| e.site.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let sites_written = distinct.len();

        store.upsert_many(entries)?;

        log::info!(
            "Imported {} line(s) covering {} site(s) from {}",
            lines_read,
            sites_written,
            path.display()
        );

        Ok(ImportSummary { lines_read, sites_written })
    }

    // The whole input is parsed before anything is written
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Vec<Credential>, ImportError> {
        let mut entries = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            // Only the first two separators count; the password may contain '|'
            let parts: Vec<&str> = line.splitn(3, self.delimiter).collect();
            if parts.len() != 3 {
                return Err(ImportError::FormatError(
                    line_num + 1,
                    format!("expected 3 fields separated by '{}', found {}", self.delimiter, parts.len()),
                ));
            }

            let site = parts[0].trim();
            let login = parts[1].trim();
            let password = strip_padding(parts[2]);

            if site.is_empty() || login.is_empty() || password.is_empty() {
                return Err(ImportError::FormatError(
                    line_num + 1,
                    "site, login and password must all be present".to_string(),
                ));
            }

            entries.push(Credential {
                site: site.to_string(),
                email: login.to_string(),
                password: password.to_string(),
            });
        }

        Ok(entries)
    }
}

// Old versions wrote "  |  " between fields, so exactly two spaces of the
// password field are padding. Hand-edited lines fall back to trimming the start.
fn strip_padding(field: &str) -> &str {
    field
        .strip_prefix(SEPARATOR_PADDING)
        .unwrap_or_else(|| field.trim_start())
}

impl Default for LegacyImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_lines() {
        let input = "amazon.com  |  me@x.com  |  Ab3$cd9!ef\n\nebay.com  |  me@x.com  |  Zz11##qq\n";
        let entries = LegacyImporter::new().parse(input.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].site, "amazon.com");
        assert_eq!(entries[0].email, "me@x.com");
        assert_eq!(entries[0].password, "Ab3$cd9!ef");
        assert_eq!(entries[1].site, "ebay.com");
    }

    #[test]
    fn test_password_may_contain_delimiter() {
        let input = "a.com  |  me  |  ab|cd\n";
        let entries = LegacyImporter::new().parse(input.as_bytes()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "me");
        assert_eq!(entries[0].password, "ab|cd");
    }

    #[test]
    fn test_password_spaces_are_kept() {
        let input = "a.com  |  me@x.com  |   pw \n";
        let entries = LegacyImporter::new().parse(input.as_bytes()).unwrap();
        assert_eq!(entries[0].password, " pw ");
    }

    #[test]
    fn test_hand_edited_line_without_padding() {
        let input = "a.com|me| pw\n";
        let entries = LegacyImporter::new().parse(input.as_bytes()).unwrap();
        assert_eq!(entries[0].site, "a.com");
        assert_eq!(entries[0].password, "pw");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let input = "a.com | me | pw\nbroken line\n";
        match LegacyImporter::new().parse(input.as_bytes()) {
            Err(ImportError::FormatError(line, _)) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let input = "a.com |  | pw\n";
        assert!(matches!(
            LegacyImporter::new().parse(input.as_bytes()),
            Err(ImportError::FormatError(1, _))
        ));
    }

    #[test]
    fn test_import_into_store() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("data.txt");
        fs::write(
            &legacy,
            "a.com  |  me@x.com  |  first\nb.com  |  me@x.com  |  pw\na.com  |  me@x.com  |  second\n",
        )
        .unwrap();
        let store = CredentialStore::new(dir.path().join("data.json"));

        let summary = LegacyImporter::new().import(&legacy, &store).unwrap();

        assert_eq!(summary, ImportSummary { lines_read: 3, sites_written: 2 });
        assert_eq!(store.lookup("a.com").unwrap().password, "second");
        assert_eq!(store.lookup("b.com").unwrap().password, "pw");
    }

    #[test]
    fn test_malformed_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("data.txt");
        fs::write(&legacy, "a.com | me | pw\nb.com | me\n").unwrap();
        let store = CredentialStore::new(dir.path().join("data.json"));

        assert!(LegacyImporter::new().import(&legacy, &store).is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("data.json"));
        let result = LegacyImporter::new().import(&dir.path().join("nope.txt"), &store);
        assert!(matches!(result, Err(ImportError::IoError(_))));
    }
}
