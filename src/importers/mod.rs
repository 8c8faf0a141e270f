// src/importers/mod.rs

pub mod legacy;

pub use legacy::{ImportError, LegacyImporter};
