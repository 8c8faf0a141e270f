// src/core/mod.rs

pub mod config;
pub mod store;

pub use store::CredentialStore;
