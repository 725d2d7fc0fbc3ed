//! # cdcat Common Library
//!
//! Shared code for the cdcat crates including:
//! - Catalog records (CDs, wantlist items, discography albums)
//! - Configuration loading (TOML + environment)
//! - Common error type

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{Catalog, Cd, DiscographyAlbum, ReleaseYear, WantlistItem};
pub use config::{EmptyFieldPolicy, LoggingConfig, MatchingConfig, TomlConfig};
pub use error::{Error, Result};
