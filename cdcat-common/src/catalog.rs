//! Catalog records handed to the correlation engine
//!
//! These are plain data carriers. Identity and metadata fields travel with the
//! records but never take part in correlation; only the free-text `artist` and
//! `title` labels do.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use uuid::Uuid;

/// Release year as provided by the source
///
/// Discography sources are inconsistent: some give a number (`1997`), some a
/// string (`"1997"`, `"c. 1995"`, `"unknown"`). Both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Number(year) => write!(f, "{}", year),
            ReleaseYear::Text(text) => f.write_str(text),
        }
    }
}

/// A CD owned by the user (library entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cd {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub artist: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<ReleaseYear>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Cd {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            artist: artist.into(),
            title: title.into(),
            year: None,
            genre: None,
        }
    }
}

/// An album the user wants to acquire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WantlistItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub artist: String,

    pub title: String,

    /// Free-form notes (pressing, price limit, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WantlistItem {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            artist: artist.into(),
            title: title.into(),
            notes: None,
        }
    }
}

/// One album of an artist's known discography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscographyAlbum {
    pub title: String,
    pub year: ReleaseYear,
}

impl DiscographyAlbum {
    pub fn new(title: impl Into<String>, year: ReleaseYear) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

/// Complete catalog document: library, wantlist and per-artist discographies
///
/// Discography keys are artist names exactly as the source spelled them; they
/// are correlated against wantlist/library artists like any other label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub library: Vec<Cd>,

    #[serde(default)]
    pub wantlist: Vec<WantlistItem>,

    #[serde(default)]
    pub discographies: BTreeMap<String, Vec<DiscographyAlbum>>,
}

impl Catalog {
    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read and `Error::Json` if it
    /// is not a valid catalog document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let catalog = Self::from_json_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            library = catalog.library.len(),
            wantlist = catalog.wantlist.len(),
            artists = catalog.discographies.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year_accepts_number_or_text() {
        let numeric: DiscographyAlbum =
            serde_json::from_str(r#"{"title": "Geogaddi", "year": 2002}"#).unwrap();
        assert_eq!(numeric.year, ReleaseYear::Number(2002));

        let textual: DiscographyAlbum =
            serde_json::from_str(r#"{"title": "Twoism", "year": "1995"}"#).unwrap();
        assert_eq!(textual.year, ReleaseYear::Text("1995".to_string()));

        assert_eq!(numeric.year.to_string(), "2002");
        assert_eq!(textual.year.to_string(), "1995");
    }

    #[test]
    fn test_catalog_ids_default_when_absent() {
        let catalog = Catalog::from_json_str(
            r#"{
                "library": [{"artist": "Radiohead", "title": "OK Computer"}],
                "wantlist": [{"artist": "Boards of Canada", "title": "Geogaddi"}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.library.len(), 1);
        assert_eq!(catalog.wantlist.len(), 1);
        assert!(catalog.discographies.is_empty());
        assert_ne!(catalog.library[0].id, catalog.wantlist[0].id);
    }

    #[test]
    fn test_catalog_rejects_missing_title() {
        let result = Catalog::from_json_str(r#"{"library": [{"artist": "Radiohead"}]}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
