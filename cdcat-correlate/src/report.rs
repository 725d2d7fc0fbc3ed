//! Reconciliation report
//!
//! Owned, serializable snapshot of a [`crate::reconcile()`] run. Rendered as
//! plain text through `Display` or as JSON through serde.

use cdcat_common::{Cd, DiscographyAlbum, WantlistItem};
use serde::Serialize;
use std::fmt;

/// Result of reconciling a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub wantlist: Vec<WantlistLine>,
    pub discographies: Vec<ArtistLine>,
}

/// One wantlist entry and the library CD satisfying it, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WantlistLine {
    pub item: WantlistItem,
    pub satisfied_by: Option<Cd>,
}

/// One artist's discography, album by album
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistLine {
    pub artist: String,
    pub albums: Vec<AlbumLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumLine {
    pub album: DiscographyAlbum,
    pub state: AlbumState,
}

/// Owned counterpart of [`crate::AlbumStatus`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlbumState {
    Owned { cd: Cd },
    Wanted { item: WantlistItem },
    Missing,
}

impl AlbumState {
    pub fn is_missing(&self) -> bool {
        matches!(self, AlbumState::Missing)
    }

    fn label(&self) -> &'static str {
        match self {
            AlbumState::Owned { .. } => "owned",
            AlbumState::Wanted { .. } => "wanted",
            AlbumState::Missing => "missing",
        }
    }
}

impl Report {
    /// Wantlist entries already on the shelf
    pub fn satisfied_count(&self) -> usize {
        self.wantlist
            .iter()
            .filter(|line| line.satisfied_by.is_some())
            .count()
    }

    /// Discography albums neither owned nor wanted, across all artists
    pub fn missing_count(&self) -> usize {
        self.discographies
            .iter()
            .flat_map(|artist| artist.albums.iter())
            .filter(|line| line.state.is_missing())
            .count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wantlist ({} items, {} already owned)",
            self.wantlist.len(),
            self.satisfied_count()
        )?;
        for line in &self.wantlist {
            match &line.satisfied_by {
                Some(cd) => writeln!(
                    f,
                    "  [owned]   {} - {}  (library: {} - {})",
                    line.item.artist, line.item.title, cd.artist, cd.title
                )?,
                None => writeln!(f, "  [wanted]  {} - {}", line.item.artist, line.item.title)?,
            }
        }

        for artist in &self.discographies {
            let missing = artist.albums.iter().filter(|a| a.state.is_missing()).count();
            writeln!(f)?;
            writeln!(
                f,
                "Discography: {} ({} albums, {} missing)",
                artist.artist,
                artist.albums.len(),
                missing
            )?;
            for line in &artist.albums {
                let tag = format!("[{}]", line.state.label());
                writeln!(
                    f,
                    "  {:<10}{:>6}  {}",
                    tag,
                    line.album.year.to_string(),
                    line.album.title
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdcat_common::ReleaseYear;

    fn sample() -> Report {
        let owned = Cd::new("Boards Of Canada", "Music Has the Right to Children");
        let wanted = WantlistItem::new("Boards of Canada", "Geogaddi");

        Report {
            wantlist: vec![
                WantlistLine {
                    item: wanted.clone(),
                    satisfied_by: None,
                },
                WantlistLine {
                    item: WantlistItem::new("Boards of Canada", "Music Has The Right To Children"),
                    satisfied_by: Some(owned.clone()),
                },
            ],
            discographies: vec![ArtistLine {
                artist: "Boards of Canada".to_string(),
                albums: vec![
                    AlbumLine {
                        album: DiscographyAlbum::new(
                            "Music Has the Right to Children",
                            ReleaseYear::Number(1998),
                        ),
                        state: AlbumState::Owned { cd: owned },
                    },
                    AlbumLine {
                        album: DiscographyAlbum::new("Geogaddi", ReleaseYear::Number(2002)),
                        state: AlbumState::Wanted { item: wanted },
                    },
                    AlbumLine {
                        album: DiscographyAlbum::new(
                            "The Campfire Headphase",
                            ReleaseYear::Text("2005".to_string()),
                        ),
                        state: AlbumState::Missing,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.satisfied_count(), 1);
        assert_eq!(report.missing_count(), 1);
    }

    #[test]
    fn test_text_rendering() {
        let text = sample().to_string();

        assert!(text.starts_with("Wantlist (2 items, 1 already owned)\n"));
        assert!(text.contains("  [wanted]  Boards of Canada - Geogaddi\n"));
        assert!(text.contains("Discography: Boards of Canada (3 albums, 1 missing)"));
        assert!(text.contains("[missing]   2005  The Campfire Headphase"));
        assert!(text.contains("[owned]     1998  Music Has the Right to Children"));
    }

    #[test]
    fn test_json_status_tag() {
        let json = serde_json::to_value(sample()).unwrap();
        let albums = &json["discographies"][0]["albums"];

        assert_eq!(albums[0]["state"]["status"], "owned");
        assert_eq!(albums[1]["state"]["status"], "wanted");
        assert_eq!(albums[2]["state"]["status"], "missing");
        assert_eq!(albums[0]["album"]["year"], 1998);
        assert_eq!(albums[2]["album"]["year"], "2005");
        assert!(json["wantlist"][0]["satisfied_by"].is_null());
    }
}
