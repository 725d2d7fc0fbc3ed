//! Wantlist and discography reconciliation
//!
//! Answers the two catalog questions with pairwise correlator calls only:
//! - is a wantlist entry already satisfied by an owned CD?
//! - which discography albums are missing from the wantlist (and library)?
//!
//! Every check is a linear scan, so a full reconciliation costs
//! O(albums x (library + wantlist)) correlations. Nothing is cached.

use crate::correlator::Correlator;
use crate::report::{AlbumLine, AlbumState, ArtistLine, Report, WantlistLine};
use cdcat_common::{Catalog, Cd, DiscographyAlbum, WantlistItem};
use tracing::{debug, info};

/// Whether a wantlist entry is already owned
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WantlistStatus<'a> {
    /// A library CD matches on artist and title
    Satisfied { cd: &'a Cd },
    /// Nothing in the library matches
    Outstanding,
}

/// Where a discography album stands relative to the user's collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlbumStatus<'a> {
    Owned { cd: &'a Cd },
    Wanted { item: &'a WantlistItem },
    Missing,
}

/// Check a wantlist entry against the library
///
/// The first matching CD in library order wins.
pub fn wantlist_status<'a>(
    correlator: &Correlator,
    item: &WantlistItem,
    library: &'a [Cd],
) -> WantlistStatus<'a> {
    library
        .iter()
        .find(|cd| correlator.same_release(&item.artist, &item.title, &cd.artist, &cd.title))
        .map_or(WantlistStatus::Outstanding, |cd| WantlistStatus::Satisfied { cd })
}

/// First wantlist entry naming this artist's album, if any
pub fn find_wanted<'a>(
    correlator: &Correlator,
    artist: &str,
    album: &DiscographyAlbum,
    wantlist: &'a [WantlistItem],
) -> Option<&'a WantlistItem> {
    wantlist
        .iter()
        .find(|item| correlator.same_release(artist, &album.title, &item.artist, &item.title))
}

/// Classify one discography album: owned beats wanted beats missing
pub fn discography_status<'a>(
    correlator: &Correlator,
    artist: &str,
    album: &DiscographyAlbum,
    library: &'a [Cd],
    wantlist: &'a [WantlistItem],
) -> AlbumStatus<'a> {
    if let Some(cd) = library
        .iter()
        .find(|cd| correlator.same_release(artist, &album.title, &cd.artist, &cd.title))
    {
        return AlbumStatus::Owned { cd };
    }

    match find_wanted(correlator, artist, album, wantlist) {
        Some(item) => AlbumStatus::Wanted { item },
        None => AlbumStatus::Missing,
    }
}

/// Discography albums that no wantlist entry covers
///
/// Only the wantlist is consulted; use [`discography_status`] to also account
/// for albums already on the shelf.
pub fn missing_albums<'a>(
    correlator: &Correlator,
    artist: &str,
    discography: &'a [DiscographyAlbum],
    wantlist: &[WantlistItem],
) -> Vec<&'a DiscographyAlbum> {
    discography
        .iter()
        .filter(|album| find_wanted(correlator, artist, album, wantlist).is_none())
        .collect()
}

/// Reconcile a whole catalog
///
/// Wantlist lines keep wantlist order; artists follow the catalog's (sorted)
/// discography keys and albums keep source order.
pub fn reconcile(correlator: &Correlator, catalog: &Catalog) -> Report {
    let wantlist: Vec<WantlistLine> = catalog
        .wantlist
        .iter()
        .map(|item| WantlistLine {
            item: item.clone(),
            satisfied_by: match wantlist_status(correlator, item, &catalog.library) {
                WantlistStatus::Satisfied { cd } => Some(cd.clone()),
                WantlistStatus::Outstanding => None,
            },
        })
        .collect();

    let discographies: Vec<ArtistLine> = catalog
        .discographies
        .iter()
        .map(|(artist, albums)| {
            let albums: Vec<AlbumLine> = albums
                .iter()
                .map(|album| AlbumLine {
                    album: album.clone(),
                    state: match discography_status(
                        correlator,
                        artist,
                        album,
                        &catalog.library,
                        &catalog.wantlist,
                    ) {
                        AlbumStatus::Owned { cd } => AlbumState::Owned { cd: cd.clone() },
                        AlbumStatus::Wanted { item } => AlbumState::Wanted { item: item.clone() },
                        AlbumStatus::Missing => AlbumState::Missing,
                    },
                })
                .collect();

            debug!(
                artist = %artist,
                albums = albums.len(),
                missing = albums.iter().filter(|a| a.state.is_missing()).count(),
                "Discography reconciled"
            );

            ArtistLine {
                artist: artist.clone(),
                albums,
            }
        })
        .collect();

    let report = Report {
        wantlist,
        discographies,
    };

    info!(
        wantlist = report.wantlist.len(),
        satisfied = report.satisfied_count(),
        missing_albums = report.missing_count(),
        "Catalog reconciled"
    );

    report
}
