//! End-to-end correlation tests over catalog fixtures
//!
//! Exercises the public API the way a catalog UI would: raw labels in,
//! verdicts and reconciliation reports out.

use cdcat_common::{
    Catalog, DiscographyAlbum, EmptyFieldPolicy, MatchingConfig, ReleaseYear, WantlistItem,
};
use cdcat_correlate::report::AlbumState;
use cdcat_correlate::{
    are_similar, discography_status, missing_albums, normalize, reconcile, similarity,
    AlbumStatus, Correlator,
};
use std::io::Write;

const CATALOG_JSON: &str = include_str!("fixtures/catalog.json");

fn fixture() -> Catalog {
    Catalog::from_json_str(CATALOG_JSON).expect("fixture catalog parses")
}

#[test]
fn test_remaster_qualifier_is_stripped_for_title_match() {
    // Wantlist {Boards of Canada, Geogaddi} vs discography album
    // "geogaddi (remaster)" listed under "Boards Of Canada": the remaster
    // qualifier is dropped during normalization, so this is a match at the
    // 0.9 title threshold.
    let item = WantlistItem::new("Boards of Canada", "Geogaddi");
    let album = DiscographyAlbum::new("geogaddi (remaster)", ReleaseYear::Number(2002));

    assert_eq!(normalize(&album.title), "geogaddi");
    assert_eq!(similarity(&item.title, &album.title), 1.0);
    assert!(are_similar(&item.title, &album.title, 0.9));
    assert!(are_similar(&item.artist, "Boards Of Canada", 0.8));

    let correlator = Correlator::default();
    let wantlist = vec![item];
    let status = discography_status(&correlator, "Boards Of Canada", &album, &[], &wantlist);
    assert!(matches!(status, AlbumStatus::Wanted { item } if item.title == "Geogaddi"));
}

#[test]
fn test_non_qualifier_parenthetical_is_kept() {
    // Kept content means a plain title no longer matches exactly
    assert_eq!(normalize("Kid A (Live)"), "kid a live");
    assert!(!are_similar("Kid A", "Kid A (Live)", 0.9));
}

#[test]
fn test_reconcile_fixture_with_default_policy() {
    let catalog = fixture();
    let report = reconcile(&Correlator::default(), &catalog);

    let satisfied: Vec<bool> = report
        .wantlist
        .iter()
        .map(|line| line.satisfied_by.is_some())
        .collect();
    assert_eq!(satisfied, vec![false, true, false]);
    assert_eq!(
        report.wantlist[1].satisfied_by.as_ref().map(|cd| cd.id),
        Some(catalog.library[1].id)
    );

    let artists: Vec<&str> = report
        .discographies
        .iter()
        .map(|a| a.artist.as_str())
        .collect();
    assert_eq!(artists, vec!["Boards Of Canada", "Sigur Rós"]);

    let boc: Vec<&AlbumState> = report.discographies[0]
        .albums
        .iter()
        .map(|a| &a.state)
        .collect();
    assert!(matches!(boc[0], AlbumState::Owned { .. }));
    assert!(matches!(boc[1], AlbumState::Wanted { .. }));
    assert!(boc[2].is_missing());
    assert!(boc[3].is_missing());

    // "( )" normalizes to nothing; under the default policy blank titles
    // never match, so the wanted copy does not count
    let sigur: Vec<&AlbumState> = report.discographies[1]
        .albums
        .iter()
        .map(|a| &a.state)
        .collect();
    assert!(sigur[0].is_missing());
    assert!(matches!(sigur[1], AlbumState::Owned { .. }));
    assert!(sigur[2].is_missing());

    assert_eq!(report.missing_count(), 4);
}

#[test]
fn test_reconcile_fixture_with_vacuous_policy() {
    let catalog = fixture();
    let correlator = Correlator::new(MatchingConfig {
        empty_fields: EmptyFieldPolicy::Vacuous,
        ..MatchingConfig::default()
    });
    let report = reconcile(&correlator, &catalog);

    let untitled = &report.discographies[1].albums[2];
    assert_eq!(untitled.album.title, "( )");
    assert!(matches!(&untitled.state, AlbumState::Wanted { item } if item.title == "( )"));
    assert_eq!(report.missing_count(), 3);
}

#[test]
fn test_missing_albums_consults_wantlist_only() {
    let catalog = fixture();
    let correlator = Correlator::default();
    let discography = &catalog.discographies["Boards Of Canada"];

    let missing = missing_albums(&correlator, "Boards Of Canada", discography, &catalog.wantlist);
    let titles: Vec<&str> = missing.iter().map(|a| a.title.as_str()).collect();

    // The owned debut still counts as missing from the wantlist
    assert_eq!(
        titles,
        vec![
            "Music Has the Right to Children",
            "The Campfire Headphase",
            "Tomorrow's Harvest"
        ]
    );
}

#[test]
fn test_catalog_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog, {
        // ids are generated on parse; compare everything else
        let mut expected = fixture();
        for (cd, loaded) in expected.library.iter_mut().zip(&catalog.library) {
            cd.id = loaded.id;
        }
        for (item, loaded) in expected.wantlist.iter_mut().zip(&catalog.wantlist) {
            item.id = loaded.id;
        }
        expected
    });
}

#[test]
fn test_catalog_load_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = Catalog::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(cdcat_common::Error::Io(_))));
}

#[test]
fn test_correlator_is_shareable_across_threads() {
    let correlator = Correlator::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || correlator.artists_match("Radiohead", "Raidohead"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
