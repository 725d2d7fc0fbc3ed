//! cdcat-correlate library interface
//!
//! Fuzzy correlation of free-text artist names and album titles, plus the
//! wantlist/discography reconciliation built on it.
//!
//! ```
//! use cdcat_correlate::{are_similar, similarity};
//!
//! assert!(are_similar("Radiohead", "  radiohead  ", 0.8));
//! assert_eq!(similarity("", "nonempty"), 0.0);
//! ```

pub mod cli;
pub mod correlator;
pub mod normalize;
pub mod reconcile;
pub mod report;
pub mod similarity;

pub use crate::correlator::Correlator;
pub use crate::normalize::normalize;
pub use crate::reconcile::{
    discography_status, missing_albums, reconcile, wantlist_status, AlbumStatus, WantlistStatus,
};
pub use crate::report::Report;
pub use crate::similarity::{are_similar, are_similar_default, similarity, DEFAULT_THRESHOLD};
