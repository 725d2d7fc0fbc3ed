//! Field-aware correlator
//!
//! Wraps the raw similarity engine with the thresholds and empty-field policy
//! from `[matching]` configuration. Stateless and `Copy`: share it freely
//! across threads.

use crate::normalize::normalize;
use crate::similarity::score_normalized;
use cdcat_common::{EmptyFieldPolicy, MatchingConfig};
use tracing::trace;

/// Decides whether two artist names or album titles denote the same thing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Correlator {
    config: MatchingConfig,
}

impl Correlator {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Similarity in [0, 1] under this correlator's empty-field policy
    ///
    /// Identical to [`crate::similarity`] except that two labels which are
    /// both empty after normalization score 0 under `EmptyFieldPolicy::Never`.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);

        if a.is_empty() && b.is_empty() {
            return match self.config.empty_fields {
                EmptyFieldPolicy::Vacuous => 1.0,
                EmptyFieldPolicy::Never => 0.0,
            };
        }

        score_normalized(&a, &b)
    }

    /// Artist names agree at `artist_threshold`
    pub fn artists_match(&self, a: &str, b: &str) -> bool {
        self.agrees("artist", a, b, self.config.artist_threshold)
    }

    /// Album titles agree at `title_threshold`
    pub fn titles_match(&self, a: &str, b: &str) -> bool {
        self.agrees("title", a, b, self.config.title_threshold)
    }

    /// Both artist and title agree
    pub fn same_release(
        &self,
        artist_a: &str,
        title_a: &str,
        artist_b: &str,
        title_b: &str,
    ) -> bool {
        self.artists_match(artist_a, artist_b) && self.titles_match(title_a, title_b)
    }

    fn agrees(&self, field: &'static str, a: &str, b: &str, threshold: f64) -> bool {
        let score = self.score(a, b);
        let matched = score >= threshold;

        trace!(
            field,
            a = %a,
            b = %b,
            score,
            threshold,
            matched,
            "Correlation verdict"
        );

        matched
    }
}
