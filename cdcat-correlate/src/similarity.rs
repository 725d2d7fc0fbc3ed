//! Pairwise similarity scoring
//!
//! Score = normalized Damerau-Levenshtein ratio (`1 - distance / max_len`, over
//! chars) of the normalized labels, or of their token-sorted forms when that is
//! higher. The token-sorted pass absorbs reordering ("Canada, Boards of");
//! Damerau keeps a single transposition ("Raidohead") to one edit.
//!
//! Both passes are symmetric, so the score is too.

use crate::normalize::normalize;

/// Default minimum agreement, calibrated for artist names
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Similarity of two raw labels in [0, 1]
///
/// Total over all inputs. Empty vs non-empty (after normalization) scores 0;
/// two empty labels score 1 by vacuity. Callers that must not treat two blank
/// fields as equal should go through [`crate::Correlator`] with
/// `EmptyFieldPolicy::Never`.
pub fn similarity(a: &str, b: &str) -> f64 {
    score_normalized(&normalize(a), &normalize(b))
}

/// `similarity(a, b) >= threshold`
///
/// A NaN threshold never matches; a threshold at or below 0 always does.
pub fn are_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}

/// [`are_similar`] at [`DEFAULT_THRESHOLD`]
pub fn are_similar_default(a: &str, b: &str) -> bool {
    are_similar(a, b, DEFAULT_THRESHOLD)
}

/// Score two labels that are already normalized
pub fn score_normalized(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let direct = strsim::normalized_damerau_levenshtein(a, b);
    let reordered = strsim::normalized_damerau_levenshtein(&token_sorted(a), &token_sorted(b));

    direct.max(reordered).clamp(0.0, 1.0)
}

fn token_sorted(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}
