//! Text normalization for artist/album correlation
//!
//! Turns a free-text label into a canonical comparable form:
//! - Unicode compatibility decomposition, combining marks dropped ("Björk" → "bjork")
//!   and undecomposable letters spelled out ("Ágætis" → "agaetis")
//! - Lowercase conversion
//! - Bracketed release qualifiers dropped ("Geogaddi (Remastered)" → "geogaddi")
//! - Trailing dashed release qualifiers dropped ("Abbey Road - 2019 Remaster" → "abbey road")
//! - `&` / `+` spelled out as "and"
//! - Apostrophes and periods removed, other punctuation replaced by a space
//! - Whitespace trimmed and collapsed
//!
//! `normalize(normalize(x)) == normalize(x)` for every input: the output holds
//! only lowercase alphanumerics separated by single spaces, which every step
//! leaves untouched.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words marking a bracketed or dashed segment as edition metadata rather
/// than part of the work's name
const RELEASE_QUALIFIERS: &[&str] = &[
    "remaster",
    "remastered",
    "remasters",
    "deluxe",
    "edition",
    "expanded",
    "anniversary",
    "bonus",
    "reissue",
    "reissued",
    "version",
    "mono",
    "stereo",
    "explicit",
];

/// Dash separators introducing a trailing qualifier segment
const DASH_SEPARATORS: &[&str] = &[" - ", " \u{2013} ", " \u{2014} "];

/// Normalize a label for comparison.
///
/// # Examples
///
/// ```
/// use cdcat_correlate::normalize::normalize;
///
/// assert_eq!(normalize("  Boards  of Canada "), "boards of canada");
/// assert_eq!(normalize("Geogaddi (Remastered)"), "geogaddi");
/// assert_eq!(normalize("Simon & Garfunkel"), "simon and garfunkel");
/// assert_eq!(normalize("Sigur Rós"), "sigur ros");
/// ```
pub fn normalize(text: &str) -> String {
    let folded = fold(text);
    let without_groups = strip_qualified_groups(&folded);
    let without_suffix = strip_qualified_suffix(&without_groups);

    let mut cleaned = String::with_capacity(without_suffix.len());
    for c in without_suffix.chars() {
        match c {
            '&' | '+' => cleaned.push_str(" and "),
            '\'' | '\u{2019}' | '\u{2018}' | '\u{02bc}' | '`' | '.' => {}
            c if c.is_alphanumeric() => cleaned.push(c),
            _ => cleaned.push(' '),
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize a label into normalized words
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// Decompose, drop combining marks, lowercase, spell out letters that have
/// no decomposition ("æ" → "ae").
///
/// Marks are filtered again after lowercasing: `'İ'.to_lowercase()` yields a
/// combining dot above.
fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    let lowered = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase);

    for c in lowered {
        match c {
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            'ß' => out.push_str("ss"),
            'þ' => out.push_str("th"),
            'ø' => out.push('o'),
            'ð' | 'đ' => out.push('d'),
            'ł' => out.push('l'),
            'ı' => out.push('i'),
            c if is_combining_mark(c) => {}
            c => out.push(c),
        }
    }

    out
}

fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// True if any word of `text` is a release qualifier
fn has_release_qualifier(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| RELEASE_QUALIFIERS.contains(&word))
}

/// Drop bracketed groups holding release qualifiers; unwrap the others.
///
/// Nesting is tracked so "(live (remastered))" is one group. An unclosed group
/// runs to the end of the text; a stray closing bracket becomes a space.
fn strip_qualified_groups(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut group = String::new();
    let mut depth = 0usize;

    for c in text.chars() {
        if depth == 0 {
            if is_open_bracket(c) {
                depth = 1;
                group.clear();
            } else if is_close_bracket(c) {
                out.push(' ');
            } else {
                out.push(c);
            }
            continue;
        }

        if is_open_bracket(c) {
            depth += 1;
            group.push(c);
        } else if is_close_bracket(c) {
            depth -= 1;
            if depth == 0 {
                close_group(&mut out, &group);
            } else {
                group.push(c);
            }
        } else {
            group.push(c);
        }
    }

    if depth > 0 {
        close_group(&mut out, &group);
    }

    out
}

fn close_group(out: &mut String, group: &str) {
    out.push(' ');
    if !has_release_qualifier(group) {
        out.push_str(group);
        out.push(' ');
    }
}

/// Cut a trailing " - <qualifier text>" segment.
///
/// The leftmost separator whose tail mentions a qualifier wins, provided
/// something other than whitespace precedes it.
fn strip_qualified_suffix(text: &str) -> &str {
    let mut cut: Option<usize> = None;

    for sep in DASH_SEPARATORS {
        for (pos, _) in text.match_indices(sep) {
            let head = &text[..pos];
            let tail = &text[pos + sep.len()..];
            if head.trim().is_empty() || !has_release_qualifier(tail) {
                continue;
            }
            cut = Some(cut.map_or(pos, |current| current.min(pos)));
        }
    }

    match cut {
        Some(pos) => &text[..pos],
        None => text,
    }
}
