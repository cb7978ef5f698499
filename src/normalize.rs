//! Text normalization for article and section matching.
//!
//! Two forms are produced:
//!
//! - [`strip_accents_lower`] — Unicode NFD decomposition with combining
//!   marks removed, then lowercased. Section keys and section queries are
//!   compared in this form.
//! - [`normalize_text`] — the accent-stripped form with every run of
//!   characters outside `[a-z0-9]` collapsed to a single space and the ends
//!   trimmed. Article identifiers, titles, and article queries are compared
//!   in this form.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics and lowercases `s`.
///
/// `"Introducción"` becomes `"introduccion"`. Punctuation and whitespace are
/// left untouched.
pub fn strip_accents_lower(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase()
}

/// Canonical comparison form of `s`.
///
/// The result contains only lowercase ASCII letters, digits, and single
/// interior spaces. Applying it twice gives the same result as applying it
/// once.
pub fn normalize_text(s: &str) -> String {
    let no_accents = strip_accents_lower(s);
    non_alphanumeric_runs()
        .replace_all(&no_accents, " ")
        .trim()
        .to_string()
}

fn non_alphanumeric_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern compiles"))
}
