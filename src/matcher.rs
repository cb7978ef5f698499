//! Free-text lookup of articles and sections.
//!
//! Matching is plain substring containment on normalized text and returns
//! the first hit in store (or section) order; there is no scoring.

use serde_json::Value;

use crate::error::ArticleError;
use crate::normalize::{normalize_text, strip_accents_lower};
use crate::store::{ArticleStore, StoredArticle};

/// Section queries that select the abstract instead of a section.
pub const ABSTRACT_ALIASES: [&str; 2] = ["abstract", "resumen"];

/// Returns the first article whose identifier or title contains `query`.
///
/// Both sides are compared with [`normalize_text`]. An identifier or title
/// that is missing or not a string compares as the empty string. An empty
/// query is contained in every string and therefore matches the first
/// article in the store.
pub fn find_article<'a>(query: &str, store: &'a ArticleStore) -> Option<&'a StoredArticle> {
    let q = normalize_text(query);
    store.iter().find(|stored| {
        let id = normalize_text(text_of(&stored.key));
        let title = normalize_text(text_of(&stored.article.title));
        id.contains(&q) || title.contains(&q)
    })
}

fn text_of(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

/// Returns the paragraphs of the section of `stored` that `query` names.
///
/// The query is only accent-stripped and lowercased, so punctuation must
/// match the section name literally. `"abstract"` and `"resumen"` select the
/// article abstract as a single paragraph.
pub fn find_section(query: &str, stored: &StoredArticle) -> Result<Vec<String>, ArticleError> {
    let q = strip_accents_lower(query);

    if ABSTRACT_ALIASES.contains(&q.as_str()) {
        return match stored.article.abstract_text.as_deref() {
            Some(text) if !text.is_empty() => Ok(vec![text.to_string()]),
            _ => Err(ArticleError::AbstractUnavailable),
        };
    }

    stored
        .sections
        .iter()
        .find(|(key, _)| key.contains(q.as_str()))
        .map(|(_, paragraphs)| paragraphs.to_vec())
        .ok_or_else(|| ArticleError::SectionNotFound(query.to_string()))
}
