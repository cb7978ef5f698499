//! In-memory article store, rebuilt from the source on every request.
//!
//! Loading follows the payload's document order. A key that appears twice
//! keeps the position of its first appearance and the value of its last,
//! both for article identifiers and for section names inside an article.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Article, Payload};
use crate::normalize::strip_accents_lower;
use crate::source::ArticleSource;

/// Section paragraphs keyed by accent-stripped, lowercased section name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl SectionIndex {
    /// Indexes the sections of `article` in document order.
    pub fn build(article: &Article) -> Self {
        let mut index = SectionIndex::default();
        for section in &article.sections {
            index.insert(strip_accents_lower(&section.name), section.paragraphs.clone());
        }
        index
    }

    fn insert(&mut self, key: String, paragraphs: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = paragraphs,
            None => self.entries.push((key, paragraphs)),
        }
    }

    /// Iterates `(key, paragraphs)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_slice()))
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An article together with its derived section index.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredArticle {
    /// Store key: the entry's `id` as published, `null` when absent.
    pub key: Value,
    pub article: Article,
    pub sections: SectionIndex,
}

impl StoredArticle {
    fn new(key: Value, article: Article) -> Self {
        let sections = SectionIndex::build(&article);
        Self {
            key,
            article,
            sections,
        }
    }
}

/// Ordered mapping from article identifier to article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleStore {
    entries: Vec<StoredArticle>,
    /// Position of each key, keyed by the key's JSON text so that `7` and
    /// `"7"` stay distinct.
    positions: HashMap<String, usize>,
}

impl ArticleStore {
    /// Fetches the document from `source` and builds a fresh store.
    pub async fn load(source: &dyn ArticleSource) -> Result<Self, FetchError> {
        let raw = source.fetch().await.map_err(|e| {
            warn!(source = source.location(), error = %e, "failed to fetch articles");
            e
        })?;

        let store = Self::from_value(raw).map_err(|e| {
            warn!(source = source.location(), error = %e, "malformed article entry");
            e
        })?;

        debug!(
            source = source.location(),
            articles = store.len(),
            "article store loaded"
        );
        Ok(store)
    }

    /// Builds a store from an already decoded document.
    pub fn from_value(raw: Value) -> Result<Self, FetchError> {
        Ok(Self::from_payload(Payload::from_value(raw)?))
    }

    pub fn from_payload(payload: Payload) -> Self {
        let mut store = ArticleStore::default();
        for article in payload.into_articles() {
            store.insert(article);
        }
        store
    }

    /// Inserts `article` under its own identifier, replacing any earlier
    /// article with the same key in place.
    pub fn insert(&mut self, article: Article) {
        let key = article.id.clone();
        let slot = key.to_string();
        let stored = StoredArticle::new(key, article);
        match self.positions.get(&slot) {
            Some(&pos) => self.entries[pos] = stored,
            None => {
                self.positions.insert(slot, self.entries.len());
                self.entries.push(stored);
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&StoredArticle> {
        self.positions
            .get(&key.to_string())
            .map(|&pos| &self.entries[pos])
    }

    /// Iterates articles in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, StoredArticle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArticleStore {
    type Item = &'a StoredArticle;
    type IntoIter = std::slice::Iter<'a, StoredArticle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
