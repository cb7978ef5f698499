//! Core data models for the article payload and the query responses.
//!
//! The remote payload is decoded into [`Article`] records. Identifier,
//! title, and the bibliographic fields are opaque JSON values that are
//! passed through to clients untouched; only the abstract and the sections
//! are typed, since lookups read them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One article as published in the remote JSON document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Article {
    /// Identifier as published; any JSON value, `null` when absent.
    #[serde(default)]
    pub id: Value,
    /// Title as published; any JSON value, `null` when absent.
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub doi: Value,
    #[serde(default)]
    pub authors: Value,
    #[serde(default)]
    pub journal: Value,
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub keywords: Value,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<Section>,
}

/// A named section and its paragraphs, in document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default, rename = "section", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub paragraphs: Vec<String>,
}

/// Treats an explicit `null` the same as an absent field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shape of the remote payload.
///
/// The document is either a single article object or an array of them.
/// Anything else is accepted and yields an empty store.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    One(Article),
    Many(Vec<Article>),
    Unrecognized,
}

impl Payload {
    /// Classifies a decoded JSON document.
    ///
    /// An object counts as a single article only when it carries both an
    /// `id` and a `sections` key (either may be `null`). Array entries must
    /// each decode as an [`Article`].
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        match raw {
            Value::Object(ref map) if map.contains_key("id") && map.contains_key("sections") => {
                Ok(Payload::One(serde_json::from_value(raw)?))
            }
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<Article>, _>>()
                .map(Payload::Many),
            _ => Ok(Payload::Unrecognized),
        }
    }

    /// Flattens the payload into articles in document order.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Payload::One(article) => vec![article],
            Payload::Many(articles) => articles,
            Payload::Unrecognized => Vec::new(),
        }
    }
}

/// Entry of the `GET /list_articles` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: Value,
    pub title: Value,
}

/// Bibliographic metadata returned by `POST /get_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub doi: Value,
    pub title: Value,
    pub authors: Value,
    pub journal: Value,
    pub date: Value,
    pub keywords: Value,
}

impl From<&Article> for ArticleMetadata {
    fn from(article: &Article) -> Self {
        Self {
            doi: article.doi.clone(),
            title: article.title.clone(),
            authors: article.authors.clone(),
            journal: article.journal.clone(),
            date: article.date.clone(),
            keywords: article.keywords.clone(),
        }
    }
}

/// Paragraphs returned by `POST /get_section`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResponse {
    pub paragraphs: Vec<String>,
}

/// Request body of `POST /get_metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataRequest {
    pub article_query: String,
}

/// Request body of `POST /get_section`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRequest {
    pub article_query: String,
    pub section: String,
}
