//! The three article queries.
//!
//! Each query loads a fresh [`ArticleStore`] from the source, answers from
//! it, and drops it. The `*_articles`/`get_*` functions return structured
//! data for the HTTP server; the `run_*` functions print the same data for
//! the CLI.

use serde_json::Value;
use tracing::debug;

use crate::error::{ArticleError, Result};
use crate::matcher::{find_article, find_section};
use crate::models::{ArticleMetadata, ArticleSummary, SectionResponse};
use crate::source::ArticleSource;
use crate::store::ArticleStore;

/// Identifier and title of every article, in store order.
pub async fn list_articles(source: &dyn ArticleSource) -> Result<Vec<ArticleSummary>> {
    let store = ArticleStore::load(source).await?;
    Ok(store
        .iter()
        .map(|stored| ArticleSummary {
            id: stored.key.clone(),
            title: stored.article.title.clone(),
        })
        .collect())
}

/// Bibliographic metadata of the first article matching `article_query`.
pub async fn get_metadata(
    source: &dyn ArticleSource,
    article_query: &str,
) -> Result<ArticleMetadata> {
    let store = ArticleStore::load(source).await?;
    let stored = find_article(article_query, &store).ok_or_else(|| {
        debug!(query = article_query, "no article matched");
        ArticleError::ArticleNotFound
    })?;
    Ok(ArticleMetadata::from(&stored.article))
}

/// Paragraphs of `section` in the first article matching `article_query`.
pub async fn get_section(
    source: &dyn ArticleSource,
    article_query: &str,
    section: &str,
) -> Result<SectionResponse> {
    let store = ArticleStore::load(source).await?;
    let stored = find_article(article_query, &store).ok_or_else(|| {
        debug!(query = article_query, "no article matched");
        ArticleError::ArticleNotFound
    })?;
    let paragraphs = find_section(section, stored).inspect_err(|e| {
        debug!(query = article_query, section, error = %e, "section lookup failed");
    })?;
    Ok(SectionResponse { paragraphs })
}

/// CLI entry point for `ocnos list`.
pub async fn run_list(source: &dyn ArticleSource) -> anyhow::Result<()> {
    let articles = list_articles(source).await?;

    if articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }

    println!("{:<32} TITLE", "ID");
    for article in &articles {
        println!(
            "{:<32} {}",
            display_value(&article.id, "(none)"),
            display_value(&article.title, "(untitled)")
        );
    }

    Ok(())
}

/// Renders a pass-through field for terminal output.
fn display_value(value: &Value, missing: &str) -> String {
    match value {
        Value::Null => missing.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// CLI entry point for `ocnos metadata`.
pub async fn run_metadata(source: &dyn ArticleSource, article_query: &str) -> anyhow::Result<()> {
    let metadata = get_metadata(source, article_query).await?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}

/// CLI entry point for `ocnos section`.
pub async fn run_section(
    source: &dyn ArticleSource,
    article_query: &str,
    section: &str,
) -> anyhow::Result<()> {
    let response = get_section(source, article_query, section).await?;
    println!("{}", response.paragraphs.join("\n\n"));
    Ok(())
}
