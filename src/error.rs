//! Error taxonomy for article queries.
//!
//! The `Display` text of [`ArticleError`] is the exact `detail` string
//! returned to HTTP clients, so the messages stay in the service's
//! published language.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve or decode the remote article document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Every way an article query can fail.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Error al cargar JSON: {0}")]
    Fetch(#[from] FetchError),

    #[error("Artículo no encontrado")]
    ArticleNotFound,

    #[error("Abstract no disponible")]
    AbstractUnavailable,

    #[error("Sección '{0}' no encontrada")]
    SectionNotFound(String),
}

impl ArticleError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ArticleError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ArticleError::ArticleNotFound
            | ArticleError::AbstractUnavailable
            | ArticleError::SectionNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArticleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(ArticleError::ArticleNotFound.to_string(), "Artículo no encontrado");
        assert_eq!(ArticleError::AbstractUnavailable.to_string(), "Abstract no disponible");
        assert_eq!(
            ArticleError::SectionNotFound("Métodos (2)".into()).to_string(),
            "Sección 'Métodos (2)' no encontrada"
        );
    }

    #[test]
    fn test_fetch_message_carries_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let cause_text = cause.to_string();
        let err = ArticleError::from(FetchError::from(cause));
        assert_eq!(err.to_string(), format!("Error al cargar JSON: {}", cause_text));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ArticleError::ArticleNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ArticleError::AbstractUnavailable.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ArticleError::SectionNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://example.org/a.json".into(),
        };
        assert_eq!(
            err.to_string(),
            "404 Not Found for url: https://example.org/a.json"
        );
    }
}
