//! Document sources: where the itinerary JSON comes from and how loading fails.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde_json::Error as JsonError;

use crate::model::Itinerary;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while retrieving the itinerary document.
///
/// Every variant surfaces to the user as a single load-failure message;
/// there is no retry path.
pub enum LoadError {
    /// Network layer failed or the server answered with a non-success status.
    #[error("Request failed: {0}")]
    Http(#[from] ReqwestError),
    /// Local document could not be read.
    #[error("Could not read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Document was retrieved but is not a valid itinerary.
    #[error("Invalid itinerary document: {0}")]
    Parse(#[from] JsonError),
}

#[async_trait]
/// A place the itinerary document can be retrieved from.
///
/// Sources are consulted exactly once, at startup.
pub trait ItinerarySource: Send + Sync {
    /// Human-readable description of the source, for error context.
    fn describe(&self) -> String;

    /// Retrieve and decode the itinerary document.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when retrieval or decoding fails.
    async fn fetch(&self) -> Result<Itinerary, LoadError>;
}

/// Source fetching the document from an HTTP(S) URL.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a new source bound to the given HTTP client and URL.
    #[must_use]
    pub fn new<U: Into<String>>(client: Client, url: U) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ItinerarySource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Itinerary, LoadError> {
        // Decode from text rather than `Response::json` so body-level JSON
        // problems surface as `Parse`, like the file path does.
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Source reading the document from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new source for the given path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItinerarySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Itinerary, LoadError> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}
