//! High-level facade for the single startup load.

use std::sync::Arc;

use reqwest::Client;

use crate::model::Itinerary;
use crate::source::{FileSource, HttpSource, ItinerarySource, LoadError};

/// Public entry point for retrieving the itinerary document.
pub struct WayfarerService {
    source: Arc<dyn ItinerarySource>,
}

impl WayfarerService {
    /// Create a new service bound to the provided source.
    #[must_use]
    pub fn new(source: Arc<dyn ItinerarySource>) -> Self {
        Self { source }
    }

    /// Build a service from a source spec.
    ///
    /// Specs starting with `http://` or `https://` are fetched over the
    /// network; anything else is treated as a local path.
    #[must_use]
    pub fn from_spec(client: Client, spec: &str) -> Self {
        let source: Arc<dyn ItinerarySource> =
            if spec.starts_with("http://") || spec.starts_with("https://") {
                Arc::new(HttpSource::new(client, spec))
            } else {
                Arc::new(FileSource::new(spec))
            };
        Self::new(source)
    }

    /// Where the document comes from, for error context.
    #[must_use]
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Perform the one startup retrieval of the document.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when retrieval or decoding fails. Callers show
    /// the message and render nothing further; there is no retry.
    pub async fn load(&self) -> Result<Itinerary, LoadError> {
        self.source.fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_specs_select_the_network_source() {
        let client = Client::new();
        let service = WayfarerService::from_spec(client, "https://example.com/itinerary.json");
        assert_eq!(service.describe(), "https://example.com/itinerary.json");
    }

    #[test]
    fn other_specs_are_local_paths() {
        let client = Client::new();
        let service = WayfarerService::from_spec(client, "data/itinerary.json");
        assert_eq!(service.describe(), "data/itinerary.json");
    }
}
