//! Contour document provider

use super::http::AsyncHttpClient;
use super::types::ProviderError;
use tracing::debug;

/// Fetches contour documents for stations from a data server.
///
/// URLs follow the fixed layout `<data_url>/contours/<station_id>_minor.geojson`.
pub struct DocumentProvider<C: AsyncHttpClient> {
    client: C,
    data_url: String,
}

impl<C: AsyncHttpClient> DocumentProvider<C> {
    /// Creates a provider rooted at a data URL.
    ///
    /// A trailing slash on `data_url` is tolerated and stripped.
    pub fn new(client: C, data_url: impl Into<String>) -> Self {
        let mut data_url = data_url.into();
        while data_url.ends_with('/') {
            data_url.pop();
        }
        Self { client, data_url }
    }

    /// Returns the document URL for a station id.
    pub fn document_url(&self, station_id: &str) -> String {
        format!("{}/contours/{}_minor.geojson", self.data_url, station_id)
    }

    /// Fetches the raw contour document bytes for a station.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::HttpError`] on transport failure or a
    /// non-success status, [`ProviderError::InvalidResponse`] when the
    /// server answers with an empty body.
    pub async fn fetch(&self, station_id: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.document_url(station_id);
        debug!(station = station_id, url = %url, "fetching contour document");

        let body = self.client.get(&url).await?;
        if body.is_empty() {
            return Err(ProviderError::InvalidResponse(format!(
                "empty body from {}",
                url
            )));
        }

        Ok(body)
    }
}
