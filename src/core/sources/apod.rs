use crate::adapters::http::get_json;
use crate::core::{ImageRef, ImageSink, ImageSource, SourceKind};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApodEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub hdurl: Option<String>,
}

impl ApodEntry {
    /// High resolution link when available, otherwise the regular one.
    pub fn image_url(&self) -> Option<&str> {
        self.hdurl.as_deref().or(self.url.as_deref())
    }
}

/// With `count` the API answers with a list, without it a single entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApodResponse {
    Many(Vec<ApodEntry>),
    One(ApodEntry),
}

impl ApodResponse {
    fn into_entries(self) -> Vec<ApodEntry> {
        match self {
            ApodResponse::Many(entries) => entries,
            ApodResponse::One(entry) => vec![entry],
        }
    }
}

/// NASA Astronomy Picture of the Day.
pub struct ApodSource {
    client: Client,
    api_base: String,
    api_key: String,
    count: Option<usize>,
}

impl ApodSource {
    pub fn new(client: Client, api_base: &str, api_key: &str, count: Option<usize>) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            count,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/planetary/apod", self.api_base)
    }

    pub async fn fetch_entries(&self) -> Result<Vec<ApodEntry>> {
        let count = self.count.map(|c| c.to_string());
        let mut query = vec![("api_key", self.api_key.as_str())];
        if let Some(count) = count.as_deref() {
            query.push(("count", count));
        }

        let response: ApodResponse = get_json(&self.client, &self.endpoint(), &query).await?;
        Ok(response.into_entries())
    }
}

#[async_trait]
impl ImageSource for ApodSource {
    fn kind(&self) -> SourceKind {
        SourceKind::NasaApod
    }

    async fn fetch_images(&self, sink: &dyn ImageSink) -> Result<usize> {
        let entries = self.fetch_entries().await?;
        tracing::info!("🔭 APOD returned {} entries", entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let url = entry
                .image_url()
                .ok_or_else(|| FetchError::MissingFieldError {
                    source_name: self.kind().dir_name().to_string(),
                    field: "url".to_string(),
                    index,
                })?;

            tracing::debug!("APOD #{}: {}", index, entry.title.as_deref().unwrap_or("untitled"));
            sink.save(&ImageRef::new(self.kind(), index, url)).await?;
        }

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sources::test_support::RecordingSink;
    use httpmock::prelude::*;

    #[test]
    fn test_hdurl_is_preferred() {
        let entry: ApodEntry = serde_json::from_value(serde_json::json!({
            "title": "M31",
            "url": "https://apod.nasa.gov/apod/image/2101/m31_small.jpg",
            "hdurl": "https://apod.nasa.gov/apod/image/2101/m31_big.jpg"
        }))
        .unwrap();
        assert_eq!(
            entry.image_url(),
            Some("https://apod.nasa.gov/apod/image/2101/m31_big.jpg")
        );

        let video: ApodEntry = serde_json::from_value(serde_json::json!({
            "url": "https://www.youtube.com/embed/abc"
        }))
        .unwrap();
        assert_eq!(video.image_url(), Some("https://www.youtube.com/embed/abc"));
    }

    #[tokio::test]
    async fn test_fetch_sends_count_and_names_sequentially() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/planetary/apod")
                    .query_param("api_key", "DEMO_KEY")
                    .query_param("count", "2");
                then.status(200).json_body(serde_json::json!([
                    {"url": "https://apod.nasa.gov/a.jpg", "hdurl": "https://apod.nasa.gov/a_hd.jpg"},
                    {"url": "https://apod.nasa.gov/b.gif"}
                ]));
            })
            .await;

        let source = ApodSource::new(Client::new(), &server.base_url(), "DEMO_KEY", Some(2));
        let sink = RecordingSink::default();

        let count = source.fetch_images(&sink).await.unwrap();

        mock.assert_async().await;
        assert_eq!(count, 2);
        let saved = sink.saved();
        assert_eq!(saved[0].url, "https://apod.nasa.gov/a_hd.jpg");
        assert_eq!(saved[0].image_name(), "nasa_apod_0");
        assert_eq!(saved[1].url, "https://apod.nasa.gov/b.gif");
        assert_eq!(saved[1].image_name(), "nasa_apod_1");
    }

    #[tokio::test]
    async fn test_single_object_without_count() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/planetary/apod").query_param("api_key", "DEMO_KEY");
                then.status(200)
                    .json_body(serde_json::json!({"url": "https://apod.nasa.gov/today.jpg"}));
            })
            .await;

        let source = ApodSource::new(Client::new(), &server.base_url(), "DEMO_KEY", None);
        let sink = RecordingSink::default();

        assert_eq!(source.fetch_images(&sink).await.unwrap(), 1);
        assert_eq!(sink.saved()[0].url, "https://apod.nasa.gov/today.jpg");
    }

    #[tokio::test]
    async fn test_entry_without_urls_stops_the_batch() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/planetary/apod");
                then.status(200).json_body(serde_json::json!([
                    {"url": "https://apod.nasa.gov/first.jpg"},
                    {"title": "no links"},
                    {"url": "https://apod.nasa.gov/never.jpg"}
                ]));
            })
            .await;

        let source = ApodSource::new(Client::new(), &server.base_url(), "DEMO_KEY", Some(3));
        let sink = RecordingSink::default();

        let err = source.fetch_images(&sink).await.unwrap_err();

        assert!(matches!(
            err,
            FetchError::MissingFieldError { ref field, index: 1, .. } if field == "url"
        ));
        assert_eq!(sink.saved().len(), 1);
    }
}
