use crate::adapters::http::get_json;
use crate::core::{ImageRef, ImageSink, ImageSource, SourceKind};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EpicEntry {
    /// Archive file name without extension.
    pub image: String,
    pub date: String,
}

/// Parses an EPIC timestamp (`2019-05-30 00:44:26`, `2019-05-30T00:44:26`,
/// `2019-05-30T00`, RFC 3339 or a bare date) and returns its archive path segment
/// `YYYY/MM/DD`.
pub fn archive_date_path(value: &str) -> Result<String> {
    Ok(parse_calendar_date(value)?.format("%Y/%m/%d").to_string())
}

fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp.date());
        }
    }

    // 只到小時的形式，例如 2019-05-30T00
    if let Ok((date, rest)) = NaiveDate::parse_and_remainder(trimmed, "%Y-%m-%d") {
        if let Some(hour) = rest.strip_prefix(['T', ' ']) {
            if hour.len() == 2 && hour.parse::<u32>().is_ok_and(|h| h < 24) {
                return Ok(date);
            }
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| FetchError::InvalidDateError {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// NASA EPIC natural-color Earth images.
pub struct EpicSource {
    client: Client,
    api_base: String,
    api_key: String,
}

impl EpicSource {
    pub fn new(client: Client, api_base: &str, api_key: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/EPIC/api/natural/images", self.api_base)
    }

    pub fn archive_url(&self, entry: &EpicEntry) -> Result<String> {
        let date_path = archive_date_path(&entry.date)?;
        Ok(format!(
            "{}/EPIC/archive/natural/{}/png/{}.png?api_key={}",
            self.api_base, date_path, entry.image, self.api_key
        ))
    }

    pub async fn fetch_entries(&self) -> Result<Vec<EpicEntry>> {
        get_json(&self.client, &self.endpoint(), &[("api_key", self.api_key.as_str())]).await
    }
}

#[async_trait]
impl ImageSource for EpicSource {
    fn kind(&self) -> SourceKind {
        SourceKind::NasaEpic
    }

    async fn fetch_images(&self, sink: &dyn ImageSink) -> Result<usize> {
        let entries = self.fetch_entries().await?;
        tracing::info!("🌍 EPIC returned {} images", entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let url = self.archive_url(entry)?;
            tracing::debug!("EPIC #{}: {} ({})", index, entry.image, entry.date);
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
    fn test_archive_date_path_formats() {
        assert_eq!(archive_date_path("2019-05-30T00:44:26").unwrap(), "2019/05/30");
        assert_eq!(archive_date_path("2019-05-30 00:44:26").unwrap(), "2019/05/30");
        assert_eq!(archive_date_path("2023-01-02T03:04:05.123").unwrap(), "2023/01/02");
        assert_eq!(archive_date_path("2023-01-02T03:04:05Z").unwrap(), "2023/01/02");
        assert_eq!(archive_date_path("2023-12-31").unwrap(), "2023/12/31");
    }

    #[test]
    fn test_hour_only_timestamp() {
        assert_eq!(archive_date_path("2019-05-30T00").unwrap(), "2019/05/30");
        assert_eq!(archive_date_path("2019-05-30 23").unwrap(), "2019/05/30");
        assert!(archive_date_path("2019-05-30T24").is_err());
        assert!(archive_date_path("2019-05-30T7").is_err());
    }

    #[test]
    fn test_invalid_date() {
        let err = archive_date_path("30/05/2019").unwrap_err();
        assert!(matches!(err, FetchError::InvalidDateError { ref value, .. } if value == "30/05/2019"));
        assert!(archive_date_path("2019-02-30 00:00:00").is_err());
    }

    #[test]
    fn test_archive_url() {
        let source = EpicSource::new(Client::new(), "https://api.nasa.gov", "DEMO_KEY");
        let entry = EpicEntry {
            image: "epic_1b_20190530011359".to_string(),
            date: "2019-05-30 01:09:10".to_string(),
        };
        assert_eq!(
            source.archive_url(&entry).unwrap(),
            "https://api.nasa.gov/EPIC/archive/natural/2019/05/30/png/epic_1b_20190530011359.png?api_key=DEMO_KEY"
        );
    }

    #[tokio::test]
    async fn test_fetch_builds_archive_urls_without_separator_names() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/EPIC/api/natural/images")
                    .query_param("api_key", "DEMO_KEY");
                then.status(200).json_body(serde_json::json!([
                    {"identifier": "20190530011359", "image": "epic_1b_20190530011359", "date": "2019-05-30 01:09:10"},
                    {"identifier": "20190530030000", "image": "epic_1b_20190530030000", "date": "2019-05-30 02:57:51"}
                ]));
            })
            .await;

        let source = EpicSource::new(Client::new(), &server.base_url(), "DEMO_KEY");
        let sink = RecordingSink::default();

        let count = source.fetch_images(&sink).await.unwrap();

        mock.assert_async().await;
        assert_eq!(count, 2);
        let saved = sink.saved();
        assert_eq!(saved[0].image_name(), "nasa_epic0");
        assert_eq!(saved[1].image_name(), "nasa_epic1");
        assert_eq!(
            saved[1].url,
            format!(
                "{}/EPIC/archive/natural/2019/05/30/png/epic_1b_20190530030000.png?api_key=DEMO_KEY",
                server.base_url()
            )
        );
    }

    #[tokio::test]
    async fn test_bad_date_aborts_remaining_images() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/EPIC/api/natural/images");
                then.status(200).json_body(serde_json::json!([
                    {"image": "epic_a", "date": "not a date"},
                    {"image": "epic_b", "date": "2019-05-30 02:57:51"}
                ]));
            })
            .await;

        let source = EpicSource::new(Client::new(), &server.base_url(), "DEMO_KEY");
        let sink = RecordingSink::default();

        let err = source.fetch_images(&sink).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidDateError { .. }));
        assert!(sink.saved().is_empty());
    }
}
