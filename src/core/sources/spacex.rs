use crate::adapters::http::get_json;
use crate::core::{ImageRef, ImageSink, ImageSource, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// `links.flickr.original` 必須存在，缺少時解析失敗
#[derive(Debug, Deserialize)]
pub struct Launch {
    #[serde(default)]
    pub name: Option<String>,
    pub links: LaunchLinks,
}

#[derive(Debug, Deserialize)]
pub struct LaunchLinks {
    pub flickr: FlickrLinks,
}

#[derive(Debug, Deserialize)]
pub struct FlickrLinks {
    pub original: Vec<String>,
}

/// Original-size Flickr photos of a single SpaceX launch.
pub struct SpacexSource {
    client: Client,
    api_base: String,
    flight_id: String,
}

impl SpacexSource {
    pub fn new(client: Client, api_base: &str, flight_id: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            flight_id: flight_id.to_string(),
        }
    }

    pub fn launch_url(&self) -> String {
        format!("{}/v4/launches/{}", self.api_base, self.flight_id)
    }

    pub async fn fetch_launch(&self) -> Result<Launch> {
        get_json(&self.client, &self.launch_url(), &[]).await
    }
}

#[async_trait]
impl ImageSource for SpacexSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Spacex
    }

    async fn fetch_images(&self, sink: &dyn ImageSink) -> Result<usize> {
        let launch = self.fetch_launch().await?;
        let urls = launch.links.flickr.original;
        let total = urls.len();

        tracing::info!(
            "🛰️ Launch {} ({}) has {} photos",
            self.flight_id,
            launch.name.as_deref().unwrap_or("unnamed"),
            total
        );

        for (index, url) in urls.into_iter().enumerate() {
            sink.save(&ImageRef::new(self.kind(), index, url)).await?;
        }

        Ok(total)
    }
}
