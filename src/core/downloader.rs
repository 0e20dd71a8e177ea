use crate::adapters::http::get_checked;
use crate::core::{ImageRef, ImageSink, Storage};
use crate::utils::error::Result;
use crate::utils::url_ext::file_extension_from_url;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches image bodies and writes them as `<source_name>/<image_name><ext>`
/// under the storage root.
pub struct Downloader<S: Storage> {
    client: Client,
    storage: S,
}

impl<S: Storage> Downloader<S> {
    pub fn new(storage: S) -> Self {
        Self::with_client(Client::new(), storage)
    }

    pub fn with_client(client: Client, storage: S) -> Self {
        Self { client, storage }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Downloads `url` and returns the number of bytes written.
    ///
    /// Nothing is written when the request fails. An existing file with the
    /// same name is overwritten.
    pub async fn download_image(&self, url: &str, source_name: &str, image_name: &str) -> Result<usize> {
        let response = get_checked(&self.client, url, &[]).await?;
        let body = response.bytes().await?;

        // 副檔名取自原始 URL，而非重新導向後的位址
        let ext = file_extension_from_url(url);
        let path = format!("{}/{}{}", source_name, image_name, ext);

        self.storage.write_file(&path, &body).await?;
        tracing::debug!("Saved {} ({} bytes)", path, body.len());

        Ok(body.len())
    }
}

#[async_trait]
impl<S: Storage> ImageSink for Downloader<S> {
    async fn save(&self, image: &ImageRef) -> Result<usize> {
        self.download_image(&image.url, image.source_name(), &image.image_name())
            .await
    }
}
