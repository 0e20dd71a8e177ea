use crate::domain::model::{ImageRef, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-only sink for image bytes; paths are relative to the storage root.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Destination for images discovered by a source.
#[async_trait]
pub trait ImageSink: Send + Sync {
    /// Downloads and stores one image, returning the number of bytes written.
    async fn save(&self, image: &ImageRef) -> Result<usize>;
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Queries the upstream API and hands every image to `sink` in order.
    /// Returns how many images were saved.
    async fn fetch_images(&self, sink: &dyn ImageSink) -> Result<usize>;
}
