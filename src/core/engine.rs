use crate::core::{FetchSummary, ImageSink, ImageSource};
use crate::utils::error::Result;

/// Runs image sources one after another against a single sink.
pub struct FetchEngine<K: ImageSink> {
    sink: K,
    sources: Vec<Box<dyn ImageSource>>,
}

impl<K: ImageSink> FetchEngine<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            sources: Vec::new(),
        }
    }

    pub fn with_sources(sink: K, sources: Vec<Box<dyn ImageSource>>) -> Self {
        Self { sink, sources }
    }

    pub fn add_source(&mut self, source: Box<dyn ImageSource>) {
        self.sources.push(source);
    }

    /// Stops at the first failing source; later sources are not contacted.
    pub async fn run(&self) -> Result<FetchSummary> {
        let mut summary = FetchSummary::default();

        for source in &self.sources {
            let kind = source.kind();
            tracing::info!("🚀 Fetching {} images", kind);

            let downloaded = source.fetch_images(&self.sink).await.map_err(|e| {
                tracing::error!("❌ {} failed: {}", kind, e);
                e
            })?;

            tracing::info!("✅ {}: {} images saved to {}/", kind, downloaded, kind.dir_name());
            summary.record(kind, downloaded);
        }

        Ok(summary)
    }
}
