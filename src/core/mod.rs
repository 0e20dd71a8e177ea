pub mod downloader;
pub mod engine;
pub mod sources;

pub use crate::domain::model::{FetchSummary, ImageRef, SourceKind};
pub use crate::domain::ports::{ImageSink, ImageSource, Storage};
pub use crate::utils::error::Result;
