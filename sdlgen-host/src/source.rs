//! Content-type sources.
//!
//! Retrieval from the content platform's API lives behind
//! [`ContentTypeSource`]; the implementations here serve content models that
//! are already in memory or exported to disk.

use crate::error::HostError;
use async_trait::async_trait;
use sdlgen_model::{ContentType, parse_content_types};
use std::path::{Path, PathBuf};

/// Supplies the content types to generate types for.
#[async_trait]
pub trait ContentTypeSource: Send + Sync {
    /// Fetches every content type of the stack.
    async fn fetch_content_types(&self) -> Result<Vec<ContentType>, HostError>;
}

/// In-memory content types.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    content_types: Vec<ContentType>,
}

impl StaticSource {
    /// Creates a source serving the given content types.
    #[must_use]
    pub fn new(content_types: Vec<ContentType>) -> Self {
        Self { content_types }
    }
}

#[async_trait]
impl ContentTypeSource for StaticSource {
    async fn fetch_content_types(&self) -> Result<Vec<ContentType>, HostError> {
        Ok(self.content_types.clone())
    }
}

/// Content types read from a JSON export on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the export path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentTypeSource for JsonFileSource {
    async fn fetch_content_types(&self) -> Result<Vec<ContentType>, HostError> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        let content_types = parse_content_types(&json)?;
        tracing::debug!(
            "Read {} content types from {}",
            content_types.len(),
            self.path.display()
        );
        Ok(content_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![ContentType::new("page", Vec::new())]);
        let content_types = source.fetch_content_types().await.expect("fetch");
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].uid, "page");
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"{"content_types": [{"uid": "post", "title": "Post", "schema": [
                {"uid": "title", "data_type": "text", "mandatory": true}
            ]}]}"#,
        )
        .expect("write");

        let source = JsonFileSource::new(file.path());
        assert_eq!(source.path(), file.path());

        let content_types = source.fetch_content_types().await.expect("fetch");
        assert_eq!(content_types[0].uid, "post");
        assert_eq!(content_types[0].schema.len(), 1);
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/content_types.json");
        let err = source.fetch_content_types().await.unwrap_err();
        assert!(matches!(err, HostError::Io(_)));
    }

    #[tokio::test]
    async fn test_json_file_source_malformed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"entries\": []}").expect("write");

        let err = JsonFileSource::new(file.path())
            .fetch_content_types()
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::Parse(_)));
    }
}
