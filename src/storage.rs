use crate::errors::DataError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Where the mock dataset comes from. Each call returns the whole document.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<Value, DataError>;

    fn describe(&self) -> String;
}

/// JSON file on local disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn load(&self) -> Result<Value, DataError> {
        let bytes = fs::read(&self.path).await.map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "loaded data file");
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// JSON document served over HTTP, fetched on every load.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn load(&self) -> Result<Value, DataError> {
        let http_error = |source| DataError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_error)?;
        let bytes = response.bytes().await.map_err(http_error)?;
        debug!(url = %self.url, bytes = bytes.len(), "fetched data document");
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Document held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: Value,
}

impl StaticSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn load(&self) -> Result<Value, DataError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "in-memory document".to_string()
    }
}
