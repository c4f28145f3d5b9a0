use crate::domain::ports::DataSource;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// 以頁面來源為基準抓取資源，行為比照瀏覽器的 fetch
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    origin: Url,
    client: Client,
    timeout: Option<Duration>,
}

impl HttpDataSource {
    pub fn new(origin: &str) -> Result<Self> {
        let mut origin = Url::parse(origin).map_err(|e| DirectoryError::InvalidConfigValue {
            field: "origin".to_string(),
            value: origin.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // 沒有結尾斜線時 join 會換掉最後一段路徑
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }

        Ok(Self {
            origin,
            client: Client::new(),
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }

    pub fn resolve(&self, resource: &str) -> Result<Url> {
        self.origin
            .join(resource)
            .map_err(|e| DirectoryError::InvalidConfigValue {
                field: "resource".to_string(),
                value: resource.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.origin, e),
            })
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        let url = self.resolve(resource)?;

        // 本地檔案來源無法 fetch
        if url.scheme() == "file" {
            return Err(DirectoryError::Network {
                message: format!("fetching local file {} is not permitted", url),
            });
        }

        tracing::debug!("Making request to: {}", url);
        let mut request = self.client.get(url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| DirectoryError::Network {
            message: e.to_string(),
        })?;

        tracing::debug!("Response status: {}", response.status());
        if !response.status().is_success() {
            return Err(DirectoryError::FetchStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
