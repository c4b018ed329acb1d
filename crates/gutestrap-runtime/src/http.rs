//! Remote metadata retrieval over HTTP.

use std::time::Duration;

use gutestrap_host::{HostError, HostResult, MetadataSource, PluginHeaders};
use tracing::debug;

use crate::headers::parse_plugin_headers;
use crate::{RuntimeError, RuntimeResult};

/// Reads plugin headers from a remote entry file.
///
/// Requests run on a private single-threaded runtime so callers see a plain
/// blocking call.
pub struct HttpMetadataSource {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl HttpMetadataSource {
    /// Creates a new HTTP metadata source.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or its runtime cannot be built.
    pub fn new(timeout: Duration) -> RuntimeResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .build()
            .map_err(RuntimeError::HttpClient)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(RuntimeError::AsyncRuntime)?;

        Ok(Self { client, runtime })
    }

    async fn fetch_document(&self, url: &str) -> HostResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HostError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HostError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| HostError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl MetadataSource for HttpMetadataSource {
    fn fetch(&self, url: &str) -> HostResult<PluginHeaders> {
        let document = self.runtime.block_on(self.fetch_document(url))?;
        debug!(%url, bytes = document.len(), "downloaded remote entry file");
        Ok(parse_plugin_headers(&document))
    }
}
