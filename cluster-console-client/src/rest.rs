//! REST implementation of [`ClusterGateway`].
//!
//! Wire contract: JSON envelope `{code, msg, data}` with `code == 0` as
//! success. List requests are never retried — a failed list must surface
//! immediately so the console keeps its previous rows on screen. Mutations
//! retry transient errors through [`HttpUtils`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::gateway::ClusterGateway;
use crate::http_client::HttpUtils;
use crate::types::{Cluster, ClusterPayload, ClusterQueryParams, PageResult};

/// Request timeout for all gateway calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry budget for mutating operations.
const MUTATION_RETRIES: u32 = 2;

/// Response envelope used by the management service.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    /// `0` means success; anything else carries a business error.
    code: i32,
    /// Optional human-readable message.
    msg: Option<String>,
    /// Payload, present on success for data-bearing operations.
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into the payload, mapping non-zero codes to
    /// [`GatewayError::Api`].
    fn into_data(self) -> Result<Option<T>> {
        if self.code == 0 {
            Ok(self.data)
        } else {
            Err(GatewayError::Api {
                code: self.code,
                message: self.msg.unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

/// HTTP gateway client bound to a fixed base resource path.
pub struct RestClusterGateway {
    client: reqwest::Client,
    base_url: String,
}

impl RestClusterGateway {
    /// Create a gateway client for `base_url` (e.g.
    /// `http://localhost:8888/api/cluster`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Network {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Join a sub-resource path onto the base resource path.
    fn url(&self, subpath: &str) -> String {
        if subpath.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, subpath.trim_start_matches('/'))
        }
    }

    /// Execute a request and decode its envelope.
    async fn decode<T>(
        request: reqwest::RequestBuilder,
        method: &str,
        action: &str,
        retries: u32,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let (_, body) =
            HttpUtils::execute_request_with_retry(request, method, action, retries).await?;
        let envelope: ApiResponse<T> = HttpUtils::parse_json(&body)?;
        envelope.into_data()
    }
}

#[async_trait]
impl ClusterGateway for RestClusterGateway {
    async fn list(&self, params: &ClusterQueryParams) -> Result<PageResult<Cluster>> {
        let url = self.url("");
        let request = self.client.get(&url).query(&params.to_query_pairs());

        // 列表请求不重试：失败需立即反馈，界面保留原有行
        let data: Option<PageResult<Cluster>> =
            Self::decode(request, "GET", &url, 0).await?;
        Ok(data.unwrap_or_default())
    }

    async fn create(&self, payload: &ClusterPayload) -> Result<()> {
        payload.validate()?;
        let url = self.url("");
        let request = self.client.post(&url).json(payload);
        Self::decode::<serde_json::Value>(request, "POST", &url, MUTATION_RETRIES).await?;
        Ok(())
    }

    async fn update(&self, payload: &ClusterPayload) -> Result<()> {
        payload.validate()?;
        if payload.id.is_none() {
            return Err(GatewayError::Validation(
                "update payload must carry an id".to_string(),
            ));
        }
        let url = self.url("");
        let request = self.client.put(&url).json(payload);
        Self::decode::<serde_json::Value>(request, "PUT", &url, MUTATION_RETRIES).await?;
        Ok(())
    }

    async fn delete(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Err(GatewayError::Validation("no ids to delete".to_string()));
        }
        let url = self.url("");
        let request = self
            .client
            .delete(&url)
            .json(&serde_json::json!({ "ids": ids }));
        Self::decode::<serde_json::Value>(request, "DELETE", &url, MUTATION_RETRIES).await?;
        Ok(())
    }

    async fn set_enabled(&self, ids: &[i64], enabled: bool) -> Result<()> {
        if ids.is_empty() {
            return Err(GatewayError::Validation("no ids to update".to_string()));
        }
        let url = self.url("enable");
        let request = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "ids": ids, "enabled": enabled }));
        Self::decode::<serde_json::Value>(request, "PUT", &url, MUTATION_RETRIES).await?;
        Ok(())
    }

    async fn custom_action(
        &self,
        subpath: &str,
        label: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<()> {
        let url = self.url(subpath);
        let mut request = self.client.post(&url);
        if let Some(body) = &payload {
            request = request.json(body);
        }
        log::info!("[gateway] {label}: POST {url}");
        Self::decode::<serde_json::Value>(request, "POST", &url, MUTATION_RETRIES).await?;
        Ok(())
    }
}
