use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Cluster, ClusterPayload, ClusterQueryParams, PageResult};

/// 集群管理网关 Trait
///
/// The console talks to the remote management service exclusively through
/// this trait; the contract is operation-level, not byte-level. Mutations
/// return `Ok(())` on success — the console re-fetches the table rather
/// than patching rows locally.
#[async_trait]
pub trait ClusterGateway: Send + Sync {
    /// List clusters matching the query (pagination + sort + filters).
    async fn list(&self, params: &ClusterQueryParams) -> Result<PageResult<Cluster>>;

    /// Create a new cluster. The payload must not carry an `id`.
    async fn create(&self, payload: &ClusterPayload) -> Result<()>;

    /// Update an existing cluster in place. The payload carries its `id`.
    async fn update(&self, payload: &ClusterPayload) -> Result<()>;

    /// Delete one or more clusters by id.
    async fn delete(&self, ids: &[i64]) -> Result<()>;

    /// Set the `enabled` flag for one or more clusters.
    async fn set_enabled(&self, ids: &[i64], enabled: bool) -> Result<()>;

    /// Invoke a custom sub-resource action (e.g. `heartbeats`) with an
    /// optional JSON payload. `label` names the operation in logs.
    async fn custom_action(
        &self,
        subpath: &str,
        label: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<()>;
}
