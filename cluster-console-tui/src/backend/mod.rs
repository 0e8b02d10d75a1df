//! Backend 层：网关调用的同步封装
//!
//! UI 主循环是同步的；所有网关调用都在这里通过专用的 tokio
//! 运行时 `block_on`。挂起点就是等待网关响应的那几处——确认
//! 弹窗保证同一时刻最多一个变更调用在途，新的列表调用天然
//! 覆盖旧结果（last-write-wins）。

mod config;
#[cfg(test)]
pub mod mock;

use std::sync::Arc;

use anyhow::Result;
use cluster_console_client::{
    Cluster, ClusterGateway, ClusterPayload, ClusterQueryParams, PageResult, RestClusterGateway,
};

pub use config::{load_or_default, save, AppConfig};

/// TUI 后端服务
///
/// 持有网关客户端与运行时实例，提供给 Update 层调用
pub struct Backend {
    runtime: tokio::runtime::Runtime,
    gateway: Arc<dyn ClusterGateway>,
}

impl Backend {
    /// 按配置创建后端（REST 网关）
    pub fn new(config: &AppConfig) -> Result<Self> {
        let gateway = RestClusterGateway::new(config.base_url.clone())?;
        Self::with_gateway(Arc::new(gateway))
    }

    /// 注入任意网关实现（测试使用脚本化的 Mock）
    pub fn with_gateway(gateway: Arc<dyn ClusterGateway>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, gateway })
    }

    // ========== 列表 ==========

    /// 拉取一页集群列表
    pub fn list(&self, params: &ClusterQueryParams) -> cluster_console_client::Result<PageResult<Cluster>> {
        self.runtime.block_on(self.gateway.list(params))
    }

    // ========== 单条变更 ==========

    /// 创建集群
    pub fn create(&self, payload: &ClusterPayload) -> cluster_console_client::Result<()> {
        self.runtime.block_on(self.gateway.create(payload))
    }

    /// 更新集群
    pub fn update(&self, payload: &ClusterPayload) -> cluster_console_client::Result<()> {
        self.runtime.block_on(self.gateway.update(payload))
    }

    // ========== 批量变更 ==========

    /// 删除一条或多条集群
    pub fn delete(&self, ids: &[i64]) -> cluster_console_client::Result<()> {
        self.runtime.block_on(self.gateway.delete(ids))
    }

    /// 批量设置启用状态
    pub fn set_enabled(&self, ids: &[i64], enabled: bool) -> cluster_console_client::Result<()> {
        self.runtime.block_on(self.gateway.set_enabled(ids, enabled))
    }

    // ========== 自定义操作 ==========

    /// 心跳检测（无目标记录、无载荷）
    pub fn check_heartbeats(&self, label: &str) -> cluster_console_client::Result<()> {
        self.runtime
            .block_on(self.gateway.custom_action("heartbeats", label, None))
    }
}
