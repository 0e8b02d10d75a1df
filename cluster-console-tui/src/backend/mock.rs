//! 脚本化的网关 Mock（测试用）
//!
//! 记录每次网关调用，按预先设定的脚本返回结果。

use std::sync::Mutex;

use async_trait::async_trait;
use cluster_console_client::{
    Cluster, ClusterGateway, ClusterPayload, ClusterQueryParams, GatewayError, PageResult, Result,
};

/// 一次被记录的网关调用
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    List(ClusterQueryParams),
    Create(ClusterPayload),
    Update(ClusterPayload),
    Delete(Vec<i64>),
    SetEnabled(Vec<i64>, bool),
    Custom(String),
}

/// 网关 Mock
pub struct MockGateway {
    /// 调用日志（按发生顺序）
    calls: Mutex<Vec<GatewayCall>>,
    /// 列表调用的返回脚本
    list_response: Mutex<Result<PageResult<Cluster>>>,
    /// 设置后所有变更调用返回该错误
    mutation_error: Mutex<Option<GatewayError>>,
}

impl MockGateway {
    /// 创建返回空列表的 Mock
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list_response: Mutex::new(Ok(PageResult::default())),
            mutation_error: Mutex::new(None),
        }
    }

    /// 创建以给定记录作为列表响应的 Mock
    pub fn with_records(records: Vec<Cluster>) -> Self {
        let mock = Self::new();
        mock.set_records(records);
        mock
    }

    /// 设置列表响应记录
    pub fn set_records(&self, records: Vec<Cluster>) {
        let total = records.len() as u64;
        *self.list_response.lock().unwrap() = Ok(PageResult { records, total });
    }

    /// 让后续列表调用失败
    pub fn fail_list(&self, error: GatewayError) {
        *self.list_response.lock().unwrap() = Err(error);
    }

    /// 让后续变更调用失败
    pub fn fail_mutations(&self, error: GatewayError) {
        *self.mutation_error.lock().unwrap() = Some(error);
    }

    /// 调用日志快照
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// 列表调用次数
    pub fn list_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GatewayCall::List(_)))
            .count()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_result(&self) -> Result<()> {
        match self.mutation_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClusterGateway for MockGateway {
    async fn list(&self, params: &ClusterQueryParams) -> Result<PageResult<Cluster>> {
        self.record(GatewayCall::List(params.clone()));
        self.list_response.lock().unwrap().clone()
    }

    async fn create(&self, payload: &ClusterPayload) -> Result<()> {
        self.record(GatewayCall::Create(payload.clone()));
        self.mutation_result()
    }

    async fn update(&self, payload: &ClusterPayload) -> Result<()> {
        self.record(GatewayCall::Update(payload.clone()));
        self.mutation_result()
    }

    async fn delete(&self, ids: &[i64]) -> Result<()> {
        self.record(GatewayCall::Delete(ids.to_vec()));
        self.mutation_result()
    }

    async fn set_enabled(&self, ids: &[i64], enabled: bool) -> Result<()> {
        self.record(GatewayCall::SetEnabled(ids.to_vec(), enabled));
        self.mutation_result()
    }

    async fn custom_action(
        &self,
        subpath: &str,
        _label: &str,
        _payload: Option<serde_json::Value>,
    ) -> Result<()> {
        self.record(GatewayCall::Custom(subpath.to_string()));
        self.mutation_result()
    }
}
