use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Pagination parameters for list operations.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 20`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
        }
    }
}

/// A paged response as returned by the list operation.
///
/// `total` counts the records matching the query across all pages,
/// not just the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Records in the current page.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// Total number of matching records across all pages.
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
        }
    }
}

// ============ Cluster Types ============

/// Deployment flavor of a cluster.
///
/// Serialized as its display string — the management service stores the
/// label verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClusterType {
    /// Cluster running on a Yarn resource manager.
    #[default]
    Yarn,
    /// Self-contained standalone cluster.
    Standalone,
    /// Anything else.
    Others,
}

impl ClusterType {
    /// All selectable cluster types, in display order.
    pub fn all() -> &'static [ClusterType] {
        &[Self::Yarn, Self::Standalone, Self::Others]
    }

    /// Wire/display string for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yarn => "Yarn",
            Self::Standalone => "Standalone",
            Self::Others => "Others",
        }
    }
}

impl std::fmt::Display for ClusterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health status of a cluster, computed server-side by the heartbeat check.
///
/// The wire format is a bare number (`1` = normal, `0` = abnormal). Any
/// other number the service might emit is treated as abnormal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "u8", into = "u8")]
pub enum ClusterStatus {
    /// Cluster responded to the last heartbeat.
    Normal,
    /// Cluster failed the last heartbeat (or was never checked).
    #[default]
    Abnormal,
}

impl From<u8> for ClusterStatus {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Normal,
            _ => Self::Abnormal,
        }
    }
}

impl From<ClusterStatus> for u8 {
    fn from(status: ClusterStatus) -> Self {
        match status {
            ClusterStatus::Normal => 1,
            ClusterStatus::Abnormal => 0,
        }
    }
}

/// A cluster record as returned by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Server-assigned identifier, stable for the record's lifetime.
    pub id: i64,
    /// Unique cluster name (uniqueness enforced server-side).
    pub name: String,
    /// Optional display alias.
    #[serde(default)]
    pub alias: String,
    /// Deployment flavor.
    #[serde(rename = "type", default)]
    pub cluster_type: ClusterType,
    /// Member host list, free text (one address per line).
    #[serde(default)]
    pub hosts: String,
    /// Address of the active job manager, resolved server-side. Display only.
    #[serde(default)]
    pub job_manager_host: String,
    /// Heartbeat status. Read-only; orthogonal to `enabled`.
    #[serde(default)]
    pub status: ClusterStatus,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// Whether the cluster participates in scheduling.
    #[serde(default)]
    pub enabled: bool,
    /// When the record was created, if known.
    #[serde(with = "crate::datetime", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// When the record was last updated, if known.
    #[serde(with = "crate::datetime", default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Candidate record collected by the create/update form overlays.
///
/// `id = None` means create; `Some` means update in place. Only the
/// operator-editable fields are carried — `status`, `enabled` and the
/// timestamps are owned by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPayload {
    /// Target record id for updates; absent for creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Cluster name. Required.
    pub name: String,
    /// Optional display alias.
    #[serde(default)]
    pub alias: String,
    /// Deployment flavor.
    #[serde(rename = "type", default)]
    pub cluster_type: ClusterType,
    /// Member host list, free text.
    #[serde(default)]
    pub hosts: String,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl ClusterPayload {
    /// Build an update payload pre-populated from an existing record.
    pub fn from_cluster(cluster: &Cluster) -> Self {
        Self {
            id: Some(cluster.id),
            name: cluster.name.clone(),
            alias: cluster.alias.clone(),
            cluster_type: cluster.cluster_type,
            hosts: cluster.hosts.clone(),
            note: cluster.note.clone(),
        }
    }

    /// Local required-field validation, run before any network call.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::GatewayError::Validation(
                "name is required".to_string(),
            ));
        }
        Ok(())
    }
}

// ============ Query Types ============

/// Sort direction, serialized as `asc`/`desc` in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Query-string value for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Query parameters for the cluster list operation.
///
/// Sorting is server-delegated: the requested field/direction are passed
/// through verbatim and the returned order is trusted. Filters on the
/// enumerated fields are single-select — assigning a new value replaces
/// the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterQueryParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of records per page.
    pub page_size: u32,
    /// Field key to sort by, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    /// Sort direction; only meaningful with `sort_field`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Keyword matched against cluster names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Single-select deployment-type filter.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<ClusterType>,
    /// Single-select status filter.
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<ClusterStatus>,
    /// Single-select enabled filter.
    #[serde(rename = "enabled", skip_serializing_if = "Option::is_none")]
    pub filter_enabled: Option<bool>,
}

impl Default for ClusterQueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            sort_field: None,
            sort_order: None,
            keyword: None,
            filter_type: None,
            filter_status: None,
            filter_enabled: None,
        }
    }
}

impl ClusterQueryParams {
    /// Clamp pagination values to valid ranges, preserving sort and filters.
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            ..self.clone()
        }
    }

    /// Whether any filter or keyword is active.
    pub fn has_filters(&self) -> bool {
        self.keyword.is_some()
            || self.filter_type.is_some()
            || self.filter_status.is_some()
            || self.filter_enabled.is_some()
    }

    /// Flatten into query-string pairs for the list request.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(field) = &self.sort_field {
            pairs.push(("sortField", field.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(t) = self.filter_type {
            pairs.push(("type", t.as_str().to_string()));
        }
        if let Some(s) = self.filter_status {
            pairs.push(("status", u8::from(s).to_string()));
        }
        if let Some(e) = self.filter_enabled {
            pairs.push(("enabled", e.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cluster_json() -> &'static str {
        r#"{
            "id": 3,
            "name": "flink-prod",
            "alias": "prod",
            "type": "Yarn",
            "hosts": "10.0.0.1:8081\n10.0.0.2:8081",
            "jobManagerHost": "10.0.0.1:8081",
            "status": 1,
            "note": "main cluster",
            "enabled": true,
            "createTime": "2024-05-01T08:30:00Z",
            "updateTime": 1714552200
        }"#
    }

    // ============ Cluster serde ============

    #[test]
    fn cluster_deserialize_full() {
        let res: serde_json::Result<Cluster> = serde_json::from_str(sample_cluster_json());
        assert!(res.is_ok(), "unexpected parse result: {:?}", res.err());
        let Ok(cluster) = res else {
            return;
        };
        assert_eq!(cluster.id, 3);
        assert_eq!(cluster.name, "flink-prod");
        assert_eq!(cluster.cluster_type, ClusterType::Yarn);
        assert_eq!(cluster.status, ClusterStatus::Normal);
        assert!(cluster.enabled);
        assert_eq!(
            cluster.create_time.map(|dt| dt.timestamp()),
            cluster.update_time.map(|dt| dt.timestamp())
        );
    }

    #[test]
    fn cluster_deserialize_sparse() {
        // 服务端只保证 id / name 一定存在
        let res: serde_json::Result<Cluster> =
            serde_json::from_str(r#"{"id": 7, "name": "bare"}"#);
        assert!(res.is_ok(), "unexpected parse result: {:?}", res.err());
        let Ok(cluster) = res else {
            return;
        };
        assert_eq!(cluster.status, ClusterStatus::Abnormal);
        assert!(!cluster.enabled);
        assert!(cluster.alias.is_empty());
        assert!(cluster.create_time.is_none());
    }

    #[test]
    fn status_unknown_number_is_abnormal() {
        // 历史数据中出现过 status = 3，按异常处理
        let res: serde_json::Result<Cluster> =
            serde_json::from_str(r#"{"id": 1, "name": "x", "status": 3}"#);
        assert!(res.is_ok(), "unexpected parse result: {:?}", res.err());
        let Ok(cluster) = res else {
            return;
        };
        assert_eq!(cluster.status, ClusterStatus::Abnormal);
    }

    #[test]
    fn status_serializes_as_number() {
        let json_res = serde_json::to_string(&ClusterStatus::Normal);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "1");
    }

    #[test]
    fn cluster_type_roundtrip_all() {
        for t in ClusterType::all() {
            let json_res = serde_json::to_string(t);
            assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
            let Ok(json) = json_res else {
                return;
            };
            assert_eq!(json, format!("\"{}\"", t.as_str()));

            let back_res: serde_json::Result<ClusterType> = serde_json::from_str(&json);
            assert!(back_res.is_ok(), "deserialize failed: {back_res:?}");
            let Ok(back) = back_res else {
                return;
            };
            assert_eq!(back, *t);
        }
    }

    // ============ Payload validation ============

    #[test]
    fn payload_valid_with_name() {
        let payload = ClusterPayload {
            name: "flink-prod".to_string(),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_rejects_empty_name() {
        let payload = ClusterPayload::default();
        let res = payload.validate();
        assert!(
            matches!(&res, Err(crate::GatewayError::Validation(_))),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn payload_rejects_whitespace_name() {
        let payload = ClusterPayload {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn payload_from_cluster_carries_id() {
        let res: serde_json::Result<Cluster> = serde_json::from_str(sample_cluster_json());
        let Ok(cluster) = res else {
            return;
        };
        let payload = ClusterPayload::from_cluster(&cluster);
        assert_eq!(payload.id, Some(3));
        assert_eq!(payload.name, "flink-prod");
        assert_eq!(payload.cluster_type, ClusterType::Yarn);
    }

    #[test]
    fn payload_create_omits_id() {
        let payload = ClusterPayload {
            name: "new".to_string(),
            ..Default::default()
        };
        let json_res = serde_json::to_string(&payload);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(!json.contains("\"id\""));
    }

    // ============ Pagination ============

    #[test]
    fn pagination_validated_clamps_page_zero() {
        let p = PaginationParams {
            page: 0,
            page_size: 20,
        };
        let v = p.validated(100);
        assert_eq!(v.page, 1);
        assert_eq!(v.page_size, 20);
    }

    #[test]
    fn pagination_validated_clamps_page_size() {
        let p = PaginationParams {
            page: 1,
            page_size: 9999,
        };
        assert_eq!(p.validated(100).page_size, 100);
        let p = PaginationParams {
            page: 1,
            page_size: 0,
        };
        assert_eq!(p.validated(100).page_size, 1);
    }

    #[test]
    fn page_result_deserialize() {
        let res: serde_json::Result<PageResult<Cluster>> = serde_json::from_str(
            r#"{"records": [{"id": 1, "name": "a"}], "total": 42}"#,
        );
        assert!(res.is_ok(), "unexpected parse result: {:?}", res.err());
        let Ok(page) = res else {
            return;
        };
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total, 42);
    }

    // ============ Query params ============

    #[test]
    fn query_pairs_default() {
        let params = ClusterQueryParams::default();
        let pairs = params.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("pageSize", "20".to_string()),
            ]
        );
        assert!(!params.has_filters());
    }

    #[test]
    fn query_pairs_with_sort_and_filters() {
        let params = ClusterQueryParams {
            page: 2,
            sort_field: Some("name".to_string()),
            sort_order: Some(SortOrder::Descending),
            filter_type: Some(ClusterType::Standalone),
            filter_status: Some(ClusterStatus::Abnormal),
            filter_enabled: Some(true),
            ..Default::default()
        };
        let pairs = params.to_query_pairs();
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("sortField", "name".to_string())));
        assert!(pairs.contains(&("sortOrder", "desc".to_string())));
        assert!(pairs.contains(&("type", "Standalone".to_string())));
        assert!(pairs.contains(&("status", "0".to_string())));
        assert!(pairs.contains(&("enabled", "true".to_string())));
        assert!(params.has_filters());
    }

    #[test]
    fn query_validated_preserves_filters() {
        let params = ClusterQueryParams {
            page: 0,
            page_size: 9999,
            filter_type: Some(ClusterType::Yarn),
            ..Default::default()
        };
        let v = params.validated(100);
        assert_eq!(v.page, 1);
        assert_eq!(v.page_size, 100);
        assert_eq!(v.filter_type, Some(ClusterType::Yarn));
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }
}
