//! 字段描述序列（Field Schema）
//!
//! 表格、新建/维护表单和详情面板共用同一份有序字段描述，
//! 三个渲染器只消费描述，不各自维护字段清单。
//! 给 schema 增加一个必填字段，两个表单弹窗会同时生效。

use chrono::{DateTime, Utc};
use cluster_console_client::{Cluster, ClusterPayload, ClusterStatus, ClusterType};

use crate::i18n::Translations;

/// 字段键，对应管理服务的字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Id,
    Alias,
    Type,
    Hosts,
    JobManagerHost,
    Status,
    Note,
    Enabled,
    CreateTime,
    UpdateTime,
}

impl FieldKey {
    /// 服务端字段名（用于排序参数）
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Alias => "alias",
            Self::Type => "type",
            Self::Hosts => "hosts",
            Self::JobManagerHost => "jobManagerHost",
            Self::Status => "status",
            Self::Note => "note",
            Self::Enabled => "enabled",
            Self::CreateTime => "createTime",
            Self::UpdateTime => "updateTime",
        }
    }

    /// 字段的显示标签
    pub fn label(self, texts: &Translations) -> &'static str {
        match self {
            Self::Name => texts.fields.name,
            Self::Id => texts.fields.id,
            Self::Alias => texts.fields.alias,
            Self::Type => texts.fields.cluster_type,
            Self::Hosts => texts.fields.hosts,
            Self::JobManagerHost => texts.fields.job_manager_host,
            Self::Status => texts.fields.status,
            Self::Note => texts.fields.note,
            Self::Enabled => texts.fields.enabled,
            Self::CreateTime => texts.fields.create_time,
            Self::UpdateTime => texts.fields.update_time,
        }
    }
}

/// 枚举值的语义标记，决定单元格配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticTag {
    Success,
    Error,
}

/// 单个字段的声明式描述
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    /// 是否出现在表格列中
    pub in_table: bool,
    /// 是否出现在表单中（可编辑）
    pub in_form: bool,
    /// 是否出现在详情面板中
    pub in_detail: bool,
    /// 是否可作为单选筛选条件
    pub filterable: bool,
    /// 是否可作为排序键
    pub sortable: bool,
    /// 表单必填
    pub required: bool,
    /// 表单中是否为多行文本
    pub multiline: bool,
}

/// 有序字段描述序列，整个界面的唯一真相来源
pub fn field_schema() -> &'static [FieldDescriptor] {
    const SCHEMA: &[FieldDescriptor] = &[
        FieldDescriptor {
            key: FieldKey::Name,
            in_table: true,
            in_form: true,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: true,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Id,
            in_table: false,
            in_form: false,
            in_detail: true,
            filterable: false,
            sortable: false,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Alias,
            in_table: true,
            in_form: true,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Type,
            in_table: true,
            in_form: true,
            in_detail: true,
            filterable: true,
            sortable: true,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Hosts,
            in_table: false,
            in_form: true,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: true,
        },
        FieldDescriptor {
            key: FieldKey::JobManagerHost,
            in_table: false,
            in_form: false,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Status,
            in_table: true,
            in_form: false,
            in_detail: true,
            filterable: true,
            sortable: false,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::Note,
            in_table: false,
            in_form: true,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: true,
        },
        FieldDescriptor {
            key: FieldKey::Enabled,
            in_table: true,
            in_form: false,
            in_detail: true,
            filterable: true,
            sortable: false,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::CreateTime,
            in_table: false,
            in_form: false,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: false,
        },
        FieldDescriptor {
            key: FieldKey::UpdateTime,
            in_table: true,
            in_form: false,
            in_detail: true,
            filterable: false,
            sortable: true,
            required: false,
            multiline: false,
        },
    ];
    SCHEMA
}

/// 表格列（按 schema 顺序）
pub fn table_fields() -> Vec<&'static FieldDescriptor> {
    field_schema().iter().filter(|d| d.in_table).collect()
}

/// 表单字段（新建与维护表单共用）
pub fn form_fields() -> Vec<&'static FieldDescriptor> {
    field_schema().iter().filter(|d| d.in_form).collect()
}

/// 详情面板字段
pub fn detail_fields() -> Vec<&'static FieldDescriptor> {
    field_schema().iter().filter(|d| d.in_detail).collect()
}

/// 可排序字段
pub fn sortable_fields() -> Vec<&'static FieldDescriptor> {
    field_schema().iter().filter(|d| d.sortable).collect()
}

/// 可筛选字段（单选）
pub fn filterable_fields() -> Vec<&'static FieldDescriptor> {
    field_schema().iter().filter(|d| d.filterable).collect()
}

/// 表格列宽（按字段）
pub fn column_width(key: FieldKey) -> usize {
    match key {
        FieldKey::Name => 20,
        FieldKey::Alias => 14,
        FieldKey::Type => 12,
        FieldKey::Status => 10,
        FieldKey::Enabled => 10,
        FieldKey::CreateTime | FieldKey::UpdateTime => 20,
        _ => 16,
    }
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// 字段在表格/详情中的显示值
pub fn display_value(cluster: &Cluster, key: FieldKey, texts: &Translations) -> String {
    match key {
        FieldKey::Name => cluster.name.clone(),
        FieldKey::Id => cluster.id.to_string(),
        FieldKey::Alias => cluster.alias.clone(),
        FieldKey::Type => cluster.cluster_type.as_str().to_string(),
        FieldKey::Hosts => cluster.hosts.clone(),
        FieldKey::JobManagerHost => cluster.job_manager_host.clone(),
        FieldKey::Status => match cluster.status {
            ClusterStatus::Normal => texts.fields.status_normal.to_string(),
            ClusterStatus::Abnormal => texts.fields.status_abnormal.to_string(),
        },
        FieldKey::Note => cluster.note.clone(),
        FieldKey::Enabled => {
            if cluster.enabled {
                texts.fields.enabled_on.to_string()
            } else {
                texts.fields.enabled_off.to_string()
            }
        }
        FieldKey::CreateTime => format_time(cluster.create_time),
        FieldKey::UpdateTime => format_time(cluster.update_time),
    }
}

/// 枚举字段的语义标记（状态/启用列的配色依据）
pub fn semantic_tag(cluster: &Cluster, key: FieldKey) -> Option<SemanticTag> {
    match key {
        FieldKey::Status => Some(match cluster.status {
            ClusterStatus::Normal => SemanticTag::Success,
            ClusterStatus::Abnormal => SemanticTag::Error,
        }),
        FieldKey::Enabled => Some(if cluster.enabled {
            SemanticTag::Success
        } else {
            SemanticTag::Error
        }),
        _ => None,
    }
}

/// 表单字段的初始值（新建表单）
pub fn default_form_values() -> Vec<String> {
    form_fields()
        .iter()
        .map(|d| match d.key {
            FieldKey::Type => ClusterType::default().as_str().to_string(),
            _ => String::new(),
        })
        .collect()
}

/// 表单字段的预填值（维护表单，从现有记录取值）
pub fn form_values_from(cluster: &Cluster) -> Vec<String> {
    form_fields()
        .iter()
        .map(|d| match d.key {
            FieldKey::Name => cluster.name.clone(),
            FieldKey::Alias => cluster.alias.clone(),
            FieldKey::Type => cluster.cluster_type.as_str().to_string(),
            FieldKey::Hosts => cluster.hosts.clone(),
            FieldKey::Note => cluster.note.clone(),
            _ => String::new(),
        })
        .collect()
}

/// 校验表单值，返回第一个违反必填规则的错误文案
pub fn validate_form_values(values: &[String], texts: &Translations) -> Option<String> {
    for (descriptor, value) in form_fields().iter().zip(values) {
        if descriptor.required && value.trim().is_empty() {
            return Some(format!(
                "{}{}",
                descriptor.key.label(texts),
                texts.modal.required_suffix
            ));
        }
    }
    None
}

/// 由表单值装配网关载荷。`id` 为 None 表示新建。
pub fn payload_from_values(values: &[String], id: Option<i64>) -> ClusterPayload {
    let mut payload = ClusterPayload {
        id,
        ..Default::default()
    };
    for (descriptor, value) in form_fields().iter().zip(values) {
        match descriptor.key {
            FieldKey::Name => payload.name = value.trim().to_string(),
            FieldKey::Alias => payload.alias = value.trim().to_string(),
            FieldKey::Type => {
                payload.cluster_type = ClusterType::all()
                    .iter()
                    .copied()
                    .find(|t| t.as_str() == value)
                    .unwrap_or_default();
            }
            FieldKey::Hosts => payload.hosts = value.clone(),
            FieldKey::Note => payload.note = value.clone(),
            _ => {}
        }
    }
    payload
}

/// 表单中以选项方式编辑的枚举字段
pub fn is_enum_field(key: FieldKey) -> bool {
    matches!(key, FieldKey::Type)
}

/// 枚举表单字段的选项循环（目前只有类型字段）
pub fn cycle_enum_value(key: FieldKey, current: &str, forward: bool) -> Option<String> {
    if !is_enum_field(key) {
        return None;
    }
    let options = ClusterType::all();
    let index = options
        .iter()
        .position(|t| t.as_str() == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else {
        (index + options.len() - 1) % options.len()
    };
    Some(options[next].as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;

    fn sample_cluster() -> Cluster {
        let res: serde_json::Result<Cluster> = serde_json::from_str(
            r#"{"id": 5, "name": "flink-a", "alias": "a", "type": "Standalone",
                "hosts": "h1\nh2", "status": 1, "note": "n", "enabled": true}"#,
        );
        res.unwrap_or_else(|e| panic!("sample cluster must parse: {e}"))
    }

    #[test]
    fn schema_ordering_is_stable() {
        let keys: Vec<FieldKey> = field_schema().iter().map(|d| d.key).collect();
        assert_eq!(keys[0], FieldKey::Name);
        assert!(keys.contains(&FieldKey::JobManagerHost));
        assert_eq!(keys.len(), 11);
    }

    #[test]
    fn table_form_detail_are_projections() {
        // 三个渲染面都来自同一序列
        for d in table_fields() {
            assert!(field_schema().iter().any(|s| s.key == d.key));
        }
        assert!(form_fields().iter().all(|d| d.in_form));
        assert_eq!(detail_fields().len(), field_schema().len());
    }

    #[test]
    fn id_never_editable_or_tabled() {
        let id = field_schema()
            .iter()
            .find(|d| d.key == FieldKey::Id)
            .map(|d| (d.in_table, d.in_form));
        assert_eq!(id, Some((false, false)));
    }

    #[test]
    fn filterable_fields_are_the_three_enums() {
        let keys: Vec<FieldKey> = filterable_fields().iter().map(|d| d.key).collect();
        assert_eq!(keys, vec![FieldKey::Type, FieldKey::Status, FieldKey::Enabled]);
    }

    #[test]
    fn required_validation_flags_empty_name() {
        let values = default_form_values();
        let error = validate_form_values(&values, t());
        assert!(error.is_some());
    }

    #[test]
    fn required_validation_passes_with_name() {
        let mut values = default_form_values();
        values[0] = "flink-prod".to_string();
        assert!(validate_form_values(&values, t()).is_none());
    }

    #[test]
    fn payload_roundtrip_through_form_values() {
        let cluster = sample_cluster();
        let values = form_values_from(&cluster);
        let payload = payload_from_values(&values, Some(cluster.id));
        assert_eq!(payload.id, Some(5));
        assert_eq!(payload.name, "flink-a");
        assert_eq!(payload.cluster_type, cluster.cluster_type);
        assert_eq!(payload.hosts, "h1\nh2");
    }

    #[test]
    fn enum_cycle_wraps_both_ways() {
        let forward = cycle_enum_value(FieldKey::Type, "Others", true);
        assert_eq!(forward.as_deref(), Some("Yarn"));
        let backward = cycle_enum_value(FieldKey::Type, "Yarn", false);
        assert_eq!(backward.as_deref(), Some("Others"));
        assert!(cycle_enum_value(FieldKey::Name, "x", true).is_none());
    }

    #[test]
    fn semantic_tags_for_enum_columns() {
        let cluster = sample_cluster();
        assert_eq!(
            semantic_tag(&cluster, FieldKey::Status),
            Some(SemanticTag::Success)
        );
        assert_eq!(
            semantic_tag(&cluster, FieldKey::Enabled),
            Some(SemanticTag::Success)
        );
        assert_eq!(semantic_tag(&cluster, FieldKey::Name), None);
    }

    #[test]
    fn display_value_maps_enums_to_labels() {
        let cluster = sample_cluster();
        let texts = t();
        assert_eq!(
            display_value(&cluster, FieldKey::Status, texts),
            texts.fields.status_normal
        );
        assert_eq!(
            display_value(&cluster, FieldKey::Type, texts),
            "Standalone"
        );
    }
}
