//! 集群页面状态
//!
//! 表格行集与查询参数由本状态独占持有；勾选集与详情目标是
//! 卫星状态，只通过这里的公开方法修改（单一写者纪律）。

use cluster_console_client::{
    Cluster, ClusterQueryParams, ClusterStatus, ClusterType, PageResult, SortOrder,
};

/// 集群页面状态
#[derive(Debug, Default)]
pub struct ClustersState {
    /// 当前页的记录行
    pub records: Vec<Cluster>,
    /// 满足查询条件的记录总数（跨页）
    pub total: u64,
    /// 高亮行索引
    pub cursor: usize,
    /// 当前查询参数（分页 / 排序 / 筛选）
    pub query: ClusterQueryParams,
    /// 勾选集（插入顺序 = 勾选顺序）
    pub selected: Vec<Cluster>,
    /// 详情面板目标
    pub detail: Option<Cluster>,
    /// 是否正在加载
    pub loading: bool,
}

impl ClustersState {
    /// 创建新的集群页面状态
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 行光标 ==========

    /// 选择上一行
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 选择下一行
    pub fn select_next(&mut self) {
        if !self.records.is_empty() && self.cursor < self.records.len() - 1 {
            self.cursor += 1;
        }
    }

    /// 跳到第一行
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 跳到最后一行
    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.cursor = self.records.len() - 1;
        }
    }

    /// 当前高亮的记录
    pub fn current_record(&self) -> Option<&Cluster> {
        self.records.get(self.cursor)
    }

    // ========== 行集 ==========

    /// 用一次列表响应整体替换行集（不做增量合并）
    pub fn set_page_result(&mut self, page: PageResult<Cluster>) {
        self.records = page.records;
        self.total = page.total;
        if self.cursor >= self.records.len() {
            self.cursor = self.records.len().saturating_sub(1);
        }
        self.loading = false;
    }

    // ========== 勾选集 ==========

    /// 记录是否在勾选集中
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// 勾选/取消勾选一条记录
    pub fn toggle_selected(&mut self, cluster: &Cluster) {
        if let Some(pos) = self.selected.iter().position(|c| c.id == cluster.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(cluster.clone());
        }
    }

    /// 用新的勾选集整体替换（表格库每次给全量集合，不给增量）
    pub fn set_selection(&mut self, selection: Vec<Cluster>) {
        self.selected = selection;
    }

    /// 清空勾选集
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// 勾选数量
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// 勾选集中被禁用的数量（总数 − 启用数）
    pub fn disabled_count(&self) -> usize {
        self.selected.len() - self.selected.iter().filter(|c| c.enabled).count()
    }

    /// 勾选集的 id 序列（保持勾选顺序）
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().map(|c| c.id).collect()
    }

    // ========== 详情面板 ==========

    /// 打开详情面板；已打开时直接替换目标，不经过空状态
    pub fn open_detail(&mut self, cluster: Cluster) {
        self.detail = Some(cluster);
    }

    /// 关闭详情面板，无条件清除目标
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    // ========== 查询参数 ==========

    /// 总页数
    pub fn page_count(&self) -> u32 {
        if self.total == 0 {
            1
        } else {
            (self.total as u32).div_ceil(self.query.page_size.max(1))
        }
    }

    /// 下一页；返回是否发生变化
    pub fn next_page(&mut self) -> bool {
        if self.query.page < self.page_count() {
            self.query.page += 1;
            true
        } else {
            false
        }
    }

    /// 上一页；返回是否发生变化
    pub fn prev_page(&mut self) -> bool {
        if self.query.page > 1 {
            self.query.page -= 1;
            true
        } else {
            false
        }
    }

    /// 在可排序字段间循环排序键：None → 第一个 → … → None
    pub fn cycle_sort(&mut self, sortable: &[&'static str]) {
        if sortable.is_empty() {
            return;
        }
        let next = match self.query.sort_field.as_deref() {
            None => Some(sortable[0]),
            Some(current) => {
                let index = sortable.iter().position(|f| *f == current);
                match index {
                    Some(i) if i + 1 < sortable.len() => Some(sortable[i + 1]),
                    _ => None,
                }
            }
        };
        self.query.sort_field = next.map(str::to_string);
        self.query.sort_order = next.map(|_| {
            self.query.sort_order.unwrap_or(SortOrder::Ascending)
        });
        self.query.page = 1;
    }

    /// 切换排序方向（未设排序键时无效果）
    pub fn toggle_sort_order(&mut self) {
        if self.query.sort_field.is_some() {
            let current = self.query.sort_order.unwrap_or(SortOrder::Ascending);
            self.query.sort_order = Some(current.toggled());
            self.query.page = 1;
        }
    }

    /// 循环类型筛选：全部 → Yarn → Standalone → Others → 全部
    pub fn cycle_type_filter(&mut self) {
        self.query.filter_type = match self.query.filter_type {
            None => Some(ClusterType::Yarn),
            Some(ClusterType::Yarn) => Some(ClusterType::Standalone),
            Some(ClusterType::Standalone) => Some(ClusterType::Others),
            Some(ClusterType::Others) => None,
        };
        self.query.page = 1;
    }

    /// 循环状态筛选：全部 → 正常 → 异常 → 全部
    pub fn cycle_status_filter(&mut self) {
        self.query.filter_status = match self.query.filter_status {
            None => Some(ClusterStatus::Normal),
            Some(ClusterStatus::Normal) => Some(ClusterStatus::Abnormal),
            Some(ClusterStatus::Abnormal) => None,
        };
        self.query.page = 1;
    }

    /// 循环启用筛选：全部 → 已启用 → 已禁用 → 全部
    pub fn cycle_enabled_filter(&mut self) {
        self.query.filter_enabled = match self.query.filter_enabled {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        self.query.page = 1;
    }

    /// 清除所有筛选与关键字
    pub fn clear_filters(&mut self) {
        self.query.keyword = None;
        self.query.filter_type = None;
        self.query.filter_status = None;
        self.query.filter_enabled = None;
        self.query.page = 1;
    }

    /// 设置关键字搜索（空串视为清除）
    pub fn set_keyword(&mut self, keyword: String) {
        let trimmed = keyword.trim();
        self.query.keyword = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.query.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: i64, name: &str, enabled: bool) -> Cluster {
        let json = format!(r#"{{"id": {id}, "name": "{name}", "enabled": {enabled}}}"#);
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("cluster must parse: {e}"))
    }

    fn page(records: Vec<Cluster>, total: u64) -> PageResult<Cluster> {
        PageResult { records, total }
    }

    #[test]
    fn set_page_result_replaces_rows_and_clamps_cursor() {
        let mut state = ClustersState::new();
        state.set_page_result(page(
            vec![cluster(1, "a", true), cluster(2, "b", false), cluster(3, "c", true)],
            3,
        ));
        state.select_last();
        assert_eq!(state.cursor, 2);

        state.set_page_result(page(vec![cluster(9, "z", true)], 1));
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn selection_tracks_insertion_order() {
        let mut state = ClustersState::new();
        let a = cluster(1, "a", true);
        let b = cluster(2, "b", false);
        state.toggle_selected(&b);
        state.toggle_selected(&a);
        assert_eq!(state.selected_ids(), vec![2, 1]);
    }

    #[test]
    fn toggle_removes_existing_member() {
        let mut state = ClustersState::new();
        let a = cluster(1, "a", true);
        state.toggle_selected(&a);
        assert!(state.is_selected(1));
        state.toggle_selected(&a);
        assert!(!state.is_selected(1));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn set_selection_replaces_verbatim() {
        let mut state = ClustersState::new();
        state.toggle_selected(&cluster(1, "a", true));
        state.set_selection(vec![cluster(5, "e", false), cluster(6, "f", true)]);
        assert_eq!(state.selected_ids(), vec![5, 6]);
    }

    #[test]
    fn disabled_count_is_total_minus_enabled() {
        let mut state = ClustersState::new();
        state.toggle_selected(&cluster(1, "a", true));
        state.toggle_selected(&cluster(2, "b", false));
        state.toggle_selected(&cluster(3, "c", false));
        assert_eq!(state.selected_count(), 3);
        assert_eq!(state.disabled_count(), 2);
    }

    #[test]
    fn selection_survives_row_replacement() {
        // 普通翻页/筛选重载不清勾选集
        let mut state = ClustersState::new();
        state.set_page_result(page(vec![cluster(1, "a", true)], 2));
        state.toggle_selected(&cluster(1, "a", true));
        state.set_page_result(page(vec![cluster(2, "b", true)], 2));
        assert_eq!(state.selected_ids(), vec![1]);
    }

    #[test]
    fn detail_open_replaces_without_clearing() {
        let mut state = ClustersState::new();
        state.open_detail(cluster(1, "a", true));
        assert_eq!(state.detail.as_ref().map(|c| c.id), Some(1));
        state.open_detail(cluster(2, "b", true));
        assert_eq!(state.detail.as_ref().map(|c| c.id), Some(2));
        state.close_detail();
        assert!(state.detail.is_none());
    }

    #[test]
    fn page_navigation_clamped_by_total() {
        let mut state = ClustersState::new();
        state.query.page_size = 10;
        state.total = 25; // 3 页
        assert!(!state.prev_page());
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.query.page, 3);
        assert!(!state.next_page());
        assert!(state.prev_page());
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn page_count_with_no_rows() {
        let state = ClustersState::new();
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn sort_cycle_walks_fields_then_clears() {
        let mut state = ClustersState::new();
        let fields = ["name", "alias"];
        state.cycle_sort(&fields);
        assert_eq!(state.query.sort_field.as_deref(), Some("name"));
        assert_eq!(state.query.sort_order, Some(SortOrder::Ascending));
        state.cycle_sort(&fields);
        assert_eq!(state.query.sort_field.as_deref(), Some("alias"));
        state.cycle_sort(&fields);
        assert!(state.query.sort_field.is_none());
        assert!(state.query.sort_order.is_none());
    }

    #[test]
    fn sort_order_toggle_requires_sort_field() {
        let mut state = ClustersState::new();
        state.toggle_sort_order();
        assert!(state.query.sort_order.is_none());
        state.cycle_sort(&["name"]);
        state.toggle_sort_order();
        assert_eq!(state.query.sort_order, Some(SortOrder::Descending));
    }

    #[test]
    fn filters_are_single_select() {
        // 选择新值替换旧值，而不是叠加
        let mut state = ClustersState::new();
        state.cycle_type_filter();
        assert_eq!(state.query.filter_type, Some(ClusterType::Yarn));
        state.cycle_type_filter();
        assert_eq!(state.query.filter_type, Some(ClusterType::Standalone));
        state.cycle_type_filter();
        state.cycle_type_filter();
        assert!(state.query.filter_type.is_none());
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = ClustersState::new();
        state.query.page = 4;
        state.cycle_status_filter();
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut state = ClustersState::new();
        state.cycle_type_filter();
        state.cycle_enabled_filter();
        state.set_keyword("prod".to_string());
        assert!(state.query.has_filters());
        state.clear_filters();
        assert!(!state.query.has_filters());
    }

    #[test]
    fn keyword_blank_clears() {
        let mut state = ClustersState::new();
        state.set_keyword("  ".to_string());
        assert!(state.query.keyword.is_none());
        state.set_keyword(" flink ".to_string());
        assert_eq!(state.query.keyword.as_deref(), Some("flink"));
    }
}
