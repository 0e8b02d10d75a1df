//! 内容面板消息
//!
//! 处理内容面板中的操作：表格光标、勾选、分页排序筛选、
//! 行级操作、批量操作与心跳检测

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开当前行的详情面板）
    Confirm,
    /// 勾选/取消勾选当前行
    ToggleSelect,

    // ========== 行级操作 ==========
    /// 新建（打开新建表单弹窗）
    Add,
    /// 编辑当前行（打开维护表单弹窗）
    Edit,
    /// 删除当前行（先确认）
    Delete,

    // ========== 分页 / 排序 / 筛选 ==========
    /// 下一页
    NextPage,
    /// 上一页
    PrevPage,
    /// 循环排序列
    CycleSort,
    /// 切换排序方向
    ToggleSortOrder,
    /// 循环第 n 个可筛选字段的单选筛选值
    CycleFilter(usize),
    /// 清除所有筛选
    ClearFilters,
    /// 打开关键字搜索弹窗
    OpenSearch,

    // ========== 批量操作（仅勾选集非空时） ==========
    /// 批量删除（先确认）
    BatchDelete,
    /// 批量启用（先确认）
    BatchEnable,
    /// 批量禁用（先确认）
    BatchDisable,

    // ========== 工具栏 ==========
    /// 心跳检测（无目标记录）
    Heartbeat,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
