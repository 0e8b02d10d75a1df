//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（取消，不发起任何网关调用）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 枚举字段：上一个选项
    PrevOption,

    /// 枚举字段：下一个选项
    NextOption,

    /// 确认/提交
    Confirm,

    /// 在确认对话框中切换 取消/确认 焦点
    ToggleConfirmFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
