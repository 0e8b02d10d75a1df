//! 文本宽度工具
//!
//! 表格列对齐需要按显示宽度（而不是字符数）截断与补齐，
//! 中文等全角字符占两列。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 将字符串按显示宽度补齐/截断到 `width` 列
pub fn pad_to_width(text: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(text);
    if display_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - display_width));
        return out;
    }

    // 截断到 width-1 列并追加省略号
    let target = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn pads_short_ascii() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
    }

    #[test]
    fn truncates_long_text_with_ellipsis() {
        let out = pad_to_width("abcdefgh", 5);
        assert_eq!(UnicodeWidthStr::width(out.as_str()), 5);
        assert!(out.contains('…'));
    }

    #[test]
    fn counts_wide_characters() {
        // “正常” 占 4 列
        assert_eq!(pad_to_width("正常", 6), "正常  ");
        let truncated = pad_to_width("集群管理控制台", 6);
        assert_eq!(UnicodeWidthStr::width(truncated.as_str()), 6);
    }

    #[test]
    fn exact_width_unchanged() {
        assert_eq!(pad_to_width("abcde", 5), "abcde");
    }
}
