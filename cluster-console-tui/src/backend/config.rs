//! 配置服务
//!
//! 配置文件位于 `<配置目录>/cluster-console/config.json`，
//! 缺失或损坏时回退到默认值。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 集群资源的基础路径
    pub base_url: String,
    /// 界面语言（BCP 47 代码）
    pub language: String,
    /// 主题（dark / light）
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888/api/cluster".to_string(),
            language: "en-US".to_string(),
            theme: "dark".to_string(),
        }
    }
}

/// 配置文件路径
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cluster-console").join("config.json"))
}

/// 加载配置；文件缺失或解析失败时使用默认配置
pub fn load_or_default() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config file {}: {e}", path.display());
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

/// 保存配置
pub fn save(config: &AppConfig) -> Result<()> {
    let path = config_path().context("no config directory available")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert_eq!(config.language, "en-US");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn partial_config_fills_defaults() {
        // serde(default)：旧版本配置文件缺字段也能读
        let res: serde_json::Result<AppConfig> =
            serde_json::from_str(r#"{"language": "zh-CN"}"#);
        assert!(res.is_ok(), "unexpected parse result: {:?}", res.err());
        let Ok(config) = res else {
            return;
        };
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig {
            base_url: "http://10.0.0.1:8888/api/cluster".to_string(),
            language: "zh-CN".to_string(),
            theme: "light".to_string(),
        };
        let json_res = serde_json::to_string(&config);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        let back_res: serde_json::Result<AppConfig> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "deserialize failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.theme, "light");
    }
}
