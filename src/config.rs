//! 配置模块
//!
//! 支持从 JSON 文件加载服务配置。模型文件位置固定，不在配置中

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件 {} 失败", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件 {} 失败", path.display()))?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    ///
    /// 加载过程记录在返回值中，日志系统初始化后调用 [`LoadedConfig::log_outcome`] 输出
    pub fn load() -> LoadedConfig {
        Self::load_from(&["config.json", "config/config.json"])
    }

    fn load_from(config_paths: &[&str]) -> LoadedConfig {
        let mut failures = Vec::new();

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        return LoadedConfig {
                            config,
                            source: Some(path.to_string()),
                            failures,
                        };
                    }
                    Err(e) => failures.push(format!("加载配置文件 {} 失败: {:#}", path, e)),
                }
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            failures,
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 配置加载结果
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// 成功加载的配置文件，None 表示使用默认配置
    pub source: Option<String>,
    /// 存在但加载失败的配置文件
    pub failures: Vec<String>,
}

impl LoadedConfig {
    /// 输出加载过程日志
    pub fn log_outcome(&self) {
        for failure in &self.failures {
            log::warn!("{}", failure);
        }
        match &self.source {
            Some(path) => log::info!("从 {} 加载配置成功", path),
            None => log::info!("使用默认配置"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.server.workers, 0);
        assert_eq!(config.log.level, "info");
    }

    /// 缺省的字段使用默认值
    #[test]
    fn test_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server": {{"port": 9000}}}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let path_str = path.to_str().unwrap();
        let loaded = AppConfig::load_from(&[path_str]);
        assert_eq!(loaded.config.server.port, 8080);
        assert!(loaded.source.is_none());
        assert_eq!(loaded.failures.len(), 1);
        assert!(loaded.failures[0].contains(path_str));
    }

    /// 字段类型错误的配置文件同样记录失败原因，并继续尝试下一个文件
    #[test]
    fn test_bad_field_type_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("config.json");
        fs::write(&bad, r#"{"server": {"port": "oops"}}"#).unwrap();
        let good = dir.path().join("config2.json");
        fs::write(&good, r#"{"server": {"port": 9100}}"#).unwrap();

        let bad_str = bad.to_str().unwrap();
        let good_str = good.to_str().unwrap();
        let loaded = AppConfig::load_from(&[bad_str, good_str]);

        assert_eq!(loaded.config.server.port, 9100);
        assert_eq!(loaded.source.as_deref(), Some(good_str));
        assert_eq!(loaded.failures.len(), 1);
        assert!(loaded.failures[0].contains(bad_str));
    }

    #[test]
    fn test_missing_files_use_default() {
        let loaded = AppConfig::load_from(&["/nonexistent/config.json"]);
        assert_eq!(loaded.config.bind_addr(), "0.0.0.0:8080");
        assert!(loaded.source.is_none());
        assert!(loaded.failures.is_empty());
    }
}
