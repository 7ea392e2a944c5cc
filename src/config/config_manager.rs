// ==========================================
// 质量检验合格率引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: key-value（JSON 文件,值统一为字符串）
// 覆写顺序: 默认值 < 配置文件 < 环境变量
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::quality_config_trait::QualityConfigReader;
use crate::engine::quality_rate::DEFAULT_SAMPLING_THRESHOLD;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置
    ///
    /// 文件格式: {"default_sampling_threshold": "0.9"}
    /// 数值也接受 JSON number,统一转为字符串保存
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let map: HashMap<String, serde_json::Value> =
            serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        let values = map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self { values })
    }

    /// 应用进程环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(std::env::vars());
    }

    /// 应用覆写（环境变量名 → 配置键）
    ///
    /// 仅识别 config_keys::ENV_OVERRIDES 中登记的变量,其余忽略
    pub fn apply_overrides_from<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            if let Some((_, key)) = config_keys::ENV_OVERRIDES
                .iter()
                .find(|(env_name, _)| *env_name == name)
            {
                tracing::debug!(env = %name, config_key = key, "环境变量覆写配置");
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// 设置配置值
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 读取配置值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(v) if !v.trim().is_empty() => v,
            _ => default,
        }
    }

    /// 获取所有配置的快照（JSON 格式,按 key 排序）
    pub fn snapshot(&self) -> String {
        let ordered: std::collections::BTreeMap<&String, &String> = self.values.iter().collect();
        json!(ordered).to_string()
    }
}

// ==========================================
// QualityConfigReader Trait 实现
// ==========================================
impl QualityConfigReader for ConfigManager {
    fn get_default_sampling_threshold(&self) -> ConfigResult<f64> {
        let default = DEFAULT_SAMPLING_THRESHOLD.to_string();
        let value = self.get_or_default(config_keys::DEFAULT_SAMPLING_THRESHOLD, &default);

        let threshold = value
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidValue {
                key: config_keys::DEFAULT_SAMPLING_THRESHOLD.to_string(),
                value: value.to_string(),
                message: e.to_string(),
            })?;

        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::DEFAULT_SAMPLING_THRESHOLD.to_string(),
                value: value.to_string(),
                message: "阈值必须在 (0, 1] 范围内".to_string(),
            });
        }

        Ok(threshold)
    }
}

// ==========================================
// 配置键定义
// ==========================================
pub mod config_keys {
    // 判定
    pub const DEFAULT_SAMPLING_THRESHOLD: &str = "default_sampling_threshold";

    /// 环境变量 → 配置键
    pub const ENV_OVERRIDES: &[(&str, &str)] = &[(
        "QUALITY_RATE_DEFAULT_SAMPLING_THRESHOLD",
        DEFAULT_SAMPLING_THRESHOLD,
    )];
}
