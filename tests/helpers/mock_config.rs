// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use inspection_quality_rate::config::{ConfigError, ConfigResult, QualityConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub default_sampling_threshold: Option<f64>,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            default_sampling_threshold: Some(0.95),
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            default_sampling_threshold: Some(threshold),
        }
    }

    /// 读取失败的配置
    pub fn broken() -> Self {
        Self {
            default_sampling_threshold: None,
        }
    }
}

impl QualityConfigReader for MockConfig {
    fn get_default_sampling_threshold(&self) -> ConfigResult<f64> {
        self.default_sampling_threshold
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "default_sampling_threshold".to_string(),
                value: String::new(),
                message: "mock: 未配置".to_string(),
            })
    }
}
