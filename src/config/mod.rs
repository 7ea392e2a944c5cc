// ==========================================
// 质量检验合格率引擎 - 配置层
// ==========================================
// 职责: 引擎配置加载与查询,支持文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod quality_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use quality_config_trait::QualityConfigReader;
