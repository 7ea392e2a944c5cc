// ==========================================
// 质量检验合格率引擎 - 核心库
// ==========================================
// 系统定位: 质量管理应用的计算内核（不含存储、界面、录入）
// 职责: 按质量方案选择计数规则、分母口径与判定口径,输出统一结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录、方案、结果与枚举
pub mod domain;

// 引擎层 - 合格率计算与批次判定
pub mod engine;

// 配置层 - 默认阈值等引擎配置
pub mod config;

// 导入层 - 文件 → 检验记录
pub mod importer;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    BatchTotals, CalculationResult, FullInspectionStrategy, InspectionObjectType,
    InspectionRecord, InspectionType, JudgmentResult, QualifiedRate, QualifiedStatus,
    QualityPlanConfig,
};

pub use engine::{QualityRateEngine, QualityRule, DEFAULT_SAMPLING_THRESHOLD};

pub use config::{ConfigError, ConfigManager, QualityConfigReader};

pub use importer::{ImportError, ImportResult};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "质量检验合格率引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
