// ==========================================
// 质量检验合格率引擎 - 领域模型层
// ==========================================
// 职责: 定义检验记录、质量方案、计算结果与枚举类型
// 红线: 不含计算逻辑,不含文件读写
// ==========================================

pub mod plan;
pub mod record;
pub mod result;
pub mod types;

// 重导出核心类型
pub use plan::QualityPlanConfig;
pub use record::{BatchTotals, InspectionRecord};
pub use result::{CalculationResult, QualifiedRate};
pub use types::{
    FullInspectionStrategy, InspectionObjectType, InspectionType, JudgmentResult,
    QualifiedStatus, UnknownTag,
};
