// ==========================================
// 质量检验合格率引擎 - 引擎层
// ==========================================
// 职责: 按质量方案选择计数规则、计算合格率、批次判定
// 红线: 纯函数,无状态,不读写文件,不抛错
// ==========================================

pub mod consistency;
pub mod quality_rate;
pub mod rule;

// 重导出核心引擎
pub use consistency::{check_batch_consistency, BatchConsistencyReport};
pub use quality_rate::{
    calculate_batch_qualified_rate, calculate_sample_qualified_rate, compute_rate,
    count_individual_qualified, judge_by_threshold_with_default, round_rate, QualityRateEngine,
    DEFAULT_SAMPLING_THRESHOLD,
};
pub use rule::QualityRule;
