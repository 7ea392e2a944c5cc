// ==========================================
// 质量检验合格率引擎 - 合格率计算与批次判定
// ==========================================
// 职责: 合格计数、合格率计算、阈值判定、按质量方案分派
// 红线: 任何输入都不报错; 分母无效或配置无法识别时返回全零、不判定
// 红线: 合格率不做 100 封顶（分子大于分母说明上游口径有问题,不在此掩盖）
// ==========================================

use crate::config::{ConfigError, QualityConfigReader};
use crate::domain::plan::QualityPlanConfig;
use crate::domain::record::{BatchTotals, InspectionRecord};
use crate::domain::result::{CalculationResult, QualifiedRate};
use crate::domain::types::JudgmentResult;
use crate::engine::consistency::check_batch_consistency;
use crate::engine::rule::QualityRule;
use tracing::{debug, instrument, warn};

/// 抽检合格阈值默认值（方案未配置时使用）
pub const DEFAULT_SAMPLING_THRESHOLD: f64 = 0.95;

// ==========================================
// 基础计数函数
// ==========================================

/// 合格率保留 2 位小数: round(rate × 100) / 100
pub fn round_rate(rate: f64) -> f64 {
    (rate * 100.0).round() / 100.0
}

/// 合格率（百分比,2 位小数）; 分母 ≤ 0 时为 0
pub fn compute_rate(qualified_quantity: i64, total_quantity: i64) -> f64 {
    if total_quantity <= 0 {
        return 0.0;
    }
    round_rate(qualified_quantity as f64 / total_quantity as f64 * 100.0)
}

/// 样本口径合格率
///
/// 统计 sample_qualified_status 为合格的记录数,除以样本总数。
/// 样本总数缺失或 ≤ 0 → 合格数 0、合格率 0（不可判定）
pub fn calculate_sample_qualified_rate(
    records: &[InspectionRecord],
    sample_total_quantity: Option<i64>,
) -> QualifiedRate {
    match sample_total_quantity {
        Some(total) if total > 0 => {
            let qualified = records.iter().filter(|r| r.is_sample_qualified()).count() as i64;
            QualifiedRate {
                qualified_quantity: qualified,
                qualified_rate: compute_rate(qualified, total),
            }
        }
        _ => QualifiedRate::undecidable(),
    }
}

/// 批次口径合格率
///
/// 统计 individual_qualified_status 为合格的记录数,除以批次总数。
/// 批次总数缺失或 ≤ 0 → 合格数 0、合格率 0
pub fn calculate_batch_qualified_rate(
    records: &[InspectionRecord],
    batch_total_quantity: Option<i64>,
) -> QualifiedRate {
    match batch_total_quantity {
        Some(total) if total > 0 => {
            let qualified = count_individual_qualified(records);
            QualifiedRate {
                qualified_quantity: qualified,
                qualified_rate: compute_rate(qualified, total),
            }
        }
        _ => QualifiedRate::undecidable(),
    }
}

/// 个体合格数（无分母,供各分支复用）
pub fn count_individual_qualified(records: &[InspectionRecord]) -> i64 {
    records.iter().filter(|r| r.is_individual_qualified()).count() as i64
}

/// 阈值判定（纯函数形式）
///
/// - rate: 合格率百分比（0~100）
/// - threshold: 阈值小数（0~1）; 缺失、0 或 NaN 时使用 default_threshold
///
/// rate / 100 ≥ threshold → 合格,否则不合格
pub fn judge_by_threshold_with_default(
    qualified_rate: f64,
    threshold: Option<f64>,
    default_threshold: f64,
) -> JudgmentResult {
    let threshold = effective_threshold(threshold, default_threshold);
    if qualified_rate / 100.0 >= threshold {
        JudgmentResult::Qualified
    } else {
        JudgmentResult::Unqualified
    }
}

fn effective_threshold(threshold: Option<f64>, default_threshold: f64) -> f64 {
    match threshold {
        Some(t) if t != 0.0 && !t.is_nan() => t,
        _ => default_threshold,
    }
}

/// 按样本总数/批次总数,记录数兜底
fn total_or_record_count(total: Option<i64>, records: &[InspectionRecord]) -> i64 {
    total.unwrap_or(records.len() as i64)
}

// ==========================================
// QualityRateEngine - 合格率计算引擎
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityRateEngine {
    default_sampling_threshold: f64,
}

impl Default for QualityRateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityRateEngine {
    /// 创建引擎（默认阈值 0.95）
    pub fn new() -> Self {
        Self::with_default_threshold(DEFAULT_SAMPLING_THRESHOLD)
    }

    /// 创建引擎并注入默认阈值
    pub fn with_default_threshold(default_sampling_threshold: f64) -> Self {
        Self {
            default_sampling_threshold,
        }
    }

    /// 从配置读取默认阈值创建引擎
    pub fn from_config(reader: &dyn QualityConfigReader) -> Result<Self, ConfigError> {
        let threshold = reader.get_default_sampling_threshold()?;
        Ok(Self::with_default_threshold(threshold))
    }

    pub fn default_sampling_threshold(&self) -> f64 {
        self.default_sampling_threshold
    }

    /// 批次阈值判定（缺省阈值取引擎配置）
    pub fn judge_batch_by_threshold(
        &self,
        qualified_rate: f64,
        threshold: Option<f64>,
    ) -> JudgmentResult {
        judge_by_threshold_with_default(qualified_rate, threshold, self.default_sampling_threshold)
    }

    // ==========================================
    // 按质量方案分派
    // ==========================================

    /// 按质量方案计算（总量口径取首条记录）
    ///
    /// 首条记录的 sampleTotalQuantity / batchTotalQuantity 视为整批口径;
    /// 各记录口径不一致时记录告警,计算照常进行。
    #[instrument(skip(self, records, plan), fields(record_count = records.len()))]
    pub fn calculate_by_plan(
        &self,
        records: &[InspectionRecord],
        plan: &QualityPlanConfig,
    ) -> CalculationResult {
        let report = check_batch_consistency(records);
        if !report.is_consistent() {
            warn!(
                sample_totals = ?report.sample_totals,
                batch_totals = ?report.batch_totals,
                "批次记录总量口径不一致,按首条记录计算"
            );
        }

        let totals = BatchTotals::from_first_record(records);
        self.calculate_by_plan_with_totals(records, plan, &totals)
    }

    /// 按质量方案计算（显式传入总量口径）
    #[instrument(skip(self, records, plan, totals), fields(record_count = records.len()))]
    pub fn calculate_by_plan_with_totals(
        &self,
        records: &[InspectionRecord],
        plan: &QualityPlanConfig,
        totals: &BatchTotals,
    ) -> CalculationResult {
        let rule = match QualityRule::resolve(plan) {
            Some(rule) => rule,
            None => {
                warn!(?plan, "质量方案无适用计数规则,返回兜底结果");
                return CalculationResult::no_applicable_rule(records.len() as i64);
            }
        };
        debug!(%rule, "命中计数规则");

        // (分母, 合格数/合格率)
        let (total, rate) = match rule {
            QualityRule::SingleItem => {
                let total = records.len() as i64;
                let qualified = count_individual_qualified(records);
                (total, QualifiedRate {
                    qualified_quantity: qualified,
                    qualified_rate: compute_rate(qualified, total),
                })
            }
            QualityRule::BatchSampling => {
                let total = total_or_record_count(totals.sample_total(), records);
                (total, calculate_sample_qualified_rate(records, Some(total)))
            }
            QualityRule::BatchFullUnifiedRate => {
                let total = total_or_record_count(totals.batch_total(), records);
                (total, calculate_batch_qualified_rate(records, Some(total)))
            }
            QualityRule::BatchFullPerItemRecorded => {
                let total = total_or_record_count(totals.batch_total(), records);
                let qualified = count_individual_qualified(records);
                (total, QualifiedRate {
                    qualified_quantity: qualified,
                    qualified_rate: compute_rate(qualified, total),
                })
            }
        };

        let judgment_result = if rule.renders_judgment() {
            self.judge_batch_by_threshold(rate.qualified_rate, plan.sampling_threshold)
        } else {
            JudgmentResult::NotApplicable
        };

        CalculationResult {
            total_quantity: total,
            qualified_quantity: rate.qualified_quantity,
            qualified_rate: rate.qualified_rate,
            judgment_result,
        }
    }
}
