// ==========================================
// 质量检验合格率引擎 - 计算结果
// ==========================================

use crate::domain::types::JudgmentResult;
use serde::{Deserialize, Serialize};

/// 合格数量 + 合格率（基础计数函数的输出）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedRate {
    pub qualified_quantity: i64,
    pub qualified_rate: f64, // 百分比,保留 2 位小数
}

impl QualifiedRate {
    /// 分母无效时的"不可判定"状态
    pub fn undecidable() -> Self {
        Self::default()
    }
}

// ==========================================
// CalculationResult - 计算结果
// ==========================================
// 每次计算新建,无标识、无可变语义
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_quantity: i64,
    pub qualified_quantity: i64,
    pub qualified_rate: f64,
    pub judgment_result: JudgmentResult,
}

impl CalculationResult {
    /// 无适用规则（兜底）
    pub fn no_applicable_rule(total_quantity: i64) -> Self {
        Self {
            total_quantity,
            ..Default::default()
        }
    }
}
