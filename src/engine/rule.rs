// ==========================================
// 质量检验合格率引擎 - 计数规则选择
// ==========================================
// 职责: 根据质量方案配置选出适用的计数/判定规则
// 顺序: 单件 → 批次抽检 → 批次全检(统一合格率) → 批次全检(逐件录入),命中即返回
// ==========================================

use crate::domain::plan::QualityPlanConfig;
use crate::domain::types::{FullInspectionStrategy, InspectionObjectType, InspectionType};
use std::fmt;

/// 计数规则（决策树的一个分支）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityRule {
    /// 单件: 记录数为分母,逐件合格数为分子,不判定
    SingleItem,
    /// 批次抽检: 样本总数为分母,样本合格数为分子,按阈值判定
    BatchSampling,
    /// 批次全检 + 统一合格率: 批次总数为分母,个体合格数为分子,不判定
    BatchFullUnifiedRate,
    /// 批次全检 + 逐件录入: 批次总数为分母,逐件合格数为分子,不判定
    BatchFullPerItemRecorded,
}

impl QualityRule {
    /// 选择规则; None 表示无适用规则（走兜底分支）
    ///
    /// 调用方可在计算前用它诊断方案配置是否有效
    pub fn resolve(plan: &QualityPlanConfig) -> Option<Self> {
        match (
            plan.inspection_object_type,
            plan.inspection_type,
            plan.full_inspection_strategy,
        ) {
            (Some(InspectionObjectType::SingleItem), _, _) => Some(QualityRule::SingleItem),
            (Some(InspectionObjectType::Batch), Some(InspectionType::Sampling), _) => {
                Some(QualityRule::BatchSampling)
            }
            (
                Some(InspectionObjectType::Batch),
                Some(InspectionType::FullInspection),
                Some(FullInspectionStrategy::UnifiedRate),
            ) => Some(QualityRule::BatchFullUnifiedRate),
            (
                Some(InspectionObjectType::Batch),
                Some(InspectionType::FullInspection),
                Some(FullInspectionStrategy::PerItemRecorded),
            ) => Some(QualityRule::BatchFullPerItemRecorded),
            _ => None,
        }
    }

    /// 该规则是否给出批次判定
    pub fn renders_judgment(&self) -> bool {
        matches!(self, QualityRule::BatchSampling)
    }
}

impl fmt::Display for QualityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityRule::SingleItem => write!(f, "SINGLE_ITEM"),
            QualityRule::BatchSampling => write!(f, "BATCH_SAMPLING"),
            QualityRule::BatchFullUnifiedRate => write!(f, "BATCH_FULL_UNIFIED_RATE"),
            QualityRule::BatchFullPerItemRecorded => write!(f, "BATCH_FULL_PER_ITEM_RECORDED"),
        }
    }
}
