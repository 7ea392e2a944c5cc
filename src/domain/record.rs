// ==========================================
// 质量检验合格率引擎 - 检验记录
// ==========================================
// 职责: 单件/样本检验记录 + 批次总量口径
// 红线: 引擎只读记录,不修改
// ==========================================

use crate::domain::types::{deserialize_lenient, QualifiedStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// InspectionRecord - 检验记录
// ==========================================
// 抽检口径只读 sample_qualified_status,全检口径只读 individual_qualified_status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub sample_qualified_status: Option<QualifiedStatus>, // 样本合格状态

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub individual_qualified_status: Option<QualifiedStatus>, // 个体合格状态

    #[serde(default)]
    pub sample_total_quantity: Option<i64>, // 样本总数（同批次各记录一致）

    #[serde(default)]
    pub batch_total_quantity: Option<i64>, // 批次总数（同批次各记录一致）
}

impl InspectionRecord {
    pub fn is_sample_qualified(&self) -> bool {
        self.sample_qualified_status
            .map(|s| s.is_qualified())
            .unwrap_or(false)
    }

    pub fn is_individual_qualified(&self) -> bool {
        self.individual_qualified_status
            .map(|s| s.is_qualified())
            .unwrap_or(false)
    }
}

// ==========================================
// BatchTotals - 批次总量
// ==========================================
// 显式传入的分母来源; 也可按惯例从首条记录读取
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTotals {
    #[serde(default)]
    pub sample_total_quantity: Option<i64>,

    #[serde(default)]
    pub batch_total_quantity: Option<i64>,
}

impl BatchTotals {
    pub fn new(sample_total_quantity: Option<i64>, batch_total_quantity: Option<i64>) -> Self {
        Self {
            sample_total_quantity,
            batch_total_quantity,
        }
    }

    /// 首条记录即批次口径（空集合 → 全部缺失）
    pub fn from_first_record(records: &[InspectionRecord]) -> Self {
        match records.first() {
            Some(first) => Self::new(first.sample_total_quantity, first.batch_total_quantity),
            None => Self::default(),
        }
    }

    /// 有效样本总数（缺失或为 0 → None）
    pub fn sample_total(&self) -> Option<i64> {
        self.sample_total_quantity.filter(|&n| n != 0)
    }

    /// 有效批次总数（缺失或为 0 → None）
    pub fn batch_total(&self) -> Option<i64> {
        self.batch_total_quantity.filter(|&n| n != 0)
    }
}
