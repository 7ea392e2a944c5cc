// ==========================================
// 质量检验合格率引擎 - 批次口径一致性检查
// ==========================================
// 约定: 同一批次各记录的 sampleTotalQuantity / batchTotalQuantity 相同,
//       计算时以首条记录为准。此处只检查,不阻断计算。
// ==========================================

use crate::domain::record::InspectionRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// 一致性检查报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConsistencyReport {
    /// 记录中出现过的样本总数取值（去重、升序）
    pub sample_totals: Vec<i64>,
    /// 记录中出现过的批次总数取值（去重、升序）
    pub batch_totals: Vec<i64>,
}

impl BatchConsistencyReport {
    pub fn is_sample_total_consistent(&self) -> bool {
        self.sample_totals.len() <= 1
    }

    pub fn is_batch_total_consistent(&self) -> bool {
        self.batch_totals.len() <= 1
    }

    pub fn is_consistent(&self) -> bool {
        self.is_sample_total_consistent() && self.is_batch_total_consistent()
    }
}

/// 检查同批次记录的总量字段是否一致（缺失值不参与比较）
pub fn check_batch_consistency(records: &[InspectionRecord]) -> BatchConsistencyReport {
    let sample_totals: BTreeSet<i64> = records
        .iter()
        .filter_map(|r| r.sample_total_quantity)
        .collect();
    let batch_totals: BTreeSet<i64> = records
        .iter()
        .filter_map(|r| r.batch_total_quantity)
        .collect();

    BatchConsistencyReport {
        sample_totals: sample_totals.into_iter().collect(),
        batch_totals: batch_totals.into_iter().collect(),
    }
}
