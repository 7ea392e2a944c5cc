// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use inspection_quality_rate::domain::{InspectionRecord, QualifiedStatus};

// ==========================================
// InspectionRecord 构建器
// ==========================================

pub struct RecordBuilder {
    sample_qualified_status: Option<QualifiedStatus>,
    individual_qualified_status: Option<QualifiedStatus>,
    sample_total_quantity: Option<i64>,
    batch_total_quantity: Option<i64>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            sample_qualified_status: None,
            individual_qualified_status: None,
            sample_total_quantity: None,
            batch_total_quantity: None,
        }
    }

    pub fn sample_status(mut self, qualified: bool) -> Self {
        self.sample_qualified_status = Some(status(qualified));
        self
    }

    pub fn individual_status(mut self, qualified: bool) -> Self {
        self.individual_qualified_status = Some(status(qualified));
        self
    }

    pub fn sample_total(mut self, total: i64) -> Self {
        self.sample_total_quantity = Some(total);
        self
    }

    pub fn batch_total(mut self, total: i64) -> Self {
        self.batch_total_quantity = Some(total);
        self
    }

    pub fn build(self) -> InspectionRecord {
        InspectionRecord {
            sample_qualified_status: self.sample_qualified_status,
            individual_qualified_status: self.individual_qualified_status,
            sample_total_quantity: self.sample_total_quantity,
            batch_total_quantity: self.batch_total_quantity,
        }
    }
}

fn status(qualified: bool) -> QualifiedStatus {
    if qualified {
        QualifiedStatus::Qualified
    } else {
        QualifiedStatus::Unqualified
    }
}

// ==========================================
// 批量构建
// ==========================================

/// 抽检样本记录: 前 qualified 条合格,其余不合格; 每条都带样本总数
pub fn sample_records(qualified: usize, unqualified: usize, sample_total: i64) -> Vec<InspectionRecord> {
    (0..qualified + unqualified)
        .map(|i| {
            RecordBuilder::new()
                .sample_status(i < qualified)
                .sample_total(sample_total)
                .build()
        })
        .collect()
}

/// 全检/单件记录: 前 qualified 条合格,其余不合格; batch_total 为 Some 时每条都带批次总数
pub fn individual_records(
    qualified: usize,
    unqualified: usize,
    batch_total: Option<i64>,
) -> Vec<InspectionRecord> {
    (0..qualified + unqualified)
        .map(|i| {
            let builder = RecordBuilder::new().individual_status(i < qualified);
            match batch_total {
                Some(total) => builder.batch_total(total).build(),
                None => builder.build(),
            }
        })
        .collect()
}
