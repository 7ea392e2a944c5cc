// ==========================================
// 质量检验合格率引擎 - 质量方案配置
// ==========================================
// 职责: 描述一批记录应如何计数与判定
// 生命周期: 由调用方构造,引擎只读
// ==========================================

use crate::domain::types::{
    deserialize_lenient, FullInspectionStrategy, InspectionObjectType, InspectionType,
};
use serde::{Deserialize, Serialize};

// ==========================================
// QualityPlanConfig - 质量方案配置
// ==========================================
// 未识别的枚举值反序列化为 None,由引擎兜底分支处理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPlanConfig {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub inspection_object_type: Option<InspectionObjectType>, // 检验对象类型

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub inspection_type: Option<InspectionType>, // 检验方式（批次时有效）

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub full_inspection_strategy: Option<FullInspectionStrategy>, // 全检策略（批次全检时有效）

    #[serde(default)]
    pub sampling_threshold: Option<f64>, // 抽检合格阈值（0~1）
}

impl QualityPlanConfig {
    pub fn single_item() -> Self {
        Self {
            inspection_object_type: Some(InspectionObjectType::SingleItem),
            ..Default::default()
        }
    }

    pub fn batch_sampling(sampling_threshold: Option<f64>) -> Self {
        Self {
            inspection_object_type: Some(InspectionObjectType::Batch),
            inspection_type: Some(InspectionType::Sampling),
            sampling_threshold,
            ..Default::default()
        }
    }

    pub fn batch_full_inspection(strategy: FullInspectionStrategy) -> Self {
        Self {
            inspection_object_type: Some(InspectionObjectType::Batch),
            inspection_type: Some(InspectionType::FullInspection),
            full_inspection_strategy: Some(strategy),
            ..Default::default()
        }
    }
}
