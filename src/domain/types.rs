// ==========================================
// 质量检验合格率引擎 - 领域类型定义
// ==========================================
// 职责: 合格状态、检验对象类型、检验方式、全检策略、判定结果
// 红线: 状态值使用枚举,不使用自由字符串
// ==========================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 枚举值解析失败（未识别的标签）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "未识别的标签: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

/// 标签归一化: 去空白、转小写、去掉分隔符
///
/// "SINGLE_ITEM" / "single-item" / "singleItem" 均归一为 "singleitem"
fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

// ==========================================
// 合格状态 (Qualified Status)
// ==========================================
// 序列化格式: 源系统标签 "合格" / "不合格"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifiedStatus {
    Qualified,   // 合格
    Unqualified, // 不合格
}

impl QualifiedStatus {
    /// 源系统合格标签
    pub const QUALIFIED_TAG: &'static str = "合格";
    /// 源系统不合格标签
    pub const UNQUALIFIED_TAG: &'static str = "不合格";

    pub fn as_tag(&self) -> &'static str {
        match self {
            QualifiedStatus::Qualified => Self::QUALIFIED_TAG,
            QualifiedStatus::Unqualified => Self::UNQUALIFIED_TAG,
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, QualifiedStatus::Qualified)
    }
}

impl fmt::Display for QualifiedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for QualifiedStatus {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            Self::QUALIFIED_TAG => return Ok(QualifiedStatus::Qualified),
            Self::UNQUALIFIED_TAG => return Ok(QualifiedStatus::Unqualified),
            _ => {}
        }
        match normalize_tag(trimmed).as_str() {
            "qualified" => Ok(QualifiedStatus::Qualified),
            "unqualified" => Ok(QualifiedStatus::Unqualified),
            _ => Err(UnknownTag(trimmed.to_string())),
        }
    }
}

impl Serialize for QualifiedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for QualifiedStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// 检验对象类型 (Inspection Object Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionObjectType {
    SingleItem, // 单件
    Batch,      // 批量
}

impl fmt::Display for InspectionObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionObjectType::SingleItem => write!(f, "SINGLE_ITEM"),
            InspectionObjectType::Batch => write!(f, "BATCH"),
        }
    }
}

impl FromStr for InspectionObjectType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "单件" => return Ok(InspectionObjectType::SingleItem),
            "批量" | "批次" => return Ok(InspectionObjectType::Batch),
            _ => {}
        }
        match normalize_tag(s).as_str() {
            "singleitem" | "single" => Ok(InspectionObjectType::SingleItem),
            "batch" => Ok(InspectionObjectType::Batch),
            _ => Err(UnknownTag(s.trim().to_string())),
        }
    }
}

// ==========================================
// 检验方式 (Inspection Type)
// ==========================================
// 仅在检验对象为批次时有意义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionType {
    Sampling,       // 抽检
    FullInspection, // 全检
}

impl fmt::Display for InspectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionType::Sampling => write!(f, "SAMPLING"),
            InspectionType::FullInspection => write!(f, "FULL_INSPECTION"),
        }
    }
}

impl FromStr for InspectionType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "抽检" => return Ok(InspectionType::Sampling),
            "全检" => return Ok(InspectionType::FullInspection),
            _ => {}
        }
        match normalize_tag(s).as_str() {
            "sampling" | "sample" => Ok(InspectionType::Sampling),
            "fullinspection" | "full" => Ok(InspectionType::FullInspection),
            _ => Err(UnknownTag(s.trim().to_string())),
        }
    }
}

// ==========================================
// 全检策略 (Full Inspection Strategy)
// ==========================================
// 仅在批次全检时有意义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FullInspectionStrategy {
    UnifiedRate,     // 统一计算合格率
    PerItemRecorded, // 单件分别记录结果
}

impl fmt::Display for FullInspectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullInspectionStrategy::UnifiedRate => write!(f, "UNIFIED_RATE"),
            FullInspectionStrategy::PerItemRecorded => write!(f, "PER_ITEM_RECORDED"),
        }
    }
}

impl FromStr for FullInspectionStrategy {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "统一计算合格率" | "统一合格率" => return Ok(FullInspectionStrategy::UnifiedRate),
            "单件分别记录结果" | "逐件录入" => {
                return Ok(FullInspectionStrategy::PerItemRecorded)
            }
            _ => {}
        }
        match normalize_tag(s).as_str() {
            "unifiedrate" | "unified" => Ok(FullInspectionStrategy::UnifiedRate),
            "peritemrecorded" | "peritem" => Ok(FullInspectionStrategy::PerItemRecorded),
            _ => Err(UnknownTag(s.trim().to_string())),
        }
    }
}

// ==========================================
// 判定结果 (Judgment Result)
// ==========================================
// 序列化格式: 与合格状态同一套标签 "合格" / "不合格", ""（不适用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JudgmentResult {
    Qualified,
    Unqualified,
    #[default]
    NotApplicable,
}

impl JudgmentResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgmentResult::Qualified => QualifiedStatus::QUALIFIED_TAG,
            JudgmentResult::Unqualified => QualifiedStatus::UNQUALIFIED_TAG,
            JudgmentResult::NotApplicable => "",
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, JudgmentResult::NotApplicable)
    }
}

impl fmt::Display for JudgmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JudgmentResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JudgmentResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(JudgmentResult::NotApplicable);
        }
        // 同时接受 "合格"/"不合格" 与 "qualified"/"unqualified"
        match raw.parse::<QualifiedStatus>().map_err(serde::de::Error::custom)? {
            QualifiedStatus::Qualified => Ok(JudgmentResult::Qualified),
            QualifiedStatus::Unqualified => Ok(JudgmentResult::Unqualified),
        }
    }
}

// ==========================================
// 宽松反序列化
// ==========================================
// 记录/方案字段中未识别的标签视为缺失,交给引擎兜底分支处理

/// 反序列化 Option<T>: null、缺失、空串、未识别标签 → None
pub(crate) fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
