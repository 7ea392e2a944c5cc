// ==========================================
// 质量检验合格率引擎 - 字段映射器
// ==========================================
// 职责: 源列名 → InspectionRecord 字段映射 + 类型转换
// 列名: 中文表头与 camelCase 字段名均可
// ==========================================

use crate::domain::record::InspectionRecord;
use crate::domain::types::QualifiedStatus;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;

// 标准字段
pub const FIELD_SAMPLE_QUALIFIED_STATUS: &str = "样本合格状态";
pub const FIELD_INDIVIDUAL_QUALIFIED_STATUS: &str = "个体合格状态";
pub const FIELD_SAMPLE_TOTAL_QUANTITY: &str = "样本总数";
pub const FIELD_BATCH_TOTAL_QUANTITY: &str = "批次总数";

pub struct FieldMapper;

impl FieldMapper {
    /// 将原始行记录映射为 InspectionRecord
    ///
    /// - 合格状态: 未识别的标签视为缺失
    /// - 总数: 非整数 → TypeConversionError
    pub fn map_to_record(&self, row: &RawRow, row_number: usize) -> ImportResult<InspectionRecord> {
        Ok(InspectionRecord {
            sample_qualified_status: self.parse_status(row, FIELD_SAMPLE_QUALIFIED_STATUS),
            individual_qualified_status: self.parse_status(row, FIELD_INDIVIDUAL_QUALIFIED_STATUS),
            sample_total_quantity: self.parse_i64(row, FIELD_SAMPLE_TOTAL_QUANTITY, row_number)?,
            batch_total_quantity: self.parse_i64(row, FIELD_BATCH_TOTAL_QUANTITY, row_number)?,
        })
    }

    /// 提取字符串字段,支持多个可能的列名（别名）
    fn get_string<'a>(&self, row: &'a RawRow, key: &str) -> Option<&'a str> {
        let aliases: &[&str] = match key {
            FIELD_SAMPLE_QUALIFIED_STATUS => &["样本合格状态", "sampleQualifiedStatus"],
            FIELD_INDIVIDUAL_QUALIFIED_STATUS => &["个体合格状态", "individualQualifiedStatus"],
            FIELD_SAMPLE_TOTAL_QUANTITY => &["样本总数", "样本数量", "sampleTotalQuantity"],
            FIELD_BATCH_TOTAL_QUANTITY => &["批次总数", "批次数量", "batchTotalQuantity"],
            _ => &[],
        };

        aliases
            .iter()
            .chain(std::iter::once(&key))
            .filter_map(|alias| row.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    fn parse_status(&self, row: &RawRow, key: &str) -> Option<QualifiedStatus> {
        let value = self.get_string(row, key)?;
        match value.parse::<QualifiedStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::debug!(field = key, error = %e, "合格状态未识别,按缺失处理");
                None
            }
        }
    }

    /// 解析整数（Excel 数值单元格可能带 ".0"）
    fn parse_i64(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<Option<i64>> {
        let value = match self.get_string(row, key) {
            None => return Ok(None),
            Some(v) => v,
        };

        if let Ok(n) = value.parse::<i64>() {
            return Ok(Some(n));
        }

        match value.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i64)),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            }),
        }
    }
}
