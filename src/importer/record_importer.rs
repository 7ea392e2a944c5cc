// ==========================================
// 质量检验合格率引擎 - 记录/方案导入
// ==========================================
// 流程: 文件解析 → 字段映射 → InspectionRecord 列表
// ==========================================

use crate::domain::plan::QualityPlanConfig;
use crate::domain::record::InspectionRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

/// 从文件导入检验记录（保持文件行顺序）
///
/// 行号从 1 开始计（不含表头）,用于错误定位
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn import_records<P: AsRef<Path>>(path: P) -> ImportResult<Vec<InspectionRecord>> {
    let rows = UniversalFileParser.parse(path.as_ref())?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| FieldMapper.map_to_record(row, idx + 1))
        .collect::<ImportResult<Vec<_>>>()?;

    info!(count = records.len(), "检验记录导入完成");
    Ok(records)
}

/// 从 JSON 文件加载质量方案配置
pub fn load_plan_config<P: AsRef<Path>>(path: P) -> ImportResult<QualityPlanConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let plan = serde_json::from_reader(BufReader::new(file))?;
    Ok(plan)
}
