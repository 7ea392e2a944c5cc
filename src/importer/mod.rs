// ==========================================
// 质量检验合格率引擎 - 导入层
// ==========================================
// 职责: 外部文件 → 检验记录 / 质量方案
// 支持: Excel, CSV, JSON
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, JsonParser, RawRow, UniversalFileParser};
pub use record_importer::{import_records, load_plan_config};
