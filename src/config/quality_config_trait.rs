// ==========================================
// 质量检验合格率引擎 - 配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;

// ==========================================
// QualityConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON 文件 + 环境变量）
pub trait QualityConfigReader: Send + Sync {
    /// 获取抽检合格阈值默认值（质量方案未配置阈值时使用）
    ///
    /// # 返回
    /// - f64: 阈值小数,取值 (0, 1]
    ///
    /// # 默认值
    /// - 0.95
    fn get_default_sampling_threshold(&self) -> ConfigResult<f64>;
}
