// ==========================================
// 户型评分系统 - 引擎层校验错误
// ==========================================
// 职责: 引用未知键 / 非法数值的输入，仅使当次调用失败
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("不支持的地区: {0}")]
    UnsupportedRegion(String),

    #[error("未知管辖区: {0}")]
    UnknownJurisdiction(String),

    #[error("场地面积必须为正数: {0}")]
    InvalidSiteArea(f64),

    #[error("非法数值 (field={field}): {value}")]
    InvalidValue { field: String, value: f64 },
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;
