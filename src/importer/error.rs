// ==========================================
// 户型评分系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::GraphError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .json/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("JSON 解析失败 ({path}): {message}")]
    JsonParseError { path: String, message: String },

    #[error("CSV 解析失败 (行 {row}): {message}")]
    CsvParseError { row: usize, message: String },

    // ===== 数据质量错误 =====
    #[error("单价非法 (material={material}): {value}")]
    InvalidPrice { material: String, value: f64 },

    #[error("户型结构错误: {0}")]
    Graph(#[from] GraphError),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
