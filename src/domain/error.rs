// ==========================================
// 户型评分系统 - 领域层错误类型
// ==========================================
// 职责: 房间图结构性错误（构造期即失败，不静默忽略）
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 房间图结构错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("房间重复: {0}")]
    DuplicateRoom(String),

    #[error("房间不存在: {0}")]
    UnknownRoom(String),

    #[error("非法连接: {a} - {b}（不允许自环）")]
    InvalidEdge { a: String, b: String },

    #[error("非法数值 (room={room}, field={field}): {value}")]
    InvalidArea {
        room: String,
        field: &'static str,
        value: f64,
    },
}

/// Result 类型别名
pub type GraphResult<T> = Result<T, GraphError>;
