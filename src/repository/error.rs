// ==========================================
// 户型评分系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("日志文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("记录序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("日志写锁获取失败: {0}")]
    LockError(String),

    #[error("日志记录损坏 (行 {line}): {message}")]
    CorruptRecord { line: usize, message: String },
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
