// ==========================================
// 户型评分系统 - 数据仓储层
// ==========================================
// 职责: 反馈记录的持久化（追加式 JSON Lines 日志）
// ==========================================

pub mod error;
pub mod feedback_log_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use feedback_log_repo::FeedbackLogRepository;
