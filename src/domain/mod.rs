// ==========================================
// 户型评分系统 - 领域层
// ==========================================
// 职责: 实体与值类型，不含评分规则
// ==========================================

pub mod error;
pub mod feedback;
pub mod reference;
pub mod room;
pub mod site;
pub mod types;

// 重导出核心实体
pub use error::{GraphError, GraphResult};
pub use feedback::{FeedbackRecord, MutationProposal, ScoreVector};
pub use reference::{CostTable, ZoneRule, ZoneRules};
pub use room::{Room, RoomGraph};
pub use site::{PlanSummary, SiteConstraints, ZoningRuleBook, ZoningRules};
pub use types::{SetbackEdge, Zone};
