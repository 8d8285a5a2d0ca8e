// ==========================================
// 户型评分系统 - 引擎层
// ==========================================
// 职责: 评分、校验、改进与批量闭环的业务规则
// 红线: 引擎不直接读固定路径，参考数据一律由构造函数注入
// ==========================================

pub mod circulation;
pub mod cost_estimator;
pub mod error;
pub mod feedback_loop;
pub mod improver;
pub mod regional;
pub mod scorer;
pub mod zoning;

// 重导出核心引擎
pub use circulation::{CirculationAgent, DEFAULT_OPEN_PLAN_THRESHOLD, UNREACHABLE_EFFICIENCY};
pub use cost_estimator::{CostBreakdown, CostEstimator};
pub use error::{ValidationError, ValidationResult};
pub use feedback_loop::{BatchReport, FeedbackLoop, PlanFailure};
pub use improver::{
    DesignImprover, MutationStrategy, RandomAreaPerturbation, DEFAULT_MUTATION_PROBABILITY,
    DEFAULT_MUTATION_SPREAD,
};
pub use regional::{NormalizedCostTable, RegionProfile, RegionalNormalizer};
pub use scorer::DesignScorer;
pub use zoning::{ZoningAgent, ZoningViolation};
