// ==========================================
// 户型评分系统 - 核心库
// ==========================================
// 范围: 房间图评分与启发式改进闭环
// 系统定位: 评分/校验辅助（"改进"为可替换的占位策略）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分与校验规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 数据仓储层 - 反馈日志
pub mod repository;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CostTable, FeedbackRecord, GraphError, MutationProposal, PlanSummary, Room, RoomGraph,
    ScoreVector, SetbackEdge, SiteConstraints, Zone, ZoneRules, ZoningRuleBook, ZoningRules,
};

// 引擎
pub use engine::{
    BatchReport, CirculationAgent, CostEstimator, DesignImprover, DesignScorer, FeedbackLoop,
    MutationStrategy, RandomAreaPerturbation, RegionalNormalizer, ValidationError, ZoningAgent,
    ZoningViolation,
};

// 导入与仓储
pub use importer::{ImportError, PlanRecord};
pub use repository::{FeedbackLogRepository, RepositoryError};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "户型评分与反馈闭环";
