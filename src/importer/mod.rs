// ==========================================
// 户型评分系统 - 导入层
// ==========================================
// 职责: 外部户型记录与参考数据表 → 领域对象
// ==========================================

pub mod error;
pub mod plan_loader;
pub mod reference_loader;

pub use error::{ImportError, ImportResult};
pub use plan_loader::{list_plan_files, load_plan_file, EdgeRecord, PlanRecord};
pub use reference_loader::{load_cost_table, load_zone_rules, parse_cost_table_json};
