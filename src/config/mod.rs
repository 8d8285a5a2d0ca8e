// ==========================================
// 户型评分系统 - 配置层
// ==========================================
// 职责: 系统配置管理，支持文件 + 环境变量覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;

// 重导出核心配置
pub use config_manager::{
    config_keys, default_log_path, AppConfig, ConfigError, ConfigResult,
};
