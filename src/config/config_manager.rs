// ==========================================
// 户型评分系统 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写、合法性校验
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::{
    DEFAULT_MUTATION_PROBABILITY, DEFAULT_MUTATION_SPREAD, DEFAULT_OPEN_PLAN_THRESHOLD,
};

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub plans_dir: PathBuf,          // 户型 JSON 目录
    pub log_path: PathBuf,           // 反馈日志 (JSON Lines)
    pub cost_table_path: PathBuf,    // 价格表 (.json / .csv)
    pub zone_rules_path: PathBuf,    // 分区规则表 (.json)
    pub region: Option<String>,      // 设置时按地区归一化价格表
    pub seed: Option<u64>,           // 设置时变异结果可复现
    pub mutation_probability: f64,
    pub mutation_spread: f64,
    pub open_plan_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plans_dir: PathBuf::from("data/floorplans"),
            log_path: default_log_path(),
            cost_table_path: PathBuf::from("knowledge/cost_table.json"),
            zone_rules_path: PathBuf::from("knowledge/room_rules.json"),
            region: None,
            seed: None,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            mutation_spread: DEFAULT_MUTATION_SPREAD,
            open_plan_threshold: DEFAULT_OPEN_PLAN_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径；None 或文件不存在时使用默认值
    ///
    /// 随后应用环境变量覆写并校验。
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(p)?,
            Some(p) => {
                tracing::warn!("配置文件不存在，使用默认配置: {}", p.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取（缺失字段取默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })
    }

    /// 应用覆写
    ///
    /// # 参数
    /// - lookup: 键 → 值（生产环境为环境变量，测试中可注入）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get(config_keys::PLANS_DIR) {
            self.plans_dir = PathBuf::from(v);
        }
        if let Some(v) = get(config_keys::LOG_PATH) {
            self.log_path = PathBuf::from(v);
        }
        if let Some(v) = get(config_keys::REGION) {
            self.region = Some(v);
        }
        if let Some(v) = get(config_keys::SEED) {
            let seed = v.parse::<u64>().map_err(|e| ConfigError::ValueError {
                key: config_keys::SEED.to_string(),
                value: v.clone(),
                message: e.to_string(),
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// 合法性校验
    pub fn validate(&self) -> ConfigResult<()> {
        let value_error = |key: &str, value: f64, message: &str| ConfigError::ValueError {
            key: key.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        };

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(value_error(
                "mutation_probability",
                self.mutation_probability,
                "必须在 [0, 1] 范围内",
            ));
        }
        if !(0.0..1.0).contains(&self.mutation_spread) {
            return Err(value_error(
                "mutation_spread",
                self.mutation_spread,
                "必须在 [0, 1) 范围内",
            ));
        }
        if !(self.open_plan_threshold.is_finite() && self.open_plan_threshold >= 0.0) {
            return Err(value_error(
                "open_plan_threshold",
                self.open_plan_threshold,
                "必须为非负数",
            ));
        }
        Ok(())
    }

    /// 配置快照（JSON），随批处理结果一同记录
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// 默认反馈日志路径
///
/// 优先使用用户数据目录，取不到时回退到 ./logs/。
pub fn default_log_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("floorplan-feedback").join("feedback_log.jsonl"),
        None => PathBuf::from("logs").join("feedback_log.jsonl"),
    }
}

// ==========================================
// 环境变量键
// ==========================================
pub mod config_keys {
    pub const PLANS_DIR: &str = "FLOORPLAN_FEEDBACK_PLANS_DIR";
    pub const LOG_PATH: &str = "FLOORPLAN_FEEDBACK_LOG_PATH";
    pub const REGION: &str = "FLOORPLAN_FEEDBACK_REGION";
    pub const SEED: &str = "FLOORPLAN_FEEDBACK_SEED";
}
