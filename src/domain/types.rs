// ==========================================
// 户型评分系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 功能分区 (Zone)
// ==========================================
// 序列化格式: lowercase (与规则表一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Private, // 私密区（卧室等）
    Public,  // 公共区（客厅、餐厅）
    Service, // 服务区（厨房、卫生间）
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Private => write!(f, "private"),
            Zone::Public => write!(f, "public"),
            Zone::Service => write!(f, "service"),
        }
    }
}

// ==========================================
// 退线边 (Setback Edge)
// ==========================================
// 排序即校验顺序: 前 → 后 → 左 → 右
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetbackEdge {
    Front,
    Rear,
    Left,
    Right,
}

impl fmt::Display for SetbackEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetbackEdge::Front => write!(f, "front"),
            SetbackEdge::Rear => write!(f, "rear"),
            SetbackEdge::Left => write!(f, "left"),
            SetbackEdge::Right => write!(f, "right"),
        }
    }
}
