// ==========================================
// 户型评分系统 - 评分向量与反馈记录
// ==========================================
// 红线: 反馈记录追加后不可修改
// 对齐: 反馈日志每行一条 {record_id, source, before, after, improvements, timestamp}
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ScoreVector - 评分向量
// ==========================================
// circulation / zoning / area_efficiency 约定在 [0,100]
// material_cost 为非负货币金额，无上限
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    pub circulation: f64,
    pub zoning: f64,
    pub area_efficiency: f64,
    pub material_cost: f64,
}

impl ScoreVector {
    /// 所有分量均为有限值
    pub fn is_finite(&self) -> bool {
        self.circulation.is_finite()
            && self.zoning.is_finite()
            && self.area_efficiency.is_finite()
            && self.material_cost.is_finite()
    }
}

// ==========================================
// MutationProposal - 单个房间的面积变更
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationProposal {
    pub room: String,
    pub old_area: f64,
    pub new_area: f64,
}

impl MutationProposal {
    /// 相对变化率 (new/old - 1)
    pub fn relative_change(&self) -> f64 {
        self.new_area / self.old_area - 1.0
    }
}

// ==========================================
// FeedbackRecord - 反馈记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub record_id: String,                    // 记录ID (UUID v4)
    pub source: String,                       // 来源户型标识（文件名等）
    pub before: ScoreVector,                  // 变异前评分
    pub after: ScoreVector,                   // 变异后评分（同一图实例）
    pub improvements: Vec<MutationProposal>,  // 变更列表（房间遍历顺序）
    pub timestamp: DateTime<Utc>,             // 生成时间 (UTC)
}

impl FeedbackRecord {
    pub fn new(
        source: impl Into<String>,
        before: ScoreVector,
        after: ScoreVector,
        improvements: Vec<MutationProposal>,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            source: source.into(),
            before,
            after,
            improvements,
            timestamp: Utc::now(),
        }
    }

    pub fn circulation_delta(&self) -> f64 {
        self.after.circulation - self.before.circulation
    }

    pub fn material_cost_delta(&self) -> f64 {
        self.after.material_cost - self.before.material_cost
    }
}
