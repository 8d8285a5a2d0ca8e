// ==========================================
// 户型评分系统 - 方案评分引擎
// ==========================================
// 职责: 房间图 → 评分向量（动线 / 分区 / 面积效率 / 造价）
// 输入: 房间图、分区规则表、造价估算引擎（构造时注入）
// 说明: 此处的 circulation 是按孤立房间计数的粗指标，
//       与 CirculationAgent 的路径指标相互独立
// ==========================================

use crate::domain::{RoomGraph, ScoreVector, Zone, ZoneRules};
use crate::engine::cost_estimator::{round2, CostEstimator};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

const MAX_SCORE: f64 = 100.0;
const ISOLATED_ROOM_PENALTY: f64 = 10.0;

// ==========================================
// DesignScorer - 方案评分引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct DesignScorer {
    zone_rules: ZoneRules,
    cost_estimator: CostEstimator,
}

impl DesignScorer {
    pub fn new(zone_rules: ZoneRules, cost_estimator: CostEstimator) -> Self {
        Self {
            zone_rules,
            cost_estimator,
        }
    }

    pub fn cost_estimator(&self) -> &CostEstimator {
        &self.cost_estimator
    }

    /// 计算评分向量
    #[instrument(skip(self, graph), fields(rooms = graph.len()))]
    pub fn score(&self, graph: &RoomGraph) -> ScoreVector {
        let zones = self.zone_buckets(graph);

        let score = ScoreVector {
            circulation: self.evaluate_circulation(graph),
            zoning: self.evaluate_zoning(&zones),
            area_efficiency: self.evaluate_area_efficiency(graph),
            material_cost: self.cost_estimator.estimate(graph),
        };

        debug!(?score, "评分完成");
        score
    }

    // ==========================================
    // 分项评分
    // ==========================================

    /// 面积效率 = min(100, round(总面积 / 总面积 × 100, 2))
    ///
    /// 分子分母同为房间面积之和，非空户型恒为 100。
    /// 这是沿用的已知缺陷（本意可能是 使用面积/占地面积），保留原行为不做猜测。
    /// 空户型（总面积为 0）记 0 分。
    pub fn evaluate_area_efficiency(&self, graph: &RoomGraph) -> f64 {
        let total_area: f64 = graph.rooms().map(|r| r.area).sum();
        let footprint = graph.total_footprint();
        if footprint <= 0.0 {
            return 0.0;
        }
        MAX_SCORE.min(round2(total_area / footprint * 100.0))
    }

    /// 动线 = max(0, 100 - 10 × 孤立房间数)，孤立房间即度数为 0
    pub fn evaluate_circulation(&self, graph: &RoomGraph) -> f64 {
        let isolated = (0..graph.len()).filter(|&idx| graph.degree_at(idx) == 0).count();
        (MAX_SCORE - ISOLATED_ROOM_PENALTY * isolated as f64).max(0.0)
    }

    /// 分区: 私密区或服务区为空记 0，否则 100（公共区不参与）
    pub fn evaluate_zoning(&self, zones: &BTreeMap<Zone, Vec<String>>) -> f64 {
        let has = |zone: Zone| zones.get(&zone).map_or(false, |rooms| !rooms.is_empty());
        if has(Zone::Private) && has(Zone::Service) {
            MAX_SCORE
        } else {
            0.0
        }
    }

    /// 按分区规则表将房间分组；规则表未登记的房间类型直接跳过
    pub fn zone_buckets(&self, graph: &RoomGraph) -> BTreeMap<Zone, Vec<String>> {
        let mut buckets: BTreeMap<Zone, Vec<String>> = BTreeMap::new();
        for room in graph.rooms() {
            if let Some(zone) = self.zone_rules.zone_of(&room.room_type) {
                buckets.entry(zone).or_default().push(room.name.clone());
            }
        }
        buckets
    }
}
