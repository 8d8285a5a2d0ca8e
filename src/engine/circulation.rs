// ==========================================
// 户型评分系统 - 动线评估引擎
// ==========================================
// 职责: 基于房间图计算通行效率、识别尽端房间、生成建议
// 输入: 房间图（只读）
// 输出: 平均最短路径长度 / 尽端房间列表 / 建议文本
// ==========================================

use crate::domain::RoomGraph;
use pathfinding::prelude::dijkstra_all;
use tracing::instrument;

/// 无可达房间对时的哨兵值（表示"极差"）
pub const UNREACHABLE_EFFICIENCY: f64 = 999.0;

/// 默认开敞布局建议阈值
pub const DEFAULT_OPEN_PLAN_THRESHOLD: f64 = 2.5;

// ==========================================
// CirculationAgent - 动线评估引擎
// ==========================================
pub struct CirculationAgent<'a> {
    graph: &'a RoomGraph,
    open_plan_threshold: f64,
}

impl<'a> CirculationAgent<'a> {
    pub fn new(graph: &'a RoomGraph) -> Self {
        Self {
            graph,
            open_plan_threshold: DEFAULT_OPEN_PLAN_THRESHOLD,
        }
    }

    pub fn with_open_plan_threshold(mut self, threshold: f64) -> Self {
        self.open_plan_threshold = threshold;
        self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 通行效率 = 所有互相可达的有序房间对的平均最短路径长度（越小越好）
    ///
    /// - 自身对不计入
    /// - 不可达的房间对既不计入总和也不计入个数
    /// - 少于两个房间或没有任何可达对时返回 999.0
    #[instrument(skip(self), fields(rooms = self.graph.len()))]
    pub fn compute_flow_efficiency(&self) -> f64 {
        if self.graph.len() < 2 {
            return UNREACHABLE_EFFICIENCY;
        }

        let mut total: usize = 0;
        let mut pairs: usize = 0;
        for source in 0..self.graph.len() {
            // 无权图: 每条边代价为 1，结果不含起点自身
            let reached = dijkstra_all(&source, |&idx| {
                self.graph.neighbor_indices(idx).map(|n| (n, 1usize))
            });
            for (_, cost) in reached.values() {
                total += cost;
                pairs += 1;
            }
        }

        if pairs == 0 {
            return UNREACHABLE_EFFICIENCY;
        }
        total as f64 / pairs as f64
    }

    /// 尽端房间: 度数恰为 1 的房间（按房间顺序）
    pub fn detect_dead_ends(&self) -> Vec<String> {
        self.graph
            .rooms()
            .enumerate()
            .filter(|(idx, _)| self.graph.degree_at(*idx) == 1)
            .map(|(_, room)| room.name.clone())
            .collect()
    }

    /// 改进建议（顺序固定: 开敞布局 → 尽端房间）
    pub fn suggest_improvements(&self) -> Vec<String> {
        let mut suggestions = Vec::new();

        let efficiency = self.compute_flow_efficiency();
        if efficiency > self.open_plan_threshold {
            suggestions.push("建议采用开敞式布局以改善通行动线".to_string());
        }

        let dead_ends = self.detect_dead_ends();
        if !dead_ends.is_empty() {
            suggestions.push(format!("建议为以下房间增加第二出入口: {}", dead_ends.join(", ")));
        }

        suggestions
    }
}
