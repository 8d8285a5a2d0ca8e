// ==========================================
// 户型评分系统 - 造价估算引擎
// ==========================================
// 职责: 房间图 + 材料单价表 → 造价估算
// 公式: 墙长·水泥价·0.05 + 面积·瓷砖价·0.1 + 面积·木材价·0.05
// 红线: 缺失单价不报错，该项从求和中剔除
// ==========================================

use crate::domain::{CostTable, RoomGraph};
use serde::{Deserialize, Serialize};

pub const CEMENT: &str = "cement";
pub const TILE: &str = "tile";
pub const WOOD: &str = "wood";

const CEMENT_PER_WALL_M: f64 = 0.05;
const TILE_PER_FLOOR_M2: f64 = 0.1;
const WOOD_PER_FLOOR_M2: f64 = 0.05;

// ==========================================
// CostBreakdown - 分项造价
// ==========================================
// None 表示该材料缺少单价
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cement: Option<f64>,
    pub tile: Option<f64>,
    pub wood: Option<f64>,
    pub total: f64,
}

impl CostBreakdown {
    /// 缺少单价的材料
    pub fn missing_materials(&self) -> Vec<&'static str> {
        [(CEMENT, self.cement), (TILE, self.tile), (WOOD, self.wood)]
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

// ==========================================
// CostEstimator - 造价估算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct CostEstimator {
    table: CostTable,
}

impl CostEstimator {
    pub fn new(table: CostTable) -> Self {
        Self { table }
    }

    /// 分项估算
    pub fn breakdown(&self, graph: &RoomGraph) -> CostBreakdown {
        let wall_m = graph.total_wall_length();
        let floor_m2 = graph.total_footprint();

        let cement = self.table.price(CEMENT).map(|p| wall_m * p * CEMENT_PER_WALL_M);
        let tile = self.table.price(TILE).map(|p| floor_m2 * p * TILE_PER_FLOOR_M2);
        let wood = self.table.price(WOOD).map(|p| floor_m2 * p * WOOD_PER_FLOOR_M2);

        let total = [cement, tile, wood].into_iter().flatten().sum::<f64>();

        CostBreakdown {
            cement,
            tile,
            wood,
            total: round2(total),
        }
    }

    /// 总造价（保留两位小数）
    pub fn estimate(&self, graph: &RoomGraph) -> f64 {
        let breakdown = self.breakdown(graph);
        let missing = breakdown.missing_materials();
        if !missing.is_empty() {
            tracing::debug!("价格表缺少单价，已从造价中剔除: {:?}", missing);
        }
        breakdown.total
    }
}

/// 四舍五入到两位小数
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Room;

    fn square_room_graph() -> RoomGraph {
        let mut graph = RoomGraph::new();
        graph
            .add_room(Room::new("Hall", "living", 20.0).with_wall_length(18.0))
            .unwrap();
        graph
    }

    #[test]
    fn test_estimate_full_table() {
        let table = CostTable::new()
            .with_price(CEMENT, 100.0)
            .with_price(TILE, 10.0)
            .with_price(WOOD, 40.0);
        let estimator = CostEstimator::new(table);

        // 18*100*0.05 + 20*10*0.1 + 20*40*0.05 = 90 + 20 + 40
        assert_eq!(estimator.estimate(&square_room_graph()), 150.0);
    }

    #[test]
    fn test_missing_price_is_excluded() {
        let table = CostTable::new().with_price(CEMENT, 100.0);
        let estimator = CostEstimator::new(table);

        let breakdown = estimator.breakdown(&square_room_graph());
        assert_eq!(breakdown.cement, Some(90.0));
        assert_eq!(breakdown.tile, None);
        assert_eq!(breakdown.total, 90.0);
        assert_eq!(breakdown.missing_materials(), vec![TILE, WOOD]);
    }

    #[test]
    fn test_empty_graph_costs_nothing() {
        let estimator = CostEstimator::new(CostTable::new().with_price(TILE, 5.0));
        assert_eq!(estimator.estimate(&RoomGraph::new()), 0.0);
    }
}
