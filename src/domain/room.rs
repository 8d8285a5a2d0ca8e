// ==========================================
// 户型评分系统 - 房间与房间图
// ==========================================
// 职责: 房间实体、无向邻接图、派生汇总指标
// 红线: 连接两端必须是已存在的不同房间；不允许重复边
// 说明: 汇总指标每次按需重算，不做缓存（变异后不会过期）
// ==========================================

use crate::domain::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ==========================================
// Room - 房间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,              // 房间名（同一户型内唯一）
    #[serde(rename = "type")]
    pub room_type: String,         // 房间类型（开放枚举，按规则表解析）
    pub area: f64,                 // 面积 (m²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_length: Option<f64>,  // 墙长贡献 (m)，缺省时按正方形周长估算
}

impl Room {
    pub fn new(name: impl Into<String>, room_type: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            room_type: room_type.into(),
            area,
            wall_length: None,
        }
    }

    pub fn with_wall_length(mut self, wall_length: f64) -> Self {
        self.wall_length = Some(wall_length);
        self
    }

    /// 墙长贡献
    ///
    /// 显式给出时直接使用；否则按同面积正方形的周长 4·√area 估算，
    /// 使墙长随面积变异而变化。
    pub fn effective_wall_length(&self) -> f64 {
        self.wall_length
            .unwrap_or_else(|| 4.0 * self.area.max(0.0).sqrt())
    }

    fn validate(&self) -> GraphResult<()> {
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(GraphError::InvalidArea {
                room: self.name.clone(),
                field: "area",
                value: self.area,
            });
        }
        if let Some(wall) = self.wall_length {
            if !(wall.is_finite() && wall >= 0.0) {
                return Err(GraphError::InvalidArea {
                    room: self.name.clone(),
                    field: "wall_length",
                    value: wall,
                });
            }
        }
        Ok(())
    }
}

// ==========================================
// RoomGraph - 房间邻接图
// ==========================================
// 房间按插入顺序保存，所有遍历都遵循该顺序
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // 构造
    // ==========================================

    /// 添加房间
    ///
    /// # 错误
    /// - `DuplicateRoom`: 同名房间已存在
    /// - `InvalidArea`: 面积非正或墙长为负
    pub fn add_room(&mut self, room: Room) -> GraphResult<()> {
        if self.contains_room(&room.name) {
            return Err(GraphError::DuplicateRoom(room.name));
        }
        room.validate()?;

        self.index.insert(room.name.clone(), self.rooms.len());
        self.rooms.push(room);
        self.adjacency.push(BTreeSet::new());
        Ok(())
    }

    /// 添加无向连接（幂等）
    ///
    /// # 返回
    /// - `Ok(true)`: 新增了连接
    /// - `Ok(false)`: 连接已存在，图未变化
    pub fn add_edge(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        if ia == ib {
            return Err(GraphError::InvalidEdge {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let inserted = self.adjacency[ia].insert(ib);
        self.adjacency[ib].insert(ia);
        Ok(inserted)
    }

    /// 修改房间面积，返回原面积
    pub fn set_area(&mut self, name: &str, area: f64) -> GraphResult<f64> {
        let idx = self.position(name)?;
        if !(area.is_finite() && area > 0.0) {
            return Err(GraphError::InvalidArea {
                room: name.to_string(),
                field: "area",
                value: area,
            });
        }
        let old = self.rooms[idx].area;
        self.rooms[idx].area = area;
        Ok(old)
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains_room(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&idx| &self.rooms[idx])
    }

    /// 按插入顺序遍历房间
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn room_names(&self) -> Vec<String> {
        self.rooms.iter().map(|r| r.name.clone()).collect()
    }

    /// 房间度数（孤立房间为 0）
    pub fn degree(&self, name: &str) -> GraphResult<usize> {
        let idx = self.position(name)?;
        Ok(self.adjacency[idx].len())
    }

    /// 相邻房间（按插入顺序）
    pub fn neighbors(&self, name: &str) -> GraphResult<Vec<&str>> {
        let idx = self.position(name)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&n| self.rooms[n].name.as_str())
            .collect())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// 所有连接，每条边只出现一次（按插入顺序，小下标在前）
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, set)| {
                set.iter()
                    .filter(move |&&j| j > i)
                    .map(move |&j| (i, j))
            })
            .map(|(i, j)| (self.rooms[i].name.as_str(), self.rooms[j].name.as_str()))
            .collect()
    }

    // ==========================================
    // 派生指标
    // ==========================================

    /// 总面积 = 所有房间面积之和
    pub fn total_footprint(&self) -> f64 {
        self.rooms.iter().map(|r| r.area).sum()
    }

    /// 总墙长 = 所有房间墙长贡献之和
    pub fn total_wall_length(&self) -> f64 {
        self.rooms.iter().map(Room::effective_wall_length).sum()
    }

    // ==========================================
    // 内部方法
    // ==========================================

    pub(crate) fn neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[idx].iter().copied()
    }

    pub(crate) fn degree_at(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }

    fn position(&self, name: &str) -> GraphResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownRoom(name.to_string()))
    }
}
