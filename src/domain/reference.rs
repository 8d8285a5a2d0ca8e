// ==========================================
// 户型评分系统 - 参考数据（价格表 / 分区规则表）
// ==========================================
// 说明: 进程内加载一次，所有消费者只读
// ==========================================

use crate::domain::types::Zone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// CostTable - 材料单价表
// ==========================================
// 材料名 → 单价（非负）；缺失条目视为"无数据"，而非错误
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTable {
    prices: BTreeMap<String, f64>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, material: impl Into<String>, unit_price: f64) {
        self.prices.insert(material.into(), unit_price);
    }

    pub fn with_price(mut self, material: impl Into<String>, unit_price: f64) -> Self {
        self.insert(material, unit_price);
        self
    }

    /// 单价查询
    pub fn price(&self, material: &str) -> Option<f64> {
        self.prices.get(material).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ==========================================
// ZoneRules - 房间类型 → 功能分区
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRule {
    pub zone: Zone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneRules {
    rules: BTreeMap<String, ZoneRule>,
}

impl ZoneRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room_type: impl Into<String>, zone: Zone) {
        self.rules.insert(room_type.into(), ZoneRule { zone });
    }

    pub fn with_rule(mut self, room_type: impl Into<String>, zone: Zone) -> Self {
        self.insert(room_type, zone);
        self
    }

    /// 按房间类型精确查找分区；未登记的类型返回 None
    pub fn zone_of(&self, room_type: &str) -> Option<Zone> {
        self.rules.get(room_type).map(|rule| rule.zone)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
