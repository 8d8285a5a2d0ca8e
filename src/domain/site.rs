// ==========================================
// 户型评分系统 - 场地约束与方案摘要
// ==========================================
// 职责: 分区规则（容积率/退线/限高/用地性质）的数据载体
// 说明: 每次校验调用内不可变
// ==========================================

use crate::domain::types::SetbackEdge;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// ZoningRules - 管辖区规则集
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoningRules {
    #[serde(rename = "far")]
    pub max_far: f64,                          // 容积率上限
    pub height_limit: f64,                     // 限高 (m)
    #[serde(default)]
    pub setbacks: BTreeMap<SetbackEdge, f64>,  // 各边最小退线 (m)
    #[serde(default)]
    pub allowed_uses: BTreeSet<String>,        // 允许的用地性质
}

// ==========================================
// SiteConstraints - 场地约束
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConstraints {
    pub site_area: f64,    // 场地面积 (m²)
    pub rules: ZoningRules,
}

impl SiteConstraints {
    pub fn new(site_area: f64, rules: ZoningRules) -> Self {
        Self { site_area, rules }
    }
}

// ==========================================
// PlanSummary - 待校验的方案摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub built_up_area: f64,                     // 总建筑面积 (m²)
    #[serde(default)]
    pub footprint: BTreeMap<SetbackEdge, f64>,  // 各边实际退线距离 (m)
    pub height: f64,                            // 建筑高度 (m)
    pub program: String,                        // 用地性质 / 功能
}

// ==========================================
// ZoningRuleBook - 管辖区 → 规则集
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoningRuleBook {
    jurisdictions: BTreeMap<String, ZoningRules>,
}

impl ZoningRuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, jurisdiction: impl Into<String>, rules: ZoningRules) {
        self.jurisdictions.insert(jurisdiction.into(), rules);
    }

    pub fn get(&self, jurisdiction: &str) -> Option<&ZoningRules> {
        self.jurisdictions.get(jurisdiction)
    }
}
