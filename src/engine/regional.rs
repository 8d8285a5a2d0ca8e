// ==========================================
// 户型评分系统 - 地区价格归一化
// ==========================================
// 职责: 按地区系数调整价格表（材料系数 / 人工系数）并标注币种
// 规则: 名称含 tile / wood / cement 的条目按材料系数，其余按人工系数
// 说明: 实时汇率换算属于外部协作方，不在此处
// ==========================================

use crate::domain::CostTable;
use crate::engine::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MATERIAL_KEYWORDS: [&str; 3] = ["tile", "wood", "cement"];

// ==========================================
// RegionProfile - 地区系数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    pub material_multiplier: f64,
    pub labor_multiplier: f64,
    pub currency: String,
}

impl RegionProfile {
    pub fn new(material_multiplier: f64, labor_multiplier: f64, currency: &str) -> Self {
        Self {
            material_multiplier,
            labor_multiplier,
            currency: currency.to_string(),
        }
    }
}

// ==========================================
// NormalizedCostTable - 归一化结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCostTable {
    pub region: String,
    pub currency: String,
    pub prices: CostTable,
}

// ==========================================
// RegionalNormalizer
// ==========================================
#[derive(Debug, Clone)]
pub struct RegionalNormalizer {
    regions: BTreeMap<String, RegionProfile>,
}

impl RegionalNormalizer {
    pub fn new(regions: BTreeMap<String, RegionProfile>) -> Self {
        Self { regions }
    }

    pub fn profile(&self, region: &str) -> Option<&RegionProfile> {
        self.regions.get(&region.trim().to_lowercase())
    }

    /// 归一化价格表
    ///
    /// # 错误
    /// - `UnsupportedRegion`: 地区未登记
    pub fn normalize(&self, table: &CostTable, region: &str) -> ValidationResult<NormalizedCostTable> {
        let key = region.trim().to_lowercase();
        let profile = self
            .profile(&key)
            .ok_or_else(|| ValidationError::UnsupportedRegion(region.to_string()))?;

        let prices = table
            .iter()
            .map(|(item, value)| {
                let factor = if MATERIAL_KEYWORDS.iter().any(|kw| item.contains(kw)) {
                    profile.material_multiplier
                } else {
                    profile.labor_multiplier
                };
                (item.to_string(), value * factor)
            })
            .collect();

        Ok(NormalizedCostTable {
            region: key,
            currency: profile.currency.clone(),
            prices,
        })
    }
}

impl Default for RegionalNormalizer {
    fn default() -> Self {
        let regions = BTreeMap::from([
            ("nigeria".to_string(), RegionProfile::new(0.9, 0.4, "NGN")),
            ("usa".to_string(), RegionProfile::new(1.0, 1.0, "USD")),
            ("india".to_string(), RegionProfile::new(0.8, 0.35, "INR")),
            ("germany".to_string(), RegionProfile::new(1.1, 1.2, "EUR")),
            ("brazil".to_string(), RegionProfile::new(0.85, 0.5, "BRL")),
        ]);
        Self::new(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_prices() -> CostTable {
        CostTable::new()
            .with_price("steel", 750.0)
            .with_price("cement", 120.0)
            .with_price("alibaba_tile", 3.0)
            .with_price("mason_daily", 20.0)
    }

    #[test]
    fn test_material_and_labor_factors() {
        let normalized = RegionalNormalizer::default()
            .normalize(&raw_prices(), "Nigeria")
            .unwrap();

        assert_eq!(normalized.currency, "NGN");
        assert_eq!(normalized.region, "nigeria");
        assert!((normalized.prices.price("cement").unwrap() - 108.0).abs() < 1e-9);
        assert!((normalized.prices.price("alibaba_tile").unwrap() - 2.7).abs() < 1e-9);
        // steel 不含材料关键字，按人工系数
        assert!((normalized.prices.price("steel").unwrap() - 300.0).abs() < 1e-9);
        assert!((normalized.prices.price("mason_daily").unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsupported_region() {
        let err = RegionalNormalizer::default()
            .normalize(&raw_prices(), "atlantis")
            .unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedRegion("atlantis".to_string()));
    }
}
