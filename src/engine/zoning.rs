// ==========================================
// 户型评分系统 - 规划条件校验引擎
// ==========================================
// 职责: 容积率 / 退线 / 限高 / 用地性质 四项独立校验
// 红线: validate 必须无条件执行全部四项（禁止短路），收集全部违规
// 输出: 违规列表（每次 validate 开始时清空）
// ==========================================

use crate::domain::{PlanSummary, SetbackEdge, SiteConstraints, ZoningRuleBook};
use crate::engine::error::{ValidationError, ValidationResult};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

// ==========================================
// ZoningViolation - 违规项
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum ZoningViolation {
    FarExceeded { far: f64, max_far: f64 },
    SetbackTooSmall { edge: SetbackEdge, provided: f64, required: f64 },
    HeightExceeded { height: f64, limit: f64 },
    LandUseNotPermitted { program: String },
}

impl fmt::Display for ZoningViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoningViolation::FarExceeded { far, max_far } => {
                write!(f, "容积率超限: {:.2} > 允许值 {}", far, max_far)
            }
            ZoningViolation::SetbackTooSmall { edge, provided, required } => {
                write!(f, "{} 退线不足: {} < {}", edge, provided, required)
            }
            ZoningViolation::HeightExceeded { height, limit } => {
                write!(f, "建筑高度超限: {} > {}", height, limit)
            }
            ZoningViolation::LandUseNotPermitted { program } => {
                write!(f, "用地性质 '{}' 不在允许范围内", program)
            }
        }
    }
}

// ==========================================
// ZoningAgent - 规划条件校验引擎
// ==========================================
pub struct ZoningAgent {
    site: SiteConstraints,
    violations: Vec<ZoningViolation>,
}

impl ZoningAgent {
    pub fn new(site: SiteConstraints) -> Self {
        Self {
            site,
            violations: Vec::new(),
        }
    }

    /// 按管辖区名称从规则库构造
    ///
    /// # 错误
    /// - `UnknownJurisdiction`: 规则库中没有该管辖区
    pub fn for_jurisdiction(
        book: &ZoningRuleBook,
        jurisdiction: &str,
        site_area: f64,
    ) -> ValidationResult<Self> {
        let rules = book
            .get(jurisdiction)
            .ok_or_else(|| ValidationError::UnknownJurisdiction(jurisdiction.to_string()))?;
        Ok(Self::new(SiteConstraints::new(site_area, rules.clone())))
    }

    // ==========================================
    // 单项校验
    // ==========================================

    /// 容积率: built_up_area / site_area <= max_far
    pub fn check_far(&mut self, built_up_area: f64) -> bool {
        let far = built_up_area / self.site.site_area;
        let max_far = self.site.rules.max_far;
        if far > max_far {
            self.violations.push(ZoningViolation::FarExceeded { far, max_far });
            return false;
        }
        true
    }

    /// 退线: 规则中的每一条边都需满足 提供距离 >= 要求距离
    ///
    /// 方案摘要中缺失的边按 0 处理；每条不满足的边各记一条违规。
    pub fn check_setbacks(&mut self, footprint: &BTreeMap<SetbackEdge, f64>) -> bool {
        let mut passed = true;
        for (&edge, &required) in &self.site.rules.setbacks {
            let provided = footprint.get(&edge).copied().unwrap_or(0.0);
            if provided < required {
                self.violations.push(ZoningViolation::SetbackTooSmall {
                    edge,
                    provided,
                    required,
                });
                passed = false;
            }
        }
        passed
    }

    /// 限高: height <= height_limit
    pub fn check_height(&mut self, height: f64) -> bool {
        let limit = self.site.rules.height_limit;
        if height > limit {
            self.violations.push(ZoningViolation::HeightExceeded { height, limit });
            return false;
        }
        true
    }

    /// 用地性质: program 必须在允许集合内
    pub fn check_land_use(&mut self, program: &str) -> bool {
        if !self.site.rules.allowed_uses.contains(program) {
            self.violations.push(ZoningViolation::LandUseNotPermitted {
                program: program.to_string(),
            });
            return false;
        }
        true
    }

    // ==========================================
    // 综合校验
    // ==========================================

    /// 执行全部四项校验
    ///
    /// # 返回
    /// - `Ok(true)`: 全部通过
    /// - `Ok(false)`: 至少一项未通过，违规见 `violations()`
    /// - `Err(...)`: 输入数值非法（场地面积非正、出现 NaN/∞），不执行任何校验
    #[instrument(skip(self, summary), fields(program = %summary.program))]
    pub fn validate(&mut self, summary: &PlanSummary) -> ValidationResult<bool> {
        self.violations.clear();
        self.check_inputs(summary)?;

        // 四项全部执行，不使用 && 短路
        let checks = [
            self.check_far(summary.built_up_area),
            self.check_setbacks(&summary.footprint),
            self.check_height(summary.height),
            self.check_land_use(&summary.program),
        ];
        let passed = checks.iter().all(|&ok| ok);

        debug!(
            "规划校验完成: passed={}, violations={}",
            passed,
            self.violations.len()
        );
        Ok(passed)
    }

    /// 最近一次 validate 的违规列表
    pub fn violations(&self) -> &[ZoningViolation] {
        &self.violations
    }

    /// 最近一次 validate 的违规文本
    pub fn violation_messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    fn check_inputs(&self, summary: &PlanSummary) -> ValidationResult<()> {
        let site_area = self.site.site_area;
        if !(site_area.is_finite() && site_area > 0.0) {
            return Err(ValidationError::InvalidSiteArea(site_area));
        }

        let mut fields: Vec<(String, f64)> = vec![
            ("built_up_area".to_string(), summary.built_up_area),
            ("height".to_string(), summary.height),
        ];
        fields.extend(
            summary
                .footprint
                .iter()
                .map(|(edge, &v)| (format!("footprint.{}", edge), v)),
        );

        match fields
            .into_iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
        {
            Some((field, value)) => Err(ValidationError::InvalidValue { field, value }),
            None => Ok(()),
        }
    }
}
