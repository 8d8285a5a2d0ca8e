// ==========================================
// 户型评分系统 - 批量反馈闭环编排器
// ==========================================
// 流程: 户型文件 → 房间图 → 评分/变异/再评分 → 反馈记录 → 追加日志
// 红线: 单个户型失败（解析/结构/写日志）只记录并跳过，不中断整批
// 顺序: 按文件名排序处理，日志记录顺序与处理顺序一致
// ==========================================

use crate::domain::{FeedbackRecord, RoomGraph};
use crate::engine::circulation::{CirculationAgent, DEFAULT_OPEN_PLAN_THRESHOLD};
use crate::engine::improver::{DesignImprover, MutationStrategy};
use crate::importer::{list_plan_files, load_plan_file, ImportResult};
use crate::repository::FeedbackLogRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// BatchReport - 批处理结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFailure {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: Vec<FeedbackRecord>, // 已写入日志的记录（处理顺序）
    pub failures: Vec<PlanFailure>,     // 被跳过的户型及原因
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// ==========================================
// FeedbackLoop - 批量反馈闭环
// ==========================================
pub struct FeedbackLoop<S: MutationStrategy> {
    improver: DesignImprover<S>,
    log: FeedbackLogRepository,
    open_plan_threshold: f64,
}

impl<S: MutationStrategy> FeedbackLoop<S> {
    pub fn new(improver: DesignImprover<S>, log: FeedbackLogRepository) -> Self {
        Self {
            improver,
            log,
            open_plan_threshold: DEFAULT_OPEN_PLAN_THRESHOLD,
        }
    }

    pub fn with_open_plan_threshold(mut self, threshold: f64) -> Self {
        self.open_plan_threshold = threshold;
        self
    }

    pub fn log(&self) -> &FeedbackLogRepository {
        &self.log
    }

    /// 处理目录下全部 .json 户型文件
    ///
    /// # 错误
    /// 仅当目录本身无法列出时整体失败；单个文件的问题记入 `failures`。
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn run_dir(&mut self, dir: &Path) -> ImportResult<BatchReport> {
        let files = list_plan_files(dir)?;
        info!("已加载 {} 个户型待评估", files.len());

        let mut report = BatchReport::default();
        for path in files {
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match load_plan_file(&path) {
                Ok(graph) => self.process(&source, graph, &mut report),
                Err(e) => Self::skip(&source, e.to_string(), &mut report),
            }
        }

        Self::finish(&report);
        Ok(report)
    }

    /// 处理内存中的户型（来源标识, 房间图）
    pub fn run_plans<I>(&mut self, plans: I) -> BatchReport
    where
        I: IntoIterator<Item = (String, RoomGraph)>,
    {
        let mut report = BatchReport::default();
        for (source, graph) in plans {
            self.process(&source, graph, &mut report);
        }

        Self::finish(&report);
        report
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn process(&mut self, source: &str, mut graph: RoomGraph, report: &mut BatchReport) {
        let record = match self.improver.feedback_loop(&mut graph, source) {
            Ok(record) => record,
            Err(e) => return Self::skip(source, e.to_string(), report),
        };

        if let Err(e) = self.log.append(&record) {
            return Self::skip(source, e.to_string(), report);
        }

        info!(
            "已处理: {} | 动线变化: {} | 造价变化: {:.2} | 变更房间: {}",
            source,
            record.circulation_delta(),
            record.material_cost_delta(),
            record.improvements.len()
        );
        for advice in CirculationAgent::new(&graph)
            .with_open_plan_threshold(self.open_plan_threshold)
            .suggest_improvements()
        {
            info!("  {}: {}", source, advice);
        }

        report.processed.push(record);
    }

    fn skip(source: &str, reason: String, report: &mut BatchReport) {
        warn!("跳过户型 {}: {}", source, reason);
        report.failures.push(PlanFailure {
            source: source.to_string(),
            reason,
        });
    }

    fn finish(report: &BatchReport) {
        info!(
            "反馈闭环完成: processed={}, failed={}",
            report.processed.len(),
            report.failures.len()
        );
    }
}
