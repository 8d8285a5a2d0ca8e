// ==========================================
// 户型评分系统 - 方案改进引擎
// ==========================================
// 职责: 对房间图施加候选变异并重新评分，输出前后对比
// 说明: 变异策略可插拔（MutationStrategy），默认策略为随机面积扰动占位实现
// 红线: feedback_loop 原地变异、不回滚；需要保留原图时调用 trial（先克隆后变异）
// ==========================================

use crate::domain::{FeedbackRecord, GraphResult, MutationProposal, RoomGraph, ScoreVector};
use crate::engine::cost_estimator::round2;
use crate::engine::scorer::DesignScorer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// 默认: 每个房间被变异的概率
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.3;

/// 默认: 面积乘数的浮动幅度（±10%）
pub const DEFAULT_MUTATION_SPREAD: f64 = 0.1;

// ==========================================
// MutationStrategy - 变异策略
// ==========================================
pub trait MutationStrategy {
    /// 原地变异房间图，返回实际发生的变更（房间遍历顺序）
    fn mutate(&mut self, graph: &mut RoomGraph) -> GraphResult<Vec<MutationProposal>>;
}

// ==========================================
// RandomAreaPerturbation - 随机面积扰动
// ==========================================
// 每个房间独立地以概率 p 将面积乘以 round(U(1-s, 1+s), 2)；
// 乘数恰为 1.00 时面积未变，不记录。
pub struct RandomAreaPerturbation<R: Rng = ChaCha8Rng> {
    rng: R,
    probability: f64,
    spread: f64,
}

impl<R: Rng> RandomAreaPerturbation<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            probability: DEFAULT_MUTATION_PROBABILITY,
            spread: DEFAULT_MUTATION_SPREAD,
        }
    }

    /// 变异概率，限制在 [0, 1]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// 浮动幅度，限制在 [0, 0.99]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = if spread.is_nan() {
            0.0
        } else {
            spread.clamp(0.0, 0.99)
        };
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl RandomAreaPerturbation<ChaCha8Rng> {
    /// 固定种子，结果可复现
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// 系统熵源初始化
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> MutationStrategy for RandomAreaPerturbation<R> {
    fn mutate(&mut self, graph: &mut RoomGraph) -> GraphResult<Vec<MutationProposal>> {
        let mut proposals = Vec::new();

        for name in graph.room_names() {
            if !self.rng.gen_bool(self.probability) {
                continue;
            }

            let factor = round2(
                self.rng
                    .gen_range((1.0 - self.spread)..=(1.0 + self.spread)),
            );
            if factor == 1.0 {
                continue;
            }

            let old_area = graph.room(&name).map(|r| r.area).unwrap_or_default();
            let new_area = old_area * factor;
            graph.set_area(&name, new_area)?;

            proposals.push(MutationProposal {
                room: name,
                old_area,
                new_area,
            });
        }

        Ok(proposals)
    }
}

// ==========================================
// DesignImprover - 方案改进引擎
// ==========================================
pub struct DesignImprover<S: MutationStrategy> {
    scorer: DesignScorer,
    strategy: S,
}

impl<S: MutationStrategy> DesignImprover<S> {
    pub fn new(scorer: DesignScorer, strategy: S) -> Self {
        Self { scorer, strategy }
    }

    pub fn scorer(&self) -> &DesignScorer {
        &self.scorer
    }

    pub fn score(&self, graph: &RoomGraph) -> ScoreVector {
        self.scorer.score(graph)
    }

    /// 生成并施加变异（原地）
    pub fn propose(&mut self, graph: &mut RoomGraph) -> GraphResult<Vec<MutationProposal>> {
        self.strategy.mutate(graph)
    }

    /// 评分 → 变异 → 再评分（同一图实例，原地变异，不可撤销）
    ///
    /// 可变借用保证变异与再评分期间没有其他读者观察到中间状态。
    #[instrument(skip(self, graph), fields(rooms = graph.len()))]
    pub fn feedback_loop(
        &mut self,
        graph: &mut RoomGraph,
        source: &str,
    ) -> GraphResult<FeedbackRecord> {
        let before = self.scorer.score(graph);
        let improvements = self.propose(graph)?;
        let after = self.scorer.score(graph);

        debug!(
            "改进试算完成: changed_rooms={}, cost {} -> {}",
            improvements.len(),
            before.material_cost,
            after.material_cost
        );

        Ok(FeedbackRecord::new(source, before, after, improvements))
    }

    /// 先克隆后变异: 原图保持不变，返回变异后的新图与反馈记录
    pub fn trial(
        &mut self,
        graph: &RoomGraph,
        source: &str,
    ) -> GraphResult<(RoomGraph, FeedbackRecord)> {
        let mut candidate = graph.clone();
        let record = self.feedback_loop(&mut candidate, source)?;
        Ok((candidate, record))
    }
}
