// ==========================================
// 户型评分系统 - 批量反馈闭环入口
// ==========================================
// 用法:
//   floorplan-feedback [config.json]
//
// 读取配置 → 加载价格表与分区规则 → 逐个户型评分/变异/再评分 → 追加反馈日志
// ==========================================

use anyhow::{Context, Result};
use floorplan_feedback::config::AppConfig;
use floorplan_feedback::engine::{
    CostEstimator, DesignImprover, DesignScorer, FeedbackLoop, RandomAreaPerturbation,
    RegionalNormalizer,
};
use floorplan_feedback::importer::{load_cost_table, load_zone_rules};
use floorplan_feedback::logging;
use floorplan_feedback::repository::FeedbackLogRepository;
use std::path::PathBuf;
use tracing::{debug, info};

fn main() -> Result<()> {
    logging::init();

    info!("==================================================");
    info!("{}", floorplan_feedback::APP_NAME);
    info!("系统版本: {}", floorplan_feedback::VERSION);
    info!("==================================================");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("加载配置失败")?;
    debug!("配置快照: {}", config.snapshot());

    // 参考数据
    let mut costs = load_cost_table(&config.cost_table_path)
        .with_context(|| format!("加载价格表失败: {}", config.cost_table_path.display()))?;
    if let Some(region) = &config.region {
        let normalized = RegionalNormalizer::default().normalize(&costs, region)?;
        info!("价格表已按地区归一化: region={}, currency={}", normalized.region, normalized.currency);
        costs = normalized.prices;
    }
    let zone_rules = load_zone_rules(&config.zone_rules_path)
        .with_context(|| format!("加载分区规则失败: {}", config.zone_rules_path.display()))?;

    // 变异策略
    let strategy = match config.seed {
        Some(seed) => {
            info!("使用固定随机种子: {}", seed);
            RandomAreaPerturbation::seeded(seed)
        }
        None => RandomAreaPerturbation::from_entropy(),
    }
    .with_probability(config.mutation_probability)
    .with_spread(config.mutation_spread);
    info!(
        "变异策略: 随机面积扰动 probability={}, spread=±{}",
        strategy.probability(),
        strategy.spread()
    );

    let scorer = DesignScorer::new(zone_rules, CostEstimator::new(costs));
    let improver = DesignImprover::new(scorer, strategy);
    let log = FeedbackLogRepository::open(&config.log_path)
        .with_context(|| format!("打开反馈日志失败: {}", config.log_path.display()))?;
    info!("反馈日志: {}", log.path().display());

    let mut feedback =
        FeedbackLoop::new(improver, log).with_open_plan_threshold(config.open_plan_threshold);
    let report = feedback
        .run_dir(&config.plans_dir)
        .with_context(|| format!("读取户型目录失败: {}", config.plans_dir.display()))?;

    for record in &report.processed {
        println!(
            "OK   {} | Δ动线 {:+} | Δ造价 {:+.2} | 变更 {} 间",
            record.source,
            record.circulation_delta(),
            record.material_cost_delta(),
            record.improvements.len()
        );
    }
    for failure in &report.failures {
        println!("FAIL {} | {}", failure.source, failure.reason);
    }
    println!(
        "共 {} 个户型: 成功 {}，失败 {}",
        report.total(),
        report.processed.len(),
        report.failures.len()
    );

    Ok(())
}
