// Small dev utility: compute the quality result for one batch of inspection records.
//
// Usage:
//   cargo run --bin quality_rate_calc -- <records.(csv|xlsx|json)> <plan.json> [config.json]
//
// Prints the CalculationResult as JSON on stdout; logs go to stderr.

use anyhow::{bail, Context};
use inspection_quality_rate::config::ConfigManager;
use inspection_quality_rate::engine::{check_batch_consistency, QualityRateEngine, QualityRule};
use inspection_quality_rate::importer::{import_records, load_plan_config};
use inspection_quality_rate::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let (records_path, plan_path) = match (args.next(), args.next()) {
        (Some(r), Some(p)) => (r, p),
        _ => bail!("usage: quality_rate_calc <records-file> <plan.json> [config.json]"),
    };
    let config_path = args.next();

    let mut config = match config_path {
        Some(path) => ConfigManager::from_file(&path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => ConfigManager::new(),
    };
    config.apply_env_overrides();

    let engine = QualityRateEngine::from_config(&config).context("invalid engine config")?;

    let records = import_records(&records_path)
        .with_context(|| format!("failed to import records {}", records_path))?;
    let plan =
        load_plan_config(&plan_path).with_context(|| format!("failed to load plan {}", plan_path))?;

    match QualityRule::resolve(&plan) {
        Some(rule) => tracing::info!(%rule, "quality rule selected"),
        None => tracing::warn!("plan matches no quality rule; result will be all zero"),
    }
    if !check_batch_consistency(&records).is_consistent() {
        tracing::warn!("records disagree on batch totals; first record wins");
    }

    let result = engine.calculate_by_plan(&records, &plan);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
