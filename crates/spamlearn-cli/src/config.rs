//! JSON configuration loading and command-line overrides.
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;

use spamlearn_classifiers::config::ExperimentConfig;

/// Load an experiment configuration from a JSON file. Missing fields take
/// their defaults.
pub fn load_experiment_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ExperimentConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Apply the flags shared by every subcommand on top of `config`.
pub fn apply_overrides(config: &mut ExperimentConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(lambdas) = matches.get_many::<f64>("lambda") {
        config.lambda_grid = lambdas.copied().collect();
    }
    if let Some(&fraction) = matches.get_one::<f64>("validation_fraction") {
        config.validation_fraction = fraction;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.split_seed = seed;
        config.logistic.seed = seed;
    }
    if let Some(&iterations) = matches.get_one::<usize>("max_iterations") {
        config.logistic.max_iterations = iterations;
    }
    if let Some(&rate) = matches.get_one::<f64>("learning_rate") {
        config.logistic.learning_rate = rate;
    }
    if matches.get_flag("parallel") {
        config.parallel = true;
    }
    validate(config)
}

/// Reject settings the library would only trip over later.
pub fn validate(config: &ExperimentConfig) -> Result<()> {
    if config.lambda_grid.is_empty() {
        bail!("lambda_grid must contain at least one value");
    }
    if !(config.validation_fraction > 0.0 && config.validation_fraction < 1.0) {
        bail!(
            "validation_fraction must lie in (0, 1), got {}",
            config.validation_fraction
        );
    }
    config.logistic.validate()?;
    Ok(())
}

/// Load `path` when given, otherwise fall back to the defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<ExperimentConfig> {
    match path {
        Some(path) => {
            log::info!("[spamlearn] Using config: {}", path.display());
            load_experiment_config(path)
        }
        None => {
            log::info!("[spamlearn] No config provided; using defaults.");
            Ok(ExperimentConfig::default())
        }
    }
}
