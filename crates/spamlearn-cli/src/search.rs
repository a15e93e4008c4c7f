//! `spamlearn search-lambda`: tune the logistic-regression penalty on a
//! validation split of one training file.
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use spamlearn_classifiers::config::ExperimentConfig;
use spamlearn_classifiers::experiment::select_logistic;
use spamlearn_classifiers::io::read_feature_csv;
use spamlearn_classifiers::preprocessing::binarize;
use spamlearn_classifiers::selection::Candidate;

/// Result of a lambda search, with the weights refit on every training row.
#[derive(Debug, Clone, Serialize)]
pub struct LambdaSummary {
    pub lambda: f64,
    pub validation_f1: f64,
    pub candidates: Vec<Candidate>,
    /// Bias first, then one weight per feature column.
    pub weights: Vec<f64>,
    pub feature_names: Option<Vec<String>>,
}

/// Search `config.lambda_grid` on `train_path`. With `presence` the counts
/// are binarized first.
pub fn search_lambda_file<P: AsRef<Path>>(
    train_path: P,
    config: &ExperimentConfig,
    presence: bool,
) -> Result<LambdaSummary> {
    let mut train = read_feature_csv(&train_path)?;
    if presence {
        train = train.with_features(binarize(&train.x))?;
    }
    train.log_summary();

    let (model, outcome) = select_logistic(&train, config).with_context(|| {
        format!(
            "Lambda search failed for {}",
            train_path.as_ref().display()
        )
    })?;
    Ok(LambdaSummary {
        lambda: outcome.lambda,
        validation_f1: outcome.f1,
        candidates: outcome.candidates,
        weights: model.weights().to_vec(),
        feature_names: train.feature_names,
    })
}
