use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use crate::models::logistic::LogisticParams;

/// Supported classifier families and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub enum ModelType {
    /// Raw term counts, Laplace smoothed.
    #[default]
    MultinomialNB,
    /// 0/1 term presence, add-one/add-two smoothed.
    BernoulliNB,
    LogisticRegression(LogisticParams),
}

impl ModelType {
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::MultinomialNB => "multinomial_nb",
            ModelType::BernoulliNB => "bernoulli_nb",
            ModelType::LogisticRegression(_) => "logistic_regression",
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multinomial" | "multinomial_nb" => Ok(ModelType::MultinomialNB),
            "bernoulli" | "bernoulli_nb" | "discrete" => Ok(ModelType::BernoulliNB),
            "logistic" | "logistic_regression" => {
                Ok(ModelType::LogisticRegression(LogisticParams::default()))
            }
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: multinomial, bernoulli, logistic",
                s
            )),
        }
    }
}

/// Settings for the end-to-end evaluation protocol.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Share of the training rows held out to pick `lambda_reg`.
    pub validation_fraction: f64,
    /// Seed for the train/validation shuffle.
    pub split_seed: u64,
    /// Candidate regularization strengths, tried in order.
    pub lambda_grid: Vec<f64>,
    /// Everything but `lambda_reg` is taken from here.
    pub logistic: LogisticParams,
    /// Fan the lambda candidates out over the rayon pool.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            validation_fraction: 0.3,
            split_seed: 42,
            lambda_grid: crate::selection::DEFAULT_LAMBDA_GRID.to_vec(),
            logistic: LogisticParams::default(),
            parallel: false,
        }
    }
}
