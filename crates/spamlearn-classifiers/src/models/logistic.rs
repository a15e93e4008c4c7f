//! L2-regularized logistic regression trained by batch gradient ascent.
//!
//! The bias is folded into the weight vector as `w[0]`, multiplying an
//! implicit constant `1` column prepended to every row. Training maximises
//! the log-likelihood, so the update is `w += learning_rate * g` with
//! `g = X_aug^T (y - p) - lambda_reg * [0, w_1, .., w_d]`.
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::error::{ClassifierError, Result};
use crate::math::vector::dot;
use crate::math::{Array1, Array2};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_columns, check_training_input};

/// `z` is clamped to this magnitude before exponentiation.
pub const SIGMOID_CLAMP: f64 = 500.0;

/// Logistic function with the input clamped to `[-500, 500]`.
///
/// The clamp keeps `exp(-z)` finite, so `sigmoid(10_000.0) == sigmoid(500.0)`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
    1.0 / (1.0 + (-z).exp())
}

/// Hyper-parameters for [`LogisticRegression::train`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LogisticParams {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub lambda_reg: f64,
    /// Seed for the standard-normal initial weights.
    pub seed: u64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 5,
            lambda_reg: 0.1,
            seed: 42,
        }
    }
}

impl LogisticParams {
    pub fn with_lambda(mut self, lambda_reg: f64) -> Self {
        self.lambda_reg = lambda_reg;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations < 1 {
            return Err(ClassifierError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        if !self.learning_rate.is_finite() {
            return Err(ClassifierError::invalid_input(format!(
                "learning_rate must be finite, got {}",
                self.learning_rate
            )));
        }
        if !self.lambda_reg.is_finite() {
            return Err(ClassifierError::invalid_input(format!(
                "lambda_reg must be finite, got {}",
                self.lambda_reg
            )));
        }
        Ok(())
    }
}

/// Trained weights; `weights[0]` is the bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    weights: Array1<f64>,
}

/// `w[0] + sum_j w[j + 1] * x_j`.
#[inline]
fn decision(weights: &[f64], row: &[f64]) -> f64 {
    weights[0] + dot(&weights[1..], row)
}

fn initial_weights(size: usize, seed: u64) -> Result<Vec<f64>> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| ClassifierError::invalid_input(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..size).map(|_| normal.sample(&mut rng)).collect())
}

fn negative_log_likelihood(weights: &[f64], x: &Array2<f64>, y: &[i32]) -> f64 {
    // ln(1 + e^z) computed without overflow
    let softplus = |z: f64| z.max(0.0) + (-z.abs()).exp().ln_1p();
    x.rows()
        .zip(y)
        .map(|(row, &label)| {
            let z = decision(weights, row);
            softplus(z) - f64::from(label) * z
        })
        .sum()
}

impl LogisticRegression {
    /// Run exactly `params.max_iterations` full-batch gradient-ascent steps.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `max_iterations < 1`, the learning rate or lambda is
    /// not finite, the row counts of `x` and `y` differ, or a label is not 0/1.
    pub fn train(x: &Array2<f64>, y: &[i32], params: &LogisticParams) -> Result<Self> {
        params.validate()?;
        check_training_input(x, y)?;

        let n_weights = x.ncols() + 1;
        let mut w = initial_weights(n_weights, params.seed)?;
        let mut grad = vec![0.0; n_weights];

        for iteration in 0..params.max_iterations {
            grad.iter_mut().for_each(|g| *g = 0.0);

            for (row, &label) in x.rows().zip(y) {
                let residual = f64::from(label) - sigmoid(decision(&w, row));
                grad[0] += residual;
                for (g, &v) in grad[1..].iter_mut().zip(row) {
                    *g += v * residual;
                }
            }
            // bias is not penalised
            for (g, &wj) in grad[1..].iter_mut().zip(&w[1..]) {
                *g -= params.lambda_reg * wj;
            }
            for (wj, &g) in w.iter_mut().zip(&grad) {
                *wj += params.learning_rate * g;
            }

            if log::log_enabled!(log::Level::Trace) {
                log::trace!(
                    "iteration {}: negative log-likelihood {:.6}",
                    iteration + 1,
                    negative_log_likelihood(&w, x, y)
                );
            }
        }

        log::debug!(
            "Trained logistic regression on {} rows x {} features (lr = {}, iterations = {}, lambda = {})",
            x.nrows(),
            x.ncols(),
            params.learning_rate,
            params.max_iterations,
            params.lambda_reg
        );

        Ok(LogisticRegression {
            weights: Array1::from_vec(w),
        })
    }

    /// Wrap an existing weight vector (bias first).
    pub fn from_weights(weights: Array1<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(ClassifierError::invalid_input(
                "weight vector must contain at least the bias term",
            ));
        }
        Ok(LogisticRegression { weights })
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn n_features(&self) -> usize {
        self.weights.len() - 1
    }

    /// P(spam | row) per row.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Vec<f64>> {
        check_columns(x, self.n_features())?;
        let w = self.weights.as_slice();
        Ok(x.rows().map(|row| sigmoid(decision(w, row))).collect())
    }

    /// Spam when the probability is at least 0.5.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        Ok(self
            .predict_proba(x)?
            .into_iter()
            .map(|p| i32::from(p >= 0.5))
            .collect())
    }

    /// Unpenalised training objective, `-sum_i log P(y_i | x_i; w)`.
    pub fn negative_log_likelihood(&self, x: &Array2<f64>, y: &[i32]) -> Result<f64> {
        check_columns(x, self.n_features())?;
        check_training_input(x, y)?;
        Ok(negative_log_likelihood(self.weights.as_slice(), x, y))
    }
}

impl ClassifierModel for LogisticRegression {
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        LogisticRegression::predict(self, x)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
