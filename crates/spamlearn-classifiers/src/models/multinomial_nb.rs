//! Multinomial Naive Bayes over bag-of-words term counts.
//!
//! Every feature starts with a pseudo-count of one and every class with a
//! total-word pseudo-count equal to the vocabulary size (Laplace smoothing),
//! so unseen terms never produce a zero likelihood. Scoring happens entirely
//! in log space.
use crate::error::{ClassifierError, Result};
use crate::math::{Array1, Array2};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{
    check_both_classes, check_columns, check_training_input, class_indices,
};

/// Trained multinomial model. Expects raw, non-negative term counts.
#[derive(Debug, Clone, PartialEq)]
pub struct MultinomialNB {
    prior_pos: f64,
    prior_neg: f64,
    log_cond_pos: Array1<f64>,
    log_cond_neg: Array1<f64>,
}

impl MultinomialNB {
    /// Fit class priors and per-term log-likelihoods.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` on shape mismatch, empty input, labels outside {0, 1},
    ///   or negative / non-finite counts.
    /// * `DegenerateInput` when either class has no training rows.
    pub fn train(x: &Array2<f64>, y: &[i32]) -> Result<Self> {
        check_training_input(x, y)?;
        if x.as_slice().iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ClassifierError::invalid_input(
                "multinomial naive bayes expects non-negative term counts",
            ));
        }
        let (_, n_pos) = check_both_classes(y)?;

        let vocab = x.ncols();
        let prior_pos = n_pos as f64 / y.len() as f64;
        let prior_neg = 1.0 - prior_pos;

        // pseudo-count 1 per term, vocabulary-size pseudo-total per class
        let log_cond = |label: i32| -> Array1<f64> {
            let counts = x.select_rows(&class_indices(y, label)).sum_columns();
            let total = vocab as f64 + counts.iter().sum::<f64>();
            counts.iter().map(|c| ((c + 1.0) / total).ln()).collect()
        };
        let log_cond_pos = log_cond(1);
        let log_cond_neg = log_cond(0);

        log::debug!(
            "Trained multinomial NB on {} documents, {} terms (prior_pos = {:.4})",
            y.len(),
            vocab,
            prior_pos
        );

        Ok(MultinomialNB {
            prior_pos,
            prior_neg,
            log_cond_pos,
            log_cond_neg,
        })
    }

    pub fn prior_pos(&self) -> f64 {
        self.prior_pos
    }

    pub fn prior_neg(&self) -> f64 {
        self.prior_neg
    }

    pub fn log_cond_pos(&self) -> &Array1<f64> {
        &self.log_cond_pos
    }

    pub fn log_cond_neg(&self) -> &Array1<f64> {
        &self.log_cond_neg
    }

    pub fn n_features(&self) -> usize {
        self.log_cond_pos.len()
    }

    /// Unnormalised `(log P(pos, row), log P(neg, row))` per row.
    pub fn log_scores(&self, x: &Array2<f64>) -> Result<Vec<(f64, f64)>> {
        check_columns(x, self.n_features())?;
        let log_prior_pos = self.prior_pos.ln();
        let log_prior_neg = self.prior_neg.ln();
        Ok(x
            .rows()
            .map(|row| {
                (
                    log_prior_pos + self.log_cond_pos.dot(row),
                    log_prior_neg + self.log_cond_neg.dot(row),
                )
            })
            .collect())
    }

    /// Positive only when the positive score is strictly larger; ties go to ham.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        Ok(self
            .log_scores(x)?
            .into_iter()
            .map(|(pos, neg)| i32::from(pos > neg))
            .collect())
    }
}

impl ClassifierModel for MultinomialNB {
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        MultinomialNB::predict(self, x)
    }

    fn name(&self) -> &str {
        "multinomial_nb"
    }
}
