//! End-to-end evaluation of every classifier family on one train/test pair.
//!
//! The protocol:
//!
//! 1. Multinomial NB is fit on the raw counts of the full training set.
//! 2. Bernoulli NB is fit on the binarized training set.
//! 3. For logistic regression (once on counts, once on presence vectors) the
//!    training set is split into train/validation, `lambda_reg` is chosen by
//!    validation F1, and the winner is refit on train ∪ validation.
//! 4. Every final model is scored on the untouched test set.
use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::data_handling::Dataset;
use crate::error::{ClassifierError, Result};
use crate::metrics::ClassificationReport;
use crate::models::bernoulli_nb::BernoulliNB;
use crate::models::logistic::LogisticRegression;
use crate::models::multinomial_nb::MultinomialNB;
use crate::preprocessing::binarize;
use crate::selection::{search_lambda, Candidate, LambdaOutcome};

/// Outcome of the lambda search and refit for one feature encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticReport {
    pub lambda: f64,
    pub validation_f1: f64,
    pub candidates: Vec<Candidate>,
    pub test: ClassificationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub train_documents: usize,
    pub test_documents: usize,
    pub n_features: usize,
    pub multinomial_nb: ClassificationReport,
    pub bernoulli_nb: ClassificationReport,
    pub logistic_counts: LogisticReport,
    pub logistic_presence: LogisticReport,
}

/// Pick `lambda_reg` on a validation split of `train`, then refit on all of
/// `train` with the winning value.
///
/// Returns the refit model together with the search outcome (whose `model`
/// was trained on the fit split only).
pub fn select_logistic(
    train: &Dataset,
    config: &ExperimentConfig,
) -> Result<(LogisticRegression, LambdaOutcome)> {
    let (fit, validation) =
        train.train_validation_split(config.validation_fraction, config.split_seed)?;
    let outcome = search_lambda(
        &config.lambda_grid,
        &config.logistic,
        &fit,
        &validation,
        config.parallel,
    )?;

    let combined = fit.concat(&validation)?;
    let model = LogisticRegression::train(
        &combined.x,
        combined.labels(),
        &config.logistic.with_lambda(outcome.lambda),
    )?;
    Ok((model, outcome))
}

fn logistic_report(
    train: &Dataset,
    test: &Dataset,
    config: &ExperimentConfig,
) -> Result<LogisticReport> {
    let (model, outcome) = select_logistic(train, config)?;
    let predictions = model.predict(&test.x)?;
    Ok(LogisticReport {
        lambda: outcome.lambda,
        validation_f1: outcome.f1,
        candidates: outcome.candidates,
        test: ClassificationReport::evaluate(test.labels(), &predictions)?,
    })
}

/// Run the full protocol. `train` and `test` hold raw term counts over the
/// same vocabulary.
pub fn run_experiment(
    train: &Dataset,
    test: &Dataset,
    config: &ExperimentConfig,
) -> Result<ExperimentReport> {
    if train.n_features() != test.n_features() {
        return Err(ClassifierError::invalid_input(format!(
            "train has {} features but test has {}",
            train.n_features(),
            test.n_features()
        )));
    }
    train.log_summary();

    let multinomial = MultinomialNB::train(&train.x, train.labels())?;
    let multinomial_nb =
        ClassificationReport::evaluate(test.labels(), &multinomial.predict(&test.x)?)?;
    log::info!("Multinomial NB\n{}", multinomial_nb);

    let train_presence = train.with_features(binarize(&train.x))?;
    let test_presence = test.with_features(binarize(&test.x))?;

    let bernoulli = BernoulliNB::train(&train_presence.x, train_presence.labels())?;
    let bernoulli_nb =
        ClassificationReport::evaluate(test.labels(), &bernoulli.predict(&test_presence.x)?)?;
    log::info!("Bernoulli NB\n{}", bernoulli_nb);

    let logistic_counts = logistic_report(train, test, config)?;
    log::info!(
        "Logistic regression on counts (lambda = {})\n{}",
        logistic_counts.lambda,
        logistic_counts.test
    );

    let logistic_presence = logistic_report(&train_presence, &test_presence, config)?;
    log::info!(
        "Logistic regression on presence (lambda = {})\n{}",
        logistic_presence.lambda,
        logistic_presence.test
    );

    Ok(ExperimentReport {
        train_documents: train.n_samples(),
        test_documents: test.n_samples(),
        n_features: train.n_features(),
        multinomial_nb,
        bernoulli_nb,
        logistic_counts,
        logistic_presence,
    })
}
