mod common;

use spamlearn_classifiers::config::ExperimentConfig;
use spamlearn_classifiers::experiment::{run_experiment, select_logistic};
use spamlearn_classifiers::math::Array2;
use spamlearn_classifiers::models::{LogisticParams, LogisticRegression, MultinomialNB};
use spamlearn_classifiers::selection::{
    grid_search, grid_search_parallel, search_lambda, ParamGrid, ParamSet, ParamValue,
};
use spamlearn_classifiers::ClassifierError;

fn logistic_factory(
    params: &ParamSet,
    x: &Array2<f64>,
    y: &[i32],
) -> spamlearn_classifiers::Result<LogisticRegression> {
    let base = LogisticParams {
        learning_rate: params.require_f64("learning_rate")?,
        max_iterations: 20,
        lambda_reg: params.require_f64("lambda_reg")?,
        seed: 5,
    };
    LogisticRegression::train(x, y, &base)
}

fn two_key_grid() -> ParamGrid {
    ParamGrid::new()
        .add("lambda_reg", [0.0, 1.0])
        .add("learning_rate", [0.01, 0.001])
}

#[test]
fn test_grid_search_visits_every_combination_in_order() {
    let train = common::corpus(8, 0);
    let validation = common::corpus(4, 1);
    let outcome = grid_search(&two_key_grid(), &train, &validation, logistic_factory).unwrap();

    assert_eq!(outcome.candidates.len(), 4);
    let order: Vec<(f64, f64)> = outcome
        .candidates
        .iter()
        .map(|c| {
            (
                c.params.require_f64("lambda_reg").unwrap(),
                c.params.require_f64("learning_rate").unwrap(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![(0.0, 0.01), (0.0, 0.001), (1.0, 0.01), (1.0, 0.001)]
    );

    let best = outcome
        .candidates
        .iter()
        .map(|c| c.f1)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(outcome.f1, best);
}

#[test]
fn test_grid_search_is_deterministic() {
    let train = common::corpus(8, 0);
    let validation = common::corpus(4, 1);
    let a = grid_search(&two_key_grid(), &train, &validation, logistic_factory).unwrap();
    let b = grid_search(&two_key_grid(), &train, &validation, logistic_factory).unwrap();
    assert_eq!(a.params, b.params);
    assert_eq!(a.candidates, b.candidates);
    assert_eq!(a.model, b.model);
}

#[test]
fn test_parallel_search_matches_sequential() {
    let train = common::corpus(8, 0);
    let validation = common::corpus(4, 1);
    let grid = two_key_grid().add("lambda_reg", [0.0, 0.01, 0.1, 1.0, 10.0]);
    let sequential = grid_search(&grid, &train, &validation, logistic_factory).unwrap();
    let parallel = grid_search_parallel(&grid, &train, &validation, logistic_factory).unwrap();
    assert_eq!(sequential.params, parallel.params);
    assert_eq!(sequential.f1, parallel.f1);
    assert_eq!(sequential.candidates, parallel.candidates);
    assert_eq!(sequential.model, parallel.model);
}

#[test]
fn test_ties_keep_first_candidate() {
    let train = common::corpus(6, 0);
    let validation = common::corpus(3, 2);
    let grid = ParamGrid::new().add("alpha", [3i64, 1, 2]);
    let outcome = grid_search(&grid, &train, &validation, |_, x, y| {
        MultinomialNB::train(x, y)
    })
    .unwrap();
    assert!(outcome.candidates.iter().all(|c| c.f1 == outcome.f1));
    assert_eq!(outcome.params.get("alpha"), Some(&ParamValue::Int(3)));
}

#[test]
fn test_factory_error_aborts_search() {
    let train = common::corpus(6, 0);
    let validation = common::corpus(3, 2);
    let grid = ParamGrid::new().add("lambda_reg", [0.1, f64::NAN]);
    let result = grid_search(&grid, &train, &validation, |params, x, y| {
        let params = LogisticParams::default().with_lambda(params.require_f64("lambda_reg")?);
        LogisticRegression::train(x, y, &params)
    });
    assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
}

#[test]
fn test_empty_grid_is_rejected() {
    let train = common::corpus(4, 0);
    let validation = common::corpus(2, 1);
    let grid = ParamGrid::new().add("lambda_reg", Vec::<f64>::new());
    let result = grid_search(&grid, &train, &validation, |_, x, y| MultinomialNB::train(x, y));
    assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
    assert!(search_lambda(&[], &LogisticParams::default(), &train, &validation, false).is_err());
}

#[test]
fn test_search_lambda_reports_winner() {
    let train = common::corpus(8, 0);
    let validation = common::corpus(4, 1);
    let lambdas = [0.001, 0.01, 0.1, 1.0];
    let outcome =
        search_lambda(&lambdas, &LogisticParams::default(), &train, &validation, false).unwrap();
    assert_eq!(outcome.candidates.len(), lambdas.len());
    assert!(lambdas.contains(&outcome.lambda));

    let first_best = outcome
        .candidates
        .iter()
        .position(|c| c.f1 == outcome.f1)
        .unwrap();
    assert_eq!(
        outcome.candidates[first_best].params.require_f64("lambda_reg").unwrap(),
        outcome.lambda
    );

    let parallel =
        search_lambda(&lambdas, &LogisticParams::default(), &train, &validation, true).unwrap();
    assert_eq!(parallel.lambda, outcome.lambda);
    assert_eq!(parallel.model, outcome.model);
}

#[test]
fn test_select_logistic_refits_on_all_rows() {
    let train = common::corpus(10, 0);
    let config = ExperimentConfig::default();
    let (model, outcome) = select_logistic(&train, &config).unwrap();
    assert_eq!(model.n_features(), train.n_features());
    assert!(config.lambda_grid.contains(&outcome.lambda));
    // the refit sees train ∪ validation, so it differs from the search model
    assert_ne!(model, outcome.model);
}

#[test]
fn test_run_experiment_end_to_end() {
    let train = common::corpus(10, 0);
    let test = common::corpus(5, 3);
    let report = run_experiment(&train, &test, &ExperimentConfig::default()).unwrap();

    assert_eq!(report.train_documents, 20);
    assert_eq!(report.test_documents, 10);
    assert_eq!(report.n_features, 4);
    assert_eq!(report.multinomial_nb.accuracy, 1.0);
    assert_eq!(report.bernoulli_nb.accuracy, 1.0);
    for logistic in [&report.logistic_counts, &report.logistic_presence] {
        assert_eq!(logistic.candidates.len(), 4);
        assert!((0.0..=1.0).contains(&logistic.test.f1));
        assert!((0.0..=1.0).contains(&logistic.validation_f1));
    }

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["logistic_counts"]["lambda"].is_number());
}

#[test]
fn test_run_experiment_rejects_vocabulary_mismatch() {
    let train = common::corpus(4, 0);
    let test = common::corpus(2, 0);
    let narrow = test
        .with_features(Array2::zeros(test.n_samples(), 3))
        .unwrap();
    assert!(run_experiment(&train, &narrow, &ExperimentConfig::default()).is_err());
}

#[test]
fn test_experiment_config_json_defaults() {
    let config: ExperimentConfig =
        serde_json::from_str(r#"{"lambda_grid": [0.5], "logistic": {"max_iterations": 50}}"#)
            .unwrap();
    assert_eq!(config.lambda_grid, vec![0.5]);
    assert_eq!(config.logistic.max_iterations, 50);
    assert_eq!(config.logistic.learning_rate, 0.01);
    assert_eq!(config.validation_fraction, 0.3);
    assert_eq!(config.split_seed, 42);
    assert!(!config.parallel);
}
