mod common;

use spamlearn_classifiers::config::{LogisticParams, ModelType};
use spamlearn_classifiers::metrics::accuracy;
use spamlearn_classifiers::models::factory::train_model;
use spamlearn_classifiers::preprocessing::binarize;

#[test]
fn test_factory_builds_and_predicts() {
    let train = common::corpus(10, 0);
    let test = common::corpus(5, 3);

    let multinomial = train_model(&ModelType::MultinomialNB, &train.x, train.labels()).unwrap();
    let predictions = multinomial.predict(&test.x).unwrap();
    assert_eq!(predictions.len(), test.n_samples());
    assert_eq!(accuracy(test.labels(), &predictions).unwrap(), 1.0);

    let bernoulli =
        train_model(&ModelType::BernoulliNB, &binarize(&train.x), train.labels()).unwrap();
    let predictions = bernoulli.predict(&binarize(&test.x)).unwrap();
    assert_eq!(accuracy(test.labels(), &predictions).unwrap(), 1.0);

    let params = LogisticParams {
        learning_rate: 0.01,
        max_iterations: 200,
        lambda_reg: 0.01,
        seed: 42,
    };
    let logistic =
        train_model(&ModelType::LogisticRegression(params), &train.x, train.labels()).unwrap();
    let predictions = logistic.predict(&test.x).unwrap();
    assert_eq!(accuracy(test.labels(), &predictions).unwrap(), 1.0);
}

#[test]
fn test_factory_rejects_raw_counts_for_bernoulli() {
    let train = common::corpus(4, 0);
    assert!(train_model(&ModelType::BernoulliNB, &train.x, train.labels()).is_err());
}

#[test]
fn test_model_type_parsing_and_json() {
    assert_eq!("Multinomial".parse::<ModelType>().unwrap(), ModelType::MultinomialNB);
    assert_eq!("discrete".parse::<ModelType>().unwrap(), ModelType::BernoulliNB);
    assert_eq!(
        "logistic".parse::<ModelType>().unwrap(),
        ModelType::LogisticRegression(LogisticParams::default())
    );
    assert!("svm".parse::<ModelType>().is_err());

    let json = r#"{"LogisticRegression": {"learning_rate": 0.5}}"#;
    let parsed: ModelType = serde_json::from_str(json).unwrap();
    match parsed {
        ModelType::LogisticRegression(params) => {
            assert_eq!(params.learning_rate, 0.5);
            assert_eq!(params.max_iterations, 5);
            assert_eq!(params.lambda_reg, 0.1);
        }
        other => panic!("unexpected model type {:?}", other),
    }
}
