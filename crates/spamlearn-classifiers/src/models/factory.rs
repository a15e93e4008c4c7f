use crate::config::ModelType;
use crate::error::Result;
use crate::math::Array2;
use crate::models::bernoulli_nb::BernoulliNB;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::LogisticRegression;
use crate::models::multinomial_nb::MultinomialNB;

/// Train the classifier described by `model_type` and box it behind the
/// shared [`ClassifierModel`] capability.
pub fn train_model(
    model_type: &ModelType,
    x: &Array2<f64>,
    y: &[i32],
) -> Result<Box<dyn ClassifierModel>> {
    let model: Box<dyn ClassifierModel> = match model_type {
        ModelType::MultinomialNB => Box::new(MultinomialNB::train(x, y)?),
        ModelType::BernoulliNB => Box::new(BernoulliNB::train(x, y)?),
        ModelType::LogisticRegression(params) => {
            Box::new(LogisticRegression::train(x, y, params)?)
        }
    };
    Ok(model)
}
