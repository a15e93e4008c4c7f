pub mod bernoulli_nb;
pub mod logistic;
pub mod multinomial_nb;
pub(crate) mod utils;

pub mod classifier_trait;
pub mod factory;

pub use bernoulli_nb::BernoulliNB;
pub use classifier_trait::ClassifierModel;
pub use logistic::{sigmoid, LogisticParams, LogisticRegression};
pub use multinomial_nb::MultinomialNB;
