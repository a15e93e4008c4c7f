//! Error taxonomy shared by every trainer, predictor and selector.
use thiserror::Error;

use crate::math::ShapeError;

/// Failures surfaced by the classifiers.
///
/// Nothing here is retried or silently corrected: shape problems and
/// nonsensical hyperparameters are `InvalidInput`, a class without any
/// training example is `DegenerateInput`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl ClassifierError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ClassifierError::InvalidInput(msg.into())
    }

    pub fn degenerate_input<S: Into<String>>(msg: S) -> Self {
        ClassifierError::DegenerateInput(msg.into())
    }
}

impl From<ShapeError> for ClassifierError {
    fn from(err: ShapeError) -> Self {
        ClassifierError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
