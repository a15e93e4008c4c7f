//! Input checks shared by the trainers and predictors.
use crate::error::{ClassifierError, Result};
use crate::math::Array2;

/// Labels must be 0 (ham) or 1 (spam).
pub(crate) fn check_labels(y: &[i32]) -> Result<()> {
    if let Some((idx, &label)) = y.iter().enumerate().find(|(_, &l)| l != 0 && l != 1) {
        return Err(ClassifierError::invalid_input(format!(
            "label {} at row {} is not a binary 0/1 label",
            label, idx
        )));
    }
    Ok(())
}

/// Training input: non-empty, at least one column, one label per row.
pub(crate) fn check_training_input(x: &Array2<f64>, y: &[i32]) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(ClassifierError::invalid_input(format!(
            "feature matrix has {} rows but {} labels were given",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() == 0 {
        return Err(ClassifierError::invalid_input("no training examples"));
    }
    if x.ncols() == 0 {
        return Err(ClassifierError::invalid_input("feature matrix has no columns"));
    }
    check_labels(y)
}

/// Prediction input must match the vocabulary the model was trained on.
pub(crate) fn check_columns(x: &Array2<f64>, expected: usize) -> Result<()> {
    if x.ncols() != expected {
        return Err(ClassifierError::invalid_input(format!(
            "expected {} feature columns, got {}",
            expected,
            x.ncols()
        )));
    }
    Ok(())
}

/// Row indices carrying `label`, in row order.
pub(crate) fn class_indices(y: &[i32], label: i32) -> Vec<usize> {
    y.iter()
        .enumerate()
        .filter(|(_, &l)| l == label)
        .map(|(idx, _)| idx)
        .collect()
}

/// Number of (negative, positive) examples.
pub(crate) fn class_counts(y: &[i32]) -> (usize, usize) {
    let pos = y.iter().filter(|&&l| l == 1).count();
    (y.len() - pos, pos)
}

/// Both classes need at least one example for the priors to be defined.
pub(crate) fn check_both_classes(y: &[i32]) -> Result<(usize, usize)> {
    let (neg, pos) = class_counts(y);
    if neg == 0 || pos == 0 {
        let missing = if pos == 0 { 1 } else { 0 };
        return Err(ClassifierError::degenerate_input(format!(
            "class {} has no training examples",
            missing
        )));
    }
    Ok((neg, pos))
}
