//! Binary classification metrics.
//!
//! Every function takes the ground truth first and the predictions second.
//! Label `1` is the positive (spam) class; any other value counts as negative.
//! Rates whose denominator is zero evaluate to `0.0` rather than failing, since
//! "no positive predictions" is a legitimate classifier outcome.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Confusion {
    tp: usize,
    fp: usize,
    fn_: usize,
    agree: usize,
    total: usize,
}

fn confusion(y_true: &[i32], y_pred: &[i32]) -> Result<Confusion> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::invalid_input(format!(
            "label and prediction lengths differ ({} vs {})",
            y_true.len(),
            y_pred.len()
        )));
    }

    let mut c = Confusion {
        total: y_true.len(),
        ..Default::default()
    };
    for (&t, &p) in y_true.iter().zip(y_pred) {
        if t == p {
            c.agree += 1;
        }
        match (t == 1, p == 1) {
            (true, true) => c.tp += 1,
            (false, true) => c.fp += 1,
            (true, false) => c.fn_ += 1,
            (false, false) => {}
        }
    }
    Ok(c)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn harmonic(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * (precision * recall) / (precision + recall)
    }
}

/// Fraction of positions where truth and prediction agree. Empty input scores `0.0`.
pub fn accuracy(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    let c = confusion(y_true, y_pred)?;
    Ok(ratio(c.agree, c.total))
}

/// TP / (TP + FP).
pub fn precision(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    let c = confusion(y_true, y_pred)?;
    Ok(ratio(c.tp, c.tp + c.fp))
}

/// TP / (TP + FN).
pub fn recall(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    let c = confusion(y_true, y_pred)?;
    Ok(ratio(c.tp, c.tp + c.fn_))
}

/// Harmonic mean of precision and recall.
pub fn f1_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    let c = confusion(y_true, y_pred)?;
    Ok(harmonic(
        ratio(c.tp, c.tp + c.fp),
        ratio(c.tp, c.tp + c.fn_),
    ))
}

/// All four scores for one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ClassificationReport {
    pub fn evaluate(y_true: &[i32], y_pred: &[i32]) -> Result<Self> {
        let c = confusion(y_true, y_pred)?;
        let precision = ratio(c.tp, c.tp + c.fp);
        let recall = ratio(c.tp, c.tp + c.fn_);
        Ok(ClassificationReport {
            accuracy: ratio(c.agree, c.total),
            precision,
            recall,
            f1: harmonic(precision, recall),
        })
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "accuracy = {}", self.accuracy)?;
        writeln!(f, "precision = {}", self.precision)?;
        writeln!(f, "recall = {}", self.recall)?;
        write!(f, "f1_score = {}", self.f1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_on_mixed_predictions() {
        let y_true = [1, 1, 0, 0, 1, 0];
        let y_pred = [1, 0, 1, 0, 1, 0];
        // tp = 2, fp = 1, fn = 1, agree = 4
        assert!((accuracy(&y_true, &y_pred).unwrap() - 4.0 / 6.0).abs() < 1e-12);
        assert!((precision(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((recall(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((f1_score(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators() {
        let y_true = [0, 0, 0];
        let y_pred = [0, 0, 0];
        assert_eq!(precision(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(recall(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(f1_score(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(accuracy(&y_true, &y_pred).unwrap(), 1.0);
        assert_eq!(accuracy(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = f1_score(&[1, 0], &[1]).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
        assert!(ClassificationReport::evaluate(&[1], &[]).is_err());
    }

    #[test]
    fn test_report_display() {
        let report = ClassificationReport::evaluate(&[1, 0], &[1, 0]).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("accuracy = 1"));
        assert!(text.contains("f1_score = 1"));
    }
}
