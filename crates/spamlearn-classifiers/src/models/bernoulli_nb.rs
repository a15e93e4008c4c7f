//! Bernoulli (discrete) Naive Bayes over binary term-presence vectors.
use crate::error::{ClassifierError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{
    check_both_classes, check_columns, check_training_input, class_indices,
};
use crate::preprocessing::is_binary;

fn check_binary(x: &Array2<f64>) -> Result<()> {
    if !is_binary(x) {
        return Err(ClassifierError::invalid_input(
            "bernoulli naive bayes expects 0/1 presence indicators",
        ));
    }
    Ok(())
}

/// Trained Bernoulli model.
///
/// `cond_prob` has one row per class (row 0 = ham, row 1 = spam) and one
/// column per term, holding P(term present | class).
#[derive(Debug, Clone, PartialEq)]
pub struct BernoulliNB {
    priors: [f64; 2],
    cond_prob: Array2<f64>,
}

impl BernoulliNB {
    /// Fit class priors and presence probabilities with add-one/add-two
    /// smoothing: `(n_present + 1) / (n_class + 2)`.
    pub fn train(x: &Array2<f64>, y: &[i32]) -> Result<Self> {
        check_training_input(x, y)?;
        check_binary(x)?;
        let (n_neg, n_pos) = check_both_classes(y)?;
        let n = y.len() as f64;

        let class_sizes = [n_neg as f64, n_pos as f64];
        let cond_prob = Array2::from_rows(
            [0, 1]
                .iter()
                .zip(class_sizes)
                .map(|(&label, n_c)| {
                    // documents of this class containing each term
                    let present = x.select_rows(&class_indices(y, label)).sum_columns();
                    present
                        .iter()
                        .map(|c| (c + 1.0) / (n_c + 2.0))
                        .collect::<Vec<f64>>()
                })
                .collect(),
        )?;

        log::debug!(
            "Trained Bernoulli NB on {} documents ({} ham / {} spam), {} terms",
            y.len(),
            n_neg,
            n_pos,
            x.ncols()
        );

        Ok(BernoulliNB {
            priors: [class_sizes[0] / n, class_sizes[1] / n],
            cond_prob,
        })
    }

    /// `[P(ham), P(spam)]`.
    pub fn priors(&self) -> [f64; 2] {
        self.priors
    }

    /// P(term present | class) for `class` in {0, 1}.
    pub fn cond_prob(&self, class: usize) -> &[f64] {
        self.cond_prob.row_slice(class)
    }

    pub fn n_features(&self) -> usize {
        self.cond_prob.ncols()
    }

    /// `[log score ham, log score spam]` per row.
    pub fn log_scores(&self, x: &Array2<f64>) -> Result<Vec<[f64; 2]>> {
        check_columns(x, self.n_features())?;
        check_binary(x)?;

        let log_present = self.cond_prob.mapv(|p| p.ln());
        let log_absent = self.cond_prob.mapv(|p| (1.0 - p).ln());

        Ok(x
            .rows()
            .map(|row| {
                let mut scores = [0.0; 2];
                for (c, score) in scores.iter_mut().enumerate() {
                    *score = self.priors[c].ln()
                        + row
                            .iter()
                            .zip(log_present.row_slice(c).iter().zip(log_absent.row_slice(c)))
                            .map(|(&x_j, (lp, la))| x_j * lp + (1.0 - x_j) * la)
                            .sum::<f64>();
                }
                scores
            })
            .collect())
    }

    /// Spam when the spam score is at least the ham score; ties go to spam,
    /// unlike [`MultinomialNB`](crate::models::multinomial_nb::MultinomialNB).
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        Ok(self
            .log_scores(x)?
            .into_iter()
            .map(|[ham, spam]| i32::from(spam >= ham))
            .collect())
    }
}

impl ClassifierModel for BernoulliNB {
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        BernoulliNB::predict(self, x)
    }

    fn name(&self) -> &str {
        "bernoulli_nb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_rows_smoothing() {
        let x = Array2::<f64>::zeros(5, 4);
        let y = [1, 0, 0, 1, 0];
        let model = BernoulliNB::train(&x, &y).unwrap();
        for p in model.cond_prob(0).iter() {
            assert_eq!(*p, 1.0 / 5.0);
        }
        for p in model.cond_prob(1).iter() {
            assert_eq!(*p, 1.0 / 4.0);
        }
        let [ham, spam] = model.priors();
        assert!((ham + spam - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_presence_counts() {
        let x = Array2::from_rows(vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
        ])
        .unwrap();
        let model = BernoulliNB::train(&x, &[1, 1, 0]).unwrap();
        // spam: term 0 present twice of 2, term 1 once of 2
        assert_eq!(model.cond_prob(1).to_vec(), vec![3.0 / 4.0, 2.0 / 4.0]);
        assert_eq!(model.cond_prob(0).to_vec(), vec![1.0 / 3.0, 2.0 / 3.0]);
        assert_eq!(model.predict(&x).unwrap(), vec![1, 1, 0]);
    }

    #[test]
    fn test_interleaved_classes() {
        let x = Array2::from_rows(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ])
        .unwrap();
        let model = BernoulliNB::train(&x, &[1, 0, 1, 0]).unwrap();
        assert_eq!(model.cond_prob(1).to_vec(), vec![3.0 / 4.0, 2.0 / 4.0]);
        assert_eq!(model.cond_prob(0).to_vec(), vec![1.0 / 4.0, 2.0 / 4.0]);
    }

    #[test]
    fn test_tie_goes_to_positive() {
        let x = Array2::<f64>::zeros(2, 1);
        let model = BernoulliNB::train(&x, &[1, 0]).unwrap();
        assert_eq!(model.predict(&x).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_rejects_counts() {
        let x = Array2::from_rows(vec![vec![2.0], vec![0.0]]).unwrap();
        assert!(matches!(
            BernoulliNB::train(&x, &[1, 0]),
            Err(ClassifierError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_class_is_degenerate() {
        let x = Array2::<f64>::zeros(2, 2);
        assert!(matches!(
            BernoulliNB::train(&x, &[1, 1]),
            Err(ClassifierError::DegenerateInput(_))
        ));
    }
}
