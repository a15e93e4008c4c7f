//! Labelled feature matrices and the splits used for model selection.
//!
//! A `Dataset` pairs a document-term matrix with its 0/1 labels. It provides
//! the seeded train/validation split used while tuning hyper-parameters and
//! the union used to refit the winning configuration.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ClassifierError, Result};
use crate::math::{Array1, Array2};
use crate::models::utils::{check_labels, class_counts};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<i32>,
    /// Vocabulary, one name per column, when known.
    pub feature_names: Option<Vec<String>>,
}

impl Dataset {
    pub fn new(x: Array2<f64>, y: Array1<i32>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::invalid_input(format!(
                "feature matrix has {} rows but {} labels were given",
                x.nrows(),
                y.len()
            )));
        }
        check_labels(y.as_slice())?;
        Ok(Dataset {
            x,
            y,
            feature_names: None,
        })
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.x.ncols() {
            return Err(ClassifierError::invalid_input(format!(
                "{} feature names for {} columns",
                names.len(),
                self.x.ncols()
            )));
        }
        self.feature_names = Some(names);
        Ok(self)
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn labels(&self) -> &[i32] {
        self.y.as_slice()
    }

    /// `(ham, spam)` row counts.
    pub fn class_counts(&self) -> (usize, usize) {
        class_counts(self.labels())
    }

    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select_rows(indices),
            y: self.y.select(indices),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Same labels, features replaced by `x` (e.g. a binarized copy).
    pub fn with_features(&self, x: Array2<f64>) -> Result<Dataset> {
        Ok(Dataset {
            feature_names: self.feature_names.clone(),
            ..Dataset::new(x, self.y.clone())?
        })
    }

    /// Shuffle the rows with a seeded RNG and hold out
    /// `ceil(n * validation_fraction)` of them.
    ///
    /// Returns `(train, validation)`. Both halves must end up non-empty.
    pub fn train_validation_split(
        &self,
        validation_fraction: f64,
        seed: u64,
    ) -> Result<(Dataset, Dataset)> {
        if !(validation_fraction > 0.0 && validation_fraction < 1.0) {
            return Err(ClassifierError::invalid_input(format!(
                "validation_fraction must lie in (0, 1), got {}",
                validation_fraction
            )));
        }
        let n = self.n_samples();
        let n_validation = (n as f64 * validation_fraction).ceil() as usize;
        if n_validation == 0 || n_validation >= n {
            return Err(ClassifierError::invalid_input(format!(
                "cannot split {} rows with validation fraction {}",
                n, validation_fraction
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (train_idx, validation_idx) = indices.split_at(n - n_validation);
        log::trace!(
            "Split {} rows into {} train / {} validation (seed {})",
            n,
            train_idx.len(),
            validation_idx.len(),
            seed
        );
        Ok((self.select(train_idx), self.select(validation_idx)))
    }

    /// Rows of `self` followed by rows of `other`.
    pub fn concat(&self, other: &Dataset) -> Result<Dataset> {
        let x = self.x.vstack(&other.x).map_err(|_| {
            ClassifierError::invalid_input(format!(
                "cannot stack datasets with {} and {} features",
                self.n_features(),
                other.n_features()
            ))
        })?;
        let y = self.y.iter().chain(other.y.iter()).copied().collect();
        Ok(Dataset {
            x,
            y,
            feature_names: self.feature_names.clone(),
        })
    }

    pub fn log_summary(&self) {
        let (ham, spam) = self.class_counts();
        log::info!(
            "{} documents ({} ham / {} spam), {} features",
            self.n_samples(),
            ham,
            spam,
            self.n_features()
        );
    }
}
