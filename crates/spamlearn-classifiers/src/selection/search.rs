//! Validation-set grid search scored by F1.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data_handling::Dataset;
use crate::error::{ClassifierError, Result};
use crate::math::Array2;
use crate::metrics::f1_score;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::{LogisticParams, LogisticRegression};
use crate::selection::grid::{ParamGrid, ParamSet};

/// Regularization strengths tried when no explicit list is given.
pub const DEFAULT_LAMBDA_GRID: [f64; 4] = [0.001, 0.01, 0.1, 1.0];

/// Validation score of one evaluated combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub params: ParamSet,
    pub f1: f64,
}

/// Winner of a grid search plus every evaluated candidate in search order.
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    pub model: M,
    pub params: ParamSet,
    pub f1: f64,
    pub candidates: Vec<Candidate>,
}

/// Winner of a lambda search.
#[derive(Debug, Clone)]
pub struct LambdaOutcome {
    pub lambda: f64,
    pub model: LogisticRegression,
    pub f1: f64,
    pub candidates: Vec<Candidate>,
}

/// Best-so-far record. Replaced only on a strictly greater F1, so the
/// first-seen candidate wins ties.
struct BestRecord<M> {
    best: Option<(M, ParamSet, f64)>,
    candidates: Vec<Candidate>,
}

impl<M> BestRecord<M> {
    fn with_capacity(n: usize) -> Self {
        Self {
            best: None,
            candidates: Vec::with_capacity(n),
        }
    }

    fn offer(&mut self, model: M, params: ParamSet, f1: f64) {
        log::trace!("candidate {} scored validation F1 {:.4}", params, f1);
        self.candidates.push(Candidate {
            params: params.clone(),
            f1,
        });
        let improves = match &self.best {
            Some((_, _, best_f1)) => f1 > *best_f1,
            None => true,
        };
        if improves {
            self.best = Some((model, params, f1));
        }
    }

    fn finish(self) -> Result<SearchOutcome<M>> {
        let (model, params, f1) = self.best.ok_or_else(|| {
            ClassifierError::invalid_input("parameter grid produced no candidates")
        })?;
        log::info!("Selected {} with validation F1 {:.4}", params, f1);
        Ok(SearchOutcome {
            model,
            params,
            f1,
            candidates: self.candidates,
        })
    }
}

fn score<M: ClassifierModel>(model: &M, x: &Array2<f64>, y: &[i32]) -> Result<f64> {
    let predictions = model.predict(x)?;
    f1_score(y, &predictions)
}

/// Exhaustive search over `grid`.
///
/// For every combination (grid order) the factory trains a model on `train`,
/// which is then scored by F1 on `validation`. The first error from the
/// factory or from prediction aborts the search. The selector never refits:
/// callers retrain the winning combination on train ∪ validation.
pub fn grid_search<M, F>(
    grid: &ParamGrid,
    train: &Dataset,
    validation: &Dataset,
    mut factory: F,
) -> Result<SearchOutcome<M>>
where
    M: ClassifierModel,
    F: FnMut(&ParamSet, &Array2<f64>, &[i32]) -> Result<M>,
{
    let combinations = grid.combinations();
    let mut record = BestRecord::with_capacity(combinations.len());
    for params in combinations {
        let model = factory(&params, &train.x, train.labels())?;
        let f1 = score(&model, &validation.x, validation.labels())?;
        record.offer(model, params, f1);
    }
    record.finish()
}

/// [`grid_search`] with the candidates trained concurrently on the rayon pool.
///
/// Results are folded in grid order once every candidate has finished, so
/// the selection is identical to the sequential search.
pub fn grid_search_parallel<M, F>(
    grid: &ParamGrid,
    train: &Dataset,
    validation: &Dataset,
    factory: F,
) -> Result<SearchOutcome<M>>
where
    M: ClassifierModel,
    F: Fn(&ParamSet, &Array2<f64>, &[i32]) -> Result<M> + Sync,
{
    let combinations = grid.combinations();
    let scored: Vec<Result<(M, f64)>> = combinations
        .par_iter()
        .map(|params| {
            let model = factory(params, &train.x, train.labels())?;
            let f1 = score(&model, &validation.x, validation.labels())?;
            Ok((model, f1))
        })
        .collect();

    let mut record = BestRecord::with_capacity(combinations.len());
    for (params, result) in combinations.into_iter().zip(scored) {
        let (model, f1) = result?;
        record.offer(model, params, f1);
    }
    record.finish()
}

/// Tune `lambda_reg` alone; every other setting comes from `base`.
pub fn search_lambda(
    candidates: &[f64],
    base: &LogisticParams,
    train: &Dataset,
    validation: &Dataset,
    parallel: bool,
) -> Result<LambdaOutcome> {
    let grid = ParamGrid::new().add("lambda_reg", candidates.iter().copied());
    let factory = |params: &ParamSet, x: &Array2<f64>, y: &[i32]| {
        let lambda = params.require_f64("lambda_reg")?;
        LogisticRegression::train(x, y, &base.with_lambda(lambda))
    };
    let outcome = if parallel {
        grid_search_parallel(&grid, train, validation, factory)?
    } else {
        grid_search(&grid, train, validation, factory)?
    };
    Ok(LambdaOutcome {
        lambda: outcome.params.require_f64("lambda_reg")?,
        model: outcome.model,
        f1: outcome.f1,
        candidates: outcome.candidates,
    })
}
