//! Hyper-parameter selection on a held-out validation split.
pub mod grid;
pub mod search;

pub use grid::{ParamGrid, ParamSet, ParamValue};
pub use search::{
    grid_search, grid_search_parallel, search_lambda, Candidate, LambdaOutcome, SearchOutcome,
    DEFAULT_LAMBDA_GRID,
};
