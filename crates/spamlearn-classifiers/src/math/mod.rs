//! Row-major containers for feature matrices and label/weight vectors.
//!
//! `Array2` holds one document per row and one vocabulary term per column.
//! `Array1` backs the per-feature parameter vectors of the trained models.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
