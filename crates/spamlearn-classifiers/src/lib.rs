//! spamlearn-classifiers: hand-rolled binary classifiers for spam filtering.
//!
//! This crate implements multinomial and Bernoulli Naive Bayes and
//! L2-regularized logistic regression from first principles, together with
//! the metrics and the validation-split grid search that drive model
//! selection. Inputs are already vectorized: a document-term matrix and a
//! vector of 0 (ham) / 1 (spam) labels.
//!
//! Tokenization and vectorization live outside this crate; [`io`] only reads
//! matrices that were vectorized elsewhere.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod experiment;
pub mod io;
pub mod math;
pub mod metrics;
pub mod models;
pub mod preprocessing;
pub mod selection;

pub use error::{ClassifierError, Result};
