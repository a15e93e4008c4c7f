//! Input helpers for already vectorized data.
pub mod feature_csv;

pub use feature_csv::{read_feature_csv, read_feature_csv_with_config, FeatureCsvConfig};
