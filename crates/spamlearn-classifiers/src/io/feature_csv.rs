//! Reader for labelled feature-matrix CSV files.
//!
//! One document per row, one vocabulary term per column, with the 0/1 class
//! label in a dedicated column (by default a trailing `label` column):
//!
//! ```text
//! free,meeting,offer,label
//! 2,0,1,1
//! 0,3,0,0
//! ```
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::Dataset;
use crate::math::{Array1, Array2};

/// Configuration for reading feature CSV files.
#[derive(Debug, Clone)]
pub struct FeatureCsvConfig {
    /// Column holding the 0/1 labels. Falls back to the last column when
    /// absent from the header (or when there is no header).
    pub label_column: String,
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for FeatureCsvConfig {
    fn default() -> Self {
        Self {
            label_column: "label".to_string(),
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Read a comma separated feature matrix with a header row.
pub fn read_feature_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_feature_csv_with_config(path, &FeatureCsvConfig::default())
}

pub fn read_feature_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &FeatureCsvConfig,
) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .from_path(&path)
        .with_context(|| format!("Failed to open feature file: {}", path.as_ref().display()))?;

    let headers = if config.has_headers {
        Some(
            reader
                .headers()
                .context("Failed to read feature header row")?
                .clone(),
        )
    } else {
        None
    };

    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut n_columns: Option<usize> = headers.as_ref().map(StringRecord::len);

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let width = *n_columns.get_or_insert(record.len());
        if record.len() != width {
            return Err(anyhow!(
                "Row {} has {} columns, expected {}",
                row_idx + 1,
                record.len(),
                width
            ));
        }
        let label_idx = label_index(headers.as_ref(), &config.label_column, width)?;

        let label = record
            .get(label_idx)
            .unwrap_or_default()
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid label at row {}", row_idx + 1))?;
        if label != 0.0 && label != 1.0 {
            return Err(anyhow!("Label {} at row {} is not 0 or 1", label, row_idx + 1));
        }
        labels.push(label as i32);

        for (idx, value) in record.iter().enumerate() {
            if idx == label_idx {
                continue;
            }
            let parsed = value.trim().parse::<f64>().with_context(|| {
                format!(
                    "Invalid feature '{}' at row {}",
                    column_name(headers.as_ref(), idx),
                    row_idx + 1
                )
            })?;
            features.push(parsed);
        }
    }

    let width = n_columns.ok_or_else(|| anyhow!("Feature file is empty"))?;
    let label_idx = label_index(headers.as_ref(), &config.label_column, width)?;
    let n_samples = labels.len();
    let x = Array2::from_shape_vec((n_samples, width - 1), features)
        .context("Failed to build feature matrix")?;

    let feature_names = (0..width)
        .filter(|&idx| idx != label_idx)
        .map(|idx| column_name(headers.as_ref(), idx))
        .collect();

    let dataset = Dataset::new(x, Array1::from_vec(labels))?.with_feature_names(feature_names)?;
    log::debug!(
        "Loaded {} documents x {} features from {}",
        dataset.n_samples(),
        dataset.n_features(),
        path.as_ref().display()
    );
    Ok(dataset)
}

fn label_index(headers: Option<&StringRecord>, label_column: &str, width: usize) -> Result<usize> {
    if width < 2 {
        return Err(anyhow!(
            "Feature file needs at least one feature column and a label column"
        ));
    }
    Ok(headers
        .and_then(|h| h.iter().position(|name| name.trim().eq_ignore_ascii_case(label_column)))
        .unwrap_or(width - 1))
}

fn column_name(headers: Option<&StringRecord>, idx: usize) -> String {
    headers
        .and_then(|h| h.get(idx))
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| format!("f{}", idx))
}
