//! `spamlearn evaluate`: train every classifier family and score it on a
//! held-out test file.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use spamlearn_classifiers::config::ExperimentConfig;
use spamlearn_classifiers::experiment::{run_experiment, ExperimentReport};
use spamlearn_classifiers::io::read_feature_csv;

/// Run the full evaluation protocol on two feature CSV files.
pub fn evaluate_files<P: AsRef<Path>>(
    train_path: P,
    test_path: P,
    config: &ExperimentConfig,
) -> Result<ExperimentReport> {
    let train = read_feature_csv(&train_path)?;
    let test = read_feature_csv(&test_path)?;
    if let (Some(train_names), Some(test_names)) = (&train.feature_names, &test.feature_names) {
        if train_names != test_names {
            log::warn!(
                "[spamlearn] Feature headers of {} and {} differ; columns are matched by position",
                train_path.as_ref().display(),
                test_path.as_ref().display()
            );
        }
    }
    let report = run_experiment(&train, &test, config).context("Evaluation failed")?;
    Ok(report)
}

/// Serialize `value` as pretty JSON to `output`, or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)
                .context("Failed to serialize report")?;
            writeln!(writer)?;
            writer.flush()?;
            log::info!("[spamlearn] Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, value)
                .context("Failed to serialize report")?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
