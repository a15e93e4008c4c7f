use spamlearn_classifiers::data_handling::Dataset;
use spamlearn_classifiers::math::{Array1, Array2};

/// Term counts over the vocabulary `[free, offer, meeting, report]`.
///
/// Spam rows lean on the first two terms, ham rows on the last two, with a
/// little cross-talk so the classes are not trivially disjoint.
pub fn corpus(n_per_class: usize, offset: usize) -> Dataset {
    let mut rows = Vec::with_capacity(2 * n_per_class);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for i in 0..n_per_class {
        let k = (i + offset) as f64;
        rows.push(vec![2.0 + k % 3.0, 1.0 + k % 2.0, (k % 4.0 == 0.0) as i32 as f64, 0.0]);
        labels.push(1);
        rows.push(vec![0.0, (k % 5.0 == 0.0) as i32 as f64, 1.0 + k % 2.0, 2.0 + k % 3.0]);
        labels.push(0);
    }
    let names = ["free", "offer", "meeting", "report"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Dataset::new(Array2::from_rows(rows).unwrap(), Array1::from_vec(labels))
        .unwrap()
        .with_feature_names(names)
        .unwrap()
}
