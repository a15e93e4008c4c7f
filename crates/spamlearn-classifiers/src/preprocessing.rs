//! Small transforms applied to already vectorized feature matrices.

use crate::math::Array2;

/// Map term counts to presence indicators: any positive entry becomes `1.0`,
/// everything else `0.0`.
///
/// Turns a bag-of-words matrix into the 0/1 encoding Bernoulli Naive Bayes
/// expects, without re-running the vectorizer.
pub fn binarize(x: &Array2<f64>) -> Array2<f64> {
    x.mapv(|&v| if v > 0.0 { 1.0 } else { 0.0 })
}

/// `true` when every entry is exactly 0 or 1.
pub fn is_binary(x: &Array2<f64>) -> bool {
    x.as_slice().iter().all(|&v| v == 0.0 || v == 1.0)
}
