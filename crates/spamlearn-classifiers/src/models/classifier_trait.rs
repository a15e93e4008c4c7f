use crate::error::Result;
use crate::math::Array2;

/// The capability every trained classifier shares.
///
/// Trainers are constructors (`train(x, y) -> Result<Self>`), so a value of a
/// type implementing this trait is always a fitted model. Training a model
/// chosen at runtime goes through [`ModelType`](crate::config::ModelType) and
/// [`train_model`](crate::models::factory::train_model). The model selector
/// and the experiment runner only rely on this trait, never on the concrete
/// classifier family.
pub trait ClassifierModel: Send + Sync {
    /// Predict one 0/1 label per row, in row order.
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>>;

    /// Human readable name for logs and reports.
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<M: ClassifierModel + ?Sized> ClassifierModel for Box<M> {
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<i32>> {
        (**self).predict(x)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
