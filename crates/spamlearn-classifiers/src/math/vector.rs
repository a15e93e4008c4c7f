use std::iter::FromIterator;
use std::ops::{Add, Mul};
use std::slice::Iter;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn select(&self, indices: &[usize]) -> Array1<T>
    where
        T: Clone,
    {
        indices.iter().map(|&idx| self.data[idx].clone()).collect()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Inner product with a slice of the same length.
    pub fn dot(&self, other: &[T]) -> T
    where
        T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "Dot product requires equal length vectors"
        );
        dot(&self.data, other)
    }
}

/// Scalar inner product of two equal-length slices.
pub fn dot<T>(lhs: &[T], rhs: &[T]) -> T
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}
