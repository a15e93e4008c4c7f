//! Parameter grids and the combinations they expand to.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// One candidate hyper-parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

/// One point of the search space: `(name, value)` pairs in grid order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    values: Vec<(String, ParamValue)>,
}

impl ParamSet {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric lookup that fails with `InvalidInput` when the value is missing
    /// or not a number.
    pub fn require_f64(&self, name: &str) -> Result<f64> {
        self.get(name).and_then(ParamValue::as_f64).ok_or_else(|| {
            ClassifierError::invalid_input(format!("parameter '{}' missing or not numeric", name))
        })
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (k, v)) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

/// Ordered mapping from parameter name to candidate values.
///
/// The search space is the cartesian product of all entries. Keys keep their
/// declaration order and the last key varies fastest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    entries: Vec<(String, Vec<ParamValue>)>,
}

impl ParamGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the candidates for `name`.
    pub fn add<S, I, V>(mut self, name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        let name = name.into();
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = values,
            None => self.entries.push((name, values)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Size of the cartesian product. An empty grid has exactly one
    /// (empty) combination.
    pub fn n_combinations(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).product()
    }

    /// Every combination, in search order.
    pub fn combinations(&self) -> Vec<ParamSet> {
        let total = self.n_combinations();
        let mut out = Vec::with_capacity(total);
        if total == 0 {
            return out;
        }

        // odometer over value indices, rightmost digit turns first
        let mut idx = vec![0usize; self.entries.len()];
        loop {
            out.push(ParamSet {
                values: self
                    .entries
                    .iter()
                    .zip(&idx)
                    .map(|((k, vals), &i)| (k.clone(), vals[i].clone()))
                    .collect(),
            });

            let mut pos = self.entries.len();
            loop {
                if pos == 0 {
                    return out;
                }
                pos -= 1;
                idx[pos] += 1;
                if idx[pos] < self.entries[pos].1.len() {
                    break;
                }
                idx[pos] = 0;
            }
        }
    }
}
