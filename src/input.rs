/// Construction inputs and normalization
/// Every way of building a vector goes through the builder: typed inputs,
/// loosely typed JSON/JS inputs, sizing synonyms and the strictness policy

use crate::error::{Result, VecError};
use crate::scalar::Scalar;
use crate::vector::NumVec;
use num_traits::Zero;
use serde::Deserialize;
use std::collections::{BTreeMap, TryReserveError};

/// Grow `values` with zeros so that `index` is a valid position.
/// No-op when `index` is already in range. Fails without touching `values`
/// when the new length cannot be represented or allocated.
#[inline]
pub fn extend_to_index(values: &mut Vec<Scalar>, index: usize) -> Result<()> {
    let len = index
        .checked_add(1)
        .ok_or(VecError::IndexTooLarge { index })?;
    zero_fill(values, len).map_err(|_| VecError::IndexTooLarge { index })
}

fn zero_fill(values: &mut Vec<Scalar>, len: usize) -> std::result::Result<(), TryReserveError> {
    if len > values.len() {
        values.try_reserve_exact(len - values.len())?;
        values.resize(len, Scalar::zero());
    }
    Ok(())
}

/// One typed construction input
#[derive(Debug, Clone, PartialEq)]
pub enum VecInput {
    /// Appended as a single element
    Scalar(i64),
    /// Appended in order
    Sequence(Vec<Scalar>),
    /// Written at each index key, overwriting and zero-filling
    SparseMap(BTreeMap<usize, Scalar>),
    /// `value` written at every index in `indices`
    IndexValuePair { indices: Vec<usize>, value: Scalar },
    /// Values of another vector, appended verbatim
    Vector(NumVec),
}

impl VecInput {
    pub fn scalar(value: i64) -> Self {
        VecInput::Scalar(value)
    }

    pub fn sequence<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        VecInput::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub fn sparse<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
        T: Into<Scalar>,
    {
        VecInput::SparseMap(entries.into_iter().map(|(i, v)| (i, v.into())).collect())
    }

    pub fn pair<I, T>(indices: I, value: T) -> Self
    where
        I: IntoIterator<Item = usize>,
        T: Into<Scalar>,
    {
        VecInput::IndexValuePair {
            indices: indices.into_iter().collect(),
            value: value.into(),
        }
    }

    pub fn vector(vector: &NumVec) -> Self {
        VecInput::Vector(vector.clone())
    }

    /// Extends once to the largest index before writing, so a rejected
    /// input leaves `values` unchanged
    fn write_into(self, values: &mut Vec<Scalar>) -> Result<()> {
        match self {
            VecInput::Scalar(v) => values.push(Scalar::Int(v)),
            VecInput::Sequence(seq) => values.extend(seq),
            VecInput::Vector(other) => values.extend(other.into_values()),
            VecInput::SparseMap(entries) => {
                if let Some((&last, _)) = entries.last_key_value() {
                    extend_to_index(values, last)?;
                }
                for (index, value) in entries {
                    values[index] = value;
                }
            }
            VecInput::IndexValuePair { indices, value } => {
                if let Some(&max) = indices.iter().max() {
                    extend_to_index(values, max)?;
                }
                for index in indices {
                    values[index] = value;
                }
            }
        }
        Ok(())
    }
}

impl From<NumVec> for VecInput {
    fn from(vector: NumVec) -> Self {
        VecInput::Vector(vector)
    }
}

impl From<Vec<Scalar>> for VecInput {
    fn from(values: Vec<Scalar>) -> Self {
        VecInput::Sequence(values)
    }
}

/// Loosely typed construction input, as decoded from JSON or a JS value.
///
/// Variant order matters: serde tries them top to bottom.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Int(i64),
    Sequence(Vec<Scalar>),
    /// `[indices, value]`
    PairTuple((Vec<usize>, Scalar)),
    /// `{ "indices": [...], "value": v }`
    Pair { indices: Vec<usize>, value: Scalar },
    /// `{ "5": 9, ... }`
    Sparse(BTreeMap<String, Scalar>),
    Unsupported(serde_json::Value),
}

impl RawInput {
    /// Reconcile into a typed input
    pub fn into_input(self) -> Result<VecInput> {
        match self {
            RawInput::Int(v) => Ok(VecInput::Scalar(v)),
            RawInput::Sequence(values) => Ok(VecInput::Sequence(values)),
            RawInput::PairTuple((indices, value)) | RawInput::Pair { indices, value } => {
                Ok(VecInput::IndexValuePair { indices, value })
            }
            RawInput::Sparse(entries) => entries
                .into_iter()
                .map(|(key, value)| match key.parse::<usize>() {
                    Ok(index) => Ok((index, value)),
                    Err(_) => Err(VecError::UnsupportedInput(format!(
                        "mapping with non-index key {:?}",
                        key
                    ))),
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(VecInput::SparseMap),
            RawInput::Unsupported(value) => Err(VecError::UnsupportedInput(describe(&value))),
        }
    }
}

fn describe(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {}", b),
        Value::Number(n) => format!("float {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array of non-numeric values".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

/// Construction options.
///
/// `dim`, `size`, `length` and `len` are synonyms; the largest one wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub dim: Option<usize>,
    pub size: Option<usize>,
    pub length: Option<usize>,
    pub len: Option<usize>,
    /// Fail on unsupported inputs instead of skipping them
    pub strict: bool,
}

impl BuildOptions {
    /// Minimum dimension requested by any sizing synonym
    pub fn requested_dim(&self) -> usize {
        [self.dim, self.size, self.length, self.len]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0)
    }
}

/// Accumulates inputs into a single value sequence
#[derive(Debug, Default)]
pub struct VecBuilder {
    values: Vec<Scalar>,
    min_dim: usize,
    strict: bool,
}

impl VecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &BuildOptions) -> Self {
        VecBuilder {
            values: Vec::new(),
            min_dim: options.requested_dim(),
            strict: options.strict,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Request a minimum final dimension. Repeated calls keep the largest.
    pub fn min_dim(mut self, dim: usize) -> Self {
        self.min_dim = self.min_dim.max(dim);
        self
    }

    pub fn push(mut self, input: impl Into<VecInput>) -> Result<Self> {
        input.into().write_into(&mut self.values)?;
        Ok(self)
    }

    pub fn push_raw(mut self, raw: RawInput) -> Result<Self> {
        let written = raw
            .into_input()
            .and_then(|input| input.write_into(&mut self.values));
        match written {
            Ok(()) => Ok(self),
            Err(err) => self.reject(err),
        }
    }

    /// Apply the bad-input policy: skip with a warning, or fail when strict
    pub fn reject(self, err: VecError) -> Result<Self> {
        if self.strict {
            return Err(err);
        }
        log::warn!("{}; skipping construction argument", err);
        Ok(self)
    }

    pub fn build(self) -> Result<NumVec> {
        let mut values = self.values;
        let dim = self.min_dim;
        zero_fill(&mut values, dim).map_err(|_| VecError::DimensionTooLarge { dim })?;
        Ok(NumVec::from_values(values))
    }
}
