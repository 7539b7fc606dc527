/// Vector data structure and structural operations

use crate::error::{Result, VecError};
use crate::input::{extend_to_index, BuildOptions, RawInput, VecBuilder, VecInput};
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Shl, Shr, ShrAssign};

/// A resizable, zero-padded numeric vector.
///
/// The dimension is always the number of stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumVec {
    values: Vec<Scalar>,
}

/// Options for grouped printing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Elements per chunk
    pub grouping: usize,
    /// Separator placed between chunks
    pub sep: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            grouping: 1,
            sep: ",".to_string(),
        }
    }
}

impl NumVec {
    /// Build a vector from typed inputs.
    ///
    /// Fails only when an index cannot be reached by zero-filling.
    pub fn new<I>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = VecInput>,
    {
        inputs
            .into_iter()
            .try_fold(VecBuilder::new(), |builder, input| builder.push(input))?
            .build()
    }

    /// Build a vector from typed inputs, zero-padded to at least `dim`
    pub fn with_dim<I>(inputs: I, dim: usize) -> Result<Self>
    where
        I: IntoIterator<Item = VecInput>,
    {
        inputs
            .into_iter()
            .try_fold(VecBuilder::new().min_dim(dim), |builder, input| builder.push(input))?
            .build()
    }

    /// Build a vector from loosely typed inputs.
    ///
    /// Unsupported inputs are skipped with a warning unless `options.strict`.
    pub fn from_raw<I>(inputs: I, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = RawInput>,
    {
        let mut builder = VecBuilder::with_options(options);
        for raw in inputs {
            builder = builder.push_raw(raw)?;
        }
        builder.build()
    }

    /// All-zero vector of the given dimension
    pub fn zeros(dim: usize) -> Result<Self> {
        VecBuilder::new().min_dim(dim).build()
    }

    pub fn from_ints(values: &[i64]) -> Self {
        values.iter().copied().map(Scalar::Int).collect()
    }

    pub fn from_floats(values: &[f64]) -> Self {
        values.iter().copied().map(Scalar::Float).collect()
    }

    pub(crate) fn from_values(values: Vec<Scalar>) -> Self {
        NumVec { values }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Scalar> {
        self.values
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    /// Values as floats, for callers that need plain numbers
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.as_f64()).collect()
    }

    /// Gather `self[i]` for each `i` in `indices`, in order
    pub fn slice(&self, indices: &[usize]) -> Result<NumVec> {
        indices
            .iter()
            .map(|&index| self.checked(index))
            .collect::<Result<Vec<_>>>()
            .map(NumVec::from_values)
    }

    /// Same as [`slice`](Self::slice)
    pub fn permute(&self, indices: &[usize]) -> Result<NumVec> {
        self.slice(indices)
    }

    pub fn abs(&self) -> NumVec {
        self.values.iter().map(|v| v.abs()).collect()
    }

    /// Grow in place so that `index` is valid, zero-filling the gap.
    /// On error the vector is left as it was.
    pub fn grow_to_index(&mut self, index: usize) -> Result<&mut Self> {
        extend_to_index(&mut self.values, index)?;
        log::debug!("grow to index {}: dim {}", index, self.dim());
        Ok(self)
    }

    /// Keep only the last `n` elements, in place.
    /// `n == 0` keeps nothing, and `n` past the length keeps everything.
    pub fn truncate_to_last(&mut self, n: usize) -> &mut Self {
        let start = self.values.len().saturating_sub(n);
        self.values.drain(..start);
        log::debug!("truncate to last {}: dim {}", n, self.dim());
        self
    }

    /// Chunk the elements by `grouping`, concatenate each chunk, and join
    /// chunks with `sep`. A grouping of zero is treated as one.
    pub fn format_grouped(&self, options: &PrintOptions) -> String {
        self.values
            .chunks(options.grouping.max(1))
            .map(|chunk| chunk.iter().map(|v| v.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join(&options.sep)
    }

    /// Write [`format_grouped`](Self::format_grouped) as one line
    pub fn print(&self, options: &PrintOptions) {
        let line = self.format_grouped(options);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&line.into());
        #[cfg(not(target_arch = "wasm32"))]
        println!("{}", line);
    }

    pub(crate) fn checked(&self, index: usize) -> Result<Scalar> {
        self.get(index).ok_or(VecError::IndexOutOfRange {
            index,
            dim: self.dim(),
        })
    }
}

impl Index<usize> for NumVec {
    type Output = Scalar;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a NumVec {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<Scalar> for NumVec {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        NumVec::from_values(iter.into_iter().collect())
    }
}

impl From<Vec<Scalar>> for NumVec {
    fn from(values: Vec<Scalar>) -> Self {
        NumVec::from_values(values)
    }
}

impl From<Vec<i64>> for NumVec {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().map(Scalar::Int).collect()
    }
}

impl From<Vec<f64>> for NumVec {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().map(Scalar::Float).collect()
    }
}

impl ShrAssign<usize> for NumVec {
    fn shr_assign(&mut self, n: usize) {
        self.truncate_to_last(n);
    }
}

impl Shl<usize> for NumVec {
    type Output = Result<NumVec>;
    fn shl(mut self, index: usize) -> Result<NumVec> {
        self.grow_to_index(index)?;
        Ok(self)
    }
}

impl Shr<usize> for NumVec {
    type Output = NumVec;
    fn shr(mut self, n: usize) -> NumVec {
        self.truncate_to_last(n);
        self
    }
}

impl fmt::Display for NumVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
