/// Norms, weights and distances between vectors
/// Pairwise functions stop at the shorter of the two inputs

use crate::error::{Result, VecError};
use crate::ops::Operand;
use crate::scalar::Scalar;
use crate::vector::NumVec;
use num_traits::Zero;

/// Sum of squares
#[inline]
pub fn sum_of_squares(v: &[Scalar]) -> Scalar {
    v.iter().map(|&x| x * x).sum()
}

/// Compute vector magnitude (L2 norm)
#[inline]
pub fn magnitude(v: &[Scalar]) -> f64 {
    sum_of_squares(v).sqrt()
}

/// Sum of absolute values
#[inline]
pub fn l1_norm(v: &[Scalar]) -> Scalar {
    v.iter().map(|x| x.abs()).sum()
}

/// Count of nonzero elements
#[inline]
pub fn weight(v: &[Scalar]) -> usize {
    v.iter().filter(|x| !x.is_zero()).count()
}

/// Compute dot product of two vectors
#[inline]
pub fn dot_product(a: &[Scalar], b: &[Scalar]) -> Scalar {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// Compute Euclidean (L2) distance between two vectors
#[inline]
pub fn euclidean_distance(a: &[Scalar], b: &[Scalar]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = x - y;
            diff * diff
        })
        .sum::<Scalar>()
        .sqrt()
}

/// Compute Manhattan (L1) distance
#[inline]
pub fn manhattan_distance(a: &[Scalar], b: &[Scalar]) -> Scalar {
    a.iter().zip(b.iter()).map(|(&x, &y)| (x - y).abs()).sum()
}

/// Positions whose difference is odd
#[inline]
pub fn hamming_distance(a: &[Scalar], b: &[Scalar]) -> usize {
    let two = Scalar::Int(2);
    a.iter()
        .zip(b.iter())
        .filter(|&(&x, &y)| (x - y).floor_rem(two).is_some_and(|r| !r.is_zero()))
        .count()
}

impl NumVec {
    /// Sum of squares, or its square root when `square_root` is set
    pub fn norm(&self, square_root: bool) -> Scalar {
        if square_root {
            Scalar::Float(magnitude(self.values()))
        } else {
            sum_of_squares(self.values())
        }
    }

    /// Euclidean length as a plain float
    pub fn magnitude(&self) -> f64 {
        magnitude(self.values())
    }

    /// Count of nonzero elements, optionally restricted to `indices`
    pub fn weight(&self, indices: Option<&[usize]>) -> Result<usize> {
        match indices {
            None => Ok(weight(self.values())),
            Some(indices) => {
                let mut count = 0;
                for &index in indices {
                    if !self.checked(index)?.is_zero() {
                        count += 1;
                    }
                }
                Ok(count)
            }
        }
    }

    pub fn l1_norm(&self) -> Scalar {
        l1_norm(self.values())
    }

    pub fn l1_distance(&self, other: &NumVec) -> Scalar {
        manhattan_distance(self.values(), other.values())
    }

    /// Weight of `(self - other) mod 2`
    pub fn hamming_distance(&self, other: &NumVec) -> usize {
        hamming_distance(self.values(), other.values())
    }

    pub fn euclidean_distance(&self, other: &NumVec) -> f64 {
        euclidean_distance(self.values(), other.values())
    }

    /// Inner product against a plain coordinate sequence.
    ///
    /// Passing another vector fails with [`VecError::InnerProductWithVector`].
    pub fn inner<'a>(&self, coords: impl Into<Operand<'a>>) -> Result<Scalar> {
        match coords.into() {
            Operand::Sequence(seq) => Ok(dot_product(self.values(), seq)),
            Operand::Vector(_) => Err(VecError::InnerProductWithVector),
            rhs @ Operand::Scalar(_) => Err(VecError::UnsupportedOperand {
                op: "Inner product",
                operand: rhs.type_name(),
            }),
        }
    }
}
