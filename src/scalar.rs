/// Element type for numeric vectors
/// Integer arithmetic stays integral until an operand is a float, a true
/// division happens, or the result would overflow `i64`

use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// Largest integer a JS number represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One vector element
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Convert a JS number, keeping integral values as `Int`
    pub fn from_js_number(n: f64) -> Scalar {
        if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
            Scalar::Int(n as i64)
        } else {
            Scalar::Float(n)
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    /// Type name used in error messages
    pub fn type_name(self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
        }
    }

    pub fn abs(self) -> Scalar {
        match self {
            Scalar::Int(v) => v
                .checked_abs()
                .map_or(Scalar::Float((v as f64).abs()), Scalar::Int),
            Scalar::Float(v) => Scalar::Float(v.abs()),
        }
    }

    /// True division, always a float. `None` for a zero divisor.
    pub fn true_div(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }
        Some(Scalar::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Division rounded toward negative infinity. `None` for a zero divisor.
    pub fn floor_div(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(match a.checked_div(b) {
                Some(q) if a % b != 0 && ((a % b < 0) != (b < 0)) => Scalar::Int(q - 1),
                Some(q) => Scalar::Int(q),
                None => Scalar::Float((a as f64 / b as f64).floor()),
            }),
            _ => Some(Scalar::Float((self.as_f64() / rhs.as_f64()).floor())),
        }
    }

    /// Remainder taking the sign of the divisor. `None` for a zero divisor.
    pub fn floor_rem(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => {
                let r = a.wrapping_rem(b);
                if r != 0 && ((r < 0) != (b < 0)) {
                    Some(Scalar::Int(r + b))
                } else {
                    Some(Scalar::Int(r))
                }
            }
            _ => {
                let (a, b) = (self.as_f64(), rhs.as_f64());
                let r = a % b;
                if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                    Some(Scalar::Float(r + b))
                } else {
                    Some(Scalar::Float(r))
                }
            }
        }
    }

    /// Bitwise xor, defined for integers only
    pub fn xor(self, rhs: Scalar) -> Option<Scalar> {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(Scalar::Int(a ^ b)),
            _ => None,
        }
    }

    #[inline]
    pub fn sqrt(self) -> f64 {
        self.as_f64().sqrt()
    }

    fn promote(
        self,
        rhs: Scalar,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => int_op(a, b)
                .map_or_else(|| Scalar::Float(float_op(a as f64, b as f64)), Scalar::Int),
            _ => Scalar::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

impl Add for Scalar {
    type Output = Scalar;
    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        self.promote(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        self.promote(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        self.promote(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar::Int(0) - self
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::Int(0)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Scalar::Int(v) => v == 0,
            Scalar::Float(v) => v == 0.0,
        }
    }
}

impl ToPrimitive for Scalar {
    fn to_i64(&self) -> Option<i64> {
        match *self {
            Scalar::Int(v) => Some(v),
            Scalar::Float(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {
            Scalar::Int(v) => v.to_u64(),
            Scalar::Float(v) => v.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a.partial_cmp(&b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::zero()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => write!(f, "{}", v),
            // integral floats keep a trailing ".0"
            Scalar::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            #[inline]
            fn from(v: $t) -> Self {
                Scalar::Int(v as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    #[inline]
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}
