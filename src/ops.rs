/// Element-wise arithmetic, bitwise and comparison operations
/// Binary operations pair two vectors position by position up to the shorter
/// length, or broadcast a scalar over every element

use crate::error::{Result, VecError};
use crate::scalar::Scalar;
use crate::vector::NumVec;
use std::ops::{Add, BitXor, Div, Mul, Rem, Sub};

/// Right-hand side of a binary vector operation
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Vector(&'a NumVec),
    Scalar(Scalar),
    /// A plain coordinate sequence; only the inner product accepts it
    Sequence(&'a [Scalar]),
}

impl Operand<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Scalar(k) => k.type_name(),
            Operand::Sequence(_) => "sequence",
        }
    }
}

impl<'a> From<&'a NumVec> for Operand<'a> {
    fn from(v: &'a NumVec) -> Self {
        Operand::Vector(v)
    }
}

impl<'a> From<&'a [Scalar]> for Operand<'a> {
    fn from(seq: &'a [Scalar]) -> Self {
        Operand::Sequence(seq)
    }
}

impl<'a> From<&'a Vec<Scalar>> for Operand<'a> {
    fn from(seq: &'a Vec<Scalar>) -> Self {
        Operand::Sequence(seq)
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(k: Scalar) -> Self {
        Operand::Scalar(k)
    }
}

impl From<i64> for Operand<'_> {
    fn from(k: i64) -> Self {
        Operand::Scalar(Scalar::Int(k))
    }
}

impl From<i32> for Operand<'_> {
    fn from(k: i32) -> Self {
        Operand::Scalar(Scalar::Int(k as i64))
    }
}

impl From<f64> for Operand<'_> {
    fn from(k: f64) -> Self {
        Operand::Scalar(Scalar::Float(k))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    TrueDivide,
    FloorDivide,
    Modulo,
    Xor,
}

impl BinaryOp {
    pub(crate) fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Addition",
            BinaryOp::Subtract => "Subtraction",
            BinaryOp::Multiply => "Multiplication",
            BinaryOp::TrueDivide => "Division",
            BinaryOp::FloorDivide => "Floor division",
            BinaryOp::Modulo => "Modulo",
            BinaryOp::Xor => "Xor",
        }
    }

    fn apply(self, a: Scalar, b: Scalar) -> Result<Scalar> {
        let op = self.name();
        match self {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Subtract => Ok(a - b),
            BinaryOp::Multiply => Ok(a * b),
            BinaryOp::TrueDivide => a.true_div(b).ok_or(VecError::DivisionByZero { op }),
            BinaryOp::FloorDivide => a.floor_div(b).ok_or(VecError::DivisionByZero { op }),
            BinaryOp::Modulo => a.floor_rem(b).ok_or(VecError::DivisionByZero { op }),
            BinaryOp::Xor => a.xor(b).ok_or(VecError::UnsupportedOperand {
                op,
                operand: if a.is_int() { b.type_name() } else { a.type_name() },
            }),
        }
    }

    /// Scalar types each operation broadcasts
    fn check_scalar(self, k: Scalar) -> Result<()> {
        let op = self.name();
        match (self, k) {
            (BinaryOp::FloorDivide | BinaryOp::Xor, Scalar::Float(_)) => {
                Err(VecError::UnsupportedOperand { op, operand: "float" })
            }
            (BinaryOp::Modulo, Scalar::Float(_)) => {
                Err(VecError::NotImplemented { op, operand: "float" })
            }
            _ => Ok(()),
        }
    }
}

impl NumVec {
    pub(crate) fn zip_with(&self, other: &NumVec, f: impl Fn(Scalar, Scalar) -> Scalar) -> NumVec {
        self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect()
    }

    pub(crate) fn map_elements(&self, f: impl Fn(Scalar) -> Scalar) -> NumVec {
        self.iter().map(|&a| f(a)).collect()
    }

    pub(crate) fn binary(&self, rhs: Operand<'_>, op: BinaryOp) -> Result<NumVec> {
        match rhs {
            Operand::Vector(other) => self
                .iter()
                .zip(other.iter())
                .map(|(&a, &b)| op.apply(a, b))
                .collect(),
            Operand::Scalar(k) => {
                op.check_scalar(k)?;
                self.iter().map(|&a| op.apply(a, k)).collect()
            }
            Operand::Sequence(_) => Err(VecError::UnsupportedOperand {
                op: op.name(),
                operand: rhs.type_name(),
            }),
        }
    }

    /// `lhs op self[i]` for every element
    pub(crate) fn reflected(&self, lhs: Scalar, op: BinaryOp) -> Result<NumVec> {
        op.check_scalar(lhs)?;
        self.iter().map(|&a| op.apply(lhs, a)).collect()
    }

    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::Add)
    }

    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::Subtract)
    }

    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::Multiply)
    }

    /// Division producing floats
    pub fn true_divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::TrueDivide)
    }

    /// Division rounded toward negative infinity. Broadcasts integer scalars only.
    pub fn floor_divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::FloorDivide)
    }

    /// Remainder with the sign of the divisor.
    ///
    /// A float scalar divisor fails with [`VecError::NotImplemented`].
    pub fn modulo<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::Modulo)
    }

    /// Bitwise xor over integer elements and integer scalars
    pub fn xor<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<NumVec> {
        self.binary(rhs.into(), BinaryOp::Xor)
    }

    /// `lhs - self[i]`
    pub fn rsubtract(&self, lhs: impl Into<Scalar>) -> NumVec {
        let k = lhs.into();
        self.map_elements(|a| k - a)
    }

    /// `lhs / self[i]`
    pub fn rtrue_divide(&self, lhs: impl Into<Scalar>) -> Result<NumVec> {
        self.reflected(lhs.into(), BinaryOp::TrueDivide)
    }

    /// `lhs // self[i]`
    pub fn rfloor_divide(&self, lhs: impl Into<Scalar>) -> Result<NumVec> {
        self.reflected(lhs.into(), BinaryOp::FloorDivide)
    }

    /// `lhs mod self[i]`
    pub fn rmodulo(&self, lhs: impl Into<Scalar>) -> Result<NumVec> {
        self.reflected(lhs.into(), BinaryOp::Modulo)
    }

    fn all_pairs(&self, other: &NumVec, pred: impl Fn(&Scalar, &Scalar) -> bool) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| pred(a, b))
    }

    /// `self[i] < other[i]` at every paired position
    pub fn all_lt(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a < b)
    }

    pub fn all_le(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a <= b)
    }

    pub fn all_gt(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a > b)
    }

    pub fn all_ge(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a >= b)
    }

    /// Equal at every paired position; a longer tail on either side is ignored
    pub fn all_eq(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a == b)
    }

    /// Different at every paired position. Not the negation of [`all_eq`](Self::all_eq).
    pub fn all_ne(&self, other: &NumVec) -> bool {
        self.all_pairs(other, |a, b| a != b)
    }
}

macro_rules! impl_vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&NumVec> for &NumVec {
            type Output = NumVec;
            #[inline]
            fn $method(self, rhs: &NumVec) -> NumVec {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
    };
}

impl_vector_op!(Add, add, +);
impl_vector_op!(Sub, sub, -);
impl_vector_op!(Mul, mul, *);

impl Div<&NumVec> for &NumVec {
    type Output = Result<NumVec>;
    fn div(self, rhs: &NumVec) -> Result<NumVec> {
        self.true_divide(rhs)
    }
}

impl Rem<&NumVec> for &NumVec {
    type Output = Result<NumVec>;
    fn rem(self, rhs: &NumVec) -> Result<NumVec> {
        self.modulo(rhs)
    }
}

impl BitXor<&NumVec> for &NumVec {
    type Output = Result<NumVec>;
    fn bitxor(self, rhs: &NumVec) -> Result<NumVec> {
        self.xor(rhs)
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for &NumVec {
            type Output = NumVec;
            fn add(self, rhs: $t) -> NumVec {
                let k = Scalar::from(rhs);
                self.map_elements(|a| a + k)
            }
        }

        impl Add<&NumVec> for $t {
            type Output = NumVec;
            fn add(self, rhs: &NumVec) -> NumVec {
                rhs + self
            }
        }

        impl Sub<$t> for &NumVec {
            type Output = NumVec;
            fn sub(self, rhs: $t) -> NumVec {
                let k = Scalar::from(rhs);
                self.map_elements(|a| a - k)
            }
        }

        impl Sub<&NumVec> for $t {
            type Output = NumVec;
            fn sub(self, rhs: &NumVec) -> NumVec {
                rhs.rsubtract(self)
            }
        }

        impl Mul<$t> for &NumVec {
            type Output = NumVec;
            fn mul(self, rhs: $t) -> NumVec {
                let k = Scalar::from(rhs);
                self.map_elements(|a| a * k)
            }
        }

        impl Mul<&NumVec> for $t {
            type Output = NumVec;
            fn mul(self, rhs: &NumVec) -> NumVec {
                rhs * self
            }
        }

        impl Div<$t> for &NumVec {
            type Output = Result<NumVec>;
            fn div(self, rhs: $t) -> Result<NumVec> {
                self.true_divide(Scalar::from(rhs))
            }
        }

        impl Div<&NumVec> for $t {
            type Output = Result<NumVec>;
            fn div(self, rhs: &NumVec) -> Result<NumVec> {
                rhs.rtrue_divide(self)
            }
        }

        impl Rem<$t> for &NumVec {
            type Output = Result<NumVec>;
            fn rem(self, rhs: $t) -> Result<NumVec> {
                self.modulo(Scalar::from(rhs))
            }
        }

        impl Rem<&NumVec> for $t {
            type Output = Result<NumVec>;
            fn rem(self, rhs: &NumVec) -> Result<NumVec> {
                rhs.rmodulo(self)
            }
        }
    )*};
}

impl_scalar_ops!(i64, f64, Scalar);

impl BitXor<i64> for &NumVec {
    type Output = Result<NumVec>;
    fn bitxor(self, rhs: i64) -> Result<NumVec> {
        self.xor(rhs)
    }
}

impl BitXor<&NumVec> for i64 {
    type Output = Result<NumVec>;
    fn bitxor(self, rhs: &NumVec) -> Result<NumVec> {
        rhs.xor(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_add_pairs_to_shorter_length() {
        let a = NumVec::from_ints(&[1, 2, 3]);
        let b = NumVec::from_ints(&[10, 20]);
        let sum = &a + &b;
        assert_eq!(sum, NumVec::from_ints(&[11, 22]));
        assert_eq!(a.add(&b).unwrap(), sum);
    }

    #[test]
    fn scalar_broadcast() {
        let a = NumVec::from_ints(&[1, 2, 3]);
        assert_eq!(&a + 1, NumVec::from_ints(&[2, 3, 4]));
        assert_eq!(&a * 2.0, NumVec::from_floats(&[2.0, 4.0, 6.0]));
        assert_eq!(a.subtract(1).unwrap(), NumVec::from_ints(&[0, 1, 2]));
    }

    #[test]
    fn reflected_forms_are_mathematical() {
        let a = NumVec::from_ints(&[1, 2, 4]);
        assert_eq!(10 - &a, NumVec::from_ints(&[9, 8, 6]));
        assert_eq!((8 / &a).unwrap(), NumVec::from_floats(&[8.0, 4.0, 2.0]));
        assert_eq!(a.rfloor_divide(9).unwrap(), NumVec::from_ints(&[9, 4, 2]));
        assert_eq!((7 % &a).unwrap(), NumVec::from_ints(&[0, 1, 3]));
        assert_eq!(3 + &a, &a + 3);
        assert_eq!(3 * &a, &a * 3);
    }

    #[test]
    fn true_division_yields_floats() {
        let a = NumVec::from_ints(&[1, 2]);
        let b = NumVec::from_ints(&[2, 4]);
        assert_eq!((&a / &b).unwrap(), NumVec::from_floats(&[0.5, 0.5]));
    }

    #[test]
    fn division_by_zero_errors() {
        let a = NumVec::from_ints(&[1, 2]);
        assert_eq!(
            (&a / 0).unwrap_err(),
            VecError::DivisionByZero { op: "Division" }
        );
        assert!(a.floor_divide(&NumVec::from_ints(&[1, 0])).is_err());
    }

    #[test]
    fn floor_divide_rejects_float_scalar() {
        let a = NumVec::from_ints(&[3, 4]);
        assert_eq!(a.floor_divide(2).unwrap(), NumVec::from_ints(&[1, 2]));
        assert!(matches!(
            a.floor_divide(2.0),
            Err(VecError::UnsupportedOperand { operand: "float", .. })
        ));
    }

    #[test]
    fn modulo_by_float_scalar_is_not_implemented() {
        let a = NumVec::from_ints(&[3, 4]);
        assert_eq!(
            (&a % 1.5).unwrap_err(),
            VecError::NotImplemented { op: "Modulo", operand: "float" }
        );
        assert_eq!((&a % 2).unwrap(), NumVec::from_ints(&[1, 0]));
    }

    #[test]
    fn modulo_of_float_elements_is_floored() {
        let a = NumVec::from_floats(&[-1.5, 2.5]);
        let b = NumVec::from_ints(&[2, 2]);
        assert_eq!(a.modulo(&b).unwrap(), NumVec::from_floats(&[0.5, 0.5]));
    }

    #[test]
    fn xor_integers_only() {
        let a = NumVec::from_ints(&[1, 0, 1]);
        let b = NumVec::from_ints(&[1, 1, 0]);
        assert_eq!((&a ^ &b).unwrap(), NumVec::from_ints(&[0, 1, 1]));
        assert_eq!((&a ^ 1).unwrap(), NumVec::from_ints(&[0, 1, 0]));
        assert!(a.xor(1.0).is_err());
        let f = NumVec::from_floats(&[1.0]);
        assert!(matches!(
            f.xor(&a),
            Err(VecError::UnsupportedOperand { op: "Xor", operand: "float" })
        ));
    }

    #[test]
    fn sequence_operand_is_unsupported() {
        let a = NumVec::from_ints(&[1, 2]);
        let seq = vec![Scalar::Int(1)];
        assert_eq!(
            a.add(&seq).unwrap_err(),
            VecError::UnsupportedOperand { op: "Addition", operand: "sequence" }
        );
    }

    #[test]
    fn operands_are_left_unchanged() {
        let a = NumVec::from_ints(&[1, 2]);
        let b = NumVec::from_ints(&[3, 4]);
        let _ = &a + &b;
        let _ = a.multiply(5).unwrap();
        assert_eq!(a, NumVec::from_ints(&[1, 2]));
        assert_eq!(b, NumVec::from_ints(&[3, 4]));
    }

    #[test]
    fn comparisons_hold_at_every_position() {
        let a = NumVec::from_ints(&[1, 2]);
        assert!(a.all_lt(&NumVec::from_ints(&[2, 3])));
        assert!(!a.all_lt(&NumVec::from_ints(&[1, 3])));
        assert!(a.all_le(&NumVec::from_ints(&[1, 3])));
        assert!(NumVec::from_ints(&[5, 5]).all_gt(&a));
        assert!(a.all_ge(&a));
    }

    #[test]
    fn equality_ignores_longer_tail() {
        let a = NumVec::from_ints(&[1, 2]);
        let b = NumVec::from_ints(&[1, 2, 9]);
        assert!(a.all_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn all_ne_is_not_negated_eq() {
        let a = NumVec::from_ints(&[1, 2]);
        let b = NumVec::from_ints(&[1, 3]);
        assert!(!a.all_eq(&b));
        assert!(!a.all_ne(&b));
        assert!(a.all_ne(&NumVec::from_ints(&[0, 0])));
    }

    #[test]
    fn comparisons_with_empty_vector_hold_vacuously() {
        let empty = NumVec::default();
        let x = NumVec::from_ints(&[1, 2]);
        assert!(empty.all_lt(&x));
        assert!(empty.all_eq(&x));
        assert!(empty.all_ne(&x));
        assert!(x.all_gt(&empty));
    }
}
