pub mod distance;
mod error;
mod input;
mod ops;
mod scalar;
mod vector;

pub use error::{Result, VecError};
pub use input::{extend_to_index, BuildOptions, RawInput, VecBuilder, VecInput};
pub use ops::Operand;
pub use scalar::Scalar;
pub use vector::{NumVec, PrintOptions};

use ops::BinaryOp;
use wasm_bindgen::prelude::*;

fn to_js(err: VecError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn scalars(values: &[f64]) -> Vec<Scalar> {
    values.iter().copied().map(Scalar::from_js_number).collect()
}

/// Numeric vector class - exposed to JavaScript
#[wasm_bindgen(js_name = NumVec)]
pub struct JsNumVec {
    inner: NumVec,
}

impl From<NumVec> for JsNumVec {
    fn from(inner: NumVec) -> Self {
        JsNumVec { inner }
    }
}

#[wasm_bindgen(js_class = NumVec)]
impl JsNumVec {
    /// Create a vector from an array of inputs.
    ///
    /// Each input is a number, an array of numbers, `[indices, value]`,
    /// `{ indices, value }`, or a sparse `{ index: value }` object.
    /// `options` accepts `dim`/`size`/`length`/`len` and `strict`.
    #[wasm_bindgen(constructor)]
    pub fn new(args: js_sys::Array, options: JsValue) -> std::result::Result<JsNumVec, JsValue> {
        let options: BuildOptions = if options.is_null() || options.is_undefined() {
            BuildOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        let mut builder = VecBuilder::with_options(&options);
        for arg in args.iter() {
            builder = match serde_wasm_bindgen::from_value::<RawInput>(arg.clone()) {
                Ok(raw) => builder.push_raw(raw),
                Err(_) => {
                    let kind = arg.js_typeof().as_string().unwrap_or_default();
                    builder.reject(VecError::UnsupportedInput(kind))
                }
            }
            .map_err(to_js)?;
        }
        Ok(builder.build().map_err(to_js)?.into())
    }

    /// Number of elements
    pub fn dim(&self) -> usize {
        self.inner.dim()
    }

    /// Elements as plain numbers
    pub fn values(&self) -> Vec<f64> {
        self.inner.to_f64_vec()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.inner.get(index).map(Scalar::as_f64)
    }

    pub fn add(&self, other: &JsNumVec) -> JsNumVec {
        (&self.inner + &other.inner).into()
    }

    pub fn sub(&self, other: &JsNumVec) -> JsNumVec {
        (&self.inner - &other.inner).into()
    }

    pub fn mul(&self, other: &JsNumVec) -> JsNumVec {
        (&self.inner * &other.inner).into()
    }

    pub fn div(&self, other: &JsNumVec) -> std::result::Result<JsNumVec, JsValue> {
        self.vector_op(other, BinaryOp::TrueDivide)
    }

    #[wasm_bindgen(js_name = floorDiv)]
    pub fn floor_div(&self, other: &JsNumVec) -> std::result::Result<JsNumVec, JsValue> {
        self.vector_op(other, BinaryOp::FloorDivide)
    }

    pub fn rem(&self, other: &JsNumVec) -> std::result::Result<JsNumVec, JsValue> {
        self.vector_op(other, BinaryOp::Modulo)
    }

    pub fn xor(&self, other: &JsNumVec) -> std::result::Result<JsNumVec, JsValue> {
        self.vector_op(other, BinaryOp::Xor)
    }

    /// Broadcast an operation (`+ - * / // % ^`) with a scalar
    #[wasm_bindgen(js_name = applyScalar)]
    pub fn apply_scalar(&self, op: &str, k: f64) -> std::result::Result<JsNumVec, JsValue> {
        let op = parse_op(op)?;
        self.inner
            .binary(Operand::Scalar(Scalar::from_js_number(k)), op)
            .map(JsNumVec::from)
            .map_err(to_js)
    }

    /// Reflected scalar operation: `k op self[i]`
    #[wasm_bindgen(js_name = applyScalarReflected)]
    pub fn apply_scalar_reflected(&self, op: &str, k: f64) -> std::result::Result<JsNumVec, JsValue> {
        let op = parse_op(op)?;
        self.inner
            .reflected(Scalar::from_js_number(k), op)
            .map(JsNumVec::from)
            .map_err(to_js)
    }

    pub fn lt(&self, other: &JsNumVec) -> bool {
        self.inner.all_lt(&other.inner)
    }

    pub fn le(&self, other: &JsNumVec) -> bool {
        self.inner.all_le(&other.inner)
    }

    pub fn gt(&self, other: &JsNumVec) -> bool {
        self.inner.all_gt(&other.inner)
    }

    pub fn ge(&self, other: &JsNumVec) -> bool {
        self.inner.all_ge(&other.inner)
    }

    pub fn eq(&self, other: &JsNumVec) -> bool {
        self.inner.all_eq(&other.inner)
    }

    #[wasm_bindgen(js_name = allNe)]
    pub fn all_ne(&self, other: &JsNumVec) -> bool {
        self.inner.all_ne(&other.inner)
    }

    /// Euclidean norm, or the sum of squares when `sqrt` is false
    pub fn norm(&self, sqrt: Option<bool>) -> f64 {
        self.inner.norm(sqrt.unwrap_or(true)).as_f64()
    }

    pub fn weight(&self, indices: Option<Vec<usize>>) -> std::result::Result<usize, JsValue> {
        self.inner.weight(indices.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = l1Norm)]
    pub fn l1_norm(&self) -> f64 {
        self.inner.l1_norm().as_f64()
    }

    #[wasm_bindgen(js_name = l1Distance)]
    pub fn l1_distance(&self, other: &JsNumVec) -> f64 {
        self.inner.l1_distance(&other.inner).as_f64()
    }

    #[wasm_bindgen(js_name = hammingDistance)]
    pub fn hamming_distance(&self, other: &JsNumVec) -> usize {
        self.inner.hamming_distance(&other.inner)
    }

    #[wasm_bindgen(js_name = euclideanDistance)]
    pub fn euclidean_distance(&self, other: &JsNumVec) -> f64 {
        self.inner.euclidean_distance(&other.inner)
    }

    /// Inner product against a plain array of coordinates
    pub fn inner(&self, coords: Vec<f64>) -> f64 {
        let coords = scalars(&coords);
        distance::dot_product(self.inner.values(), &coords).as_f64()
    }

    pub fn slice(&self, indices: Vec<usize>) -> std::result::Result<JsNumVec, JsValue> {
        self.inner.slice(&indices).map(JsNumVec::from).map_err(to_js)
    }

    pub fn permute(&self, indices: Vec<usize>) -> std::result::Result<JsNumVec, JsValue> {
        self.inner.permute(&indices).map(JsNumVec::from).map_err(to_js)
    }

    pub fn abs(&self) -> JsNumVec {
        self.inner.abs().into()
    }

    /// Grow in place so that `index` is valid
    pub fn grow(&mut self, index: usize) -> std::result::Result<(), JsValue> {
        self.inner.grow_to_index(index).map_err(to_js)?;
        Ok(())
    }

    /// Keep only the last `n` elements, in place
    pub fn truncate(&mut self, n: usize) {
        self.inner.truncate_to_last(n);
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }

    /// Grouped string, see `print`
    pub fn format(&self, options: JsValue) -> std::result::Result<String, JsValue> {
        Ok(self.inner.format_grouped(&print_options(options)?))
    }

    /// Log the grouped elements as one line
    pub fn print(&self, options: JsValue) -> std::result::Result<(), JsValue> {
        self.inner.print(&print_options(options)?);
        Ok(())
    }
}

impl JsNumVec {
    fn vector_op(&self, other: &JsNumVec, op: BinaryOp) -> std::result::Result<JsNumVec, JsValue> {
        self.inner
            .binary(Operand::Vector(&other.inner), op)
            .map(JsNumVec::from)
            .map_err(to_js)
    }

    /// Borrow the wrapped vector
    pub fn as_vec(&self) -> &NumVec {
        &self.inner
    }
}

fn parse_op(op: &str) -> std::result::Result<BinaryOp, JsValue> {
    match op {
        "+" => Ok(BinaryOp::Add),
        "-" => Ok(BinaryOp::Subtract),
        "*" => Ok(BinaryOp::Multiply),
        "/" => Ok(BinaryOp::TrueDivide),
        "//" => Ok(BinaryOp::FloorDivide),
        "%" => Ok(BinaryOp::Modulo),
        "^" => Ok(BinaryOp::Xor),
        _ => Err(JsValue::from_str(&format!("Unknown operator: {}", op))),
    }
}

fn print_options(options: JsValue) -> std::result::Result<PrintOptions, JsValue> {
    if options.is_null() || options.is_undefined() {
        return Ok(PrintOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

/// Standalone distance functions exposed to JS
#[wasm_bindgen(js_name = hammingDistance)]
pub fn hamming_distance(a: Vec<f64>, b: Vec<f64>) -> usize {
    distance::hamming_distance(&scalars(&a), &scalars(&b))
}

#[wasm_bindgen(js_name = euclideanDistance)]
pub fn euclidean_distance(a: Vec<f64>, b: Vec<f64>) -> f64 {
    distance::euclidean_distance(&scalars(&a), &scalars(&b))
}

#[wasm_bindgen(js_name = l1Distance)]
pub fn l1_distance(a: Vec<f64>, b: Vec<f64>) -> f64 {
    distance::manhattan_distance(&scalars(&a), &scalars(&b)).as_f64()
}

#[wasm_bindgen(js_name = innerProduct)]
pub fn inner_product(a: Vec<f64>, b: Vec<f64>) -> f64 {
    distance::dot_product(&scalars(&a), &scalars(&b)).as_f64()
}
