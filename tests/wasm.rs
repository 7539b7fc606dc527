//! wasm_bindgen_test tests for the JS-facing NumVec API
//!
//! Run with: wasm-pack test --headless --chrome
//! Or:       wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use numvec::*;

fn numbers(values: &[f64]) -> JsValue {
    let arr = Array::new();
    for &v in values {
        arr.push(&JsValue::from_f64(v));
    }
    arr.into()
}

fn args(items: &[JsValue]) -> Array {
    let arr = Array::new();
    for item in items {
        arr.push(item);
    }
    arr
}

fn vector(values: &[f64]) -> JsNumVec {
    JsNumVec::new(args(&[numbers(values)]), JsValue::UNDEFINED).unwrap()
}

// ── Construction ───────────────────────────────────────────────

#[wasm_bindgen_test]
fn new_from_numbers() {
    let v = vector(&[1.0, 2.0, 3.0]);
    assert_eq!(v.dim(), 3);
    assert_eq!(v.values(), vec![1.0, 2.0, 3.0]);
}

#[wasm_bindgen_test]
fn new_from_sparse_object() {
    let sparse = Object::new();
    Reflect::set(&sparse, &"5".into(), &JsValue::from_f64(9.0)).unwrap();
    let v = JsNumVec::new(args(&[sparse.into()]), JsValue::UNDEFINED).unwrap();
    assert_eq!(v.values(), vec![0.0, 0.0, 0.0, 0.0, 0.0, 9.0]);
}

#[wasm_bindgen_test]
fn new_from_pair_object() {
    let pair = Object::new();
    Reflect::set(&pair, &"indices".into(), &numbers(&[1.0, 3.0])).unwrap();
    Reflect::set(&pair, &"value".into(), &JsValue::from_f64(7.0)).unwrap();
    let v = JsNumVec::new(args(&[pair.into()]), JsValue::UNDEFINED).unwrap();
    assert_eq!(v.values(), vec![0.0, 7.0, 0.0, 7.0]);
}

#[wasm_bindgen_test]
fn new_with_size_option_pads() {
    let options = Object::new();
    Reflect::set(&options, &"size".into(), &JsValue::from_f64(4.0)).unwrap();
    let v = JsNumVec::new(args(&[numbers(&[1.0])]), options.into()).unwrap();
    assert_eq!(v.dim(), 4);
}

#[wasm_bindgen_test]
fn unsupported_input_skipped_or_rejected() {
    let items = [JsValue::from_str("abc"), numbers(&[1.0])];
    let v = JsNumVec::new(args(&items), JsValue::UNDEFINED).unwrap();
    assert_eq!(v.values(), vec![1.0]);

    let strict = Object::new();
    Reflect::set(&strict, &"strict".into(), &JsValue::TRUE).unwrap();
    assert!(JsNumVec::new(args(&items), strict.into()).is_err());
}

// ── Operations ─────────────────────────────────────────────────

#[wasm_bindgen_test]
fn arithmetic_and_metrics() {
    let a = vector(&[1.0, 0.0, 1.0, 1.0]);
    let b = vector(&[1.0, 1.0, 1.0, 0.0]);
    assert_eq!(a.add(&b).values(), vec![2.0, 1.0, 2.0, 1.0]);
    assert_eq!(a.xor(&b).unwrap().values(), vec![0.0, 1.0, 0.0, 1.0]);
    assert_eq!(a.hamming_distance(&b), 2);
    assert_eq!(vector(&[3.0, 4.0]).norm(None), 5.0);
    assert_eq!(vector(&[3.0, 4.0]).norm(Some(false)), 25.0);
}

#[wasm_bindgen_test]
fn scalar_ops_by_symbol() {
    let a = vector(&[1.0, 2.0, 4.0]);
    assert_eq!(a.apply_scalar("*", 2.0).unwrap().values(), vec![2.0, 4.0, 8.0]);
    assert_eq!(
        a.apply_scalar_reflected("-", 10.0).unwrap().values(),
        vec![9.0, 8.0, 6.0]
    );
    assert!(a.apply_scalar("%", 1.5).is_err());
    assert!(a.apply_scalar("?", 1.0).is_err());
}

#[wasm_bindgen_test]
fn grow_and_truncate_mutate_in_place() {
    let mut v = vector(&[1.0, 2.0, 3.0, 4.0]);
    v.truncate(2);
    assert_eq!(v.values(), vec![3.0, 4.0]);
    v.grow(3).unwrap();
    assert_eq!(v.values(), vec![3.0, 4.0, 0.0, 0.0]);
}

#[wasm_bindgen_test]
fn standalone_functions() {
    assert_eq!(hamming_distance(vec![1.0, 0.0], vec![0.0, 0.0]), 1);
    assert_eq!(euclidean_distance(vec![0.0, 0.0], vec![3.0, 4.0]), 5.0);
    assert_eq!(inner_product(vec![1.0, 2.0], vec![3.0, 4.0]), 11.0);
    assert_eq!(l1_distance(vec![1.0, -1.0], vec![0.0, 0.0]), 2.0);
}

#[wasm_bindgen_test]
fn formatting() {
    let v = vector(&[1.0, 0.0, 1.0]);
    assert_eq!(v.to_string_js(), "1 0 1");
    let options = Object::new();
    Reflect::set(&options, &"grouping".into(), &JsValue::from_f64(2.0)).unwrap();
    Reflect::set(&options, &"sep".into(), &"-".into()).unwrap();
    assert_eq!(v.format(options.into()).unwrap(), "10-1");
}
