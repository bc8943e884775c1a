//! Entry points for untyped input.
//!
//! These accept [`serde_json::Value`] arguments, as they arrive from JSON
//! payloads or command-line parsing, and check the string/number contract at
//! run time before handing off to the typed functions.

use crate::case::{self, Notation};
use crate::error::{Error, Result};
use crate::numeric;
use serde_json::Value;

pub fn convert(input: &Value, notation: Notation) -> Result<String> {
    Ok(case::convert(expect_str(input)?, notation))
}

pub fn to_camel_case(input: &Value) -> Result<String> {
    convert(input, Notation::Camel)
}

pub fn to_dot_case(input: &Value) -> Result<String> {
    convert(input, Notation::Dot)
}

pub fn to_kebab_case(input: &Value) -> Result<String> {
    convert(input, Notation::Kebab)
}

pub fn to_snake_case(input: &Value) -> Result<String> {
    convert(input, Notation::Snake)
}

/// Add two untyped values.
///
/// `None` and `null` are reported as missing before any type check, so
/// `add_numbers(None, Some(&json!("x")))` fails on `a`.
pub fn add_numbers(a: Option<&Value>, b: Option<&Value>) -> Result<f64> {
    let a = require(a, "a")?;
    let b = require(b, "b")?;
    numeric::add_numbers(expect_number(a)?, expect_number(b)?)
}

fn require<'a>(value: Option<&'a Value>, name: &'static str) -> Result<&'a Value> {
    match value {
        None | Some(Value::Null) => Err(Error::MissingArgument { name }),
        Some(v) => Ok(v),
    }
}

fn expect_str(value: &Value) -> Result<&str> {
    value.as_str().ok_or(Error::InvalidType {
        expected: "string",
        found: kind(value),
    })
}

fn expect_number(value: &Value) -> Result<f64> {
    value.as_f64().ok_or(Error::InvalidType {
        expected: "number",
        found: kind(value),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
