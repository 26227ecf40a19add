//! Coercion rules of the reference engine.
//!
//! These are the engine's own ToBoolean/ToNumber/ToString analogs; the
//! bridge impl exposes them but does not define them. All three are total —
//! numeric coercion reports failure as NaN, and the bridge decides what to
//! do with that.

use crate::value::{Repr, ScriptValue};

/// Truthiness: undefined, null, `false`, ±0, NaN, the empty string, and the
/// empty handle are false; everything else, object shapes included, is true.
pub(crate) fn truthy(value: &ScriptValue) -> bool {
    match value.repr() {
        Repr::Empty | Repr::Undefined | Repr::Null => false,
        Repr::Bool(b) => *b,
        Repr::Number(n) => !n.is_nan() && *n != 0.0,
        Repr::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Numeric coercion; NaN signals failure (and a NaN source passes through
/// the same way).
pub(crate) fn number(value: &ScriptValue) -> f64 {
    match value.repr() {
        Repr::Number(n) => *n,
        Repr::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Repr::Null => 0.0,
        Repr::String(s) => parse_number(s),
        Repr::Date(ms) => *ms,
        // Undefined, the empty handle, and the remaining object shapes do
        // not coerce to a number.
        _ => f64::NAN,
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            // The engine's numeric grammar is decimal only. f64's own parser
            // would also accept "inf"/"infinity"/"nan" spellings, so any
            // letter other than an exponent marker rejects the input first.
            if trimmed
                .chars()
                .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
            {
                f64::NAN
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

/// String coercion: the engine's textual representation of every value
pub(crate) fn text(value: &ScriptValue) -> String {
    match value.repr() {
        // The empty handle coerces like undefined.
        Repr::Empty | Repr::Undefined => "undefined".to_string(),
        Repr::Null => "null".to_string(),
        Repr::Bool(b) => b.to_string(),
        Repr::Number(n) => format_number(*n),
        Repr::String(s) => s.to_string(),
        Repr::ArrayBuffer(_) => "[object ArrayBuffer]".to_string(),
        Repr::View(_) => "[object ArrayBufferView]".to_string(),
        Repr::Bytes(_) => "[object ByteBuffer]".to_string(),
        Repr::Date(ms) => format!("[date {}]", format_number(*ms)),
        Repr::Array(arr) => arr
            .to_vec()
            .iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(","),
        Repr::Object(_) => "[object Object]".to_string(),
        Repr::Function(func) => format!("[function {}]", func.name()),
    }
}

// Array elements stringify with holes for null/undefined.
fn element_text(value: &ScriptValue) -> String {
    match value.repr() {
        Repr::Empty | Repr::Undefined | Repr::Null => String::new(),
        _ => text(value),
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // Both zeros print without sign.
        "0".to_string()
    } else {
        n.to_string()
    }
}
