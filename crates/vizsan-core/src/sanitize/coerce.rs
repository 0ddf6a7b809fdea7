//! Total coercions from loosely typed JSON values.
//!
//! Every function here returns `None` instead of failing, so a bad value
//! only ever costs the caller the one field it was reading. Nothing is
//! defaulted: absence is the only failure signal.

use serde_json::Value;

/// Coerce a JSON number or numeric string to a finite `f64`.
///
/// Booleans are not numbers. `NaN` and infinities are rejected because they
/// have no JSON representation and no renderer meaning.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce a value to an integer.
///
/// Accepts integers, integral floats (`2.0`), and strings holding either.
/// Fractional values are rejected rather than truncated.
pub fn index(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| integral(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| integral(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn integral(n: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the exclusive upper bound is 2^63.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    (n.is_finite() && n.fract() == 0.0 && (-BOUND..BOUND).contains(&n)).then(|| n as i64)
}

/// Coerce a scalar to a string.
///
/// Numbers and booleans use their JSON text. `null` and containers have no
/// sensible string form and yield `None`.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a sequence whose every element is numeric.
///
/// All-or-nothing: one bad element, a non-array, or an empty array yields
/// `None`. Element order is preserved.
pub fn number_list(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(number).collect()
}
