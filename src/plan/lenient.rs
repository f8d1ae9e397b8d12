//! Lenient field decoders
//!
//! The planning backend is an LLM agent stitching tool outputs together, so
//! any field may arrive as the wrong JSON type. These `deserialize_with`
//! helpers never fail: a value that cannot be read becomes `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::Price;

/// Read a display string. Numbers are stringified; blanks are absent.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(&Value::deserialize(deserializer)?))
}

/// Read a finite float from a number or a numeric string.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(float(&Value::deserialize(deserializer)?))
}

/// Read a non-negative count from a number or a numeric string.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(count)
}

/// Read a price, keeping strings verbatim.
pub fn price<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let price = match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(Price::Amount),
        Value::String(s) if !s.trim().is_empty() => Some(Price::Text(s)),
        _ => None,
    };
    Ok(price)
}

pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f: &f64| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_accepts_strings_and_numbers() {
        assert_eq!(text(&json!("Navy Pier")), Some("Navy Pier".to_string()));
        assert_eq!(text(&json!(42)), Some("42".to_string()));
        assert_eq!(text(&json!("   ")), None);
        assert_eq!(text(&json!({"nested": true})), None);
        assert_eq!(text(&Value::Null), None);
    }

    #[test]
    fn test_float_rejects_garbage() {
        assert_eq!(float(&json!(41.8781)), Some(41.8781));
        assert_eq!(float(&json!(" -87.6298 ")), Some(-87.6298));
        assert_eq!(float(&json!("north-ish")), None);
        assert_eq!(float(&json!("NaN")), None);
        assert_eq!(float(&json!([1, 2])), None);
    }
}
