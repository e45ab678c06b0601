//! Numeric-or-opaque amount values
//!
//! SimpleFIN delivers balances and transaction amounts either as JSON
//! numbers or as strings, and the strings are not guaranteed to be numeric.
//! `Amount` captures the outcome of the parse attempt once, at
//! deserialization time, so every later consumer (totals, rendering) can
//! match on it instead of re-parsing or catching failures.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// The result of coercing a feed value to a number
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// The value was a number, or a string that parses as one
    Number(f64),
    /// Anything else, preserved verbatim for display
    Text(String),
}

impl Amount {
    /// Parse a raw string the way the feed values are coerced
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Get the numeric value, if there is one
    pub fn number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Check whether the value participates in numeric totals
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Self::Number(f),
                _ => Self::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Self::parse(&s),
            other => Self::Text(other.to_string()),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_string() {
        assert_eq!(Amount::parse("1234.56"), Amount::Number(1234.56));
        assert_eq!(Amount::parse("-50"), Amount::Number(-50.0));
        assert_eq!(Amount::parse(" 10.5 "), Amount::Number(10.5));
    }

    #[test]
    fn test_parse_opaque_string() {
        assert_eq!(Amount::parse("N/A"), Amount::Text("N/A".into()));
        assert_eq!(Amount::parse(""), Amount::Text("".into()));
        assert_eq!(Amount::parse("$10.50"), Amount::Text("$10.50".into()));
    }

    #[test]
    fn test_deserialize_number() {
        let amount: Amount = serde_json::from_str("1000.25").unwrap();
        assert_eq!(amount, Amount::Number(1000.25));
    }

    #[test]
    fn test_deserialize_string_forms() {
        let amount: Amount = serde_json::from_str(r#""200.00""#).unwrap();
        assert_eq!(amount, Amount::Number(200.0));

        let amount: Amount = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(amount, Amount::Text("pending".into()));
    }

    #[test]
    fn test_deserialize_unexpected_type() {
        // Not a number or string, but the record must not be rejected
        let amount: Amount = serde_json::from_str("true").unwrap();
        assert_eq!(amount, Amount::Text("true".into()));
        assert!(!amount.is_numeric());
    }

    #[test]
    fn test_number_accessor() {
        assert_eq!(Amount::Number(5.0).number(), Some(5.0));
        assert_eq!(Amount::Text("x".into()).number(), None);
    }
}
