//! Strict conversions from caller-supplied text to typed values.
//!
//! Both functions are pure and independent of request context: the field
//! name is only used to address the error message.

use crate::error::{GatewayError, GatewayResult};

/// Accepted boolean literals, exact set membership only. `"TRUE"`, `"1"`,
/// `"yes"` and friends are rejected.
pub fn coerce_boolean(field_name: &str, raw: &str) -> GatewayResult<bool> {
    match raw {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        _ => Err(GatewayError::InvalidBoolean(field_name.to_string())),
    }
}

/// Base-10 signed integer parse. Leading/trailing whitespace is tolerated,
/// anything else fails with [`GatewayError::InvalidInteger`].
pub fn coerce_integer(field_name: &str, raw: &str) -> GatewayResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| GatewayError::InvalidInteger(field_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_accepts_exact_literals() {
        assert!(coerce_boolean("verbose", "True").unwrap());
        assert!(coerce_boolean("verbose", "true").unwrap());
        assert!(!coerce_boolean("verbose", "False").unwrap());
        assert!(!coerce_boolean("verbose", "false").unwrap());
    }

    #[test]
    fn boolean_rejects_everything_else() {
        for raw in ["TRUE", "FALSE", "1", "0", "yes", "no", "", " true"] {
            let err = coerce_boolean("verbose", raw).unwrap_err();
            assert_eq!(err, GatewayError::InvalidBoolean("verbose".into()), "raw = {raw:?}");
        }
    }

    #[test]
    fn integer_parses_signed_base_10() {
        assert_eq!(coerce_integer("count", "5").unwrap(), 5);
        assert_eq!(coerce_integer("start", "-1").unwrap(), -1);
        assert_eq!(coerce_integer("count", "0").unwrap(), 0);
        assert_eq!(coerce_integer("count", " 12 ").unwrap(), 12);
    }

    #[test]
    fn integer_rejects_non_numeric() {
        for raw in ["abc", "1.5", "0x10", "", "1e3"] {
            let err = coerce_integer("count", raw).unwrap_err();
            assert_eq!(err, GatewayError::InvalidInteger("count".into()), "raw = {raw:?}");
        }
    }

    #[test]
    fn field_name_lands_in_the_message() {
        let err = coerce_boolean("localOrdering", "maybe").unwrap_err();
        assert!(err.to_string().contains("localOrdering"));
    }
}
