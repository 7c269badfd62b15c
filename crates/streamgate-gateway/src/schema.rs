use serde_json::Value;

use crate::error::{GatewayError, GatewayResult, ParamSource};

/// A fixed request schema: required body fields enumerated up front.
///
/// The identity operations declare their contract this way instead of stating
/// per-field checks inline; validation produces the same error text and field
/// names either way. Each required field pairs the wire name with the human
/// label used in "can't be empty" messages.
#[derive(Clone, Copy, Debug)]
pub struct RequestSchema {
    required: &'static [(&'static str, &'static str)],
}

impl RequestSchema {
    pub const fn new(required: &'static [(&'static str, &'static str)]) -> Self {
        Self { required }
    }

    /// Validate a JSON body against the schema and return the trimmed values
    /// of the required fields, in declaration order.
    pub fn validate(&self, body: Option<&Value>) -> GatewayResult<Vec<String>> {
        let body = match body {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(GatewayError::EmptyRequest(ParamSource::Body)),
        };

        for (name, _) in self.required {
            if !body.contains_key(*name) {
                return Err(GatewayError::missing_body(*name));
            }
        }

        let mut values = Vec::with_capacity(self.required.len());
        for (name, label) in self.required {
            let value = match &body[*name] {
                Value::String(s) => s,
                other => {
                    return Err(GatewayError::Unclassified(format!(
                        "The {name} field is not a string: {other}"
                    )))
                }
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(GatewayError::empty(*label));
            }
            values.push(trimmed.to_string());
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: RequestSchema =
        RequestSchema::new(&[("blockchainName", "blockchain name"), ("newNodeAddress", "new node address")]);

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(
            SCHEMA.validate(None).unwrap_err(),
            GatewayError::EmptyRequest(ParamSource::Body)
        );
        assert_eq!(
            SCHEMA.validate(Some(&json!({}))).unwrap_err(),
            GatewayError::EmptyRequest(ParamSource::Body)
        );
    }

    #[test]
    fn missing_fields_report_in_declaration_order() {
        let body = json!({ "newNodeAddress": "10.0.0.2" });
        assert_eq!(
            SCHEMA.validate(Some(&body)).unwrap_err(),
            GatewayError::missing_body("blockchainName")
        );
    }

    #[test]
    fn presence_of_all_fields_is_checked_before_emptiness() {
        let body = json!({ "blockchainName": "  " });
        assert_eq!(
            SCHEMA.validate(Some(&body)).unwrap_err(),
            GatewayError::missing_body("newNodeAddress")
        );
    }

    #[test]
    fn values_come_back_trimmed_in_order() {
        let body = json!({ "blockchainName": " demo ", "newNodeAddress": "10.0.0.2 " });
        let values = SCHEMA.validate(Some(&body)).unwrap();
        assert_eq!(values, ["demo", "10.0.0.2"]);
    }

    #[test]
    fn blank_value_uses_the_human_label() {
        let body = json!({ "blockchainName": "demo", "newNodeAddress": "   " });
        assert_eq!(
            SCHEMA.validate(Some(&body)).unwrap_err(),
            GatewayError::empty("new node address")
        );
    }
}
