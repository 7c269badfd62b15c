use std::fmt;

/// Where a request field arrived from. Body fields and query parameters use
/// different wording in error messages, matching the wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSource {
    Body,
    Query,
}

impl ParamSource {
    fn noun(self) -> &'static str {
        match self {
            Self::Body => "field",
            Self::Query => "parameter",
        }
    }

    fn empty_request_text(self) -> &'static str {
        match self {
            Self::Body => "The request body is empty!",
            Self::Query => "No parameters were passed!",
        }
    }
}

/// Errors raised while normalizing a request into a descriptor.
///
/// Every variant is raised locally, before any call leaves the process, and
/// is never retried. `Display` output is the caller-facing message text;
/// labels (e.g. "blockchain name", "list of keys") are the human names the
/// contract uses, not the wire field names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request carried no parameters (or no body) at all.
    #[error("{}", .0.empty_request_text())]
    EmptyRequest(ParamSource),

    /// A required field or parameter was absent. Distinct from present but
    /// empty.
    #[error("The {name} {} was not found in the request!", .origin.noun())]
    MissingField { name: String, origin: ParamSource },

    /// A required value was present but empty after trimming.
    #[error("The {0} can't be empty!")]
    EmptyField(String),

    /// A scalar arrived where a list was expected.
    #[error("You must pass a list of {0}")]
    NotAList(String),

    #[error("The value provided for {0} is not a valid boolean value")]
    InvalidBoolean(String),

    #[error("The value provided for {0} is not an integer")]
    InvalidInteger(String),

    /// Anything else that fails during normalization. Surfaced with the
    /// generic error envelope, never swallowed.
    #[error("{0}")]
    Unclassified(String),
}

impl GatewayError {
    pub fn missing_body(name: impl Into<String>) -> Self {
        Self::MissingField {
            name: name.into(),
            origin: ParamSource::Body,
        }
    }

    pub fn missing_query(name: impl Into<String>) -> Self {
        Self::MissingField {
            name: name.into(),
            origin: ParamSource::Query,
        }
    }

    pub fn empty(label: impl Into<String>) -> Self {
        Self::EmptyField(label.into())
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl fmt::Display for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_text_matches_contract() {
        assert_eq!(
            GatewayError::EmptyRequest(ParamSource::Query).to_string(),
            "No parameters were passed!"
        );
        assert_eq!(
            GatewayError::EmptyRequest(ParamSource::Body).to_string(),
            "The request body is empty!"
        );
        assert_eq!(
            GatewayError::missing_query("blockchainName").to_string(),
            "The blockchainName parameter was not found in the request!"
        );
        assert_eq!(
            GatewayError::missing_body("keys").to_string(),
            "The keys field was not found in the request!"
        );
        assert_eq!(
            GatewayError::empty("blockchain name").to_string(),
            "The blockchain name can't be empty!"
        );
        assert_eq!(
            GatewayError::NotAList("keys".into()).to_string(),
            "You must pass a list of keys"
        );
        assert_eq!(
            GatewayError::InvalidBoolean("verbose".into()).to_string(),
            "The value provided for verbose is not a valid boolean value"
        );
        assert_eq!(
            GatewayError::InvalidInteger("count".into()).to_string(),
            "The value provided for count is not an integer"
        );
    }

    #[test]
    fn missing_and_empty_are_distinct() {
        assert_ne!(
            GatewayError::missing_query("blockchainName"),
            GatewayError::empty("blockchain name")
        );
    }
}
