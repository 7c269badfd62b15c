use thiserror::Error;

/// Failures reported by a ledger node client.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A structured, ledger-reported failure. `info` is the caller-facing
    /// payload and is surfaced to the client unmodified.
    #[error("ledger node error: {info}")]
    Domain { info: serde_json::Value },

    /// The node could not be reached or the failure carried no structure.
    #[error("ledger node unavailable: {0}")]
    Unavailable(String),
}

impl NodeError {
    /// Build a domain error in the node's wire shape.
    pub fn domain(code: i64, message: impl Into<String>) -> Self {
        Self::Domain {
            info: serde_json::json!({
                "error": { "code": code, "message": message.into() }
            }),
        }
    }
}

pub type NodeResult<T> = Result<T, NodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_wire_shape() {
        let err = NodeError::domain(-708, "stream not found");
        let NodeError::Domain { info } = err else {
            panic!("expected domain error");
        };
        assert_eq!(info["error"]["code"], -708);
        assert_eq!(info["error"]["message"], "stream not found");
    }

    #[test]
    fn unavailable_display() {
        let err = NodeError::Unavailable("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
