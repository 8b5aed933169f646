//! Error types for document loading and identifier parsing.

use thiserror::Error;

/// Errors that can occur while loading documentation XML or parsing
/// member identifiers.
///
/// None of these is fatal to a documentation run: callers skip the
/// offending member (or leave the offending reference unresolved) and
/// continue with the rest of the document.
#[derive(Debug, Error)]
pub enum DocError {
    /// XML parsing error from the document loader.
    #[error("XML error: {0}")]
    Xml(String),

    /// A member identifier that does not follow the `<Kind>:<path>` shape.
    #[error("malformed member identifier `{raw}`: {reason}")]
    MalformedIdentifier { raw: String, reason: &'static str },

    /// The identifier's namespace path passes through an operator method.
    /// Operator methods never own members, so the identifier is
    /// unparsable and produces no node.
    #[error("member path `{raw}` passes through an operator method")]
    OperatorMethodPath { raw: String },
}

impl DocError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a malformed-identifier error.
    pub fn malformed(raw: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedIdentifier {
            raw: raw.into(),
            reason,
        }
    }

    /// Create an operator-method path error.
    pub fn operator_path(raw: impl Into<String>) -> Self {
        Self::OperatorMethodPath { raw: raw.into() }
    }
}
