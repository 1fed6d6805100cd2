//! Error types for parse-tree translation.

use crate::node::NodeKind;

/// Broad category of a [`TranslateError`].
///
/// Several error variants share a category: an unknown tag and a known tag
/// without a handler are both reported as [`ErrorKind::UnsupportedNodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The parse tree violates its structural invariants.
    MalformedNode,
    /// A node kind reached dispatch that no handler covers.
    UnsupportedNodeKind,
    /// An operator token outside the comparison table.
    UnsupportedOperator,
    /// A function name outside the aggregate table.
    UnsupportedFunction,
    /// A sub-link type other than an expression sub-select.
    UnsupportedSubquery,
    /// A top-level statement that is not a SELECT.
    UnsupportedStatementKind,
    /// A recognized SQL construct this translator does not implement.
    UnsupportedConstruct,
    /// The parse tree nests deeper than the configured limit.
    DepthExceeded,
    /// The external parser rejected the input.
    Parser,
}

impl ErrorKind {
    /// Returns a stable name for the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedNode => "malformed_node",
            Self::UnsupportedNodeKind => "unsupported_node_kind",
            Self::UnsupportedOperator => "unsupported_operator",
            Self::UnsupportedFunction => "unsupported_function",
            Self::UnsupportedSubquery => "unsupported_subquery",
            Self::UnsupportedStatementKind => "unsupported_statement_kind",
            Self::UnsupportedConstruct => "unsupported_construct",
            Self::DepthExceeded => "depth_exceeded",
            Self::Parser => "parser",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while translating a parse tree.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A parse node is not a single-key mapping of tag to attributes.
    #[error("malformed parse node: {0}")]
    MalformedNode(String),

    /// A required attribute is absent or has the wrong shape.
    #[error("{kind} node has {problem} attribute '{attribute}'")]
    InvalidAttribute {
        /// Tag of the node carrying the attribute.
        kind: String,
        /// Attribute name.
        attribute: &'static str,
        /// "missing" or a description of the expected shape.
        problem: &'static str,
    },

    /// A node appeared somewhere its kind cannot be translated.
    #[error("{kind} node cannot appear in {position}")]
    MisplacedNode {
        /// The node kind.
        kind: NodeKind,
        /// Where it was found.
        position: &'static str,
    },

    /// The parse tree contained no statements.
    #[error("parse tree contains no statements")]
    EmptyParseTree,

    /// A tag outside the parser vocabulary known to this crate.
    #[error("unknown node kind `{0}`")]
    UnknownNodeKind(String),

    /// A tag the parser emits but no handler translates.
    #[error("node kind `{0}` is not supported")]
    UnsupportedNodeKind(NodeKind),

    /// An operator token outside the comparison table.
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),

    /// A function name outside the aggregate table.
    #[error("unsupported function `{0}`")]
    UnsupportedFunction(String),

    /// A sub-link type other than `EXPR_SUBLINK`.
    #[error("unsupported sub-link type {0}")]
    UnsupportedSubquery(i64),

    /// A statement kind other than `SelectStmt`.
    #[error("unsupported statement kind `{0}`")]
    UnsupportedStatementKind(String),

    /// A recognized construct without a translation.
    #[error("unsupported {construct}: {detail}")]
    UnsupportedConstruct {
        /// What kind of construct, e.g. "join type".
        construct: &'static str,
        /// The offending code or name.
        detail: String,
    },

    /// The parse tree nests deeper than the configured limit.
    #[error("parse tree nesting exceeds the limit of {limit}")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The external parser failed.
    #[error("parser error: {0}")]
    Parser(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TranslateError {
    /// Creates an error for a missing required attribute.
    #[must_use]
    pub fn missing(kind: &str, attribute: &'static str) -> Self {
        Self::InvalidAttribute {
            kind: kind.to_owned(),
            attribute,
            problem: "missing",
        }
    }

    /// Creates an error for an attribute of the wrong shape.
    #[must_use]
    pub fn invalid(kind: &str, attribute: &'static str, problem: &'static str) -> Self {
        Self::InvalidAttribute {
            kind: kind.to_owned(),
            attribute,
            problem,
        }
    }

    /// Creates an error for a recognized but untranslated construct.
    #[must_use]
    pub fn unsupported(construct: &'static str, detail: impl ToString) -> Self {
        Self::UnsupportedConstruct {
            construct,
            detail: detail.to_string(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedNode(_)
            | Self::InvalidAttribute { .. }
            | Self::MisplacedNode { .. }
            | Self::EmptyParseTree => ErrorKind::MalformedNode,
            Self::UnknownNodeKind(_) | Self::UnsupportedNodeKind(_) => {
                ErrorKind::UnsupportedNodeKind
            }
            Self::UnsupportedOperator(_) => ErrorKind::UnsupportedOperator,
            Self::UnsupportedFunction(_) => ErrorKind::UnsupportedFunction,
            Self::UnsupportedSubquery(_) => ErrorKind::UnsupportedSubquery,
            Self::UnsupportedStatementKind(_) => ErrorKind::UnsupportedStatementKind,
            Self::UnsupportedConstruct { .. } => ErrorKind::UnsupportedConstruct,
            Self::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            Self::Parser(_) => ErrorKind::Parser,
        }
    }

    /// Returns the human-readable description of the failure.
    #[must_use]
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Result type for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;
