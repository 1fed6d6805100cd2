//! The boundary to the external SQL parser.
//!
//! The translator does not parse SQL itself. A [`SqlParser`] turns text into
//! the parser's JSON output, and [`first_statement`] picks out the statement
//! to translate.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TranslateError};
use crate::node::peek_tag;

/// An external SQL parser producing the tagged JSON parse tree.
///
/// Any closure `Fn(&str) -> Result<Value, E>` is a parser, which lets
/// callers plug in a binding to the PostgreSQL parser or, in tests, a
/// canned tree.
pub trait SqlParser {
    /// The parser's failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parses `sql` into a list of statements.
    ///
    /// # Errors
    ///
    /// Returns the parser's own error when `sql` does not parse.
    fn parse(&self, sql: &str) -> std::result::Result<Value, Self::Error>;
}

impl<F, E> SqlParser for F
where
    F: Fn(&str) -> std::result::Result<Value, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn parse(&self, sql: &str) -> std::result::Result<Value, E> {
        self(sql)
    }
}

/// Returns every statement of a parser result, with statement wrappers
/// removed.
///
/// Two layouts are accepted: a bare array whose entries are
/// `{"RawStmt": {"stmt": ...}}` wrappers or statement nodes, and an object
/// `{"stmts": [{"stmt": ...}, ...]}`.
///
/// # Errors
///
/// Returns [`TranslateError::MalformedNode`] if the result has neither
/// layout or a wrapper lacks its statement.
pub fn statements(tree: &Value) -> Result<Vec<&Value>> {
    let entries = match tree {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("stmts") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(TranslateError::MalformedNode(String::from(
                    "`stmts` must be an array",
                )))
            }
            None => {
                return Err(TranslateError::MalformedNode(String::from(
                    "expected a statement list",
                )))
            }
        },
        _ => {
            return Err(TranslateError::MalformedNode(String::from(
                "expected a statement list",
            )))
        }
    };
    entries.iter().map(unwrap_statement).collect()
}

fn unwrap_statement(entry: &Value) -> Result<&Value> {
    if let Some(stmt) = entry.get("stmt") {
        return Ok(stmt);
    }
    match entry.get("RawStmt") {
        Some(raw) => raw
            .get("stmt")
            .filter(|stmt| !stmt.is_null())
            .ok_or_else(|| TranslateError::missing("RawStmt", "stmt")),
        None => Ok(entry),
    }
}

/// Returns the first statement of a parser result. Later statements are
/// ignored with a warning.
///
/// # Errors
///
/// Returns [`TranslateError::EmptyParseTree`] when there are no statements,
/// or the errors of [`statements`].
pub fn first_statement(tree: &Value) -> Result<&Value> {
    let all = statements(tree)?;
    if all.len() > 1 {
        warn!("Parse tree holds {} statements; only the first is translated", all.len());
    }
    let first = all.first().copied().ok_or(TranslateError::EmptyParseTree)?;
    debug!("First statement is {}", peek_tag(first).unwrap_or("untagged"));
    Ok(first)
}
