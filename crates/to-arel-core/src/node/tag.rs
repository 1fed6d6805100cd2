//! Reading the tag of a parse node.

use serde_json::Value;

use super::attrs::Attributes;
use crate::error::{Result, TranslateError};

/// Splits a parse node into its tag and attribute mapping.
///
/// A parse node is a JSON object with exactly one key, the node-kind tag,
/// whose value is an object of attributes.
///
/// # Errors
///
/// Returns [`TranslateError::MalformedNode`] if the node is not an object,
/// has zero or several keys, or its value is not an object.
pub fn read_tag(node: &Value) -> Result<(&str, Attributes<'_>)> {
    let Value::Object(map) = node else {
        return Err(TranslateError::MalformedNode(format!(
            "expected a tagged object, found {}",
            describe(node)
        )));
    };

    let mut entries = map.iter();
    let (Some((tag, value)), None) = (entries.next(), entries.next()) else {
        return Err(TranslateError::MalformedNode(format!(
            "expected exactly one tag, found {} keys",
            map.len()
        )));
    };

    match value {
        Value::Object(attributes) => Ok((tag.as_str(), Attributes::new(tag, attributes))),
        other => Err(TranslateError::MalformedNode(format!(
            "attributes of {tag} must be an object, found {}",
            describe(other)
        ))),
    }
}

/// Returns the tag of a parse node without validating its attributes.
#[must_use]
pub fn peek_tag(node: &Value) -> Option<&str> {
    match node {
        Value::Object(map) if map.len() == 1 => map.keys().next().map(String::as_str),
        _ => None,
    }
}

pub(crate) const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
