//! Typed access to a parse node's attributes.

use serde_json::{Map, Value};

use super::tag::describe;
use crate::error::{Result, TranslateError};

/// The attribute mapping of a single parse node.
///
/// Accessors distinguish required from optional attributes. A JSON `null`
/// is treated the same as an absent key.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    kind: &'a str,
    map: &'a Map<String, Value>,
}

impl<'a> Attributes<'a> {
    /// Wraps the attribute mapping of a node tagged `kind`.
    #[must_use]
    pub const fn new(kind: &'a str, map: &'a Map<String, Value>) -> Self {
        Self { kind, map }
    }

    /// Returns the tag of the node these attributes belong to.
    #[must_use]
    pub const fn kind(&self) -> &'a str {
        self.kind
    }

    /// Returns whether an attribute is present and not null.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns an attribute, treating `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Returns a required nested node.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is absent.
    pub fn node(&self, key: &'static str) -> Result<&'a Value> {
        self.get(key)
            .ok_or_else(|| TranslateError::missing(self.kind, key))
    }

    /// Returns a required list of nested nodes.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is absent or not an array.
    pub fn list(&self, key: &'static str) -> Result<&'a [Value]> {
        self.opt_list(key)?
            .ok_or_else(|| TranslateError::missing(self.kind, key))
    }

    /// Returns an optional list of nested nodes.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is present but not an array.
    pub fn opt_list(&self, key: &'static str) -> Result<Option<&'a [Value]>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(self.wrong_shape(key, "a non-array", other)),
        }
    }

    /// Returns a required string attribute.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is absent or not a string.
    pub fn str(&self, key: &'static str) -> Result<&'a str> {
        self.opt_str(key)?
            .ok_or_else(|| TranslateError::missing(self.kind, key))
    }

    /// Returns an optional string attribute.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is present but not a string.
    pub fn opt_str(&self, key: &'static str) -> Result<Option<&'a str>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.wrong_shape(key, "a non-string", other)),
        }
    }

    /// Returns a required integer attribute.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is absent or not an integer.
    pub fn int(&self, key: &'static str) -> Result<i64> {
        match self.get(key) {
            None => Err(TranslateError::missing(self.kind, key)),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| self.wrong_shape(key, "a non-integer", value)),
        }
    }

    /// Returns a parser enum code. The parser omits zero-valued codes, so an
    /// absent attribute reads as `0`.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is present but not an integer.
    pub fn code(&self, key: &'static str) -> Result<i64> {
        if self.contains(key) {
            self.int(key)
        } else {
            Ok(0)
        }
    }

    /// Returns a boolean flag; absent means `false`.
    ///
    /// # Errors
    ///
    /// Fails if the attribute is present but not a boolean.
    pub fn flag(&self, key: &'static str) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.wrong_shape(key, "a non-boolean", other)),
        }
    }

    fn wrong_shape(
        &self,
        key: &'static str,
        problem: &'static str,
        found: &Value,
    ) -> TranslateError {
        tracing::debug!("{}.{} is {}", self.kind, key, describe(found));
        TranslateError::invalid(self.kind, key, problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::read_tag;
    use serde_json::json;

    #[test]
    fn test_required_and_optional_strings() {
        let node = json!({"RangeVar": {"relname": "users", "schemaname": null}});
        let (_, attrs) = read_tag(&node).unwrap();

        assert_eq!(attrs.str("relname").unwrap(), "users");
        assert_eq!(attrs.opt_str("schemaname").unwrap(), None);
        assert!(!attrs.contains("schemaname"));
        assert_eq!(
            attrs.str("alias").unwrap_err().to_string(),
            "RangeVar node has missing attribute 'alias'"
        );
    }

    #[test]
    fn test_codes_default_to_zero() {
        let node = json!({"JoinExpr": {"jointype": 2}});
        let (_, attrs) = read_tag(&node).unwrap();
        assert_eq!(attrs.code("jointype").unwrap(), 2);

        let node = json!({"JoinExpr": {}});
        let (_, attrs) = read_tag(&node).unwrap();
        assert_eq!(attrs.code("jointype").unwrap(), 0);
    }

    #[test]
    fn test_wrong_shapes_are_reported() {
        let node = json!({"FuncCall": {"args": {}, "agg_star": "yes", "kind": "0"}});
        let (_, attrs) = read_tag(&node).unwrap();

        assert_eq!(
            attrs.list("args").unwrap_err().to_string(),
            "FuncCall node has a non-array attribute 'args'"
        );
        assert!(attrs.flag("agg_star").is_err());
        assert!(attrs.code("kind").is_err());
    }

    #[test]
    fn test_flags_and_lists() {
        let node = json!({"FuncCall": {"args": [{"A_Star": {}}], "agg_star": true}});
        let (_, attrs) = read_tag(&node).unwrap();

        assert!(attrs.flag("agg_star").unwrap());
        assert!(!attrs.flag("agg_distinct").unwrap());
        assert_eq!(attrs.list("args").unwrap().len(), 1);
        assert_eq!(attrs.opt_list("funcname").unwrap(), None);
    }
}
