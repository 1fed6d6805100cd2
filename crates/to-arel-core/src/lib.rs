//! # to-arel-core
//!
//! Translates PostgreSQL parse trees into Arel-style query-expression trees.
//!
//! This crate provides:
//! - Typed access to the tagged JSON tree emitted by the PostgreSQL parser
//! - A recursive translator with one handler per supported node kind
//! - A [`SelectManager`] query object aggregating sources, projections,
//!   filters, orderings, joins and limits
//!
//! SQL text is parsed by an external [`SqlParser`]; this crate only consumes
//! its output.
//!
//! ## Translating a parse tree
//!
//! ```rust
//! use serde_json::json;
//! use to_arel_core::{Node, Table, translate_tree};
//!
//! // SELECT id FROM users WHERE age > 18
//! let tree = json!([{"RawStmt": {"stmt": {"SelectStmt": {
//!     "targetList": [{"ResTarget": {"val": {"ColumnRef": {
//!         "fields": [{"String": {"str": "id"}}]
//!     }}}}],
//!     "fromClause": [{"RangeVar": {"relname": "users", "inh": true}}],
//!     "whereClause": {"A_Expr": {
//!         "kind": 0,
//!         "name": [{"String": {"str": ">"}}],
//!         "lexpr": {"ColumnRef": {"fields": [{"String": {"str": "age"}}]}},
//!         "rexpr": {"A_Const": {"val": {"Integer": {"ival": 18}}}}
//!     }}
//! }}}}]);
//!
//! let manager = translate_tree(&tree).unwrap();
//! assert_eq!(manager.source(), Some([Table::new("users")].as_slice()));
//! assert_eq!(manager.projections(), [Node::column("\"id\"")]);
//! assert_eq!(
//!     manager.filter(),
//!     Some(Node::column("\"age\"").gt(Node::integer(18)))
//! );
//! ```
//!
//! ## Plugging in a parser
//!
//! Any closure returning the parser's JSON is a [`SqlParser`]:
//!
//! ```rust
//! use serde_json::{Value, json};
//! use to_arel_core::{ErrorKind, parse};
//!
//! let parser = |_sql: &str| -> Result<Value, std::io::Error> {
//!     Ok(json!([{"RawStmt": {"stmt": {"DeleteStmt": {}}}}]))
//! };
//!
//! let err = parse(&parser, "DELETE FROM users").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedStatementKind);
//! ```

pub mod arel;
pub mod config;
pub mod error;
pub mod node;
pub mod translate;
pub mod tree;

use serde_json::Value;

pub use arel::{
    AggregateFunction, ComparisonOp, Join, JoinKind, Node, OrderDirection, SelectManager,
    SourceItem, SourceList, Table,
};
pub use config::{DEFAULT_MAX_DEPTH, TranslatorConfig};
pub use error::{ErrorKind, Result, TranslateError};
pub use node::NodeKind;
pub use translate::{Context, LiteralMode, Translator};
pub use tree::SqlParser;

/// Parses `sql` and translates its first statement with the default
/// configuration.
///
/// # Errors
///
/// See [`Translator::parse`].
pub fn parse<P>(parser: &P, sql: &str) -> Result<SelectManager>
where
    P: SqlParser + ?Sized,
{
    Translator::new().parse(parser, sql)
}

/// Translates the first statement of a parser result with the default
/// configuration.
///
/// # Errors
///
/// See [`Translator::translate_tree`].
pub fn translate_tree(tree: &Value) -> Result<SelectManager> {
    Translator::new().translate_tree(tree)
}

/// Translates a single `SelectStmt` node with the default configuration.
///
/// # Errors
///
/// See [`Translator::manager_from_statement`].
pub fn manager_from_statement(statement: &Value) -> Result<SelectManager> {
    Translator::new().manager_from_statement(statement)
}
