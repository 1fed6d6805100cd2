//! Reading the tagged parse tree produced by the PostgreSQL parser.
//!
//! A parse node is a JSON object with a single key naming its kind, e.g.
//! `{"RangeVar": {"relname": "users"}}`. This module never mutates nodes.

mod attrs;
pub mod codes;
mod kind;
mod tag;

pub use attrs::Attributes;
pub use kind::NodeKind;
pub use tag::{peek_tag, read_tag};
