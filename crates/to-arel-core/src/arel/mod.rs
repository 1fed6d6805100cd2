//! Arel-style query-expression tree.
//!
//! These are the output types of translation: plain values with no link
//! back to the parse nodes they came from. Rendering them to SQL is left to
//! the consumer.

mod nodes;
mod select;
mod source;

pub use nodes::{AggregateFunction, ComparisonOp, Join, JoinKind, Node, OrderDirection, Table};
pub use select::SelectManager;
pub use source::{SourceItem, SourceList};
