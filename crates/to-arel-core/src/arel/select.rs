//! The SELECT query object.
//!
//! A [`SelectManager`] aggregates the translated clauses of one SELECT
//! statement. Every setter consumes and returns the manager, so clauses can
//! be attached in a chain; `where_clause`, `order` and `join` append and keep
//! call order.

use serde::Serialize;

use super::nodes::{Join, Node, Table};

/// A composed SELECT query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectManager {
    source: Option<Vec<Table>>,
    projections: Vec<Node>,
    wheres: Vec<Node>,
    orders: Vec<Node>,
    joins: Vec<Join>,
    limit: Option<Node>,
    offset: Option<Node>,
}

impl SelectManager {
    /// Creates a manager over the given base tables. `None` means the query
    /// has no plain tables, as in `SELECT 1`.
    #[must_use]
    pub fn new(source: Option<Vec<Table>>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Replaces the projection list.
    #[must_use]
    pub fn with_projections(mut self, projections: Vec<Node>) -> Self {
        self.projections = projections;
        self
    }

    /// Sets the LIMIT.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<Node>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the OFFSET.
    #[must_use]
    pub fn with_offset(mut self, offset: Option<Node>) -> Self {
        self.offset = offset;
        self
    }

    /// Adds a filter. Several filters are combined with AND.
    #[must_use]
    pub fn where_clause(mut self, expr: Node) -> Self {
        self.wheres.push(expr);
        self
    }

    /// Adds an ORDER BY entry.
    #[must_use]
    pub fn order(mut self, ordering: Node) -> Self {
        self.orders.push(ordering);
        self
    }

    /// Adds a joined source.
    #[must_use]
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Returns the base tables.
    #[must_use]
    pub fn source(&self) -> Option<&[Table]> {
        self.source.as_deref()
    }

    /// Returns the projection list.
    #[must_use]
    pub fn projections(&self) -> &[Node] {
        &self.projections
    }

    /// Returns every filter in the order they were added.
    #[must_use]
    pub fn wheres(&self) -> &[Node] {
        &self.wheres
    }

    /// Returns the effective filter: absent, the single filter, or the
    /// conjunction of all of them.
    #[must_use]
    pub fn filter(&self) -> Option<Node> {
        match self.wheres.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            all => Some(Node::And(all.to_vec())),
        }
    }

    /// Returns the ORDER BY entries.
    #[must_use]
    pub fn orders(&self) -> &[Node] {
        &self.orders
    }

    /// Returns the joined sources.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Returns the LIMIT.
    #[must_use]
    pub const fn limit(&self) -> Option<&Node> {
        self.limit.as_ref()
    }

    /// Returns the OFFSET.
    #[must_use]
    pub const fn offset(&self) -> Option<&Node> {
        self.offset.as_ref()
    }
}
