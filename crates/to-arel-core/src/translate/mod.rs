//! Parse-tree translation.
//!
//! [`Translator`] walks a parse tree and builds the query-expression tree
//! bottom-up in a single pass. Every node goes through [`Translator::translate`],
//! which reads the node's tag, matches it against the closed [`NodeKind`]
//! vocabulary and hands the attributes to that kind's handler. Handlers
//! recurse back into `translate` for their children.
//!
//! Adding coverage for a new kind means adding a handler and a match arm;
//! the engine itself does not change.

mod expressions;
mod literals;
mod select;
mod subquery;

use serde_json::Value;
use tracing::{debug, trace};

use crate::arel::{Node, SelectManager};
use crate::config::TranslatorConfig;
use crate::error::{Result, TranslateError};
use crate::node::{NodeKind, read_tag};
use crate::tree::{SqlParser, first_statement};

pub use expressions::{generate_comparison, or_chain};

/// Depth units a nested SELECT costs on top of its own node. Each one
/// builds a whole query object, so it takes far more stack than an
/// expression node.
const NESTED_SELECT_WEIGHT: usize = 8;

/// How a `String` node renders.
///
/// The same text means different things depending on where it sits: the
/// name of an operator, a string constant, or an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralMode {
    /// Double-quoted identifier, e.g. a column name part.
    #[default]
    Identifier,
    /// The raw token, e.g. an operator or function name.
    Operator,
    /// Single-quoted string constant.
    Constant,
}

/// Per-node hints passed down from a parent handler.
///
/// Contexts are not inherited: a handler decides what each child receives,
/// and most children get [`Context::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    /// Rendering of `String` nodes.
    pub literal: LiteralMode,
    /// Whether the node is a direct operand of a boolean expression.
    pub nested: bool,
}

impl Context {
    /// The default context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            literal: LiteralMode::Identifier,
            nested: false,
        }
    }

    /// A context that renders strings in the given mode.
    #[must_use]
    pub const fn literal(mode: LiteralMode) -> Self {
        Self {
            literal: mode,
            nested: false,
        }
    }

    /// The context for operands of a boolean expression.
    #[must_use]
    pub const fn nested() -> Self {
        Self {
            literal: LiteralMode::Identifier,
            nested: true,
        }
    }
}

/// Translates parse trees into query-expression trees.
#[derive(Debug, Default)]
pub struct Translator {
    config: TranslatorConfig,
    depth: usize,
}

impl Translator {
    /// Creates a translator with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(TranslatorConfig::new())
    }

    /// Creates a translator with the given configuration.
    #[must_use]
    pub const fn with_config(config: TranslatorConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Parses `sql` with an external parser and translates its first
    /// statement, which must be a SELECT.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Parser`] if the parser fails, and otherwise
    /// whatever error translation raised first.
    pub fn parse<P>(&mut self, parser: &P, sql: &str) -> Result<SelectManager>
    where
        P: SqlParser + ?Sized,
    {
        let tree = parser
            .parse(sql)
            .map_err(|err| TranslateError::Parser(Box::new(err)))?;
        self.translate_tree(&tree)
    }

    /// Translates the first statement of a parser result.
    ///
    /// # Errors
    ///
    /// Fails if the result holds no statements, the first one is not a
    /// SELECT, or any part of it fails to translate.
    pub fn translate_tree(&mut self, tree: &Value) -> Result<SelectManager> {
        self.manager_from_statement(first_statement(tree)?)
    }

    /// Translates a statement node, which must be tagged `SelectStmt`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnsupportedStatementKind`] for any other
    /// tag, and otherwise whatever error translation raised first.
    pub fn manager_from_statement(&mut self, statement: &Value) -> Result<SelectManager> {
        let (tag, attrs) = read_tag(statement)?;
        if NodeKind::from_tag(tag) != Some(NodeKind::SelectStmt) {
            return Err(TranslateError::UnsupportedStatementKind(tag.to_owned()));
        }
        debug!("Translating {} statement", tag);
        self.descend(|this| this.select_manager(attrs))
    }

    /// Translates one parse node.
    ///
    /// # Errors
    ///
    /// Fails on malformed nodes, kinds without a handler, constructs a
    /// handler does not support, and nesting beyond the configured depth.
    pub fn translate(&mut self, node: &Value, ctx: Context) -> Result<Node> {
        self.descend(|this| this.dispatch(node, ctx))
    }

    fn descend<T>(&mut self, step: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.descend_by(1, step)
    }

    /// Runs `step` with `weight` more units of the depth budget in use.
    fn descend_by<T>(
        &mut self,
        weight: usize,
        step: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let depth = self.depth.saturating_add(weight);
        if depth > self.config.max_depth {
            return Err(TranslateError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        let outer = std::mem::replace(&mut self.depth, depth);
        let result = step(self);
        self.depth = outer;
        result
    }

    fn dispatch(&mut self, node: &Value, ctx: Context) -> Result<Node> {
        let (tag, attrs) = read_tag(node)?;
        let kind =
            NodeKind::from_tag(tag).ok_or_else(|| TranslateError::UnknownNodeKind(tag.to_owned()))?;
        trace!(kind = tag, depth = self.depth, "dispatch");

        match kind {
            NodeKind::String => self.handle_string(attrs, ctx),
            NodeKind::Integer => self.handle_integer(attrs, ctx),
            NodeKind::ColumnRef => self.handle_column_ref(attrs, ctx),
            NodeKind::ResTarget => self.handle_res_target(attrs, ctx),
            NodeKind::SubLink => self.handle_sub_link(attrs, ctx),
            NodeKind::Alias => self.handle_alias(attrs, ctx),
            NodeKind::RangeVar => self.handle_range_var(attrs, ctx),
            NodeKind::AExpr => self.handle_a_expr(attrs, ctx),
            NodeKind::AConst => self.handle_a_const(attrs, ctx),
            NodeKind::FuncCall => self.handle_func_call(attrs, ctx),
            NodeKind::SelectStmt => self.handle_select_stmt(attrs, ctx),
            NodeKind::AStar => self.handle_a_star(attrs, ctx),
            NodeKind::RawStmt => self.handle_raw_stmt(attrs, ctx),
            NodeKind::SortBy => self.handle_sort_by(attrs, ctx),
            NodeKind::NullTest => self.handle_null_test(attrs, ctx),
            NodeKind::BoolExpr => self.handle_bool_expr(attrs, ctx),
            // Joins flatten into a source list, so only FROM items reach them.
            NodeKind::JoinExpr => Err(TranslateError::MisplacedNode {
                kind,
                position: "an expression",
            }),
            NodeKind::Float
            | NodeKind::Null
            | NodeKind::BitString
            | NodeKind::ParamRef
            | NodeKind::TypeCast
            | NodeKind::CaseExpr
            | NodeKind::CoalesceExpr
            | NodeKind::MinMaxExpr
            | NodeKind::BooleanTest
            | NodeKind::RowExpr
            | NodeKind::AArrayExpr
            | NodeKind::AIndirection
            | NodeKind::RangeSubselect
            | NodeKind::RangeFunction
            | NodeKind::WithClause
            | NodeKind::CommonTableExpr
            | NodeKind::InsertStmt
            | NodeKind::UpdateStmt
            | NodeKind::DeleteStmt
            | NodeKind::CreateStmt
            | NodeKind::DropStmt
            | NodeKind::AlterTableStmt
            | NodeKind::TruncateStmt => Err(TranslateError::UnsupportedNodeKind(kind)),
        }
    }

    /// Translates each node of a list with the default context.
    fn translate_all(&mut self, nodes: &[Value]) -> Result<Vec<Node>> {
        nodes
            .iter()
            .map(|node| self.translate(node, Context::new()))
            .collect()
    }

    /// Translates a node that must reduce to a single piece of SQL text.
    fn translate_fragment(
        &mut self,
        node: &Value,
        ctx: Context,
        role: &'static str,
    ) -> Result<String> {
        self.translate(node, ctx)?.fragment().ok_or_else(|| {
            TranslateError::MalformedNode(format!("{role} does not reduce to plain text"))
        })
    }
}
