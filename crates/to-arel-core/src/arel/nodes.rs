//! Query-expression node types.

use serde::Serialize;

use super::select::SelectManager;

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Schema name (optional).
    pub schema: Option<String>,
    /// Alias (optional).
    pub alias: Option<String>,
}

impl Table {
    /// Creates an unqualified, unaliased table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    /// Sets the schema qualifier.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the name other clauses use to refer to this table.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOp {
    /// `=`
    Equality,
    /// `<>`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
}

impl ComparisonOp {
    /// Maps an operator token onto a comparison. Only the six tokens of the
    /// comparison table are recognized.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Equality),
            "<>" => Some(Self::NotEqual),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterThanOrEqual),
            "<" => Some(Self::LessThan),
            "<=" => Some(Self::LessThanOrEqual),
            _ => None,
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }
}

/// Join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JoinKind {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Outer,
    /// FULL OUTER JOIN.
    FullOuter,
    /// RIGHT OUTER JOIN.
    RightOuter,
}

impl JoinKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Outer => "LEFT OUTER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
        }
    }
}

/// A joined source: the join kind, the joined table and its condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Join {
    /// The type of join.
    pub kind: JoinKind,
    /// The table being joined.
    pub right: Table,
    /// The join condition; absent for CROSS JOIN.
    pub on: Option<Node>,
}

impl Join {
    /// Creates a join.
    #[must_use]
    pub const fn new(kind: JoinKind, right: Table, on: Option<Node>) -> Self {
        Self { kind, right, on }
    }
}

/// Order direction for an ordering node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Aggregate functions with a dedicated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AggregateFunction {
    /// `sum(...)`
    Sum,
    /// `count(...)`
    Count,
}

impl AggregateFunction {
    /// Maps a function name onto an aggregate.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sum" => Some(Self::Sum),
            "count" => Some(Self::Count),
            _ => None,
        }
    }

    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Count => "COUNT",
        }
    }
}

/// A query-expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// A table reference.
    Table(Table),

    /// A column reference, kept as its dot-joined text and not bound to any
    /// table.
    Column(String),

    /// A raw SQL fragment, emitted verbatim by a renderer.
    SqlLiteral(String),

    /// An integer literal.
    Integer(i64),

    /// NULL.
    Null,

    /// All columns (`*`).
    Star,

    /// An aliased projection.
    As {
        /// The projected expression.
        expr: Box<Node>,
        /// The output name.
        alias: String,
    },

    /// A binary comparison.
    Comparison {
        /// Operator.
        op: ComparisonOp,
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },

    /// Set membership.
    In {
        /// The expression to check.
        expr: Box<Node>,
        /// The candidate values.
        list: Vec<Node>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// Conjunction of every child.
    And(Vec<Node>),

    /// Binary disjunction. Longer chains nest to the right.
    Or(Box<Node>, Box<Node>),

    /// Negation.
    Not(Box<Node>),

    /// Explicit parentheses.
    Grouping(Box<Node>),

    /// A call to a function without a dedicated node.
    NamedFunction {
        /// The function name.
        name: String,
        /// The arguments.
        args: Vec<Node>,
    },

    /// An aggregate call.
    Aggregate {
        /// The aggregate.
        function: AggregateFunction,
        /// The arguments.
        args: Vec<Node>,
        /// Whether DISTINCT was specified.
        distinct: bool,
    },

    /// An ORDER BY entry.
    Order {
        /// The expression to order by.
        expr: Box<Node>,
        /// The direction.
        direction: OrderDirection,
    },

    /// A nested SELECT.
    Select(Box<SelectManager>),
}

impl Node {
    /// Creates a column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    /// Creates a raw SQL fragment.
    #[must_use]
    pub fn sql(fragment: impl Into<String>) -> Self {
        Self::SqlLiteral(fragment.into())
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Creates a comparison with `self` on the left.
    #[must_use]
    pub fn compare(self, op: ComparisonOp, right: Self) -> Self {
        Self::Comparison {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.compare(ComparisonOp::Equality, right)
    }

    /// Creates an inequality comparison.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.compare(ComparisonOp::NotEqual, right)
    }

    /// Creates a greater-than comparison.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.compare(ComparisonOp::GreaterThan, right)
    }

    /// Creates a less-than comparison.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.compare(ComparisonOp::LessThan, right)
    }

    /// Creates an IS NULL test.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.eq(Self::Null)
    }

    /// Creates an IS NOT NULL test.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.not_eq(Self::Null)
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            list,
            negated: true,
        }
    }

    /// Creates a binary OR with `self` on the left.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or(Box::new(self), Box::new(right))
    }

    /// Negates `self`.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Wraps `self` in parentheses.
    #[must_use]
    pub fn grouped(self) -> Self {
        Self::Grouping(Box::new(self))
    }

    /// Aliases `self` for a projection list.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        Self::As {
            expr: Box::new(self),
            alias: alias.into(),
        }
    }

    /// Orders by `self` in the given direction.
    #[must_use]
    pub fn order(self, direction: OrderDirection) -> Self {
        Self::Order {
            expr: Box::new(self),
            direction,
        }
    }

    /// Orders by `self` ascending.
    #[must_use]
    pub fn asc(self) -> Self {
        self.order(OrderDirection::Asc)
    }

    /// Orders by `self` descending.
    #[must_use]
    pub fn desc(self) -> Self {
        self.order(OrderDirection::Desc)
    }

    /// Returns the text of a leaf node that stands for a piece of SQL:
    /// fragments, column text, integers and `*`. Other nodes have none.
    #[must_use]
    pub fn fragment(&self) -> Option<String> {
        match self {
            Self::SqlLiteral(text) | Self::Column(text) => Some(text.clone()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Star => Some(String::from("*")),
            _ => None,
        }
    }
}
