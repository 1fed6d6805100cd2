//! The closed vocabulary of parse-node tags.

/// A parse-node tag known to this crate.
///
/// The first group has translation handlers. The second group are tags the
/// PostgreSQL parser emits for constructs this crate recognizes but does not
/// translate; they fail with an unsupported-node-kind error rather than an
/// unknown-tag error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Translated
    String,
    Integer,
    ColumnRef,
    ResTarget,
    SubLink,
    Alias,
    RangeVar,
    AExpr,
    AConst,
    JoinExpr,
    FuncCall,
    SelectStmt,
    AStar,
    RawStmt,
    SortBy,
    NullTest,
    BoolExpr,

    // Recognized, not translated
    Float,
    Null,
    BitString,
    ParamRef,
    TypeCast,
    CaseExpr,
    CoalesceExpr,
    MinMaxExpr,
    BooleanTest,
    RowExpr,
    AArrayExpr,
    AIndirection,
    RangeSubselect,
    RangeFunction,
    WithClause,
    CommonTableExpr,
    InsertStmt,
    UpdateStmt,
    DeleteStmt,
    CreateStmt,
    DropStmt,
    AlterTableStmt,
    TruncateStmt,
}

impl NodeKind {
    /// Every known kind, translated ones first.
    pub const ALL: [Self; 40] = [
        Self::String,
        Self::Integer,
        Self::ColumnRef,
        Self::ResTarget,
        Self::SubLink,
        Self::Alias,
        Self::RangeVar,
        Self::AExpr,
        Self::AConst,
        Self::JoinExpr,
        Self::FuncCall,
        Self::SelectStmt,
        Self::AStar,
        Self::RawStmt,
        Self::SortBy,
        Self::NullTest,
        Self::BoolExpr,
        Self::Float,
        Self::Null,
        Self::BitString,
        Self::ParamRef,
        Self::TypeCast,
        Self::CaseExpr,
        Self::CoalesceExpr,
        Self::MinMaxExpr,
        Self::BooleanTest,
        Self::RowExpr,
        Self::AArrayExpr,
        Self::AIndirection,
        Self::RangeSubselect,
        Self::RangeFunction,
        Self::WithClause,
        Self::CommonTableExpr,
        Self::InsertStmt,
        Self::UpdateStmt,
        Self::DeleteStmt,
        Self::CreateStmt,
        Self::DropStmt,
        Self::AlterTableStmt,
        Self::TruncateStmt,
    ];

    /// Looks up the kind for a parser tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Returns the tag exactly as the parser spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::ColumnRef => "ColumnRef",
            Self::ResTarget => "ResTarget",
            Self::SubLink => "SubLink",
            Self::Alias => "Alias",
            Self::RangeVar => "RangeVar",
            Self::AExpr => "A_Expr",
            Self::AConst => "A_Const",
            Self::JoinExpr => "JoinExpr",
            Self::FuncCall => "FuncCall",
            Self::SelectStmt => "SelectStmt",
            Self::AStar => "A_Star",
            Self::RawStmt => "RawStmt",
            Self::SortBy => "SortBy",
            Self::NullTest => "NullTest",
            Self::BoolExpr => "BoolExpr",
            Self::Float => "Float",
            Self::Null => "Null",
            Self::BitString => "BitString",
            Self::ParamRef => "ParamRef",
            Self::TypeCast => "TypeCast",
            Self::CaseExpr => "CaseExpr",
            Self::CoalesceExpr => "CoalesceExpr",
            Self::MinMaxExpr => "MinMaxExpr",
            Self::BooleanTest => "BooleanTest",
            Self::RowExpr => "RowExpr",
            Self::AArrayExpr => "A_ArrayExpr",
            Self::AIndirection => "A_Indirection",
            Self::RangeSubselect => "RangeSubselect",
            Self::RangeFunction => "RangeFunction",
            Self::WithClause => "WithClause",
            Self::CommonTableExpr => "CommonTableExpr",
            Self::InsertStmt => "InsertStmt",
            Self::UpdateStmt => "UpdateStmt",
            Self::DeleteStmt => "DeleteStmt",
            Self::CreateStmt => "CreateStmt",
            Self::DropStmt => "DropStmt",
            Self::AlterTableStmt => "AlterTableStmt",
            Self::TruncateStmt => "TruncateStmt",
        }
    }

    /// Returns whether a handler exists for this kind.
    #[must_use]
    pub const fn is_translated(&self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Integer
                | Self::ColumnRef
                | Self::ResTarget
                | Self::SubLink
                | Self::Alias
                | Self::RangeVar
                | Self::AExpr
                | Self::AConst
                | Self::JoinExpr
                | Self::FuncCall
                | Self::SelectStmt
                | Self::AStar
                | Self::RawStmt
                | Self::SortBy
                | Self::NullTest
                | Self::BoolExpr
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
