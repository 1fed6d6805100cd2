//! Integer enum codes carried in parse-node attributes.
//!
//! The parser serializes its C enums as their ordinal values. Each type here
//! mirrors one of those enums; `from_code` returns `None` for ordinals the
//! parser does not define.

macro_rules! parser_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $code:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Looks up the variant for a parser ordinal.
            #[must_use]
            pub const fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the parser's name for the variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

parser_enum! {
    /// `A_Expr_Kind`: the flavour of an `A_Expr` node.
    pub enum AExprKind {
        Op = 0 => "AEXPR_OP",
        OpAny = 1 => "AEXPR_OP_ANY",
        OpAll = 2 => "AEXPR_OP_ALL",
        Distinct = 3 => "AEXPR_DISTINCT",
        NotDistinct = 4 => "AEXPR_NOT_DISTINCT",
        NullIf = 5 => "AEXPR_NULLIF",
        Of = 6 => "AEXPR_OF",
        In = 7 => "AEXPR_IN",
        Like = 8 => "AEXPR_LIKE",
        ILike = 9 => "AEXPR_ILIKE",
        Similar = 10 => "AEXPR_SIMILAR",
        Between = 11 => "AEXPR_BETWEEN",
        NotBetween = 12 => "AEXPR_NOT_BETWEEN",
        BetweenSym = 13 => "AEXPR_BETWEEN_SYM",
        NotBetweenSym = 14 => "AEXPR_NOT_BETWEEN_SYM",
        Paren = 15 => "AEXPR_PAREN",
    }
}

parser_enum! {
    /// `BoolExprType`: the connective of a `BoolExpr` node.
    pub enum BoolExprType {
        And = 0 => "AND_EXPR",
        Or = 1 => "OR_EXPR",
        Not = 2 => "NOT_EXPR",
    }
}

parser_enum! {
    /// `JoinType`: the kind of a `JoinExpr` node.
    pub enum JoinType {
        Inner = 0 => "JOIN_INNER",
        Left = 1 => "JOIN_LEFT",
        Full = 2 => "JOIN_FULL",
        Right = 3 => "JOIN_RIGHT",
        Semi = 4 => "JOIN_SEMI",
        Anti = 5 => "JOIN_ANTI",
        UniqueOuter = 6 => "JOIN_UNIQUE_OUTER",
        UniqueInner = 7 => "JOIN_UNIQUE_INNER",
    }
}

parser_enum! {
    /// `SortByDir`: the direction of a `SortBy` node.
    pub enum SortByDir {
        Default = 0 => "SORTBY_DEFAULT",
        Asc = 1 => "SORTBY_ASC",
        Desc = 2 => "SORTBY_DESC",
        Using = 3 => "SORTBY_USING",
    }
}

parser_enum! {
    /// `NullTestType`: the test of a `NullTest` node.
    pub enum NullTestType {
        IsNull = 0 => "IS_NULL",
        IsNotNull = 1 => "IS_NOT_NULL",
    }
}

parser_enum! {
    /// `SubLinkType`: how a `SubLink` embeds its sub-select.
    pub enum SubLinkType {
        Exists = 0 => "EXISTS_SUBLINK",
        All = 1 => "ALL_SUBLINK",
        Any = 2 => "ANY_SUBLINK",
        RowCompare = 3 => "ROWCOMPARE_SUBLINK",
        Expr = 4 => "EXPR_SUBLINK",
        MultiExpr = 5 => "MULTIEXPR_SUBLINK",
        Array = 6 => "ARRAY_SUBLINK",
        Cte = 7 => "CTE_SUBLINK",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_kinds() {
        assert_eq!(AExprKind::from_code(0), Some(AExprKind::Op));
        assert_eq!(AExprKind::from_code(1), Some(AExprKind::OpAny));
        assert_eq!(AExprKind::from_code(7), Some(AExprKind::In));
        assert_eq!(AExprKind::from_code(11), Some(AExprKind::Between));
        assert_eq!(AExprKind::from_code(16), None);
        assert_eq!(AExprKind::NullIf.to_string(), "AEXPR_NULLIF");
    }

    #[test]
    fn test_join_and_sort_codes() {
        assert_eq!(JoinType::from_code(3), Some(JoinType::Right));
        assert_eq!(JoinType::from_code(-1), None);
        assert_eq!(SortByDir::from_code(2), Some(SortByDir::Desc));
        assert_eq!(SortByDir::Using.as_str(), "SORTBY_USING");
    }

    #[test]
    fn test_boolean_null_and_sublink_codes() {
        assert_eq!(BoolExprType::from_code(1), Some(BoolExprType::Or));
        assert_eq!(BoolExprType::from_code(3), None);
        assert_eq!(NullTestType::from_code(1), Some(NullTestType::IsNotNull));
        assert_eq!(NullTestType::from_code(2), None);
        assert_eq!(SubLinkType::from_code(4), Some(SubLinkType::Expr));
        assert_eq!(SubLinkType::Exists.to_string(), "EXISTS_SUBLINK");
    }
}
