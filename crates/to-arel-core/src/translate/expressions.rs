//! Expression handlers: operators, boolean logic, null tests, function calls
//! and ORDER BY entries.

use tracing::debug;

use crate::arel::{AggregateFunction, ComparisonOp, Node};
use crate::error::{Result, TranslateError};
use crate::node::codes::{AExprKind, BoolExprType, NullTestType, SortByDir};
use crate::node::Attributes;

use super::{Context, LiteralMode, Translator};

/// Builds the comparison for an operator token.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedOperator`] for any token outside
/// `=`, `<>`, `>`, `>=`, `<` and `<=`.
pub fn generate_comparison(left: Node, right: Node, token: &str) -> Result<Node> {
    ComparisonOp::from_token(token)
        .map(|op| left.compare(op, right))
        .ok_or_else(|| TranslateError::UnsupportedOperator(token.to_owned()))
}

/// Folds operands into a right-nested OR chain: `[a, b, c]` becomes
/// `Or(a, Or(b, c))`. Returns `None` for an empty list.
#[must_use]
pub fn or_chain(operands: Vec<Node>) -> Option<Node> {
    operands
        .into_iter()
        .rev()
        .reduce(|rest, operand| operand.or(rest))
}

impl Translator {
    pub(super) fn handle_a_expr(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        let code = attrs.code("kind")?;
        let kind = AExprKind::from_code(code)
            .ok_or_else(|| TranslateError::unsupported("expression kind", code))?;

        match kind {
            AExprKind::Op => {
                let left = self.translate(attrs.node("lexpr")?, Context::new())?;
                let right = self.translate(attrs.node("rexpr")?, Context::new())?;
                let token = self.operator_token(attrs)?;
                generate_comparison(left, right, &token)
            }
            AExprKind::OpAny => {
                let left = self.translate(attrs.node("lexpr")?, Context::new())?;
                let right = self.translate(attrs.node("rexpr")?, Context::new())?;
                let token = self.operator_token(attrs)?;
                let any = Node::NamedFunction {
                    name: String::from("ANY"),
                    args: vec![right],
                };
                generate_comparison(left, any, &token)
            }
            AExprKind::In => {
                let left = self.translate(attrs.node("lexpr")?, Context::new())?;
                let list = self.translate_all(attrs.list("rexpr")?)?;
                // The parser spells NOT IN as `<>` over the list.
                Ok(if self.operator_token(attrs)? == "<>" {
                    left.not_in_list(list)
                } else {
                    left.in_list(list)
                })
            }
            other => Err(TranslateError::unsupported("expression kind", other)),
        }
    }

    /// Reads the operator from the first component of `name`.
    fn operator_token(&mut self, attrs: Attributes<'_>) -> Result<String> {
        let name = attrs
            .list("name")?
            .first()
            .ok_or_else(|| TranslateError::invalid(attrs.kind(), "name", "an empty"))?;
        self.translate_fragment(name, Context::literal(LiteralMode::Operator), "operator name")
    }

    pub(super) fn handle_bool_expr(&mut self, attrs: Attributes<'_>, ctx: Context) -> Result<Node> {
        let code = attrs.code("boolop")?;
        let op = BoolExprType::from_code(code)
            .ok_or_else(|| TranslateError::unsupported("boolean operator", code))?;

        let mut args = attrs
            .list("args")?
            .iter()
            .map(|arg| self.translate(arg, Context::nested()))
            .collect::<Result<Vec<_>>>()?;

        let expr = match op {
            BoolExprType::And if !args.is_empty() => Node::And(args),
            BoolExprType::Or => {
                or_chain(args)
                    .ok_or_else(|| TranslateError::invalid("BoolExpr", "args", "an empty"))?
            }
            BoolExprType::Not if args.len() == 1 => args.remove(0).negate(),
            BoolExprType::Not => {
                return Err(TranslateError::MalformedNode(format!(
                    "NOT takes exactly one argument, found {}",
                    args.len()
                )))
            }
            BoolExprType::And => {
                return Err(TranslateError::invalid("BoolExpr", "args", "an empty"));
            }
        };

        Ok(if ctx.nested { expr.grouped() } else { expr })
    }

    pub(super) fn handle_null_test(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let arg = self.translate(attrs.node("arg")?, Context::new())?;
        let code = attrs.code("nulltesttype")?;
        match NullTestType::from_code(code) {
            Some(NullTestType::IsNull) => Ok(arg.is_null()),
            Some(NullTestType::IsNotNull) => Ok(arg.is_not_null()),
            None => Err(TranslateError::unsupported("null test", code)),
        }
    }

    pub(super) fn handle_func_call(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let funcname = attrs
            .list("funcname")?
            .first()
            .ok_or_else(|| TranslateError::invalid("FuncCall", "funcname", "an empty"))?;
        let name = self.translate_fragment(
            funcname,
            Context::literal(LiteralMode::Operator),
            "function name",
        )?;
        let function = AggregateFunction::from_name(&name)
            .ok_or_else(|| TranslateError::UnsupportedFunction(name.clone()))?;

        if attrs.contains("over") {
            return Err(TranslateError::unsupported("window function", name));
        }
        if attrs.contains("agg_filter") {
            return Err(TranslateError::unsupported("aggregate FILTER clause", name));
        }
        if attrs.contains("agg_order") || attrs.flag("agg_within_group")? {
            return Err(TranslateError::unsupported("ordered aggregate", name));
        }

        let args = if attrs.flag("agg_star")? {
            vec![Node::Star]
        } else {
            match attrs.opt_list("args")? {
                Some(args) => self.translate_all(args)?,
                None => Vec::new(),
            }
        };
        let distinct = attrs.flag("agg_distinct")?;
        debug!("Aggregate {} over {} argument(s)", function.as_str(), args.len());

        Ok(Node::Aggregate {
            function,
            args,
            distinct,
        })
    }

    pub(super) fn handle_sort_by(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        let expr = self.translate(attrs.node("node")?, Context::new())?;

        let nulls = attrs.code("sortby_nulls")?;
        if nulls != 0 {
            return Err(TranslateError::unsupported("NULLS ordering", nulls));
        }

        let code = attrs.code("sortby_dir")?;
        match SortByDir::from_code(code) {
            Some(SortByDir::Default | SortByDir::Asc) => Ok(expr.asc()),
            Some(SortByDir::Desc) => Ok(expr.desc()),
            Some(dir @ SortByDir::Using) => Err(TranslateError::unsupported("sort direction", dir)),
            None => Err(TranslateError::unsupported("sort direction", code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::{Value, json};

    fn column(name: &str) -> Value {
        json!({"ColumnRef": {"fields": [{"String": {"str": name}}]}})
    }

    fn int(value: i64) -> Value {
        json!({"A_Const": {"val": {"Integer": {"ival": value}}}})
    }

    fn op(token: &str, left: Value, right: Value) -> Value {
        json!({"A_Expr": {
            "kind": 0,
            "name": [{"String": {"str": token}}],
            "lexpr": left,
            "rexpr": right,
        }})
    }

    fn col(name: &str) -> Node {
        Node::column(format!("\"{name}\""))
    }

    #[test]
    fn test_every_comparison_token_translates() {
        let mut translator = Translator::new();
        for token in ["=", "<>", ">", ">=", "<", "<="] {
            let node = translator
                .translate(&op(token, column("a"), int(1)), Context::new())
                .unwrap();
            let op = ComparisonOp::from_token(token).unwrap();
            let expected = col("a").compare(op, Node::Integer(1));
            assert_eq!(node, expected);
        }
    }

    #[test]
    fn test_other_tokens_are_unsupported() {
        let mut translator = Translator::new();
        for token in ["~~", "!=", "||", "+"] {
            let err = translator
                .translate(&op(token, column("a"), int(1)), Context::new())
                .unwrap_err();
            assert!(matches!(&err, TranslateError::UnsupportedOperator(t) if t == token));
        }
    }

    #[test]
    fn test_generate_comparison_is_total_over_tokens() {
        assert!(generate_comparison(Node::Null, Node::Null, "=").is_ok());
        assert_eq!(
            generate_comparison(Node::Null, Node::Null, "like").unwrap_err().kind(),
            ErrorKind::UnsupportedOperator
        );
    }

    #[test]
    fn test_op_any_wraps_the_right_side() {
        let node = json!({"A_Expr": {
            "kind": 1,
            "name": [{"String": {"str": "="}}],
            "lexpr": column("id"),
            "rexpr": column("ids"),
        }});
        let translated = Translator::new().translate(&node, Context::new()).unwrap();
        assert_eq!(
            translated,
            col("id").eq(Node::NamedFunction {
                name: "ANY".into(),
                args: vec![col("ids")],
            })
        );
    }

    #[test]
    fn test_in_lists_honor_negation() {
        let list = json!([int(1), int(2)]);
        let mut translator = Translator::new();

        let positive = json!({"A_Expr": {
            "kind": 7, "name": [{"String": {"str": "="}}], "lexpr": column("x"), "rexpr": list.clone(),
        }});
        assert_eq!(
            translator.translate(&positive, Context::new()).unwrap(),
            col("x").in_list(vec![Node::Integer(1), Node::Integer(2)])
        );

        let negative = json!({"A_Expr": {
            "kind": 7, "name": [{"String": {"str": "<>"}}], "lexpr": column("x"), "rexpr": list,
        }});
        assert_eq!(
            translator.translate(&negative, Context::new()).unwrap(),
            col("x").not_in_list(vec![Node::Integer(1), Node::Integer(2)])
        );
    }

    #[test]
    fn test_between_and_like_kinds_are_rejected() {
        let mut translator = Translator::new();
        for kind in [5, 8, 11, 12, 13, 14] {
            let node = json!({"A_Expr": {
                "kind": kind, "name": [{"String": {"str": "="}}],
                "lexpr": column("a"), "rexpr": int(1),
            }});
            let err = translator.translate(&node, Context::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct, "kind {kind}");
        }
    }

    #[test]
    fn test_or_chain_nests_right() {
        let chain = or_chain(vec![Node::sql("a"), Node::sql("b"), Node::sql("c")]).unwrap();
        assert_eq!(
            chain,
            Node::sql("a").or(Node::sql("b").or(Node::sql("c")))
        );
        assert_eq!(or_chain(vec![Node::sql("a")]), Some(Node::sql("a")));
        assert_eq!(or_chain(Vec::new()), None);
    }

    #[test]
    fn test_bool_operands_are_grouped_when_nested() {
        let inner = json!({"BoolExpr": {"boolop": 1, "args": [
            op("=", column("a"), int(1)),
            op("=", column("b"), int(2)),
        ]}});
        let outer = json!({"BoolExpr": {"boolop": 0, "args": [inner, op(">", column("c"), int(3))]}});

        let node = Translator::new().translate(&outer, Context::new()).unwrap();
        let expected = Node::And(vec![
            col("a")
                .eq(Node::Integer(1))
                .or(col("b").eq(Node::Integer(2)))
                .grouped(),
            col("c").gt(Node::Integer(3)),
        ]);
        assert_eq!(node, expected);
    }

    #[test]
    fn test_not_requires_one_argument() {
        let mut translator = Translator::new();
        let single = json!({"BoolExpr": {"boolop": 2, "args": [op("=", column("a"), int(1))]}});
        assert_eq!(
            translator.translate(&single, Context::new()).unwrap(),
            col("a").eq(Node::Integer(1)).negate()
        );

        let double = json!({"BoolExpr": {"boolop": 2, "args": [int(1), int(2)]}});
        let err = translator.translate(&double, Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedNode);

        let empty = json!({"BoolExpr": {"boolop": 1, "args": []}});
        let err = translator.translate(&empty, Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedNode);
    }

    #[test]
    fn test_null_tests() {
        let mut translator = Translator::new();
        let is_null = json!({"NullTest": {"arg": column("d")}});
        let not_null = json!({"NullTest": {"arg": column("d"), "nulltesttype": 1}});

        assert_eq!(
            translator.translate(&is_null, Context::new()).unwrap(),
            col("d").eq(Node::Null)
        );
        assert_eq!(
            translator.translate(&not_null, Context::new()).unwrap(),
            col("d").not_eq(Node::Null)
        );
    }

    #[test]
    fn test_aggregates() {
        let mut translator = Translator::new();
        let count_star = json!({"FuncCall": {
            "funcname": [{"String": {"str": "count"}}], "agg_star": true,
        }});
        assert_eq!(
            translator.translate(&count_star, Context::new()).unwrap(),
            Node::Aggregate {
                function: AggregateFunction::Count,
                args: vec![Node::Star],
                distinct: false,
            }
        );

        let sum_distinct = json!({"FuncCall": {
            "funcname": [{"String": {"str": "sum"}}],
            "args": [column("total")],
            "agg_distinct": true,
        }});
        assert_eq!(
            translator.translate(&sum_distinct, Context::new()).unwrap(),
            Node::Aggregate {
                function: AggregateFunction::Sum,
                args: vec![col("total")],
                distinct: true,
            }
        );
    }

    #[test]
    fn test_unknown_functions_and_windows_are_rejected() {
        let mut translator = Translator::new();
        let avg = json!({"FuncCall": {"funcname": [{"String": {"str": "avg"}}], "args": [column("x")]}});
        assert!(matches!(
            translator.translate(&avg, Context::new()).unwrap_err(),
            TranslateError::UnsupportedFunction(name) if name == "avg"
        ));

        let window = json!({"FuncCall": {
            "funcname": [{"String": {"str": "count"}}], "agg_star": true,
            "over": {"WindowDef": {}},
        }});
        assert_eq!(
            translator.translate(&window, Context::new()).unwrap_err().kind(),
            ErrorKind::UnsupportedConstruct
        );
    }

    #[test]
    fn test_sort_directions() {
        let mut translator = Translator::new();
        let sort = |dir: i64| json!({"SortBy": {"node": column("n"), "sortby_dir": dir}});

        assert_eq!(translator.translate(&sort(0), Context::new()).unwrap(), col("n").asc());
        assert_eq!(translator.translate(&sort(1), Context::new()).unwrap(), col("n").asc());
        assert_eq!(translator.translate(&sort(2), Context::new()).unwrap(), col("n").desc());
        assert_eq!(
            translator.translate(&sort(3), Context::new()).unwrap_err().kind(),
            ErrorKind::UnsupportedConstruct
        );

        let nulls_first = json!({"SortBy": {"node": column("n"), "sortby_nulls": 1}});
        assert!(translator.translate(&nulls_first, Context::new()).is_err());
    }
}
