#![allow(dead_code)]

//! Parse-tree fixtures in the parser's JSON layout.

use serde_json::{Value, json};
use to_arel_core::{Node, SelectManager, TranslateError, translate_tree};

pub fn string(text: &str) -> Value {
    json!({"String": {"str": text}})
}

pub fn column(parts: &[&str]) -> Value {
    let fields: Vec<Value> = parts
        .iter()
        .map(|part| if *part == "*" { json!({"A_Star": {}}) } else { string(part) })
        .collect();
    json!({"ColumnRef": {"fields": fields}})
}

pub fn int(value: i64) -> Value {
    json!({"A_Const": {"val": {"Integer": {"ival": value}}}})
}

pub fn text(value: &str) -> Value {
    json!({"A_Const": {"val": string(value)}})
}

pub fn op(token: &str, left: Value, right: Value) -> Value {
    json!({"A_Expr": {"kind": 0, "name": [string(token)], "lexpr": left, "rexpr": right}})
}

pub fn eq(left: Value, right: Value) -> Value {
    op("=", left, right)
}

pub fn bool_expr(boolop: i64, args: Vec<Value>) -> Value {
    json!({"BoolExpr": {"boolop": boolop, "args": args}})
}

pub fn and(args: Vec<Value>) -> Value {
    bool_expr(0, args)
}

pub fn or(args: Vec<Value>) -> Value {
    bool_expr(1, args)
}

pub fn not(arg: Value) -> Value {
    bool_expr(2, vec![arg])
}

pub fn target(val: Value) -> Value {
    json!({"ResTarget": {"val": val}})
}

/// A scalar sub-select, `(SELECT ...)`.
pub fn sub_link(subselect: Value) -> Value {
    json!({"SubLink": {"subLinkType": 4, "subselect": subselect}})
}

pub fn range_var(name: &str) -> Value {
    json!({"RangeVar": {"relname": name, "inh": true, "relpersistence": "p"}})
}

pub fn join(jointype: i64, larg: Value, rarg: Value, quals: Option<Value>) -> Value {
    let mut attrs = json!({"jointype": jointype, "larg": larg, "rarg": rarg});
    if let Some(quals) = quals {
        attrs["quals"] = quals;
    }
    json!({"JoinExpr": attrs})
}

pub fn sort(node: Value, dir: i64) -> Value {
    json!({"SortBy": {"node": node, "sortby_dir": dir, "sortby_nulls": 0}})
}

/// A `SelectStmt` node built from its attribute mapping.
pub fn select(attrs: Value) -> Value {
    json!({"SelectStmt": attrs})
}

/// A parser result holding the given statements.
pub fn tree(statements: Vec<Value>) -> Value {
    Value::Array(
        statements
            .into_iter()
            .map(|stmt| json!({"RawStmt": {"stmt": stmt}}))
            .collect(),
    )
}

pub fn translate(statement: Value) -> SelectManager {
    let tree = tree(vec![statement]);
    translate_tree(&tree).unwrap_or_else(|e| panic!("Failed to translate: {tree}\nError: {e:?}"))
}

pub fn translate_err(statement: Value) -> TranslateError {
    let tree = tree(vec![statement]);
    translate_tree(&tree).expect_err(&format!("Expected translation error for: {tree}"))
}

/// The output column for an identifier-rendered reference.
pub fn col(parts: &[&str]) -> Node {
    let rendered: Vec<String> = parts
        .iter()
        .map(|part| if *part == "*" { (*part).to_owned() } else { format!("\"{part}\"") })
        .collect();
    Node::column(rendered.join("."))
}
