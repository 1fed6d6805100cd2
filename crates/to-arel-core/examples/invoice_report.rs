//! Invoice Report - Translating a Parse Tree
//!
//! This example translates the parse tree of an invoicing report query:
//!
//! ```sql
//! SELECT c.name AS client, sum(i.total)
//! FROM invoices i
//! LEFT JOIN clients c ON i.client_id = c.id
//! WHERE i.status = 'overdue' AND (i.currency = 'EUR' OR i.currency = 'USD')
//! ORDER BY c.name
//! LIMIT 20
//! ```
//!
//! The tree is the JSON the PostgreSQL parser produces for that statement.
//!
//! Run with: cargo run --example invoice_report

use serde_json::{Value, json};
use to_arel_core::{Node, translate_tree};

fn string(text: &str) -> Value {
    json!({"String": {"str": text}})
}

fn column(table: &str, name: &str) -> Value {
    json!({"ColumnRef": {"fields": [string(table), string(name)]}})
}

fn text(value: &str) -> Value {
    json!({"A_Const": {"val": string(value)}})
}

fn eq(left: Value, right: Value) -> Value {
    json!({"A_Expr": {"kind": 0, "name": [string("=")], "lexpr": left, "rexpr": right}})
}

fn table(name: &str, alias: &str) -> Value {
    json!({"RangeVar": {"relname": name, "inh": true, "alias": {"Alias": {"aliasname": alias}}}})
}

fn main() {
    let report = json!({"SelectStmt": {
        "targetList": [
            {"ResTarget": {"name": "client", "val": column("c", "name")}},
            {"ResTarget": {"val": {"FuncCall": {
                "funcname": [string("sum")],
                "args": [column("i", "total")],
            }}}},
        ],
        "fromClause": [{"JoinExpr": {
            "jointype": 1,
            "larg": table("invoices", "i"),
            "rarg": table("clients", "c"),
            "quals": eq(column("i", "client_id"), column("c", "id")),
        }}],
        "whereClause": {"BoolExpr": {"boolop": 0, "args": [
            eq(column("i", "status"), text("overdue")),
            {"BoolExpr": {"boolop": 1, "args": [
                eq(column("i", "currency"), text("EUR")),
                eq(column("i", "currency"), text("USD")),
            ]}},
        ]}},
        "sortClause": [{"SortBy": {"node": column("c", "name"), "sortby_dir": 0}}],
        "limitCount": {"A_Const": {"val": {"Integer": {"ival": 20}}}},
    }});
    let tree = json!([{"RawStmt": {"stmt": report}}]);

    match translate_tree(&tree) {
        Ok(manager) => {
            println!("=== Sources ===");
            for table in manager.source().unwrap_or_default() {
                println!("  {} AS {}", table.name, table.display_name());
            }
            for join in manager.joins() {
                println!("  {} {}", join.kind.as_str(), join.right.name);
            }

            println!("\n=== Filter ===");
            if let Some(Node::And(parts)) = manager.filter() {
                println!("  conjunction of {} terms", parts.len());
            }

            println!("\n=== Query tree ===");
            match serde_json::to_string_pretty(&manager) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Serialization failed: {e}"),
            }
        }
        Err(e) => eprintln!("Translation failed ({}): {}", e.kind(), e.detail()),
    }
}
