//! Leaf and naming handlers: strings, integers, column and table references,
//! aliases and projection targets.

use crate::arel::{Node, Table};
use crate::error::Result;
use crate::node::Attributes;

use super::{Context, LiteralMode, Translator};

/// Wraps `text` in `quote`, doubling any embedded quote characters.
fn quoted(text: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    format!("{quote}{}{quote}", text.replace(quote, &doubled))
}

// Handlers all take the dispatch signature, used or not.
#[allow(clippy::unused_self, clippy::unnecessary_wraps)]
impl Translator {
    pub(super) fn handle_string(&mut self, attrs: Attributes<'_>, ctx: Context) -> Result<Node> {
        let text = attrs.str("str")?;
        let fragment = match ctx.literal {
            LiteralMode::Operator => text.to_owned(),
            LiteralMode::Constant => quoted(text, '\''),
            LiteralMode::Identifier => quoted(text, '"'),
        };
        Ok(Node::sql(fragment))
    }

    pub(super) fn handle_integer(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        Ok(Node::integer(attrs.int("ival")?))
    }

    pub(super) fn handle_a_star(&mut self, _attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        Ok(Node::Star)
    }

    pub(super) fn handle_a_const(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        self.translate(attrs.node("val")?, Context::literal(LiteralMode::Constant))
    }

    /// Each field renders on its own, then the parts are joined with `.`
    /// into an unbound column: `users.id` becomes `"users"."id"`.
    pub(super) fn handle_column_ref(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let parts = attrs
            .list("fields")?
            .iter()
            .map(|field| self.translate_fragment(field, Context::new(), "ColumnRef field"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::Column(parts.join(".")))
    }

    pub(super) fn handle_alias(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        Ok(Node::sql(attrs.str("aliasname")?))
    }

    pub(super) fn handle_range_var(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let mut table = Table::new(attrs.str("relname")?);
        if let Some(schema) = attrs.opt_str("schemaname")? {
            table = table.with_schema(schema);
        }
        if let Some(alias) = attrs.get("alias") {
            let alias = self.translate_fragment(alias, Context::new(), "table alias")?;
            table = table.with_alias(alias);
        }
        Ok(Node::Table(table))
    }

    pub(super) fn handle_res_target(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let value = self.translate(attrs.node("val")?, Context::new())?;
        Ok(match attrs.opt_str("name")? {
            Some(name) => value.alias(name),
            None => value,
        })
    }
}
