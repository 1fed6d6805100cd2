//! SELECT assembly: statements, FROM items and joins.

use serde_json::Value;
use tracing::debug;

use crate::arel::{Join, JoinKind, Node, SelectManager, SourceItem, SourceList};
use crate::error::{Result, TranslateError};
use crate::node::codes::JoinType;
use crate::node::{Attributes, NodeKind, read_tag};

use super::{Context, NESTED_SELECT_WEIGHT, Translator};

/// SELECT attributes with no counterpart on [`SelectManager`], paired with
/// the clause name used in errors.
const UNSUPPORTED_CLAUSES: [(&str, &str); 8] = [
    ("distinctClause", "DISTINCT"),
    ("intoClause", "INTO"),
    ("groupClause", "GROUP BY"),
    ("havingClause", "HAVING"),
    ("windowClause", "WINDOW"),
    ("valuesLists", "VALUES"),
    ("lockingClause", "FOR UPDATE"),
    ("withClause", "WITH"),
];

impl Translator {
    pub(super) fn handle_select_stmt(
        &mut self,
        attrs: Attributes<'_>,
        _ctx: Context,
    ) -> Result<Node> {
        let manager =
            self.descend_by(NESTED_SELECT_WEIGHT, |this| this.select_manager(attrs))?;
        Ok(Node::Select(Box::new(manager)))
    }

    pub(super) fn handle_raw_stmt(&mut self, attrs: Attributes<'_>, ctx: Context) -> Result<Node> {
        self.translate(attrs.node("stmt")?, ctx)
    }

    /// Builds the query object for a `SelectStmt`.
    ///
    /// Plain FROM tables become the manager's source and every join is
    /// attached in source order. Target, sort, limit, offset and filter
    /// children are translated with the default context.
    pub(super) fn select_manager(&mut self, attrs: Attributes<'_>) -> Result<SelectManager> {
        reject_unsupported_clauses(attrs)?;

        let sources = match attrs.opt_list("fromClause")? {
            Some(items) => self.translate_sources(items)?,
            None => SourceList::new(),
        };
        let (source, joins) = sources.partition();

        let projections = match attrs.opt_list("targetList")? {
            Some(targets) => self.translate_all(targets)?,
            None => Vec::new(),
        };
        let filter = self.translate_optional(attrs.get("whereClause"))?;
        let orders = match attrs.opt_list("sortClause")? {
            Some(sorts) => self.translate_all(sorts)?,
            None => Vec::new(),
        };
        let limit = self.translate_optional(attrs.get("limitCount"))?;
        let offset = self.translate_optional(attrs.get("limitOffset"))?;

        debug!(
            "SELECT with {} projection(s), {} join(s), {} ordering(s)",
            projections.len(),
            joins.len(),
            orders.len()
        );

        let mut manager = SelectManager::new(source)
            .with_projections(projections)
            .with_limit(limit)
            .with_offset(offset);
        if let Some(filter) = filter {
            manager = manager.where_clause(filter);
        }
        let manager = orders.into_iter().fold(manager, SelectManager::order);
        Ok(joins.into_iter().fold(manager, SelectManager::join))
    }

    fn translate_optional(&mut self, node: Option<&Value>) -> Result<Option<Node>> {
        node.map(|node| self.translate(node, Context::new()))
            .transpose()
    }

    fn translate_sources(&mut self, items: &[Value]) -> Result<SourceList> {
        let mut sources = SourceList::new();
        for item in items {
            sources.extend(self.translate_from_item(item)?);
        }
        Ok(sources)
    }

    /// Translates one FROM item into the sources it contributes: a single
    /// base table, or a flattened join chain.
    fn translate_from_item(&mut self, item: &Value) -> Result<SourceList> {
        let (tag, attrs) = read_tag(item)?;
        if NodeKind::from_tag(tag) == Some(NodeKind::JoinExpr) {
            return self.descend(|this| this.translate_join(attrs));
        }

        match self.translate(item, Context::new())? {
            Node::Table(table) => Ok(SourceList::base(table)),
            _ => Err(NodeKind::from_tag(tag).map_or_else(
                || TranslateError::UnknownNodeKind(tag.to_owned()),
                |kind| TranslateError::MisplacedNode {
                    kind,
                    position: "a FROM clause",
                },
            )),
        }
    }

    /// Flattens `larg JOIN rarg ON quals` onto the sources of `larg`.
    ///
    /// Left-deep chains recurse through `larg`, so `(a JOIN b) JOIN c`
    /// yields `a`, then the join to `b`, then the join to `c`.
    fn translate_join(&mut self, attrs: Attributes<'_>) -> Result<SourceList> {
        if attrs.flag("isNatural")? {
            return Err(TranslateError::unsupported("join", "NATURAL"));
        }
        if attrs.contains("usingClause") {
            return Err(TranslateError::unsupported("join", "USING"));
        }
        if attrs.contains("alias") {
            return Err(TranslateError::unsupported("join", "aliased join"));
        }

        let code = attrs.code("jointype")?;
        let kind = match JoinType::from_code(code) {
            Some(JoinType::Inner) => JoinKind::Inner,
            Some(JoinType::Left) => JoinKind::Outer,
            Some(JoinType::Full) => JoinKind::FullOuter,
            Some(JoinType::Right) => JoinKind::RightOuter,
            Some(other) => return Err(TranslateError::unsupported("join type", other)),
            None => return Err(TranslateError::unsupported("join type", code)),
        };

        let mut sources = self.translate_from_item(attrs.node("larg")?)?;
        let right = self
            .translate_from_item(attrs.node("rarg")?)?
            .into_single_table()
            .ok_or_else(|| TranslateError::unsupported("join", "join on the right-hand side"))?;
        let on = self.translate_optional(attrs.get("quals"))?;

        sources.push(SourceItem::Join(Join::new(kind, right, on)));
        Ok(sources)
    }
}

fn reject_unsupported_clauses(attrs: Attributes<'_>) -> Result<()> {
    if let Some((_, clause)) = UNSUPPORTED_CLAUSES
        .iter()
        .find(|(key, _)| attrs.contains(key))
    {
        return Err(TranslateError::unsupported("SELECT clause", clause));
    }

    let set_op = attrs.code("op")?;
    if set_op != 0 {
        return Err(TranslateError::unsupported("set operation", set_op));
    }
    Ok(())
}
