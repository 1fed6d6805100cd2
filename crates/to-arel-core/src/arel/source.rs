//! Flattened FROM-clause sources.

use super::nodes::{Join, Table};

/// One entry of a FROM clause after join chains have been flattened.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceItem {
    /// A plain table.
    Base(Table),
    /// A table joined onto whatever precedes it.
    Join(Join),
}

/// An ordered list of FROM-clause sources.
///
/// A left-deep join tree `(a JOIN b) JOIN c` flattens to
/// `[Base(a), Join(b), Join(c)]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceList {
    items: Vec<SourceItem>,
}

impl SourceList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a list holding one base table.
    #[must_use]
    pub fn base(table: Table) -> Self {
        Self {
            items: vec![SourceItem::Base(table)],
        }
    }

    /// Appends a source.
    pub fn push(&mut self, item: SourceItem) {
        self.items.push(item);
    }

    /// Returns the sources in order.
    #[must_use]
    pub fn items(&self) -> &[SourceItem] {
        &self.items
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the table if the list is exactly one base table.
    #[must_use]
    pub fn into_single_table(self) -> Option<Table> {
        let mut items = self.items.into_iter();
        match (items.next(), items.next()) {
            (Some(SourceItem::Base(table)), None) => Some(table),
            _ => None,
        }
    }

    /// Splits the list into base tables and joins, each in source order.
    /// The base list is `None` when there are no plain tables.
    #[must_use]
    pub fn partition(self) -> (Option<Vec<Table>>, Vec<Join>) {
        let mut tables = Vec::new();
        let mut joins = Vec::new();
        for item in self.items {
            match item {
                SourceItem::Base(table) => tables.push(table),
                SourceItem::Join(join) => joins.push(join),
            }
        }
        let tables = if tables.is_empty() { None } else { Some(tables) };
        (tables, joins)
    }
}

impl Extend<SourceItem> for SourceList {
    fn extend<I: IntoIterator<Item = SourceItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for SourceList {
    type Item = SourceItem;
    type IntoIter = std::vec::IntoIter<SourceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
