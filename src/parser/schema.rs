//! Table model shared by the scanner, the aggregator and the writers.
//!
//! A report is decomposed into [`Table`]s keyed by their [`TableTitle`].
//! Tables are collected in a [`TableSet`], which keeps first-seen order so
//! that output never depends on hashing.

use crate::utils::config::{DEFAULT_IDENTIFIER_LABEL, TITLE_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single parsed CSV row. Fields are kept as opaque text.
pub type Record = Vec<String>;

/// Identity of a table across reports
///
/// Equality, hashing and ordering follow the rendered `"group - name"`
/// title, so `("a - b", "c")` and `("a", "b - c")` are the same table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTitle {
    /// Performance-counter group (e.g. "L3")
    pub group: String,

    /// Table within the group (e.g. "Region Info")
    pub name: String,
}

impl TableTitle {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Bytes of the rendered title, without allocating it
    fn rendered(&self) -> impl Iterator<Item = u8> + '_ {
        self.group
            .bytes()
            .chain(TITLE_SEPARATOR.bytes())
            .chain(self.name.bytes())
    }
}

impl PartialEq for TableTitle {
    fn eq(&self, other: &Self) -> bool {
        self.rendered().eq(other.rendered())
    }
}

impl Eq for TableTitle {}

impl Hash for TableTitle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.rendered() {
            state.write_u8(byte);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for TableTitle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TableTitle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered().cmp(other.rendered())
    }
}

impl fmt::Display for TableTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, TITLE_SEPARATOR, self.name)
    }
}

/// Column name and value injected in front of every header and row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub label: String,
    pub value: String,
}

impl Identifier {
    /// Identifier using the default "Executable" label
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: DEFAULT_IDENTIFIER_LABEL.to_string(),
            value: value.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// One named, grouped block of counter rows sharing a header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(flatten)]
    pub key: TableTitle,

    /// Identifier label followed by the report's own header fields
    pub headers: Record,

    /// Identifier value followed by the report's field values, in file order
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(key: TableTitle, headers: Record) -> Self {
        Self {
            key,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn group(&self) -> &str {
        &self.key.group
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Derived `"group - name"` title
    pub fn title(&self) -> String {
        self.key.to_string()
    }

    pub fn add_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Record>) {
        self.rows.extend(rows);
    }

    /// Rows whose width differs from the header's
    pub fn ragged_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.len() != self.headers.len())
            .count()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table<group='{}', name='{}', rows={}>",
            self.key.group,
            self.key.name,
            self.rows.len()
        )
    }
}

/// Mapping from title to table that iterates in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet {
    tables: Vec<Table>,
    index: HashMap<TableTitle, usize>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table under its title, or append its rows to the table
    /// already stored under that title. Stored headers are never replaced.
    ///
    /// **Public** - the single merge rule used by scanner and aggregator
    pub fn insert_or_extend(&mut self, table: Table) {
        match self.index.get(&table.key) {
            Some(&slot) => self.tables[slot].add_rows(table.rows),
            None => {
                self.index.insert(table.key.clone(), self.tables.len());
                self.tables.push(table);
            }
        }
    }

    /// Fold every table of `other` into this set, in `other`'s order
    pub fn merge(&mut self, other: TableSet) {
        for table in other.tables {
            self.insert_or_extend(table);
        }
    }

    pub fn get(&self, title: &TableTitle) -> Option<&Table> {
        self.index.get(title).map(|&slot| &self.tables[slot])
    }

    pub fn contains(&self, title: &TableTitle) -> bool {
        self.index.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &TableTitle> {
        self.tables.iter().map(|t| &t.key)
    }

    /// Row count summed over every table
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}

impl<'a> IntoIterator for &'a TableSet {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl FromIterator<Table> for TableSet {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        let mut set = TableSet::new();
        for table in iter {
            set.insert_or_extend(table);
        }
        set
    }
}
