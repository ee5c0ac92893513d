use crate::{Result, Value};

use std::{fmt, sync::Arc};

/// A forward-only cursor over the result sets of one query.
///
/// A new cursor is positioned on the first result set, before its first row.
/// Moving to the next result set discards the unread rows of the current one.
/// No result set can be visited twice.
pub trait Cursor: Send {
    /// Column names of the current result set. Empty once the cursor moved
    /// past the last result set.
    fn columns(&self) -> &[String];

    /// True when [`current_row`](Self::current_row) returns a row.
    fn has_current_row(&self) -> bool {
        self.current_row().is_some()
    }

    /// The row the cursor is positioned on.
    fn current_row(&self) -> Option<&Row>;

    /// Moves to the next row of the current result set. Returns `false` when
    /// the set has no more rows.
    fn advance_row(&mut self) -> Result<bool>;

    /// Moves to the next result set. Returns `false` when there is none.
    fn advance_result_set(&mut self) -> Result<bool>;

    /// Releases the underlying resources. Further calls are no-ops.
    fn dispose(&mut self);
}

/// One row of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Shared by every row of the same result set
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Row {
        assert_eq!(
            columns.len(),
            values.len(),
            "row width does not match its columns"
        );
        Row { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value of the column named `name`, compared case-insensitively.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        let index = self
            .columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))?;
        self.values.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl fmt::Debug for dyn Cursor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("columns", &self.columns())
            .finish_non_exhaustive()
    }
}
