use super::{Cursor, Row};
use crate::{Error, Result, Value};

use std::{collections::VecDeque, sync::Arc, vec};

/// A buffered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    columns: Arc<[String]>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new<I>(columns: I) -> ResultSet
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ResultSet {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row. Panics if the row is not as wide as the result set.
    pub fn push_row(&mut self, values: Vec<Value>) {
        assert_eq!(
            self.columns.len(),
            values.len(),
            "row width does not match the result set"
        );
        self.rows.push(values);
    }

    pub fn with_row<I>(mut self, values: I) -> ResultSet
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_row(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A [`Cursor`] over result sets held in memory.
#[derive(Debug)]
pub struct MemoryCursor {
    pending: VecDeque<ResultSet>,
    current: Option<Current>,
    disposed: bool,
}

#[derive(Debug)]
struct Current {
    columns: Arc<[String]>,
    rows: vec::IntoIter<Vec<Value>>,
    row: Option<Row>,
}

impl MemoryCursor {
    pub fn new(result_sets: impl IntoIterator<Item = ResultSet>) -> MemoryCursor {
        let mut pending: VecDeque<_> = result_sets.into_iter().collect();
        let current = pending.pop_front().map(Current::new);

        MemoryCursor {
            pending,
            current,
            disposed: false,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn check_open(&self) -> Result<()> {
        if self.disposed {
            Err(Error::protocol_sequence("cursor is disposed"))
        } else {
            Ok(())
        }
    }
}

impl Current {
    fn new(result_set: ResultSet) -> Current {
        Current {
            columns: result_set.columns,
            rows: result_set.rows.into_iter(),
            row: None,
        }
    }
}

impl Cursor for MemoryCursor {
    fn columns(&self) -> &[String] {
        match &self.current {
            Some(current) => &current.columns,
            None => &[],
        }
    }

    fn current_row(&self) -> Option<&Row> {
        self.current.as_ref()?.row.as_ref()
    }

    fn advance_row(&mut self) -> Result<bool> {
        self.check_open()?;

        let Some(current) = &mut self.current else {
            return Ok(false);
        };

        current.row = current
            .rows
            .next()
            .map(|values| Row::new(current.columns.clone(), values));

        Ok(current.row.is_some())
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        self.check_open()?;

        self.current = self.pending.pop_front().map(Current::new);
        Ok(self.current.is_some())
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.pending.clear();
        self.current = None;
    }
}
