use crate::{materialize, Join};

use poco_core::{schema::Poco, Cursor, Error, Mapper, Result, Row, TypeMetadata};

use std::{fmt, sync::Arc};

/// Reads the result sets of a multi-statement query one after another.
///
/// Each `read` consumes exactly one result set, in order. Rows are pulled
/// from the cursor lazily as the returned [`Rows`] is iterated; rows of a set
/// left unread are skipped by the next `read`. The cursor is released on
/// [`dispose`](GridReader::dispose) or when the reader is dropped.
pub struct GridReader {
    /// `None` once disposed
    cursor: Option<Box<dyn Cursor>>,

    mapper: Arc<dyn Mapper>,

    state: State,

    /// True once the current result set was handed out
    consumed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Positioned on the result set with this index
    Active(usize),

    /// The cursor reported no more result sets
    Exhausted,

    Disposed,
}

/// Lazily materialized rows of one result set.
///
/// Iteration stops after the first error.
pub struct Rows<'a, T> {
    reader: &'a mut GridReader,
    decode: Box<dyn FnMut(&dyn Mapper, &Row, usize) -> Result<T> + 'a>,
    index: usize,
    done: bool,
}

impl GridReader {
    pub fn new(cursor: Box<dyn Cursor>, mapper: Arc<dyn Mapper>) -> GridReader {
        GridReader {
            cursor: Some(cursor),
            mapper,
            state: State::Active(0),
            consumed: false,
        }
    }

    /// Reads the next result set as `T`.
    pub fn read<T: Poco>(&mut self) -> Result<Rows<'_, T>> {
        let metadata = TypeMetadata::of::<T>(&self.mapper);
        self.next_result_set()?;

        Ok(Rows::new(self, move |mapper, row, index| {
            materialize::<T>(&metadata, mapper, row, index)
        }))
    }

    /// Reads the next result set, splitting each row over the types of `J`
    /// and handing them to `combine`.
    pub fn read_multi<'a, J, R, F>(&'a mut self, mut combine: F) -> Result<Rows<'a, R>>
    where
        J: Join,
        F: FnMut(J) -> R + 'a,
    {
        let metadata = J::metadata(&self.mapper);
        self.next_result_set()?;

        Ok(Rows::new(self, move |mapper, row, index| {
            J::materialize(&metadata, mapper, row, index).map(&mut combine)
        }))
    }

    /// Index of the current result set, while one is active.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            State::Active(index) => Some(index),
            State::Exhausted | State::Disposed => None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state == State::Disposed
    }

    /// Releases the cursor. Calling it again has no effect.
    pub fn dispose(&mut self) {
        if let Some(mut cursor) = self.cursor.take() {
            cursor.dispose();
            tracing::debug!(state = ?self.state, "cursor disposed");
        }

        self.state = State::Disposed;
    }

    /// Positions the cursor on the result set the next read consumes.
    fn next_result_set(&mut self) -> Result<()> {
        let index = match self.state {
            State::Active(index) => index,
            State::Exhausted => return Err(Error::protocol_sequence("no more result sets")),
            State::Disposed => return Err(Error::protocol_sequence("reader is disposed")),
        };

        if !self.consumed {
            self.consumed = true;
            return Ok(());
        }

        let Some(cursor) = self.cursor.as_mut() else {
            return Err(Error::protocol_sequence("reader is disposed"));
        };

        if cursor.advance_result_set()? {
            self.state = State::Active(index + 1);
            tracing::debug!(index = index + 1, "advanced to next result set");
            Ok(())
        } else {
            self.state = State::Exhausted;
            Err(Error::protocol_sequence("no more result sets"))
        }
    }
}

impl Drop for GridReader {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for GridReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridReader")
            .field("state", &self.state)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl<T> fmt::Debug for Rows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("reader", &self.reader)
            .field("index", &self.index)
            .field("done", &self.done)
            .finish()
    }
}

impl<'a, T> Rows<'a, T> {
    fn new(
        reader: &'a mut GridReader,
        decode: impl FnMut(&dyn Mapper, &Row, usize) -> Result<T> + 'a,
    ) -> Rows<'a, T> {
        Rows {
            reader,
            decode: Box::new(decode),
            index: 0,
            done: false,
        }
    }

    /// Collects the remaining rows, stopping at the first error.
    pub fn collect_all(self) -> Result<Vec<T>> {
        self.collect()
    }
}

impl<T> Iterator for Rows<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }

        let reader = &mut *self.reader;

        let Some(cursor) = reader.cursor.as_mut() else {
            self.done = true;
            return None;
        };

        match cursor.advance_row() {
            Ok(true) => {}
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        }

        let Some(row) = cursor.current_row() else {
            self.done = true;
            return None;
        };

        let res = (self.decode)(&*reader.mapper, row, self.index);

        tracing::trace!(index = self.index, ok = res.is_ok(), "materialized row");

        self.index += 1;
        self.done = res.is_err();

        Some(res)
    }
}
