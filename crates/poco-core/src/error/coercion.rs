use super::Error;

/// A column value could not be coerced into its target field.
///
/// Usually carries a type conversion error as its cause.
#[derive(Debug)]
pub(super) struct CoercionError {
    row: usize,
    column: Box<str>,
    target: Box<str>,
}

impl std::error::Error for CoercionError {}

impl core::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot coerce column `{}` of row {} into {}",
            self.column, self.row, self.target
        )
    }
}

impl Error {
    /// Creates a coercion error for `column` of the `row`-th row (zero-based
    /// within its result set). `target` names the type and field, e.g.
    /// `Person.age`.
    pub fn coercion(row: usize, column: impl Into<String>, target: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Coercion(CoercionError {
            row,
            column: column.into().into(),
            target: target.into().into(),
        }))
    }

    /// Returns `true` if this error is a coercion error.
    pub fn is_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Coercion(_))
    }
}
