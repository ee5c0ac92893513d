use std::fmt::Debug;

/// Identifier quoting rules of a SQL dialect.
pub trait Dialect: Debug + Send + Sync {
    /// Quotes a single identifier.
    fn escape_identifier(&self, name: &str) -> String;

    /// Quotes a table name. Names containing `.` are taken to be qualified
    /// already and are returned unchanged.
    fn escape_table_name(&self, name: &str) -> String {
        if name.contains('.') {
            name.to_string()
        } else {
            self.escape_identifier(name)
        }
    }
}
