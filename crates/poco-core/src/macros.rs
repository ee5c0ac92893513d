/// Builds a [`Record`](crate::schema::Record) from `column => value` pairs.
#[macro_export]
macro_rules! record {
    (
        $( $column:expr => $value:expr ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut record = $crate::schema::Record::new();
        $(
            record.insert($column, $value);
        )*
        record
    }};
}
