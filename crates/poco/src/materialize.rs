mod join;
pub use join::Join;

use poco_core::{
    schema::{ColumnInfo, Poco},
    Error, Mapper, Result, Row, TypeMetadata, Value,
};

/// Builds a `T` from one row.
///
/// Columns are matched to fields by name, ignoring case. Columns `T` does not
/// map are skipped, and `NULL` leaves the field at its default. `index` is the
/// row's position in its result set and is only used to report errors.
pub fn materialize<T: Poco>(
    metadata: &TypeMetadata,
    mapper: &dyn Mapper,
    row: &Row,
    index: usize,
) -> Result<T> {
    materialize_columns(metadata, mapper, row.columns(), row.values(), index)
}

pub(crate) fn materialize_columns<T: Poco>(
    metadata: &TypeMetadata,
    mapper: &dyn Mapper,
    columns: &[String],
    values: &[Value],
    index: usize,
) -> Result<T> {
    let model = T::model();
    let mut instance = T::default();

    for (column, value) in columns.iter().zip(values) {
        let Some(info) = metadata.find_column(column) else {
            continue;
        };

        let Some(field) = info.field else {
            continue;
        };

        if !info.settable {
            return Err(not_settable(metadata, info, column));
        }

        if value.is_null() {
            continue;
        }

        let coerce_err = |err: Error| {
            err.context(Error::coercion(
                index,
                column.as_str(),
                format!("{}.{}", metadata.type_name(), info.property),
            ))
        };

        let value = mapper
            .from_db(model.field(field), value.clone())
            .map_err(coerce_err)?;

        match model.set(&mut instance, field, value) {
            Some(res) => res.map_err(coerce_err)?,
            None => return Err(not_settable(metadata, info, column)),
        }
    }

    Ok(instance)
}

fn not_settable(metadata: &TypeMetadata, info: &ColumnInfo, column: &str) -> Error {
    Error::configuration(format!(
        "column `{column}` maps to {}.{}, which cannot be set",
        metadata.type_name(),
        info.property
    ))
}
