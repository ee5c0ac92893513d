use super::materialize_columns;

use poco_core::{schema::Poco, Error, Mapper, Result, Row, TypeMetadata};

use std::sync::Arc;

/// A tuple of [`Poco`] types filled from one wide row.
///
/// The row is split left to right: the first type takes as many columns as it
/// maps, the next type the following ones, and so on. Each group is then
/// materialized on its own.
pub trait Join: Sized {
    /// Metadata of each member type, in tuple order.
    fn metadata(mapper: &Arc<dyn Mapper>) -> Vec<Arc<TypeMetadata>>;

    fn materialize(
        metadata: &[Arc<TypeMetadata>],
        mapper: &dyn Mapper,
        row: &Row,
        index: usize,
    ) -> Result<Self>;
}

/// Fails unless the row is exactly as wide as the joined types.
fn check_width(metadata: &[Arc<TypeMetadata>], row: &Row) -> Result<()> {
    let expected: usize = metadata.iter().map(|m| m.column_count()).sum();

    if row.len() == expected {
        return Ok(());
    }

    let widths = metadata
        .iter()
        .map(|m| format!("{} = {}", m.type_name(), m.column_count()))
        .collect::<Vec<_>>()
        .join(", ");

    Err(Error::protocol_sequence(format!(
        "joined row has {} columns, expected {expected} ({widths})",
        row.len()
    )))
}

macro_rules! impl_join {
    ( $( $t:ident $i:tt ),* ) => {
        impl<$( $t: Poco ),*> Join for ( $( $t, )* ) {
            fn metadata(mapper: &Arc<dyn Mapper>) -> Vec<Arc<TypeMetadata>> {
                vec![ $( TypeMetadata::of::<$t>(mapper) ),* ]
            }

            #[allow(unused_assignments)]
            fn materialize(
                metadata: &[Arc<TypeMetadata>],
                mapper: &dyn Mapper,
                row: &Row,
                index: usize,
            ) -> Result<Self> {
                check_width(metadata, row)?;

                let columns = row.columns();
                let values = row.values();
                let mut offset = 0;

                Ok(( $(
                    {
                        let end = offset + metadata[$i].column_count();
                        let item = materialize_columns::<$t>(
                            &metadata[$i],
                            mapper,
                            &columns[offset..end],
                            &values[offset..end],
                            index,
                        )?;
                        offset = end;
                        item
                    },
                )* ))
            }
        }
    };
}

impl_join!(T0 0, T1 1);
impl_join!(T0 0, T1 1, T2 2);
impl_join!(T0 0, T1 1, T2 2, T3 3);
impl_join!(T0 0, T1 1, T2 2, T3 3, T4 4);
