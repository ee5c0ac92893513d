mod mapper;
pub use mapper::{default_mapper, Builder as MapperBuilder, ConventionMapper, Inflection, Mapper, TableInfo};

mod metadata;
pub use metadata::{flush_cache, ColumnInfo, Instance, TypeMetadata};

mod model;
pub use model::{Field, FieldInfo, Model, ModelInfo, Path, Poco};

mod record;
pub use record::Record;
