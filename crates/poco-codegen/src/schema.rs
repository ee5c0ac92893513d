mod column;
use column::Column;

mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod model_attr;
use model_attr::ModelAttr;

mod poco_enum;
pub(crate) use poco_enum::PocoEnum;
