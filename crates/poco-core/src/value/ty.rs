/// Declared type of a mapped field, or the storage type of a [`Value`](super::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Type of a null value
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    String,
    Bytes,
    Uuid,
    Date,
    Time,
    DateTime,
    Timestamp,

    /// A fieldless enum, loaded by variant name or discriminant
    Enum(&'static str),
}

impl Type {
    /// Returns `true` for the integer types, signed or not.
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::DateTime | Self::Timestamp
        )
    }
}
