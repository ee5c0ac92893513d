use super::Value;
use crate::Error;

use rust_decimal::{prelude::ToPrimitive, Decimal};

macro_rules! impl_from_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_from_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
}

/// Converts a float to an integer type only when no information is lost.
///
/// Goes through `i128`, whose range holds every 64-bit integer exactly. The
/// upper bound is exclusive because `i128::MAX as f64` rounds up to 2^127.
macro_rules! float_to_int {
    ($val:expr, $target_ty:ty) => {{
        let val: f64 = $val;
        if val.fract() == 0.0 && val >= i128::MIN as f64 && val < i128::MAX as f64 {
            <$target_ty>::try_from(val as i128).ok()
        } else {
            None
        }
    }};
}

// Integers convert across every numeric variant as long as the value fits
// the target. Range checks go through std's `try_into()`.
macro_rules! impl_try_from_int {
    ( $( $ty:ident )* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::I8(val) => (*val).try_into().ok(),
                        Value::I16(val) => (*val).try_into().ok(),
                        Value::I32(val) => (*val).try_into().ok(),
                        Value::I64(val) => (*val).try_into().ok(),
                        Value::U8(val) => (*val).try_into().ok(),
                        Value::U16(val) => (*val).try_into().ok(),
                        Value::U32(val) => (*val).try_into().ok(),
                        Value::U64(val) => (*val).try_into().ok(),
                        Value::Bool(val) => Some(*val as $ty),
                        Value::F32(val) => float_to_int!(*val as f64, $ty),
                        Value::F64(val) => float_to_int!(*val, $ty),
                        Value::Decimal(val) if val.fract().is_zero() => {
                            val.to_i128().and_then(|val| val.try_into().ok())
                        }
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_int! { i8 i16 i32 i64 u8 u16 u32 u64 }

macro_rules! impl_try_from_float {
    ( $( $ty:ident => $to_float:ident )* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted: Option<$ty> = match &value {
                        Value::F32(val) => Some(*val as $ty),
                        Value::F64(val) => Some(*val as $ty),
                        Value::I8(val) => Some(*val as $ty),
                        Value::I16(val) => Some(*val as $ty),
                        Value::I32(val) => Some(*val as $ty),
                        Value::I64(val) => Some(*val as $ty),
                        Value::U8(val) => Some(*val as $ty),
                        Value::U16(val) => Some(*val as $ty),
                        Value::U32(val) => Some(*val as $ty),
                        Value::U64(val) => Some(*val as $ty),
                        Value::Decimal(val) => val.$to_float(),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_float! {
    f32 => to_f32
    f64 => to_f64
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Decimal(val) => Some(*val),
            Value::I8(val) => Some(Decimal::from(*val)),
            Value::I16(val) => Some(Decimal::from(*val)),
            Value::I32(val) => Some(Decimal::from(*val)),
            Value::I64(val) => Some(Decimal::from(*val)),
            Value::U8(val) => Some(Decimal::from(*val)),
            Value::U16(val) => Some(Decimal::from(*val)),
            Value::U32(val) => Some(Decimal::from(*val)),
            Value::U64(val) => Some(Decimal::from(*val)),
            Value::F32(val) => Decimal::try_from(*val).ok(),
            Value::F64(val) => Decimal::try_from(*val).ok(),
            Value::String(s) => s.trim().parse::<Decimal>().ok(),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "Decimal"))
    }
}
