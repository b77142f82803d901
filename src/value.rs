use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A generic wrapper enum to hold any entity field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Decimal(rust_decimal::Decimal),
    Integer(i64),
    Json(serde_json::Value),
    Null,
    Text(String),
    Unsigned(u64),
    Uuid(uuid::Uuid),
}

impl FromStr for Value {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::Text(s.into()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(boolean) => write!(f, "{boolean}"),
            Value::Decimal(decimal) => write!(f, "{decimal}"),
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Json(json) => write!(f, "{json}"),
            Value::Null => write!(f, "null"),
            Value::Text(text) => write!(f, "{text}"),
            Value::Unsigned(unsigned) => write!(f, "{unsigned}"),
            Value::Uuid(uuid) => write!(f, "{uuid}"),
        }
    }
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident, $test_name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_conversion() {
                let value_instance: $ty = Default::default();
                let value: Value = value_instance.clone().into();
                assert_eq!(value.$name(), Some(&value_instance));
            }
        }
    };
}

macro_rules! value_from_widened {
    ($variant:ident, $primitive:ty, $target:ty, $test_name:ident) => {
        impl From<$primitive> for Value {
            fn from(value: $primitive) -> Self {
                Value::$variant(value.into())
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_from_widened() {
                let primitive_value: $primitive = Default::default();
                if let Value::$variant(inner_value) = Value::from(primitive_value.clone()) {
                    assert_eq!(inner_value, <$target>::from(primitive_value));
                } else {
                    panic!("Value variant does not match");
                }
            }
        }
    };
}

// implement conversions for all Value variants
impl_conv_for_value!(Boolean, bool, as_boolean, tests_boolean);
impl_conv_for_value!(Decimal, rust_decimal::Decimal, as_decimal, tests_decimal);
impl_conv_for_value!(Integer, i64, as_integer, tests_integer);
impl_conv_for_value!(Json, serde_json::Value, as_json, tests_json);
impl_conv_for_value!(Text, String, as_text, tests_text);
impl_conv_for_value!(Unsigned, u64, as_unsigned, tests_unsigned);
impl_conv_for_value!(Uuid, uuid::Uuid, as_uuid, tests_uuid);

// widening conversions from smaller primitives
value_from_widened!(Integer, i8, i64, tests_integer_from_i8);
value_from_widened!(Integer, i16, i64, tests_integer_from_i16);
value_from_widened!(Integer, i32, i64, tests_integer_from_i32);
value_from_widened!(Text, &str, String, tests_text_from_str);
value_from_widened!(Unsigned, u8, u64, tests_unsigned_from_u8);
value_from_widened!(Unsigned, u16, u64, tests_unsigned_from_u16);
value_from_widened!(Unsigned, u32, u64, tests_unsigned_from_u32);

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Decimal(_) => "Decimal",
            Value::Integer(_) => "Integer",
            Value::Json(_) => "Json",
            Value::Null => "Null",
            Value::Text(_) => "Text",
            Value::Unsigned(_) => "Unsigned",
            Value::Uuid(_) => "Uuid",
        }
    }
}
