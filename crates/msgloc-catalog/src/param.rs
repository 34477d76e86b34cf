//! Positional substitution parameters

use fluent_bundle::FluentValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque value substituted into a message template by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    /// `true` or `false`
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text
    Text(String),
}

impl Param {
    /// Convert to a value a Fluent pattern can consume
    pub fn to_fluent_value(&self) -> FluentValue<'static> {
        match self {
            Self::Bool(value) => FluentValue::from(value.to_string()),
            Self::Integer(value) => FluentValue::from(*value),
            Self::Float(value) => FluentValue::from(*value),
            Self::Text(value) => FluentValue::from(value.clone()),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Build a `Vec<Param>` from heterogeneous values
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::from($value)),+]
    };
}
