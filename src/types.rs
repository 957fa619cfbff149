//! Runtime type universe shared by hand-written graphs and generated bindings.
//!
//! Every slot carries a [`ValueType`]. Generated code names those types statically through
//! marker types implementing [`SlotType`]: the built-in scalars live here, host-specific
//! nominal types and closed choice sets are declared by the generator with
//! [`nominal_type!`](crate::nominal_type) and [`choice_type!`](crate::choice_type).

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declared type of an input or output slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValueType {
    Int,
    Float,
    String,
    Boolean,
    /// The open wildcard. Only equal to itself.
    Any,
    /// A closed set of literal choices, compared as a set.
    Choice(Vec<Value>),
    /// A host type with no behaviour beyond its name.
    Named(String),
}

impl ValueType {
    /// Resolves a host scalar type name. `"*"` is the wildcard.
    pub fn from_name(name: &str) -> Self {
        match name {
            "INT" => ValueType::Int,
            "FLOAT" => ValueType::Float,
            "STRING" => ValueType::String,
            "BOOLEAN" => ValueType::Boolean,
            "*" => ValueType::Any,
            other => ValueType::Named(other.to_string()),
        }
    }

    /// The name the host uses for this type, used for output lookups by type.
    pub fn type_name(&self) -> &str {
        match self {
            ValueType::Int => "INT",
            ValueType::Float => "FLOAT",
            ValueType::String => "STRING",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Any => "*",
            ValueType::Choice(_) => "COMBO",
            ValueType::Named(name) => name,
        }
    }

    pub fn is_builtin_name(name: &str) -> bool {
        matches!(name, "INT" | "FLOAT" | "STRING" | "BOOLEAN" | "*")
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueType::Int, ValueType::Int)
            | (ValueType::Float, ValueType::Float)
            | (ValueType::String, ValueType::String)
            | (ValueType::Boolean, ValueType::Boolean)
            | (ValueType::Any, ValueType::Any) => true,
            (ValueType::Choice(a), ValueType::Choice(b)) => {
                a.iter().all(|v| b.contains(v)) && b.iter().all(|v| a.contains(v))
            }
            (ValueType::Named(a), ValueType::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ValueType {}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Choice(choices) => write!(f, "[{}]", choices.iter().join(", ")),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Static handle for a slot type, implemented by marker types.
///
/// `Literal` is what a builder setter accepts for an input of this type.
pub trait SlotType: 'static {
    type Literal: Into<Value>;

    fn value_type() -> ValueType;
}

/// Integer scalar.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct INT;

/// Real scalar.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FLOAT;

/// String scalar.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct STRING;

/// Boolean scalar.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BOOLEAN;

/// The wildcard type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any;

impl SlotType for INT {
    type Literal = i64;

    fn value_type() -> ValueType {
        ValueType::Int
    }
}

impl SlotType for FLOAT {
    type Literal = f64;

    fn value_type() -> ValueType {
        ValueType::Float
    }
}

impl SlotType for STRING {
    type Literal = String;

    fn value_type() -> ValueType {
        ValueType::String
    }
}

impl SlotType for BOOLEAN {
    type Literal = bool;

    fn value_type() -> ValueType {
        ValueType::Boolean
    }
}

impl SlotType for Any {
    type Literal = Value;

    fn value_type() -> ValueType {
        ValueType::Any
    }
}

/// Declares a marker type for a host type known only by name.
///
/// ```ignore
/// nodebind::nominal_type!(pub LATENT, "LATENT");
/// ```
#[macro_export]
macro_rules! nominal_type {
    ($(#[$meta:meta])* $vis:vis $ident:ident, $name:expr) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $ident;

        impl $crate::types::SlotType for $ident {
            type Literal = $crate::serde_json::Value;

            fn value_type() -> $crate::types::ValueType {
                $crate::types::ValueType::Named(::std::string::String::from($name))
            }
        }
    };
}

/// Declares a closed enum of literal choices usable as a slot type.
///
/// ```ignore
/// nodebind::choice_type!(pub Scheduler {
///     normal => "normal",
///     karras => "karras",
/// });
/// ```
#[macro_export]
macro_rules! choice_type {
    ($(#[$meta:meta])* $vis:vis $ident:ident { $($variant:ident => $value:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ident {
            $($variant),+
        }

        impl $ident {
            pub fn as_value(self) -> $crate::serde_json::Value {
                match self {
                    $(Self::$variant => $crate::serde_json::Value::from($value)),+
                }
            }

            pub fn choices() -> ::std::vec::Vec<$crate::serde_json::Value> {
                ::std::vec![$($crate::serde_json::Value::from($value)),+]
            }
        }

        impl ::std::convert::From<$ident> for $crate::serde_json::Value {
            fn from(choice: $ident) -> Self {
                choice.as_value()
            }
        }

        impl $crate::types::SlotType for $ident {
            type Literal = $ident;

            fn value_type() -> $crate::types::ValueType {
                $crate::types::ValueType::Choice(Self::choices())
            }
        }
    };
}
