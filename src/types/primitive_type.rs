//! The primitive types and their descriptor codes.

use std::str::FromStr;

use crate::{
    errors::{Error, Result},
    macros::see_jvm_spec,
};

/// A primitive type in Java.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
    /// The `short` type.
    #[display("short")]
    Short,
}

impl PrimitiveType {
    /// All the primitive types, ordered by their keywords.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
    ];

    /// Returns the Java keyword naming the type, e.g., `"int"`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Returns the one-character field descriptor of the type, e.g., `'I'`.
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Double => 'D',
            Self::Float => 'F',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Short => 'S',
        }
    }

    /// Looks up the primitive type named by a Java keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "char" => Some(Self::Char),
            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "short" => Some(Self::Short),
            _ => None,
        }
    }

    /// Looks up the primitive type encoded by a descriptor code.
    /// `'V'` is not a field type and therefore yields [`None`].
    #[must_use]
    pub const fn from_descriptor(code: char) -> Option<Self> {
        match code {
            'Z' => Some(Self::Boolean),
            'B' => Some(Self::Byte),
            'C' => Some(Self::Char),
            'D' => Some(Self::Double),
            'F' => Some(Self::Float),
            'I' => Some(Self::Int),
            'J' => Some(Self::Long),
            'S' => Some(Self::Short),
            _ => None,
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        Self::from_descriptor(code).ok_or_else(|| Error::malformed_descriptor(&code.to_string()))
    }
}

impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(keyword: &str) -> Result<Self> {
        Self::from_keyword(keyword).ok_or_else(|| Error::not_a_primitive_type(keyword))
    }
}

/// Returns the descriptor code of the primitive type named `name`, or [`None`] if `name` is not
/// a primitive type keyword.
#[must_use]
pub fn primitive_to_code(name: &str) -> Option<char> {
    PrimitiveType::from_keyword(name).map(PrimitiveType::descriptor)
}

/// Returns the keyword of the primitive type encoded by `code`, or [`None`] if `code` is not a
/// primitive descriptor code.
#[must_use]
pub fn code_to_primitive(code: char) -> Option<&'static str> {
    PrimitiveType::from_descriptor(code).map(PrimitiveType::keyword)
}
