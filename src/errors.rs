//! Errors raised when a string is not valid in the notation it is claimed to be in.

use crate::macros::log_rejection;

/// An error that occurs when converting a type name or an argument list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name is not one of the eight primitive type keywords.
    #[error("Not the name of a primitive type: {0}")]
    NotAPrimitiveType(String),
    /// The string is empty after stripping array markers, or its base is neither `L...;` nor a
    /// primitive type code.
    #[error("Malformed field descriptor: {0}")]
    MalformedDescriptor(String),
    /// The argument list is not enclosed in parentheses, or one of its elements cannot be
    /// delimited.
    #[error("Malformed argument list: {0}")]
    MalformedArgList(String),
}

/// A specialized [`Result`](std::result::Result) for the conversions in this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn not_a_primitive_type(name: &str) -> Self {
        log_rejection!("not_a_primitive_type", name);
        Self::NotAPrimitiveType(name.to_owned())
    }

    pub(crate) fn malformed_descriptor(descriptor: &str) -> Self {
        log_rejection!("malformed_descriptor", descriptor);
        Self::MalformedDescriptor(descriptor.to_owned())
    }

    pub(crate) fn malformed_arg_list(arglist: &str) -> Self {
        log_rejection!("malformed_arg_list", arglist);
        Self::MalformedArgList(arglist.to_owned())
    }
}
