#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Conversions between the string notations used for types on the JVM.
//!
//! Reflection APIs name types by their *binary name* (e.g., `java.lang.Object[]`), while
//! class files use *field descriptors* (e.g., `[Ljava/lang/Object;`).
//! [`Class.getName()`](https://docs.oracle.com/en/java/javase/21/docs/api/java.base/java/lang/Class.html#getName())
//! uses yet another notation that mixes the two for array types.
//! This crate converts among these notations, and between Java-style and JVM-style argument
//! lists, without loading any class.
//!
//! ```
//! use jvm_signatures::{arglist_to_jvm, binary_name_to_field_descriptor};
//!
//! assert_eq!(binary_name_to_field_descriptor("java.lang.Object[]"), "[Ljava/lang/Object;");
//! assert_eq!(
//!     arglist_to_jvm("(java.lang.Integer[], int)").unwrap(),
//!     "([Ljava/lang/Integer;I)"
//! );
//! ```
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod errors;
pub(crate) mod macros;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    arg_list::{arglist_from_jvm, arglist_to_jvm},
    class_get_name::{binary_name_to_class_get_name, field_descriptor_to_class_get_name},
    field_descriptor::{
        binary_name_to_field_descriptor, field_descriptor_to_binary_name,
        primitive_type_name_to_field_descriptor,
    },
    primitive_type::PrimitiveType,
};

/// Test utilities
#[cfg(test)]
pub mod tests;
