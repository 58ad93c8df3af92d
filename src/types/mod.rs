//! Module containing the type name notations and the conversions among them.
//!
//! The notations are:
//! - *binary names*, such as `int`, `java.lang.String` or `java.util.Map$Entry[][]`;
//! - *field descriptors*, such as `I`, `Ljava/lang/String;` or `[[Ljava/util/Map$Entry;`;
//! - the notation of `Class.getName()`, which is a binary name for non-array types and a
//!   dot-separated field descriptor for array types, such as `[[Ljava.util.Map$Entry;`;
//! - argument lists, either Java-style `(int, java.lang.String)` or JVM-style
//!   `(ILjava/lang/String;)`.
pub mod arg_list;
pub mod class_get_name;
pub mod field_descriptor;
pub mod primitive_type;

/// Marks one array dimension at the end of a binary name.
pub(crate) const ARRAY_SUFFIX: &str = "[]";

/// Marks one array dimension at the start of a field descriptor.
pub(crate) const ARRAY_PREFIX: char = '[';
