//! Conversions involving the notation of
//! [`Class.getName()`](https://docs.oracle.com/en/java/javase/21/docs/api/java.base/java/lang/Class.html#getName()).
//!
//! That notation coincides with the binary name for non-array types, and with the field
//! descriptor (using `.` as the package separator) for array types.
//!
//! | Binary name            | `Class.getName()`       | Field descriptor         |
//! |------------------------|-------------------------|--------------------------|
//! | `int`                  | `int`                   | `I`                      |
//! | `java.lang.String`     | `java.lang.String`      | `Ljava/lang/String;`     |
//! | `java.lang.String[][]` | `[[Ljava.lang.String;`  | `[[Ljava/lang/String;`   |

use super::{
    ARRAY_PREFIX, ARRAY_SUFFIX,
    field_descriptor::{binary_name_to_field_descriptor, field_descriptor_to_binary_name},
};
use crate::errors::{Error, Result};

/// Converts a binary name to the notation of `Class.getName()`.
/// Non-array names are returned unchanged.
#[must_use]
pub fn binary_name_to_class_get_name(binary_name: &str) -> String {
    if binary_name.ends_with(ARRAY_SUFFIX) {
        binary_name_to_field_descriptor(binary_name).replace('/', ".")
    } else {
        binary_name.to_owned()
    }
}

/// Converts a field descriptor to the notation of `Class.getName()`.
/// # Errors
/// - [`Error::MalformedDescriptor`] if `descriptor` is not an array descriptor and cannot be
///   converted to a binary name.
pub fn field_descriptor_to_class_get_name(descriptor: &str) -> Result<String> {
    if descriptor.starts_with(ARRAY_PREFIX) {
        Ok(descriptor.replace('/', "."))
    } else {
        field_descriptor_to_binary_name(descriptor)
    }
}

/// Converts a name in the notation of `Class.getName()` to a binary name.
/// Non-array names are returned unchanged.
/// # Errors
/// - [`Error::MalformedDescriptor`] if `name` is an array name whose element type is malformed.
pub fn class_get_name_to_binary_name(name: &str) -> Result<String> {
    if name.starts_with(ARRAY_PREFIX) {
        field_descriptor_to_binary_name(&name.replace('.', "/"))
            .map_err(|_| Error::malformed_descriptor(name))
    } else {
        Ok(name.to_owned())
    }
}

/// Converts a name in the notation of `Class.getName()` to a field descriptor.
#[must_use]
pub fn class_get_name_to_field_descriptor(name: &str) -> String {
    if name.starts_with(ARRAY_PREFIX) {
        name.replace('.', "/")
    } else {
        binary_name_to_field_descriptor(name)
    }
}
