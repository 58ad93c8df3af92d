//! Conversions between binary names and field descriptors of single types.

use super::{
    ARRAY_PREFIX, ARRAY_SUFFIX,
    primitive_type::{PrimitiveType, primitive_to_code},
};
use crate::{
    errors::{Error, Result},
    macros::see_jvm_spec,
};

/// Converts a binary name to a field descriptor.
/// For example, `"java.lang.Object[]"` becomes `"[Ljava/lang/Object;"` and `"int"` becomes
/// `"I"`.
///
/// Any name that is not a primitive type keyword is taken to be a class name, so the conversion
/// never fails.
#[doc = see_jvm_spec!(4, 3, 2)]
#[must_use]
pub fn binary_name_to_field_descriptor(binary_name: &str) -> String {
    let mut base = binary_name;
    let mut dimensions = 0;
    while let Some(element) = base.strip_suffix(ARRAY_SUFFIX) {
        base = element;
        dimensions += 1;
    }
    let mut descriptor = String::with_capacity(dimensions + base.len() + 2);
    descriptor.extend(std::iter::repeat_n(ARRAY_PREFIX, dimensions));
    if let Some(code) = primitive_to_code(base) {
        descriptor.push(code);
    } else {
        descriptor.push('L');
        descriptor.push_str(&base.replace('.', "/"));
        descriptor.push(';');
    }
    descriptor
}

/// Converts the name of a primitive type, such as `"int"`, to its field descriptor, such as
/// `"I"`.
/// # Errors
/// - [`Error::NotAPrimitiveType`] if `name` is not one of the eight primitive type keywords.
pub fn primitive_type_name_to_field_descriptor(name: &str) -> Result<String> {
    name.parse::<PrimitiveType>().map(|it| it.descriptor().to_string())
}

/// Converts a field descriptor to a binary name.
/// For example, `"[Ljava/lang/Object;"` becomes `"java.lang.Object[]"` and `"[[I"` becomes
/// `"int[][]"`.
/// # Errors
/// - [`Error::MalformedDescriptor`] if `descriptor` is empty after removing the leading `[`s, or
///   if what remains is neither `L<class name>;` nor a primitive type code.
///   Note that `"V"` is rejected since `void` is not a field type.
pub fn field_descriptor_to_binary_name(descriptor: &str) -> Result<String> {
    let base = descriptor.trim_start_matches(ARRAY_PREFIX);
    let dimensions = descriptor.len() - base.len();
    let mut binary_name = if let Some(class_name) = base
        .strip_prefix('L')
        .and_then(|it| it.strip_suffix(';'))
    {
        class_name.replace('/', ".")
    } else {
        let mut chars = base.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => PrimitiveType::from_descriptor(code),
            _ => None,
        }
        .map(|it| it.keyword().to_owned())
        .ok_or_else(|| Error::malformed_descriptor(descriptor))?
    };
    binary_name.push_str(&ARRAY_SUFFIX.repeat(dimensions));
    Ok(binary_name)
}
