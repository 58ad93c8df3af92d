//! Conversions between Java-style and JVM-style argument lists.
//!
//! A Java-style argument list separates binary names with commas, e.g.,
//! `(java.lang.Integer[], int, java.lang.Integer[][])`, whereas a JVM-style argument list
//! concatenates field descriptors, e.g., `([Ljava/lang/Integer;I[[Ljava/lang/Integer;)`.

use itertools::Itertools;

use super::{
    ARRAY_PREFIX,
    field_descriptor::{binary_name_to_field_descriptor, field_descriptor_to_binary_name},
    primitive_type::PrimitiveType,
};
use crate::{
    errors::{Error, Result},
    macros::see_jvm_spec,
};

/// Converts a Java-style argument list to a JVM-style one.
/// For example, `"(java.lang.Integer[], int, java.lang.Integer[][])"` becomes
/// `"([Ljava/lang/Integer;I[[Ljava/lang/Integer;)"`.
///
/// Whitespace around each argument is ignored, as are empty arguments.
/// # Errors
/// - [`Error::MalformedArgList`] if `arglist` is not enclosed in parentheses.
pub fn arglist_to_jvm(arglist: &str) -> Result<String> {
    let args = strip_parentheses(arglist)?;
    let descriptors: String = args
        .split(',')
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .map(binary_name_to_field_descriptor)
        .collect();
    Ok(format!("({descriptors})"))
}

/// Converts a JVM-style argument list to a Java-style one.
/// For example, `"([Ljava/lang/Integer;I[[Ljava/lang/Integer;)"` becomes
/// `"(java.lang.Integer[], int, java.lang.Integer[][])"`.
/// # Errors
/// - [`Error::MalformedArgList`] if `arglist` is not enclosed in parentheses, or if any of the
///   descriptors in it cannot be delimited.
pub fn arglist_from_jvm(arglist: &str) -> Result<String> {
    let binary_names = split_descriptor_list(arglist)?
        .into_iter()
        .map(|it| {
            field_descriptor_to_binary_name(it).map_err(|_| Error::malformed_arg_list(arglist))
        })
        .process_results(|mut names| names.join(", "))?;
    Ok(format!("({binary_names})"))
}

/// Splits a JVM-style argument list into the field descriptors of its arguments without
/// converting them.
/// For example, `"(I[JLjava/lang/String;)"` is split into `["I", "[J", "Ljava/lang/String;"]`.
#[doc = see_jvm_spec!(4, 3, 3)]
/// # Errors
/// - [`Error::MalformedArgList`] if `arglist` is not enclosed in parentheses, if a run of `[` is
///   followed by neither `L` nor a primitive type code, or if an `L` is never terminated by `;`.
pub fn split_descriptor_list(arglist: &str) -> Result<Vec<&str>> {
    let params = strip_parentheses(arglist)?;
    let mut scanner = DescriptorScanner::new(params);
    let mut descriptors = Vec::new();
    while !scanner.is_exhausted() {
        let descriptor = scanner
            .next_descriptor()
            .ok_or_else(|| Error::malformed_arg_list(arglist))?;
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

fn strip_parentheses(arglist: &str) -> Result<&str> {
    arglist
        .strip_prefix('(')
        .and_then(|it| it.strip_suffix(')'))
        .ok_or_else(|| Error::malformed_arg_list(arglist))
}

/// A cursor over concatenated field descriptors.
#[derive(Debug)]
struct DescriptorScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> DescriptorScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances past a run of `[`.
    fn skip_array_markers(&mut self) {
        let remaining = self.remaining();
        self.pos += remaining.len() - remaining.trim_start_matches(ARRAY_PREFIX).len();
    }

    /// Advances past `L<class name>;`, assuming the cursor is at `L`.
    fn skip_class_type(&mut self) -> Option<()> {
        let terminator = self.remaining().find(';')?;
        self.pos += terminator + 1;
        Some(())
    }

    /// Advances past a primitive type code.
    fn skip_primitive_type(&mut self) -> Option<()> {
        let code = self.remaining().chars().next()?;
        PrimitiveType::from_descriptor(code)?;
        self.pos += code.len_utf8();
        Some(())
    }

    /// Returns the next complete field descriptor and advances past it.
    /// On failure the cursor is left at an unspecified position.
    fn next_descriptor(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.skip_array_markers();
        if self.remaining().starts_with('L') {
            self.skip_class_type()?;
        } else {
            self.skip_primitive_type()?;
        }
        Some(&self.input[start..self.pos])
    }
}
