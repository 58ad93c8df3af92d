use itertools::Itertools;
use proptest::prelude::*;

use crate::types::{ARRAY_PREFIX, ARRAY_SUFFIX, primitive_type::PrimitiveType};

const MAX_DIMENSIONS: usize = 4;

pub(crate) fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z_$][a-zA-Z0-9_$]{0,8}")
        .expect("The regex is invalid")
        .prop_filter("Primitive type keywords are not class names", |it| {
            PrimitiveType::from_keyword(it).is_none()
        })
}

/// Dot-separated class names such as `java.util.Map$Entry`.
pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_identifier(), 1..5).prop_map(|v| v.join("."))
}

fn arb_element_binary_name() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(|it| it.keyword().to_owned()),
        arb_class_name(),
    ]
}

fn arb_element_descriptor() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(|it| it.descriptor().to_string()),
        arb_class_name().prop_map(|it| format!("L{};", it.replace('.', "/"))),
    ]
}

prop_compose! {
    pub(crate) fn arb_binary_name()(
        element in arb_element_binary_name(),
        dim in 0..=MAX_DIMENSIONS
    ) -> String {
        format!("{element}{}", ARRAY_SUFFIX.repeat(dim))
    }
}

prop_compose! {
    pub(crate) fn arb_field_descriptor()(
        element in arb_element_descriptor(),
        dim in 0..=MAX_DIMENSIONS
    ) -> String {
        let prefix: String = std::iter::repeat_n(ARRAY_PREFIX, dim).collect();
        format!("{prefix}{element}")
    }
}

/// Java-style argument lists in their canonical spacing.
pub(crate) fn arb_java_arglist() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_binary_name(), 0..8)
        .prop_map(|args| format!("({})", args.iter().join(", ")))
}
