use jvm_signatures::{
    Error, PrimitiveType, arglist_from_jvm, arglist_to_jvm, binary_name_to_class_get_name,
    binary_name_to_field_descriptor, field_descriptor_to_binary_name,
    field_descriptor_to_class_get_name, primitive_type_name_to_field_descriptor,
    types::{arg_list::split_descriptor_list, class_get_name::class_get_name_to_binary_name},
};

#[test]
fn scalar_conversions() {
    assert_eq!(
        binary_name_to_field_descriptor("java.lang.Object[]"),
        "[Ljava/lang/Object;"
    );
    assert_eq!(binary_name_to_field_descriptor("int"), "I");
    assert_eq!(field_descriptor_to_binary_name("[[I").unwrap(), "int[][]");
}

#[test]
fn primitive_only_conversion() {
    assert_eq!(primitive_type_name_to_field_descriptor("char").unwrap(), "C");
    assert!(matches!(
        primitive_type_name_to_field_descriptor("notatype"),
        Err(Error::NotAPrimitiveType(name)) if name == "notatype"
    ));
}

#[test]
fn empty_descriptor() {
    assert!(matches!(
        field_descriptor_to_binary_name(""),
        Err(Error::MalformedDescriptor(_))
    ));
}

#[test]
fn void_descriptor_is_rejected() {
    assert!(matches!(
        field_descriptor_to_binary_name("V"),
        Err(Error::MalformedDescriptor(_))
    ));
}

#[test]
fn class_get_name_bridge() {
    assert_eq!(
        binary_name_to_class_get_name("java.lang.Integer[][]"),
        "[[Ljava.lang.Integer;"
    );
    assert_eq!(binary_name_to_class_get_name("java.lang.Integer"), "java.lang.Integer");
    assert_eq!(field_descriptor_to_class_get_name("[Z").unwrap(), "[Z");
    assert_eq!(
        class_get_name_to_binary_name("[Ljava.lang.Integer;").unwrap(),
        "java.lang.Integer[]"
    );
}

#[test]
fn argument_lists() {
    let java = "(java.lang.Integer[], int, java.lang.Integer[][])";
    let jvm = "([Ljava/lang/Integer;I[[Ljava/lang/Integer;)";
    assert_eq!(arglist_to_jvm(java).unwrap(), jvm);
    assert_eq!(arglist_from_jvm(jvm).unwrap(), java);
    assert_eq!(split_descriptor_list(jvm).unwrap().len(), 3);
}

#[test]
fn argument_list_spacing_is_normalized() {
    let jvm = arglist_to_jvm("(int,java.lang.String ,  long[])").unwrap();
    assert_eq!(
        arglist_from_jvm(&jvm).unwrap(),
        "(int, java.lang.String, long[])"
    );
}

#[test]
fn argument_list_without_open_paren() {
    assert!(matches!(
        arglist_to_jvm("java.lang.Integer)"),
        Err(Error::MalformedArgList(_))
    ));
}

#[test]
fn unterminated_class_in_argument_list() {
    assert!(matches!(
        arglist_from_jvm("(ILjava/lang/Integer)"),
        Err(Error::MalformedArgList(_))
    ));
}

#[test]
fn every_primitive_in_one_list() {
    let keywords: Vec<_> = PrimitiveType::ALL.iter().map(|it| it.keyword()).collect();
    let java = format!("({})", keywords.join(", "));
    assert_eq!(arglist_to_jvm(&java).unwrap(), "(ZBCDFIJS)");
    assert_eq!(arglist_from_jvm("(ZBCDFIJS)").unwrap(), java);
}
