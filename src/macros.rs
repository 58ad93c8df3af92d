/// Generates a doc line linking to a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal, $section:literal $(, $sub:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $chapter, ".", $section, $(".", $sub,)*
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter, ".html#jvms-",
            $chapter, ".", $section, $(".", $sub,)*
            ") for more information."
        )
    };
}

/// Records a rejected input when the `tracing` feature is enabled.
macro_rules! log_rejection {
    ($kind:literal, $input:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = $kind, input = %$input, "rejected type name conversion");
    };
}

pub(crate) use log_rejection;
pub(crate) use see_jvm_spec;
