use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use jvm_signatures::types::{
    arg_list::{arglist_from_jvm, arglist_to_jvm},
    class_get_name::{
        binary_name_to_class_get_name, class_get_name_to_binary_name,
        field_descriptor_to_class_get_name,
    },
    field_descriptor::{
        binary_name_to_field_descriptor, field_descriptor_to_binary_name,
        primitive_type_name_to_field_descriptor,
    },
};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser)]
#[command(name = "sigconv")]
#[command(about = "Converts JVM type names between notations", long_about = None)]
struct Args {
    /// The conversion to apply
    #[arg(value_enum)]
    conversion: Conversion,

    /// Type names or argument lists to convert
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Log rejected inputs when `RUST_LOG` is not set
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Conversion {
    /// Binary name to field descriptor
    ToDescriptor,
    /// Field descriptor to binary name
    ToBinaryName,
    /// Primitive type keyword to field descriptor
    Primitive,
    /// Binary name to `Class.getName()` notation
    ToClassGetName,
    /// Field descriptor to `Class.getName()` notation
    DescriptorToClassGetName,
    /// `Class.getName()` notation to binary name
    FromClassGetName,
    /// Java-style argument list to JVM-style
    ArglistToJvm,
    /// JVM-style argument list to Java-style
    ArglistFromJvm,
}

impl Conversion {
    fn apply(self, input: &str) -> jvm_signatures::Result<String> {
        match self {
            Self::ToDescriptor => Ok(binary_name_to_field_descriptor(input)),
            Self::ToBinaryName => field_descriptor_to_binary_name(input),
            Self::Primitive => primitive_type_name_to_field_descriptor(input),
            Self::ToClassGetName => Ok(binary_name_to_class_get_name(input)),
            Self::DescriptorToClassGetName => field_descriptor_to_class_get_name(input),
            Self::FromClassGetName => class_get_name_to_binary_name(input),
            Self::ArglistToJvm => arglist_to_jvm(input),
            Self::ArglistFromJvm => arglist_from_jvm(input),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut failed = false;
    for input in &args.inputs {
        match args.conversion.apply(input) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
