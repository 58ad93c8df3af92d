#![no_main]

use jvm_signatures::{arglist_from_jvm, field_descriptor_to_binary_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = arglist_from_jvm(input);
        let _ = field_descriptor_to_binary_name(input);
    }
});
