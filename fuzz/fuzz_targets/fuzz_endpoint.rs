#![no_main]

use dirsync::{translate_remote, Endpoint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Endpoint handling should never panic on arbitrary input
        let endpoint = Endpoint::new(raw);
        let _ = translate_remote(raw);
        let _ = endpoint.dialect();
        let _ = endpoint.ambiguous_host();
        let _ = endpoint.to_colon_form().as_contents_source();
    }
});
