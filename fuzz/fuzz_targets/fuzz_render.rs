#![no_main]

use dirsync::Invocation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let invocation = Invocation::builder("rsync").args(content.split('\0')).build();
        let rendered = invocation.render();
        assert!(rendered.starts_with("rsync"));
        assert!(!rendered.contains('\n'));
    }
});
