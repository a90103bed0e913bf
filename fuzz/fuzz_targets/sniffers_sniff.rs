#![no_main]
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let _ = stegscan::input::CombinedSniffer::sniff(data, Some(Path::new("fuzz.png")));
});
