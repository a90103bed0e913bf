#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = stegscan::SuiteConfig {
        default_file_methods: vec![
            "metadata_analysis".to_string(),
            "byte_frequency_analysis".to_string(),
        ],
        ..stegscan::SuiteConfig::default()
    };
    let record = stegscan::analyze(&stegscan::RawInput::Bytes(data.to_vec()), &config);
    let _ = serde_json::to_string(&record);
});
