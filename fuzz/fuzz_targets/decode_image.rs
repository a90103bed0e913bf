#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = image::load_from_memory(data) {
        let grid = stegscan::PixelGrid::from_dynamic(&decoded);
        let config = stegscan::SuiteConfig {
            default_image_methods: vec![
                "lsb_analysis".to_string(),
                "histogram_analysis".to_string(),
            ],
            ..stegscan::SuiteConfig::default()
        };
        let _ = stegscan::analyze(&stegscan::RawInput::Image(grid), &config);
    }
});
