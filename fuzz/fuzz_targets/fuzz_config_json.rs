#![no_main]

use libfuzzer_sys::fuzz_target;
use singular_plural::config::AppConfig;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the config parser, and any accepted
    // config must yield a celebration duration inside the supported range
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            let duration = config.preferences.celebration_duration();
            assert!((100..=5000).contains(&duration.as_millis()));
        }
    }
});
