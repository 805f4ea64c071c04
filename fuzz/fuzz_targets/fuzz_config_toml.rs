#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing and profile merging - this should never panic
        if let Ok(config) = toml::from_str::<netrecon::Config>(content) {
            let _ = config.profile_registry();
            let _ = config.reconcile_options();
        }
    }
});
