#![no_main]

use libfuzzer_sys::fuzz_target;
use tourkit_core::{TourConfig, resolve_step};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = TourConfig::from_json_str(text) else {
        return;
    };

    if config.validate().is_empty() {
        for step in &config.steps {
            let resolved = resolve_step(step, &config);
            assert_eq!(resolved.target, step.target);
            assert!(resolved.spotlight_padding.is_finite());
        }
    }
    let _ = config.validated();
});
