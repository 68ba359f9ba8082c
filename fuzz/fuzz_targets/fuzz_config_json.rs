#![no_main]

use cardiowave_backend_ecg::{generate_strict, rng::create_rng};
use cardiowave_spec::validation::validate_config;
use cardiowave_spec::GeneratorConfig;
use libfuzzer_sys::fuzz_target;

const MAX_FUZZ_SAMPLES: usize = 20_000;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = GeneratorConfig::from_json(text) else {
        return;
    };

    let validation = validate_config(&config);
    let num_samples = config.sample_count();
    if num_samples > MAX_FUZZ_SAMPLES {
        return;
    }

    let result = generate_strict(&config, &mut create_rng(0));
    if validation.is_ok() && num_samples > 0 {
        let wave = result.expect("valid config must generate");
        assert_eq!(wave.len(), num_samples);
        assert!(wave.samples.iter().all(|s| s.amplitude.is_finite()));
    }
});
