#![no_main]

use libfuzzer_sys::fuzz_target;

use pical_core::QuadratureEngine;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // n capped at 100000 and T at 64 for speed
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 100_000 + 1;
    let threads = usize::from(data[4] % 64) + 1;

    let engine = QuadratureEngine::new();
    let serial = engine.compute_raw(n, 1).expect("serial path cannot fail");
    let parallel = engine.compute_raw(n, threads);

    if let Ok(parallel) = parallel {
        assert!(
            (serial.value - parallel.value).abs() < 1e-9,
            "n={n} T={threads}: {} vs {}",
            serial.value,
            parallel.value
        );
    }
});
