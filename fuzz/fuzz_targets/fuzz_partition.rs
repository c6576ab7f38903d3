#![no_main]

use libfuzzer_sys::fuzz_target;

use pical_core::partition::Partition;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // First 8 bytes are n (any u64), next 2 bytes the worker count.
    let n = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let workers = usize::from(u16::from_le_bytes([data[8], data[9]])).max(1);

    let p = Partition::new(n, workers);
    assert_eq!(p.len(), workers);
    assert!(p.is_exact_cover(), "n={n} T={workers}");
});
