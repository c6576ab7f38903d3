//! Worker spawn failure surfaces as `PiError::Spawn` for the first worker.
//!
//! The minimum thread stack is raised far beyond what the OS can map, so
//! every spawn is refused. std caches this value on the first spawn, which
//! is why the test runs as a plain `main` instead of under libtest.

use pical_core::{ExecutionPath, PiError, QuadratureEngine};

const HUGE_STACK: &str = "1125899906842624";

fn main() {
    std::env::set_var("RUST_MIN_STACK", HUGE_STACK);
    let engine = QuadratureEngine::new();

    match engine.compute_raw(1_000, 4) {
        Err(PiError::Spawn { worker, source }) => {
            assert_eq!(worker, 0, "unexpected worker index ({source})");
        }
        other => panic!("expected spawn failure for worker 0, got {other:?}"),
    }

    // The serial path starts no threads and is unaffected.
    let serial = engine
        .compute_raw(1_000, 1)
        .expect("serial path spawns nothing");
    assert_eq!(serial.path, ExecutionPath::Serial);
    assert!(serial.abs_error() < 1e-6);

    println!("spawn_failure: ok");
}
