//! Shared fixtures for the Loam benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use loam_arena::{Memory, MemoryConfig};
use loam_core::Elements;

/// Arena size used by all benchmarks: 64KB with a 16KB stack.
pub const BENCH_ARENA_BYTES: usize = 64 * 1024;

/// Stack share of the benchmark arena.
pub const BENCH_STACK_BYTES: usize = 16 * 1024;

/// Build the standard benchmark memory.
pub fn make_memory() -> Memory {
    Memory::new(MemoryConfig::new(BENCH_ARENA_BYTES).with_stack_bytes(BENCH_STACK_BYTES))
        .expect("bench split is under half the arena")
}

/// A 64-element i32 payload with varied values.
pub fn i32_payload() -> Elements {
    Elements::from((0..64).map(|i| i * 17 - 512).collect::<Vec<i32>>())
}

/// A 32-element f64 payload.
pub fn f64_payload() -> Elements {
    Elements::from((0..32).map(|i| f64::from(i) * 0.25).collect::<Vec<f64>>())
}
