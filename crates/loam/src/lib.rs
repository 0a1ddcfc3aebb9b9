//! Loam: user-space manual memory management over a fixed byte arena.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // 1KB arena: 256-byte LIFO stack, 768-byte free-list heap.
//! let mut mem = Memory::new(MemoryConfig::new(1024).with_stack_bytes(256))?;
//!
//! // Transient data goes on the stack.
//! let scores = mem.push(&Elements::from(vec![1i16, -1, -2, 145]))?;
//! assert_eq!(mem.deref(scores), Elements::from(vec![1i16, -1, -2, 145]));
//!
//! // Longer-lived data comes from the heap.
//! let samples = mem.alloc(10, ElementKind::F64)?;
//! mem.change(samples, &Elements::from(vec![0.5f64, 1.5]))?;
//! // Unwritten trailing elements are zero-filled.
//! assert_eq!(
//!     mem.deref(samples),
//!     Elements::from(vec![0.5f64, 1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
//! );
//!
//! // Release in the opposite direction of acquisition.
//! mem.free(samples);
//! mem.pop(scores);
//! # Ok::<(), MemoryError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `loam-arena` | `Memory`, `Pointer`, stack and heap allocators |
//! | [`types`] | `loam-core` | Element kinds, typed buffers, error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena, allocators, and the `Memory` surface (`loam-arena`).
pub use loam_arena as arena;

/// Element kinds, typed buffers, and errors (`loam-core`).
pub use loam_core as types;

/// Common imports for typical Loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_arena::{FreeBlock, Memory, MemoryConfig, Pointer, Region};
    pub use loam_core::{ElementCategory, ElementKind, Elements, MemoryError, RawValue};
}
