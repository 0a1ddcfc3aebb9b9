//! Fixed-arena allocation for the Loam memory model.
//!
//! Models manual memory management in user space: one contiguous byte
//! arena split at construction into a LIFO stack region and a heap
//! region served by a first-fit free list with eager coalescing.
//!
//! # Architecture
//!
//! ```text
//! Memory (public surface: push / pop / alloc / free / deref / change)
//! ├── Arena (one zeroed Vec<u8>; stack prefix + heap suffix, split once)
//! ├── StackAllocator (bump cursor, −1 sentinel, LIFO by caller contract)
//! └── HeapAllocator (offset-sorted free-block list, first-fit, coalescing)
//! ```
//!
//! Allocations hand back a [`Pointer`]: a small `Copy` handle encoding
//! region, byte index, alignment padding, element count, and element
//! kind. Pointers never own memory and carry no validity flag — using
//! one after its bytes were popped or freed silently reads or writes
//! whatever occupies the range by then. Correctness under release is a
//! caller contract, not an enforced property.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod heap;
pub mod memory;
pub mod pointer;
pub mod stack;

pub use config::MemoryConfig;
pub use heap::FreeBlock;
pub use memory::Memory;
pub use pointer::{Pointer, Region};
