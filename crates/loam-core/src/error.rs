//! Error types shared across the Loam memory subsystem.

use std::error::Error;
use std::fmt;

/// Errors raised by `Memory` construction and allocation calls.
///
/// Every variant is fatal to the triggering call; nothing is retried or
/// recovered internally. Caller-discipline violations — popping out of
/// LIFO order, double frees, dereferencing a released pointer — are
/// deliberately *not* represented here: they silently desynchronize
/// allocator state instead of raising.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// Construction parameters describe an impossible arena split.
    InvalidConfig {
        /// Requested stack region size in bytes.
        stack_bytes: usize,
        /// Total arena size in bytes.
        total_bytes: usize,
    },
    /// A push would exceed the stack region's capacity.
    StackOverflow {
        /// Number of data bytes requested (alignment padding excluded).
        requested: usize,
        /// Stack region capacity in bytes.
        capacity: usize,
    },
    /// No free heap block is large enough for the request.
    OutOfMemory {
        /// Number of data bytes requested (alignment padding excluded).
        requested: usize,
        /// Total heap region size in bytes.
        heap_bytes: usize,
    },
    /// `change()` was given more elements than the pointer can hold.
    Oversize {
        /// Number of elements supplied.
        given: usize,
        /// The pointer's fixed element count.
        capacity: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                stack_bytes,
                total_bytes,
            } => {
                write!(
                    f,
                    "invalid config: stack region of {stack_bytes} bytes must be under half of the {total_bytes}-byte arena"
                )
            }
            Self::StackOverflow {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "stack overflow: requested {requested} bytes, stack capacity {capacity} bytes"
                )
            }
            Self::OutOfMemory {
                requested,
                heap_bytes,
            } => {
                write!(
                    f,
                    "out of memory: no free block fits {requested} bytes (heap is {heap_bytes} bytes)"
                )
            }
            Self::Oversize { given, capacity } => {
                write!(
                    f,
                    "oversize write: {given} elements into a pointer of length {capacity}"
                )
            }
        }
    }
}

impl Error for MemoryError {}
