//! The backing byte arena and its two-region split.

use crate::pointer::Region;

/// One contiguous fixed-size byte buffer, split once at construction
/// into a stack prefix `[0, stack_len)` and a heap suffix
/// `[stack_len, len)`. The split never moves and the arena never grows.
///
/// The buffer is zero-initialised. All mutation happens in place
/// through the region slices; the arena itself does no bookkeeping.
#[derive(Debug)]
pub struct Arena {
    bytes: Vec<u8>,
    stack_len: usize,
}

impl Arena {
    /// Create a zeroed arena of `total` bytes with a `stack_len`-byte
    /// stack prefix. The split is validated by the caller.
    pub(crate) fn new(total: usize, stack_len: usize) -> Self {
        Self {
            bytes: vec![0; total],
            stack_len,
        }
    }

    /// Total arena size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the arena has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Stack region size in bytes.
    pub fn stack_len(&self) -> usize {
        self.stack_len
    }

    /// Heap region size in bytes.
    pub fn heap_len(&self) -> usize {
        self.bytes.len() - self.stack_len
    }

    /// Shared view of a region's bytes.
    pub fn region(&self, region: Region) -> &[u8] {
        match region {
            Region::Stack => &self.bytes[..self.stack_len],
            Region::Heap => &self.bytes[self.stack_len..],
        }
    }

    /// Mutable view of a region's bytes.
    pub fn region_mut(&mut self, region: Region) -> &mut [u8] {
        match region {
            Region::Stack => &mut self.bytes[..self.stack_len],
            Region::Heap => &mut self.bytes[self.stack_len..],
        }
    }
}
