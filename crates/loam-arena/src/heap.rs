//! First-fit free-list allocator over the heap region.

use smallvec::{smallvec, SmallVec};

use loam_core::{ElementKind, MemoryError};

use crate::pointer::{Pointer, Region};

/// A run of currently unallocated heap bytes.
///
/// Offsets are heap-region-relative. The allocator keeps its block list
/// sorted ascending by offset with no overlaps, and merges any two
/// blocks that become adjacent on every free — no uncoalesced adjacent
/// pair survives a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeBlock {
    /// Heap-relative byte offset of the block.
    pub offset: usize,
    /// Block size in bytes.
    pub size: usize,
}

/// First-fit free-list allocator.
///
/// Pure bookkeeping: the heap allocator hands out and reclaims byte
/// ranges but never touches the bytes themselves. Freeing a range that
/// was never allocated, or freeing twice, silently corrupts the block
/// list — caller responsibility, not a raised error.
#[derive(Debug)]
pub struct HeapAllocator {
    free: SmallVec<[FreeBlock; 8]>,
    capacity: usize,
}

impl HeapAllocator {
    /// Create an allocator whose whole `heap_len`-byte region is one
    /// free block.
    pub(crate) fn new(heap_len: usize) -> Self {
        Self {
            free: smallvec![FreeBlock {
                offset: 0,
                size: heap_len,
            }],
            capacity: heap_len,
        }
    }

    /// Heap region capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total free bytes across all blocks.
    pub fn free_bytes(&self) -> usize {
        self.free.iter().map(|b| b.size).sum()
    }

    /// The free blocks, ascending by offset.
    pub fn blocks(&self) -> &[FreeBlock] {
        &self.free
    }

    /// Allocate `count` elements of `kind` from the first block that
    /// fits, carving from the block's front.
    ///
    /// The block's own offset decides the alignment padding; the
    /// padding is consumed from the block along with the data bytes.
    /// Fails with `OutOfMemory` when no block fits — no compaction is
    /// attempted.
    pub(crate) fn alloc(&mut self, count: usize, kind: ElementKind) -> Result<Pointer, MemoryError> {
        let size = count * kind.width();

        let mut found = None;
        for (i, block) in self.free.iter().enumerate() {
            let alignment = kind.padding_for(block.offset);
            if block.size >= size + alignment {
                found = Some((i, alignment));
                break;
            }
        }
        let Some((i, alignment)) = found else {
            return Err(MemoryError::OutOfMemory {
                requested: size,
                heap_bytes: self.capacity,
            });
        };

        let aligned_size = size + alignment;
        let block = &mut self.free[i];
        let index = block.offset + alignment;
        block.offset += aligned_size;
        block.size -= aligned_size;
        if self.free[i].size == 0 {
            self.free.remove(i);
        }

        Ok(Pointer::new(Region::Heap, index, count, alignment, kind))
    }

    /// Return the range described by `ptr` to the free list and merge
    /// any blocks that became adjacent.
    ///
    /// The freed range starts at the allocation's padding
    /// (`index − alignment`) and spans the element data's byte length.
    pub(crate) fn free(&mut self, ptr: &Pointer) {
        self.free.push(FreeBlock {
            offset: ptr.index() - ptr.alignment(),
            size: ptr.byte_len(),
        });
        self.free.sort_by_key(|b| b.offset);
        self.coalesce();
    }

    /// Merge adjacent blocks, restarting from each merged block until a
    /// full pass makes no merge.
    fn coalesce(&mut self) {
        let mut i = 0;
        while i + 1 < self.free.len() {
            if self.free[i].offset + self.free[i].size == self.free[i + 1].offset {
                self.free[i].size += self.free[i + 1].size;
                self.free.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}
