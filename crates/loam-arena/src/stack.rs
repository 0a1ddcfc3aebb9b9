//! LIFO bump allocator over the stack region.

use loam_core::{Elements, MemoryError};

use crate::pointer::{Pointer, Region};

/// Bump allocator driven by a single cursor.
///
/// The cursor is the byte offset of the last written stack byte, with
/// −1 as the empty sentinel. It only moves forward on [`StackAllocator::push`] and
/// backward on [`StackAllocator::pop`], clamped at −1 from below. LIFO release order
/// is a caller contract: popping a non-top pointer desynchronizes the
/// cursor from the live content and nothing detects it.
#[derive(Debug)]
pub struct StackAllocator {
    cursor: isize,
    capacity: usize,
}

impl StackAllocator {
    /// Create an empty stack allocator over a region of `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            cursor: -1,
            capacity,
        }
    }

    /// Stack region capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently spanned by the stack, padding included.
    pub fn used(&self) -> usize {
        (self.cursor + 1) as usize
    }

    /// Push `data` onto the stack, writing its bytes into `region`.
    ///
    /// The returned pointer's index is aligned to the element width;
    /// the padding that achieved this is recorded on the pointer and
    /// reclaimed by the matching `pop`.
    ///
    /// The capacity check runs before alignment padding is added to the
    /// candidate offset, so a push that only overflows because of its
    /// padding slips past it and panics on the region write instead.
    pub(crate) fn push(
        &mut self,
        region: &mut [u8],
        data: &Elements,
    ) -> Result<Pointer, MemoryError> {
        let kind = data.kind();
        let bytes_len = data.byte_len();
        if self.cursor + bytes_len as isize > self.capacity as isize {
            return Err(MemoryError::StackOverflow {
                requested: bytes_len,
                capacity: self.capacity,
            });
        }

        self.cursor += 1;
        let alignment = kind.padding_for(self.cursor as usize);
        self.cursor += alignment as isize;

        let index = self.cursor as usize;
        kind.write_slice(&mut region[index..index + bytes_len], data);
        let pointer = Pointer::new(Region::Stack, index, data.len(), alignment, kind);

        // Leave the cursor on the last written byte.
        self.cursor += bytes_len as isize - 1;
        Ok(pointer)
    }

    /// Release the allocation described by `ptr`, padding included.
    ///
    /// No check that `ptr` is the most recent push.
    pub(crate) fn pop(&mut self, ptr: &Pointer) {
        self.cursor -= (ptr.byte_len() + ptr.alignment()) as isize;
        if self.cursor < -1 {
            self.cursor = -1;
        }
    }
}
