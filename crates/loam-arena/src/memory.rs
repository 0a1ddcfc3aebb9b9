//! The public `Memory` surface composing arena, stack, and heap.

use loam_core::{ElementKind, Elements, MemoryError};

use crate::arena::Arena;
use crate::config::MemoryConfig;
use crate::heap::{FreeBlock, HeapAllocator};
use crate::pointer::{Pointer, Region};
use crate::stack::StackAllocator;

/// A fixed-size byte arena with a LIFO stack region and a free-list
/// heap region.
///
/// `push`/`pop` drive the stack, `alloc`/`free` drive the heap, and
/// `deref`/`change` resolve any [`Pointer`] against the live bytes.
/// Single-threaded by construction: one logical owner per instance, no
/// locking performed or required.
///
/// Releasing memory never invalidates pointers. After `pop` or `free`,
/// a pointer into the released range still resolves — to whatever a
/// later allocation put there. That asymmetry is deliberate: capacity
/// and configuration problems raise [`MemoryError`], lifetime and
/// aliasing problems do not.
///
/// ```
/// use loam_arena::{Memory, MemoryConfig};
/// use loam_core::Elements;
///
/// let mut mem = Memory::new(MemoryConfig::new(1024).with_stack_bytes(256))?;
/// let p = mem.push(&Elements::from(vec![1i16, -1, -2, 145]))?;
/// assert_eq!(mem.deref(p), Elements::from(vec![1i16, -1, -2, 145]));
/// mem.pop(p);
/// # Ok::<(), loam_core::MemoryError>(())
/// ```
#[derive(Debug)]
pub struct Memory {
    arena: Arena,
    stack: StackAllocator,
    heap: HeapAllocator,
}

impl Memory {
    /// Build a memory over `config.size_bytes` bytes.
    ///
    /// Fails with `InvalidConfig` when the requested stack region would
    /// take up half or more of the arena.
    pub fn new(config: MemoryConfig) -> Result<Self, MemoryError> {
        let total = config.size_bytes;
        let stack_len = config.stack_len();
        if stack_len * 2 >= total {
            return Err(MemoryError::InvalidConfig {
                stack_bytes: stack_len,
                total_bytes: total,
            });
        }
        Ok(Self {
            arena: Arena::new(total, stack_len),
            stack: StackAllocator::new(stack_len),
            heap: HeapAllocator::new(total - stack_len),
        })
    }

    /// Push `data` onto the stack region.
    pub fn push(&mut self, data: &Elements) -> Result<Pointer, MemoryError> {
        self.stack.push(self.arena.region_mut(Region::Stack), data)
    }

    /// Release a stack allocation.
    ///
    /// LIFO order is not checked; popping anything but the most recent
    /// push leaves the cursor out of sync with the live content.
    pub fn pop(&mut self, ptr: Pointer) {
        debug_assert_eq!(ptr.region(), Region::Stack, "pop wants a stack pointer");
        self.stack.pop(&ptr);
    }

    /// Allocate `count` elements of `kind` from the heap region.
    pub fn alloc(&mut self, count: usize, kind: ElementKind) -> Result<Pointer, MemoryError> {
        self.heap.alloc(count, kind)
    }

    /// Release a heap allocation back to the free list.
    ///
    /// Double frees and foreign pointers are not detected; they corrupt
    /// the free list silently.
    pub fn free(&mut self, ptr: Pointer) {
        debug_assert_eq!(ptr.region(), Region::Heap, "free wants a heap pointer");
        self.heap.free(&ptr);
    }

    /// Materialize a fresh typed view of the pointer's byte range.
    ///
    /// Each call decodes the bytes live at call time, so a later
    /// overlapping write through another pointer shows up in the next
    /// `deref`. A pointer whose bytes were popped or freed decodes
    /// whatever occupies the range now.
    pub fn deref(&self, ptr: Pointer) -> Elements {
        let bytes = self.arena.region(ptr.region());
        ptr.kind()
            .read_slice(&bytes[ptr.index()..ptr.index() + ptr.byte_len()], ptr.len())
    }

    /// Overwrite the pointer's element range with `data`, converting
    /// each element to the *pointer's* kind.
    ///
    /// With fewer source elements than the pointer holds, the written
    /// prefix is followed by a contiguous zero-filled tail. With more,
    /// the call fails with `Oversize` and memory is left unmodified.
    pub fn change(&mut self, ptr: Pointer, data: &Elements) -> Result<(), MemoryError> {
        if data.len() > ptr.len() {
            return Err(MemoryError::Oversize {
                given: data.len(),
                capacity: ptr.len(),
            });
        }
        let width = ptr.kind().width();
        let start = ptr.index();
        let split = start + data.len() * width;
        let end = start + ptr.byte_len();
        let bytes = self.arena.region_mut(ptr.region());
        ptr.kind().write_slice(&mut bytes[start..split], data);
        bytes[split..end].fill(0);
        Ok(())
    }

    /// Total arena size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.arena.len()
    }

    /// Stack region capacity in bytes.
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Bytes currently spanned by the stack, padding included.
    pub fn stack_used(&self) -> usize {
        self.stack.used()
    }

    /// Heap region capacity in bytes.
    pub fn heap_capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Total free heap bytes across all blocks.
    pub fn heap_free_bytes(&self) -> usize {
        self.heap.free_bytes()
    }

    /// The heap's free blocks, ascending by offset.
    pub fn free_blocks(&self) -> &[FreeBlock] {
        self.heap.blocks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_1024_256() -> Memory {
        Memory::new(MemoryConfig::new(1024).with_stack_bytes(256)).unwrap()
    }

    #[test]
    fn oversized_stack_ratio_is_rejected() {
        let err = Memory::new(MemoryConfig::new(1024).with_stack_bytes(512)).unwrap_err();
        assert_eq!(
            err,
            MemoryError::InvalidConfig {
                stack_bytes: 512,
                total_bytes: 1024,
            }
        );
        assert!(Memory::new(MemoryConfig::new(1024).with_stack_bytes(511)).is_ok());
    }

    #[test]
    fn memory_is_debug_formattable() {
        let mem = memory_1024_256();
        let dump = format!("{mem:?}");
        assert!(dump.contains("Memory"));
    }

    #[test]
    fn default_split_is_thirty_percent() {
        let mem = Memory::new(MemoryConfig::new(1000)).unwrap();
        assert_eq!(mem.stack_capacity(), 300);
        assert_eq!(mem.heap_capacity(), 700);
        assert_eq!(mem.size_bytes(), 1000);
    }

    #[test]
    fn push_then_deref_returns_the_data() {
        let mut mem = memory_1024_256();
        let data = Elements::from(vec![1i16, -1, -2, 145]);
        let p = mem.push(&data).unwrap();
        assert_eq!(mem.deref(p), data);
    }

    #[test]
    fn alloc_then_deref_after_change() {
        let mut mem = memory_1024_256();
        let p = mem.alloc(3, ElementKind::I32).unwrap();
        mem.change(p, &Elements::from(vec![10i32, -20, 30])).unwrap();
        assert_eq!(mem.deref(p), Elements::from(vec![10i32, -20, 30]));
    }

    #[test]
    fn change_converts_to_the_pointers_kind() {
        let mut mem = memory_1024_256();
        let p = mem.alloc(3, ElementKind::I16).unwrap();
        mem.change(p, &Elements::from(vec![1.9f64, -2.9, 70000.0]))
            .unwrap();
        // Truncation toward zero, then wrap to 16 bits.
        assert_eq!(
            mem.deref(p),
            Elements::from(vec![1i16, -2, 70000u32 as u16 as i16])
        );
    }

    #[test]
    fn change_with_short_data_zero_fills_the_tail() {
        let mut mem = memory_1024_256();
        let p = mem.alloc(4, ElementKind::I32).unwrap();
        mem.change(p, &Elements::from(vec![-1i32, -1, -1, -1])).unwrap();
        mem.change(p, &Elements::from(vec![7i32])).unwrap();
        assert_eq!(mem.deref(p), Elements::from(vec![7i32, 0, 0, 0]));
    }

    #[test]
    fn change_with_too_many_elements_leaves_memory_alone() {
        let mut mem = memory_1024_256();
        let p = mem.alloc(2, ElementKind::U8).unwrap();
        mem.change(p, &Elements::from(vec![5u8, 6])).unwrap();
        let err = mem
            .change(p, &Elements::from(vec![1u8, 2, 3]))
            .unwrap_err();
        assert_eq!(err, MemoryError::Oversize { given: 3, capacity: 2 });
        assert_eq!(mem.deref(p), Elements::from(vec![5u8, 6]));
    }

    #[test]
    fn pop_releases_for_the_next_push() {
        let mut mem = memory_1024_256();
        let before = mem.stack_used();
        let p = mem.push(&Elements::from(vec![1i32, 2, 3])).unwrap();
        mem.pop(p);
        assert_eq!(mem.stack_used(), before);
    }

    #[test]
    fn deref_after_free_sees_later_writes() {
        let mut mem = memory_1024_256();
        let stale = mem.alloc(2, ElementKind::U8).unwrap();
        mem.change(stale, &Elements::from(vec![11u8, 22])).unwrap();
        mem.free(stale);
        let fresh = mem.alloc(2, ElementKind::U8).unwrap();
        mem.change(fresh, &Elements::from(vec![33u8, 44])).unwrap();
        // Same bytes, no staleness check: the dead pointer reads the
        // new allocation's data.
        assert_eq!(fresh.index(), stale.index());
        assert_eq!(mem.deref(stale), Elements::from(vec![33u8, 44]));
    }

    #[test]
    fn stack_and_heap_pointers_resolve_to_their_own_regions() {
        let mut mem = memory_1024_256();
        let s = mem.push(&Elements::from(vec![1u8; 4])).unwrap();
        let h = mem.alloc(4, ElementKind::U8).unwrap();
        mem.change(h, &Elements::from(vec![9u8; 4])).unwrap();
        assert_eq!(mem.deref(s), Elements::from(vec![1u8; 4]));
        assert_eq!(mem.deref(h), Elements::from(vec![9u8; 4]));
    }
}
