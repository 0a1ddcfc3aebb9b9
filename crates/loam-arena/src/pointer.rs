//! Pointer handles into the arena.
//!
//! A [`Pointer`] encodes the physical location of an allocation: which
//! region it lives in, the byte index of its element data, the padding
//! inserted before that index, the element count, and the element kind.
//! It is resolved through the owning `Memory` and carries no validity
//! flag: nothing marks a pointer dead when `pop` or `free` makes its
//! bytes reachable by a future allocation. Dereferencing such a pointer
//! is undefined behavior by design — it decodes whatever bytes occupy
//! the range at call time.

use std::fmt;

use loam_core::ElementKind;

/// Which arena region a [`Pointer`] resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// The LIFO stack prefix of the arena.
    Stack,
    /// The free-list heap suffix of the arena.
    Heap,
}

/// Physical location of a typed allocation within the arena.
///
/// Pointers are only created by `push` and `alloc` and are never
/// mutated afterwards. Two pointers may alias overlapping bytes; no
/// aliasing protection exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Pointer {
    /// Region this pointer resolves against.
    pub(crate) region: Region,
    /// Region-relative byte offset of the element data (post-alignment).
    pub(crate) index: usize,
    /// Element count.
    pub(crate) len: usize,
    /// Padding bytes inserted immediately before `index`.
    pub(crate) alignment: usize,
    /// Element kind of the allocation.
    pub(crate) kind: ElementKind,
}

impl Pointer {
    pub(crate) fn new(
        region: Region,
        index: usize,
        len: usize,
        alignment: usize,
        kind: ElementKind,
    ) -> Self {
        Self {
            region,
            index,
            len,
            alignment,
            kind,
        }
    }

    /// The region this pointer resolves against.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Region-relative byte offset of the element data.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Padding bytes inserted before [`Pointer::index`].
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Element kind of the allocation.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Size of the element data in bytes: `len * kind.width()`.
    pub fn byte_len(&self) -> usize {
        self.len * self.kind.width()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pointer({:?}, idx={}, len={}, align={}, {})",
            self.region, self.index, self.len, self.alignment, self.kind
        )
    }
}
