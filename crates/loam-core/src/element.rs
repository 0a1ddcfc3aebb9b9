//! Numeric element kinds and typed element buffers.
//!
//! An [`ElementKind`] describes one of the ten supported numeric element
//! shapes (byte width plus category) and knows how to decode bytes into a
//! typed [`Elements`] buffer and encode values back, converting each
//! element to its own category and width. All byte encoding is
//! little-endian.

use std::fmt;

/// Classification of an element kind's numeric category.
///
/// The 64-bit integer kinds form their own "big" categories, mirroring
/// the split between ordinary and big-integer typed buffers in scripting
/// runtimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementCategory {
    /// Signed integers up to 32 bits.
    SignedInt,
    /// Unsigned integers up to 32 bits.
    UnsignedInt,
    /// Binary floating point.
    Float,
    /// 64-bit signed integers.
    BigSignedInt,
    /// 64-bit unsigned integers.
    BigUnsignedInt,
}

/// A numeric element kind: byte width plus category.
///
/// This is the closed set of shapes an allocation can be viewed as.
/// Every pointer carries its kind; reads and writes through the pointer
/// decode and encode with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl ElementKind {
    /// All ten element kinds, in declaration order.
    pub const ALL: [ElementKind; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Byte width of one element: 1, 2, 4, or 8.
    pub fn width(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    /// Numeric category of this kind.
    pub fn category(self) -> ElementCategory {
        match self {
            Self::I8 | Self::I16 | Self::I32 => ElementCategory::SignedInt,
            Self::U8 | Self::U16 | Self::U32 => ElementCategory::UnsignedInt,
            Self::F32 | Self::F64 => ElementCategory::Float,
            Self::I64 => ElementCategory::BigSignedInt,
            Self::U64 => ElementCategory::BigUnsignedInt,
        }
    }

    /// Padding bytes needed to round `offset` up to a multiple of this
    /// kind's width. Zero when `offset` is already aligned.
    pub fn padding_for(self, offset: usize) -> usize {
        let width = self.width();
        let rem = offset % width;
        if rem == 0 {
            0
        } else {
            width - rem
        }
    }

    /// Materialize a typed view of `count` elements decoded from the
    /// front of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `count * width()`.
    pub fn read_slice(self, bytes: &[u8], count: usize) -> Elements {
        let width = self.width();
        let chunks = bytes[..count * width].chunks_exact(width);
        match self {
            Self::I8 => Elements::I8(chunks.map(|c| i8::from_le_bytes([c[0]])).collect()),
            Self::I16 => Elements::I16(chunks.map(|c| i16::from_le_bytes(le2(c))).collect()),
            Self::I32 => Elements::I32(chunks.map(|c| i32::from_le_bytes(le4(c))).collect()),
            Self::I64 => Elements::I64(chunks.map(|c| i64::from_le_bytes(le8(c))).collect()),
            Self::U8 => Elements::U8(chunks.map(|c| c[0]).collect()),
            Self::U16 => Elements::U16(chunks.map(|c| u16::from_le_bytes(le2(c))).collect()),
            Self::U32 => Elements::U32(chunks.map(|c| u32::from_le_bytes(le4(c))).collect()),
            Self::U64 => Elements::U64(chunks.map(|c| u64::from_le_bytes(le8(c))).collect()),
            Self::F32 => Elements::F32(chunks.map(|c| f32::from_le_bytes(le4(c))).collect()),
            Self::F64 => Elements::F64(chunks.map(|c| f64::from_le_bytes(le8(c))).collect()),
        }
    }

    /// Encode one element into `dst` after converting `value` to this
    /// kind's category and width.
    ///
    /// Conversions are silent by design: writes to integer kinds
    /// truncate floats toward zero and then wrap to the destination
    /// width; writes to float kinds round to the nearest representable
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if `dst.len() != width()`.
    pub fn write_raw(self, dst: &mut [u8], value: RawValue) {
        match self {
            Self::I8 => dst.copy_from_slice(&(value.to_int() as i8).to_le_bytes()),
            Self::I16 => dst.copy_from_slice(&(value.to_int() as i16).to_le_bytes()),
            Self::I32 => dst.copy_from_slice(&(value.to_int() as i32).to_le_bytes()),
            Self::I64 => dst.copy_from_slice(&(value.to_int() as i64).to_le_bytes()),
            Self::U8 => dst.copy_from_slice(&(value.to_int() as u8).to_le_bytes()),
            Self::U16 => dst.copy_from_slice(&(value.to_int() as u16).to_le_bytes()),
            Self::U32 => dst.copy_from_slice(&(value.to_int() as u32).to_le_bytes()),
            Self::U64 => dst.copy_from_slice(&(value.to_int() as u64).to_le_bytes()),
            Self::F32 => dst.copy_from_slice(&(value.to_float() as f32).to_le_bytes()),
            Self::F64 => dst.copy_from_slice(&value.to_float().to_le_bytes()),
        }
    }

    /// Encode all of `data`'s elements into the front of `dst`,
    /// converting each to this kind.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `data.len() * width()`.
    pub fn write_slice(self, dst: &mut [u8], data: &Elements) {
        let width = self.width();
        for i in 0..data.len() {
            self.write_raw(&mut dst[i * width..(i + 1) * width], data.raw(i));
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

fn le2(c: &[u8]) -> [u8; 2] {
    [c[0], c[1]]
}

fn le4(c: &[u8]) -> [u8; 4] {
    [c[0], c[1], c[2], c[3]]
}

fn le8(c: &[u8]) -> [u8; 8] {
    [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]
}

/// Conversion carrier for a single element value.
///
/// Every element round-trips through this type when it crosses a kind
/// boundary: all integer kinds widen losslessly into `Int`, both float
/// kinds into `Float`. The destination kind then narrows as its
/// category dictates (see [`ElementKind::write_raw`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue {
    /// An integer value of any supported width and signedness.
    Int(i128),
    /// A floating-point value.
    Float(f64),
}

impl RawValue {
    /// The value as an integer. Floats truncate toward zero and
    /// saturate at the `i128` bounds.
    pub fn to_int(self) -> i128 {
        match self {
            Self::Int(v) => v,
            Self::Float(v) => v as i128,
        }
    }

    /// The value as a float. Integers round to the nearest
    /// representable `f64`.
    pub fn to_float(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// An owned, typed buffer of elements — one variant per [`ElementKind`].
///
/// `Elements` is both the input for `push`/`change` and the view type
/// returned by `deref`. A view is a decoded copy of the bytes live at
/// the moment of the call; it does not track later writes.
#[derive(Clone, Debug, PartialEq)]
pub enum Elements {
    /// 8-bit signed integers.
    I8(Vec<i8>),
    /// 16-bit signed integers.
    I16(Vec<i16>),
    /// 32-bit signed integers.
    I32(Vec<i32>),
    /// 64-bit signed integers.
    I64(Vec<i64>),
    /// 8-bit unsigned integers.
    U8(Vec<u8>),
    /// 16-bit unsigned integers.
    U16(Vec<u16>),
    /// 32-bit unsigned integers.
    U32(Vec<u32>),
    /// 64-bit unsigned integers.
    U64(Vec<u64>),
    /// 32-bit floats.
    F32(Vec<f32>),
    /// 64-bit floats.
    F64(Vec<f64>),
}

impl Elements {
    /// The element kind of this buffer.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::I8(_) => ElementKind::I8,
            Self::I16(_) => ElementKind::I16,
            Self::I32(_) => ElementKind::I32,
            Self::I64(_) => ElementKind::I64,
            Self::U8(_) => ElementKind::U8,
            Self::U16(_) => ElementKind::U16,
            Self::U32(_) => ElementKind::U32,
            Self::U64(_) => ElementKind::U64,
            Self::F32(_) => ElementKind::F32,
            Self::F64(_) => ElementKind::F64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Whether this buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total byte size: `len() * kind().width()`.
    pub fn byte_len(&self) -> usize {
        self.len() * self.kind().width()
    }

    /// The `i`-th element, widened into a [`RawValue`].
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn raw(&self, i: usize) -> RawValue {
        match self {
            Self::I8(v) => RawValue::Int(i128::from(v[i])),
            Self::I16(v) => RawValue::Int(i128::from(v[i])),
            Self::I32(v) => RawValue::Int(i128::from(v[i])),
            Self::I64(v) => RawValue::Int(i128::from(v[i])),
            Self::U8(v) => RawValue::Int(i128::from(v[i])),
            Self::U16(v) => RawValue::Int(i128::from(v[i])),
            Self::U32(v) => RawValue::Int(i128::from(v[i])),
            Self::U64(v) => RawValue::Int(i128::from(v[i])),
            Self::F32(v) => RawValue::Float(f64::from(v[i])),
            Self::F64(v) => RawValue::Float(v[i]),
        }
    }
}

impl From<Vec<i8>> for Elements {
    fn from(v: Vec<i8>) -> Self {
        Self::I8(v)
    }
}

impl From<Vec<i16>> for Elements {
    fn from(v: Vec<i16>) -> Self {
        Self::I16(v)
    }
}

impl From<Vec<i32>> for Elements {
    fn from(v: Vec<i32>) -> Self {
        Self::I32(v)
    }
}

impl From<Vec<i64>> for Elements {
    fn from(v: Vec<i64>) -> Self {
        Self::I64(v)
    }
}

impl From<Vec<u8>> for Elements {
    fn from(v: Vec<u8>) -> Self {
        Self::U8(v)
    }
}

impl From<Vec<u16>> for Elements {
    fn from(v: Vec<u16>) -> Self {
        Self::U16(v)
    }
}

impl From<Vec<u32>> for Elements {
    fn from(v: Vec<u32>) -> Self {
        Self::U32(v)
    }
}

impl From<Vec<u64>> for Elements {
    fn from(v: Vec<u64>) -> Self {
        Self::U64(v)
    }
}

impl From<Vec<f32>> for Elements {
    fn from(v: Vec<f32>) -> Self {
        Self::F32(v)
    }
}

impl From<Vec<f64>> for Elements {
    fn from(v: Vec<f64>) -> Self {
        Self::F64(v)
    }
}
