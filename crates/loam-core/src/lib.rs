//! Core types for the Loam memory model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the closed set of numeric element kinds, the [`Elements`] typed
//! buffer that moves values in and out of the arena, and the shared
//! [`MemoryError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;

pub use element::{ElementCategory, ElementKind, Elements, RawValue};
pub use error::MemoryError;
