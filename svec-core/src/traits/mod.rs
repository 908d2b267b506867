//! Abstract interfaces for the sparse vector family
//!
//! Traits are pure interfaces - concrete containers live in the `svec` crate.

#[cfg(feature = "alloc")]
pub mod alloc;
pub mod grid;
pub mod sequence;

#[cfg(feature = "alloc")]
pub use self::alloc::SlotAllocator;
pub use grid::SparseGrid;
pub use sequence::SparseSequence;
