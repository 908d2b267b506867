//! svec - Hole-tolerant Sparse Vector
//!
//! This library provides an auto-growing, index-addressable vector whose slots
//! may be empty, plus a row-major matrix built on it and a singly linked list.
//!
//! ## Architecture
//!
//! svec follows a specification/implementation separation:
//!
//! - **svec-core**: error type, traits and index arithmetic (no_std, no I/O)
//! - **svec**: the containers, growth policy and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use svec::{GrowthConfig, SparseVec};
//!
//! let mut vector = SparseVec::new(3);
//! vector.set(0, "a");
//! vector.set(1, "b");
//! vector.insert(1, "c");
//! assert_eq!(vector.as_slots(), &[Some("a"), Some("c"), Some("b")]);
//!
//! // Writes past the end grow the vector
//! vector.set(6, "z");
//! assert_eq!(vector.len(), 7);
//!
//! // Bounded growth reports failure instead of aborting
//! let mut bounded = SparseVec::with_allocator(0, GrowthConfig::exact().with_max_slots(4));
//! assert!(bounded.try_set(10, 1u8).is_err());
//! ```
//!
//! ## Policies
//!
//! - **Out of range reads** return `None`, exactly like an empty slot
//! - **Out of range removes and moves** are no-ops
//! - **Allocation failure** is an error from `try_*` methods and fatal from
//!   the plain ones
//! - **Size** only changes through growth, `resize`, `pop` and `shift`

// Re-export core abstractions
pub use svec_core::{
    // Core traits
    SlotAllocator, SparseGrid, SparseSequence,
    // Error handling
    Result, SparseError,
};

// Implementation modules
pub mod cursor;
pub mod growth;
pub mod list;
pub mod matrix;
pub mod vector;

// Public exports
pub use cursor::Cursor;
pub use growth::{GrowthConfig, GrowthStrategy};
pub use list::{List, Node};
pub use matrix::Matrix;
pub use vector::SparseVec;
