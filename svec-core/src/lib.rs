#![no_std]

//! svec Core - Sparse Vector Definitions
//!
//! This crate provides the error type, traits and index arithmetic shared by
//! sparse vector containers. It performs no allocation of its own; the
//! allocation seam is only available with the `alloc` feature.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
