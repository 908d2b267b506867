//! Index and capacity arithmetic for sparse vectors
//!
//! Pure functions with no allocation. All of them guard against `usize`
//! overflow so callers never wrap silently.

pub mod bounds;

pub use bounds::{
    count_based, grow_target, linear_index, pair_grow_target, shift_span, validate_slot_bytes,
};
