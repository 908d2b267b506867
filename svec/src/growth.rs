//! Growth configuration and the default slot allocator
//!
//! Every sparse vector resize funnels through a [`SlotAllocator`]. The default
//! allocator is [`GrowthConfig`], which decides how much capacity to request
//! and enforces an optional ceiling on the number of slots.

use svec_core::{validate_slot_bytes, Result, SlotAllocator, SparseError};
use tracing::{trace, warn};

/// How a slot buffer tracks its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthStrategy {
    /// Capacity always equals the slot count; shrinking releases memory
    #[default]
    Exact,
    /// Capacity grows geometrically and is kept on shrink
    Amortized,
}

/// Configuration for slot buffer growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthConfig {
    /// Capacity policy
    pub strategy: GrowthStrategy,
    /// Maximum number of slots a buffer may hold
    pub max_slots: Option<usize>,
}

impl GrowthConfig {
    /// Exact growth, no slot ceiling
    pub const fn exact() -> Self {
        Self {
            strategy: GrowthStrategy::Exact,
            max_slots: None,
        }
    }

    /// Amortized growth, no slot ceiling
    pub const fn amortized() -> Self {
        Self {
            strategy: GrowthStrategy::Amortized,
            max_slots: None,
        }
    }

    /// Set the growth strategy
    pub fn with_strategy(mut self, strategy: GrowthStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Cap the number of slots a buffer may hold
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    /// Check `size` against the configured ceiling and the address space
    pub fn check_size<T>(&self, size: usize) -> Result<()> {
        if let Some(limit) = self.max_slots {
            if size > limit {
                return Err(SparseError::CapacityLimit {
                    requested: size,
                    limit,
                });
            }
        }

        validate_slot_bytes::<Option<T>>(size)?;
        Ok(())
    }
}

impl SlotAllocator for GrowthConfig {
    fn allocate_or_grow<T>(&self, slots: &mut Vec<Option<T>>, size: usize) -> Result<()> {
        if let Err(err) = self.check_size::<T>(size) {
            warn!(requested = size, %err, "slot request rejected");
            return Err(err);
        }

        let len = slots.len();
        if size > len {
            let additional = size - len;
            let reserved = match self.strategy {
                GrowthStrategy::Exact => slots.try_reserve_exact(additional),
                GrowthStrategy::Amortized => slots.try_reserve(additional),
            };

            if reserved.is_err() {
                warn!(requested = size, "allocator refused slot buffer");
                return Err(SparseError::AllocationFailed { requested: size });
            }
        }

        trace!(
            from = len,
            to = size,
            capacity = slots.capacity(),
            "slot buffer prepared"
        );
        Ok(())
    }

    fn release<T>(&self, slots: &mut Vec<Option<T>>) {
        if self.strategy == GrowthStrategy::Exact {
            slots.shrink_to_fit();
        }
    }
}
