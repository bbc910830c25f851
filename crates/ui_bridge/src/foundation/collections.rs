//! Specialized collection types

use crate::core::config::GrowthPolicy;
use crate::error::{BridgeError, BridgeResult};

/// Growable buffer reused from frame to frame
///
/// Holds the current frame's content in a `Vec` whose storage is never released.
/// Capacity only moves up, and only when a frame needs more than the buffer has
/// ever held, so a steady UI stops allocating after its first frames.
#[derive(Debug, Clone)]
pub struct FrameBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    reallocations: u64,
    label: &'static str,
}

impl<T: Copy> FrameBuffer<T> {
    /// Create an empty buffer; `label` names it in errors and logs
    pub fn new(label: &'static str) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            reallocations: 0,
            label,
        }
    }

    /// Create a buffer with room for `capacity` elements already reserved
    pub fn with_capacity(label: &'static str, capacity: usize) -> BridgeResult<Self> {
        let mut buffer = Self::new(label);
        if capacity > 0 {
            buffer.grow_to(capacity)?;
            buffer.reallocations = 0;
        }
        Ok(buffer)
    }

    /// Make room for `required` elements, never shrinking
    ///
    /// Returns `true` when storage had to be reallocated. The current content is
    /// discarded either way; callers refill the buffer right after.
    pub fn ensure_capacity(&mut self, required: usize, policy: GrowthPolicy) -> BridgeResult<bool> {
        self.data.clear();
        if required <= self.capacity {
            return Ok(false);
        }
        self.grow_to(policy.target_capacity(required).max(required))?;
        Ok(true)
    }

    fn grow_to(&mut self, target: usize) -> BridgeResult<()> {
        let mut fresh = Vec::new();
        fresh.try_reserve_exact(target).map_err(|_| BridgeError::Allocation {
            what: self.label,
            requested: target,
        })?;
        log::debug!(
            "Growing combined {} buffer: {} -> {} elements",
            self.label, self.capacity, target
        );
        self.data = fresh;
        self.capacity = target;
        self.reallocations += 1;
        Ok(())
    }

    /// Append elements; the caller has already ensured capacity
    pub fn extend_from_slice(&mut self, items: &[T]) {
        debug_assert!(self.data.len() + items.len() <= self.capacity);
        self.data.extend_from_slice(items);
    }

    /// Drop the content, keep the storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Current content
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of elements currently held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds nothing this frame
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element capacity; never decreases
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times storage was reallocated since creation
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }
}
