/// EventQueue — bounded FIFO of input events, filled once and drained
/// once per frame.
///
/// Discipline: `flush()` at the start of every input-sampling pass, then
/// a single writer pushes, then a single reader iterates in push order.
/// Never concurrent, never mutated while iterating.

use super::Event;
use crate::error::{CtVolumeError, CtVolumeResult};

/// Default queue capacity — an upper bound on the events one
/// input-sampling pass can legitimately produce
pub const DEFAULT_CAPACITY: usize = 512;

/// Fixed-capacity FIFO of [`Event`]s.
///
/// Exceeding the capacity is a programming-invariant violation and
/// surfaces as [`CtVolumeError::CapacityExceeded`]; the queue never grows.
#[derive(Debug)]
pub struct EventQueue {
    events: Vec<Event>,
    capacity: usize,
}

impl EventQueue {
    /// Create a queue with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a queue with a custom fixed capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Logically empty the queue, retaining the allocation.
    ///
    /// Called once at the start of every input-sampling pass, never
    /// mid-frame.
    pub fn flush(&mut self) {
        self.events.clear();
    }

    /// Append an event in arrival order.
    ///
    /// # Errors
    ///
    /// [`CtVolumeError::CapacityExceeded`] when the queue is already full.
    /// Callers treat this as fatal.
    pub fn push(&mut self, event: Event) -> CtVolumeResult<()> {
        if self.events.len() == self.capacity {
            return Err(CtVolumeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.events.push(event);
        Ok(())
    }

    /// Iterate queued events in push order.
    ///
    /// The queue must not be mutated while iterating
    /// (single-writer-then-single-reader per frame).
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "event_queue_tests.rs"]
mod tests;
