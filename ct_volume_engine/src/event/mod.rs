//! Event module — discrete input events and the per-frame bounded queue.
//!
//! Events are created by the input-sampling pass, applied by the World in
//! strict FIFO order, and live for exactly one frame. The queue is a
//! fixed-capacity buffer: overflow means input sampling broke the one-pass
//! bound and is treated as a fatal invariant violation, not a recoverable
//! condition.

mod event;
mod event_queue;

pub use event::Event;
pub use event_queue::{EventQueue, DEFAULT_CAPACITY};
