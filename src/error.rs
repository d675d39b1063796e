//! Error types returned by the queue.
//!
//! None of these signal corruption: every failed call leaves the queue
//! exactly as it found it.

/// Returned by [`Fifo::push`](crate::Fifo::push).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PushError {
    /// Payload is longer than the queue's `max_message_size`.
    #[error("message too long ({len} bytes, max {max})")]
    MessageTooLong {
        /// Length of the rejected payload
        len: usize,
        /// Configured maximum payload length
        max: usize,
    },

    /// Not enough free bytes for the header and payload.
    #[error("no space left ({needed} bytes needed, {available} free)")]
    NoSpaceLeft {
        /// Header plus payload length
        needed: usize,
        /// Free bytes at the time of the call
        available: usize,
    },
}

impl PushError {
    /// True for [`PushError::NoSpaceLeft`], the one case worth retrying.
    pub const fn is_full(&self) -> bool {
        matches!(self, PushError::NoSpaceLeft { .. })
    }
}

/// Returned by [`Fifo::pop`](crate::Fifo::pop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PopError {
    /// The queue holds no records.
    #[error("no more data in queue")]
    NoMoreData,

    /// Destination is shorter than the next record. The record stays queued.
    #[error("destination buffer too small ({needed} bytes needed, {capacity} given)")]
    BufferTooSmall {
        /// Payload length of the next record
        needed: usize,
        /// Length of the destination buffer
        capacity: usize,
    },
}

impl PopError {
    /// True for [`PopError::NoMoreData`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, PopError::NoMoreData)
    }
}

/// Rejected [`FifoConfig`](crate::FifoConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The backing array must hold at least one byte.
    #[error("capacity must be greater than 0")]
    ZeroCapacity,
}
