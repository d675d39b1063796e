//! Construction parameters.

use crate::error::ConfigError;
use crate::header::header_width;

/// Sizing for a [`Fifo`](crate::Fifo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoConfig {
    /// Largest payload accepted by `push`. Zero is allowed and admits only
    /// empty payloads.
    pub max_message_size: usize,
    /// Size of the backing array in bytes, headers included.
    pub capacity: usize,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            max_message_size: 4096,
            capacity: 1 << 20, // 1 MiB
        }
    }
}

impl FifoConfig {
    /// Config with both sizes given explicitly.
    pub const fn new(max_message_size: usize, capacity: usize) -> Self {
        Self {
            max_message_size,
            capacity,
        }
    }

    /// Sets the largest accepted payload.
    #[must_use]
    pub const fn max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    /// Sets the backing array size.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Header bytes each record will carry.
    pub const fn header_width(&self) -> usize {
        header_width(self.max_message_size)
    }

    /// A capacity smaller than one header is accepted; such a queue simply
    /// rejects every push with `NoSpaceLeft`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
