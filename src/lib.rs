//! ring_fifo - fixed-capacity byte FIFO over one pre-allocated ring buffer
//!
//! Records are framed as a little-endian length header followed by the
//! payload, laid end to end in a circular array allocated once at
//! construction. Push and pop copy bytes in and out under a single mutex and
//! never allocate, so the queue can sit on a hot path between a producer and
//! a consumer without allocator pressure.
//!
//! ```
//! use ring_fifo::{Fifo, PopError};
//!
//! let fifo = Fifo::new(260, 64);
//! fifo.push(b"hello").unwrap();
//!
//! let mut buf = [0u8; 260];
//! let n = fifo.pop(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"hello");
//! assert_eq!(fifo.pop(&mut buf), Err(PopError::NoMoreData));
//! ```
#![warn(missing_docs)]

use core::fmt;

pub mod config;
pub mod error;
mod header;
mod ring;
mod sync;
mod wrap;

pub use config::FifoConfig;
pub use error::{ConfigError, PopError, PushError};
pub use header::{header_width, MAX_HEADER_WIDTH};

use ring::RingState;
use sync::{lock, Mutex};

struct Inner {
    buffer: Box<[u8]>,
    ring: RingState,
}

impl Inner {
    /// Payload length of the oldest record, read without consuming it.
    #[inline]
    fn next_len(&self, header_width: usize) -> Option<usize> {
        if self.ring.occupied().is_empty() {
            return None;
        }
        let mut scratch = [0u8; MAX_HEADER_WIDTH];
        let scratch = &mut scratch[..header_width];
        wrap::read_wrapping(&self.buffer, self.ring.occupied().start, scratch);
        Some(header::decode(scratch))
    }
}

/// Bounded FIFO of opaque byte messages with allocation-free push/pop.
///
/// Share it between threads with an `Arc`; every operation takes the same
/// internal lock and returns immediately, never waiting for space or data.
pub struct Fifo {
    inner: Mutex<Inner>,
    max_message_size: usize,
    header_width: usize,
    capacity: usize,
}

impl Fifo {
    /// Creates a queue holding up to `capacity` bytes of framed records, each
    /// payload at most `max_message_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`Fifo::try_new`] to get an error instead.
    pub fn new(max_message_size: usize, capacity: usize) -> Self {
        Self::try_new(max_message_size, capacity).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible form of [`Fifo::new`].
    pub fn try_new(max_message_size: usize, capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(FifoConfig::new(max_message_size, capacity))
    }

    /// Builds a queue from a validated [`FifoConfig`].
    pub fn with_config(config: FifoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let header_width = config.header_width();
        tracing::debug!(
            max_message_size = config.max_message_size,
            capacity = config.capacity,
            header_width,
            "fifo created"
        );
        Ok(Fifo {
            inner: Mutex::new(Inner {
                buffer: vec![0u8; config.capacity].into_boxed_slice(),
                ring: RingState::new(config.capacity),
            }),
            max_message_size: config.max_message_size,
            header_width,
            capacity: config.capacity,
        })
    }

    /// Appends `payload` as one record.
    ///
    /// Fails with [`PushError::MessageTooLong`] before taking the lock if the
    /// payload exceeds `max_message_size`, and with [`PushError::NoSpaceLeft`]
    /// if header plus payload do not fit in the free bytes. Either way nothing
    /// is written.
    pub fn push(&self, payload: &[u8]) -> Result<(), PushError> {
        if payload.len() > self.max_message_size {
            tracing::trace!(
                len = payload.len(),
                max = self.max_message_size,
                "push rejected: too long"
            );
            return Err(PushError::MessageTooLong {
                len: payload.len(),
                max: self.max_message_size,
            });
        }
        let width = self.header_width;
        let total = width + payload.len();

        let mut guard = lock(&self.inner);
        let Inner { buffer, ring } = &mut *guard;

        if !ring.fits(total) {
            let available = ring.free().len;
            tracing::trace!(needed = total, available, "push rejected: no space");
            return Err(PushError::NoSpaceLeft {
                needed: total,
                available,
            });
        }

        let start = ring.free().start;
        if buffer.len() - start >= width {
            header::encode(payload.len(), &mut buffer[start..start + width]);
        } else {
            // header itself straddles the end of the array
            let mut scratch = [0u8; MAX_HEADER_WIDTH];
            let scratch = &mut scratch[..width];
            header::encode(payload.len(), scratch);
            wrap::write_wrapping(buffer, start, scratch);
        }
        wrap::write_wrapping(buffer, start + width, payload);

        ring.commit_push(total);
        Ok(())
    }

    /// Removes the oldest record, copying its payload into the front of `dst`.
    /// Returns the payload length.
    ///
    /// Fails with [`PopError::NoMoreData`] on an empty queue, and with
    /// [`PopError::BufferTooSmall`] if `dst` is shorter than the payload; in
    /// that case the record stays queued and a retry with a larger buffer
    /// returns it. A `dst` of `max_message_size` bytes never hits that error.
    pub fn pop(&self, dst: &mut [u8]) -> Result<usize, PopError> {
        let width = self.header_width;
        let mut guard = lock(&self.inner);

        let Some(len) = guard.next_len(width) else {
            return Err(PopError::NoMoreData);
        };
        if dst.len() < len {
            tracing::trace!(
                needed = len,
                capacity = dst.len(),
                "pop rejected: buffer too small"
            );
            return Err(PopError::BufferTooSmall {
                needed: len,
                capacity: dst.len(),
            });
        }

        let Inner { buffer, ring } = &mut *guard;
        wrap::read_wrapping(buffer, ring.occupied().start + width, &mut dst[..len]);
        ring.commit_pop(width + len);
        Ok(len)
    }

    /// Payload length of the record the next [`pop`](Self::pop) would return.
    pub fn peek_len(&self) -> Option<usize> {
        lock(&self.inner).next_len(self.header_width)
    }

    /// True if a payload of `len` bytes would be accepted right now.
    pub fn can_push(&self, len: usize) -> bool {
        len <= self.max_message_size
            && self
                .header_width
                .checked_add(len)
                .is_some_and(|total| lock(&self.inner).ring.fits(total))
    }

    /// Drops every queued record.
    pub fn clear(&self) {
        let mut guard = lock(&self.inner);
        let dropped = guard.ring.records();
        guard.ring.reset();
        tracing::debug!(dropped, "fifo cleared");
    }

    /// Number of queued records.
    pub fn len(&self) -> usize {
        lock(&self.inner).ring.records()
    }

    /// True if no records are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes taken by queued records, headers included.
    pub fn used_bytes(&self) -> usize {
        lock(&self.inner).ring.occupied().len
    }

    /// Bytes available for new records, headers included.
    pub fn free_bytes(&self) -> usize {
        lock(&self.inner).ring.free().len
    }

    /// Size of the backing array.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest payload accepted by [`push`](Self::push).
    pub const fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    /// Length-header bytes stored in front of every payload.
    pub const fn header_width(&self) -> usize {
        self.header_width
    }
}

impl fmt::Debug for Fifo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = lock(&self.inner);
        f.debug_struct("Fifo")
            .field("max_message_size", &self.max_message_size)
            .field("capacity", &self.capacity)
            .field("header_width", &self.header_width)
            .field("records", &guard.ring.records())
            .field("occupied", &guard.ring.occupied())
            .field("free", &guard.ring.free())
            .finish()
    }
}
