//! Boundary-crossing copies into and out of a circular byte array.
//!
//! Header and payload both go through the same split, so the only place that
//! reasons about the physical end of the array is [`split`].

use core::ops::Range;

/// Splits the logical span `[start, start + len)` of a ring of `capacity`
/// bytes into at most two physical ranges: the part up to the array end and
/// the part continuing from offset 0 (empty when nothing wraps).
///
/// `start` may be `>= capacity`; it is reduced first. `len` is clamped to
/// `capacity`.
#[inline]
pub fn split(capacity: usize, start: usize, len: usize) -> (Range<usize>, Range<usize>) {
    if capacity == 0 {
        return (0..0, 0..0);
    }
    let start = start % capacity;
    let len = len.min(capacity);
    let until_end = capacity - start;
    if len <= until_end {
        (start..start + len, 0..0)
    } else {
        (start..capacity, 0..len - until_end)
    }
}

/// Copies all of `src` into `ring` starting at `dst_start`, continuing from
/// offset 0 past the end of the array. Returns the number of bytes written.
#[inline]
pub fn write_wrapping(ring: &mut [u8], dst_start: usize, src: &[u8]) -> usize {
    debug_assert!(src.len() <= ring.len(), "span longer than ring");
    let (head, tail) = split(ring.len(), dst_start, src.len());
    let (first, rest) = src.split_at(head.len());
    ring[head].copy_from_slice(first);
    ring[tail.clone()].copy_from_slice(&rest[..tail.len()]);
    first.len() + tail.len()
}

/// Fills `dst` from `ring` starting at `src_start`, wrapping the same way as
/// [`write_wrapping`]. Returns the number of bytes read.
#[inline]
pub fn read_wrapping(ring: &[u8], src_start: usize, dst: &mut [u8]) -> usize {
    debug_assert!(dst.len() <= ring.len(), "span longer than ring");
    let (head, tail) = split(ring.len(), src_start, dst.len());
    let (first, rest) = dst.split_at_mut(head.len());
    first.copy_from_slice(&ring[head]);
    rest[..tail.len()].copy_from_slice(&ring[tail.clone()]);
    first.len() + tail.len()
}
