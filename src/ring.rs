//! Occupied/free bookkeeping for the backing array.
//!
//! The array is split into two cyclic ranges that always tile it exactly:
//! `occupied` starts at the oldest record, `free` starts right after the
//! newest one. Keeping both lengths around makes the space check on push a
//! single comparison.

/// A `(start, len)` span of a circular array, possibly wrapping past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyclicRange {
    /// Offset of the first byte, always `< capacity` (or 0 for an empty array).
    pub start: usize,
    /// Number of bytes covered, `<= capacity`.
    pub len: usize,
}

impl CyclicRange {
    /// Range of `len` bytes starting at `start`.
    pub const fn new(start: usize, len: usize) -> Self {
        CyclicRange { start, len }
    }

    /// Offset one past the last byte, reduced modulo `capacity`.
    #[inline]
    pub fn end(&self, capacity: usize) -> usize {
        advance(self.start, self.len, capacity)
    }

    /// True if the range covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Moves `offset` forward by `by` bytes around a ring of `capacity` bytes.
#[inline]
pub(crate) fn advance(offset: usize, by: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let next = offset + by;
    if next >= capacity {
        next % capacity
    } else {
        next
    }
}

/// The two ranges plus a record count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingState {
    occupied: CyclicRange,
    free: CyclicRange,
    capacity: usize,
    records: usize,
}

impl RingState {
    /// Empty state: nothing occupied, the whole array free from offset 0.
    pub const fn new(capacity: usize) -> Self {
        RingState {
            occupied: CyclicRange::new(0, 0),
            free: CyclicRange::new(0, capacity),
            capacity,
            records: 0,
        }
    }

    /// Bytes holding queued records, oldest first.
    pub const fn occupied(&self) -> CyclicRange {
        self.occupied
    }

    /// Bytes available for the next record.
    pub const fn free(&self) -> CyclicRange {
        self.free
    }

    /// Number of records currently held.
    pub const fn records(&self) -> usize {
        self.records
    }

    /// True if `total` more bytes can be appended.
    #[inline]
    pub const fn fits(&self, total: usize) -> bool {
        total <= self.free.len
    }

    /// Appends one record of `total` bytes (header included) at `free.start`.
    ///
    /// The caller has already checked [`fits`](Self::fits) and written the bytes.
    #[inline]
    pub fn commit_push(&mut self, total: usize) {
        debug_assert!(self.fits(total));
        self.free.start = advance(self.free.start, total, self.capacity);
        self.free.len -= total;
        self.occupied.len += total;
        self.records += 1;
        debug_assert!(self.is_consistent());
    }

    /// Removes the oldest record of `total` bytes from `occupied.start`.
    #[inline]
    pub fn commit_pop(&mut self, total: usize) {
        debug_assert!(total <= self.occupied.len && self.records > 0);
        self.occupied.start = advance(self.occupied.start, total, self.capacity);
        self.occupied.len -= total;
        self.free.len += total;
        self.records -= 1;
        debug_assert!(self.is_consistent());
    }

    /// Forgets every record.
    ///
    /// Both ranges restart at offset 0 so a cleared ring behaves exactly like
    /// a fresh one.
    pub fn reset(&mut self) {
        *self = RingState::new(self.capacity);
    }

    /// Checks the tiling invariants: lengths sum to capacity and `free`
    /// begins where `occupied` ends.
    pub fn is_consistent(&self) -> bool {
        self.occupied.len + self.free.len == self.capacity
            && self.free.start == self.occupied.end(self.capacity)
            && (self.records == 0) == (self.occupied.len == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let r = RingState::new(13);
        assert_eq!(r.occupied(), CyclicRange::new(0, 0));
        assert_eq!(r.free(), CyclicRange::new(0, 13));
        assert_eq!(r.records(), 0);
        assert!(r.is_consistent());
    }

    #[test]
    fn push_then_pop_advances_both_ranges() {
        let mut r = RingState::new(13);
        r.commit_push(6);
        r.commit_push(6);
        assert_eq!(r.occupied(), CyclicRange::new(0, 12));
        assert_eq!(r.free(), CyclicRange::new(12, 1));
        assert!(!r.fits(3));

        r.commit_pop(6);
        assert_eq!(r.occupied(), CyclicRange::new(6, 6));
        assert_eq!(r.free(), CyclicRange::new(12, 7));
        assert!(r.fits(7));

        // free range now wraps past the end
        r.commit_push(7);
        assert_eq!(r.free(), CyclicRange::new(6, 0));
        assert_eq!(r.occupied(), CyclicRange::new(6, 13));
        assert_eq!(r.records(), 2);
        assert!(r.is_consistent());
    }

    #[test]
    fn filling_exactly_wraps_free_start_to_zero() {
        let mut r = RingState::new(8);
        r.commit_push(8);
        assert_eq!(r.free(), CyclicRange::new(0, 0));
        r.commit_pop(8);
        assert_eq!(r.occupied(), CyclicRange::new(0, 0));
        assert_eq!(r.free(), CyclicRange::new(0, 8));
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut r = RingState::new(10);
        r.commit_push(4);
        r.commit_push(3);
        r.commit_pop(4);
        r.reset();
        assert_eq!(r, RingState::new(10));
    }

    #[test]
    fn range_end_wraps() {
        assert_eq!(CyclicRange::new(8, 5).end(10), 3);
        assert_eq!(CyclicRange::new(3, 7).end(10), 0);
        assert_eq!(CyclicRange::new(3, 2).end(10), 5);
        assert!(CyclicRange::default().is_empty());
    }
}
