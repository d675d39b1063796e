//! Length-prefix codec.
//!
//! Every record starts with a fixed-width little-endian length. The width is
//! the fewest bytes able to hold `max_message_size`, so a queue limited to
//! 255-byte messages spends one byte per record on framing.

/// Widest header the codec ever produces (a full `u64`).
pub const MAX_HEADER_WIDTH: usize = core::mem::size_of::<u64>();

/// Smallest `W` such that `max_message_size < 256^W`, never less than 1.
///
/// ```
/// use ring_fifo::header_width;
///
/// assert_eq!(header_width(255), 1);
/// assert_eq!(header_width(256), 2);
/// assert_eq!(header_width(65535), 2);
/// assert_eq!(header_width(65536), 3);
/// ```
pub const fn header_width(max_message_size: usize) -> usize {
    let mut width = 1;
    let mut rest = max_message_size >> 8;
    while rest > 0 {
        width += 1;
        rest >>= 8;
    }
    width
}

/// Writes `length` little-endian into every byte of `dst`.
///
/// The caller guarantees `length` fits in `dst.len()` bytes.
#[inline]
pub fn encode(length: usize, dst: &mut [u8]) {
    debug_assert!(dst.len() <= MAX_HEADER_WIDTH);
    let bytes = (length as u64).to_le_bytes();
    dst.copy_from_slice(&bytes[..dst.len()]);
}

/// Reads a little-endian length spanning every byte of `src`.
#[inline]
pub fn decode(src: &[u8]) -> usize {
    debug_assert!(src.len() <= MAX_HEADER_WIDTH);
    let mut bytes = [0u8; MAX_HEADER_WIDTH];
    bytes[..src.len()].copy_from_slice(src);
    u64::from_le_bytes(bytes) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table() {
        assert_eq!(header_width(0), 1);
        assert_eq!(header_width(1), 1);
        assert_eq!(header_width(255), 1);
        assert_eq!(header_width(256), 2);
        assert_eq!(header_width(65535), 2);
        assert_eq!(header_width(65536), 3);
        assert_eq!(header_width(256 * 256 * 256 + 1), 4);
        assert_eq!(header_width(u32::MAX as usize), 4);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn width_of_usize_max() {
        assert_eq!(header_width(usize::MAX), MAX_HEADER_WIDTH);
    }

    #[test]
    fn one_byte_header() {
        let mut h = [0u8; 1];
        encode(254, &mut h);
        assert_eq!(h, [254]);
        assert_eq!(decode(&h), 254);
    }

    #[test]
    fn two_byte_header_is_little_endian() {
        let mut h = [0u8; 2];
        encode(300, &mut h);
        assert_eq!(u16::from_le_bytes(h), 300);
        assert_eq!(decode(&h), 300);

        encode(255, &mut h);
        assert_eq!(h, [255, 0]);
        assert_eq!(decode(&h), 255);
    }

    #[test]
    fn four_byte_header() {
        let mut h = [0u8; 4];
        let len = 256 * 256 * 256 + 1;
        encode(len, &mut h);
        assert_eq!(u32::from_le_bytes(h) as usize, len);
        assert_eq!(decode(&h), len);
    }

    #[test]
    fn three_byte_header_round_trips_at_limit() {
        let max = 256 * 256 * 256 - 1;
        let mut h = [0u8; 3];
        assert_eq!(h.len(), header_width(max));
        for len in [0, 1, 255, 256, 65535, 65536, max] {
            encode(len, &mut h);
            assert_eq!(decode(&h), len);
        }
    }
}
