//! # Bounded Text Buffers
//!
//! Fixed-capacity, NUL-terminated text fields. The buffer capacity includes
//! the terminator, so a `[u8; N]` slot holds at most `N - 1` bytes of text.
//! Truncation happens here, at the write boundary; buffers never grow.

/// Zero `dst` and copy `src` into it, truncated to `dst.len() - 1` bytes.
///
/// Truncation lands on a UTF-8 character boundary so the stored prefix stays
/// valid text. A zero-length slot is left untouched.
pub fn copy_str(dst: &mut [u8], src: &str) {
    dst.fill(0);
    let Some(cap) = dst.len().checked_sub(1) else {
        return;
    };

    let mut end = src.len().min(cap);
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    dst[..end].copy_from_slice(&src.as_bytes()[..end]);
}

/// Read the text stored in `buf`, up to (not including) the first NUL.
///
/// Returns the empty string if the prefix is not valid UTF-8, which can only
/// happen if the slot was mutated outside [`copy_str`].
#[must_use]
pub fn read_str(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    core::str::from_utf8(&buf[..end]).unwrap_or("")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_fits() {
        let mut buf = [0xAAu8; 8];
        copy_str(&mut buf, "abc");
        assert_eq!(&buf, b"abc\0\0\0\0\0");
        assert_eq!(read_str(&buf), "abc");
    }

    #[test]
    fn copy_truncates_to_capacity_minus_one() {
        let mut buf = [0u8; 4];
        copy_str(&mut buf, "abcdef");
        assert_eq!(&buf, b"abc\0");
        assert_eq!(read_str(&buf), "abc");
    }

    #[test]
    fn copy_exact_capacity_still_terminated() {
        let mut buf = [0u8; 4];
        copy_str(&mut buf, "abcd");
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn truncation_respects_utf8_boundary() {
        // 'é' is 2 bytes; a naive cut at 4 bytes would split it.
        let mut buf = [0u8; 5];
        copy_str(&mut buf, "aéé");
        assert_eq!(read_str(&buf), "aé");
        assert_eq!(buf[4], 0);
    }

    #[test]
    fn empty_and_tiny_buffers() {
        let mut empty: [u8; 0] = [];
        copy_str(&mut empty, "x");

        let mut one = [0xFFu8; 1];
        copy_str(&mut one, "x");
        assert_eq!(one, [0]);
        assert_eq!(read_str(&one), "");
    }

    #[test]
    fn read_stops_at_first_nul() {
        let buf = *b"ab\0cd";
        assert_eq!(read_str(&buf), "ab");
    }

    #[test]
    fn read_unterminated_takes_whole_buffer() {
        let buf = *b"abcd";
        assert_eq!(read_str(&buf), "abcd");
    }
}
