//! Big-endian integer codec and constant-time byte comparison.
//!
//! Every length-prefix and header integer field in the container format is
//! big-endian; this module is the single place that encodes or decodes
//! them, so the byte order is never left to whichever integer method a
//! call site happened to reach for.

use subtle::ConstantTimeEq;

#[inline]
pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[inline]
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[inline]
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[inline]
pub fn read_u16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes(bytes.try_into().expect("2-byte slice"))
}

#[inline]
pub fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(bytes.try_into().expect("4-byte slice"))
}

#[inline]
pub fn read_u64(bytes: &[u8]) -> u64 {
    u64::from_be_bytes(bytes.try_into().expect("8-byte slice"))
}

/// Constant-time equality for MAC and AEAD tag comparison.
///
/// Returns `false` immediately (not in constant time) when the lengths
/// differ, since length is not secret; the byte contents are compared
/// without early exit via `subtle::ConstantTimeEq`.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_u16() {
        let mut buf = Vec::new();
        write_u16(&mut buf, 0xBEEF);
        assert_eq!(read_u16(&buf), 0xBEEF);
        assert_eq!(buf, [0xBE, 0xEF]);
    }

    #[test]
    fn roundtrip_u32() {
        let mut buf = Vec::new();
        write_u32(&mut buf, 0xDEAD_BEEF);
        assert_eq!(read_u32(&buf), 0xDEAD_BEEF);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn roundtrip_u64() {
        let mut buf = Vec::new();
        write_u64(&mut buf, 0x0102_0304_0506_0708);
        assert_eq!(read_u64(&buf), 0x0102_0304_0506_0708);
    }

    #[test]
    fn ct_eq_matches_and_differs() {
        assert!(ct_eq(b"abc", b"abc"));
        assert!(!ct_eq(b"abc", b"abd"));
        assert!(!ct_eq(b"abc", b"ab"));
    }
}
