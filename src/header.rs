//! The 82-byte container header.
//!
//! ```text
//! offset  size  field
//! 0       4     magic       b"SWX4"
//! 4       32    salt        Argon2id salt
//! 36      2     version     format version, big-endian
//! 38      4     flags       bit flags, big-endian
//! 42      8     original_size  plaintext size, big-endian
//! 50      32    mac         HMAC-SHA256 over bytes [0, 50)
//! ```
//!
//! A single HMAC covers every other field, replacing the layered
//! magic/salt/metadata verifiers an earlier design carried separately:
//! one verification call either authenticates the whole header or it
//! doesn't.

use anyhow::{Context, Result, bail};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::codec::{ct_eq, read_u16, read_u32, read_u64, write_u16, write_u32, write_u64};
use crate::config::{CURRENT_VERSION, FLAG_COMPRESSED, HEADER_SIZE, MAC_SIZE, MAGIC, REQUIRED_FLAGS, SALT_LEN};
use crate::error::SweetByteError;

const MAC_OFFSET: usize = HEADER_SIZE - MAC_SIZE;

/// A parsed, verified (or about-to-be-authenticated) container header.
#[derive(Clone)]
pub struct Header {
    pub version: u16,
    pub flags: u32,
    pub salt: [u8; SALT_LEN],
    pub original_size: u64,
    pub mac: [u8; MAC_SIZE],
}

impl Header {
    /// Builds a header for a fresh encryption, computing its MAC with
    /// `hmac_key` (the `hmac` sub-key split from the master key).
    pub fn build(salt: [u8; SALT_LEN], original_size: u64, hmac_key: &[u8]) -> Result<Self> {
        let mut header =
            Self { version: CURRENT_VERSION, flags: REQUIRED_FLAGS | FLAG_COMPRESSED, salt, original_size, mac: [0u8; MAC_SIZE] };
        header.mac = header.compute_mac(hmac_key)?;
        Ok(header)
    }

    /// Serializes the header to its fixed 82-byte on-disk form:
    /// `magic||salt||version||flags||original_size||mac`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.salt);
        write_u16(&mut out, self.version);
        write_u32(&mut out, self.flags);
        write_u64(&mut out, self.original_size);
        out.extend_from_slice(&self.mac);
        debug_assert_eq!(out.len(), HEADER_SIZE);
        out
    }

    /// Parses a header from its on-disk bytes, checking the magic and
    /// version but not yet verifying the MAC (that requires the derived
    /// key, which the caller does not have until the salt is known).
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            bail!(SweetByteError::Format(format!("header truncated: got {} bytes, need {HEADER_SIZE}", bytes.len())));
        }

        if bytes[0..4] != MAGIC {
            bail!(SweetByteError::Format("bad magic bytes".into()));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[4..4 + SALT_LEN]);

        let version = read_u16(&bytes[36..38]);
        if version != CURRENT_VERSION {
            bail!(SweetByteError::Format(format!("unsupported version {version:#06x}")));
        }

        let flags = read_u32(&bytes[38..42]);
        if flags & REQUIRED_FLAGS != REQUIRED_FLAGS {
            bail!(SweetByteError::Format(format!("missing required flags: got {flags:#010x}")));
        }

        let original_size = read_u64(&bytes[42..50]);

        let mut mac = [0u8; MAC_SIZE];
        mac.copy_from_slice(&bytes[MAC_OFFSET..HEADER_SIZE]);

        Ok(Self { version, flags, salt, original_size, mac })
    }

    /// Verifies the header's MAC against `hmac_key`, in constant time.
    /// Failure here means either a wrong password or a tampered header.
    pub fn verify(&self, hmac_key: &[u8]) -> Result<()> {
        let expected = self.compute_mac(hmac_key)?;
        if ct_eq(&expected, &self.mac) {
            tracing::debug!("header MAC verified");
            Ok(())
        } else {
            tracing::warn!("header MAC verification failed");
            Err(SweetByteError::Auth.into())
        }
    }

    /// Computes the HMAC over `magic||salt||version||flags||original_size`,
    /// matching the on-disk field order exactly.
    fn compute_mac(&self, hmac_key: &[u8]) -> Result<[u8; MAC_SIZE]> {
        let mut mac = Hmac::<Sha256>::new_from_slice(hmac_key).context("invalid hmac key length")?;
        mac.update(&MAGIC);
        mac.update(&self.salt);
        mac.update(&self.version.to_be_bytes());
        mac.update(&self.flags.to_be_bytes());
        mac.update(&self.original_size.to_be_bytes());
        let tag = mac.finalize().into_bytes();
        Ok(tag.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HMAC_KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn build_serialize_parse_roundtrip() {
        let header = Header::build([5u8; SALT_LEN], 1234, HMAC_KEY).unwrap();
        let bytes = header.serialize();
        assert_eq!(bytes.len(), HEADER_SIZE);

        let parsed = Header::parse(&bytes).unwrap();
        assert_eq!(parsed.salt, header.salt);
        assert_eq!(parsed.original_size, 1234);
        assert_eq!(parsed.mac, header.mac);
        parsed.verify(HMAC_KEY).unwrap();
    }

    #[test]
    fn field_layout_matches_spec() {
        let header = Header::build([7u8; SALT_LEN], 42, HMAC_KEY).unwrap();
        let bytes = header.serialize();

        assert_eq!(&bytes[0..4], &MAGIC);
        assert_eq!(&bytes[4..36], &[7u8; SALT_LEN]);
        assert_eq!(read_u16(&bytes[36..38]), CURRENT_VERSION);
        assert_eq!(read_u32(&bytes[38..42]), header.flags);
        assert_eq!(read_u64(&bytes[42..50]), 42);
        assert_eq!(&bytes[50..82], &header.mac);
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let header = Header::build([1u8; SALT_LEN], 42, HMAC_KEY).unwrap();
        assert!(header.verify(b"wrong key wrong key wrong key!!!").is_err());
    }

    #[test]
    fn parse_rejects_bad_magic() {
        let mut bytes = Header::build([1u8; SALT_LEN], 1, HMAC_KEY).unwrap().serialize();
        bytes[0] = b'X';
        assert!(Header::parse(&bytes).is_err());
    }

    #[test]
    fn parse_rejects_truncated_header() {
        let bytes = Header::build([1u8; SALT_LEN], 1, HMAC_KEY).unwrap().serialize();
        assert!(Header::parse(&bytes[..HEADER_SIZE - 1]).is_err());
    }

    #[test]
    fn parse_rejects_unsupported_version() {
        let mut bytes = Header::build([1u8; SALT_LEN], 1, HMAC_KEY).unwrap().serialize();
        bytes[36..38].copy_from_slice(&0xFFFFu16.to_be_bytes());
        assert!(Header::parse(&bytes).is_err());
    }

    #[test]
    fn verify_rejects_tampered_original_size() {
        let header = Header::build([2u8; SALT_LEN], 100, HMAC_KEY).unwrap();
        let mut bytes = header.serialize();
        bytes[42..50].copy_from_slice(&999u64.to_be_bytes());
        let parsed = Header::parse(&bytes).unwrap();
        assert!(parsed.verify(HMAC_KEY).is_err());
    }
}
