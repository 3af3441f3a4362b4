//! Per-chunk transform: compress, pad, seal, Reed-Solomon encode (and the
//! inverse). This is the unit of work a worker thread applies to one
//! [`crate::types::Task`].
//!
//! The teacher's equivalent stage skipped the padding step entirely; this
//! version restores it so the sealed ciphertext is always a whole number
//! of `PADDING_BLOCK_SIZE` blocks before it reaches the AEAD layer.

use anyhow::Result;

use crate::compression::{CompressionLevel, Compressor};
use crate::config::PADDING_BLOCK_SIZE;
use crate::crypto::Cipher;
use crate::encoding::Encoding;
use crate::padding::Padding;

/// Bundles the stateless, per-chunk transforms so a worker thread only
/// needs to hold one value to process tasks.
pub struct ChunkProcessor {
    compressor: Compressor,
    padding: Padding,
    cipher: Cipher,
    encoding: Encoding,
}

impl ChunkProcessor {
    pub fn new(cipher: Cipher, encoding: Encoding) -> Result<Self> {
        Ok(Self { compressor: Compressor::new(CompressionLevel::Default)?, padding: Padding::new(PADDING_BLOCK_SIZE)?, cipher, encoding })
    }

    /// Transforms one plaintext chunk into its on-disk encoded form:
    /// compress, pad to the block size, seal with the dual-layer cipher,
    /// then Reed-Solomon encode.
    pub fn encrypt_chunk(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let compressed = self.compressor.compress(plaintext)?;
        let padded = self.padding.pad(&compressed)?;
        let sealed = self.cipher.seal(&padded)?;
        self.encoding.encode(&sealed)
    }

    /// Reverses [`ChunkProcessor::encrypt_chunk`]: Reed-Solomon decode
    /// (recovering from corrupt shards), open the dual-layer cipher, strip
    /// padding, then decompress. `chunk_index` identifies this chunk in any
    /// `SweetByteError::Corruption` raised by the Reed-Solomon layer.
    pub fn decrypt_chunk(&self, encoded: &[u8], chunk_index: u64) -> Result<Vec<u8>> {
        let sealed = self.encoding.decode(encoded, chunk_index)?;
        let padded = self.cipher.open(&sealed)?;
        let compressed = self.padding.unpad(&padded)?;
        Compressor::decompress(&compressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DATA_SHARDS, PARITY_SHARDS, SALT_LEN};
    use crate::kdf::{derive_master_key, split_master_key};

    fn processor() -> ChunkProcessor {
        let master = derive_master_key(b"correct horse battery staple", &[1u8; SALT_LEN]).unwrap();
        let keys = split_master_key(&master).unwrap();
        let cipher = Cipher::new(&keys).unwrap();
        let encoding = Encoding::new(DATA_SHARDS, PARITY_SHARDS).unwrap();
        ChunkProcessor::new(cipher, encoding).unwrap()
    }

    #[test]
    fn roundtrip_small_chunk() {
        let proc = processor();
        let plaintext = b"hello world";
        let encoded = proc.encrypt_chunk(plaintext).unwrap();
        assert_eq!(proc.decrypt_chunk(&encoded, 0).unwrap(), plaintext);
    }

    #[test]
    fn roundtrip_large_zero_chunk() {
        let proc = processor();
        let plaintext = vec![0u8; 1024 * 1024];
        let encoded = proc.encrypt_chunk(&plaintext).unwrap();
        assert_eq!(proc.decrypt_chunk(&encoded, 0).unwrap(), plaintext);
    }

    #[test]
    fn tolerates_single_shard_corruption() {
        let proc = processor();
        let plaintext = vec![99u8; 200_000];
        let mut encoded = proc.encrypt_chunk(&plaintext).unwrap();

        let mid = encoded.len() / 2;
        encoded[mid] ^= 0xFF;

        assert_eq!(proc.decrypt_chunk(&encoded, 0).unwrap(), plaintext);
    }
}
