//! Reed-Solomon erasure coding with per-shard corruption detection.
//!
//! `reed_solomon_erasure::reconstruct` takes an explicit erasure mask: it
//! has no way to tell a corrupt shard from a missing one on its own. This
//! module closes that gap by storing a CRC32 checksum alongside every
//! shard; [`Encoding::decode`] verifies each checksum before reconstruction
//! and marks any shard that fails as erased, so bit-flip corruption is
//! recovered the same way a truncated shard would be.

mod shards;

use anyhow::{Result, anyhow, bail};
use reed_solomon_erasure::galois_8::ReedSolomon;

use crate::config::{DATA_SHARDS, PARITY_SHARDS};
use crate::encoding::shards::{CRC_SIZE, Shards};
use crate::error::SweetByteError;

/// Reed-Solomon encoder/decoder parameterized by data and parity shard counts.
pub struct Encoding {
    encoder: ReedSolomon,
    shards: Shards,
}

impl Encoding {
    pub fn new(data_shards: usize, parity_shards: usize) -> Result<Self> {
        let encoder = ReedSolomon::new(data_shards, parity_shards)
            .map_err(|e| anyhow!("failed to create reed-solomon encoder: {e}"))?;
        Ok(Self { encoder, shards: Shards::new(data_shards, parity_shards) })
    }

    /// Splits `data` into data and parity shards and serializes them with a
    /// length prefix and a per-shard CRC32.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        bail_if_empty(data)?;

        let mut shards = self.shards.split(data);
        self.encoder.encode(&mut shards).map_err(|e| anyhow!("reed-solomon encoding failed: {e}"))?;
        Ok(self.shards.serialize(data.len(), &shards))
    }

    /// Parses shards out of `encoded`, verifies each shard's CRC32, and
    /// reconstructs any shard whose checksum fails or whose bytes are
    /// missing. Returns `Err(SweetByteError::Corruption { chunk: chunk_index })`
    /// if more than `parity_shards` shards of `chunk_index` are unusable.
    pub fn decode(&self, encoded: &[u8], chunk_index: u64) -> Result<Vec<u8>> {
        bail_if_empty(encoded)?;

        let (original_len, mut shards) = self.shards.deserialize(encoded)?;

        let erasures = shards.iter().filter(|s| s.is_none()).count();
        if erasures > self.shards.parity_shards() {
            tracing::warn!(chunk = chunk_index, erasures, "chunk unrecoverable: too many corrupt shards");
            bail!(SweetByteError::Corruption { chunk: chunk_index });
        }

        self.encoder.reconstruct(&mut shards).map_err(|e| anyhow!("reed-solomon reconstruction failed: {e}"))?;

        if erasures > 0 {
            tracing::warn!(erasures, "recovered chunk from corrupt or missing shards");
        }

        let reconstructed: Vec<Vec<u8>> = shards.into_iter().map(|s| s.expect("reconstruct fills every shard")).collect();
        self.shards.extract(&reconstructed, original_len)
    }
}

fn bail_if_empty(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        bail!("input cannot be empty");
    }
    Ok(())
}

impl Default for Encoding {
    fn default() -> Self {
        Self::new(DATA_SHARDS, PARITY_SHARDS).expect("valid default parameters")
    }
}

/// Size, in bytes, of the CRC32 checksum stored ahead of every shard.
pub const SHARD_CRC_SIZE: usize = CRC_SIZE;
