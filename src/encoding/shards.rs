use anyhow::{Result, bail};

use crate::codec::{read_u32, write_u32};

/// Size of the CRC32 checksum stored ahead of every serialized shard.
pub const CRC_SIZE: usize = 4;
/// Size of the `[original_len][shard_size]` prefix ahead of the shard list.
const PREFIX_SIZE: usize = 8;

pub struct Shards {
    data_shards: usize,
    parity_shards: usize,
}

impl Shards {
    pub fn new(data_shards: usize, parity_shards: usize) -> Self {
        Self { data_shards, parity_shards }
    }

    pub fn parity_shards(&self) -> usize {
        self.parity_shards
    }

    fn total_shards(&self) -> usize {
        self.data_shards + self.parity_shards
    }

    /// Splits `data` into `data_shards` equal, zero-padded shards followed
    /// by `parity_shards` zeroed placeholders for the encoder to fill.
    pub fn split(&self, data: &[u8]) -> Vec<Vec<u8>> {
        let shard_size = data.len().div_ceil(self.data_shards);
        let mut shards: Vec<Vec<u8>> = (0..self.total_shards()).map(|_| vec![0u8; shard_size]).collect();
        for (idx, chunk) in data.chunks(shard_size).enumerate() {
            shards[idx][..chunk.len()].copy_from_slice(chunk);
        }
        shards
    }

    /// Serializes `shards` into `[original_len:u32][shard_size:u32]` followed
    /// by `[crc32:u32][shard bytes]` for each shard.
    pub fn serialize(&self, original_len: usize, shards: &[Vec<u8>]) -> Vec<u8> {
        let shard_size = shards.first().map_or(0, Vec::len);
        let mut out = Vec::with_capacity(PREFIX_SIZE + shards.len() * (CRC_SIZE + shard_size));

        write_u32(&mut out, u32::try_from(original_len).expect("chunk length fits u32"));
        write_u32(&mut out, u32::try_from(shard_size).expect("shard size fits u32"));

        for shard in shards {
            write_u32(&mut out, crc32fast::hash(shard));
            out.extend_from_slice(shard);
        }

        out
    }

    /// Parses a buffer produced by [`Shards::serialize`], returning the
    /// original plaintext length and one `Option<Vec<u8>>` per shard: `None`
    /// marks a shard whose CRC32 did not match its bytes, so the caller can
    /// hand it to Reed-Solomon as an erasure.
    pub fn deserialize(&self, encoded: &[u8]) -> Result<(usize, Vec<Option<Vec<u8>>>)> {
        if encoded.len() < PREFIX_SIZE {
            bail!("encoded shard buffer too short: {} bytes", encoded.len());
        }

        let original_len = read_u32(&encoded[0..4]) as usize;
        let shard_size = read_u32(&encoded[4..8]) as usize;

        let expected_len = PREFIX_SIZE + self.total_shards() * (CRC_SIZE + shard_size);
        if encoded.len() != expected_len {
            bail!("encoded shard buffer length {} does not match expected {expected_len}", encoded.len());
        }

        let mut shards = Vec::with_capacity(self.total_shards());
        let mut offset = PREFIX_SIZE;
        for _ in 0..self.total_shards() {
            let crc_expected = read_u32(&encoded[offset..offset + CRC_SIZE]);
            let shard = &encoded[offset + CRC_SIZE..offset + CRC_SIZE + shard_size];
            offset += CRC_SIZE + shard_size;

            if crc32fast::hash(shard) == crc_expected {
                shards.push(Some(shard.to_vec()));
            } else {
                shards.push(None);
            }
        }

        Ok((original_len, shards))
    }

    /// Concatenates the first `data_shards` shards and truncates to
    /// `original_len`.
    pub fn extract(&self, shards: &[Vec<u8>], original_len: usize) -> Result<Vec<u8>> {
        if shards.len() < self.data_shards {
            bail!("insufficient shards, have {} but need at least {} data shards", shards.len(), self.data_shards);
        }

        let mut result = Vec::with_capacity(shards.iter().take(self.data_shards).map(Vec::len).sum());
        for shard in shards.iter().take(self.data_shards) {
            result.extend_from_slice(shard);
        }
        result.truncate(original_len);
        Ok(result)
    }
}
