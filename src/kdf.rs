//! Key derivation: Argon2id master key derivation and HKDF-SHA256 sub-key
//! splitting.

use anyhow::{Context, Result, anyhow};
use argon2::{Algorithm, Argon2, Params, Version};
use hkdf::Hkdf;
use rand::RngExt;
use sha2::Sha256;

use crate::config::{ARGON_MEMORY, ARGON_PARALLELISM, ARGON_TIME, MASTER_KEY_LEN, SALT_LEN, SUB_KEY_LEN};
use crate::error::SweetByteError;
use crate::secret::SecretBytes;

/// The three sub-keys split out of the master key, each zeroized on drop.
pub struct SubKeys {
    pub aes: SecretBytes,
    pub xchacha: SecretBytes,
    pub hmac: SecretBytes,
}

/// Derives a 64-byte master key from a password and salt using Argon2id.
///
/// Parameters are fixed by the format (time cost 8, memory cost 128 MiB,
/// parallelism 8) and are not configurable at the call site: decryption
/// must use the same constants the file was encrypted with.
pub fn derive_master_key(password: &[u8], salt: &[u8; SALT_LEN]) -> Result<SecretBytes> {
    tracing::debug!(memory_kib = ARGON_MEMORY, time = ARGON_TIME, parallelism = ARGON_PARALLELISM, "deriving master key");

    let params = Params::new(ARGON_MEMORY, ARGON_TIME, ARGON_PARALLELISM, Some(MASTER_KEY_LEN))
        .map_err(|e| anyhow!("invalid argon2 parameters: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = vec![0u8; MASTER_KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|_| anyhow::Error::new(SweetByteError::Kdf))
        .context("argon2id key derivation failed")?;

    Ok(SecretBytes::new(key))
}

/// Splits a 64-byte master key into the `aes`, `xchacha`, and `hmac`
/// sub-keys via labeled HKDF-SHA256 expansion (empty salt, master key as
/// input keying material).
pub fn split_master_key(master: &SecretBytes) -> Result<SubKeys> {
    let hk = Hkdf::<Sha256>::new(None, master.expose_secret());

    let expand = |label: &[u8]| -> Result<SecretBytes> {
        let mut okm = vec![0u8; SUB_KEY_LEN];
        hk.expand(label, &mut okm).map_err(|e| anyhow!("hkdf expand failed for label {label:?}: {e}"))?;
        Ok(SecretBytes::new(okm))
    };

    Ok(SubKeys {
        aes: expand(b"aes")?,
        xchacha: expand(b"xchacha")?,
        hmac: expand(b"hmac")?,
    })
}

/// Generates a cryptographically secure random salt for key derivation.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_master_key(b"hunter2", &salt).unwrap();
        let k2 = derive_master_key(b"hunter2", &salt).unwrap();
        assert_eq!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn different_salts_differ() {
        let k1 = derive_master_key(b"hunter2", &[1u8; SALT_LEN]).unwrap();
        let k2 = derive_master_key(b"hunter2", &[2u8; SALT_LEN]).unwrap();
        assert_ne!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn sub_keys_are_distinct_and_stable() {
        let master = derive_master_key(b"hunter2", &[9u8; SALT_LEN]).unwrap();
        let subs1 = split_master_key(&master).unwrap();
        let subs2 = split_master_key(&master).unwrap();

        assert_eq!(subs1.aes.expose_secret(), subs2.aes.expose_secret());
        assert_ne!(subs1.aes.expose_secret(), subs1.xchacha.expose_secret());
        assert_ne!(subs1.xchacha.expose_secret(), subs1.hmac.expose_secret());
        assert_eq!(subs1.aes.expose_secret().len(), SUB_KEY_LEN);
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
