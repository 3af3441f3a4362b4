//! Dual-layer cipher combining AES-256-GCM and XChaCha20-Poly1305.

use anyhow::{Context, Result};

use crate::config::{AES_KEY_SIZE, CHACHA_KEY_SIZE};
use crate::crypto::aes::AesCipher;
use crate::crypto::chacha::ChachaCipher;
use crate::kdf::SubKeys;

/// Dual-layer cipher that chains AES-256-GCM and XChaCha20-Poly1305.
///
/// Encryption seals the plaintext with AES first, then wraps the AES
/// output with XChaCha20-Poly1305; decryption opens the layers in
/// reverse. Each layer's sub-key is independently HKDF-derived, so a
/// break of one cipher does not expose the other layer's key material.
pub struct Cipher {
    aes: AesCipher,
    chacha: ChachaCipher,
}

impl Cipher {
    /// Builds the dual-layer cipher from the `aes` and `xchacha` sub-keys.
    pub fn new(keys: &SubKeys) -> Result<Self> {
        let aes_key: [u8; AES_KEY_SIZE] =
            keys.aes.expose_secret().as_slice().try_into().context("invalid AES sub-key length")?;
        let chacha_key: [u8; CHACHA_KEY_SIZE] =
            keys.xchacha.expose_secret().as_slice().try_into().context("invalid XChaCha sub-key length")?;

        Ok(Self { aes: AesCipher::new(&aes_key), chacha: ChachaCipher::new(&chacha_key) })
    }

    /// Encrypts plaintext using AES-256-GCM.
    pub fn encrypt_aes(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.aes.encrypt(plaintext)
    }

    /// Decrypts ciphertext using AES-256-GCM.
    pub fn decrypt_aes(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.aes.decrypt(ciphertext)
    }

    /// Encrypts plaintext using XChaCha20-Poly1305.
    pub fn encrypt_chacha(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.chacha.encrypt(plaintext)
    }

    /// Decrypts ciphertext using XChaCha20-Poly1305.
    pub fn decrypt_chacha(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.chacha.decrypt(ciphertext)
    }

    /// Seals `plaintext` through both layers: AES-256-GCM first, then
    /// XChaCha20-Poly1305 over the AES output.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let inner = self.encrypt_aes(plaintext)?;
        self.encrypt_chacha(&inner)
    }

    /// Opens a value produced by [`Cipher::seal`]: XChaCha20-Poly1305 first,
    /// then AES-256-GCM over the recovered inner ciphertext.
    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        let inner = self.decrypt_chacha(sealed)?;
        self.decrypt_aes(&inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::{derive_master_key, split_master_key};

    fn test_keys() -> SubKeys {
        let master = derive_master_key(b"hunter2", &[3u8; crate::config::SALT_LEN]).unwrap();
        split_master_key(&master).unwrap()
    }

    #[test]
    fn cipher_creation() {
        assert!(Cipher::new(&test_keys()).is_ok());
    }

    #[test]
    fn aes_roundtrip() {
        let cipher = Cipher::new(&test_keys()).unwrap();
        let plaintext = b"Hello, World!";
        let ciphertext = cipher.encrypt_aes(plaintext).unwrap();
        assert_eq!(cipher.decrypt_aes(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn chacha_roundtrip() {
        let cipher = Cipher::new(&test_keys()).unwrap();
        let plaintext = b"Hello, World!";
        let ciphertext = cipher.encrypt_chacha(plaintext).unwrap();
        assert_eq!(cipher.decrypt_chacha(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn seal_open_roundtrip() {
        let cipher = Cipher::new(&test_keys()).unwrap();
        let plaintext = b"the quick brown fox jumps over the lazy dog";
        let sealed = cipher.seal(plaintext).unwrap();
        assert_eq!(cipher.open(&sealed).unwrap(), plaintext);
    }

    #[test]
    fn open_rejects_tampered_outer_layer() {
        let cipher = Cipher::new(&test_keys()).unwrap();
        let mut sealed = cipher.seal(b"top secret").unwrap();
        if let Some(last) = sealed.last_mut() {
            *last ^= 0xFF;
        }
        assert!(cipher.open(&sealed).is_err());
    }

    #[test]
    fn wrong_keys_fail_to_open() {
        let cipher_a = Cipher::new(&test_keys()).unwrap();
        let master_b = derive_master_key(b"different password", &[4u8; crate::config::SALT_LEN]).unwrap();
        let cipher_b = Cipher::new(&split_master_key(&master_b).unwrap()).unwrap();

        let sealed = cipher_a.seal(b"top secret").unwrap();
        assert!(cipher_b.open(&sealed).is_err());
    }
}
