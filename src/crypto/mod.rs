//! Cryptographic modules for SweetByte.

pub mod aes;
pub mod chacha;
pub mod cipher;

pub use cipher::Cipher;
