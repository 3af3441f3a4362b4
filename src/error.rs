//! Typed error taxonomy for the SweetByte format.
//!
//! Every fallible module in this crate returns `anyhow::Result`, matching
//! the rest of the codebase, but call sites that need to branch on *which*
//! kind of failure occurred (the CLI's exit-message wording, the test
//! suite's property checks) can recover a [`SweetByteError`] via
//! `anyhow::Error::downcast_ref`. Each variant corresponds to one of the
//! failure kinds in the format's error taxonomy; none of them carry the
//! underlying cause directly (the `anyhow` context chain already has it),
//! they exist only to be matched on.

use std::fmt;

/// One of the distinct failure kinds a SweetByte operation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweetByteError {
    /// Read/write/stat failure from the host filesystem.
    Io,
    /// Truncated header, bad magic, unsupported version, bad padding,
    /// a length prefix pointing past EOF, or a zero-length chunk.
    Format(String),
    /// Header MAC mismatch (including the wrong-password case) or an AEAD
    /// tag failure at either cipher layer.
    Auth,
    /// Reed-Solomon could not reconstruct a chunk: more than `P` of its
    /// shards were missing or corrupt.
    Corruption { chunk: u64 },
    /// Argon2id could not allocate the requested memory.
    Kdf,
    /// AEAD construction failed with correctly-sized key material; this
    /// should be unreachable in practice.
    CryptoInit,
    /// The caller triggered the cancellation token.
    Canceled,
    /// Invalid user-supplied options: empty password, missing input file,
    /// output already exists, zero-length plaintext, and so on.
    Config(String),
}

impl fmt::Display for SweetByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Format(detail) => write!(f, "malformed container: {detail}"),
            Self::Auth => write!(f, "authentication failed (wrong password or corrupted header/chunk)"),
            Self::Corruption { chunk } => write!(f, "chunk {chunk} is unrecoverable: too many corrupt shards"),
            Self::Kdf => write!(f, "key derivation failed (insufficient memory for Argon2id)"),
            Self::CryptoInit => write!(f, "cipher initialization failed"),
            Self::Canceled => write!(f, "operation canceled"),
            Self::Config(detail) => write!(f, "invalid configuration: {detail}"),
        }
    }
}

impl std::error::Error for SweetByteError {}

/// Returns the [`SweetByteError`] kind behind an `anyhow::Error`, if any
/// module in the chain attached one.
pub fn kind_of(err: &anyhow::Error) -> Option<&SweetByteError> {
    err.chain().find_map(|cause| cause.downcast_ref::<SweetByteError>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_roundtrip() {
        let err = anyhow::Error::new(SweetByteError::Auth).context("decrypt failed");
        assert_eq!(kind_of(&err), Some(&SweetByteError::Auth));
    }

    #[test]
    fn no_kind_for_plain_anyhow() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(kind_of(&err), None);
    }
}
