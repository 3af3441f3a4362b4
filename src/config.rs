//! Format constants and cryptographic parameters.
//!
//! These values are part of the on-disk format specification: changing any
//! of them changes what `decrypt` can read. They are compile-time constants
//! rather than runtime configuration, matching the format-version-bound
//! nature of the container.

/// The application name used in user-facing output and prompts.
pub const APP_NAME: &str = "SweetByte";

/// The default file extension appended to encrypted files.
pub const FILE_EXTENSION: &str = ".swb";

/// Magic bytes identifying a SweetByte container, literally `"SWX4"`.
pub const MAGIC: [u8; 4] = *b"SWX4";

/// The current on-disk format version.
pub const CURRENT_VERSION: u16 = 0x0001;

/// Header flag: compression was applied to every chunk.
pub const FLAG_COMPRESSED: u32 = 1;
/// Header flag: the chunk stream is encrypted.
pub const FLAG_ENCRYPTED: u32 = 2;
/// Header flag: the header carries the second-generation HMAC integrity scheme.
pub const FLAG_INTEGRITY_V2: u32 = 4;
/// Header flag: chunks are protected against partial corruption (Reed-Solomon).
pub const FLAG_ANTI_TAMPER: u32 = 8;

/// Flags that must all be set for a header to be considered valid.
pub const REQUIRED_FLAGS: u32 = FLAG_ENCRYPTED | FLAG_INTEGRITY_V2 | FLAG_ANTI_TAMPER;

/// The exact serialized size of a header, in bytes.
pub const HEADER_SIZE: usize = 82;

/// Length of the per-file Argon2id salt, in bytes.
pub const SALT_LEN: usize = 32;

/// Length of the HMAC-SHA256 header tag, in bytes.
pub const MAC_SIZE: usize = 32;

/// Argon2id time cost (number of passes).
///
/// Canonical per the format spec: the source carried two incompatible
/// parameter sets (t=3/m=64MiB/p=4 and t=8/m=128MiB/p=8); this format
/// adopts the stronger set.
pub const ARGON_TIME: u32 = 8;

/// Argon2id memory cost, in KiB (128 MiB).
pub const ARGON_MEMORY: u32 = 128 * 1024;

/// Argon2id parallelism factor (number of lanes).
pub const ARGON_PARALLELISM: u32 = 8;

/// Length of the derived master key, in bytes.
pub const MASTER_KEY_LEN: usize = 64;

/// Length of each HKDF-derived sub-key, in bytes.
pub const SUB_KEY_LEN: usize = 32;

/// Size of the AES-256-GCM key, in bytes.
pub const AES_KEY_SIZE: usize = 32;
/// Size of the AES-GCM nonce, in bytes.
pub const AES_NONCE_SIZE: usize = 12;

/// Size of the XChaCha20-Poly1305 key, in bytes.
pub const CHACHA_KEY_SIZE: usize = 32;
/// Size of the XChaCha20 extended nonce, in bytes.
pub const CHACHA_NONCE_SIZE: usize = 24;

/// PKCS#7 padding block size, in bytes.
pub const PADDING_BLOCK_SIZE: usize = 16;

/// Number of Reed-Solomon data shards per chunk.
pub const DATA_SHARDS: usize = 10;
/// Number of Reed-Solomon parity shards per chunk.
pub const PARITY_SHARDS: usize = 4;
/// Total shard count (`DATA_SHARDS + PARITY_SHARDS`).
pub const TOTAL_SHARDS: usize = DATA_SHARDS + PARITY_SHARDS;

/// Size of a plaintext chunk read from the input file, in bytes (256 KiB).
///
/// Chosen within the recommended 256 KiB - 1 MiB range: large enough to
/// amortize per-chunk channel/thread overhead, small enough to keep the
/// worker pool's memory budget (`O(N * CHUNK_SIZE * 1.5)`) modest for
/// typical core counts.
pub const CHUNK_SIZE: usize = 256 * 1024;

/// Minimum accepted chunk size override, guarding against a misconfigured
/// `Options` producing degenerate per-chunk overhead.
pub const MIN_CHUNK_SIZE: usize = 64 * 1024;

/// Minimum required password length enforced by the CLI/interactive shell.
///
/// Not part of the on-disk format: the core library accepts any non-empty
/// password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// List of file and directory patterns excluded from interactive discovery.
pub const EXCLUDED_PATTERNS: &[&str] = &[
    "target/**",
    "vendor/**",
    "node_modules/**",
    ".git/**",
    ".github/**",
    ".config/**",
    ".local/**",
    ".cache/**",
    ".ssh/**",
    ".gnupg/**",
    "*.rs",
    "**/*.rs",
];
