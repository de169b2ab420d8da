//! # Error Types
//!
//! Error handling for the record codec.
//!
//! Every failure the codec can produce is local and deterministic: the same
//! input always fails the same way. Nothing in this crate retries or tries to
//! resynchronize a byte stream; that decision belongs to the transport layer.
//!
//! ## Error Categories
//! - **Domain Errors**: values outside an integer width, channel numbers outside 11-26,
//!   enum variant or flag names that a definition does not declare
//! - **Shape Errors**: fixed arrays with the wrong element count, values that do not
//!   match a field's declared type, missing or unknown record fields
//! - **Decode Errors**: buffers that end mid-field, enum values rejected under strict policy
//! - **Format Errors**: malformed colon-separated hex addresses and PAN IDs
//! - **Configuration Errors**: unreadable or invalid configuration files
//!
//! ## Example Usage
//! ```rust
//! use ezsp_codec::error::{CodecError, Result};
//! use ezsp_codec::types::address::Eui64;
//!
//! fn lookup_key(input: &str) -> Result<Eui64> {
//!     input.parse()
//! }
//!
//! assert!(lookup_key("00:11:22:33:44:55:66:77").is_ok());
//! assert!(matches!(lookup_key("00-11"), Err(CodecError::Format(_))));
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Address and identifier parsing
    pub const ERR_EUI64_FORMAT: &str =
        "EUI64 must be 8 colon-separated hex bytes (e.g. 00:11:22:33:44:55:66:77)";
    pub const ERR_EPAN_FORMAT: &str =
        "Extended PAN ID must be 8 colon-separated hex bytes (e.g. dd:dd:dd:dd:dd:dd:dd:dd)";
    pub const ERR_KEY_FORMAT: &str = "Key data must be 16 colon-separated hex bytes";

    /// Channel list parsing
    pub const ERR_CHANNEL_LIST_EMPTY: &str = "Channel list cannot be empty";
    pub const ERR_CHANNEL_NOT_INTEGER: &str = "Channel list must be comma separated integers";

    /// Record construction
    pub const ERR_RECORD_TYPE_MISMATCH: &str = "Record belongs to a different record type";
}

/// CodecError is the primary error type for all encode, decode and parse operations
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{what} value {value} out of range ({min}..={max})")]
    Range {
        what: String,
        value: i128,
        min: i128,
        max: i128,
    },

    #[error("Fixed array length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Unknown {name} variant: {value:#x}")]
    UnknownVariant { name: &'static str, value: u32 },

    #[error("Format error: {0}")]
    Format(String),

    #[error("{name} has no member named {member}")]
    UnknownName { name: &'static str, member: String },

    #[error("Type mismatch for field '{field}': expected {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field set more than once: {0}")]
    DuplicateField(String),

    #[error("{0} trailing bytes after record")]
    TrailingBytes(usize),

    #[error("Invalid schema: {0}")]
    SchemaError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Shorthand for a range violation on an integer domain
    pub(crate) fn range(
        what: impl Into<String>,
        value: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Self {
        CodecError::Range {
            what: what.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Shorthand for a value whose shape does not fit the declared field type
    pub(crate) fn type_mismatch(field: impl Into<String>, expected: impl Into<String>) -> Self {
        CodecError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
