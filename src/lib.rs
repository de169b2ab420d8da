//! # ezsp-codec
//!
//! Declarative fixed-layout binary records for the EZSP serial protocol spoken
//! by Zigbee network co-processors.
//!
//! Every structure the firmware exchanges is declared once as an ordered list of
//! typed fields. One generic engine encodes any such record to its exact byte
//! layout and decodes bytes back into a typed record. There are no length
//! prefixes, no padding and no type tags on the wire: integers are little-endian
//! and a record is its fields concatenated in declaration order.
//!
//! ## Modules
//! - [`core`]: field types, enumerations, fixed arrays, record schemas and the codec engine
//! - [`types`]: the EZSP enumerations, the record catalog and address/channel helpers
//! - [`config`]: decoder strictness and logging settings
//! - [`utils`]: logging setup
//! - [`error`]: the crate's error type
//!
//! ## Example
//! ```rust
//! use ezsp_codec::types::catalog::EMBER_MULTICAST_TABLE_ENTRY;
//! use ezsp_codec::{decode, encode, Record};
//!
//! let entry = Record::builder(&EMBER_MULTICAST_TABLE_ENTRY)
//!     .set("multicast_id", 0x1234u16)
//!     .set("endpoint", 1u8)
//!     .set("network_index", 0u8)
//!     .build()?;
//!
//! let bytes = encode(&entry)?;
//! assert_eq!(bytes, [0x34, 0x12, 0x01, 0x00]);
//!
//! let (decoded, consumed) = decode(&bytes, 0, &EMBER_MULTICAST_TABLE_ENTRY)?;
//! assert_eq!(consumed, 4);
//! assert_eq!(decoded, entry);
//! # Ok::<(), ezsp_codec::CodecError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::core::codec::{
    decode, decode_exact, decode_value, decode_with, encode, encode_into, encode_value,
    DecodeOptions, RecordCodec,
};
pub use crate::core::enums::{DecodePolicy, EnumDef, EnumValue, FlagSet, FlagsDef};
pub use crate::core::primitive::{FieldType, IntWidth};
pub use crate::core::record::{FieldSpec, Record, RecordBuilder, RecordType};
pub use crate::core::value::Value;
pub use crate::error::{CodecError, Result};
