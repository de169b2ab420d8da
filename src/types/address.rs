//! # Addresses and Key Material
//!
//! Fixed-size byte identifiers with a colon-separated hex text form.
//!
//! - [`Eui64`]: 8-byte hardware address, used as the device lookup key
//! - [`ExtendedPanId`]: 8-byte network identifier
//! - [`KeyData`]: 16-byte key material
//!
//! The text form lists bytes in array order, which is also wire order:
//! `"00:11:22:33:44:55:66:77"` is `[0x00, 0x11, ..., 0x77]`.
//!
//! ## Usage
//! ```rust
//! use ezsp_codec::types::address::{parse_epan, Eui64};
//!
//! let eui: Eui64 = "00:11:22:33:44:55:66:77".parse().unwrap();
//! assert_eq!(eui.to_string(), "00:11:22:33:44:55:66:77");
//!
//! let epan = parse_epan("dd:dd:dd:dd:dd:dd:dd:dd").unwrap();
//! assert_eq!(epan.as_bytes(), &[0xdd; 8]);
//! ```

use crate::core::array::FixedArray;
use crate::core::value::Value;
use crate::error::{constants, CodecError, Result};
use crate::utils::colon_hex::{self, ColonHex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! hex_identifier {
    ($(#[$meta:meta])* $name:ident, $len:literal, $message:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Build from a slice, which must hold exactly `LEN` bytes
            pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                let array: [u8; $len] =
                    bytes.try_into().map_err(|_| CodecError::LengthMismatch {
                        expected: $len,
                        actual: bytes.len(),
                    })?;
                Ok(Self(array))
            }

            /// Array value for a record field
            pub fn to_value(&self) -> Value {
                Value::Array(FixedArray::from_decoded(
                    crate::core::primitive::FieldType::UInt8,
                    self.0.iter().copied().map(Value::UInt8).collect(),
                ))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for Value {
            fn from(id: $name) -> Self {
                id.to_value()
            }
        }

        impl TryFrom<&Value> for $name {
            type Error = CodecError;

            fn try_from(value: &Value) -> Result<Self> {
                match value {
                    Value::Array(array) => {
                        let bytes = array.to_bytes().ok_or_else(|| {
                            CodecError::type_mismatch(stringify!($name), "uint8_t array")
                        })?;
                        Self::from_slice(&bytes)
                    }
                    _ => Err(CodecError::type_mismatch(stringify!($name), "uint8_t array")),
                }
            }
        }

        impl FromStr for $name {
            type Err = CodecError;

            fn from_str(s: &str) -> Result<Self> {
                colon_hex::parse::<$len>(s)
                    .map(Self)
                    .ok_or_else(|| CodecError::Format(format!("{}: got {s:?}", $message)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", ColonHex(&self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_identifier!(
    /// IEEE 802.15.4 64-bit hardware address
    Eui64,
    8,
    constants::ERR_EUI64_FORMAT
);

hex_identifier!(
    /// 64-bit extended PAN identifier
    ExtendedPanId,
    8,
    constants::ERR_EPAN_FORMAT
);

hex_identifier!(
    /// 128-bit key material
    KeyData,
    16,
    constants::ERR_KEY_FORMAT
);

impl Eui64 {
    /// All-ones address, used by the firmware for "no address"
    pub const UNKNOWN: Eui64 = Eui64([0xFF; 8]);
}

/// Parse a user-supplied extended PAN ID such as `"dd:dd:dd:dd:dd:dd:dd:dd"`
pub fn parse_epan(input: &str) -> Result<ExtendedPanId> {
    input.trim().parse()
}
