//! # Field Types
//!
//! The closed set of field types a record may declare, and the little-endian
//! integer primitives they are built from.
//!
//! Every field type has a constant encoded width. Nothing in this model carries a
//! length prefix, so the width of a composite record is the sum of its fields.

use crate::core::enums::{EnumDef, FlagsDef};
use crate::core::record::RecordType;
use crate::error::{CodecError, Result};
use bytes::{Buf, BufMut};
use std::fmt;

/// Width of an integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    U8,
    U16,
    U32,
}

impl IntWidth {
    /// Number of bytes occupied on the wire
    pub const fn bytes(self) -> usize {
        match self {
            IntWidth::U8 => 1,
            IntWidth::U16 => 2,
            IntWidth::U32 => 4,
        }
    }

    /// Largest value representable at this width
    pub const fn max(self) -> u32 {
        match self {
            IntWidth::U8 => u8::MAX as u32,
            IntWidth::U16 => u16::MAX as u32,
            IntWidth::U32 => u32::MAX,
        }
    }

    /// Reject `raw` if it does not fit this width
    pub fn check(self, what: &str, raw: u64) -> Result<u32> {
        if raw > u64::from(self.max()) {
            return Err(CodecError::range(what, raw, 0u32, self.max()));
        }
        Ok(raw as u32)
    }

    /// Write `raw` little-endian. The caller has range checked it.
    pub(crate) fn put<B: BufMut>(self, raw: u32, buf: &mut B) {
        match self {
            IntWidth::U8 => buf.put_u8(raw as u8),
            IntWidth::U16 => buf.put_u16_le(raw as u16),
            IntWidth::U32 => buf.put_u32_le(raw),
        }
    }

    /// Read a little-endian integer, failing on short input
    pub(crate) fn get(self, buf: &mut &[u8]) -> Result<u32> {
        ensure_remaining(buf, self.bytes())?;
        Ok(match self {
            IntWidth::U8 => u32::from(buf.get_u8()),
            IntWidth::U16 => u32::from(buf.get_u16_le()),
            IntWidth::U32 => buf.get_u32_le(),
        })
    }
}

/// Fail with `TruncatedInput` unless `needed` bytes remain
pub(crate) fn ensure_remaining(buf: &&[u8], needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(CodecError::TruncatedInput {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

/// Declared type of a record field.
///
/// Enumerations and record references point at `static` definitions and compare
/// by identity, so two structurally identical declarations stay distinct types.
#[derive(Clone, Copy)]
pub enum FieldType {
    UInt8,
    UInt16,
    UInt32,
    /// One byte, 0 or 1
    Bool,
    /// Bit-flag set; unknown bits are preserved
    Bitmask(&'static FlagsDef),
    /// Single-valued enumeration
    Enum(&'static EnumDef),
    /// Exactly `len` consecutive elements, no length prefix
    FixedArray(&'static FieldType, usize),
    /// Nested record, encoded inline
    Composite(&'static RecordType),
}

impl FieldType {
    /// Number of bytes a value of this type occupies on the wire
    pub fn encoded_width(&self) -> usize {
        match self {
            FieldType::UInt8 | FieldType::Bool => 1,
            FieldType::UInt16 => 2,
            FieldType::UInt32 => 4,
            FieldType::Bitmask(def) => def.width.bytes(),
            FieldType::Enum(def) => def.width.bytes(),
            FieldType::FixedArray(element, len) => element.encoded_width() * len,
            FieldType::Composite(record) => record.encoded_width(),
        }
    }

    /// Integer width for the plain unsigned types
    pub fn int_width(&self) -> Option<IntWidth> {
        match self {
            FieldType::UInt8 => Some(IntWidth::U8),
            FieldType::UInt16 => Some(IntWidth::U16),
            FieldType::UInt32 => Some(IntWidth::U32),
            FieldType::Bitmask(def) => Some(def.width),
            FieldType::Enum(def) => Some(def.width),
            _ => None,
        }
    }

    /// Human-readable type name used in error messages and debug output
    pub fn type_name(&self) -> String {
        match self {
            FieldType::UInt8 => "uint8_t".to_string(),
            FieldType::UInt16 => "uint16_t".to_string(),
            FieldType::UInt32 => "uint32_t".to_string(),
            FieldType::Bool => "Bool".to_string(),
            FieldType::Bitmask(def) => def.name.to_string(),
            FieldType::Enum(def) => def.name.to_string(),
            FieldType::FixedArray(element, len) => {
                format!("FixedArray<{}, {len}>", element.type_name())
            }
            FieldType::Composite(record) => record.name().to_string(),
        }
    }
}

impl PartialEq for FieldType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldType::UInt8, FieldType::UInt8)
            | (FieldType::UInt16, FieldType::UInt16)
            | (FieldType::UInt32, FieldType::UInt32)
            | (FieldType::Bool, FieldType::Bool) => true,
            (FieldType::Bitmask(a), FieldType::Bitmask(b)) => std::ptr::eq(*a, *b),
            (FieldType::Enum(a), FieldType::Enum(b)) => std::ptr::eq(*a, *b),
            (FieldType::FixedArray(ea, la), FieldType::FixedArray(eb, lb)) => la == lb && ea == eb,
            (FieldType::Composite(a), FieldType::Composite(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for FieldType {}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::named::{EMBER_APS_OPTION, EMBER_JOIN_METHOD, NV3_KEY_ID};

    #[test]
    fn test_primitive_widths() {
        assert_eq!(FieldType::UInt8.encoded_width(), 1);
        assert_eq!(FieldType::UInt16.encoded_width(), 2);
        assert_eq!(FieldType::UInt32.encoded_width(), 4);
        assert_eq!(FieldType::Bool.encoded_width(), 1);
        assert_eq!(FieldType::Enum(&EMBER_JOIN_METHOD).encoded_width(), 1);
        assert_eq!(FieldType::Enum(&NV3_KEY_ID).encoded_width(), 4);
        assert_eq!(FieldType::Bitmask(&EMBER_APS_OPTION).encoded_width(), 2);
        assert_eq!(FieldType::FixedArray(&FieldType::UInt16, 3).encoded_width(), 6);
    }

    #[test]
    fn test_width_check_rejects_overflow() {
        assert_eq!(IntWidth::U8.check("uint8_t", 255).ok(), Some(255));
        assert!(matches!(
            IntWidth::U8.check("uint8_t", 256),
            Err(CodecError::Range { value: 256, max: 255, .. })
        ));
        assert!(IntWidth::U16.check("uint16_t", 0x1_0000).is_err());
        assert!(IntWidth::U32.check("uint32_t", u64::from(u32::MAX)).is_ok());
        assert!(IntWidth::U32.check("uint32_t", u64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_range_error_reports_full_value() {
        assert!(matches!(
            IntWidth::U32.check("uint32_t", u64::MAX),
            Err(CodecError::Range { value, min: 0, max: 0xFFFF_FFFF, .. }) if value == i128::from(u64::MAX)
        ));
    }

    #[test]
    fn test_little_endian_layout() {
        let mut out = Vec::new();
        IntWidth::U16.put(0x1234, &mut out);
        IntWidth::U32.put(0xAABB_CCDD, &mut out);
        assert_eq!(out, vec![0x34, 0x12, 0xDD, 0xCC, 0xBB, 0xAA]);

        let mut cursor: &[u8] = &out;
        assert_eq!(IntWidth::U16.get(&mut cursor).ok(), Some(0x1234));
        assert_eq!(IntWidth::U32.get(&mut cursor).ok(), Some(0xAABB_CCDD));
    }

    #[test]
    fn test_short_read_is_truncated_input() {
        let mut cursor: &[u8] = &[0x01, 0x02, 0x03];
        assert!(matches!(
            IntWidth::U32.get(&mut cursor),
            Err(CodecError::TruncatedInput { needed: 4, remaining: 3 })
        ));
    }

    #[test]
    fn test_field_type_identity() {
        assert_eq!(FieldType::Enum(&EMBER_JOIN_METHOD), FieldType::Enum(&EMBER_JOIN_METHOD));
        assert_ne!(FieldType::Enum(&EMBER_JOIN_METHOD), FieldType::UInt8);
        assert_eq!(
            FieldType::FixedArray(&FieldType::UInt8, 8),
            FieldType::FixedArray(&FieldType::UInt8, 8)
        );
        assert_ne!(
            FieldType::FixedArray(&FieldType::UInt8, 8),
            FieldType::FixedArray(&FieldType::UInt8, 16)
        );
    }
}
