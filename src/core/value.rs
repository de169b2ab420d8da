//! Runtime values for record fields.

use crate::core::array::FixedArray;
use crate::core::enums::{EnumValue, FlagSet};
use crate::core::primitive::FieldType;
use crate::core::record::Record;
use crate::error::{CodecError, Result};
use crate::utils::colon_hex::ColonHex;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A field value. Which variant is valid for a field is decided by its [`FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    Bool(bool),
    Enum(EnumValue),
    Flags(FlagSet),
    Array(FixedArray),
    Record(Record),
}

impl Value {
    /// Build an integer-backed value of type `ty` from an unbounded integer.
    ///
    /// # Errors
    /// `Range` if `raw` does not fit the type's width, `TypeMismatch` if `ty` is not
    /// integer-backed.
    pub fn from_int(ty: &FieldType, raw: u64) -> Result<Self> {
        let what = ty.type_name();
        match ty {
            FieldType::UInt8 | FieldType::UInt16 | FieldType::UInt32 => {
                let width = ty
                    .int_width()
                    .ok_or_else(|| CodecError::type_mismatch("<int>", what.clone()))?;
                let raw = width.check(&what, raw)?;
                Ok(match ty {
                    FieldType::UInt8 => Value::UInt8(raw as u8),
                    FieldType::UInt16 => Value::UInt16(raw as u16),
                    _ => Value::UInt32(raw),
                })
            }
            FieldType::Bool => match raw {
                0 => Ok(Value::Bool(false)),
                1 => Ok(Value::Bool(true)),
                _ => Err(CodecError::range(what, raw, 0u8, 1u8)),
            },
            FieldType::Enum(def) => {
                let raw = def.width.check(def.name, raw)?;
                Ok(Value::Enum(EnumValue::new(def, raw)?))
            }
            FieldType::Bitmask(def) => {
                let raw = def.width.check(def.name, raw)?;
                Ok(Value::Flags(FlagSet::new(def, raw)?))
            }
            FieldType::FixedArray(..) | FieldType::Composite(_) => {
                Err(CodecError::type_mismatch("<int>", what))
            }
        }
    }

    /// The all-zero value of `ty`; what a zero-filled buffer decodes to
    pub fn zero(ty: &FieldType) -> Self {
        match ty {
            FieldType::UInt8 => Value::UInt8(0),
            FieldType::UInt16 => Value::UInt16(0),
            FieldType::UInt32 => Value::UInt32(0),
            FieldType::Bool => Value::Bool(false),
            FieldType::Enum(def) => Value::Enum(EnumValue::from_decoded(def, 0)),
            FieldType::Bitmask(def) => Value::Flags(FlagSet::empty(def)),
            FieldType::FixedArray(element, len) => Value::Array(FixedArray::from_decoded(
                **element,
                (0..*len).map(|_| Value::zero(element)).collect(),
            )),
            FieldType::Composite(record) => Value::Record(Record::zeroed(record)),
        }
    }

    /// True if this value has the shape `ty` declares
    pub fn conforms_to(&self, ty: &FieldType) -> bool {
        match (self, ty) {
            (Value::UInt8(_), FieldType::UInt8)
            | (Value::UInt16(_), FieldType::UInt16)
            | (Value::UInt32(_), FieldType::UInt32)
            | (Value::Bool(_), FieldType::Bool) => true,
            (Value::Enum(value), FieldType::Enum(def)) => {
                std::ptr::eq(value.def(), *def) && value.raw() <= def.width.max()
            }
            (Value::Flags(set), FieldType::Bitmask(def)) => {
                std::ptr::eq(set.def(), *def) && set.bits() <= def.width.max()
            }
            (Value::Array(array), FieldType::FixedArray(element, len)) => {
                array.len() == *len
                    && array.element() == **element
                    && array.items().iter().all(|item| item.conforms_to(element))
            }
            (Value::Record(record), FieldType::Composite(ty)) => {
                std::ptr::eq(record.record_type(), *ty)
            }
            _ => false,
        }
    }

    /// Integer view of the scalar variants
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt8(v) => Some(u64::from(*v)),
            Value::UInt16(v) => Some(u64::from(*v)),
            Value::UInt32(v) => Some(u64::from(*v)),
            Value::Bool(v) => Some(u64::from(*v)),
            Value::Enum(v) => Some(u64::from(v.raw())),
            Value::Flags(v) => Some(u64::from(v.bits())),
            Value::Array(_) | Value::Record(_) => None,
        }
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::UInt8(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::UInt16(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt32(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Value::Enum(value)
    }
}

impl From<FlagSet> for Value {
    fn from(value: FlagSet) -> Self {
        Value::Flags(value)
    }
}

impl From<FixedArray> for Value {
    fn from(value: FixedArray) -> Self {
        Value::Array(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::UInt8(v) => serializer.serialize_u8(*v),
            Value::UInt16(v) => serializer.serialize_u16(*v),
            Value::UInt32(v) => serializer.serialize_u32(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Enum(v) => serializer.collect_str(v),
            Value::Flags(v) => serializer.collect_str(v),
            Value::Array(array) => match array.to_bytes() {
                Some(bytes) => serializer.collect_str(&ColonHex(&bytes)),
                None => {
                    let mut seq = serializer.serialize_seq(Some(array.len()))?;
                    for item in array.items() {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
            },
            Value::Record(record) => record.serialize(serializer),
        }
    }
}
