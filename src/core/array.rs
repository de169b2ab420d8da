//! # Fixed-Length Arrays
//!
//! `FixedArray(T, N)` holds exactly `N` elements of one field type and encodes as
//! their concatenation, with no separator and no length field. The element count
//! is checked when the value is built; nothing is ever padded or truncated.

use crate::core::primitive::FieldType;
use crate::core::value::Value;
use crate::error::{CodecError, Result};
use crate::utils::colon_hex::ColonHex;
use std::fmt;

/// An array value with a fixed element count
#[derive(Clone, PartialEq)]
pub struct FixedArray {
    element: FieldType,
    items: Vec<Value>,
}

impl FixedArray {
    /// Build an array of `length` elements of `element` type.
    ///
    /// # Errors
    /// `LengthMismatch` if `items.len() != length`, `TypeMismatch` if an item does
    /// not conform to `element`.
    pub fn new(element: FieldType, length: usize, items: Vec<Value>) -> Result<Self> {
        if items.len() != length {
            return Err(CodecError::LengthMismatch {
                expected: length,
                actual: items.len(),
            });
        }
        for (index, item) in items.iter().enumerate() {
            if !item.conforms_to(&element) {
                return Err(CodecError::type_mismatch(
                    format!("[{index}]"),
                    element.type_name(),
                ));
            }
        }
        Ok(Self { element, items })
    }

    /// Build a `uint8_t` array from raw bytes
    pub fn from_bytes(bytes: &[u8], length: usize) -> Result<Self> {
        Self::new(
            FieldType::UInt8,
            length,
            bytes.iter().copied().map(Value::UInt8).collect(),
        )
    }

    /// Assemble from already-decoded items; the decoder guarantees the shape
    pub(crate) fn from_decoded(element: FieldType, items: Vec<Value>) -> Self {
        Self { element, items }
    }

    /// Raw bytes, if this is a `uint8_t` array
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        self.items
            .iter()
            .map(|item| match item {
                Value::UInt8(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn element(&self) -> FieldType {
        self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }
}

impl fmt::Debug for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bytes() {
            Some(bytes) => write!(f, "[{}]", ColonHex(&bytes)),
            None => f.debug_list().entries(&self.items).finish(),
        }
    }
}
