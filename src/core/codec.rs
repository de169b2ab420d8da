//! # Record Codec
//!
//! Generic encode/decode over any [`RecordType`], driven only by its field schema.
//!
//! Encoding walks the fields in declaration order and concatenates each field's
//! encoding. Decoding walks the same order, advancing a cursor through the input.
//! Nested records recurse through the same two functions; from the parent's
//! point of view a nested record is an opaque block of bytes.
//!
//! The engine is pure: no I/O, no shared state, no retries. A call either
//! completes or fails deterministically for its input.
//!
//! ## Wire Rules
//! - Integers are little-endian
//! - `Bool` is one byte, 0 or 1
//! - Fixed arrays have no length prefix
//! - Records have no padding and no type tag

use crate::core::array::FixedArray;
use crate::core::enums::{DecodePolicy, EnumValue, FlagSet};
use crate::core::primitive::{ensure_remaining, FieldType, IntWidth};
use crate::core::record::{Record, RecordType};
use crate::core::value::Value;
use crate::error::{constants, CodecError, Result};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace, warn};

/// Decoder behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Reject unknown values of every value enum, regardless of its own policy
    pub strict_enums: bool,
    /// Make [`decode_exact`] fail when the buffer is longer than one record
    pub reject_trailing_bytes: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            strict_enums: true,
            reject_trailing_bytes: true,
        }
    }
}

/// Encode a record into a new buffer of exactly `encoded_width()` bytes
pub fn encode(record: &Record) -> Result<Vec<u8>> {
    let ty = record.record_type();
    let mut out = Vec::with_capacity(ty.encoded_width());
    encode_record(record, &mut out)?;
    trace!(record = ty.name(), bytes = out.len(), "Encoded record");
    Ok(out)
}

/// Encode a record onto the end of `buf`
pub fn encode_into<B: BufMut>(record: &Record, buf: &mut B) -> Result<()> {
    encode_record(record, buf)?;
    trace!(
        record = record.record_type().name(),
        bytes = record.record_type().encoded_width(),
        "Encoded record"
    );
    Ok(())
}

fn encode_record<B: BufMut>(record: &Record, buf: &mut B) -> Result<()> {
    for (spec, value) in record.iter() {
        encode_field(spec.name, &spec.ty, value, buf)?;
    }
    Ok(())
}

/// Encode a single value of type `ty`
pub fn encode_value<B: BufMut>(ty: &FieldType, value: &Value, buf: &mut B) -> Result<()> {
    encode_field("<value>", ty, value, buf)
}

fn encode_field<B: BufMut>(field: &str, ty: &FieldType, value: &Value, buf: &mut B) -> Result<()> {
    match (ty, value) {
        (FieldType::UInt8, Value::UInt8(v)) => buf.put_u8(*v),
        (FieldType::UInt16, Value::UInt16(v)) => buf.put_u16_le(*v),
        (FieldType::UInt32, Value::UInt32(v)) => buf.put_u32_le(*v),
        (FieldType::Bool, Value::Bool(v)) => buf.put_u8(u8::from(*v)),
        (FieldType::Enum(def), Value::Enum(v)) if std::ptr::eq(v.def(), *def) => {
            let raw = def.width.check(def.name, u64::from(v.raw()))?;
            def.width.put(raw, buf);
        }
        (FieldType::Bitmask(def), Value::Flags(v)) if std::ptr::eq(v.def(), *def) => {
            let raw = def.width.check(def.name, u64::from(v.bits()))?;
            def.width.put(raw, buf);
        }
        (FieldType::FixedArray(element, len), Value::Array(array)) => {
            if array.len() != *len {
                return Err(CodecError::LengthMismatch {
                    expected: *len,
                    actual: array.len(),
                });
            }
            for item in array.items() {
                encode_field(field, element, item, buf)?;
            }
        }
        (FieldType::Composite(ty), Value::Record(record))
            if std::ptr::eq(record.record_type(), *ty) =>
        {
            encode_record(record, buf)?;
        }
        _ => return Err(CodecError::type_mismatch(field, ty.type_name())),
    }
    Ok(())
}

/// Decode one record of type `ty` starting at `offset`, with default options.
///
/// Returns the record and the number of bytes consumed, which always equals
/// `ty.encoded_width()`. Bytes after the record are left alone.
pub fn decode(bytes: &[u8], offset: usize, ty: &'static RecordType) -> Result<(Record, usize)> {
    decode_with(bytes, offset, ty, DecodeOptions::default())
}

/// Decode one record of type `ty` starting at `offset`
pub fn decode_with(
    bytes: &[u8],
    offset: usize,
    ty: &'static RecordType,
    options: DecodeOptions,
) -> Result<(Record, usize)> {
    let mut cursor = bytes.get(offset..).ok_or(CodecError::TruncatedInput {
        needed: offset.saturating_add(ty.encoded_width()),
        remaining: bytes.len(),
    })?;
    let start = cursor.remaining();
    match decode_record(&mut cursor, ty, options) {
        Ok(record) => {
            let consumed = start - cursor.remaining();
            trace!(record = ty.name(), bytes = consumed, "Decoded record");
            Ok((record, consumed))
        }
        Err(e) => {
            debug!(record = ty.name(), offset, error = %e, "Failed to decode record");
            Err(e)
        }
    }
}

/// Decode a buffer holding exactly one record.
///
/// With `reject_trailing_bytes` set, extra bytes after the record fail with
/// `TrailingBytes`; otherwise they are ignored.
pub fn decode_exact(bytes: &[u8], ty: &'static RecordType, options: DecodeOptions) -> Result<Record> {
    let (record, consumed) = decode_with(bytes, 0, ty, options)?;
    let trailing = bytes.len() - consumed;
    if options.reject_trailing_bytes && trailing > 0 {
        return Err(CodecError::TrailingBytes(trailing));
    }
    Ok(record)
}

/// Decode a single value of type `ty` from the front of `bytes`
pub fn decode_value(ty: &FieldType, bytes: &[u8], options: DecodeOptions) -> Result<(Value, usize)> {
    let mut cursor = bytes;
    let value = decode_field(&mut cursor, ty, options)?;
    Ok((value, bytes.len() - cursor.remaining()))
}

fn decode_record(
    cursor: &mut &[u8],
    ty: &'static RecordType,
    options: DecodeOptions,
) -> Result<Record> {
    let mut values = Vec::with_capacity(ty.fields().len());
    for spec in ty.fields() {
        values.push(decode_field(cursor, &spec.ty, options)?);
    }
    Ok(Record::from_decoded(ty, values))
}

fn decode_field(cursor: &mut &[u8], ty: &FieldType, options: DecodeOptions) -> Result<Value> {
    Ok(match ty {
        FieldType::UInt8 => Value::UInt8(IntWidth::U8.get(cursor)? as u8),
        FieldType::UInt16 => Value::UInt16(IntWidth::U16.get(cursor)? as u16),
        FieldType::UInt32 => Value::UInt32(IntWidth::U32.get(cursor)?),
        FieldType::Bool => match IntWidth::U8.get(cursor)? {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            other => {
                return Err(CodecError::UnknownVariant {
                    name: "Bool",
                    value: other,
                })
            }
        },
        FieldType::Enum(def) => {
            let raw = def.width.get(cursor)?;
            if !def.is_known(raw) {
                if options.strict_enums || def.policy == DecodePolicy::Strict {
                    return Err(CodecError::UnknownVariant {
                        name: def.name,
                        value: raw,
                    });
                }
                warn!(enum_name = def.name, value = raw, "Passing through unknown enum value");
            }
            Value::Enum(EnumValue::from_decoded(def, raw))
        }
        FieldType::Bitmask(def) => Value::Flags(FlagSet::from_decoded(def, def.width.get(cursor)?)),
        FieldType::FixedArray(element, len) => {
            // Fail up front so a short buffer reports the whole array's width
            ensure_remaining(cursor, ty.encoded_width())?;
            let mut items = Vec::with_capacity(*len);
            for _ in 0..*len {
                items.push(decode_field(cursor, element, options)?);
            }
            Value::Array(FixedArray::from_decoded(**element, items))
        }
        FieldType::Composite(record) => Value::Record(decode_record(cursor, record, options)?),
    })
}

/// Splits a deframed byte stream into consecutive records of one type.
///
/// This does no framing of its own: every record is exactly
/// `encoded_width()` bytes and records follow each other back to back.
#[derive(Debug, Clone, Copy)]
pub struct RecordCodec {
    ty: &'static RecordType,
    options: DecodeOptions,
}

impl RecordCodec {
    pub fn new(ty: &'static RecordType) -> Self {
        Self::with_options(ty, DecodeOptions::default())
    }

    pub fn with_options(ty: &'static RecordType, options: DecodeOptions) -> Self {
        Self { ty, options }
    }

    pub fn record_type(&self) -> &'static RecordType {
        self.ty
    }
}

impl Decoder for RecordCodec {
    type Item = Record;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let width = self.ty.encoded_width();
        if src.len() < width {
            src.reserve(width - src.len());
            return Ok(None);
        }

        let chunk = src.split_to(width);
        let (record, _) = decode_with(&chunk, 0, self.ty, self.options)?;
        Ok(Some(record))
    }
}

impl Encoder<Record> for RecordCodec {
    type Error = CodecError;

    fn encode(&mut self, item: Record, dst: &mut BytesMut) -> Result<()> {
        if !std::ptr::eq(item.record_type(), self.ty) {
            return Err(CodecError::type_mismatch(
                constants::ERR_RECORD_TYPE_MISMATCH,
                self.ty.name(),
            ));
        }
        dst.reserve(self.ty.encoded_width());
        encode_into(&item, dst)
    }
}
