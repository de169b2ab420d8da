//! # Record Schemas
//!
//! A [`RecordType`] is an explicit, ordered list of `(name, type)` pairs declared
//! once as a `static`. Its field order is the wire order and is never rearranged.
//! Record types are nominal: two declarations with identical fields are still
//! different types, and a [`Record`] only ever equals a record of the same type.
//!
//! ## Declaring a record type
//! ```rust
//! use ezsp_codec::core::primitive::FieldType;
//! use ezsp_codec::record_type;
//!
//! record_type! {
//!     /// Two counters
//!     pub static COUNTERS = "Counters" {
//!         sent: FieldType::UInt16,
//!         received: FieldType::UInt16,
//!     }
//! }
//!
//! assert_eq!(COUNTERS.encoded_width(), 4);
//! assert_eq!(COUNTERS.fields()[1].order, 1);
//! ```

use crate::core::primitive::FieldType;
use crate::core::value::Value;
use crate::error::{CodecError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::fmt;

/// One declared field of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Position on the wire, dense from 0
    pub order: usize,
}

/// Assign wire order to a declaration list. Used by [`record_type!`](crate::record_type).
pub const fn fields<const N: usize>(decl: [(&'static str, FieldType); N]) -> [FieldSpec; N] {
    let mut out = [FieldSpec {
        name: "",
        ty: FieldType::UInt8,
        order: 0,
    }; N];
    let mut i = 0;
    while i < N {
        out[i] = FieldSpec {
            name: decl[i].0,
            ty: decl[i].1,
            order: i,
        };
        i += 1;
    }
    out
}

/// Declare a `static` [`RecordType`] with fields in wire order
#[macro_export]
macro_rules! record_type {
    (
        $(#[$meta:meta])*
        $vis:vis static $ident:ident = $name:literal {
            $($field:ident : $ty:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis static $ident: $crate::core::record::RecordType = {
            const COUNT: usize = [$(stringify!($field)),+].len();
            static FIELDS: [$crate::core::record::FieldSpec; COUNT] =
                $crate::core::record::fields([$((stringify!($field), $ty)),+]);
            $crate::core::record::RecordType::new($name, &FIELDS)
        };
    };
}

/// Schema of a fixed-layout record
pub struct RecordType {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl RecordType {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Sum of the field widths; identical for every value of this type
    pub fn encoded_width(&self) -> usize {
        self.fields.iter().map(|spec| spec.ty.encoded_width()).sum()
    }

    /// Check that field orders are dense and match position, and that names are
    /// unique. Nested record types are checked too.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (position, spec) in self.fields.iter().enumerate() {
            if spec.order != position {
                return Err(CodecError::SchemaError(format!(
                    "{}.{} has order {} at position {position}",
                    self.name, spec.name, spec.order
                )));
            }
            if !seen.insert(spec.name) {
                return Err(CodecError::SchemaError(format!(
                    "{} declares field {} twice",
                    self.name, spec.name
                )));
            }
            validate_field_type(&spec.ty)?;
        }
        Ok(())
    }
}

fn validate_field_type(ty: &FieldType) -> Result<()> {
    match ty {
        FieldType::Composite(record) => record.validate(),
        FieldType::FixedArray(element, _) => validate_field_type(element),
        _ => Ok(()),
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordType({}, {} bytes)", self.name, self.encoded_width())
    }
}

/// A value of a [`RecordType`]: exactly one value per declared field, in field order
#[derive(Clone)]
pub struct Record {
    ty: &'static RecordType,
    values: Vec<Value>,
}

impl Record {
    /// Start building a record of type `ty`
    pub fn builder(ty: &'static RecordType) -> RecordBuilder {
        RecordBuilder {
            ty,
            slots: vec![None; ty.fields().len()],
            error: None,
        }
    }

    /// Build from values given in field order
    pub fn from_values(ty: &'static RecordType, values: Vec<Value>) -> Result<Self> {
        let fields = ty.fields();
        if values.len() > fields.len() {
            return Err(CodecError::UnknownField(format!(
                "{} declares {} fields, got {}",
                ty.name(),
                fields.len(),
                values.len()
            )));
        }
        if let Some(missing) = fields.get(values.len()) {
            return Err(CodecError::MissingField(missing.name.to_string()));
        }
        for (spec, value) in fields.iter().zip(&values) {
            check_conforms(spec, value)?;
        }
        Ok(Self { ty, values })
    }

    /// Assemble from decoded values; the decoder guarantees the shape
    pub(crate) fn from_decoded(ty: &'static RecordType, values: Vec<Value>) -> Self {
        Self { ty, values }
    }

    /// Every field set to its zero value
    pub fn zeroed(ty: &'static RecordType) -> Self {
        Self {
            ty,
            values: ty.fields().iter().map(|spec| Value::zero(&spec.ty)).collect(),
        }
    }

    pub fn record_type(&self) -> &'static RecordType {
        self.ty
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Field specs paired with their values, in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &Value)> {
        self.ty.fields().iter().zip(self.values.iter())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty
            .field(name)
            .and_then(|spec| self.values.get(spec.order))
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| CodecError::UnknownField(format!("{}.{name}", self.ty.name())))
    }

    pub fn get_u8(&self, name: &str) -> Result<u8> {
        match self.require(name)? {
            Value::UInt8(v) => Ok(*v),
            _ => Err(CodecError::type_mismatch(name, "uint8_t")),
        }
    }

    pub fn get_u16(&self, name: &str) -> Result<u16> {
        match self.require(name)? {
            Value::UInt16(v) => Ok(*v),
            _ => Err(CodecError::type_mismatch(name, "uint16_t")),
        }
    }

    pub fn get_u32(&self, name: &str) -> Result<u32> {
        match self.require(name)? {
            Value::UInt32(v) => Ok(*v),
            _ => Err(CodecError::type_mismatch(name, "uint32_t")),
        }
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.require(name)? {
            Value::Bool(v) => Ok(*v),
            _ => Err(CodecError::type_mismatch(name, "Bool")),
        }
    }

    pub fn get_record(&self, name: &str) -> Result<&Record> {
        match self.require(name)? {
            Value::Record(record) => Ok(record),
            _ => Err(CodecError::type_mismatch(name, "record")),
        }
    }

    /// Replace one field's value, keeping the record well-typed
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let spec = self
            .ty
            .field(name)
            .ok_or_else(|| CodecError::UnknownField(format!("{}.{name}", self.ty.name())))?;
        let value = value.into();
        check_conforms(spec, &value)?;
        self.values[spec.order] = value;
        Ok(())
    }
}

fn check_conforms(spec: &FieldSpec, value: &Value) -> Result<()> {
    if value.conforms_to(&spec.ty) {
        Ok(())
    } else {
        Err(CodecError::type_mismatch(spec.name, spec.ty.type_name()))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ty, other.ty) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.ty.name());
        for (spec, value) in self.iter() {
            out.field(spec.name, value);
        }
        out.finish()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (spec, value) in self.iter() {
            map.serialize_entry(spec.name, value)?;
        }
        map.end()
    }
}

/// Field-by-field construction of a [`Record`].
///
/// Errors are deferred to [`build`](RecordBuilder::build) so calls can be chained.
pub struct RecordBuilder {
    ty: &'static RecordType,
    slots: Vec<Option<Value>>,
    error: Option<CodecError>,
}

impl RecordBuilder {
    /// Set a field to a typed value
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            let value = value.into();
            if let Err(e) = self.place(name, value) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Set an integer-backed field from an unbounded integer, range checked
    /// against the field's width
    pub fn set_int(mut self, name: &str, raw: u64) -> Self {
        if self.error.is_none() {
            let placed = self
                .spec(name)
                .and_then(|spec| Value::from_int(&spec.ty, raw))
                .and_then(|value| self.place(name, value));
            if let Err(e) = placed {
                self.error = Some(e);
            }
        }
        self
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec> {
        self.ty
            .field(name)
            .ok_or_else(|| CodecError::UnknownField(format!("{}.{name}", self.ty.name())))
    }

    fn place(&mut self, name: &str, value: Value) -> Result<()> {
        let spec = self.spec(name)?;
        check_conforms(spec, &value)?;
        let slot = &mut self.slots[spec.order];
        if slot.is_some() {
            return Err(CodecError::DuplicateField(spec.name.to_string()));
        }
        *slot = Some(value);
        Ok(())
    }

    /// Finish the record. Every declared field must have been set exactly once.
    pub fn build(self) -> Result<Record> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let mut values = Vec::with_capacity(self.slots.len());
        for (spec, slot) in self.ty.fields().iter().zip(self.slots) {
            match slot {
                Some(value) => values.push(value),
                None => return Err(CodecError::MissingField(spec.name.to_string())),
            }
        }
        Ok(Record {
            ty: self.ty,
            values,
        })
    }
}
