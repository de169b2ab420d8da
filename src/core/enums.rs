//! # Enumerations and Flag Sets
//!
//! Named integer domains layered on a primitive width.
//!
//! Single-valued enumerations ([`EnumDef`] / [`EnumValue`]) and bit-flag sets
//! ([`FlagsDef`] / [`FlagSet`]) are kept as separate types so a combination of
//! flags can never be mistaken for a single enum member.
//!
//! ## Decode Policy
//! Firmware sometimes reports reserved enum values. Each [`EnumDef`] declares
//! whether an unknown value is passed through untouched or rejected with
//! `UnknownVariant`. Flag sets never reject unknown bits.

use crate::core::primitive::IntWidth;
use crate::error::{CodecError, Result};
use std::fmt;

/// What a decoder does with a value that names no known variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Keep the raw integer
    #[default]
    PassThrough,
    /// Fail with `UnknownVariant`
    Strict,
}

/// Definition of a single-valued enumeration
#[derive(Debug)]
pub struct EnumDef {
    pub name: &'static str,
    pub width: IntWidth,
    pub variants: &'static [(&'static str, u32)],
    pub policy: DecodePolicy,
}

impl EnumDef {
    pub const fn new(
        name: &'static str,
        width: IntWidth,
        variants: &'static [(&'static str, u32)],
        policy: DecodePolicy,
    ) -> Self {
        Self {
            name,
            width,
            variants,
            policy,
        }
    }

    /// Raw value of the variant called `name`
    pub fn value_of(&self, name: &str) -> Option<u32> {
        self.variants
            .iter()
            .find(|(variant, _)| *variant == name)
            .map(|(_, raw)| *raw)
    }

    /// Variant name for `raw`, if it is a known member
    pub fn name_of(&self, raw: u32) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(_, value)| *value == raw)
            .map(|(variant, _)| *variant)
    }

    pub fn is_known(&self, raw: u32) -> bool {
        self.name_of(raw).is_some()
    }
}

/// A value of an [`EnumDef`]; may hold an unknown raw integer under pass-through policy
#[derive(Clone, Copy)]
pub struct EnumValue {
    def: &'static EnumDef,
    raw: u32,
}

impl EnumValue {
    /// Build from a raw integer. Only the width is checked, unknown members are allowed.
    pub fn new(def: &'static EnumDef, raw: u32) -> Result<Self> {
        def.width.check(def.name, u64::from(raw))?;
        Ok(Self { def, raw })
    }

    /// Wrap a raw integer already read at the definition's width
    pub(crate) fn from_decoded(def: &'static EnumDef, raw: u32) -> Self {
        Self { def, raw }
    }

    /// Build from a variant name
    pub fn named(def: &'static EnumDef, name: &str) -> Result<Self> {
        let raw = def
            .value_of(name)
            .ok_or_else(|| CodecError::UnknownName {
                name: def.name,
                member: name.to_string(),
            })?;
        Ok(Self { def, raw })
    }

    pub fn def(&self) -> &'static EnumDef {
        self.def
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn name(&self) -> Option<&'static str> {
        self.def.name_of(self.raw)
    }

    pub fn is_known(&self) -> bool {
        self.def.is_known(self.raw)
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.raw == other.raw
    }
}

impl Eq for EnumValue {}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}.{name}", self.def.name),
            None => write!(f, "{}.UNKNOWN_{:#04x}", self.def.name, self.raw),
        }
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{self}: {}>", self.raw)
    }
}

/// Definition of a bit-flag set
#[derive(Debug)]
pub struct FlagsDef {
    pub name: &'static str,
    pub width: IntWidth,
    pub flags: &'static [(&'static str, u32)],
}

impl FlagsDef {
    pub const fn new(
        name: &'static str,
        width: IntWidth,
        flags: &'static [(&'static str, u32)],
    ) -> Self {
        Self { name, width, flags }
    }

    /// Bits of the flag called `name`
    pub fn bits_of(&self, name: &str) -> Option<u32> {
        self.flags
            .iter()
            .find(|(flag, _)| *flag == name)
            .map(|(_, bits)| *bits)
    }

    /// Union of every named flag
    pub fn known_bits(&self) -> u32 {
        self.flags.iter().fold(0, |acc, (_, bits)| acc | bits)
    }
}

/// A combination of flags from one [`FlagsDef`]
#[derive(Clone, Copy)]
pub struct FlagSet {
    def: &'static FlagsDef,
    bits: u32,
}

impl FlagSet {
    /// Build from raw bits. Only the width is checked; unknown bits are kept.
    pub fn new(def: &'static FlagsDef, bits: u32) -> Result<Self> {
        def.width.check(def.name, u64::from(bits))?;
        Ok(Self { def, bits })
    }

    /// Wrap raw bits already read at the definition's width
    pub(crate) fn from_decoded(def: &'static FlagsDef, bits: u32) -> Self {
        Self { def, bits }
    }

    pub fn empty(def: &'static FlagsDef) -> Self {
        Self { def, bits: 0 }
    }

    /// OR together the flags named in `names`
    pub fn from_names(def: &'static FlagsDef, names: &[&str]) -> Result<Self> {
        let mut bits = 0;
        for name in names {
            bits |= def.bits_of(name).ok_or_else(|| CodecError::UnknownName {
                name: def.name,
                member: name.to_string(),
            })?;
        }
        Self::new(def, bits)
    }

    pub fn def(&self) -> &'static FlagsDef {
        self.def
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if every bit in `bits` is set
    pub fn contains(&self, bits: u32) -> bool {
        self.bits & bits == bits
    }

    /// True if the named flag is set. A zero-valued flag is contained only by the empty set.
    pub fn contains_flag(&self, name: &str) -> bool {
        match self.def.bits_of(name) {
            Some(0) => self.bits == 0,
            Some(bits) => self.contains(bits),
            None => false,
        }
    }

    pub fn insert(&mut self, bits: u32) {
        self.bits |= bits & self.def.width.max();
    }

    pub fn remove(&mut self, bits: u32) {
        self.bits &= !bits;
    }

    /// Bits not covered by any named flag
    pub fn unknown_bits(&self) -> u32 {
        self.bits & !self.def.known_bits()
    }

    /// Flags set in either `self` or `other` (bitwise OR)
    ///
    /// # Errors
    /// `TypeMismatch` if `other` belongs to a different flag definition.
    pub fn union(&self, other: &FlagSet) -> Result<FlagSet> {
        self.require_same_def(other)?;
        Ok(FlagSet {
            def: self.def,
            bits: self.bits | other.bits,
        })
    }

    /// Flags set in both `self` and `other` (bitwise AND)
    ///
    /// # Errors
    /// `TypeMismatch` if `other` belongs to a different flag definition.
    pub fn intersection(&self, other: &FlagSet) -> Result<FlagSet> {
        self.require_same_def(other)?;
        Ok(FlagSet {
            def: self.def,
            bits: self.bits & other.bits,
        })
    }

    fn require_same_def(&self, other: &FlagSet) -> Result<()> {
        if std::ptr::eq(self.def, other.def) {
            Ok(())
        } else {
            Err(CodecError::type_mismatch(other.def.name, self.def.name))
        }
    }

    /// Names of the non-zero flags fully contained in this set, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.def
            .flags
            .iter()
            .filter(|(_, bits)| *bits != 0 && self.contains(*bits))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl PartialEq for FlagSet {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.bits == other.bits
    }
}

impl Eq for FlagSet {}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.names().iter().map(|n| n.to_string()).collect();
        let unknown = self.unknown_bits();
        if unknown != 0 {
            parts.push(format!("{unknown:#x}"));
        }
        if parts.is_empty() {
            return write!(f, "{}(0)", self.def.name);
        }
        write!(f, "{}({})", self.def.name, parts.join("|"))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{self}: {:#x}>", self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::named::{CHANNELS, EMBER_APS_OPTION, EMBER_JOIN_METHOD, EMBER_NODE_TYPE};

    #[test]
    fn test_enum_lookup() {
        let value = EnumValue::named(&EMBER_JOIN_METHOD, "USE_NWK_REJOIN").expect("variant");
        assert_eq!(value.raw(), 1);
        assert_eq!(value.name(), Some("USE_NWK_REJOIN"));
        assert_eq!(value.to_string(), "EmberJoinMethod.USE_NWK_REJOIN");
    }

    #[test]
    fn test_enum_unknown_value_is_kept() {
        let value = EnumValue::new(&EMBER_NODE_TYPE, 0x42).expect("fits in u8");
        assert!(!value.is_known());
        assert_eq!(value.raw(), 0x42);
        assert_eq!(value.to_string(), "EmberNodeType.UNKNOWN_0x42");
    }

    #[test]
    fn test_enum_width_enforced() {
        assert!(matches!(
            EnumValue::new(&EMBER_NODE_TYPE, 0x100),
            Err(CodecError::Range { .. })
        ));
        assert!(matches!(
            EnumValue::named(&EMBER_NODE_TYPE, "NOT_A_NODE"),
            Err(CodecError::UnknownName { name: "EmberNodeType", member }) if member == "NOT_A_NODE"
        ));
    }

    #[test]
    fn test_enums_of_different_defs_differ() {
        let a = EnumValue::new(&EMBER_NODE_TYPE, 1).expect("fits");
        let b = EnumValue::new(&EMBER_JOIN_METHOD, 1).expect("fits");
        assert_ne!(a, b);
    }

    #[test]
    fn test_flag_operations() {
        let retry = FlagSet::from_names(&EMBER_APS_OPTION, &["RETRY"]).expect("flag");
        let discovery =
            FlagSet::from_names(&EMBER_APS_OPTION, &["ENABLE_ROUTE_DISCOVERY"]).expect("flag");

        let both = retry.union(&discovery).expect("same definition");
        assert_eq!(both.bits(), 0x0140);
        assert!(both.contains_flag("RETRY"));
        assert!(both.contains_flag("ENABLE_ROUTE_DISCOVERY"));
        assert!(!both.contains_flag("ENCRYPTION"));
        assert!(!both.contains_flag("NONE"));
        assert_eq!(both.intersection(&retry).expect("same definition"), retry);
        assert_eq!(both.names(), vec!["RETRY", "ENABLE_ROUTE_DISCOVERY"]);
    }

    #[test]
    fn test_flags_of_different_defs_do_not_combine() {
        let retry = FlagSet::new(&EMBER_APS_OPTION, 0x0040).expect("fits");
        let channel_26 = FlagSet::new(&CHANNELS, 1 << 26).expect("fits");

        assert!(matches!(
            retry.union(&channel_26),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert!(matches!(
            retry.intersection(&channel_26),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert_eq!(retry.bits(), 0x0040);
    }

    #[test]
    fn test_unknown_flag_name() {
        assert!(matches!(
            FlagSet::from_names(&EMBER_APS_OPTION, &["RETRY", "TELEPORT"]),
            Err(CodecError::UnknownName { name: "EmberApsOption", member }) if member == "TELEPORT"
        ));
    }

    #[test]
    fn test_flag_unknown_bits_preserved() {
        let mut set = FlagSet::new(&EMBER_APS_OPTION, 0x0041).expect("fits");
        assert_eq!(set.unknown_bits(), 0x0001);
        assert_eq!(set.to_string(), "EmberApsOption(RETRY|0x1)");

        set.remove(0x0040);
        assert_eq!(set.bits(), 0x0001);
        set.insert(0xFFFF_0000);
        assert_eq!(set.bits(), 0x0001, "insert stays within the declared width");
    }

    #[test]
    fn test_empty_flag_set() {
        let set = FlagSet::empty(&EMBER_APS_OPTION);
        assert!(set.is_empty());
        assert!(set.contains_flag("NONE"));
        assert_eq!(set.to_string(), "EmberApsOption(0)");
    }
}
