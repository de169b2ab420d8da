//! Named field types of the EZSP protocol.
//!
//! Every enumeration the record catalog uses is declared here. All value enums
//! pass unknown values through on decode: the firmware reports reserved values
//! in practice and a record that carries one must still round-trip byte for byte.

use crate::core::enums::{DecodePolicy, EnumDef, FlagsDef};
use crate::core::primitive::{FieldType, IntWidth};

/// 16-bit PAN identifier
pub const EMBER_PAN_ID: FieldType = FieldType::UInt16;
/// 16-bit short network address
pub const EMBER_NODE_ID: FieldType = FieldType::UInt16;
/// 16-bit multicast group identifier
pub const EMBER_MULTICAST_ID: FieldType = FieldType::UInt16;

/// 8-byte IEEE address
pub const EMBER_EUI64: FieldType = FieldType::FixedArray(&FieldType::UInt8, 8);
/// 8-byte extended PAN identifier
pub const EXTENDED_PAN_ID: FieldType = FieldType::FixedArray(&FieldType::UInt8, 8);
/// 16-byte key material
pub const EMBER_KEY_DATA: FieldType = FieldType::FixedArray(&FieldType::UInt8, 16);
/// 16-byte AES-MMO hash digest
pub const AES_MMO_DIGEST: FieldType = FieldType::FixedArray(&FieldType::UInt8, 16);

pub static EMBER_JOIN_METHOD: EnumDef = EnumDef::new(
    "EmberJoinMethod",
    IntWidth::U8,
    &[
        ("USE_MAC_ASSOCIATION", 0x00),
        ("USE_NWK_REJOIN", 0x01),
        ("USE_NWK_REJOIN_HAVE_NWK_KEY", 0x02),
        ("USE_CONFIGURED_NWK_STATE", 0x03),
    ],
    DecodePolicy::PassThrough,
);

pub static EMBER_NODE_TYPE: EnumDef = EnumDef::new(
    "EmberNodeType",
    IntWidth::U8,
    &[
        ("UNKNOWN_DEVICE", 0x00),
        ("COORDINATOR", 0x01),
        ("ROUTER", 0x02),
        ("END_DEVICE", 0x03),
        ("SLEEPY_END_DEVICE", 0x04),
        ("MOBILE_END_DEVICE", 0x05),
    ],
    DecodePolicy::PassThrough,
);

pub static EMBER_BINDING_TYPE: EnumDef = EnumDef::new(
    "EmberBindingType",
    IntWidth::U8,
    &[
        ("UNUSED_BINDING", 0x00),
        ("UNICAST_BINDING", 0x01),
        ("MANY_TO_ONE_BINDING", 0x02),
        ("MULTICAST_BINDING", 0x03),
    ],
    DecodePolicy::PassThrough,
);

pub static EMBER_ZLL_KEY_INDEX: EnumDef = EnumDef::new(
    "EmberZllKeyIndex",
    IntWidth::U8,
    &[
        ("DEVELOPMENT", 0x00),
        ("MASTER", 0x04),
        ("CERTIFICATION", 0x0F),
    ],
    DecodePolicy::PassThrough,
);

pub static NV3_KEY_ID: EnumDef = EnumDef::new(
    "NV3KeyId",
    IntWidth::U32,
    &[
        ("CREATOR_STACK_NVDATA_VERSION", 0x0000_FF01),
        ("CREATOR_STACK_BOOT_COUNTER", 0x0000_E263),
        ("CREATOR_STACK_NONCE_COUNTER", 0x0000_E563),
        ("CREATOR_STACK_ANALYSIS_REBOOT", 0x0000_E162),
        ("CREATOR_STACK_KEYS", 0x0000_EB79),
        ("CREATOR_STACK_NODE_DATA", 0x0000_EE64),
        ("CREATOR_STACK_TRUST_CENTER", 0x0000_E124),
        ("CREATOR_STACK_NETWORK_MANAGEMENT", 0x0000_E125),
        ("CREATOR_STACK_RESTORED_EUI64", 0x0000_E12A),
        ("NVM3KEY_STACK_NVDATA_VERSION", 0x0001_FF01),
        ("NVM3KEY_STACK_BOOT_COUNTER", 0x0001_E263),
        ("NVM3KEY_STACK_NONCE_COUNTER", 0x0001_E563),
        ("NVM3KEY_STACK_ANALYSIS_REBOOT", 0x0001_E162),
        ("NVM3KEY_STACK_KEYS", 0x0001_EB79),
        ("NVM3KEY_STACK_NODE_DATA", 0x0001_EE64),
        ("NVM3KEY_STACK_TRUST_CENTER", 0x0001_E124),
        ("NVM3KEY_STACK_NETWORK_MANAGEMENT", 0x0001_E125),
        ("NVM3KEY_STACK_RESTORED_EUI64", 0x0001_E12A),
    ],
    DecodePolicy::PassThrough,
);

pub static EMBER_APS_OPTION: FlagsDef = FlagsDef::new(
    "EmberApsOption",
    IntWidth::U16,
    &[
        ("NONE", 0x0000),
        ("ENCRYPTION", 0x0020),
        ("RETRY", 0x0040),
        ("ENABLE_ROUTE_DISCOVERY", 0x0100),
        ("FORCE_ROUTE_DISCOVERY", 0x0200),
        ("SOURCE_EUI64", 0x0400),
        ("DESTINATION_EUI64", 0x0800),
        ("ENABLE_ADDRESS_DISCOVERY", 0x1000),
        ("POLL_RESPONSE", 0x2000),
        ("ZDO_RESPONSE_REQUIRED", 0x4000),
        ("FRAGMENT", 0x8000),
    ],
);

pub static EMBER_INITIAL_SECURITY_BITMASK: FlagsDef = FlagsDef::new(
    "EmberInitialSecurityBitmask",
    IntWidth::U16,
    &[
        ("STANDARD_SECURITY_MODE", 0x0000),
        ("DISTRIBUTED_TRUST_CENTER_MODE", 0x0002),
        ("TRUST_CENTER_GLOBAL_LINK_KEY", 0x0004),
        ("PRECONFIGURED_NETWORK_KEY_MODE", 0x0008),
        ("HAVE_TRUST_CENTER_EUI64", 0x0040),
        ("TRUST_CENTER_USES_HASHED_LINK_KEY", 0x0084),
        ("HAVE_PRECONFIGURED_KEY", 0x0100),
        ("HAVE_NETWORK_KEY", 0x0200),
        ("GET_LINK_KEY_WHEN_JOINING", 0x0400),
        ("REQUIRE_ENCRYPTED_KEY", 0x0800),
        ("NO_FRAME_COUNTER_RESET", 0x1000),
        ("GET_PRECONFIGURED_KEY_FROM_INSTALL_CODE", 0x2000),
    ],
);

pub static EMBER_CURRENT_SECURITY_BITMASK: FlagsDef = FlagsDef::new(
    "EmberCurrentSecurityBitmask",
    IntWidth::U16,
    &[
        ("STANDARD_SECURITY_MODE", 0x0000),
        ("DISTRIBUTED_TRUST_CENTER_MODE", 0x0002),
        ("GLOBAL_LINK_KEY", 0x0004),
        ("HAVE_TRUST_CENTER_LINK_KEY", 0x0010),
        ("TRUST_CENTER_USES_HASHED_LINK_KEY", 0x0084),
    ],
);

pub static EMBER_ZLL_STATE: FlagsDef = FlagsDef::new(
    "EmberZllState",
    IntWidth::U16,
    &[
        ("NONE", 0x0000),
        ("FACTORY_NEW", 0x0001),
        ("ADDRESS_ASSIGNMENT_CAPABLE", 0x0002),
        ("LINK_INITIATOR", 0x0010),
        ("LINK_PRIORITY_REQUEST", 0x0020),
        ("PROFILE_INTEROP", 0x0080),
        ("NON_ZLL_NETWORK", 0x0100),
        ("TOKEN_POPULATED", 0x0200),
    ],
);

/// 802.15.4 channel mask, one bit per channel 11 through 26
pub static CHANNELS: FlagsDef = FlagsDef::new(
    "Channels",
    IntWidth::U32,
    &[
        ("NO_CHANNELS", 0x0000_0000),
        ("CHANNEL_11", 1 << 11),
        ("CHANNEL_12", 1 << 12),
        ("CHANNEL_13", 1 << 13),
        ("CHANNEL_14", 1 << 14),
        ("CHANNEL_15", 1 << 15),
        ("CHANNEL_16", 1 << 16),
        ("CHANNEL_17", 1 << 17),
        ("CHANNEL_18", 1 << 18),
        ("CHANNEL_19", 1 << 19),
        ("CHANNEL_20", 1 << 20),
        ("CHANNEL_21", 1 << 21),
        ("CHANNEL_22", 1 << 22),
        ("CHANNEL_23", 1 << 23),
        ("CHANNEL_24", 1 << 24),
        ("CHANNEL_25", 1 << 25),
        ("CHANNEL_26", 1 << 26),
    ],
);
