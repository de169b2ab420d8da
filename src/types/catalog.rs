//! # Record Catalog
//!
//! The fixed-layout structures exchanged with the network co-processor.
//!
//! Field order and width are dictated by the firmware. Each declaration below
//! is the byte layout, top to bottom, with no padding between fields.

use crate::core::primitive::FieldType;
use crate::core::record::RecordType;
use crate::record_type;
use crate::types::named::{
    AES_MMO_DIGEST, CHANNELS, EMBER_APS_OPTION, EMBER_BINDING_TYPE,
    EMBER_CURRENT_SECURITY_BITMASK, EMBER_EUI64, EMBER_INITIAL_SECURITY_BITMASK,
    EMBER_JOIN_METHOD, EMBER_KEY_DATA, EMBER_MULTICAST_ID, EMBER_NODE_ID, EMBER_NODE_TYPE,
    EMBER_PAN_ID, EMBER_ZLL_KEY_INDEX, EMBER_ZLL_STATE, EXTENDED_PAN_ID, NV3_KEY_ID,
};

record_type! {
    /// Network parameters used to form or join a network
    pub static EMBER_NETWORK_PARAMETERS = "EmberNetworkParameters" {
        extended_pan_id: EXTENDED_PAN_ID,
        pan_id: EMBER_PAN_ID,
        // dBm
        radio_tx_power: FieldType::UInt8,
        radio_channel: FieldType::UInt8,
        join_method: FieldType::Enum(&EMBER_JOIN_METHOD),
        nwk_manager_id: EMBER_NODE_ID,
        nwk_update_id: FieldType::UInt8,
        channels: FieldType::Bitmask(&CHANNELS),
    }
}

record_type! {
    /// A network found by an active scan
    pub static EMBER_ZIGBEE_NETWORK = "EmberZigbeeNetwork" {
        channel: FieldType::UInt8,
        pan_id: EMBER_PAN_ID,
        extended_pan_id: EXTENDED_PAN_ID,
        allowing_join: FieldType::Bool,
        stack_profile: FieldType::UInt8,
        nwk_update_id: FieldType::UInt8,
    }
}

record_type! {
    /// APS frame parameters
    pub static EMBER_APS_FRAME = "EmberApsFrame" {
        profile_id: FieldType::UInt16,
        cluster_id: FieldType::UInt16,
        source_endpoint: FieldType::UInt8,
        destination_endpoint: FieldType::UInt8,
        options: FieldType::Bitmask(&EMBER_APS_OPTION),
        group_id: FieldType::UInt16,
        sequence: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_BINDING_TABLE_ENTRY = "EmberBindingTableEntry" {
        binding_type: FieldType::Enum(&EMBER_BINDING_TYPE),
        local: FieldType::UInt8,
        cluster_id: FieldType::UInt16,
        remote: FieldType::UInt8,
        // destination EUI64 for unicast, group address for multicast
        identifier: EMBER_EUI64,
        network_index: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_MULTICAST_TABLE_ENTRY = "EmberMulticastTableEntry" {
        multicast_id: EMBER_MULTICAST_ID,
        // 0 when unused
        endpoint: FieldType::UInt8,
        network_index: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_TRANSIENT_KEY_DATA = "EmberTransientKeyData" {
        eui64: EMBER_EUI64,
        key_data: EMBER_KEY_DATA,
        incoming_frame_counter: FieldType::UInt32,
        countdown_timer_ms: FieldType::UInt32,
    }
}

record_type! {
    /// State of an in-progress AES-MMO hash
    pub static EMBER_AES_MMO_HASH_CONTEXT = "EmberAesMmoHashContext" {
        result: AES_MMO_DIGEST,
        length: FieldType::UInt32,
    }
}

record_type! {
    pub static EMBER_NEIGHBOR_TABLE_ENTRY = "EmberNeighborTableEntry" {
        short_id: EMBER_NODE_ID,
        average_lqi: FieldType::UInt8,
        // 1 (good) to 7 (bad)
        in_cost: FieldType::UInt8,
        out_cost: FieldType::UInt8,
        // aging periods of 16 seconds
        age: FieldType::UInt8,
        long_id: EMBER_EUI64,
    }
}

record_type! {
    pub static EMBER_ROUTE_TABLE_ENTRY = "EmberRouteTableEntry" {
        // 0xFFFF when unused
        destination: EMBER_NODE_ID,
        next_hop: FieldType::UInt16,
        status: FieldType::UInt8,
        age: FieldType::UInt8,
        concentrator_type: FieldType::UInt8,
        route_record_state: FieldType::UInt8,
    }
}

record_type! {
    /// Security configuration used when forming or joining a network
    pub static EMBER_INITIAL_SECURITY_STATE = "EmberInitialSecurityState" {
        bitmask: FieldType::Bitmask(&EMBER_INITIAL_SECURITY_BITMASK),
        preconfigured_key: EMBER_KEY_DATA,
        network_key: EMBER_KEY_DATA,
        network_key_sequence_number: FieldType::UInt8,
        preconfigured_trust_center_eui64: EMBER_EUI64,
    }
}

record_type! {
    pub static EMBER_CURRENT_SECURITY_STATE = "EmberCurrentSecurityState" {
        bitmask: FieldType::Bitmask(&EMBER_CURRENT_SECURITY_BITMASK),
        trust_center_long_address: EMBER_EUI64,
    }
}

record_type! {
    pub static EMBER_ZLL_SECURITY_ALGORITHM_DATA = "EmberZllSecurityAlgorithmData" {
        transaction_id: FieldType::UInt32,
        response_id: FieldType::UInt32,
        bitmask: FieldType::UInt16,
    }
}

record_type! {
    /// A ZLL network, nesting the plain network descriptor and its security data
    pub static EMBER_ZLL_NETWORK = "EmberZllNetwork" {
        zigbee_network: FieldType::Composite(&EMBER_ZIGBEE_NETWORK),
        security_algorithm: FieldType::Composite(&EMBER_ZLL_SECURITY_ALGORITHM_DATA),
        eui64: EMBER_EUI64,
        node_id: EMBER_NODE_ID,
        state: FieldType::Bitmask(&EMBER_ZLL_STATE),
        node_type: FieldType::Enum(&EMBER_NODE_TYPE),
        number_sub_devices: FieldType::UInt8,
        total_group_identifiers: FieldType::UInt8,
        rssi_correction: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_ZLL_INITIAL_SECURITY_STATE = "EmberZllInitialSecurityState" {
        // reserved
        bitmask: FieldType::UInt32,
        key_index: FieldType::Enum(&EMBER_ZLL_KEY_INDEX),
        encryption_key: EMBER_KEY_DATA,
        preconfigured_key: EMBER_KEY_DATA,
    }
}

record_type! {
    pub static EMBER_ZLL_DEVICE_INFO_RECORD = "EmberZllDeviceInfoRecord" {
        ieee_address: EMBER_EUI64,
        endpoint_id: FieldType::UInt8,
        profile_id: FieldType::UInt16,
        device_id: FieldType::UInt16,
        version: FieldType::UInt8,
        group_id_count: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_ZLL_ADDRESS_ASSIGNMENT = "EmberZllAddressAssignment" {
        node_id: EMBER_NODE_ID,
        free_node_id_min: EMBER_NODE_ID,
        free_node_id_max: EMBER_NODE_ID,
        group_id_min: EMBER_MULTICAST_ID,
        group_id_max: EMBER_MULTICAST_ID,
        free_group_id_min: EMBER_MULTICAST_ID,
        free_group_id_max: EMBER_MULTICAST_ID,
    }
}

record_type! {
    pub static EMBER_TOKEN_DATA = "EmberTokenData" {
        size: FieldType::UInt32,
        data: FieldType::UInt8,
    }
}

record_type! {
    /// Entry of the NVM3 token table
    pub static EMBER_TOKEN_INFO = "EmberTokenInfo" {
        nvm3_key: FieldType::Enum(&NV3_KEY_ID),
        is_cnt: FieldType::Bool,
        is_idx: FieldType::Bool,
        size: FieldType::UInt8,
        array_size: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_TOK_TYPE_STACK_ZLL_DATA = "EmberTokTypeStackZllData" {
        bitmask: FieldType::UInt32,
        free_node_id_min: FieldType::UInt16,
        free_node_id_max: FieldType::UInt16,
        my_group_id_min: FieldType::UInt16,
        free_group_id_min: FieldType::UInt16,
        free_group_id_max: FieldType::UInt16,
        rssi_correction: FieldType::UInt8,
    }
}

record_type! {
    pub static EMBER_TOK_TYPE_STACK_ZLL_SECURITY = "EmberTokTypeStackZllSecurity" {
        bitmask: FieldType::UInt32,
        key_index: FieldType::UInt8,
        encryption_key: EMBER_KEY_DATA,
        preconfigured_key: EMBER_KEY_DATA,
    }
}

record_type! {
    /// Green Power device address
    pub static EMBER_GP_ADDRESS = "EmberGpAddress" {
        gpd_ieee_address: EMBER_EUI64,
        source_id: FieldType::UInt32,
        application_id: FieldType::UInt8,
        endpoint: FieldType::UInt8,
    }
}

record_type! {
    /// Stored trust center token
    pub static NV3_STACK_TRUST_CENTER_TOKEN = "NV3StackTrustCenterToken" {
        mode: FieldType::UInt16,
        eui64: EMBER_EUI64,
        key: EMBER_KEY_DATA,
    }
}

/// Every record type in the catalog
pub static ALL: [&RecordType; 22] = [
    &EMBER_NETWORK_PARAMETERS,
    &EMBER_ZIGBEE_NETWORK,
    &EMBER_APS_FRAME,
    &EMBER_BINDING_TABLE_ENTRY,
    &EMBER_MULTICAST_TABLE_ENTRY,
    &EMBER_TRANSIENT_KEY_DATA,
    &EMBER_AES_MMO_HASH_CONTEXT,
    &EMBER_NEIGHBOR_TABLE_ENTRY,
    &EMBER_ROUTE_TABLE_ENTRY,
    &EMBER_INITIAL_SECURITY_STATE,
    &EMBER_CURRENT_SECURITY_STATE,
    &EMBER_ZLL_SECURITY_ALGORITHM_DATA,
    &EMBER_ZLL_NETWORK,
    &EMBER_ZLL_INITIAL_SECURITY_STATE,
    &EMBER_ZLL_DEVICE_INFO_RECORD,
    &EMBER_ZLL_ADDRESS_ASSIGNMENT,
    &EMBER_TOKEN_DATA,
    &EMBER_TOKEN_INFO,
    &EMBER_TOK_TYPE_STACK_ZLL_DATA,
    &EMBER_TOK_TYPE_STACK_ZLL_SECURITY,
    &EMBER_GP_ADDRESS,
    &NV3_STACK_TRUST_CENTER_TOKEN,
];

/// Look up a catalog record type by its firmware name, e.g. `"EmberApsFrame"`
pub fn by_name(name: &str) -> Option<&'static RecordType> {
    ALL.iter().copied().find(|ty| ty.name() == name)
}
