//! Integration tests for the record catalog wire layouts

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ezsp_codec::core::enums::{EnumValue, FlagSet};
use ezsp_codec::types::address::{Eui64, ExtendedPanId, KeyData};
use ezsp_codec::types::catalog::{self, *};
use ezsp_codec::types::channels::channel_flags;
use ezsp_codec::types::named::*;
use ezsp_codec::{decode, decode_with, encode, CodecError, DecodeOptions, Record, Value};

#[test]
fn test_catalog_widths() {
    let expected = [
        ("EmberNetworkParameters", 20),
        ("EmberZigbeeNetwork", 14),
        ("EmberApsFrame", 11),
        ("EmberBindingTableEntry", 14),
        ("EmberMulticastTableEntry", 4),
        ("EmberTransientKeyData", 32),
        ("EmberAesMmoHashContext", 20),
        ("EmberNeighborTableEntry", 14),
        ("EmberRouteTableEntry", 8),
        ("EmberInitialSecurityState", 43),
        ("EmberCurrentSecurityState", 10),
        ("EmberZllSecurityAlgorithmData", 10),
        ("EmberZllNetwork", 40),
        ("EmberZllInitialSecurityState", 37),
        ("EmberZllDeviceInfoRecord", 15),
        ("EmberZllAddressAssignment", 14),
        ("EmberTokenData", 5),
        ("EmberTokenInfo", 8),
        ("EmberTokTypeStackZllData", 15),
        ("EmberTokTypeStackZllSecurity", 37),
        ("EmberGpAddress", 14),
        ("NV3StackTrustCenterToken", 26),
    ];

    assert_eq!(catalog::ALL.len(), expected.len());
    for (name, width) in expected {
        let ty = catalog::by_name(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(ty.encoded_width(), width, "{name}");
    }
}

#[test]
fn test_zeroed_records_encode_to_zero_bytes() {
    for ty in catalog::ALL {
        let bytes = encode(&Record::zeroed(ty)).expect("zeroed record encodes");
        assert_eq!(bytes.len(), ty.encoded_width(), "{}", ty.name());
        assert!(bytes.iter().all(|b| *b == 0), "{}", ty.name());
    }
}

#[test]
fn test_every_catalog_record_round_trips_from_bytes() {
    for ty in catalog::ALL {
        // A byte pattern that keeps Bool fields valid and enum values unknown
        let bytes: Vec<u8> = (0..ty.encoded_width()).map(|i| (i % 2) as u8).collect();
        let (record, consumed) = decode(&bytes, 0, ty).expect("decodes");
        assert_eq!(consumed, ty.encoded_width());
        assert_eq!(encode(&record).expect("encodes"), bytes, "{}", ty.name());
    }
}

#[test]
fn test_network_parameters_layout() {
    let params = Record::builder(&EMBER_NETWORK_PARAMETERS)
        .set(
            "extended_pan_id",
            ExtendedPanId::new([0xdd; 8]),
        )
        .set("pan_id", 0x1a62u16)
        .set("radio_tx_power", 8u8)
        .set("radio_channel", 15u8)
        .set(
            "join_method",
            EnumValue::named(&EMBER_JOIN_METHOD, "USE_MAC_ASSOCIATION").unwrap(),
        )
        .set("nwk_manager_id", 0x0000u16)
        .set("nwk_update_id", 0u8)
        .set("channels", channel_flags([15]).unwrap())
        .build()
        .expect("complete record");

    let bytes = encode(&params).expect("encodes");
    assert_eq!(
        bytes,
        vec![
            0xdd, 0xdd, 0xdd, 0xdd, 0xdd, 0xdd, 0xdd, 0xdd, // extended_pan_id
            0x62, 0x1a, // pan_id
            0x08, // radio_tx_power
            0x0f, // radio_channel
            0x00, // join_method
            0x00, 0x00, // nwk_manager_id
            0x00, // nwk_update_id
            0x00, 0x80, 0x00, 0x00, // channels
        ]
    );

    let (decoded, consumed) = decode(&bytes, 0, &EMBER_NETWORK_PARAMETERS).expect("decodes");
    assert_eq!(consumed, 20);
    assert_eq!(decoded, params);
    assert_eq!(decoded.get_u16("pan_id").unwrap(), 0x1a62);
}

#[test]
fn test_aps_frame_layout() {
    let options = FlagSet::from_names(&EMBER_APS_OPTION, &["RETRY", "ENABLE_ROUTE_DISCOVERY"])
        .expect("known flags");
    let frame = Record::builder(&EMBER_APS_FRAME)
        .set("profile_id", 0x0104u16)
        .set("cluster_id", 0x0006u16)
        .set("source_endpoint", 1u8)
        .set("destination_endpoint", 1u8)
        .set("options", options)
        .set("group_id", 0u16)
        .set("sequence", 0x2au8)
        .build()
        .expect("complete record");

    let bytes = encode(&frame).expect("encodes");
    assert_eq!(
        bytes,
        vec![0x04, 0x01, 0x06, 0x00, 0x01, 0x01, 0x40, 0x01, 0x00, 0x00, 0x2a]
    );
}

#[test]
fn test_zll_network_nests_inner_records() {
    let mut bytes = Vec::new();
    // EmberZigbeeNetwork
    bytes.extend_from_slice(&[0x0b, 0x34, 0x12]);
    bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    bytes.extend_from_slice(&[0x01, 0x02, 0x00]);
    // EmberZllSecurityAlgorithmData
    bytes.extend_from_slice(&[0x78, 0x56, 0x34, 0x12, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
    // remaining fields
    bytes.extend_from_slice(&[0xaa; 8]);
    bytes.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00]);
    assert_eq!(bytes.len(), 40);

    let (record, consumed) = decode(&bytes, 0, &EMBER_ZLL_NETWORK).expect("decodes");
    assert_eq!(consumed, 40);

    let network = record.get_record("zigbee_network").expect("nested record");
    assert!(std::ptr::eq(network.record_type(), &EMBER_ZIGBEE_NETWORK));
    assert_eq!(network.get_u8("channel").unwrap(), 11);
    assert_eq!(network.get_u16("pan_id").unwrap(), 0x1234);
    assert!(network.get_bool("allowing_join").unwrap());

    let security = record.get_record("security_algorithm").expect("nested record");
    assert_eq!(security.get_u32("transaction_id").unwrap(), 0x1234_5678);

    match record.get("node_type") {
        Some(Value::Enum(node_type)) => assert_eq!(node_type.name(), Some("ROUTER")),
        other => panic!("unexpected node_type {other:?}"),
    }

    assert_eq!(encode(&record).expect("encodes"), bytes);
}

#[test]
fn test_nested_record_of_wrong_type_rejected() {
    let mut record = Record::zeroed(&EMBER_ZLL_NETWORK);
    let wrong = Record::zeroed(&EMBER_ZLL_DEVICE_INFO_RECORD);
    assert!(matches!(
        record.set("zigbee_network", wrong),
        Err(CodecError::TypeMismatch { .. })
    ));
}

#[test]
fn test_initial_security_state_keys() {
    let key = KeyData::new([0x5a; 16]);
    let trust_center: Eui64 = "00:12:4b:00:01:02:03:04".parse().unwrap();

    let state = Record::builder(&EMBER_INITIAL_SECURITY_STATE)
        .set(
            "bitmask",
            FlagSet::from_names(
                &EMBER_INITIAL_SECURITY_BITMASK,
                &["HAVE_PRECONFIGURED_KEY", "HAVE_NETWORK_KEY"],
            )
            .unwrap(),
        )
        .set("preconfigured_key", key)
        .set("network_key", KeyData::new([0x01; 16]))
        .set("network_key_sequence_number", 0u8)
        .set("preconfigured_trust_center_eui64", trust_center)
        .build()
        .expect("complete record");

    let bytes = encode(&state).expect("encodes");
    assert_eq!(bytes.len(), 43);
    assert_eq!(&bytes[..2], &[0x00, 0x03]);
    assert_eq!(&bytes[2..18], &[0x5a; 16]);
    assert_eq!(&bytes[35..], trust_center.as_bytes());

    let (decoded, _) = decode(&bytes, 0, &EMBER_INITIAL_SECURITY_STATE).unwrap();
    let eui = Eui64::try_from(decoded.get("preconfigured_trust_center_eui64").unwrap()).unwrap();
    assert_eq!(eui, trust_center);
}

#[test]
fn test_token_info_bool_and_enum() {
    // NVM3KEY_STACK_KEYS, is_cnt, !is_idx, size 0x24, array_size 1
    let bytes = [0x79, 0xeb, 0x01, 0x00, 0x01, 0x00, 0x24, 0x01];
    let (record, _) = decode(&bytes, 0, &EMBER_TOKEN_INFO).expect("decodes");
    assert!(record.get_bool("is_cnt").unwrap());
    assert!(!record.get_bool("is_idx").unwrap());
    match record.get("nvm3_key") {
        Some(Value::Enum(key)) => assert_eq!(key.name(), Some("NVM3KEY_STACK_KEYS")),
        other => panic!("unexpected nvm3_key {other:?}"),
    }

    let mut bad = bytes;
    bad[4] = 2;
    assert!(matches!(
        decode(&bad, 0, &EMBER_TOKEN_INFO),
        Err(CodecError::UnknownVariant { name: "Bool", value: 2 })
    ));
}

#[test]
fn test_unknown_enum_value_policy() {
    let mut bytes = [0u8; 14];
    bytes[0] = 0x42;

    let (record, _) = decode(&bytes, 0, &EMBER_BINDING_TABLE_ENTRY).expect("pass-through");
    match record.get("binding_type") {
        Some(Value::Enum(kind)) => {
            assert!(!kind.is_known());
            assert_eq!(kind.raw(), 0x42);
        }
        other => panic!("unexpected binding_type {other:?}"),
    }
    assert_eq!(encode(&record).unwrap(), bytes);

    assert!(matches!(
        decode_with(&bytes, 0, &EMBER_BINDING_TABLE_ENTRY, DecodeOptions::strict()),
        Err(CodecError::UnknownVariant {
            name: "EmberBindingType",
            value: 0x42
        })
    ));
}

#[test]
fn test_truncated_catalog_records() {
    for ty in catalog::ALL {
        let bytes = vec![0u8; ty.encoded_width() - 1];
        assert!(
            matches!(decode(&bytes, 0, ty), Err(CodecError::TruncatedInput { .. })),
            "{}",
            ty.name()
        );
    }
}

#[test]
fn test_decode_at_offset_inside_frame() {
    let mut frame = vec![0xff, 0xee];
    frame.extend_from_slice(&[0x34, 0x12, 0x05, 0x00]);
    frame.push(0x99);

    let (record, consumed) = decode(&frame, 2, &EMBER_MULTICAST_TABLE_ENTRY).expect("decodes");
    assert_eq!(consumed, 4);
    assert_eq!(record.get_u16("multicast_id").unwrap(), 0x1234);
    assert_eq!(record.get_u8("endpoint").unwrap(), 5);
}

#[test]
fn test_record_serializes_to_json() {
    let mut entry = Record::zeroed(&EMBER_NEIGHBOR_TABLE_ENTRY);
    entry.set("short_id", 0xabcdu16).unwrap();
    entry
        .set("long_id", Eui64::new([0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77]))
        .unwrap();

    let json = serde_json::to_value(&entry).expect("serializes");
    assert_eq!(json["short_id"], 0xabcd);
    assert_eq!(json["long_id"], "00:11:22:33:44:55:66:77");
}

#[test]
fn test_flags_from_another_domain_rejected() {
    let retry = FlagSet::from_names(&EMBER_APS_OPTION, &["RETRY"]).unwrap();
    let channel = channel_flags([26]).unwrap();
    assert!(matches!(
        retry.union(&channel),
        Err(CodecError::TypeMismatch { .. })
    ));

    // A channel mask is not an APS option set, even though both are flag sets
    let mut frame = Record::zeroed(&EMBER_APS_FRAME);
    assert!(matches!(
        frame.set("options", channel),
        Err(CodecError::TypeMismatch { .. })
    ));
    frame.set("options", retry).unwrap();
    assert_eq!(encode(&frame).unwrap()[6..8], [0x40, 0x00]);
}
