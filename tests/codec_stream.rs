//! Tests for splitting a byte stream into consecutive records

#![allow(clippy::expect_used, clippy::unwrap_used)]

use bytes::BytesMut;
use ezsp_codec::types::catalog::{EMBER_MULTICAST_TABLE_ENTRY, EMBER_ROUTE_TABLE_ENTRY};
use ezsp_codec::{CodecError, DecodeOptions, Record, RecordCodec};
use futures::{SinkExt, StreamExt};
use tokio_util::codec::{Decoder, Encoder, FramedRead, FramedWrite};

fn multicast(id: u16, endpoint: u8) -> Record {
    Record::builder(&EMBER_MULTICAST_TABLE_ENTRY)
        .set("multicast_id", id)
        .set("endpoint", endpoint)
        .set("network_index", 0u8)
        .build()
        .expect("complete record")
}

#[test]
fn test_partial_input_waits_for_more() {
    let mut codec = RecordCodec::new(&EMBER_MULTICAST_TABLE_ENTRY);
    let mut buf = BytesMut::from(&[0x01, 0x00, 0x02][..]);

    assert!(codec.decode(&mut buf).unwrap().is_none());
    assert_eq!(buf.len(), 3);

    buf.extend_from_slice(&[0x00, 0xaa]);
    let record = codec.decode(&mut buf).unwrap().expect("one record");
    assert_eq!(record.get_u16("multicast_id").unwrap(), 1);
    assert_eq!(record.get_u8("endpoint").unwrap(), 2);
    assert_eq!(&buf[..], &[0xaa]);
}

#[test]
fn test_encoder_rejects_other_record_type() {
    let mut codec = RecordCodec::new(&EMBER_ROUTE_TABLE_ENTRY);
    let mut buf = BytesMut::new();
    let result = codec.encode(multicast(1, 1), &mut buf);
    assert!(matches!(result, Err(CodecError::TypeMismatch { .. })));
    assert!(buf.is_empty());
}

#[test]
fn test_codec_reports_configured_type() {
    let codec = RecordCodec::with_options(&EMBER_ROUTE_TABLE_ENTRY, DecodeOptions::strict());
    assert!(std::ptr::eq(codec.record_type(), &EMBER_ROUTE_TABLE_ENTRY));
}

#[tokio::test]
async fn test_framed_round_trip() {
    let records = vec![multicast(0x1001, 1), multicast(0x1002, 2), multicast(0x1003, 3)];

    let mut sink = FramedWrite::new(Vec::new(), RecordCodec::new(&EMBER_MULTICAST_TABLE_ENTRY));
    for record in &records {
        sink.send(record.clone()).await.unwrap();
    }
    let bytes = sink.into_inner();
    assert_eq!(bytes.len(), 12);

    let mut stream = FramedRead::new(&bytes[..], RecordCodec::new(&EMBER_MULTICAST_TABLE_ENTRY));
    let mut decoded = Vec::new();
    while let Some(record) = stream.next().await {
        decoded.push(record.unwrap());
    }
    assert_eq!(decoded, records);
}

#[tokio::test]
async fn test_framed_trailing_partial_record_is_an_error() {
    let bytes = [0x01, 0x00, 0x02, 0x00, 0x05];
    let mut stream = FramedRead::new(&bytes[..], RecordCodec::new(&EMBER_MULTICAST_TABLE_ENTRY));

    assert!(stream.next().await.unwrap().is_ok());
    // Leftover bytes at EOF surface as an I/O error from decode_eof
    assert!(matches!(stream.next().await, Some(Err(CodecError::Io(_)))));
}
