use tfevents_logger::proto::{event, summary, Event, Summary};
use tfevents_logger::{masked_crc32c, EventEncoder, ProtobufEncoder, RecordWriter};

fn unhex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn test_masked_checksum_known_answers() {
    assert_eq!(masked_crc32c(b""), 0xa282ead8);
    assert_eq!(masked_crc32c(b"123456789"), 0xc78ab0e5);
    assert_eq!(masked_crc32c(b"hello world"), 0x6dd87e00);
}

#[test]
fn test_frame_layout() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record(b"abc").unwrap();
    let bytes = writer.into_inner();

    assert_eq!(bytes.len(), 8 + 4 + 3 + 4);
    assert_eq!(&bytes[0..8], &[3, 0, 0, 0, 0, 0, 0, 0], "length must be u64 LE");
    let header_crc = u32::from_le_bytes(bytes[8..12].try_into().unwrap());
    assert_eq!(header_crc, masked_crc32c(&bytes[0..8]), "header checksum");
    assert_eq!(&bytes[12..15], b"abc");
    let payload_crc = u32::from_le_bytes(bytes[15..19].try_into().unwrap());
    assert_eq!(payload_crc, masked_crc32c(b"abc"), "payload checksum");
}

#[test]
fn test_empty_record_frame() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record(b"").unwrap();
    let bytes = writer.into_inner();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[0..8], &[0u8; 8]);
    // Both checksums cover known inputs: an all-zero header and no payload.
    assert_eq!(
        u32::from_le_bytes(bytes[12..16].try_into().unwrap()),
        0xa282ead8
    );
}

#[test]
fn test_records_are_concatenated_in_order() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record(b"first").unwrap();
    writer.write_record(b"second").unwrap();
    let bytes = writer.into_inner();

    let first_len = 16 + 5;
    assert_eq!(&bytes[12..17], b"first");
    assert_eq!(&bytes[first_len + 12..first_len + 18], b"second");
    assert_eq!(bytes.len(), first_len + 16 + 6);
}

#[test]
fn test_golden_scalar_frame() {
    // Pins the record encoding, the checksum variant and the endianness in
    // one literal: wall_time 256.5, tag "v/1", value 1.5, step 1.
    let event = Event {
        wall_time: 256.5,
        step: 1,
        what: Some(event::What::Summary(Summary {
            value: vec![summary::Value {
                tag: "v/1".to_string(),
                value: Some(summary::value::Value::SimpleValue(1.5)),
            }],
        })),
    };
    let payload = ProtobufEncoder.encode(&event);
    assert_eq!(
        payload,
        unhex("09000000000008704010012a0c0a0a0a03762f31150000c03f"),
        "record payload drifted from the reference bytes"
    );

    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record(&payload).unwrap();
    assert_eq!(
        writer.into_inner(),
        unhex("19000000000000008bf1082809000000000008704010012a0c0a0a0a03762f31150000c03f2cecc087"),
        "framed record drifted from the reference bytes"
    );
}
