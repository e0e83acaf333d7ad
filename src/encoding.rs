use prost::Message;

use crate::proto::Event;

/// Serializes an [`Event`] record into the bytes that get framed on disk.
///
/// Implementations must be deterministic: the same logical record must
/// always produce the same bytes, because conformance tests pin exact frame
/// contents and readers may deduplicate by payload. The framing and
/// checksum layers depend only on this trait, so the concrete encoding can
/// be swapped without touching them.
pub trait EventEncoder: Send {
    fn encode(&self, event: &Event) -> Vec<u8>;
}

/// Default encoder: protobuf via `prost`.
///
/// `prost` writes fields in ascending field-number order and packs repeated
/// scalars, which matches the canonical serialization the target format's
/// readers were built against.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtobufEncoder;

impl EventEncoder for ProtobufEncoder {
    fn encode(&self, event: &Event) -> Vec<u8> {
        event.encode_to_vec()
    }
}
