use std::io::{self, Write};

use crate::masked_crc::masked_crc32c;

/// Length-prefixed, checksum-protected framing for serialized records.
///
/// Each record is wrapped in the on-disk frame
///
/// ```text
/// u64 length (LE) | u32 masked CRC32C of the length bytes (LE)
///                 | payload | u32 masked CRC32C of the payload (LE)
/// ```
///
/// The two independent checksums let a reader distinguish a truncated
/// frame (bad header) from a corrupted one (bad payload). Byte order is
/// little-endian regardless of host architecture.
///
/// The writer does not own buffering or flush policy; callers decide when
/// to flush the underlying sink. It is not thread-safe: one writer is
/// exclusively owned by one producer.
///
/// # Examples
///
/// ```
/// use tfevents_logger::RecordWriter;
///
/// let mut writer = RecordWriter::new(Vec::new());
/// writer.write_record(b"payload").unwrap();
/// let bytes = writer.into_inner();
/// // 8-byte length + 4-byte header crc + payload + 4-byte payload crc
/// assert_eq!(bytes.len(), 8 + 4 + 7 + 4);
/// ```
pub struct RecordWriter<W: Write> {
    inner: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Frames one serialized record and writes it to the sink.
    ///
    /// The whole frame is assembled in memory and handed to the sink as a
    /// single `write_all`, so an I/O error never leaves a partial frame
    /// ahead of bytes this writer reported as accepted.
    pub fn write_record(&mut self, data: &[u8]) -> io::Result<()> {
        let mut frame = Vec::with_capacity(data.len() + 16);
        let header = (data.len() as u64).to_le_bytes();
        frame.extend_from_slice(&header);
        frame.extend_from_slice(&masked_crc32c(&header).to_le_bytes());
        frame.extend_from_slice(data);
        frame.extend_from_slice(&masked_crc32c(data).to_le_bytes());
        self.inner.write_all(&frame)
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Consumes the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
