use crc32c::crc32c;

/// Masked CRC32C checksums for the event-file frame format.
///
/// Every frame in an event file protects its length header and its payload
/// with a CRC32C (Castagnoli polynomial) that is additionally passed through
/// a fixed masking transform. The mask is part of the on-disk format (see
/// `RecordWriter::WriteRecord` in TensorFlow's `record_writer.cc`) and must
/// be reproduced bit-exactly for readers to accept the file.

/// Constant added to the rotated checksum by the masking transform.
const MASK_DELTA: u32 = 0xa282ead8;

/// Computes the masked CRC32C of a byte buffer.
///
/// The mask rotates the raw CRC32C right by 15 bits and adds `MASK_DELTA`
/// with wrapping arithmetic. The transform is not cryptographic; it only
/// exists so that checksums of checksums remain well distributed, and it is
/// required verbatim for wire compatibility.
///
/// # Examples
///
/// ```
/// use tfevents_logger::masked_crc::masked_crc32c;
///
/// // Known answers pinned against the reference implementation.
/// assert_eq!(masked_crc32c(b""), 0xa282ead8);
/// assert_eq!(masked_crc32c(b"123456789"), 0xc78ab0e5);
/// ```
pub fn masked_crc32c(data: &[u8]) -> u32 {
    let crc = crc32c(data);
    crc.rotate_right(15).wrapping_add(MASK_DELTA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_mask_delta() {
        // CRC32C of the empty string is 0, so only the mask remains.
        assert_eq!(masked_crc32c(b""), MASK_DELTA);
    }

    #[test]
    fn test_check_string() {
        // crc32c("123456789") is the standard check value 0xe3069283;
        // masking it yields the value below.
        assert_eq!(masked_crc32c(b"123456789"), 0xc78ab0e5);
    }

    #[test]
    fn test_deterministic() {
        let buf: Vec<u8> = (0u16..1024).map(|i| (i % 251) as u8).collect();
        assert_eq!(masked_crc32c(&buf), masked_crc32c(&buf));
    }
}
