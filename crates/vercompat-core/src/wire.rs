//! Wire encoding of versions
//!
//! A version travels as the variable-length encoding of its id: seven bits
//! per byte, low-order group first, with the high bit set on every byte
//! but the last. Ids are written as their 32-bit two's complement pattern,
//! so an encoding is never longer than five bytes.

use crate::error::{Error, Result};
use crate::registry::VersionRegistry;
use crate::version::Version;
use bytes::{Buf, BufMut};

/// Longest legal encoding of a 32-bit value
pub const MAX_VINT_BYTES: usize = 5;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Write a 32-bit value as a variable-length integer
pub fn write_vint<B: BufMut>(value: i32, buf: &mut B) {
    let mut remaining = value as u32;
    while remaining & !u32::from(PAYLOAD) != 0 {
        buf.put_u8((remaining as u8 & PAYLOAD) | CONTINUATION);
        remaining >>= 7;
    }
    buf.put_u8(remaining as u8);
}

/// Read a variable-length integer written by [`write_vint`]
pub fn read_vint<B: Buf>(buf: &mut B) -> Result<i32> {
    let mut value: u32 = 0;
    for index in 0..MAX_VINT_BYTES {
        if !buf.has_remaining() {
            return Err(Error::Truncated { what: "vint" });
        }
        let byte = buf.get_u8();
        value |= u32::from(byte & PAYLOAD) << (7 * index);
        if byte & CONTINUATION == 0 {
            return Ok(value as i32);
        }
    }
    Err(Error::VarIntTooLong {
        max_bytes: MAX_VINT_BYTES,
    })
}

/// Write a version to the wire
pub fn write_version<B: BufMut>(version: &Version, buf: &mut B) {
    write_vint(version.id(), buf);
}

/// Read a version from the wire, resolving it against the process-wide
/// registry
pub fn read_version<B: Buf>(buf: &mut B) -> Result<Version> {
    read_version_with(VersionRegistry::global(), buf)
}

/// Read a version from the wire, resolving it against `registry`
pub fn read_version_with<B: Buf>(registry: &VersionRegistry, buf: &mut B) -> Result<Version> {
    let id = read_vint(buf)?;
    Ok(registry.resolve(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declared::*;
    use bytes::{Bytes, BytesMut};

    fn encode(value: i32) -> Vec<u8> {
        let mut buf = BytesMut::new();
        write_vint(value, &mut buf);
        buf.to_vec()
    }

    #[test]
    fn test_vint_layout() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(127), vec![0x7f]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xac, 0x02]);
        // 7000299 = 0b11_0101011_0100001_1101011
        assert_eq!(encode(7_000_299), vec![0xeb, 0xa1, 0xab, 0x03]);
        assert_eq!(encode(-1), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn test_version_round_trip() {
        let mut buf = BytesMut::new();
        write_version(&V_6_0_0_BETA1, &mut buf);
        write_version(&CURRENT, &mut buf);
        write_version(&V_EMPTY, &mut buf);

        let mut bytes = buf.freeze();
        let first = read_version(&mut bytes).unwrap();
        assert_eq!(first, V_6_0_0_BETA1);
        assert_eq!(first.companion(), V_6_0_0_BETA1.companion());
        assert_eq!(read_version(&mut bytes).unwrap(), CURRENT);
        assert_eq!(read_version(&mut bytes).unwrap(), V_EMPTY);
        assert!(!bytes.has_remaining());
    }

    #[test]
    fn test_negative_round_trip() {
        let mut buf = BytesMut::new();
        write_vint(-999_901, &mut buf);
        assert_eq!(buf.len(), MAX_VINT_BYTES);
        assert_eq!(read_vint(&mut buf.freeze()).unwrap(), -999_901);
    }

    #[test]
    fn test_undeclared_id_is_resolved() {
        let mut buf = BytesMut::new();
        write_vint(6_050_599, &mut buf);
        let version = read_version(&mut buf.freeze()).unwrap();
        assert_eq!(version.to_string(), "6.5.5");
        assert_eq!(version.companion(), V_6_5_4.companion());
    }

    #[test]
    fn test_truncated() {
        let mut bytes = Bytes::from_static(&[0x80, 0x80]);
        assert_eq!(read_vint(&mut bytes).unwrap_err(), Error::Truncated { what: "vint" });
        let mut empty = Bytes::new();
        assert!(read_version(&mut empty).is_err());
    }

    #[test]
    fn test_too_long() {
        let mut bytes = Bytes::from_static(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x01]);
        assert_eq!(
            read_vint(&mut bytes).unwrap_err(),
            Error::VarIntTooLong { max_bytes: 5 }
        );
    }
}
