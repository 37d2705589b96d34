//! Encode and decode command handlers

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::error::{Error, Result};
use crate::output::{OutputWriter, WireEncoding};
use bytes::{Buf, Bytes, BytesMut};
use tracing::debug;
use vercompat_core::wire::MAX_VINT_BYTES;
use vercompat_core::{read_version, write_version, Version};

/// Handle the encode command
pub fn handle_encode(args: EncodeArgs, output: &mut OutputWriter) -> Result<()> {
    let version = Version::parse(&args.input)?;

    let mut buf = BytesMut::with_capacity(MAX_VINT_BYTES);
    write_version(&version, &mut buf);
    debug!(id = version.id(), bytes = buf.len(), "Encoded version");

    output.wire_encoding(&encoding(version, &buf))
}

/// Handle the decode command
pub fn handle_decode(args: DecodeArgs, output: &mut OutputWriter) -> Result<()> {
    let input = args.hex.trim();
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let raw = hex::decode(digits).map_err(|source| Error::InvalidHex {
        input: args.hex.clone(),
        source,
    })?;

    let mut bytes = Bytes::from(raw);
    let version = read_version(&mut bytes)?;
    if bytes.has_remaining() {
        return Err(Error::TrailingBytes {
            count: bytes.remaining(),
        });
    }

    let mut buf = BytesMut::with_capacity(MAX_VINT_BYTES);
    write_version(&version, &mut buf);
    output.wire_encoding(&encoding(version, &buf))
}

fn encoding(version: Version, wire: &[u8]) -> WireEncoding {
    WireEncoding {
        version,
        id: version.id(),
        companion: version.companion(),
        hex: hex::encode(wire),
        length: wire.len(),
    }
}
