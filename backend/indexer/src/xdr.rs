//! Minimal decoding of base64 `ScVal` XDR topics.
//!
//! RPC nodes that do not render topics as JSON return them as base64 XDR.
//! The sale contract only ever puts a `Symbol` and optionally a `u32` in its
//! topics, so those are the only two shapes handled here.

use base64::{engine::general_purpose::STANDARD, Engine as _};

const SCV_U32: u32 = 3;
const SCV_SYMBOL: u32 = 15;

fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let word = bytes.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
}

/// Decode a base64 `ScVal::Symbol`.
pub fn decode_symbol(raw: &str) -> Option<String> {
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    if read_u32(&bytes, 0)? != SCV_SYMBOL {
        return None;
    }
    let len = read_u32(&bytes, 4)? as usize;
    let body = bytes.get(8..8 + len)?;
    String::from_utf8(body.to_vec()).ok()
}

/// Decode a base64 `ScVal::U32`.
pub fn decode_u32(raw: &str) -> Option<u32> {
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    if read_u32(&bytes, 0)? != SCV_U32 {
        return None;
    }
    read_u32(&bytes, 4)
}
