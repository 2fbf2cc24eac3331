//! The canonical on-disk payload layout, for round-trip testing and file
//! storage. Not part of the entropy-coding core — a thin framing layer
//! over a [`StreamingDriver::encode`] result, the way `BitEstream`/
//! `BitDstream` (`tiny_bitstream`) frame raw compressed bytes without
//! being part of a coder itself.
//!
//! Digit packing only supports `b` a power of two: each digit then
//! occupies exactly `log2(b)` bits, packed MSB-first with
//! [`tiny_bitstream`]. A non-power-of-two `b` is rejected at
//! serialization time rather than guessing at an arbitrary-base packing
//! scheme — see DESIGN.md.

use tiny_bitstream::{BitDstream, BitEstream, BitReader, BitWriter};

use crate::error::AnsError;

const MAGIC: &[u8; 4] = b"ANS1";

/// Which coder variant encoded a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Rans = 0x00,
    Uabs = 0x01,
    Tans = 0x02,
}

impl Variant {
    fn from_byte(byte: u8) -> Result<Self, AnsError> {
        match byte {
            0x00 => Ok(Variant::Rans),
            0x01 => Ok(Variant::Uabs),
            0x02 => Ok(Variant::Tans),
            _ => Err(AnsError::InvalidParameter("unknown variant byte")),
        }
    }
}

/// A parsed canonical payload: framing fields plus the digit stack a
/// [`crate::driver::StreamingDriver::decode`] call consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    pub variant: Variant,
    pub b: u64,
    pub l: u64,
    pub n: u64,
    pub final_state: u64,
    pub digits: Vec<u64>,
}

fn digit_bits(b: u64) -> Result<u8, AnsError> {
    if b < 2 || !b.is_power_of_two() {
        return Err(AnsError::InvalidParameter(
            "canonical payload packing requires b to be a power of two",
        ));
    }
    if b > 255 {
        return Err(AnsError::InvalidParameter(
            "b must fit in the wire format's 1-byte field (2..255)",
        ));
    }
    Ok(b.trailing_zeros() as u8)
}

/// Serializes `digits`/`final_state` plus framing fields into the
/// `magic/variant/b/l/N/final_state/bit_len/digits` layout.
pub fn encode_payload(
    variant: Variant,
    b: u64,
    l: u64,
    n: u64,
    final_state: u64,
    digits: &[u64],
) -> Result<Vec<u8>, AnsError> {
    let bits_per_digit = digit_bits(b)?;
    if l > u16::MAX as u64 {
        return Err(AnsError::InvalidParameter(
            "l must fit in the wire format's 2-byte field",
        ));
    }

    let mut out = Vec::from(*MAGIC);
    out.push(variant as u8);
    out.push(b as u8);
    out.extend_from_slice(&(l as u16).to_be_bytes());
    out.extend_from_slice(&n.to_be_bytes());
    out.extend_from_slice(&final_state.to_be_bytes());
    out.extend_from_slice(&(digits.len() as u64).to_be_bytes());

    let mut stream = BitEstream::new();
    for &digit in digits {
        stream.unchecked_write(digit as usize, bits_per_digit);
    }
    let packed: Vec<u8> = stream.try_into().map_err(|_| AnsError::TableLookupMiss)?;
    out.extend_from_slice(&packed);
    Ok(out)
}

/// Parses a payload produced by [`encode_payload`].
pub fn decode_payload(bytes: &[u8]) -> Result<Payload, AnsError> {
    if bytes.len() < 4 + 1 + 1 + 2 + 8 + 8 + 8 {
        return Err(AnsError::Truncated);
    }
    if &bytes[0..4] != MAGIC {
        return Err(AnsError::InvalidParameter("bad magic"));
    }
    let variant = Variant::from_byte(bytes[4])?;
    let b = bytes[5] as u64;
    let l = u16::from_be_bytes([bytes[6], bytes[7]]) as u64;
    let n = u64::from_be_bytes(bytes[8..16].try_into().unwrap());
    let final_state = u64::from_be_bytes(bytes[16..24].try_into().unwrap());
    let bit_len = u64::from_be_bytes(bytes[24..32].try_into().unwrap());

    let bits_per_digit = digit_bits(b)?;
    let packed = bytes[32..].to_vec();
    let mut stream: BitDstream = packed.try_into().map_err(|_| AnsError::Truncated)?;
    // tiny_bitstream's BitEstream -> Vec<u8> conversion always prepends a
    // marker bit; discard it unconditionally before reading digits.
    stream.read(1).map_err(|_| AnsError::Truncated)?;

    let mut digits = Vec::with_capacity(bit_len as usize);
    for _ in 0..bit_len {
        let digit = stream
            .read(bits_per_digit)
            .map_err(|_| AnsError::Truncated)? as u64;
        digits.push(digit);
    }

    Ok(Payload {
        variant,
        b,
        l,
        n,
        final_state,
        digits,
    })
}
