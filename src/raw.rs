//! Routines for working with raw (u64) flexible varints.
//!
//! Each symbol carries 5 payload bits plus a continuation bit (`0x20`) and is written as one
//! character of the URL-safe base64 alphabet, least significant chunk first. Other types should
//! be shuffled to/from raw values using the `core::Int` trait.

use crate::{Error, MAX_LEN};

/// Symbol alphabet, indexed by the 6-bit symbol value.
pub(crate) const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

pub(crate) const CONTINUATION: u8 = 0x20;
pub(crate) const PAYLOAD_MASK: u64 = 0x1f;
pub(crate) const PAYLOAD_BITS: u32 = 5;

/// Lowest and highest code points used by `ALPHABET` (`-` and `z`).
const FIRST_SYMBOL: u8 = b'-';
const LAST_SYMBOL: u8 = b'z';
const INVALID: u8 = u8::MAX;

const fn compute_decode_table() -> [u8; (LAST_SYMBOL - FIRST_SYMBOL) as usize + 1] {
    let mut tbl = [INVALID; (LAST_SYMBOL - FIRST_SYMBOL) as usize + 1];
    let mut i = 0;
    while i < ALPHABET.len() {
        tbl[(ALPHABET[i] - FIRST_SYMBOL) as usize] = i as u8;
        i += 1;
    }
    tbl
}

const DECODE_TABLE: [u8; (LAST_SYMBOL - FIRST_SYMBOL) as usize + 1] = compute_decode_table();

const fn len_slow(lz: u32) -> usize {
    let bits = 64 - lz;
    ((bits + PAYLOAD_BITS - 1) / PAYLOAD_BITS) as usize
}

const fn compute_len_table() -> [u8; 64] {
    let mut tbl = [0u8; 64];
    let mut i = 0;
    while i < tbl.len() {
        tbl[i] = len_slow(i as u32) as u8;
        i += 1;
    }
    tbl
}

const LEN_TABLE: [u8; 64] = compute_len_table();

/// Return the number of symbols required to encode `v` in `[1,MAX_LEN]`.
#[inline]
pub(crate) const fn len(v: u64) -> usize {
    LEN_TABLE[(v | 1).leading_zeros() as usize] as usize
}

/// Maps a 6-bit symbol value to its character.
#[inline(always)]
pub(crate) const fn encode_symbol(bits: u8) -> u8 {
    ALPHABET[(bits & 0x3f) as usize]
}

/// Maps a character back to its 6-bit symbol value, or `None` if it is not in the alphabet.
#[inline(always)]
pub(crate) const fn decode_symbol(c: u8) -> Option<u8> {
    let idx = c.wrapping_sub(FIRST_SYMBOL) as usize;
    if idx >= DECODE_TABLE.len() || DECODE_TABLE[idx] == INVALID {
        None
    } else {
        Some(DECODE_TABLE[idx])
    }
}

/// Encodes a raw value to `out`, returning the number of symbols written.
#[inline]
pub(crate) fn encode(mut v: u64, out: &mut [u8; MAX_LEN]) -> usize {
    let mut n = 0;
    while v > PAYLOAD_MASK {
        out[n] = encode_symbol((v & PAYLOAD_MASK) as u8 | CONTINUATION);
        v >>= PAYLOAD_BITS;
        n += 1;
    }
    out[n] = encode_symbol(v as u8);
    n + 1
}

/// Folds one decoded symbol into `value`. Returns `true` once the terminating symbol is seen.
///
/// `shift` is the bit offset of this symbol's payload.
#[inline(always)]
pub(crate) fn accumulate(value: &mut u64, shift: u32, bits: u8) -> Result<bool, Error> {
    let payload = u64::from(bits) & PAYLOAD_MASK;
    let last = bits & CONTINUATION == 0;
    if shift >= 64 || (shift > 0 && payload >> (64 - shift) != 0) {
        return Err(Error::Overflow);
    }
    *value |= payload << shift;
    if !last && shift + PAYLOAD_BITS >= 64 {
        return Err(Error::Overflow);
    }
    Ok(last)
}

/// Decodes a raw value from the front of `buf`, returning the value and the number of symbols
/// consumed.
///
/// An empty `buf` has no terminating symbol and fails with `UnterminatedValue`.
pub(crate) fn decode(buf: &[u8]) -> Result<(u64, usize), Error> {
    let mut value = 0u64;
    let mut shift = 0;
    for (i, &c) in buf.iter().enumerate() {
        let bits = decode_symbol(c).ok_or(Error::InvalidSymbol(c))?;
        if accumulate(&mut value, shift, bits)? {
            return Ok((value, i + 1));
        }
        shift += PAYLOAD_BITS;
    }
    Err(Error::UnterminatedValue)
}
