use crate::polyline::ThirdDimension;
use crate::{raw, MAX_LEN};

/// Errors that may occur when constructing, encoding or decoding a polyline.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A precision outside of `[0, 15]` was supplied at construction.
    #[error("precision {0} is outside of [0, 15]")]
    InvalidPrecision(u32),
    /// A third dimension kind larger than 7 was supplied at construction.
    #[error("third dimension kind {0} does not fit in 3 bits")]
    InvalidKind(u8),
    /// One of the reserved third dimension kinds was supplied at construction.
    #[error("third dimension kind {0:?} is reserved")]
    ReservedKind(ThirdDimension),
    /// The encoded data uses a format version this crate cannot read.
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u64),
    /// The input contains a byte that is not part of the encoding alphabet.
    #[error("invalid symbol {0:#04x}")]
    InvalidSymbol(u8),
    /// The input ended before the version and header were read.
    #[error("input ends inside the header")]
    TruncatedHeader,
    /// The input ended after some but not all coordinates of a point.
    #[error("input ends in the middle of a point")]
    TruncatedPoint,
    /// The last symbol of the input has its continuation bit set.
    #[error("input ends in the middle of a value")]
    UnterminatedValue,
    /// The value read is larger than 64 bits or than the destination type.
    #[error("value does not fit the destination type")]
    Overflow,
}

/// Base integer trait for flexible varints. Provides internal APIs to facilitate the transforms
/// in the FlexVarInt trait.
pub trait Int: Sized + Copy {
    fn to_flex_varint_raw(self) -> u64;
    fn from_flex_varint_raw(r: u64) -> Option<Self>;
}

impl Int for u64 {
    #[inline(always)]
    fn to_flex_varint_raw(self) -> u64 {
        self
    }
    #[inline(always)]
    fn from_flex_varint_raw(raw: u64) -> Option<Self> {
        Some(raw)
    }
}

/// Maps negative values to positive values, creating a sequence that alternates between negative
/// and positive values: 0, -1, 1, -2, 2 become 0, 1, 2, 3, 4.
#[inline]
pub(crate) fn zigzag_encode(v: i64) -> u64 {
    let shifted = (v as u64) << 1;
    if v < 0 {
        !shifted
    } else {
        shifted
    }
}

/// Inverts `zigzag_encode()`.
#[inline]
pub(crate) fn zigzag_decode(v: u64) -> i64 {
    let half = (v >> 1) as i64;
    if v & 1 != 0 {
        !half
    } else {
        half
    }
}

impl Int for i64 {
    #[inline(always)]
    fn to_flex_varint_raw(self) -> u64 {
        zigzag_encode(self)
    }
    #[inline(always)]
    fn from_flex_varint_raw(raw: u64) -> Option<Self> {
        Some(zigzag_decode(raw))
    }
}

macro_rules! impl_int {
    ($int:ty, $pint:ty) => {
        impl Int for $int {
            #[inline(always)]
            fn to_flex_varint_raw(self) -> u64 {
                <$pint>::from(self).to_flex_varint_raw()
            }
            #[inline(always)]
            fn from_flex_varint_raw(raw: u64) -> Option<Self> {
                let v = <$pint>::from_flex_varint_raw(raw)?;
                v.try_into().ok()
            }
        }
    };
}
impl_int!(u32, u64);

/// A single encoded value produced by `FlexVarInt::to_flex_varint_bytes()`.
pub struct EncodedFlexVarInt {
    buf: [u8; MAX_LEN],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedFlexVarInt {
    fn new(v: u64) -> Self {
        let mut enc = Self::default();
        enc.len = raw::encode(v, &mut enc.buf) as u8;
        enc
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the encoded symbols as text.
    pub fn as_str(&self) -> &str {
        // Every symbol comes from the ASCII alphabet.
        std::str::from_utf8(self.as_slice()).unwrap_or_default()
    }

    /// Returns the number of symbols used to encode the value.
    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for EncodedFlexVarInt {
    fn default() -> Self {
        Self {
            buf: [0u8; MAX_LEN],
            len: 0,
        }
    }
}

/// Trait for integer types that can be coded as flexible varints.
///
/// Signed integer types are zigzag coded before encoding/after decoding.
pub trait FlexVarInt: Sized + Copy + Int {
    /// Returns the number of symbols required to encode `self`.
    /// This value will always be in `[1, MAX_LEN]`
    #[inline]
    fn flex_varint_len(self) -> usize {
        raw::len(self.to_flex_varint_raw())
    }

    /// Decode an integer from the symbols in `buf` and return the value and number of symbols
    /// consumed.
    #[inline]
    fn decode_flex_varint(buf: &[u8]) -> Result<(Self, usize), Error> {
        let (raw, len) = raw::decode(buf)?;
        Ok((Self::from_flex_varint_raw(raw).ok_or(Error::Overflow)?, len))
    }

    /// Encode `self` to an owned buffer and return it.
    /// Use `as_slice()` or `as_str()` to access the encoded symbols.
    #[inline]
    fn to_flex_varint_bytes(self) -> EncodedFlexVarInt {
        EncodedFlexVarInt::new(self.to_flex_varint_raw())
    }
}

impl FlexVarInt for u32 {}
impl FlexVarInt for u64 {}
impl FlexVarInt for i64 {}
