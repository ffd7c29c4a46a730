//! Traits that allow writing/reading `FlexVarInt` types on `bytes::{BufMut,Buf}`.

use crate::raw::{self, PAYLOAD_BITS, PAYLOAD_MASK};
use crate::{Error, FlexVarInt};

use bytes::{Buf, BufMut};

/// Extension for `buf::BufMut` to write any `FlexVarInt` type as alphabet symbols.
pub trait FlexVarIntBufMut {
    fn put_flex_varint<FV: FlexVarInt>(&mut self, v: FV);
}

impl<Inner: BufMut> FlexVarIntBufMut for Inner {
    /// Writes a `FlexVarInt` value to the buffer.
    #[inline]
    fn put_flex_varint<FV: FlexVarInt>(&mut self, v: FV) {
        let raw = v.to_flex_varint_raw();
        if raw <= PAYLOAD_MASK {
            self.put_u8(raw::encode_symbol(raw as u8));
        } else {
            self.put_slice(v.to_flex_varint_bytes().as_slice());
        }
    }
}

fn get_flex_varint_slow<B: Buf>(buf: &mut B) -> Result<u64, Error> {
    let mut value = 0u64;
    let mut shift = 0;
    while buf.has_remaining() {
        let c = buf.get_u8();
        let bits = raw::decode_symbol(c).ok_or(Error::InvalidSymbol(c))?;
        if raw::accumulate(&mut value, shift, bits)? {
            return Ok(value);
        }
        shift += PAYLOAD_BITS;
    }
    Err(Error::UnterminatedValue)
}

/// Extension for `buf::Buf` to read any `FlexVarInt` type.
pub trait FlexVarIntBuf {
    /// Reads a `FlexVarInt` from the buffer. After a successful read, the
    /// buffer will be advanced by the number of symbols read.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexpolyline::{FlexVarIntBufMut, FlexVarIntBuf};
    ///
    /// let to_encode = [1u32, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_flex_varint(*v);
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   let decoded = buf.get_flex_varint::<u32>().unwrap();
    ///   assert_eq!(decoded, *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `UnterminatedValue` if the buffer is empty or ends while the
    /// continuation bit is still set.
    ///
    /// Returns `InvalidSymbol` if a byte is not part of the alphabet.
    ///
    /// Returns `Overflow` if the encoded value is larger than the
    /// maximum value that can be represented by the `FlexVarInt` type.
    fn get_flex_varint<FV: FlexVarInt>(&mut self) -> Result<FV, Error>;

    /// Returns an iterator over `FlexVarInt` values in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexpolyline::{FlexVarIntBufMut, FlexVarIntBuf};
    ///
    /// let to_encode = [1i64, 2, -30, -24_000];
    /// let mut buf = vec![];
    /// for n in to_encode.iter() {
    ///     buf.put_flex_varint(*n);
    /// }
    /// let mut result = vec![];
    /// let mut decode_data = buf.as_slice();
    /// for decoded in decode_data.iter_flex_varint::<i64>() {
    ///     result.push(decoded.unwrap());
    /// }
    /// assert_eq!(to_encode, result.as_slice());
    /// ```
    fn iter_flex_varint<FV: FlexVarInt>(&mut self) -> FlexVarIntIter<'_, Self, FV>
    where
        Self: Sized,
    {
        FlexVarIntIter::new(self)
    }
}

impl<Inner: Buf> FlexVarIntBuf for Inner {
    #[inline]
    fn get_flex_varint<FV: FlexVarInt>(&mut self) -> Result<FV, Error> {
        let raw = if self.chunk().len() == self.remaining() {
            let (raw, len) = raw::decode(self.chunk())?;
            self.advance(len);
            raw
        } else {
            get_flex_varint_slow(self)?
        };
        FV::from_flex_varint_raw(raw).ok_or(Error::Overflow)
    }
}

/// An iterator over `FlexVarInt` values in a `Buf`.
pub struct FlexVarIntIter<'a, B, FV> {
    buf: &'a mut B,
    _marker: std::marker::PhantomData<FV>,
}

impl<'a, B, FV> FlexVarIntIter<'a, B, FV> {
    /// Creates a new `FlexVarIntIter`.
    pub fn new(buf: &'a mut B) -> Self {
        Self {
            buf,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, B, FV> Iterator for FlexVarIntIter<'a, B, FV>
where
    B: Buf,
    FV: FlexVarInt,
{
    type Item = Result<FV, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.has_remaining() {
            Some(self.buf.get_flex_varint())
        } else {
            None
        }
    }
}
