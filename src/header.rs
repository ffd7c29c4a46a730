//! The two leading varints of every encoded polyline.
//!
//! The first varint is the format version. The second packs, from the low bits up, the 2D
//! precision (4 bits), the third dimension kind (3 bits) and the 3D precision (4 bits).

use bytes::{Buf, BufMut};

use crate::polyline::{Precision, ThirdDimension};
use crate::{Error, FlexVarIntBuf, FlexVarIntBufMut, Polyline};

/// The only format version this crate reads and writes.
pub const FORMAT_VERSION: u64 = 1;

const PRECISION2D_MASK: u64 = 0xf;
const KIND_SHIFT: u32 = 4;
const PRECISION3D_SHIFT: u32 = 7;

/// Header fields of an encoded polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    precision2d: Precision,
    precision3d: Precision,
    third_dimension: ThirdDimension,
}

impl Header {
    pub(crate) fn of(polyline: &Polyline) -> Self {
        Self {
            precision2d: polyline.precision2d(),
            precision3d: polyline.precision3d(),
            third_dimension: polyline.third_dimension(),
        }
    }

    /// Decodes only the header of `encoded`, ignoring the points that follow.
    ///
    /// ```
    /// use flexpolyline::{Header, ThirdDimension};
    ///
    /// let header = Header::decode("BlBoz5xJ67i1BU").unwrap();
    /// assert_eq!(header.third_dimension(), ThirdDimension::Altitude);
    /// assert_eq!(header.precision2d().digits(), 5);
    /// ```
    pub fn decode(encoded: &str) -> Result<Self, Error> {
        Self::get(&mut encoded.as_bytes())
    }

    pub fn precision2d(&self) -> Precision {
        self.precision2d
    }

    pub fn precision3d(&self) -> Precision {
        self.precision3d
    }

    pub fn third_dimension(&self) -> ThirdDimension {
        self.third_dimension
    }

    fn content(&self) -> u64 {
        (self.precision3d.digits() << PRECISION3D_SHIFT)
            | (u64::from(self.third_dimension.to_u8()) << KIND_SHIFT)
            | self.precision2d.digits()
    }

    fn from_content(content: u64) -> Self {
        Self {
            precision2d: Precision::from_header_bits(content & PRECISION2D_MASK),
            precision3d: Precision::from_header_bits(content >> PRECISION3D_SHIFT),
            third_dimension: ThirdDimension::from_bits(content >> KIND_SHIFT),
        }
    }

    pub(crate) fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_flex_varint(FORMAT_VERSION);
        buf.put_flex_varint(self.content());
    }

    pub(crate) fn get<B: Buf>(buf: &mut B) -> Result<Self, Error> {
        if !buf.has_remaining() {
            return Err(Error::TruncatedHeader);
        }
        let version = buf.get_flex_varint::<u64>()?;
        if version != FORMAT_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }
        if !buf.has_remaining() {
            return Err(Error::TruncatedHeader);
        }
        let header = Self::from_content(buf.get_flex_varint::<u64>()?);
        tracing::trace!(?header, "decoded polyline header");
        Ok(header)
    }
}

/// Returns the third dimension kind of `encoded` without decoding its points.
pub fn peek_third_dimension(encoded: &str) -> Result<ThirdDimension, Error> {
    Header::decode(encoded).map(|header| header.third_dimension())
}
