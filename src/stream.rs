//! Delta coding of the point sequence that follows the header.

use bytes::{Buf, BufMut};

use crate::header::Header;
use crate::polyline::{Point, Precision};
use crate::{Error, FlexVarIntBuf, FlexVarIntBufMut, Polyline};

/// Running state for one axis while encoding.
struct DeltaEncoder {
    scale: f64,
    last: i64,
}

impl DeltaEncoder {
    fn new(precision: Precision) -> Self {
        Self {
            scale: precision.scale(),
            last: 0,
        }
    }

    #[inline]
    fn put<B: BufMut>(&mut self, buf: &mut B, value: f64) {
        let scaled = (value * self.scale).round() as i64;
        buf.put_flex_varint(scaled.wrapping_sub(self.last));
        self.last = scaled;
    }
}

/// Running state for one axis while decoding.
struct DeltaDecoder {
    scale: f64,
    last: i64,
}

impl DeltaDecoder {
    fn new(precision: Precision) -> Self {
        Self {
            scale: precision.scale(),
            last: 0,
        }
    }

    #[inline]
    fn get<B: Buf>(&mut self, buf: &mut B) -> Result<f64, Error> {
        let delta = buf.get_flex_varint::<i64>()?;
        self.last = self.last.wrapping_add(delta);
        Ok(self.last as f64 / self.scale)
    }

    /// Reads a coordinate that must be present because the point has already started.
    #[inline]
    fn get_continued<B: Buf>(&mut self, buf: &mut B) -> Result<f64, Error> {
        if !buf.has_remaining() {
            return Err(Error::TruncatedPoint);
        }
        self.get(buf)
    }
}

fn put_points<B: BufMut>(buf: &mut B, header: &Header, points: &[Point]) {
    let mut lat = DeltaEncoder::new(header.precision2d());
    let mut lng = DeltaEncoder::new(header.precision2d());
    let mut z = (!header.third_dimension().is_absent())
        .then(|| DeltaEncoder::new(header.precision3d()));
    for point in points {
        lat.put(buf, point.lat);
        lng.put(buf, point.lng);
        if let Some(z) = z.as_mut() {
            z.put(buf, point.z);
        }
    }
}

fn get_points<B: Buf>(buf: &mut B, header: &Header) -> Result<Vec<Point>, Error> {
    let dimensions = if header.third_dimension().is_absent() {
        2
    } else {
        3
    };
    let mut points = Vec::with_capacity(buf.remaining() / dimensions);
    let mut lat = DeltaDecoder::new(header.precision2d());
    let mut lng = DeltaDecoder::new(header.precision2d());
    let mut z = (dimensions == 3).then(|| DeltaDecoder::new(header.precision3d()));
    while buf.has_remaining() {
        let mut point = Point::new(lat.get(buf)?, lng.get_continued(buf)?);
        if let Some(z) = z.as_mut() {
            point.z = z.get_continued(buf)?;
        }
        points.push(point);
    }
    Ok(points)
}

impl Polyline {
    /// Encodes the polyline into a string.
    ///
    /// Coordinates are rounded to the polyline's precision, so the transformation is lossy.
    ///
    /// ```
    /// use flexpolyline::{Point, Polyline, Precision};
    ///
    /// let polyline = Polyline::new_2d(
    ///     Precision::new(5).unwrap(),
    ///     vec![Point::new(50.10228, 8.69821), Point::new(50.10201, 8.69567)],
    /// );
    /// assert_eq!(polyline.encode(), "BFoz5xJ67i1B1B7P");
    /// ```
    pub fn encode(&self) -> String {
        let mut buf = Vec::with_capacity(self.encoded_len_hint());
        let header = Header::of(self);
        header.put(&mut buf);
        put_points(&mut buf, &header, self.points());
        buf.into_iter().map(char::from).collect()
    }

    /// Decodes an encoded polyline.
    ///
    /// Header fields are taken as found, so reserved kinds and 3D precisions above 15 are
    /// accepted here even though [`Polyline::new`] rejects them.
    pub fn decode<S: AsRef<str>>(encoded: S) -> Result<Self, Error> {
        let mut buf = encoded.as_ref().as_bytes();
        let decoded = Header::get(&mut buf).and_then(|header| {
            let points = get_points(&mut buf, &header)?;
            Ok(Polyline::from_header_parts(
                header.third_dimension(),
                header.precision2d(),
                header.precision3d(),
                points,
            ))
        });
        if let Err(error) = &decoded {
            tracing::debug!(%error, "failed to decode polyline");
        }
        decoded
    }
}

/// Encodes `polyline` into a string. See [`Polyline::encode`].
pub fn encode(polyline: &Polyline) -> String {
    polyline.encode()
}

/// Decodes an encoded polyline. See [`Polyline::decode`].
pub fn decode<S: AsRef<str>>(encoded: S) -> Result<Polyline, Error> {
    Polyline::decode(encoded)
}
