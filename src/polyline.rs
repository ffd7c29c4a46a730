//! The in-memory polyline value and the checks applied when one is built.

use crate::{Error, FlexVarInt};

/// Number of decimal digits kept for a coordinate axis.
///
/// Values built with [`Precision::new`] are in `[0, 15]`. Decoding accepts whatever the header
/// carries, so a decoded 3D precision may be larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Precision(u64);

impl Precision {
    /// Largest precision accepted at construction.
    pub const MAX: Precision = Precision(15);

    pub fn new(digits: u32) -> Result<Self, Error> {
        if u64::from(digits) > Self::MAX.0 {
            Err(Error::InvalidPrecision(digits))
        } else {
            Ok(Precision(digits.into()))
        }
    }

    /// Precision taken from header bits without range checks.
    pub(crate) fn from_header_bits(bits: u64) -> Self {
        Precision(bits)
    }

    pub fn digits(self) -> u64 {
        self.0
    }

    /// Returns `10^digits`.
    pub fn scale(self) -> f64 {
        if self <= Self::MAX {
            10u64.pow(self.0 as u32) as f64
        } else {
            10f64.powi(i32::try_from(self.0).unwrap_or(i32::MAX))
        }
    }
}

/// Meaning of the third coordinate of each point.
///
/// Occupies 3 bits of the header. `Reserved1` and `Reserved2` are placeholders for future
/// revisions of the format: they are rejected when building a polyline but accepted when
/// decoding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ThirdDimension {
    /// Points are 2-dimensional.
    #[default]
    Absent = 0,
    /// E.g. floor of a building.
    Level = 1,
    /// E.g. altitude (in the air) relative to ground level or mean sea level.
    Altitude = 2,
    /// E.g. elevation above mean sea level.
    Elevation = 3,
    Reserved1 = 4,
    Reserved2 = 5,
    Custom1 = 6,
    Custom2 = 7,
}

impl ThirdDimension {
    /// Takes the low 3 bits of `bits`.
    pub(crate) fn from_bits(bits: u64) -> Self {
        match bits & 0x7 {
            0 => ThirdDimension::Absent,
            1 => ThirdDimension::Level,
            2 => ThirdDimension::Altitude,
            3 => ThirdDimension::Elevation,
            4 => ThirdDimension::Reserved1,
            5 => ThirdDimension::Reserved2,
            6 => ThirdDimension::Custom1,
            _ => ThirdDimension::Custom2,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn is_absent(self) -> bool {
        self == ThirdDimension::Absent
    }

    pub fn is_reserved(self) -> bool {
        matches!(self, ThirdDimension::Reserved1 | ThirdDimension::Reserved2)
    }
}

impl TryFrom<u8> for ThirdDimension {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 7 {
            Err(Error::InvalidKind(value))
        } else {
            Ok(Self::from_bits(value.into()))
        }
    }
}

/// A single coordinate. `z` is only meaningful when the owning polyline has a third dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
    pub z: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, z: 0.0 }
    }

    pub fn with_z(lat: f64, lng: f64, z: f64) -> Self {
        Self { lat, lng, z }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Point::new(lat, lng)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((lat, lng, z): (f64, f64, f64)) -> Self {
        Point::with_z(lat, lng, z)
    }
}

/// An immutable sequence of points together with the precision and third dimension kind used
/// to encode them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    precision2d: Precision,
    precision3d: Precision,
    third_dimension: ThirdDimension,
}

impl Polyline {
    /// Builds a polyline, rejecting the reserved third dimension kinds.
    pub fn new(
        third_dimension: ThirdDimension,
        precision2d: Precision,
        precision3d: Precision,
        points: Vec<Point>,
    ) -> Result<Self, Error> {
        if third_dimension.is_reserved() {
            return Err(Error::ReservedKind(third_dimension));
        }
        Ok(Self::from_header_parts(
            third_dimension,
            precision2d,
            precision3d,
            points,
        ))
    }

    /// Builds a 2-dimensional polyline.
    pub fn new_2d(precision2d: Precision, points: Vec<Point>) -> Self {
        Self::from_header_parts(
            ThirdDimension::Absent,
            precision2d,
            Precision::default(),
            points,
        )
    }

    /// Builds a polyline from unchecked numbers.
    ///
    /// # Errors
    ///
    /// `InvalidPrecision` if either precision is above 15, `InvalidKind` if `kind` is above 7
    /// and `ReservedKind` if `kind` is 4 or 5.
    pub fn from_raw_parts(
        kind: u8,
        precision2d: u32,
        precision3d: u32,
        points: Vec<Point>,
    ) -> Result<Self, Error> {
        let precision2d = Precision::new(precision2d)?;
        let precision3d = Precision::new(precision3d)?;
        let third_dimension = ThirdDimension::try_from(kind)?;
        Self::new(third_dimension, precision2d, precision3d, points)
    }

    /// Builds a 2-dimensional polyline from an unchecked precision.
    pub fn from_raw_parts_2d(precision2d: u32, points: Vec<Point>) -> Result<Self, Error> {
        Ok(Self::new_2d(Precision::new(precision2d)?, points))
    }

    /// Like [`Polyline::from_raw_parts`], for arguments already known to be valid.
    ///
    /// # Panics
    ///
    /// If any argument is rejected by `from_raw_parts`.
    pub fn from_raw_parts_or_panic(
        kind: u8,
        precision2d: u32,
        precision3d: u32,
        points: Vec<Point>,
    ) -> Self {
        match Self::from_raw_parts(kind, precision2d, precision3d, points) {
            Ok(polyline) => polyline,
            Err(e) => panic!("invalid polyline: {e}"),
        }
    }

    /// Like [`Polyline::from_raw_parts_2d`], for a precision already known to be valid.
    ///
    /// # Panics
    ///
    /// If `precision2d` is above 15.
    pub fn from_raw_parts_2d_or_panic(precision2d: u32, points: Vec<Point>) -> Self {
        match Self::from_raw_parts_2d(precision2d, points) {
            Ok(polyline) => polyline,
            Err(e) => panic!("invalid polyline: {e}"),
        }
    }

    pub(crate) fn from_header_parts(
        third_dimension: ThirdDimension,
        precision2d: Precision,
        precision3d: Precision,
        points: Vec<Point>,
    ) -> Self {
        Self {
            points,
            precision2d,
            precision3d,
            third_dimension,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
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

    /// Estimated length of the encoded string. Only used to size output buffers.
    ///
    /// The first point is costed at full magnitude, later points as small deltas.
    pub fn encoded_len_hint(&self) -> usize {
        let axis_len = |precision: Precision, magnitude: f64| {
            ((magnitude * precision.scale()) as u64)
                .saturating_mul(2)
                .flex_varint_len()
        };
        let mut first = 2 * axis_len(self.precision2d, 180.0);
        let mut delta = 2 * axis_len(self.precision2d, 0.001);
        if !self.third_dimension.is_absent() {
            first += axis_len(self.precision3d, 1000.0);
            delta += axis_len(self.precision3d, 1.0);
        }
        match self.points.len() {
            0 => 2,
            n => 2 + first + (n - 1) * delta,
        }
    }
}
