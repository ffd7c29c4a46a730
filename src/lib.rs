//! This crate implements the flexible polyline encoding, a compact printable form for
//! sequences of 2D or 3D coordinates.
//!
//! Each coordinate is scaled by `10^precision`, rounded to an integer and written as the
//! difference to the previous point. Differences are [Zigzag](https://en.wikipedia.org/wiki/Variable-length_quantity#Zigzag_encoding)
//! coded so that small negative numbers stay small, then split into 5-bit chunks, least
//! significant first. Every chunk becomes one character of the URL-safe base64 alphabet, with
//! bit `0x20` flagging that more chunks follow. A header holding the format version, the 2D
//! precision, the third dimension kind and the 3D precision comes first.
//!
//! The `FlexVarInt` trait is implemented for `u64`, `u32` and `i64` and codes single
//! values directly to/from byte slices; traits extend `bytes::{Buf,BufMut}` as well.
//!
//! ```
//! use flexpolyline::{Point, Polyline, ThirdDimension};
//!
//! let polyline = Polyline::from_raw_parts(
//!     ThirdDimension::Altitude.to_u8(),
//!     5,
//!     0,
//!     vec![
//!         Point::with_z(50.10228, 8.69821, 10.0),
//!         Point::with_z(50.10201, 8.69567, 20.0),
//!         Point::with_z(50.10063, 8.69150, 30.0),
//!         Point::with_z(50.09878, 8.68752, 40.0),
//!     ],
//! )
//! .unwrap();
//! let encoded = polyline.encode();
//! assert_eq!(encoded, "BlBoz5xJ67i1BU1B7PUzIhaUxL7YU");
//!
//! let decoded = Polyline::decode(&encoded).unwrap();
//! assert_eq!(decoded.third_dimension(), ThirdDimension::Altitude);
//! assert_eq!(decoded.points().len(), 4);
//! assert_eq!(
//!     flexpolyline::peek_third_dimension(&encoded).unwrap(),
//!     ThirdDimension::Altitude
//! );
//! ```
mod bytes;
pub(crate) mod core;
mod header;
mod io;
mod polyline;
mod raw;
mod stream;
mod text;

pub use crate::bytes::{FlexVarIntBuf, FlexVarIntBufMut, FlexVarIntIter};
pub use crate::core::{EncodedFlexVarInt, Error, FlexVarInt};
pub use crate::header::{peek_third_dimension, Header, FORMAT_VERSION};
pub use crate::io::{read_polyline, write_polyline};
pub use crate::polyline::{Point, Polyline, Precision, ThirdDimension};
pub use crate::stream::{decode, encode};
pub use crate::text::ParseError;

/// Maximum number of symbols a single encoded value will occupy.
pub const MAX_LEN: usize = 13;
