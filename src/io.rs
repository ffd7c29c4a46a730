//! Extensions to `std::io` traits to support reading/writing encoded polylines, one per line.
use std::io::{BufRead, Error, ErrorKind, Result, Write};

use crate::Polyline;

impl From<crate::Error> for Error {
    fn from(value: crate::Error) -> Self {
        let kind = match value {
            crate::Error::TruncatedHeader
            | crate::Error::TruncatedPoint
            | crate::Error::UnterminatedValue => ErrorKind::UnexpectedEof,
            _ => ErrorKind::InvalidData,
        };
        Error::new(kind, value)
    }
}

/// Encode `polyline` and write it to `w` followed by a newline. Returns the number of bytes
/// written.
#[inline]
pub fn write_polyline(polyline: &Polyline, w: &mut impl Write) -> Result<usize> {
    let encoded = polyline.encode();
    w.write_all(encoded.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(encoded.len() + 1)
}

/// Read one line from `r` and decode it. Returns `Ok(None)` at end of input.
pub fn read_polyline(r: &mut impl BufRead) -> Result<Option<Polyline>> {
    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(Polyline::decode(line.trim_end())?))
}
