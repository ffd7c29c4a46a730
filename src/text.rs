//! Human readable form of a polyline: `{(5); [(50.10228, 8.69821), ]}` for 2D data and
//! `{(5, 0, 2); [(50.10228, 8.69821, 10), ]}` for 3D data, with the header listing the 2D
//! precision, the 3D precision and the third dimension kind.

use std::fmt;
use std::str::FromStr;

use crate::polyline::{Point, Precision};
use crate::{Error, Polyline};

/// Errors that may occur when parsing the text form of a polyline.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {0}")]
    Missing(&'static str),
    #[error("unexpected trailing component `{0}`")]
    Trailing(String),
    #[error("`{0}` is not a number")]
    Number(String),
    #[error(transparent)]
    Polyline(#[from] Error),
}

fn fmt_precision(p: Precision) -> usize {
    p.min(Precision::MAX).digits() as usize
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec_2d = f.precision().unwrap_or(fmt_precision(self.precision2d()));
        let prec_3d = f.precision().unwrap_or(fmt_precision(self.precision3d()));
        let third = !self.third_dimension().is_absent();
        if third {
            write!(
                f,
                "{{({}, {}, {}); [",
                self.precision2d().digits(),
                self.precision3d().digits(),
                self.third_dimension().to_u8()
            )?;
        } else {
            write!(f, "{{({}); [", self.precision2d().digits())?;
        }
        for p in self.points() {
            write!(f, "({:.*}, {:.*}", prec_2d, p.lat, prec_2d, p.lng)?;
            if third {
                write!(f, ", {:.*}", prec_3d, p.z)?;
            }
            write!(f, "), ")?;
        }
        write!(f, "]}}")
    }
}

fn strip<'a>(s: &'a str, prefix: &'static str, suffix: &'static str) -> Result<&'a str, ParseError> {
    s.strip_prefix(prefix)
        .and_then(|s| s.strip_suffix(suffix))
        .ok_or(ParseError::Missing(prefix))
}

fn number<T: FromStr>(s: Option<&str>, what: &'static str) -> Result<T, ParseError> {
    let s = s.ok_or(ParseError::Missing(what))?;
    s.parse().map_err(|_| ParseError::Number(s.to_string()))
}

fn no_trailing<'a>(mut rest: impl Iterator<Item = &'a str>) -> Result<(), ParseError> {
    match rest.next() {
        Some(trail) => Err(ParseError::Trailing(trail.to_string())),
        None => Ok(()),
    }
}

impl FromStr for Polyline {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = strip(s.trim(), "{", "}")?;
        let (header, data) = body.split_once("; ").ok_or(ParseError::Missing("; "))?;

        let mut fields = strip(header, "(", ")")?.split(", ");
        let precision2d = number::<u32>(fields.next(), "2d precision")?;
        let third = match fields.next() {
            None => None,
            Some(p3) => Some((
                number::<u32>(Some(p3), "3d precision")?,
                number::<u8>(fields.next(), "third dimension kind")?,
            )),
        };
        no_trailing(fields)?;

        let data = strip(data, "[", "]")?;
        // The separator after the last point may be left out.
        let data = data.strip_suffix(')').unwrap_or(data);
        let mut points = Vec::new();
        for coord in data.split_terminator("), ") {
            let mut values = coord
                .strip_prefix('(')
                .ok_or(ParseError::Missing("("))?
                .split(", ");
            let mut point = Point::new(
                number(values.next(), "latitude")?,
                number(values.next(), "longitude")?,
            );
            if third.is_some() {
                point.z = number(values.next(), "third dimension")?;
            }
            no_trailing(values)?;
            points.push(point);
        }

        let polyline = match third {
            Some((precision3d, kind)) => {
                Polyline::from_raw_parts(kind, precision2d, precision3d, points)?
            }
            None => Polyline::from_raw_parts_2d(precision2d, points)?,
        };
        Ok(polyline)
    }
}
