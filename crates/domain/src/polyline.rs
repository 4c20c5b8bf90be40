//! Encoded polyline codec
//!
//! Implements the standard polyline algorithm used by routing providers for
//! compact path geometry: each coordinate is scaled by 1e5, stored as the
//! delta to the previous point, zig-zag encoded and written as 5-bit chunks
//! offset into the printable ASCII range (`'?'..='~'`).
//!
//! Decoding is lossless up to the 1e-5 degree precision of the format.
//!
//! # Examples
//!
//! ```
//! use domain::polyline;
//!
//! let coords = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").expect("valid polyline");
//! assert_eq!(coords.len(), 3);
//! assert!((coords[0][0] - 38.5).abs() < 1e-9);
//! assert!((coords[0][1] + 120.2).abs() < 1e-9);
//!
//! assert_eq!(polyline::encode(&coords), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! ```

use thiserror::Error;

/// Scale factor of the standard (precision 5) encoding
const FACTOR: f64 = 1e5;

/// Offset added to every 5-bit chunk to land in printable ASCII
const CHAR_OFFSET: u8 = 63;

/// Continuation bit of a chunk
const CONTINUATION: i64 = 0x20;

/// Largest shift at which another 5-bit chunk still fits in an `i64`
const MAX_SHIFT: u32 = 55;

/// Errors produced while decoding an encoded polyline
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PolylineError {
    /// A byte outside of the `'?'..='~'` range
    #[error("unexpected byte 0x{byte:02x} at position {position}")]
    InvalidByte { position: usize, byte: u8 },

    /// Input ended inside a value or after a lone latitude
    #[error("truncated value starting at position {position}")]
    Truncated { position: usize },

    /// A value does not fit in 64 bits
    #[error("value starting at position {position} overflows")]
    Overflow { position: usize },
}

/// Decode an encoded polyline into ordered `[lat, lon]` pairs
///
/// An empty input decodes to an empty sequence; callers that require at
/// least one point must check for that themselves.
///
/// # Errors
///
/// Returns a [`PolylineError`] when the input is not a well-formed polyline.
pub fn decode(encoded: &str) -> Result<Vec<[f64; 2]>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(PolylineError::Truncated { position: next });
        }
        let (delta_lon, next) = decode_value(bytes, next)?;

        lat = lat
            .checked_add(delta_lat)
            .ok_or(PolylineError::Overflow { position: index })?;
        lon = lon
            .checked_add(delta_lon)
            .ok_or(PolylineError::Overflow { position: index })?;

        coords.push([lat as f64 / FACTOR, lon as f64 / FACTOR]);
        index = next;
    }

    Ok(coords)
}

/// Encode ordered `[lat, lon]` pairs as a polyline
#[must_use]
pub fn encode(coords: &[[f64; 2]]) -> String {
    let mut out = String::with_capacity(coords.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for &[lat, lon] in coords {
        let lat = (lat * FACTOR).round() as i64;
        let lon = (lon * FACTOR).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

/// Read one zig-zag varint starting at `start`; returns the value and the
/// index just past it
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::Truncated { position: start });
        };
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidByte {
                position: index,
                byte,
            });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { position: start });
        }

        let chunk = i64::from(byte - CHAR_OFFSET);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;

        if chunk < CONTINUATION {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, index))
}

fn encode_value(value: i64, out: &mut String) {
    let mut rest = if value < 0 { !(value << 1) } else { value << 1 };
    while rest >= CONTINUATION {
        out.push(char::from(
            ((CONTINUATION | (rest & 0x1f)) as u8) + CHAR_OFFSET,
        ));
        rest >>= 5;
    }
    out.push(char::from(rest as u8 + CHAR_OFFSET));
}
