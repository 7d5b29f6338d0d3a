//! Encoded polyline decoding.
//!
//! Routing providers return route geometry in the encoded polyline format
//! with five decimal places of precision. Decoding happens at the boundary;
//! the planner itself only sees `RoutePoint`s.

use crate::error::PolylineError;
use crate::models::RoutePoint;

const PRECISION: f64 = 1e5;

/// Decode an encoded polyline into `(lat, lon)` points.
pub fn decode_polyline(encoded: &str) -> Result<Vec<RoutePoint>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0usize;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while index < bytes.len() {
        lat = accumulate(lat, bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::Truncated);
        }
        lon = accumulate(lon, bytes, &mut index)?;

        points.push(RoutePoint::new(lat as f64 / PRECISION, lon as f64 / PRECISION));
    }

    Ok(points)
}

/// Add the next delta to a running coordinate, rejecting sums that leave `i64`.
fn accumulate(total: i64, bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let delta = next_value(bytes, index)?;
    total
        .checked_add(delta)
        .ok_or(PolylineError::Overflow(start))
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated);
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                ch: char::from(byte),
                index: *index,
            });
        }
        if shift > 60 {
            return Err(PolylineError::Overflow(*index));
        }

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
