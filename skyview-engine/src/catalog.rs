//! Star catalog payloads.
//!
//! A host hands the catalog over either as typed records or as one flat `f32`
//! buffer with four values per star, `(ra_deg, dec_deg, mag, hip)`. The flat
//! form is what script runtimes can share without per-object marshalling.

use crate::error::{EngineError, EngineResult};
use crate::types::StarIn;

/// Values per star in a packed catalog buffer.
pub const CATALOG_STRIDE: usize = 4;

/// A catalog as supplied by a host.
#[derive(Debug, Clone, Copy)]
pub enum StarPayload<'a> {
    Records(&'a [StarIn]),
    Packed(&'a [f32]),
}

impl<'a> StarPayload<'a> {
    /// Decodes the payload into catalog records, preserving order.
    pub fn to_stars(&self) -> EngineResult<Vec<StarIn>> {
        match self {
            StarPayload::Records(stars) => Ok(stars.to_vec()),
            StarPayload::Packed(data) => from_packed(data),
        }
    }
}

impl<'a> From<&'a [StarIn]> for StarPayload<'a> {
    fn from(stars: &'a [StarIn]) -> Self {
        StarPayload::Records(stars)
    }
}

impl<'a> From<&'a [f32]> for StarPayload<'a> {
    fn from(data: &'a [f32]) -> Self {
        StarPayload::Packed(data)
    }
}

/// Decodes a packed `(ra, dec, mag, hip)` buffer.
///
/// # Errors
/// Returns [`EngineError::InputError`] if the length is not a multiple of 4.
pub fn from_packed(data: &[f32]) -> EngineResult<Vec<StarIn>> {
    if data.len() % CATALOG_STRIDE != 0 {
        return Err(EngineError::input_error(format!(
            "Star buffer length must be a multiple of {}, got {}",
            CATALOG_STRIDE,
            data.len()
        )));
    }

    Ok(data
        .chunks_exact(CATALOG_STRIDE)
        .map(|c| StarIn::new(c[0] as f64, c[1] as f64, c[2] as f64, c[3] as i32))
        .collect())
}

/// Packs records into the flat layout accepted by [`from_packed`].
pub fn pack(stars: &[StarIn]) -> Vec<f32> {
    let mut packed = Vec::with_capacity(stars.len() * CATALOG_STRIDE);
    for star in stars {
        packed.extend_from_slice(&[
            star.ra_deg as f32,
            star.dec_deg as f32,
            star.mag as f32,
            star.hip as f32,
        ]);
    }
    packed
}
