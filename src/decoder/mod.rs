//! QR code decoding modules
//!
//! This module contains all the logic for decoding a sampled module grid:
//! - Error correction (Reed-Solomon for data, BCH for format and version)
//! - Format and version information extraction
//! - Bitstream extraction, unmasking and block deinterleaving
//! - Segment parsing (numeric, alphanumeric, byte, kanji, ECI)

use tracing::trace;

use crate::engine::DecodedFields;
use crate::error::DecodeError;
use crate::models::BitMatrix;

/// Bitstream extraction from the module grid
pub mod bitstream;
/// Block deinterleaving and per-block correction
pub mod blocks;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// Data mode decoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Segment parser
pub mod payload;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version information extraction (versions 7-40)
pub mod version;

use format::FormatInfo;
use tables::version_for_size;
use version::VersionInfo;

/// Decode a sampled grid, retrying on its transpose when error correction
/// fails. The first error is kept if the retry fails too.
pub fn decode_grid(grid: &BitMatrix, max_payload: usize) -> Result<DecodedFields, DecodeError> {
    match decode_oriented(grid, max_payload) {
        Err(err @ (DecodeError::FormatEcc | DecodeError::DataEcc)) => {
            trace!(error = %err, "retrying on mirrored grid");
            decode_oriented(&grid.transposed(), max_payload).map_err(|_| err)
        }
        result => result,
    }
}

fn decode_oriented(grid: &BitMatrix, max_payload: usize) -> Result<DecodedFields, DecodeError> {
    if grid.width() != grid.height() {
        return Err(DecodeError::InvalidGridSize);
    }
    let version = version_for_size(grid.width()).ok_or(DecodeError::InvalidGridSize)?;
    let format = FormatInfo::extract(grid)?;

    // An unreadable version block falls back to the grid size
    if version >= 7 {
        if let Some(stored) = VersionInfo::extract(grid) {
            if stored != version {
                return Err(DecodeError::InvalidVersion);
            }
        }
    }

    let codewords = bitstream::read_codewords(grid, version, format.mask_pattern);
    let data = blocks::deinterleave_and_correct(&codewords, version, format.ec_level)?;
    let payload = payload::parse_payload(&data, version, max_payload)?;

    trace!(
        version,
        ec_level = ?format.ec_level,
        mask = format.mask_pattern.id(),
        bytes = payload.bytes.len(),
        "decoded grid"
    );

    Ok(DecodedFields {
        version,
        ecc_level: format.ec_level,
        mask: format.mask_pattern,
        data_type: payload.data_type,
        eci: payload.eci,
        payload: payload.bytes,
    })
}
