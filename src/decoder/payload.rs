//! Segment parsing of corrected data codewords

use crate::decoder::modes::alphanumeric::AlphanumericDecoder;
use crate::decoder::modes::byte::ByteDecoder;
use crate::decoder::modes::kanji::KanjiDecoder;
use crate::decoder::modes::numeric::NumericDecoder;
use crate::decoder::modes::BitReader;
use crate::error::DecodeError;
use crate::models::DataType;

const MODE_TERMINATOR: u32 = 0;
const MODE_STRUCTURED_APPEND: u32 = 3;
const MODE_FNC1_FIRST: u32 = 5;
const MODE_ECI: u32 = 7;
const MODE_FNC1_SECOND: u32 = 9;

/// Decoded content of one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Concatenated segment bytes
    pub bytes: Vec<u8>,
    /// Highest mode seen, Byte when there are no segments
    pub data_type: DataType,
    /// Last ECI designator, if any
    pub eci: Option<u32>,
}

/// Character count indicator width for a mode, by version band
fn char_count_bits(data_type: DataType, version: u8) -> usize {
    let band = match version {
        1..=9 => 0,
        10..=26 => 1,
        _ => 2,
    };
    let widths = match data_type {
        DataType::Numeric => [10, 12, 14],
        DataType::Alphanumeric => [9, 11, 13],
        DataType::Byte => [8, 16, 16],
        DataType::Kanji => [8, 10, 12],
    };
    widths[band]
}

fn data_type_for_mode(mode: u32) -> Option<DataType> {
    match mode {
        1 => Some(DataType::Numeric),
        2 => Some(DataType::Alphanumeric),
        4 => Some(DataType::Byte),
        8 => Some(DataType::Kanji),
        _ => None,
    }
}

/// Upper bound on bytes a segment of `count` characters expands to
fn expanded_len(data_type: DataType, count: usize) -> usize {
    match data_type {
        DataType::Kanji => count * 2,
        _ => count,
    }
}

fn read_eci(reader: &mut BitReader<'_>) -> Result<u32, DecodeError> {
    let first = reader.read_bits(8)?;
    if first & 0x80 == 0 {
        Ok(first)
    } else if first & 0xC0 == 0x80 {
        Ok(((first & 0x3F) << 8) | reader.read_bits(8)?)
    } else if first & 0xE0 == 0xC0 {
        Ok(((first & 0x1F) << 16) | reader.read_bits(16)?)
    } else {
        Err(DecodeError::UnknownDataType)
    }
}

/// Walk the segment list until the terminator or the end of data.
///
/// A symbol with no data segment reports `DataType::Byte` and an empty payload.
pub fn parse_payload(data: &[u8], version: u8, max_len: usize) -> Result<Payload, DecodeError> {
    let mut reader = BitReader::new(data);
    let mut bytes = Vec::new();
    let mut data_type: Option<DataType> = None;
    let mut eci = None;

    while reader.remaining() >= 4 {
        let mode = reader.read_bits(4)?;
        match mode {
            MODE_TERMINATOR => break,
            MODE_ECI => eci = Some(read_eci(&mut reader)?),
            MODE_STRUCTURED_APPEND => {
                // index, total and parity
                reader.read_bits(16)?;
            }
            MODE_FNC1_FIRST => {}
            MODE_FNC1_SECOND => {
                reader.read_bits(8)?;
            }
            _ => {
                let segment = data_type_for_mode(mode).ok_or(DecodeError::UnknownDataType)?;
                let count = reader.read_bits(char_count_bits(segment, version))? as usize;
                if bytes.len() + expanded_len(segment, count) > max_len {
                    return Err(DecodeError::DataOverflow);
                }
                match segment {
                    DataType::Numeric => NumericDecoder::decode(&mut reader, count, &mut bytes)?,
                    DataType::Alphanumeric => {
                        AlphanumericDecoder::decode(&mut reader, count, &mut bytes)?
                    }
                    DataType::Byte => ByteDecoder::decode(&mut reader, count, &mut bytes)?,
                    DataType::Kanji => KanjiDecoder::decode(&mut reader, count, &mut bytes)?,
                }
                data_type = data_type.max(Some(segment));
            }
        }
    }

    Ok(Payload {
        bytes,
        data_type: data_type.unwrap_or(DataType::Byte),
        eci,
    })
}
