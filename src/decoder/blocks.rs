use crate::decoder::reed_solomon::ReedSolomonDecoder;
use crate::decoder::tables::ec_block_info;
use crate::error::DecodeError;
use crate::models::EcLevel;

/// Split interleaved codewords into blocks, correct each, and concatenate
/// the data portions. Short blocks come first in the interleave order.
pub fn deinterleave_and_correct(
    codewords: &[u8],
    version: u8,
    ec_level: EcLevel,
) -> Result<Vec<u8>, DecodeError> {
    let info = ec_block_info(version, ec_level).ok_or(DecodeError::InvalidVersion)?;
    let total = codewords.len();
    let ecc_total = info.num_blocks * info.ecc_per_block;
    if total <= ecc_total {
        return Err(DecodeError::DataUnderflow);
    }
    let data_total = total - ecc_total;

    let num_long_blocks = data_total % info.num_blocks;
    let num_short_blocks = info.num_blocks - num_long_blocks;
    let short_len = data_total / info.num_blocks;

    let data_len = |b: usize| {
        if b < num_short_blocks {
            short_len
        } else {
            short_len + 1
        }
    };

    let mut blocks: Vec<Vec<u8>> = (0..info.num_blocks)
        .map(|b| Vec::with_capacity(data_len(b) + info.ecc_per_block))
        .collect();

    let mut source = codewords.iter().copied();
    for i in 0..=short_len {
        for (b, block) in blocks.iter_mut().enumerate() {
            if i < data_len(b) {
                block.push(source.next().ok_or(DecodeError::DataUnderflow)?);
            }
        }
    }
    for _ in 0..info.ecc_per_block {
        for block in blocks.iter_mut() {
            block.push(source.next().ok_or(DecodeError::DataUnderflow)?);
        }
    }

    let rs = ReedSolomonDecoder::new(info.ecc_per_block);
    let mut data = Vec::with_capacity(data_total);
    for (b, block) in blocks.iter_mut().enumerate() {
        rs.decode(block)?;
        data.extend_from_slice(&block[..data_len(b)]);
    }
    Ok(data)
}
