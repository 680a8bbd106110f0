use super::Position;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl EcLevel {
    /// Level from the two bits stored in format information (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            1 => EcLevel::L,
            0 => EcLevel::M,
            3 => EcLevel::Q,
            _ => EcLevel::H,
        }
    }

    /// The two bits this level occupies in format information
    pub fn format_bits(&self) -> u8 {
        match self {
            EcLevel::L => 1,
            EcLevel::M => 0,
            EcLevel::Q => 3,
            EcLevel::H => 2,
        }
    }

    /// Row into the block tables, ordered L, M, Q, H
    pub(crate) fn table_index(&self) -> usize {
        match self {
            EcLevel::L => 0,
            EcLevel::M => 1,
            EcLevel::Q => 2,
            EcLevel::H => 3,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from the low three bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MaskPattern::Pattern0,
            1 => MaskPattern::Pattern1,
            2 => MaskPattern::Pattern2,
            3 => MaskPattern::Pattern3,
            4 => MaskPattern::Pattern4,
            5 => MaskPattern::Pattern5,
            6 => MaskPattern::Pattern6,
            _ => MaskPattern::Pattern7,
        }
    }

    /// Pattern id, 0-7
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Highest-valued segment mode present in a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    /// Digits only
    Numeric = 1,
    /// 0-9, A-Z, space and $%*+-./:
    Alphanumeric = 2,
    /// Arbitrary 8-bit bytes
    Byte = 4,
    /// Shift-JIS double-byte characters
    Kanji = 8,
}

impl DataType {
    /// Numeric value of the mode indicator
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// A decoded symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// Grid corners in the image: top-left, top-right, bottom-right, bottom-left of the symbol
    pub corners: [Position; 4],
    /// Grid size in modules
    pub size: usize,
    /// Version number (1-40)
    pub version: u8,
    /// Error correction level
    pub ecc_level: EcLevel,
    /// Mask pattern applied to data modules
    pub mask: MaskPattern,
    /// Highest-valued data type among the symbol's segments
    pub data_type: DataType,
    /// ECI designator, when the symbol declares one
    pub eci: Option<u32>,
    /// Payload as text
    pub payload: String,
    /// Payload length in bytes
    pub payload_len: usize,
    /// Raw decoded payload bytes
    pub bytes: Vec<u8>,
}

/// Interpret payload bytes as text: UTF-8 when valid, Latin-1 otherwise
pub fn payload_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
