/// Packed bit matrix
pub mod matrix;
/// Float points and pixel positions
pub mod point;
/// Symbol record and its enumerations
pub mod qr_code;
/// Scan outcome
pub mod scan_result;

pub use matrix::BitMatrix;
pub use point::{Point, Position};
pub use qr_code::{DataType, EcLevel, MaskPattern, QrSymbol, payload_text};
pub use scan_result::ScanResult;
