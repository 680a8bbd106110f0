//! qr_reveal - multi-symbol QR code scanning for grayscale images
//!
//! A pure Rust QR code locator and decoder. One call scans an 8-bit
//! grayscale buffer, decodes every symbol it can, and reports how many
//! symbols were found versus how many decoded.
//!
//! ```
//! let pixels = vec![255u8; 64 * 48];
//! let result = qr_reveal::reveal(&pixels, 64, 48).unwrap();
//! assert_eq!(result.found, 0);
//! assert_eq!(result.usable, 0);
//! ```
//!
//! The scan pipeline runs behind the [`Engine`] trait. [`NativeEngine`] is
//! the built-in implementation; [`Scanner::with_engine`] accepts any other.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Engine limits with environment overrides
pub mod config;
/// Decoding context lifecycle and candidate access
pub mod context;
/// QR code decoding modules (error correction, format extraction, data modes)
pub mod decoder;
/// QR code detection modules (finder patterns, grouping, grid sampling)
pub mod detector;
/// The engine boundary and the native engine
pub mod engine;
/// Error types
pub mod error;
/// Core data structures (QrSymbol, ScanResult, BitMatrix, Point, etc.)
pub mod models;
/// Scan orchestration
pub mod scanner;
/// Utility functions (binarization, geometry, scan buffer)
pub mod utils;

pub use config::EngineConfig;
pub use context::{Candidates, DecodingContext, Stage};
pub use engine::{CandidateRegion, DecodedFields, Engine, NativeContext, NativeEngine};
pub use error::{DecodeError, Error, Result};
pub use models::{BitMatrix, DataType, EcLevel, MaskPattern, Point, Position, QrSymbol, ScanResult};
pub use scanner::{reveal, version, Frame, Scanner};
