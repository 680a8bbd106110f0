//! The engine boundary driven by the decoding context
//!
//! An [`Engine`] owns the actual image processing: it allocates a working
//! context, exposes a scan buffer for the caller's pixels, locates symbol
//! candidates when loading ends, and decodes one candidate at a time.
//! [`NativeEngine`] is the built-in implementation.

use crate::error::{DecodeError, Result};
use crate::models::{DataType, EcLevel, MaskPattern, Position};

mod native;

pub use native::{NativeContext, NativeEngine};

/// Geometry every candidate handle reports
pub trait CandidateRegion {
    /// Image positions of the symbol's four corners
    fn corners(&self) -> [Position; 4];
    /// Grid size in modules
    fn size(&self) -> usize;
}

/// Fields an engine extracts from a successfully decoded candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFields {
    /// Version number (1-40)
    pub version: u8,
    /// Error correction level
    pub ecc_level: EcLevel,
    /// Mask pattern
    pub mask: MaskPattern,
    /// Highest-valued data type among the segments
    pub data_type: DataType,
    /// ECI designator, if any
    pub eci: Option<u32>,
    /// Raw payload bytes
    pub payload: Vec<u8>,
}

/// A QR detection and decoding engine.
///
/// The decoding context calls these in a fixed order: `create_context`,
/// `resize`, `begin_load`, `end_load`, then any number of `count`,
/// `extract` and `decode`, and finally `destroy` exactly once.
pub trait Engine {
    /// Working memory for one scan at a time
    type Context;
    /// Handle for one located symbol
    type Candidate: CandidateRegion;

    /// Engine version identifier
    fn version(&self) -> &'static str;

    /// Allocate a fresh context
    fn create_context(&self) -> Result<Self::Context>;

    /// Size the context's scan buffer to exactly `width * height` bytes
    fn resize(&self, ctx: &mut Self::Context, width: usize, height: usize) -> Result<()>;

    /// Release the context
    fn destroy(&self, ctx: Self::Context);

    /// The scan buffer, exactly `width * height` bytes, row-major
    fn begin_load<'c>(&self, ctx: &'c mut Self::Context) -> &'c mut [u8];

    /// Locate candidates in the loaded image
    fn end_load(&self, ctx: &mut Self::Context);

    /// Number of candidates found by the last `end_load`
    fn count(&self, ctx: &Self::Context) -> usize;

    /// Candidate at `index`, None when out of range
    fn extract(&self, ctx: &Self::Context, index: usize) -> Option<Self::Candidate>;

    /// Decode one candidate
    fn decode(&self, candidate: &Self::Candidate) -> std::result::Result<DecodedFields, DecodeError>;
}
