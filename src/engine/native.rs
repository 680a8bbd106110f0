use tracing::{debug, trace};

use super::{CandidateRegion, DecodedFields, Engine};
use crate::config::EngineConfig;
use crate::decoder::decode_grid;
use crate::detector::grid::SampledGrid;
use crate::detector::locate;
use crate::error::{DecodeError, Result};
use crate::models::Position;
use crate::utils::scan_buffer::ScanBuffer;

/// Pure-Rust engine: Otsu/adaptive thresholding, finder grouping,
/// perspective sampling and a full QR decoder
#[derive(Debug, Clone, Default)]
pub struct NativeEngine {
    config: EngineConfig,
}

/// Working memory of [`NativeEngine`]
#[derive(Debug)]
pub struct NativeContext {
    config: EngineConfig,
    buffer: ScanBuffer,
    candidates: Vec<SampledGrid>,
}

impl NativeContext {
    /// Width of the scan buffer
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Height of the scan buffer
    pub fn height(&self) -> usize {
        self.buffer.height()
    }
}

impl NativeEngine {
    /// Engine with explicit limits
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from the environment
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// Limits in effect
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl CandidateRegion for SampledGrid {
    fn corners(&self) -> [Position; 4] {
        self.corners
    }

    fn size(&self) -> usize {
        SampledGrid::size(self)
    }
}

impl Engine for NativeEngine {
    type Context = NativeContext;
    type Candidate = SampledGrid;

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn create_context(&self) -> Result<NativeContext> {
        Ok(NativeContext {
            config: self.config,
            buffer: ScanBuffer::new(),
            candidates: Vec::new(),
        })
    }

    fn resize(&self, ctx: &mut NativeContext, width: usize, height: usize) -> Result<()> {
        ctx.candidates.clear();
        ctx.buffer.resize(width, height, ctx.config.max_pixels)?;
        trace!(width, height, capacity = ctx.buffer.capacity(), "scan buffer sized");
        Ok(())
    }

    fn destroy(&self, mut ctx: NativeContext) {
        ctx.candidates.clear();
        ctx.buffer.release();
    }

    fn begin_load<'c>(&self, ctx: &'c mut NativeContext) -> &'c mut [u8] {
        ctx.candidates.clear();
        ctx.buffer.as_mut_slice()
    }

    fn end_load(&self, ctx: &mut NativeContext) {
        ctx.candidates = locate(
            ctx.buffer.as_slice(),
            ctx.buffer.width(),
            ctx.buffer.height(),
            &ctx.config,
        );
    }

    fn count(&self, ctx: &NativeContext) -> usize {
        ctx.candidates.len()
    }

    fn extract(&self, ctx: &NativeContext, index: usize) -> Option<SampledGrid> {
        ctx.candidates.get(index).cloned()
    }

    fn decode(&self, candidate: &SampledGrid) -> std::result::Result<DecodedFields, DecodeError> {
        decode_grid(&candidate.grid, self.config.max_payload_bytes).inspect_err(|err| {
            debug!(size = candidate.size(), error = %err, "grid did not decode");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_resize_respects_pixel_limit() {
        let engine = NativeEngine::new(EngineConfig::default().with_max_pixels(100));
        let mut ctx = engine.create_context().unwrap();
        assert!(engine.resize(&mut ctx, 10, 10).is_ok());
        assert_eq!(
            engine.resize(&mut ctx, 11, 10),
            Err(Error::allocation("scan buffer", 110))
        );
        engine.destroy(ctx);
    }

    #[test]
    fn test_load_buffer_matches_dimensions() {
        let engine = NativeEngine::default();
        let mut ctx = engine.create_context().unwrap();
        engine.resize(&mut ctx, 13, 7).unwrap();
        assert_eq!(engine.begin_load(&mut ctx).len(), 91);
        assert_eq!((ctx.width(), ctx.height()), (13, 7));
        engine.destroy(ctx);
    }

    #[test]
    fn test_blank_scan_has_no_candidates() {
        let engine = NativeEngine::default();
        let mut ctx = engine.create_context().unwrap();
        engine.resize(&mut ctx, 32, 32).unwrap();
        engine.begin_load(&mut ctx).fill(200);
        engine.end_load(&mut ctx);
        assert_eq!(engine.count(&ctx), 0);
        assert!(engine.extract(&ctx, 0).is_none());
        engine.destroy(ctx);
    }
}
