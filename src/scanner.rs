//! Scan orchestration
//!
//! [`Scanner::reveal`] drives one decoding context through a full scan:
//! create, resize, load, end, then extract and decode every candidate.
//! Decode failures only lower the usable count; setup failures abort the
//! scan and are returned. The context is released on every path.

use image::GrayImage;
use rayon::prelude::*;
use tracing::debug;

use crate::config::EngineConfig;
use crate::context::DecodingContext;
use crate::engine::{Engine, NativeEngine};
use crate::error::Result;
use crate::models::ScanResult;

/// One grayscale image for [`Scanner::reveal_batch`]
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Row-major 8-bit pixels, at least `width * height` bytes
    pub pixels: &'a [u8],
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl<'a> Frame<'a> {
    /// Frame over a borrowed pixel buffer
    pub fn new(pixels: &'a [u8], width: usize, height: usize) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }
}

/// Multi-symbol scanner over an [`Engine`]
#[derive(Debug, Clone)]
pub struct Scanner<E = NativeEngine> {
    engine: E,
}

impl Scanner<NativeEngine> {
    /// Native engine configured from the environment
    pub fn new() -> Self {
        Self::with_engine(NativeEngine::from_env())
    }

    /// Native engine with explicit limits
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_engine(NativeEngine::new(config))
    }
}

impl Default for Scanner<NativeEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Scanner<E> {
    /// Scanner over any engine
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// The underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Engine version identifier
    pub fn version(&self) -> &'static str {
        self.engine.version()
    }

    /// Locate and decode every symbol in a grayscale image.
    ///
    /// # Errors
    ///
    /// - [`Error::Allocation`](crate::Error::Allocation) if the engine cannot
    ///   allocate a context or scan buffer
    /// - [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) for a
    ///   zero width or height
    /// - [`Error::InvalidBufferSize`](crate::Error::InvalidBufferSize) if
    ///   `pixels` is shorter than `width * height`
    pub fn reveal(&self, pixels: &[u8], width: usize, height: usize) -> Result<ScanResult> {
        let mut ctx = DecodingContext::create(&self.engine)?;
        ctx.resize(width, height)?;
        ctx.load(pixels)?;

        let result = {
            let candidates = ctx.end()?;
            let found = candidates.count();
            let mut usable = found;
            let mut symbols = Vec::with_capacity(found);

            for index in 0..found {
                let candidate = candidates.extract(index);
                match candidates.decode(&candidate) {
                    Ok(symbol) => symbols.push(symbol),
                    Err(err) => {
                        usable -= 1;
                        debug!(index, error = %err, "candidate failed to decode");
                    }
                }
            }
            ScanResult {
                found,
                usable,
                symbols,
            }
        };

        debug!(
            width,
            height,
            found = result.found,
            usable = result.usable,
            "scan complete"
        );
        ctx.destroy();
        Ok(result)
    }

    /// Scan an in-memory grayscale image
    pub fn reveal_image(&self, image: &GrayImage) -> Result<ScanResult> {
        self.reveal(
            image.as_raw(),
            image.width() as usize,
            image.height() as usize,
        )
    }

    /// Scan independent frames in parallel, one context per frame.
    ///
    /// Results are returned in input order.
    pub fn reveal_batch(&self, frames: &[Frame<'_>]) -> Vec<Result<ScanResult>>
    where
        E: Sync,
    {
        frames
            .par_iter()
            .map(|frame| self.reveal(frame.pixels, frame.width, frame.height))
            .collect()
    }
}

/// Scan a grayscale image with the default native engine
pub fn reveal(pixels: &[u8], width: usize, height: usize) -> Result<ScanResult> {
    Scanner::new().reveal(pixels, width, height)
}

/// Version identifier of the default engine
pub fn version() -> &'static str {
    Scanner::new().version()
}
