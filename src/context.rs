//! Decoding context lifecycle: create, resize, load, end, destroy
//!
//! A [`DecodingContext`] wraps one engine context and tracks which stage of
//! the scan it is in. The engine context is destroyed exactly once, either
//! by [`DecodingContext::destroy`] or when the wrapper is dropped.

use std::fmt;

use tracing::{debug, trace};

use crate::engine::{CandidateRegion, Engine};
use crate::error::{DecodeError, Error, Result};
use crate::models::{payload_text, QrSymbol};

/// Lifecycle stage of a decoding context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Created, not yet sized (or the last resize failed)
    Created,
    /// Scan buffer sized, awaiting pixels
    Sized,
    /// Pixels loaded, awaiting `end`
    Loaded,
    /// Candidates located
    Scanned,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Created => "created",
            Stage::Sized => "sized",
            Stage::Loaded => "loaded",
            Stage::Scanned => "scanned",
        };
        f.write_str(name)
    }
}

/// Engine working memory sized to one image
pub struct DecodingContext<'e, E: Engine> {
    engine: &'e E,
    inner: Option<E::Context>,
    width: usize,
    height: usize,
    stage: Stage,
}

impl<'e, E: Engine> DecodingContext<'e, E> {
    /// Acquire a fresh engine context
    pub fn create(engine: &'e E) -> Result<Self> {
        let inner = engine.create_context()?;
        trace!(engine = engine.version(), "context created");
        Ok(Self {
            engine,
            inner: Some(inner),
            width: 0,
            height: 0,
            stage: Stage::Created,
        })
    }

    /// Size the scan buffer to exactly `width * height` bytes.
    ///
    /// Allowed from any stage; previous candidates are discarded. On
    /// failure the context returns to [`Stage::Created`].
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let Some(inner) = self.inner.as_mut() else {
            return Err(Error::out_of_sequence("resize", self.stage));
        };
        match self.engine.resize(inner, width, height) {
            Ok(()) => {
                self.width = width;
                self.height = height;
                self.stage = Stage::Sized;
                Ok(())
            }
            Err(err) => {
                self.width = 0;
                self.height = 0;
                self.stage = Stage::Created;
                debug!(width, height, error = %err, "resize failed");
                Err(err)
            }
        }
    }

    /// Copy the first `width * height` bytes of `pixels` into the scan buffer.
    ///
    /// The length is checked before the scan buffer is touched; extra
    /// trailing bytes are ignored.
    pub fn load(&mut self, pixels: &[u8]) -> Result<()> {
        self.require(Stage::Sized, "load")?;
        let expected = self.width * self.height;
        if pixels.len() < expected {
            return Err(Error::InvalidBufferSize {
                width: self.width,
                height: self.height,
                expected,
                actual: pixels.len(),
            });
        }
        let Some(inner) = self.inner.as_mut() else {
            return Err(Error::out_of_sequence("load", self.stage));
        };
        self.engine
            .begin_load(inner)
            .copy_from_slice(&pixels[..expected]);
        self.stage = Stage::Loaded;
        Ok(())
    }

    /// Finish loading and run candidate location
    pub fn end(&mut self) -> Result<Candidates<'_, E>> {
        self.require(Stage::Loaded, "end")?;
        let Some(inner) = self.inner.as_mut() else {
            return Err(Error::out_of_sequence("end", self.stage));
        };
        self.engine.end_load(inner);
        self.stage = Stage::Scanned;
        self.candidates()
    }

    /// View of the candidates located by the last `end`
    pub fn candidates(&self) -> Result<Candidates<'_, E>> {
        self.require(Stage::Scanned, "candidates")?;
        match &self.inner {
            Some(inner) => Ok(Candidates {
                engine: self.engine,
                inner,
            }),
            None => Err(Error::out_of_sequence("candidates", self.stage)),
        }
    }

    /// Engine version identifier
    pub fn version(&self) -> &'static str {
        self.engine.version()
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Width set by the last successful resize
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height set by the last successful resize
    pub fn height(&self) -> usize {
        self.height
    }

    /// Release the engine context
    pub fn destroy(mut self) {
        self.release();
    }

    fn require(&self, stage: Stage, operation: &'static str) -> Result<()> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(Error::out_of_sequence(operation, self.stage))
        }
    }

    fn release(&mut self) {
        if let Some(inner) = self.inner.take() {
            self.engine.destroy(inner);
            trace!("context destroyed");
        }
    }
}

impl<E: Engine> Drop for DecodingContext<'_, E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<E: Engine> fmt::Debug for DecodingContext<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodingContext")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

/// Candidates located by one scan, borrowed from the context
pub struct Candidates<'c, E: Engine> {
    engine: &'c E,
    inner: &'c E::Context,
}

impl<'c, E: Engine> Candidates<'c, E> {
    /// Number of located candidates
    pub fn count(&self) -> usize {
        self.engine.count(self.inner)
    }

    /// Candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn extract(&self, index: usize) -> E::Candidate {
        match self.get(index) {
            Some(candidate) => candidate,
            None => panic!(
                "candidate index {index} out of range for {} candidates",
                self.count()
            ),
        }
    }

    /// Candidate at `index`, None when out of range
    pub fn get(&self, index: usize) -> Option<E::Candidate> {
        if index >= self.count() {
            return None;
        }
        self.engine.extract(self.inner, index)
    }

    /// Every candidate in extraction order
    pub fn iter(&self) -> impl Iterator<Item = E::Candidate> + '_ {
        (0..self.count()).filter_map(move |index| self.engine.extract(self.inner, index))
    }

    /// Decode one candidate into an owned symbol
    pub fn decode(&self, candidate: &E::Candidate) -> std::result::Result<QrSymbol, DecodeError> {
        let fields = self.engine.decode(candidate)?;
        Ok(QrSymbol {
            corners: candidate.corners(),
            size: candidate.size(),
            version: fields.version,
            ecc_level: fields.ecc_level,
            mask: fields.mask,
            data_type: fields.data_type,
            eci: fields.eci,
            payload: payload_text(&fields.payload),
            payload_len: fields.payload.len(),
            bytes: fields.payload,
        })
    }
}
