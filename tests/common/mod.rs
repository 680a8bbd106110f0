//! Shared helpers for the integration tests: symbol rendering and a
//! scripted engine that records how the decoding context drives it.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use qr_reveal::{
    CandidateRegion, DataType, DecodeError, DecodedFields, EcLevel, Engine, Error, MaskPattern,
    Position, Result,
};

/// Pixels per module used by the rendered scenes
pub const SCALE: usize = 4;
/// Quiet zone around each symbol, in modules
pub const QUIET: usize = 4;

/// Module layout as owned rows
pub fn modules(rows: &[&str]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| row.bytes().map(|b| b == b'#').collect())
        .collect()
}

/// Rotate a module layout a quarter turn clockwise
pub fn rotate_quarter(layout: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = layout.len();
    (0..n)
        .map(|y| (0..n).map(|x| layout[n - 1 - x][y]).collect())
        .collect()
}

/// Mirror a module layout left to right
pub fn mirror(layout: &[Vec<bool>]) -> Vec<Vec<bool>> {
    layout
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

/// Light every module of both format information copies
pub fn clear_format(layout: &mut [Vec<bool>]) {
    let n = layout.len();
    for i in 0..15 {
        let (x, y) = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        layout[y][x] = false;
        let (x, y) = if i < 8 { (n - 1 - i, 8) } else { (8, n - 15 + i) };
        layout[y][x] = false;
    }
}

/// White grayscale canvas with dark modules drawn onto it
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width * height],
        }
    }

    /// Canvas holding one symbol inside its quiet zone
    pub fn single(layout: &[Vec<bool>]) -> Self {
        let side = (layout.len() + 2 * QUIET) * SCALE;
        let mut canvas = Self::new(side, side);
        canvas.draw(layout, QUIET * SCALE, QUIET * SCALE);
        canvas
    }

    /// Draw a symbol with its top-left module at pixel (left, top)
    pub fn draw(&mut self, layout: &[Vec<bool>], left: usize, top: usize) {
        for (my, row) in layout.iter().enumerate() {
            for (mx, &dark) in row.iter().enumerate() {
                if !dark {
                    continue;
                }
                for py in 0..SCALE {
                    let start = (top + my * SCALE + py) * self.width + left + mx * SCALE;
                    self.pixels[start..start + SCALE].fill(0);
                }
            }
        }
    }
}

/// Decoded fields with everything but the payload fixed
pub fn fields(payload: &[u8]) -> DecodedFields {
    DecodedFields {
        version: 1,
        ecc_level: EcLevel::M,
        mask: MaskPattern::Pattern0,
        data_type: DataType::Byte,
        eci: None,
        payload: payload.to_vec(),
    }
}

/// Engine that reports a fixed list of candidates and records every call
#[derive(Default)]
pub struct ScriptedEngine {
    outcomes: Vec<std::result::Result<DecodedFields, DecodeError>>,
    fail_create: bool,
    max_pixels: Option<usize>,
    created: AtomicUsize,
    destroyed: AtomicUsize,
    decoded: AtomicUsize,
    loaded: Mutex<Vec<u8>>,
}

pub struct ScriptedContext {
    buffer: Vec<u8>,
    located: usize,
}

#[derive(Debug, Clone)]
pub struct ScriptedCandidate {
    index: usize,
    outcome: std::result::Result<DecodedFields, DecodeError>,
}

impl CandidateRegion for ScriptedCandidate {
    fn corners(&self) -> [Position; 4] {
        let x = self.index as i32 * 10;
        [
            Position::new(x, 0),
            Position::new(x + 9, 0),
            Position::new(x + 9, 9),
            Position::new(x, 9),
        ]
    }

    fn size(&self) -> usize {
        21
    }
}

impl ScriptedEngine {
    /// One candidate per outcome, in order
    pub fn new(outcomes: Vec<std::result::Result<DecodedFields, DecodeError>>) -> Self {
        Self {
            outcomes,
            ..Self::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn with_max_pixels(mut self, max_pixels: usize) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub fn decoded(&self) -> usize {
        self.decoded.load(Ordering::SeqCst)
    }

    /// Scan buffer contents at the last `end_load`
    pub fn loaded(&self) -> Vec<u8> {
        self.loaded.lock().unwrap().clone()
    }
}

impl Engine for ScriptedEngine {
    type Context = ScriptedContext;
    type Candidate = ScriptedCandidate;

    fn version(&self) -> &'static str {
        "scripted-1"
    }

    fn create_context(&self) -> Result<ScriptedContext> {
        if self.fail_create {
            return Err(Error::allocation("context", 64));
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(ScriptedContext {
            buffer: Vec::new(),
            located: 0,
        })
    }

    fn resize(&self, ctx: &mut ScriptedContext, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let pixels = width * height;
        if self.max_pixels.is_some_and(|max| pixels > max) {
            return Err(Error::allocation("scan buffer", pixels));
        }
        ctx.located = 0;
        // Stale bytes make a missed copy visible
        ctx.buffer = vec![0xAA; pixels];
        Ok(())
    }

    fn destroy(&self, _ctx: ScriptedContext) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }

    fn begin_load<'c>(&self, ctx: &'c mut ScriptedContext) -> &'c mut [u8] {
        &mut ctx.buffer
    }

    fn end_load(&self, ctx: &mut ScriptedContext) {
        *self.loaded.lock().unwrap() = ctx.buffer.clone();
        ctx.located = self.outcomes.len();
    }

    fn count(&self, ctx: &ScriptedContext) -> usize {
        ctx.located
    }

    fn extract(&self, ctx: &ScriptedContext, index: usize) -> Option<ScriptedCandidate> {
        if index >= ctx.located {
            return None;
        }
        Some(ScriptedCandidate {
            index,
            outcome: self.outcomes[index].clone(),
        })
    }

    fn decode(
        &self,
        candidate: &ScriptedCandidate,
    ) -> std::result::Result<DecodedFields, DecodeError> {
        self.decoded.fetch_add(1, Ordering::SeqCst);
        candidate.outcome.clone()
    }
}
