//! Session context tying the canvas, the color tables, the visible frame and the fader together.
//!
//! Drawing goes to the off-screen canvas and only records damage. The visible frame changes in
//! exactly two places: the presentation pump and the fader.

pub(crate) mod draw;
pub(crate) mod opts;
pub(crate) mod present;
pub(crate) mod transition;

use std::time::Instant;

use crate::canvas::format::PixelFormat;
use crate::canvas::palette::{PALETTE_SIZE, Palette};
use crate::canvas::surface::Canvas;
use crate::draw::text::GlyphSource;
use crate::effects::fader::Fader;
use crate::engine::opts::EngineOpts;
use crate::foundation::core::{Rect, Rgb};
use crate::foundation::error::AgsResult;
use crate::render::backend::{DisplayBackend, FrameRGBA};

/// One playback session: off-screen canvas, palette, visible frame and transition engine.
pub struct Engine<B> {
    opts: EngineOpts,
    canvas: Canvas,
    palette: Palette,
    colors: [Rgb; PALETTE_SIZE],
    display: FrameRGBA,
    backend: B,
    damage: Rect,
    forced: bool,
    fader: Fader,
    font: Option<Box<dyn GlyphSource>>,
    antialias: bool,
    started: Instant,
}

impl<B: DisplayBackend> Engine<B> {
    /// Create a session with a black canvas and a black visible frame.
    pub fn new(opts: EngineOpts, backend: B) -> AgsResult<Self> {
        let canvas = Canvas::new(opts.width, opts.height, opts.format)?;
        let display = FrameRGBA::filled(opts.width, opts.height, [0, 0, 0, 255]);
        tracing::debug!(
            width = opts.width,
            height = opts.height,
            format = ?opts.format,
            caps = ?backend.capabilities(),
            "engine created"
        );
        Ok(Self {
            opts,
            canvas,
            palette: Palette::new(),
            colors: [Rgb::default(); PALETTE_SIZE],
            display,
            backend,
            damage: Rect::EMPTY,
            forced: false,
            fader: Fader::new(),
            font: None,
            antialias: false,
            started: Instant::now(),
        })
    }

    /// Options this session was created with.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Canvas pixel layout.
    pub fn format(&self) -> PixelFormat {
        self.canvas.format()
    }

    /// The off-screen canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The caller-editable palette. Edits take effect at the next palette-dependent draw.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable access to the caller-editable palette.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The resolved color table draws currently use.
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// The visible frame as last transferred or rendered by the fader.
    pub fn display(&self) -> &FrameRGBA {
        &self.display
    }

    /// The display backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the display backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Canvas region changed since the last transfer.
    pub fn damage(&self) -> Rect {
        self.damage
    }

    /// Install or remove the glyph source used by `draw_string`.
    pub fn set_font(&mut self, font: Option<Box<dyn GlyphSource>>) {
        self.font = font;
    }

    /// Blend glyph coverage on true-color canvases instead of thresholding it.
    pub fn set_antialias(&mut self, on: bool) {
        self.antialias = on;
    }

    fn mark(&mut self, r: Option<Rect>) -> Option<Rect> {
        if let Some(r) = r {
            self.damage = self.damage.union(r);
        }
        r
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/engine.rs"]
mod tests;
