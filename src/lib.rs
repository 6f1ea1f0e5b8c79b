//! Off-screen raster canvas and scene-transition fader for legacy visual-novel playback.
//!
//! The public API is session-oriented:
//!
//! - Create an [`Engine`] from [`EngineOpts`] and a [`DisplayBackend`]
//! - Draw with palette-aware primitives; draws only record damage
//! - Flush with [`Engine::present`] or the pacing calls
//! - Drive transitions with `begin_transition`, `step_transition` and `finish_transition`
//!
//! Canvas-level primitives are also exported for use on a bare [`Canvas`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canvas;
mod draw;
mod effects;
mod engine;
mod foundation;
mod render;

pub use crate::canvas::format::PixelFormat;
pub use crate::canvas::palette::{PALETTE_SIZE, Palette, nearest_color};
pub use crate::canvas::surface::{Canvas, SavedRegion};
pub use crate::draw::copy::{clip_copy, copy_area, copy_area_keyed};
pub use crate::draw::flood::{PixelWord, flood_fill};
pub use crate::draw::image::{Image8, draw_image8};
pub use crate::draw::primitives::{draw_line, draw_rect, fill_circle, fill_rect, wrap_color};
pub use crate::draw::text::{Glyph, GlyphSource};
pub use crate::effects::fader::{Fader, MAX_STEP, TransitionState};
pub use crate::effects::transitions::Effect;
pub use crate::engine::Engine;
pub use crate::engine::opts::{EngineOpts, VSYNC_FALLBACK_ENV};
pub use crate::foundation::core::{Point, Rect, Rgb};
pub use crate::foundation::error::{AgsError, AgsResult};
pub use crate::render::backend::{Capabilities, DisplayBackend, FrameRGBA};
pub use crate::render::headless::HeadlessBackend;
pub use crate::render::raster::Mask;
