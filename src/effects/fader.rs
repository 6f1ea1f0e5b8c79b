use crate::effects::composite::{crossfade_into, reveal_into};
use crate::effects::masks::{
    Blades, HEXAGRAM, PENTAGRAM, StarMotion, StarShape, star_frame, windmill_frame,
};
use crate::effects::transitions::Effect;
use crate::foundation::core::Point;
use crate::foundation::error::{AgsError, AgsResult};
use crate::render::backend::{Capabilities, FrameRGBA};
use crate::render::raster::Mask;

/// Highest step index a transition accepts. Steps run over `0..=MAX_STEP`.
pub const MAX_STEP: u32 = 16;

/// Lifecycle of the transition engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionState {
    /// No transition has begun yet.
    #[default]
    Uninitialized,
    /// Between `begin` and `finish`.
    Active,
    /// The last transition was finished; a new one may begin.
    Finished,
}

#[derive(Clone, Copy, Debug)]
enum Geometry {
    Star(&'static StarShape, StarMotion),
    Windmill(Blades),
}

fn geometry(effect: Effect) -> Option<Geometry> {
    Some(match effect {
        Effect::PentagramInOut => Geometry::Star(&PENTAGRAM, StarMotion::InOut),
        Effect::PentagramOutIn => Geometry::Star(&PENTAGRAM, StarMotion::OutIn),
        Effect::HexagramInOut => Geometry::Star(&HEXAGRAM, StarMotion::InOut),
        Effect::HexagramOutIn => Geometry::Star(&HEXAGRAM, StarMotion::OutIn),
        Effect::Windmill90 => Geometry::Windmill(Blades::Four),
        Effect::Windmill180 => Geometry::Windmill(Blades::Two),
        Effect::Windmill360 => Geometry::Windmill(Blades::One),
        Effect::Crossfade | Effect::Unknown(_) => return None,
    })
}

impl Geometry {
    fn frame(self, width: u32, height: u32, step: u32) -> Mask {
        match self {
            Geometry::Star(shape, motion) => {
                let t = f64::from(step) / f64::from(MAX_STEP);
                star_frame(shape, motion, width, height, t)
            }
            Geometry::Windmill(blades) => windmill_frame(blades, width, height, step, MAX_STEP),
        }
    }
}

/// Accumulated reveal for polygon effects: the union of every frame up to `through`.
#[derive(Debug)]
struct RevealTarget {
    geometry: Geometry,
    mask: Mask,
    through: Option<u32>,
}

impl RevealTarget {
    fn new(geometry: Geometry, width: u32, height: u32) -> Self {
        Self {
            geometry,
            mask: Mask::new(width, height),
            through: None,
        }
    }

    fn advance(&mut self, step: u32) -> &Mask {
        let (w, h) = (self.mask.width(), self.mask.height());
        let first = match self.through {
            Some(done) if done <= step => done + 1,
            _ => {
                self.mask.clear();
                0
            }
        };
        for k in first..=step {
            self.mask.union_with(&self.geometry.frame(w, h, k));
        }
        self.through = Some(step);
        &self.mask
    }
}

#[derive(Debug)]
struct Session {
    effect: Effect,
    dst: Point,
    old: FrameRGBA,
    new: FrameRGBA,
    target: Option<RevealTarget>,
}

/// Multi-step transition state machine.
///
/// The fader owns only the visual overlay of a transition: callers capture the two snapshots,
/// then drive `step` for indices in `0..=MAX_STEP` and close with `finish`.
#[derive(Debug, Default)]
pub struct Fader {
    state: TransitionState,
    session: Option<Session>,
    effect: Option<Effect>,
    fell_back: bool,
    last_step: Option<u32>,
}

impl Fader {
    /// Idle fader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Effect actually rendered by the current or last transition, after fallback.
    pub fn effect(&self) -> Option<Effect> {
        self.effect
    }

    /// Whether the current or last transition was downgraded to a crossfade.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Last step index rendered in the current or last transition.
    pub fn last_step(&self) -> Option<u32> {
        self.last_step
    }

    /// Return `true` between `begin` and `finish`.
    pub fn is_active(&self) -> bool {
        self.state == TransitionState::Active
    }

    /// Start a transition from `old` to `new`, both drawn at `dst` on the display.
    ///
    /// Effects needing polygon masks fall back to [`Effect::Crossfade`] when `caps` lacks them.
    pub fn begin(
        &mut self,
        requested: Effect,
        caps: Capabilities,
        old: FrameRGBA,
        new: FrameRGBA,
        dst: Point,
    ) -> AgsResult<()> {
        if self.is_active() {
            tracing::error!(%requested, "transition begin while another transition is active");
            return Err(AgsError::protocol(
                "begin called while a transition is active",
            ));
        }
        if old.width != new.width || old.height != new.height {
            return Err(AgsError::validation(
                "transition snapshots must have the same size",
            ));
        }

        let fell_back = requested.requires_polygon_masks() && !caps.supports_polygon_masks();
        let effect = if fell_back {
            tracing::warn!(
                %requested,
                ?caps,
                "backend lacks polygon mask support, falling back to crossfade"
            );
            Effect::Crossfade
        } else {
            requested
        };
        let target = geometry(effect).map(|g| RevealTarget::new(g, old.width, old.height));
        tracing::debug!(%effect, width = old.width, height = old.height, "transition begin");

        self.session = Some(Session {
            effect,
            dst,
            old,
            new,
            target,
        });
        self.state = TransitionState::Active;
        self.effect = Some(effect);
        self.fell_back = fell_back;
        self.last_step = None;
        Ok(())
    }

    /// Render step `step` into `display`.
    ///
    /// Returns `false` when nothing was drawn, which only happens for unknown effects.
    pub fn step(&mut self, step: u32, display: &mut FrameRGBA) -> AgsResult<bool> {
        let Some(session) = self.session.as_mut() else {
            tracing::error!(step, state = ?self.state, "transition step outside an active transition");
            return Err(AgsError::protocol(
                "step called without an active transition",
            ));
        };
        if step > MAX_STEP {
            return Err(AgsError::validation(format!(
                "step {step} exceeds the maximum of {MAX_STEP}"
            )));
        }

        let drawn = match session.effect {
            Effect::Unknown(id) => {
                if step == 0 {
                    tracing::warn!(id, "unknown transition effect, nothing will be drawn");
                }
                false
            }
            Effect::Crossfade => {
                let alpha = (step * 255 / MAX_STEP) as u8;
                crossfade_into(display, session.dst, &session.old, &session.new, alpha)?;
                true
            }
            _ => {
                let Some(target) = session.target.as_mut() else {
                    return Err(AgsError::protocol("polygon effect without a render target"));
                };
                let revealed = target.advance(step);
                reveal_into(display, session.dst, &session.old, &session.new, revealed)?;
                true
            }
        };
        self.last_step = Some(step);
        Ok(drawn)
    }

    /// Draw the final "new" snapshot into `display` and release the session.
    pub fn finish(&mut self, display: &mut FrameRGBA) -> AgsResult<()> {
        let Some(session) = self.session.take() else {
            tracing::error!(state = ?self.state, "transition finish outside an active transition");
            return Err(AgsError::protocol(
                "finish called without an active transition",
            ));
        };
        display.blit(&session.new, session.dst);
        self.state = TransitionState::Finished;
        tracing::debug!(effect = %session.effect, "transition finish");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fader.rs"]
mod tests;
