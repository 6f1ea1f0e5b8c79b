use crate::draw::copy::{clip_copy, copy_area};
use crate::effects::fader::TransitionState;
use crate::effects::transitions::Effect;
use crate::engine::Engine;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{AgsError, AgsResult};
use crate::render::backend::{DisplayBackend, FrameRGBA};

impl<B: DisplayBackend> Engine<B> {
    /// Begin a transition that reveals the canvas area `src` at `dst` on the display.
    ///
    /// "Old" is the visible frame under the destination, "new" is the canvas under `src`. The
    /// canvas copy happens immediately, so later draws already see the final content.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn begin_transition(&mut self, effect: Effect, src: Rect, dst: Point) -> AgsResult<()> {
        if self.fader.is_active() {
            tracing::error!("transition begin while another transition is active");
            return Err(AgsError::protocol(
                "begin called while a transition is active",
            ));
        }
        self.check_palette();

        let (old, new, at) = match clip_copy(self.canvas.bounds(), src, dst) {
            Some((s, d)) => {
                let old = self.display.crop(s.at(d));
                let new = self.canvas.capture_rgba(s, &self.colors);
                match (old, new) {
                    (Some(old), Some(new)) => (old, new, d),
                    _ => (FrameRGBA::new(0, 0), FrameRGBA::new(0, 0), d),
                }
            }
            None => (FrameRGBA::new(0, 0), FrameRGBA::new(0, 0), dst),
        };
        let caps = self.backend.capabilities();
        self.fader.begin(effect, caps, old, new, at)?;

        let r = copy_area(&mut self.canvas, src, dst);
        self.mark(r);
        Ok(())
    }

    /// Render transition step `step` (in `0..=MAX_STEP`) and show it immediately.
    pub fn step_transition(&mut self, step: u32) -> AgsResult<()> {
        if self.fader.step(step, &mut self.display)? {
            self.backend.present(&self.display);
        }
        Ok(())
    }

    /// Show the final image undecorated and end the transition.
    pub fn finish_transition(&mut self) -> AgsResult<()> {
        self.fader.finish(&mut self.display)?;
        self.backend.present(&self.display);
        Ok(())
    }

    /// Lifecycle state of the transition engine.
    pub fn transition_state(&self) -> TransitionState {
        self.fader.state()
    }

    /// Effect rendered by the current or last transition, after capability fallback.
    pub fn transition_effect(&self) -> Option<Effect> {
        self.fader.effect()
    }

    /// Whether the current or last transition was downgraded to a crossfade.
    pub fn transition_fell_back(&self) -> bool {
        self.fader.fell_back()
    }

    /// Last step rendered by the current or last transition.
    pub fn last_step(&self) -> Option<u32> {
        self.fader.last_step()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/transition.rs"]
mod tests;
