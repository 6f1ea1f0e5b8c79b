use std::time::Duration;

use crate::engine::Engine;
use crate::foundation::core::Rect;
use crate::render::backend::DisplayBackend;

impl<B: DisplayBackend> Engine<B> {
    /// Transfer the canvas to the display if anything changed since the last transfer.
    ///
    /// While a transition is active the fader owns the visible frame and this is deferred;
    /// pending damage is kept for the first call after the transition finishes.
    pub fn present(&mut self) {
        if self.fader.is_active() {
            tracing::trace!("present deferred during transition");
            return;
        }
        if self.damage.is_empty() && !self.forced {
            return;
        }
        self.canvas.render_into(&self.colors, &mut self.display);
        self.backend.present(&self.display);
        tracing::trace!(damage = ?self.damage, forced = self.forced, "present");
        self.damage = Rect::EMPTY;
        self.forced = false;
    }

    /// Present, then block for about `ms` milliseconds.
    pub fn pace(&mut self, ms: u64) {
        self.present();
        std::thread::sleep(Duration::from_millis(ms));
    }

    /// Present, then wait one display refresh or the configured fallback interval.
    pub fn vsync_pace(&mut self) {
        self.present();
        if !self.backend.wait_vsync() {
            std::thread::sleep(Duration::from_millis(self.opts.vsync_fallback_ms));
        }
    }

    /// Milliseconds since the engine was created.
    pub fn ticks(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Force the next `present` to transfer even without damage.
    pub fn invalidate(&mut self) {
        self.forced = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/present.rs"]
mod tests;
