use crate::foundation::core::Rgb;
use crate::render::backend::{Capabilities, DisplayBackend, FrameRGBA};

/// In-memory display backend for tests, tooling and headless playback.
///
/// Counts every transfer, keeps the last presented frame and, when asked to, every frame in
/// presentation order.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    caps: Capabilities,
    keep_history: bool,
    vsync: bool,
    present_count: u64,
    last: Option<FrameRGBA>,
    history: Vec<FrameRGBA>,
    color_pushes: Vec<(usize, usize)>,
}

impl HeadlessBackend {
    /// Backend with every capability and no history retention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the reported capability set.
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Retain every presented frame.
    pub fn with_history(mut self, keep: bool) -> Self {
        self.keep_history = keep;
        self
    }

    /// Report vsync as available (waiting returns immediately).
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Change the reported capability set, e.g. after the display lost its render target.
    pub fn set_capabilities(&mut self, caps: Capabilities) {
        self.caps = caps;
    }

    /// Number of `present` calls so far.
    pub fn present_count(&self) -> u64 {
        self.present_count
    }

    /// Most recently presented frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last.as_ref()
    }

    /// Frames in presentation order (empty unless history is enabled).
    pub fn history(&self) -> &[FrameRGBA] {
        &self.history
    }

    /// `(first, count)` of every color-table push.
    pub fn color_pushes(&self) -> &[(usize, usize)] {
        &self.color_pushes
    }
}

impl DisplayBackend for HeadlessBackend {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn set_colors(&mut self, first: usize, colors: &[Rgb]) {
        self.color_pushes.push((first, colors.len()));
    }

    fn present(&mut self, frame: &FrameRGBA) {
        self.present_count = self.present_count.saturating_add(1);
        if self.keep_history {
            self.history.push(frame.clone());
        }
        self.last = Some(frame.clone());
    }

    fn wait_vsync(&mut self) -> bool {
        self.vsync
    }
}
