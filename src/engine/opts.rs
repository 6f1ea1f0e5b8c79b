use crate::canvas::format::PixelFormat;

/// Environment variable overriding [`EngineOpts::vsync_fallback_ms`] in [`EngineOpts::from_env`].
pub const VSYNC_FALLBACK_ENV: &str = "AGS_VSYNC_FALLBACK_MS";

const DEFAULT_VSYNC_FALLBACK_MS: u64 = 16;

/// Canvas and pacing configuration for an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOpts {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Canvas pixel layout.
    pub format: PixelFormat,
    /// Sleep used by `vsync_pace` when the backend cannot wait for a refresh.
    pub vsync_fallback_ms: u64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            format: PixelFormat::default(),
            vsync_fallback_ms: DEFAULT_VSYNC_FALLBACK_MS,
        }
    }
}

impl EngineOpts {
    /// Default options with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply environment overrides. Unset or malformed values leave the field unchanged.
    pub fn with_env(mut self) -> Self {
        let Ok(raw) = std::env::var(VSYNC_FALLBACK_ENV) else {
            return self;
        };
        match parse_fallback_ms(Some(&raw)) {
            Some(ms) => self.vsync_fallback_ms = ms,
            None => tracing::warn!(
                var = VSYNC_FALLBACK_ENV,
                value = %raw,
                "ignoring malformed vsync fallback override"
            ),
        }
        self
    }

    /// Return options with a different canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Return options with a different canvas pixel layout.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Return options with a different vsync fallback interval.
    pub fn with_vsync_fallback_ms(mut self, ms: u64) -> Self {
        self.vsync_fallback_ms = ms;
        self
    }
}

fn parse_fallback_ms(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|&ms| ms > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/opts.rs"]
mod tests;
