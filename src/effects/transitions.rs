use std::fmt;
use std::str::FromStr;

use crate::foundation::error::AgsError;

/// Transition effect selected at `begin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Alpha blend from old to new.
    Crossfade,
    /// Rotating star hole that grows from the center.
    PentagramInOut,
    /// Old content survives inside a shrinking rotating star.
    PentagramOutIn,
    /// Six-pointed variant of [`Effect::PentagramInOut`].
    HexagramInOut,
    /// Six-pointed variant of [`Effect::PentagramOutIn`].
    HexagramOutIn,
    /// Four blades, each sweeping a quarter turn.
    Windmill90,
    /// Two blades, each sweeping a half turn.
    Windmill180,
    /// One blade sweeping a full turn.
    Windmill360,
    /// Unrecognized effect id. Stepping it renders nothing.
    Unknown(u32),
}

impl Effect {
    /// Every known effect, in id order.
    pub const ALL: [Effect; 8] = [
        Effect::Crossfade,
        Effect::PentagramInOut,
        Effect::PentagramOutIn,
        Effect::HexagramInOut,
        Effect::HexagramOutIn,
        Effect::Windmill90,
        Effect::Windmill180,
        Effect::Windmill360,
    ];

    /// Map a numeric effect id; ids past the catalogue become [`Effect::Unknown`].
    pub fn from_id(id: u32) -> Self {
        Self::ALL
            .get(id as usize)
            .copied()
            .unwrap_or(Effect::Unknown(id))
    }

    /// Numeric id of this effect.
    pub fn id(self) -> u32 {
        match self {
            Effect::Unknown(id) => id,
            known => Self::ALL.iter().position(|&e| e == known).unwrap_or(0) as u32,
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Effect::Crossfade => "crossfade",
            Effect::PentagramInOut => "pentagram-in-out",
            Effect::PentagramOutIn => "pentagram-out-in",
            Effect::HexagramInOut => "hexagram-in-out",
            Effect::HexagramOutIn => "hexagram-out-in",
            Effect::Windmill90 => "windmill-90",
            Effect::Windmill180 => "windmill-180",
            Effect::Windmill360 => "windmill-360",
            Effect::Unknown(_) => "unknown",
        }
    }

    /// Whether rendering needs an offscreen target and textured polygons.
    pub fn requires_polygon_masks(self) -> bool {
        !matches!(self, Effect::Crossfade | Effect::Unknown(_))
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Unknown(id) => write!(f, "unknown({id})"),
            known => f.write_str(known.name()),
        }
    }
}

impl FromStr for Effect {
    type Err = AgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if let Ok(id) = key.parse::<u32>() {
            return Ok(Effect::from_id(id));
        }
        let effect = match key.as_str() {
            "crossfade" | "fade" => Effect::Crossfade,
            "pentagraminout" | "pentagram" => Effect::PentagramInOut,
            "pentagramoutin" => Effect::PentagramOutIn,
            "hexagraminout" | "hexagram" => Effect::HexagramInOut,
            "hexagramoutin" => Effect::HexagramOutIn,
            "windmill90" | "windmill" => Effect::Windmill90,
            "windmill180" => Effect::Windmill180,
            "windmill360" => Effect::Windmill360,
            _ => {
                return Err(AgsError::validation(format!("unknown effect name '{s}'")));
            }
        };
        Ok(effect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
