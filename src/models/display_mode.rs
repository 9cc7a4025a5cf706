use serde::{Deserialize, Serialize};

/// How durations are rendered: `Clock` is HH:MM:SS, `Compact` is MM:SS.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayMode {
    Clock,
    Compact,
}

impl DisplayMode {
    pub fn dm_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clock" | "hms" => Some(Self::Clock),
            "compact" | "ms" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn dm_as_str(&self) -> &'static str {
        match self {
            DisplayMode::Clock => "clock",
            DisplayMode::Compact => "compact",
        }
    }

    pub fn is_clock(&self) -> bool {
        matches!(self, DisplayMode::Clock)
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, DisplayMode::Compact)
    }
}
