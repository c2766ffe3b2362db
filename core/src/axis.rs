use serde::{Deserialize, Serialize};

/// Dimension the band scrolls along. Drags are measured on the same axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Picks the screen coordinate that belongs to this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    pub(crate) fn translate_fn(self) -> &'static str {
        match self {
            Axis::Horizontal => "translateX",
            Axis::Vertical => "translateY",
        }
    }
}
