use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::css::{DURATION_PROPERTY, GAP_PROPERTY, PAUSE_PROPERTY, REVERSE_PROPERTY};
use crate::drag::ScrubSettings;

pub const REVERSE_ON: &str = "reverse";
pub const PAUSE_ON_HOVER: &str = "paused";
pub const PAUSE_OFF: &str = "running";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid marquee config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Every input of a marquee instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarqueeConfig {
    pub reverse: bool,
    /// CSS time, e.g. `20s`; passed through to the stylesheet verbatim.
    pub animation_duration: Option<String>,
    /// CSS length, e.g. `16px`; passed through to the stylesheet verbatim.
    #[serde(alias = "gap")]
    pub marquee_gap: Option<String>,
    pub pause_on_hover: bool,
    pub vertical: bool,
    pub scrollable: bool,
    /// Extra classes for the marquee root, whitespace separated.
    pub style_class: Option<String>,
}

impl MarqueeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.vertical)
    }

    pub fn scrub_settings(&self) -> ScrubSettings {
        ScrubSettings {
            axis: self.axis(),
            reverse: self.reverse,
            enabled: self.scrollable,
        }
    }

    pub fn style_classes(&self) -> Vec<&str> {
        self.style_class
            .as_deref()
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Custom properties for the marquee root, rebuilt on every change.
    pub fn style_map(&self) -> StyleMap {
        let mut style = StyleMap::default();
        style.set(REVERSE_PROPERTY, if self.reverse { REVERSE_ON } else { "" });
        if let Some(duration) = &self.animation_duration {
            style.set(DURATION_PROPERTY, duration);
        }
        if let Some(gap) = &self.marquee_gap {
            style.set(GAP_PROPERTY, gap);
        }
        style.set(
            PAUSE_PROPERTY,
            if self.pause_on_hover {
                PAUSE_ON_HOVER
            } else {
                PAUSE_OFF
            },
        );
        style
    }
}

/// Inline style declarations owned by one marquee instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn set(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Names set in `previous` that this map no longer carries.
    pub fn removed_since<'a>(&'a self, previous: &'a StyleMap) -> impl Iterator<Item = &'a str> {
        previous
            .entries
            .keys()
            .filter(move |name| !self.entries.contains_key(*name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the map as a `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (name, value) in self.iter() {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push(';');
        }
        css
    }
}

/// What the host environment can do. Listeners are only attached when the
/// instance lives in a real, interactive rendering environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCapabilities {
    pub interactive: bool,
}

impl HostCapabilities {
    pub fn interactive() -> Self {
        Self { interactive: true }
    }

    pub fn inert() -> Self {
        Self { interactive: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollableChange {
    Enable,
    Disable,
}

/// Tracks the applied `scrollable` flag and reports edge transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollableToggle {
    active: bool,
}

impl ScrollableToggle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn update(&mut self, scrollable: bool) -> Option<ScrollableChange> {
        let change = match (self.active, scrollable) {
            (false, true) => Some(ScrollableChange::Enable),
            (true, false) => Some(ScrollableChange::Disable),
            _ => None,
        };
        self.active = scrollable;
        change
    }

    /// Forces the inactive state, reporting `Disable` if it was active.
    pub fn shutdown(&mut self) -> Option<ScrollableChange> {
        self.update(false)
    }
}
