#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use om_marquee_core::css::{DURATION_PROPERTY, GAP_PROPERTY};
use om_marquee_core::{
    parse_delay_ms, read_translate, Axis, GeometryProvider, StyleSurface, DEFAULT_DURATION_MS,
};

/// In-memory band that renders like a browser would: an inline transform
/// wins, otherwise the position follows the CSS loop animation at the
/// current clock, written delay and direction.
pub struct FakeBand {
    pub axis: Axis,
    pub extent: f64,
    pub gap: Option<String>,
    pub duration: Option<String>,
    pub reverse_animation: bool,
    pub raw_transform: RefCell<Option<String>>,
    pub clock_ms: Cell<f64>,
    pub restarted_at_ms: Cell<f64>,
    pub inline_transform: RefCell<Option<String>>,
    pub animation_delay: RefCell<Option<String>>,
    pub content_dragging: Cell<bool>,
    pub paused: Cell<bool>,
    pub restarts: Cell<usize>,
    pub writes: Cell<usize>,
}

impl FakeBand {
    pub fn new(extent: f64, gap: &str, duration: &str) -> Self {
        Self {
            axis: Axis::Horizontal,
            extent,
            gap: Some(gap.to_string()),
            duration: Some(duration.to_string()),
            reverse_animation: false,
            raw_transform: RefCell::new(None),
            clock_ms: Cell::new(0.0),
            restarted_at_ms: Cell::new(0.0),
            inline_transform: RefCell::new(None),
            animation_delay: RefCell::new(None),
            content_dragging: Cell::new(false),
            paused: Cell::new(false),
            restarts: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    pub fn vertical(mut self) -> Self {
        self.axis = Axis::Vertical;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_animation = true;
        self
    }

    fn travel(&self) -> f64 {
        let gap = self
            .gap
            .as_deref()
            .and_then(om_marquee_core::css::parse_gap_px)
            .unwrap_or(0.0);
        self.extent + gap
    }

    fn duration_ms(&self) -> f64 {
        self.duration
            .as_deref()
            .and_then(om_marquee_core::css::parse_duration_ms)
            .unwrap_or(DEFAULT_DURATION_MS)
    }

    /// Offset the running animation renders right now.
    pub fn animated_offset(&self) -> f64 {
        let delay = self
            .animation_delay
            .borrow()
            .as_deref()
            .and_then(parse_delay_ms)
            .unwrap_or(0.0);
        let elapsed = self.clock_ms.get() - self.restarted_at_ms.get() - delay;
        let fraction = (elapsed / self.duration_ms()).rem_euclid(1.0);
        let position = if self.reverse_animation {
            1.0 - fraction
        } else {
            fraction
        };
        -position * self.travel()
    }

    fn bump(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

fn matrix(axis: Axis, offset: f64) -> String {
    match axis {
        Axis::Horizontal => format!("matrix(1, 0, 0, 1, {offset}, 0)"),
        Axis::Vertical => format!("matrix(1, 0, 0, 1, 0, {offset})"),
    }
}

impl GeometryProvider for FakeBand {
    fn measure_extent(&self, _axis: Axis) -> f64 {
        self.extent
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        match name {
            GAP_PROPERTY => self.gap.clone(),
            DURATION_PROPERTY => self.duration.clone(),
            _ => None,
        }
    }

    fn computed_transform(&self) -> Option<String> {
        if let Some(raw) = self.raw_transform.borrow().clone() {
            return Some(raw);
        }
        if let Some(inline) = self.inline_transform.borrow().as_deref() {
            let offset = read_translate(Some(inline), self.axis).ok()?;
            return Some(matrix(self.axis, offset));
        }
        Some(matrix(self.axis, self.animated_offset()))
    }
}

impl StyleSurface for FakeBand {
    fn set_content_dragging(&self, dragging: bool) {
        self.bump();
        self.content_dragging.set(dragging);
    }

    fn set_wrappers_paused(&self, paused: bool) {
        self.bump();
        self.paused.set(paused);
    }

    fn set_wrapper_transform(&self, transform: Option<&str>) {
        self.bump();
        *self.inline_transform.borrow_mut() = transform.map(str::to_string);
    }

    fn restart_wrapper_animation(&self, delay: &str) {
        self.bump();
        self.restarts.set(self.restarts.get() + 1);
        self.restarted_at_ms.set(self.clock_ms.get());
        *self.animation_delay.borrow_mut() = Some(delay.to_string());
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}
