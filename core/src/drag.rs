//! Drag-to-scrub state machine.
//!
//! While idle the band is driven by its CSS animation. A pointer-down pins
//! every wrapper at the currently rendered offset, pointer moves scrub that
//! offset within one loop of travel, and the release re-arms the animation
//! with a negative delay so playback resumes where the drag left the band.

use crate::axis::Axis;
use crate::css::{read_duration_ms, read_gap};
use crate::host::{GeometryProvider, MarqueeHost};
use crate::transform::{format_translate, read_translate, TransformError};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    /// Pointer coordinate along the axis when the drag started.
    pub pointer_origin: f64,
    /// Offset at drag start; the released offset once idle.
    pub base_offset: f64,
    /// Live offset, always within `[-(extent + gap), 0]`.
    pub current_offset: f64,
}

/// Inputs read at computation time, never cached inside a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrubSettings {
    pub axis: Axis,
    pub reverse: bool,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResumeParams {
    /// Fraction of one loop consumed by the manual offset, in `[0, 1]`.
    pub progress: f64,
    /// Animation delay in milliseconds, never positive.
    pub delay_ms: f64,
}

impl ResumeParams {
    pub fn delay_css(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrubOutcome {
    Ignored,
    Started {
        offset: f64,
        /// Set when the rendered transform could not be read and 0 was used.
        transform_error: Option<TransformError>,
    },
    Moved {
        offset: f64,
    },
    Released(ResumeParams),
}

impl ScrubOutcome {
    /// The gesture is owned by the band; default pointer behavior such as
    /// text selection should be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, ScrubOutcome::Started { .. })
    }
}

/// Distance one repeating unit travels before the loop point.
pub fn travel_distance(extent: f64, gap: f64) -> f64 {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    let gap = if gap.is_finite() { gap } else { 0.0 };
    extent + gap
}

/// Clamps a manual offset into `[-travel, 0]`.
pub fn clamp_offset(offset: f64, travel: f64) -> f64 {
    let lower = -travel.max(0.0);
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(lower, 0.0)
}

/// Computes the progress and negative animation delay for a released offset.
///
/// A negative delay makes the animation behave as if it had already been
/// running that long. Reversed bands travel the other way, so the elapsed
/// fraction is the complement of the progress.
pub fn resume_params(offset: f64, travel: f64, duration_ms: f64, reverse: bool) -> ResumeParams {
    let progress = if travel > 0.0 {
        (offset.abs() / travel).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let elapsed = if reverse { 1.0 - progress } else { progress };
    let delay_ms = -duration_ms * elapsed;
    ResumeParams {
        progress,
        // keep "0ms" instead of "-0ms"
        delay_ms: if delay_ms == 0.0 { 0.0 } else { delay_ms },
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrubController {
    settings: ScrubSettings,
    drag: DragState,
}

impl ScrubController {
    pub fn new(settings: ScrubSettings) -> Self {
        Self {
            settings,
            drag: DragState::default(),
        }
    }

    pub fn settings(&self) -> ScrubSettings {
        self.settings
    }

    /// Replaces the live settings. An in-flight drag is left alone.
    pub fn set_settings(&mut self, settings: ScrubSettings) {
        self.settings = settings;
    }

    pub fn state(&self) -> DragState {
        self.drag
    }

    pub fn phase(&self) -> DragPhase {
        if self.drag.dragging {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    pub fn pointer_down<H: MarqueeHost + ?Sized>(
        &mut self,
        host: &H,
        pointer: PointerSample,
    ) -> ScrubOutcome {
        if !self.settings.enabled || self.drag.dragging {
            return ScrubOutcome::Ignored;
        }
        let axis = self.settings.axis;
        let (rendered, transform_error) =
            match read_translate(host.computed_transform().as_deref(), axis) {
                Ok(offset) => (offset, None),
                Err(err) => (0.0, Some(err)),
            };
        let offset = clamp_offset(rendered, self.travel(host));
        self.drag = DragState {
            dragging: true,
            pointer_origin: axis.pick(pointer.client_x, pointer.client_y),
            base_offset: offset,
            current_offset: offset,
        };

        host.set_content_dragging(true);
        host.set_wrappers_paused(true);
        host.set_wrapper_transform(Some(&format_translate(axis, offset)));

        ScrubOutcome::Started {
            offset,
            transform_error,
        }
    }

    pub fn pointer_move<H: MarqueeHost + ?Sized>(
        &mut self,
        host: &H,
        pointer: PointerSample,
    ) -> ScrubOutcome {
        if !self.drag.dragging {
            return ScrubOutcome::Ignored;
        }
        let axis = self.settings.axis;
        let delta = axis.pick(pointer.client_x, pointer.client_y) - self.drag.pointer_origin;
        let offset = clamp_offset(self.drag.base_offset + delta, self.travel(host));
        self.drag.current_offset = offset;
        host.set_wrapper_transform(Some(&format_translate(axis, offset)));
        ScrubOutcome::Moved { offset }
    }

    pub fn pointer_up<H: MarqueeHost + ?Sized>(&mut self, host: &H) -> ScrubOutcome {
        self.release(host)
    }

    /// Interrupted gestures resume exactly like a pointer-up.
    pub fn pointer_cancel<H: MarqueeHost + ?Sized>(&mut self, host: &H) -> ScrubOutcome {
        self.release(host)
    }

    fn release<H: MarqueeHost + ?Sized>(&mut self, host: &H) -> ScrubOutcome {
        if !self.drag.dragging {
            return ScrubOutcome::Ignored;
        }
        self.drag.dragging = false;
        self.drag.base_offset = self.drag.current_offset;

        let params = resume_params(
            self.drag.current_offset,
            self.travel(host),
            read_duration_ms(host),
            self.settings.reverse,
        );

        host.set_content_dragging(false);
        host.set_wrappers_paused(false);
        host.restart_wrapper_animation(&params.delay_css());
        host.set_wrapper_transform(None);

        ScrubOutcome::Released(params)
    }

    fn travel<G: GeometryProvider + ?Sized>(&self, geometry: &G) -> f64 {
        travel_distance(geometry.measure_extent(self.settings.axis), read_gap(geometry))
    }
}
