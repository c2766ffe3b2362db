pub mod axis;
pub mod config;
pub mod css;
pub mod disposers;
pub mod drag;
pub mod host;
pub mod transform;
pub mod visibility;

pub use axis::Axis;
pub use config::{
    ConfigError, HostCapabilities, MarqueeConfig, ScrollableChange, ScrollableToggle, StyleMap,
};
pub use css::{
    parse_delay_ms, read_duration_ms, read_gap, DEFAULT_DURATION_MS, DEFAULT_GAP_PX,
};
pub use disposers::{Disposer, Disposers};
pub use drag::{
    clamp_offset, resume_params, travel_distance, DragPhase, DragState, PointerSample,
    ResumeParams, ScrubController, ScrubOutcome, ScrubSettings,
};
pub use host::{GeometryProvider, MarqueeHost, StyleSurface};
pub use transform::{format_translate, read_translate, TransformError};
pub use visibility::{Visibility, VisibilitySubscription};

pub const CONTENT_CLASS: &str = "om-marquee-content";
pub const WRAPPER_CLASS: &str = "om-marquee-item-wrapper";
pub const DRAGGING_CLASS: &str = "dragging";
pub const PAUSED_CLASS: &str = "paused";
