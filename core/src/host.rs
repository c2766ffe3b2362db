use crate::axis::Axis;

/// Read side of the rendering surface. Reads target the first wrapper of the
/// band; every wrapper has the same size and computed style.
pub trait GeometryProvider {
    /// Rendered size of one wrapper along `axis`, 0 when unmeasurable.
    fn measure_extent(&self, axis: Axis) -> f64;
    /// Computed value of a CSS custom property, `None` when unset.
    fn custom_property(&self, name: &str) -> Option<String>;
    /// Computed transform of the first wrapper, `None` when unavailable.
    fn computed_transform(&self) -> Option<String>;
}

/// Write side of the rendering surface. Writes fan out to every wrapper.
pub trait StyleSurface {
    /// Toggles the `dragging` marker on the content container.
    fn set_content_dragging(&self, dragging: bool);
    /// Toggles the `paused` marker on every wrapper.
    fn set_wrappers_paused(&self, paused: bool);
    /// Sets or clears the inline transform on every wrapper.
    fn set_wrapper_transform(&self, transform: Option<&str>);
    /// Clears the animation, forces a reflow, restores it with `delay`.
    fn restart_wrapper_animation(&self, delay: &str);
}

pub trait MarqueeHost: GeometryProvider + StyleSurface {}

impl<T: GeometryProvider + StyleSurface + ?Sized> MarqueeHost for T {}
