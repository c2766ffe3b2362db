use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Element, HtmlElement, Window};

use om_marquee_core::{
    Axis, GeometryProvider, StyleMap, StyleSurface, CONTENT_CLASS, DRAGGING_CLASS, PAUSED_CLASS,
    WRAPPER_CLASS,
};

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no window available")]
    NoWindow,
    #[error("marquee root is not an html element")]
    RootNotHtml,
    #[error("marquee root has no content container")]
    MissingContent,
    #[error("marquee content has no item wrappers")]
    NoWrappers,
    #[error("dom query failed: {0}")]
    Query(String),
}

fn query_error(value: JsValue) -> BindError {
    BindError::Query(format!("{value:?}"))
}

/// The rendered band: the root carrying the custom properties, the content
/// container and the repeated wrappers found when the instance was bound.
#[derive(Clone, Debug)]
pub(crate) struct DomHost {
    window: Window,
    root: HtmlElement,
    content: HtmlElement,
    wrappers: Vec<HtmlElement>,
}

impl DomHost {
    pub(crate) fn bind(root: &Element) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let content = root
            .query_selector(&format!(".{CONTENT_CLASS}"))
            .map_err(query_error)?
            .ok_or(BindError::MissingContent)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::MissingContent)?;
        let list = content
            .query_selector_all(&format!(".{WRAPPER_CLASS}"))
            .map_err(query_error)?;
        let wrappers: Vec<HtmlElement> = (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        if wrappers.is_empty() {
            return Err(BindError::NoWrappers);
        }
        let root = root
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::RootNotHtml)?;
        Ok(Self {
            window,
            root,
            content,
            wrappers,
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn content(&self) -> &HtmlElement {
        &self.content
    }

    pub(crate) fn wrapper_count(&self) -> usize {
        self.wrappers.len()
    }

    /// Writes `style` onto the root and clears what `previous` set but
    /// `style` no longer carries.
    pub(crate) fn apply_style_map(&self, previous: &StyleMap, style: &StyleMap) {
        let declaration = self.root.style();
        for name in style.removed_since(previous) {
            let _ = declaration.remove_property(name);
        }
        for (name, value) in style.iter() {
            if declaration.set_property(name, value).is_err() {
                gloo::console::warn!("marquee: rejected style property", name);
            }
        }
    }

    pub(crate) fn swap_root_classes(&self, previous: &[&str], next: &[&str]) {
        let classes = self.root.class_list();
        for name in previous.iter().filter(|name| !next.contains(name)) {
            let _ = classes.remove_1(name);
        }
        for name in next {
            if classes.add_1(name).is_err() {
                gloo::console::warn!("marquee: rejected style class", *name);
            }
        }
    }

    fn first_wrapper(&self) -> Option<&HtmlElement> {
        self.wrappers.first()
    }

    fn computed_style(&self) -> Option<CssStyleDeclaration> {
        let wrapper = self.first_wrapper()?;
        self.window.get_computed_style(wrapper).ok().flatten()
    }

    fn computed_value(&self, name: &str) -> Option<String> {
        let value = self.computed_style()?.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

impl GeometryProvider for DomHost {
    fn measure_extent(&self, axis: Axis) -> f64 {
        let Some(wrapper) = self.first_wrapper() else {
            return 0.0;
        };
        match axis {
            Axis::Horizontal => wrapper.offset_width() as f64,
            Axis::Vertical => wrapper.offset_height() as f64,
        }
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        self.computed_value(name)
    }

    fn computed_transform(&self) -> Option<String> {
        self.computed_value("transform")
    }
}

impl StyleSurface for DomHost {
    fn set_content_dragging(&self, dragging: bool) {
        let _ = self
            .content
            .class_list()
            .toggle_with_force(DRAGGING_CLASS, dragging);
    }

    fn set_wrappers_paused(&self, paused: bool) {
        for wrapper in &self.wrappers {
            let _ = wrapper.class_list().toggle_with_force(PAUSED_CLASS, paused);
        }
    }

    fn set_wrapper_transform(&self, transform: Option<&str>) {
        for wrapper in &self.wrappers {
            let style = wrapper.style();
            let _ = match transform {
                Some(value) => style.set_property("transform", value),
                None => style.remove_property("transform").map(|_| ()),
            };
        }
    }

    fn restart_wrapper_animation(&self, delay: &str) {
        for wrapper in &self.wrappers {
            let style = wrapper.style();
            let _ = style.set_property("animation", "none");
            // reading layout flushes the cleared animation
            let _ = wrapper.offset_width();
            let _ = style.remove_property("animation");
            let _ = style.set_property("animation-delay", delay);
        }
    }
}
