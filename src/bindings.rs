use wasm_bindgen::prelude::*;
use web_sys::Element;

use om_marquee_core::{HostCapabilities, MarqueeConfig};

use crate::scrub_runtime::MarqueeScrub;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn parse_config(config_json: Option<String>) -> Result<MarqueeConfig, JsValue> {
    match config_json.as_deref().map(str::trim) {
        None | Some("") => Ok(MarqueeConfig::default()),
        Some(text) => MarqueeConfig::from_json(text).map_err(to_js),
    }
}

/// JS-facing handle for one marquee band.
#[wasm_bindgen]
pub struct MarqueeHandle {
    scrub: MarqueeScrub,
}

#[wasm_bindgen]
impl MarqueeHandle {
    /// Binds to `root`, which must contain the `.om-marquee-content`
    /// container and at least one `.om-marquee-item-wrapper`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root: Element,
        config_json: Option<String>,
        interactive: Option<bool>,
    ) -> Result<MarqueeHandle, JsValue> {
        let config = parse_config(config_json)?;
        let capabilities = if interactive.unwrap_or(true) {
            HostCapabilities::interactive()
        } else {
            HostCapabilities::inert()
        };
        let scrub = MarqueeScrub::attach(&root, config, capabilities).map_err(to_js)?;
        Ok(MarqueeHandle { scrub })
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config_json: Option<String>) -> Result<(), JsValue> {
        let config = parse_config(config_json)?;
        self.scrub.apply_config(config);
        Ok(())
    }

    #[wasm_bindgen(js_name = setInView)]
    pub fn set_in_view(&self, in_view: bool) -> bool {
        self.scrub.set_in_view(in_view)
    }

    #[wasm_bindgen(getter, js_name = inView)]
    pub fn in_view(&self) -> bool {
        self.scrub.visibility().get()
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.scrub.is_dragging()
    }

    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> u32 {
        self.scrub.listener_count() as u32
    }

    /// Current custom properties as an inline style string.
    #[wasm_bindgen(getter)]
    pub fn style(&self) -> String {
        self.scrub.style().to_css()
    }

    pub fn destroy(&self) {
        self.scrub.destroy();
    }
}
