//! Browser binding for draggable marquee bands.
//!
//! The scrub logic lives in `om-marquee-core`; this crate binds it to the
//! DOM and exposes [`MarqueeHandle`] to JavaScript.

mod bindings;
mod dom;
mod scrub_runtime;

pub use bindings::MarqueeHandle;
pub use dom::BindError;
pub use scrub_runtime::MarqueeScrub;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
