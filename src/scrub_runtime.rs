use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, PointerEvent};

use om_marquee_core::{
    DragState, Disposers, HostCapabilities, MarqueeConfig, PointerSample, ScrollableChange,
    ScrollableToggle, ScrubController, ScrubOutcome, StyleMap, Visibility,
};

use crate::dom::{BindError, DomHost};

struct ScrubInner {
    host: DomHost,
    capabilities: HostCapabilities,
    controller: RefCell<ScrubController>,
    config: RefCell<MarqueeConfig>,
    style: RefCell<StyleMap>,
    toggle: Cell<ScrollableToggle>,
    disposers: RefCell<Disposers>,
    visibility: Visibility,
    destroyed: Cell<bool>,
}

/// One marquee instance bound to its rendered band.
///
/// Listeners hold only a weak reference, so dropping the instance tears
/// everything down.
pub struct MarqueeScrub {
    inner: Rc<ScrubInner>,
}

impl MarqueeScrub {
    pub fn attach(
        root: &Element,
        config: MarqueeConfig,
        capabilities: HostCapabilities,
    ) -> Result<Self, BindError> {
        let host = DomHost::bind(root)?;
        let inner = Rc::new(ScrubInner {
            host,
            capabilities,
            controller: RefCell::new(ScrubController::new(config.scrub_settings())),
            config: RefCell::new(MarqueeConfig::default()),
            style: RefCell::new(StyleMap::default()),
            toggle: Cell::new(ScrollableToggle::default()),
            disposers: RefCell::new(Disposers::new()),
            visibility: Visibility::new(),
            destroyed: Cell::new(false),
        });
        gloo::console::log!(
            "marquee: bound",
            inner.host.wrapper_count() as u32,
            capabilities.interactive
        );
        let scrub = Self { inner };
        scrub.apply_config(config);
        Ok(scrub)
    }

    /// Applies a new configuration: rebuilds the style map, refreshes the
    /// settings the controller reads, and attaches or removes listeners when
    /// `scrollable` flips.
    pub fn apply_config(&self, config: MarqueeConfig) {
        let inner = &self.inner;
        if inner.destroyed.get() {
            return;
        }
        let style = config.style_map();
        inner.host.apply_style_map(&inner.style.borrow(), &style);
        *inner.style.borrow_mut() = style;
        inner
            .host
            .swap_root_classes(&inner.config.borrow().style_classes(), &config.style_classes());
        inner
            .controller
            .borrow_mut()
            .set_settings(config.scrub_settings());
        let scrollable = config.scrollable;
        *inner.config.borrow_mut() = config;

        if !inner.capabilities.interactive {
            return;
        }
        let mut toggle = inner.toggle.get();
        let change = toggle.update(scrollable);
        inner.toggle.set(toggle);
        match change {
            Some(ScrollableChange::Enable) => install_listeners(inner),
            Some(ScrollableChange::Disable) => remove_listeners(inner),
            None => {}
        }
    }

    pub fn style(&self) -> StyleMap {
        self.inner.style.borrow().clone()
    }

    pub fn visibility(&self) -> Visibility {
        self.inner.visibility.clone()
    }

    pub fn set_in_view(&self, in_view: bool) -> bool {
        self.inner.visibility.set(in_view)
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.controller.borrow().is_dragging()
    }

    pub fn drag_state(&self) -> DragState {
        self.inner.controller.borrow().state()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }

    pub fn destroy(&self) {
        let inner = &self.inner;
        if inner.destroyed.replace(true) {
            return;
        }
        let mut toggle = inner.toggle.get();
        toggle.shutdown();
        inner.toggle.set(toggle);
        remove_listeners(inner);
        gloo::console::log!("marquee: destroyed");
    }
}

impl Drop for MarqueeScrub {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn listener_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

fn pointer_sample(event: &PointerEvent) -> PointerSample {
    PointerSample::new(event.client_x() as f64, event.client_y() as f64)
}

fn pointer_listener<F>(
    target: &web_sys::EventTarget,
    event_type: &'static str,
    scrub: &Weak<ScrubInner>,
    handler: F,
) -> EventListener
where
    F: Fn(&ScrubInner, &PointerEvent) + 'static,
{
    let scrub = scrub.clone();
    EventListener::new_with_options(target, event_type, listener_options(), move |event: &Event| {
        let Some(inner) = scrub.upgrade() else {
            return;
        };
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        handler(&inner, event);
    })
}

fn install_listeners(inner: &Rc<ScrubInner>) {
    let scrub = Rc::downgrade(inner);
    let content = inner.host.content();
    let window = inner.host.window();

    let down = pointer_listener(content, "pointerdown", &scrub, |inner, event| {
        let outcome = inner
            .controller
            .borrow_mut()
            .pointer_down(&inner.host, pointer_sample(event));
        if let ScrubOutcome::Started {
            transform_error: Some(err),
            ..
        } = &outcome
        {
            gloo::console::warn!("marquee: unreadable transform, scrubbing from 0", err.to_string());
        }
        if outcome.prevents_default() {
            event.prevent_default();
        }
    });
    let moved = pointer_listener(content, "pointermove", &scrub, |inner, event| {
        inner
            .controller
            .borrow_mut()
            .pointer_move(&inner.host, pointer_sample(event));
    });
    let up = pointer_listener(window, "pointerup", &scrub, |inner, _event| {
        inner.controller.borrow_mut().pointer_up(&inner.host);
    });
    let cancel = pointer_listener(window, "pointercancel", &scrub, |inner, _event| {
        inner.controller.borrow_mut().pointer_cancel(&inner.host);
    });

    let mut disposers = inner.disposers.borrow_mut();
    for listener in [down, moved, up, cancel] {
        disposers.hold(listener);
    }
    gloo::console::log!("marquee: scrub enabled", disposers.len() as u32);
}

fn remove_listeners(inner: &ScrubInner) {
    let removed = inner.disposers.borrow_mut().dispose();
    if removed > 0 {
        gloo::console::log!("marquee: scrub disabled", removed as u32);
    }
}
