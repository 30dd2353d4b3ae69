//! Thin wrappers over the browser APIs the landing page touches.
//!
//! Listener and animation-frame registrations are owned by guard values.
//! Dropping a guard undoes the registration, so keeping the guard inside a
//! `use_effect` destructor ties it to the component's lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Event, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use crate::pages::sections::{Section, SectionBounds};

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, handler, false)
    }

    /// Registers with `{ passive: true }` so scrolling is never held up by the handler.
    pub fn passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, handler, true)
    }

    fn register<F>(event: &'static str, handler: F, passive: bool) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to register {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` chain that calls `tick` once per display frame
/// until dropped.
pub struct AnimationFrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_pending = pending.clone();
        let next_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            tick();
            let Some(window) = web_sys::window() else { return };
            if let Some(cb) = next_callback.borrow().as_ref() {
                next_pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        if first.is_none() {
            warn!("requestAnimationFrame unavailable, animation not started");
            callback.borrow_mut().take();
            return None;
        }
        pending.set(first);

        Some(Self { window, pending, callback })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        // The closure holds a handle to itself; dropping it breaks the cycle.
        self.callback.borrow_mut().take();
    }
}

/// Toggle `overflow: hidden` on `<body>`.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Failed to set body overflow: {:?}", e);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(section: Section) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No element with id {}", section.id()),
    }
}

/// Bounding box of a section relative to the viewport, if it is in the DOM.
pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let rect = window()?
        .document()?
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(SectionBounds { top: rect.top(), bottom: rect.bottom() })
}
