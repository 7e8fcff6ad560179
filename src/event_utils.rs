//! Subscriptions to `window` events that end when their guard is dropped.

use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, Window};

use crate::domain::logging::LogComponent;
use crate::log_warn;

const COMPONENT: LogComponent = LogComponent::Infrastructure("Events");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// Callback attached to a window, kept alive for as long as it is attached
struct Registration {
    window: Window,
    event_name: String,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Registration {
    fn attach(window: Window, event_name: String, options: ListenerOptions, callback: Closure<dyn FnMut(Event)>) -> Option<Self> {
        let web_options = AddEventListenerOptions::new();
        web_options.set_passive(options.passive);
        web_options.set_capture(options.capture);

        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &web_options,
            )
            .map_err(|err| {
                log_warn!(COMPONENT, "could not listen for `{}`: {:?}", event_name, err);
            })
            .ok()?;

        Some(Self { window, event_name, capture: options.capture, callback })
    }

    fn detach(self) {
        let removed = self.window.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
        if let Err(err) = removed {
            log_warn!(COMPONENT, "could not stop listening for `{}`: {:?}", self.event_name, err);
        }
    }
}

/// Guard for a `window` subscription; the handler stops firing once it is dropped.
///
/// Holds nothing when registration failed, so dropping it is always safe.
pub struct WindowListener {
    registration: Option<Registration>,
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.detach();
        }
    }
}

/// Call `handler` for every `event` on `window` until the returned guard is dropped
pub fn listen_window<E>(event: E, options: ListenerOptions, mut handler: impl FnMut(E::EventType) + 'static) -> WindowListener
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let event_name = event.name().into_owned();
    let Some(window) = web_sys::window() else {
        log_warn!(COMPONENT, "no window to listen for `{}` on", event_name);
        return WindowListener { registration: None };
    };

    let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(ev.unchecked_into::<E::EventType>()));
    WindowListener { registration: Registration::attach(window, event_name, options, callback) }
}
