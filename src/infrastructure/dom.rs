//! DOM-backed implementations of the chart container and resize ports.

use leptos::ev;
use web_sys::HtmlElement;

use crate::domain::chart::{ChartContainer, ResizeSource};
use crate::event_utils::{ListenerOptions, WindowListener, listen_window};

/// Element the chart canvas is appended to
#[derive(Debug, Clone)]
pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ChartContainer for DomContainer {
    fn client_width(&self) -> u32 {
        self.element.client_width().max(0) as u32
    }
}

/// `resize` events of the browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowResizeSource;

impl ResizeSource for WindowResizeSource {
    type Listener = WindowListener;

    fn subscribe(&self, mut on_resize: Box<dyn FnMut()>) -> WindowListener {
        listen_window(ev::resize, ListenerOptions::default(), move |_| on_resize())
    }
}
