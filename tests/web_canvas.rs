#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use market_dashboard_wasm::application::ChartAdapter;
use market_dashboard_wasm::config::ApiConfig;
use market_dashboard_wasm::domain::chart::{ChartColors, ResizeSource, CHART_HEIGHT};
use market_dashboard_wasm::domain::errors::{AppError, FetchError};
use market_dashboard_wasm::infrastructure::http;
use market_dashboard_wasm::infrastructure::{CanvasChartEngine, DomContainer, WindowResizeSource};
use market_dashboard_wasm::presentation::dashboard::market_overview_series;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container(width_px: u32) -> DomContainer {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    element.style().set_property("width", &format!("{width_px}px")).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    DomContainer::new(element)
}

fn dispatch_resize() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn canvas_is_attached_on_mount_and_removed_on_unmount() {
    let container = container(480);
    let mut adapter = ChartAdapter::new(CanvasChartEngine, WindowResizeSource);

    adapter.mount(Some(&container), &market_overview_series().unwrap(), &ChartColors::default()).unwrap();

    let canvas = container.element().query_selector("canvas").unwrap().unwrap();
    let canvas: web_sys::HtmlCanvasElement = canvas.unchecked_into();
    assert_eq!(canvas.width(), 480);
    assert_eq!(canvas.height(), CHART_HEIGHT);

    adapter.mount(Some(&container), &[], &ChartColors::default()).unwrap();
    assert_eq!(container.element().child_element_count(), 1);

    adapter.unmount();
    assert_eq!(container.element().child_element_count(), 0);
}

#[wasm_bindgen_test]
fn window_listener_stops_firing_once_dropped() {
    let hits = Rc::new(Cell::new(0));
    let listener = WindowResizeSource.subscribe(Box::new({
        let hits = Rc::clone(&hits);
        move || hits.set(hits.get() + 1)
    }));

    dispatch_resize();
    assert_eq!(hits.get(), 1);

    drop(listener);
    dispatch_resize();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn refused_connection_rejects_as_network_error() {
    let config = ApiConfig::resolve(Some("http://127.0.0.1:1")).unwrap();

    let result = http::get_stock(&config, "AAPL").await;

    assert!(
        matches!(result, Err(AppError::Fetch(FetchError::Network(_)))),
        "expected a network error, got {result:?}"
    );
}
