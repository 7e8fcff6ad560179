mod common;

use common::{FakeContainer, adapter};
use market_dashboard_wasm::domain::{
    chart::{AreaSeriesOptions, CHART_HEIGHT, ChartColors, Color, GRID_COLOR, TimeRange},
    errors::ChartError,
    market_data::SeriesPoint,
};
use market_dashboard_wasm::presentation::dashboard::market_overview_series;
use wasm_bindgen_test::*;

fn sample() -> Vec<SeriesPoint> {
    market_overview_series().unwrap()
}

#[wasm_bindgen_test]
fn mount_loads_every_point_and_fits_the_time_axis() {
    let (mut adapter, engine, resize) = adapter();
    let container = FakeContainer::new(640);

    let data = sample();
    adapter.mount(Some(&container), &data, &ChartColors::default()).unwrap();

    let log = engine.log.borrow();
    assert_eq!(log.loaded, vec![10]);
    assert_eq!(log.last_loaded, data);
    assert_eq!(log.created_widths, vec![640]);
    let expected = TimeRange {
        from: SeriesPoint::on_day("2018-12-22", 0.0).unwrap().time,
        to: SeriesPoint::on_day("2018-12-31", 0.0).unwrap().time,
    };
    assert_eq!(log.fits, vec![Some(expected)]);
    assert!(adapter.is_mounted());
    assert_eq!(resize.listener_count(), 1);
}

#[wasm_bindgen_test]
fn colors_flow_into_chart_and_series_options_with_defaults_for_the_rest() {
    let (mut adapter, engine, _resize) = adapter();
    let container = FakeContainer::new(400);
    let defaults = ChartColors::default();

    let colors = ChartColors::default()
        .with_background(Color::from_hex(0x101010))
        .with_line(Color::from_hex(0xff9800));
    adapter.mount(Some(&container), &sample(), &colors).unwrap();

    let restyled = ChartColors::default()
        .with_text(Color::from_hex(0xcccccc))
        .with_area(Color::rgba8(255, 152, 0, 0.4), Color::rgba8(255, 152, 0, 0.0));
    adapter.mount(Some(&container), &sample(), &restyled).unwrap();

    let log = engine.log.borrow();
    let &[first, second] = &log.created_options[..] else {
        panic!("expected two charts, got {:?}", log.created_options);
    };
    assert_eq!(first.layout.background, Color::from_hex(0x101010));
    assert_eq!(first.layout.text_color, defaults.text_color);
    assert_eq!((first.grid.vert_lines, first.grid.horz_lines), (GRID_COLOR, GRID_COLOR));
    assert_eq!((first.width, first.height), (400, CHART_HEIGHT));
    assert_eq!(second.layout.background, defaults.background_color);
    assert_eq!(second.layout.text_color, Color::from_hex(0xcccccc));

    let &[first, second] = &log.series_options[..] else {
        panic!("expected two series, got {:?}", log.series_options);
    };
    assert_eq!(first.line_color, Color::from_hex(0xff9800));
    assert_eq!((first.top_color, first.bottom_color), (defaults.area_top_color, defaults.area_bottom_color));
    assert_eq!(first.line_width, AreaSeriesOptions::DEFAULT_LINE_WIDTH);
    assert_eq!(second.line_color, defaults.line_color);
    assert_eq!(second.top_color, Color::rgba8(255, 152, 0, 0.4));
    assert_eq!(second.bottom_color, Color::rgba8(255, 152, 0, 0.0));
}

#[wasm_bindgen_test]
fn remount_releases_previous_chart_before_building_the_next() {
    let (mut adapter, engine, resize) = adapter();
    let container = FakeContainer::new(500);
    let colors = ChartColors::default();

    adapter.mount(Some(&container), &sample(), &colors).unwrap();
    adapter.mount(Some(&container), &sample()[..3], &colors).unwrap();

    assert_eq!(engine.events(), vec!["create#0", "remove#0", "create#1"]);
    assert_eq!(engine.live(), 1);
    assert_eq!(resize.listener_count(), 1);
    assert_eq!(engine.log.borrow().loaded, vec![10, 3]);
}

#[wasm_bindgen_test]
fn unmount_leaves_no_listener_and_no_chart() {
    let (mut adapter, engine, resize) = adapter();
    let container = FakeContainer::new(500);

    adapter.mount(Some(&container), &sample(), &ChartColors::default()).unwrap();
    adapter.unmount();

    assert_eq!(engine.live(), 0);
    assert_eq!(resize.listener_count(), 0);
    assert!(!adapter.is_mounted());

    adapter.unmount();
    assert_eq!(engine.events(), vec!["create#0", "remove#0"]);
}

#[wasm_bindgen_test]
fn resize_tracks_container_width_until_unmount() {
    let (mut adapter, engine, resize) = adapter();
    let container = FakeContainer::new(500);

    adapter.mount(Some(&container), &sample(), &ChartColors::default()).unwrap();
    container.set_width(820);
    resize.fire();
    assert_eq!(engine.log.borrow().resized_widths, vec![820]);

    adapter.unmount();
    container.set_width(300);
    resize.fire();
    assert_eq!(engine.log.borrow().resized_widths, vec![820]);
}

#[wasm_bindgen_test]
fn missing_container_defers_without_side_effects() {
    let (mut adapter, engine, resize) = adapter();

    adapter.mount(None, &sample(), &ChartColors::default()).unwrap();

    assert!(!adapter.is_mounted());
    assert!(engine.events().is_empty());
    assert_eq!(resize.listener_count(), 0);
}

#[wasm_bindgen_test]
fn failed_population_removes_the_new_chart() {
    let (mut adapter, engine, resize) = adapter();
    engine.fail_set_data.set(true);
    let container = FakeContainer::new(500);

    let err = adapter.mount(Some(&container), &sample(), &ChartColors::default()).unwrap_err();

    assert!(matches!(err, ChartError::Backend(_)));
    assert_eq!(engine.events(), vec!["create#0", "remove#0"]);
    assert_eq!(resize.listener_count(), 0);
    assert!(!adapter.is_mounted());
}

#[wasm_bindgen_test]
fn empty_data_builds_an_empty_chart() {
    let (mut adapter, engine, _resize) = adapter();
    let container = FakeContainer::new(500);

    adapter.mount(Some(&container), &[], &ChartColors::default()).unwrap();

    assert!(adapter.is_mounted());
    assert_eq!(engine.log.borrow().loaded, vec![0]);
    assert_eq!(engine.log.borrow().fits, vec![None]);
}

#[wasm_bindgen_test]
fn dropping_the_adapter_releases_everything() {
    let (mut adapter, engine, resize) = adapter();
    let container = FakeContainer::new(500);

    adapter.mount(Some(&container), &sample(), &ChartColors::default()).unwrap();
    drop(adapter);

    assert_eq!(engine.live(), 0);
    assert_eq!(resize.listener_count(), 0);
}
