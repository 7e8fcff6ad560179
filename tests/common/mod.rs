#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use market_dashboard_wasm::application::ChartAdapter;
use market_dashboard_wasm::domain::{
    chart::{
        AreaChart, AreaSeriesOptions, ChartContainer, ChartEngine, ChartHandle, ChartOptions, ChartOptionsPatch,
        ResizeSource, SeriesId, TimeRange,
    },
    errors::{ChartError, ChartResult},
    market_data::SeriesPoint,
};

/// What the fake engine observed, in call order
#[derive(Debug, Default)]
pub struct EngineLog {
    pub events: Vec<String>,
    pub live: usize,
    pub created_widths: Vec<u32>,
    pub created_options: Vec<ChartOptions>,
    pub series_options: Vec<AreaSeriesOptions>,
    pub resized_widths: Vec<u32>,
    pub loaded: Vec<usize>,
    pub last_loaded: Vec<SeriesPoint>,
    pub fits: Vec<Option<TimeRange>>,
}

#[derive(Clone, Default)]
pub struct FakeEngine {
    pub log: Rc<RefCell<EngineLog>>,
    pub fail_set_data: Rc<Cell<bool>>,
    next_id: Rc<Cell<usize>>,
}

impl FakeEngine {
    pub fn events(&self) -> Vec<String> {
        self.log.borrow().events.clone()
    }

    pub fn live(&self) -> usize {
        self.log.borrow().live
    }
}

#[derive(Clone)]
pub struct FakeContainer {
    width: Rc<Cell<u32>>,
}

impl FakeContainer {
    pub fn new(width: u32) -> Self {
        Self { width: Rc::new(Cell::new(width)) }
    }

    pub fn set_width(&self, width: u32) {
        self.width.set(width);
    }
}

impl ChartContainer for FakeContainer {
    fn client_width(&self) -> u32 {
        self.width.get()
    }
}

pub struct FakeChart {
    id: usize,
    model: AreaChart,
    log: Rc<RefCell<EngineLog>>,
    fail_set_data: bool,
}

impl ChartEngine for FakeEngine {
    type Container = FakeContainer;
    type Chart = FakeChart;

    fn create_chart(&self, container: &FakeContainer, options: ChartOptions) -> ChartResult<FakeChart> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut log = self.log.borrow_mut();
        log.events.push(format!("create#{id}"));
        log.live += 1;
        log.created_widths.push(container.client_width());
        log.created_options.push(options);

        Ok(FakeChart {
            id,
            model: AreaChart::new(options),
            log: Rc::clone(&self.log),
            fail_set_data: self.fail_set_data.get(),
        })
    }
}

impl ChartHandle for FakeChart {
    fn add_area_series(&mut self, options: AreaSeriesOptions) -> ChartResult<SeriesId> {
        self.log.borrow_mut().series_options.push(options);
        Ok(self.model.add_area_series(options))
    }

    fn set_series_data(&mut self, series: SeriesId, points: &[SeriesPoint]) -> ChartResult<()> {
        if self.fail_set_data {
            return Err(ChartError::Backend("set_data rejected".to_string()));
        }
        self.model.set_series_data(series, points)?;
        let mut log = self.log.borrow_mut();
        log.loaded.push(points.len());
        log.last_loaded = points.to_vec();
        Ok(())
    }

    fn fit_content(&mut self) -> ChartResult<Option<TimeRange>> {
        let range = self.model.fit_content();
        self.log.borrow_mut().fits.push(range);
        Ok(range)
    }

    fn apply_options(&mut self, patch: ChartOptionsPatch) -> ChartResult<()> {
        self.model.apply_options(patch);
        self.log.borrow_mut().resized_widths.push(self.model.options().width);
        Ok(())
    }

    fn remove(self) {
        let mut log = self.log.borrow_mut();
        log.events.push(format!("remove#{}", self.id));
        log.live -= 1;
    }
}

type Callbacks = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

/// Resize source driven by hand
#[derive(Clone, Default)]
pub struct FakeResizeSource {
    callbacks: Callbacks,
}

impl FakeResizeSource {
    pub fn listener_count(&self) -> usize {
        self.callbacks.borrow().iter().filter(|cb| cb.is_some()).count()
    }

    /// Deliver one resize event to every registered listener
    pub fn fire(&self) {
        for callback in self.callbacks.borrow_mut().iter_mut().flatten() {
            callback();
        }
    }
}

pub struct FakeListener {
    slot: usize,
    callbacks: Callbacks,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.callbacks.borrow_mut()[self.slot] = None;
    }
}

impl ResizeSource for FakeResizeSource {
    type Listener = FakeListener;

    fn subscribe(&self, on_resize: Box<dyn FnMut()>) -> FakeListener {
        let mut callbacks = self.callbacks.borrow_mut();
        callbacks.push(Some(on_resize));
        FakeListener { slot: callbacks.len() - 1, callbacks: Rc::clone(&self.callbacks) }
    }
}

pub fn adapter() -> (ChartAdapter<FakeEngine, FakeResizeSource>, FakeEngine, FakeResizeSource) {
    let engine = FakeEngine::default();
    let resize = FakeResizeSource::default();
    (ChartAdapter::new(engine.clone(), resize.clone()), engine, resize)
}
