use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{
    chart::{ChartColors, ChartContainer, ChartEngine, ChartHandle, ChartOptionsPatch, ResizeSource},
    errors::ChartResult,
    logging::LogComponent,
    market_data::SeriesPoint,
};
use crate::{log_debug, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("ChartAdapter");

/// Chart slot shared with the resize callback
type SharedChart<C> = Rc<RefCell<Option<C>>>;

/// A built chart plus the resize subscription keeping its width in sync.
///
/// Dropping it deregisters the listener first and then removes the chart, so
/// no resize callback can observe a released chart.
struct MountedChart<C: ChartHandle, L> {
    chart: SharedChart<C>,
    listener: Option<L>,
}

impl<C: ChartHandle, L> Drop for MountedChart<C, L> {
    fn drop(&mut self) {
        drop(self.listener.take());
        let chart = self.chart.borrow_mut().take();
        if let Some(chart) = chart {
            chart.remove();
        }
    }
}

/// Owns the lifecycle of one chart bound to one container.
///
/// `mount` tears down the previous chart before building the next one; `unmount`
/// (or dropping the adapter) releases everything.
pub struct ChartAdapter<E: ChartEngine, R: ResizeSource> {
    mounted: Option<MountedChart<E::Chart, R::Listener>>,
    engine: E,
    resize: R,
}

impl<E: ChartEngine, R: ResizeSource> ChartAdapter<E, R> {
    pub fn new(engine: E, resize: R) -> Self {
        Self { mounted: None, engine, resize }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// (Re)build the chart for `data` and `colors`.
    ///
    /// A missing container is a deferred-readiness no-op. Errors from the engine
    /// are returned after the partially built chart has been removed.
    pub fn mount(
        &mut self,
        container: Option<&E::Container>,
        data: &[SeriesPoint],
        colors: &ChartColors,
    ) -> ChartResult<()> {
        self.unmount();

        let Some(container) = container else {
            log_debug!(COMPONENT, "container not attached yet, skipping mount");
            return Ok(());
        };

        let width = container.client_width();
        let mut chart = self.engine.create_chart(container, colors.chart_options(width))?;
        if let Err(err) = Self::populate(&mut chart, data, colors) {
            chart.remove();
            return Err(err);
        }

        let shared: SharedChart<E::Chart> = Rc::new(RefCell::new(Some(chart)));
        let listener = self.resize.subscribe(Self::resize_callback(Rc::clone(&shared), container.clone()));

        log_debug!(COMPONENT, "mounted chart: {} points, width {}", data.len(), width);
        self.mounted = Some(MountedChart { chart: shared, listener: Some(listener) });
        Ok(())
    }

    /// Stop listening for resizes and release the chart. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log_debug!(COMPONENT, "chart released");
        }
    }

    fn populate(chart: &mut E::Chart, data: &[SeriesPoint], colors: &ChartColors) -> ChartResult<()> {
        let series = chart.add_area_series(colors.area_series_options())?;
        chart.set_series_data(series, data)?;
        chart.fit_content()?;
        Ok(())
    }

    fn resize_callback(chart: SharedChart<E::Chart>, container: E::Container) -> Box<dyn FnMut()> {
        Box::new(move || {
            let Ok(mut slot) = chart.try_borrow_mut() else {
                return;
            };
            if let Some(chart) = slot.as_mut() {
                if let Err(err) = chart.apply_options(ChartOptionsPatch::width(container.client_width())) {
                    log_warn!(COMPONENT, "failed to resize chart: {}", err);
                }
            }
        })
    }
}

impl<E: ChartEngine, R: ResizeSource> Drop for ChartAdapter<E, R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
