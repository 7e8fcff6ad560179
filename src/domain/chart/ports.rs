//! Boundary between the chart adapter and whatever draws the chart.

use super::entities::SeriesId;
use super::value_objects::{AreaSeriesOptions, ChartOptions, ChartOptionsPatch, TimeRange};
use crate::domain::errors::ChartResult;
use crate::domain::market_data::SeriesPoint;

/// Host element a chart is attached to
pub trait ChartContainer {
    /// Current layout width in CSS pixels
    fn client_width(&self) -> u32;
}

/// Factory for chart instances bound to a container
pub trait ChartEngine {
    type Container: ChartContainer + Clone + 'static;
    type Chart: ChartHandle + 'static;

    fn create_chart(&self, container: &Self::Container, options: ChartOptions) -> ChartResult<Self::Chart>;
}

/// One live chart instance
pub trait ChartHandle {
    fn add_area_series(&mut self, options: AreaSeriesOptions) -> ChartResult<SeriesId>;

    fn set_series_data(&mut self, series: SeriesId, points: &[SeriesPoint]) -> ChartResult<()>;

    /// Fit the time axis to every loaded point
    fn fit_content(&mut self) -> ChartResult<Option<TimeRange>>;

    fn apply_options(&mut self, patch: ChartOptionsPatch) -> ChartResult<()>;

    /// Release the instance and everything it allocated
    fn remove(self);
}

/// Source of viewport resize notifications
pub trait ResizeSource {
    /// Deregisters the callback when dropped
    type Listener: 'static;

    fn subscribe(&self, on_resize: Box<dyn FnMut()>) -> Self::Listener;
}
