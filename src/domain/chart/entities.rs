use derive_more::Display;

use super::value_objects::{AreaSeriesOptions, ChartOptions, ChartOptionsPatch, TimeRange, Viewport};
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::market_data::{SeriesPoint, time_bounds, value_bounds};

/// Width reserved on the right for price labels
pub const PRICE_SCALE_WIDTH: f64 = 56.0;
/// Height reserved at the bottom for time labels
pub const TIME_SCALE_HEIGHT: f64 = 24.0;
/// Fraction of the price span kept free above and below the series
const PRICE_MARGIN: f64 = 0.1;
const PRICE_TICKS: usize = 4;
const MAX_TIME_TICKS: usize = 6;

/// Handle of a series inside one chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "series#{}", _0)]
pub struct SeriesId(pub usize);

/// Domain entity - area series and its loaded points
#[derive(Debug, Clone)]
pub struct AreaSeries {
    pub id: SeriesId,
    pub options: AreaSeriesOptions,
    points: Vec<SeriesPoint>,
}

impl AreaSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pixel point on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis label anchored at a pixel offset along its axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Rectangle the series are drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

/// Projected geometry of one series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub id: SeriesId,
    pub options: AreaSeriesOptions,
    pub points: Vec<PlotPoint>,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub series: Vec<SeriesLayout>,
    pub price_ticks: Vec<AxisTick>,
    pub time_ticks: Vec<AxisTick>,
}

/// Domain entity - in-memory model of one area chart
#[derive(Debug, Clone)]
pub struct AreaChart {
    options: ChartOptions,
    series: Vec<AreaSeries>,
    visible_range: Option<TimeRange>,
}

impl AreaChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options, series: Vec::new(), visible_range: None }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn add_area_series(&mut self, options: AreaSeriesOptions) -> SeriesId {
        let id = SeriesId(self.series.len());
        self.series.push(AreaSeries { id, options, points: Vec::new() });
        id
    }

    pub fn series(&self, id: SeriesId) -> Option<&AreaSeries> {
        self.series.get(id.0)
    }

    /// Replace the points of a series, keeping the caller's order
    pub fn set_series_data(&mut self, id: SeriesId, points: &[SeriesPoint]) -> ChartResult<()> {
        let series = self.series.get_mut(id.0).ok_or(ChartError::UnknownSeries(id))?;
        series.points = points.to_vec();
        Ok(())
    }

    /// Show every loaded point; leaves the range untouched when nothing is loaded
    pub fn fit_content(&mut self) -> Option<TimeRange> {
        if let Some(range) = self.data_range() {
            self.visible_range = Some(range);
        }
        self.visible_range
    }

    pub fn visible_range(&self) -> Option<TimeRange> {
        self.visible_range
    }

    pub fn apply_options(&mut self, patch: ChartOptionsPatch) {
        self.options.apply(patch);
    }

    fn data_range(&self) -> Option<TimeRange> {
        self.series
            .iter()
            .filter_map(|series| time_bounds(&series.points))
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
            .map(|(from, to)| TimeRange { from, to })
    }

    fn plot_area(&self) -> PlotArea {
        PlotArea {
            width: (f64::from(self.options.width) - PRICE_SCALE_WIDTH).max(0.0),
            height: (f64::from(self.options.height) - TIME_SCALE_HEIGHT).max(0.0),
        }
    }

    fn viewport(&self, plot: PlotArea) -> Option<Viewport> {
        let range = self.visible_range.or_else(|| self.data_range())?;

        let (min_price, max_price) = self
            .series
            .iter()
            .filter_map(|series| {
                let visible: Vec<SeriesPoint> =
                    series.points.iter().filter(|p| p.time >= range.from && p.time <= range.to).copied().collect();
                value_bounds(&visible)
            })
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))?;

        let span = max_price - min_price;
        let margin = if span > 0.0 { span * PRICE_MARGIN } else { 1.0 };

        Some(Viewport {
            start_time: range.from.unix_seconds() as f64,
            end_time: range.to.unix_seconds() as f64,
            min_price: min_price - margin,
            max_price: max_price + margin,
            width: plot.width,
            height: plot.height,
        })
    }

    /// Pixel geometry for the current options, data and visible range
    pub fn layout(&self) -> ChartLayout {
        let plot = self.plot_area();
        let Some(viewport) = self.viewport(plot) else {
            return ChartLayout { plot, series: Vec::new(), price_ticks: Vec::new(), time_ticks: Vec::new() };
        };

        let series = self
            .series
            .iter()
            .map(|series| SeriesLayout {
                id: series.id,
                options: series.options,
                points: series
                    .points
                    .iter()
                    .filter(|p| p.value.is_finite())
                    .map(|p| PlotPoint {
                        x: viewport.time_to_x(p.time.unix_seconds() as f64),
                        y: viewport.price_to_y(p.value),
                    })
                    .collect(),
            })
            .collect();

        let price_ticks = (0..=PRICE_TICKS)
            .map(|i| {
                let y = plot.height * i as f64 / PRICE_TICKS as f64;
                AxisTick { position: y, label: format!("{:.2}", viewport.y_to_price(y)) }
            })
            .collect();

        ChartLayout { plot, series, price_ticks, time_ticks: self.time_ticks(&viewport) }
    }

    fn time_ticks(&self, viewport: &Viewport) -> Vec<AxisTick> {
        let Some(points) = self.series.iter().map(|s| s.points()).find(|p| !p.is_empty()) else {
            return Vec::new();
        };
        let step = points.len().div_ceil(MAX_TIME_TICKS).max(1);
        points
            .iter()
            .step_by(step)
            .map(|p| AxisTick {
                position: viewport.time_to_x(p.time.unix_seconds() as f64),
                label: p.time.short_label(),
            })
            .collect()
    }
}
