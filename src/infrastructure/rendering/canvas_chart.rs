use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{
        AreaChart, AreaSeriesOptions, ChartEngine, ChartHandle, ChartLayout, ChartOptions, ChartOptionsPatch,
        SeriesId, SeriesLayout, TIME_SCALE_HEIGHT, TimeRange,
    },
    errors::{ChartError, ChartResult},
    logging::LogComponent,
    market_data::SeriesPoint,
};
use crate::infrastructure::dom::DomContainer;
use crate::{log_debug, log_trace};

const COMPONENT: LogComponent = LogComponent::Infrastructure("CanvasChart");
const LABEL_FONT: &str = "11px -apple-system, BlinkMacSystemFont, sans-serif";
const LABEL_PADDING: f64 = 6.0;

fn backend(err: JsValue) -> ChartError {
    ChartError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Canvas 2D implementation of the chart engine
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasChartEngine;

impl ChartEngine for CanvasChartEngine {
    type Container = DomContainer;
    type Chart = CanvasChart;

    fn create_chart(&self, container: &DomContainer, options: ChartOptions) -> ChartResult<CanvasChart> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ChartError::Backend("document is not available".to_string()))?;

        let canvas = document
            .create_element("canvas")
            .map_err(backend)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Backend("created element is not a canvas".to_string()))?;

        container.element().append_child(&canvas).map_err(backend)?;

        let ctx = match Self::context_2d(&canvas) {
            Ok(ctx) => ctx,
            Err(err) => {
                canvas.remove();
                return Err(err);
            }
        };

        let chart = CanvasChart { canvas, ctx, model: AreaChart::new(options) };
        chart.resize_canvas();
        if let Err(err) = chart.redraw() {
            chart.remove();
            return Err(err);
        }

        log_debug!(COMPONENT, "created {}x{} canvas chart", options.width, options.height);
        Ok(chart)
    }
}

impl CanvasChartEngine {
    fn context_2d(canvas: &HtmlCanvasElement) -> ChartResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(backend)?
            .ok_or_else(|| ChartError::Backend("2d context is not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Backend("failed to cast to 2d context".to_string()))
    }
}

/// Area chart drawn into its own `<canvas>` element
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    model: AreaChart,
}

impl CanvasChart {
    fn resize_canvas(&self) {
        let options = self.model.options();
        self.canvas.set_width(options.width);
        self.canvas.set_height(options.height);
    }

    /// Repaint the whole canvas from the model
    fn redraw(&self) -> ChartResult<()> {
        let options = self.model.options();
        let layout = self.model.layout();
        let (width, height) = (f64::from(options.width), f64::from(options.height));

        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str(&options.layout.background.to_css());
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.draw_grid(&layout);
        for series in &layout.series {
            self.draw_area(series, &layout)?;
        }
        self.draw_labels(&layout);

        log_trace!(COMPONENT, "redraw: {} series, plot {}x{}", layout.series.len(), layout.plot.width, layout.plot.height);
        Ok(())
    }

    fn draw_grid(&self, layout: &ChartLayout) {
        let grid = self.model.options().grid;
        self.ctx.set_line_width(1.0);

        self.ctx.set_stroke_style_str(&grid.horz_lines.to_css());
        self.ctx.begin_path();
        for tick in &layout.price_ticks {
            let y = tick.position.round() + 0.5;
            self.ctx.move_to(0.0, y);
            self.ctx.line_to(layout.plot.width, y);
        }
        self.ctx.stroke();

        self.ctx.set_stroke_style_str(&grid.vert_lines.to_css());
        self.ctx.begin_path();
        for tick in &layout.time_ticks {
            let x = tick.position.round() + 0.5;
            self.ctx.move_to(x, 0.0);
            self.ctx.line_to(x, layout.plot.height);
        }
        self.ctx.stroke();
    }

    fn draw_area(&self, series: &SeriesLayout, layout: &ChartLayout) -> ChartResult<()> {
        let (Some(first), Some(last)) = (series.points.first(), series.points.last()) else {
            return Ok(());
        };
        let bottom = layout.plot.height;

        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, bottom);
        gradient.add_color_stop(0.0, &series.options.top_color.to_css()).map_err(backend)?;
        gradient.add_color_stop(1.0, &series.options.bottom_color.to_css()).map_err(backend)?;

        self.ctx.begin_path();
        self.ctx.move_to(first.x, bottom);
        for point in &series.points {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.line_to(last.x, bottom);
        self.ctx.close_path();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in series.points.iter().skip(1) {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.set_line_width(series.options.line_width);
        self.ctx.set_stroke_style_str(&series.options.line_color.to_css());
        self.ctx.stroke();
        Ok(())
    }

    fn draw_labels(&self, layout: &ChartLayout) {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(&self.model.options().layout.text_color.to_css());

        self.ctx.set_text_align("left");
        let last_tick = layout.price_ticks.len().saturating_sub(1);
        for (i, tick) in layout.price_ticks.iter().enumerate() {
            // keep the outermost labels inside the canvas
            let baseline = match i {
                0 => "top",
                i if i == last_tick => "bottom",
                _ => "middle",
            };
            self.ctx.set_text_baseline(baseline);
            let _ = self.ctx.fill_text(&tick.label, layout.plot.width + LABEL_PADDING, tick.position);
        }

        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let label_y = layout.plot.height + TIME_SCALE_HEIGHT / 2.0;
        for tick in &layout.time_ticks {
            let _ = self.ctx.fill_text(&tick.label, tick.position, label_y);
        }
    }
}

impl ChartHandle for CanvasChart {
    fn add_area_series(&mut self, options: AreaSeriesOptions) -> ChartResult<SeriesId> {
        let id = self.model.add_area_series(options);
        self.redraw()?;
        Ok(id)
    }

    fn set_series_data(&mut self, series: SeriesId, points: &[SeriesPoint]) -> ChartResult<()> {
        self.model.set_series_data(series, points)?;
        self.redraw()
    }

    fn fit_content(&mut self) -> ChartResult<Option<TimeRange>> {
        let range = self.model.fit_content();
        self.redraw()?;
        Ok(range)
    }

    fn apply_options(&mut self, patch: ChartOptionsPatch) -> ChartResult<()> {
        self.model.apply_options(patch);
        self.resize_canvas();
        self.redraw()
    }

    fn remove(self) {
        self.canvas.remove();
        log_debug!(COMPONENT, "canvas chart removed");
    }
}
