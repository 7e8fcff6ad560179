use derive_more::Display;

use crate::domain::errors::AppError;
use crate::domain::market_data::ChartTime;

/// Fixed chart height in CSS pixels
pub const CHART_HEIGHT: u32 = 260;

/// Value Object - RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 8-bit channels plus a fractional alpha, as written in CSS `rgba()`
    pub const fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgba8(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8, 1.0)
    }

    pub fn to_hex(&self) -> u32 {
        let [r, g, b] = self.channels();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// CSS form understood by canvas `fillStyle`/`strokeStyle`
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.channels();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(..)`, `rgba(..)` and a few keywords
    pub fn parse_css(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::Validation(format!("unsupported color: {:?}", input));
        let s = input.trim().to_ascii_lowercase();

        match s.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if let Some(hex) = s.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 => hex.to_string(),
                _ => return Err(invalid()),
            };
            if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            return u32::from_str_radix(&expanded, 16).map(Self::from_hex).map_err(|_| invalid());
        }

        let (body, expects_alpha) = if let Some(body) = s.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = s.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected_parts = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected_parts {
            return Err(invalid());
        }
        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let alpha = match parts.get(3) {
            Some(part) => part.parse::<f32>().map_err(|_| invalid())?.clamp(0.0, 1.0),
            None => 1.0,
        };
        Ok(Self::rgba8(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha))
    }

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
}

impl std::str::FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Grid line color shared by both axes
pub const GRID_COLOR: Color = Color::from_hex(0x222222);

/// Value Object - cosmetic configuration of an area chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartColors {
    pub background_color: Color,
    pub line_color: Color,
    pub text_color: Color,
    pub area_top_color: Color,
    pub area_bottom_color: Color,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background_color: Color::from_hex(0x171717),
            line_color: Color::from_hex(0x26a69a),
            text_color: Color::WHITE,
            area_top_color: Color::rgba8(38, 166, 154, 0.5),
            area_bottom_color: Color::rgba8(38, 166, 154, 0.05),
        }
    }
}

impl ChartColors {
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_line(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_text(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_area(mut self, top: Color, bottom: Color) -> Self {
        self.area_top_color = top;
        self.area_bottom_color = bottom;
        self
    }

    /// Chart-level options for a chart `width` pixels wide
    pub fn chart_options(&self, width: u32) -> ChartOptions {
        ChartOptions {
            layout: LayoutOptions { background: self.background_color, text_color: self.text_color },
            grid: GridOptions { vert_lines: GRID_COLOR, horz_lines: GRID_COLOR },
            width,
            height: CHART_HEIGHT,
        }
    }

    pub fn area_series_options(&self) -> AreaSeriesOptions {
        AreaSeriesOptions {
            line_color: self.line_color,
            top_color: self.area_top_color,
            bottom_color: self.area_bottom_color,
            line_width: AreaSeriesOptions::DEFAULT_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub background: Color,
    pub text_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    pub vert_lines: Color,
    pub horz_lines: Color,
}

/// Value Object - full chart options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub layout: LayoutOptions,
    pub grid: GridOptions,
    pub width: u32,
    pub height: u32,
}

impl ChartOptions {
    pub fn apply(&mut self, patch: ChartOptionsPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
    }
}

/// Partial update applied to a live chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptionsPatch {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChartOptionsPatch {
    pub fn width(width: u32) -> Self {
        Self { width: Some(width), ..Default::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSeriesOptions {
    pub line_color: Color,
    pub top_color: Color,
    pub bottom_color: Color,
    pub line_width: f64,
}

impl AreaSeriesOptions {
    pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
}

/// Value Object - visible span of the time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}..{}", from, to)]
pub struct TimeRange {
    pub from: ChartTime,
    pub to: ChartTime,
}

/// Value Object - projection of (time, price) onto a pixel rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub start_time: f64,
    pub end_time: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn time_range(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// A single timestamp lands in the horizontal center
    pub fn time_to_x(&self, time: f64) -> f64 {
        if self.time_range() == 0.0 {
            return self.width / 2.0;
        }
        (time - self.start_time) / self.time_range() * self.width
    }

    /// Y grows downwards
    pub fn price_to_y(&self, price: f64) -> f64 {
        if self.price_range() == 0.0 {
            return self.height / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        self.height * (1.0 - normalized)
    }

    pub fn y_to_price(&self, y: f64) -> f64 {
        let normalized = 1.0 - y / self.height;
        self.min_price + self.price_range() * normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_match_dashboard_palette() {
        let colors = ChartColors::default();
        assert_eq!(colors.background_color.to_hex(), 0x171717);
        assert_eq!(colors.line_color.to_css(), "rgba(38, 166, 154, 1)");
        assert_eq!(colors.area_top_color.to_css(), "rgba(38, 166, 154, 0.5)");
        assert_eq!(colors.area_bottom_color.to_css(), "rgba(38, 166, 154, 0.05)");
        assert_eq!(colors.text_color, Color::WHITE);
    }

    #[test]
    fn parses_css_colors() {
        assert_eq!(Color::parse_css("#222").unwrap(), GRID_COLOR);
        assert_eq!(Color::parse_css("#26A69A").unwrap().to_hex(), 0x26a69a);
        assert_eq!(Color::parse_css("rgba(38, 166, 154, 0.5)").unwrap(), Color::rgba8(38, 166, 154, 0.5));
        assert_eq!(Color::parse_css("rgb(255,255,255)").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_css(" White ").unwrap(), Color::WHITE);
        assert!(Color::parse_css("rgba(1, 2, 3)").is_err());
        assert!(Color::parse_css("#12345").is_err());
        assert!(Color::parse_css("teal").is_err());
    }

    #[test]
    fn hex_colors_reject_non_digit_characters() {
        for input in ["#+12345", "#+12", "#-12345", "# 12345", "#12345g"] {
            assert!(Color::parse_css(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn chart_options_use_fixed_height() {
        let options = ChartColors::default().chart_options(640);
        assert_eq!((options.width, options.height), (640, CHART_HEIGHT));
        assert_eq!(options.grid.horz_lines, GRID_COLOR);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut options = ChartColors::default().chart_options(640);
        options.apply(ChartOptionsPatch::width(320));
        assert_eq!((options.width, options.height), (320, CHART_HEIGHT));
    }

    #[test]
    fn viewport_projection() {
        let viewport = Viewport {
            start_time: 0.0,
            end_time: 10.0,
            min_price: 20.0,
            max_price: 40.0,
            width: 100.0,
            height: 200.0,
        };
        assert_eq!(viewport.time_to_x(5.0), 50.0);
        assert_eq!(viewport.price_to_y(40.0), 0.0);
        assert_eq!(viewport.price_to_y(20.0), 200.0);
        assert_eq!(viewport.y_to_price(100.0), 30.0);
    }
}
