use serde::{Deserialize, Serialize};

use super::value_objects::{BusinessDay, ChartTime};
use crate::domain::errors::AppError;

/// Domain entity - one `(time, value)` sample of a price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: ChartTime,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(time: impl Into<ChartTime>, value: f64) -> Self {
        Self { time: time.into(), value }
    }

    /// Point keyed by a `YYYY-MM-DD` day
    pub fn on_day(day: &str, value: f64) -> Result<Self, AppError> {
        Ok(Self::new(day.parse::<BusinessDay>()?, value))
    }
}

/// Earliest and latest time of a series, ignoring its order
pub fn time_bounds(points: &[SeriesPoint]) -> Option<(ChartTime, ChartTime)> {
    let first = points.first()?.time;
    Some(points.iter().fold((first, first), |(min, max), point| {
        (min.min(point.time), max.max(point.time))
    }))
}

/// Lowest and highest finite value of a series
pub fn value_bounds(points: &[SeriesPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        })
}
