//! Chart geometry: margins, plot area and coordinate scales.

use chrono::{DateTime, Utc};

pub const MARGIN_TOP: f64 = 5.0;
pub const MARGIN_RIGHT: f64 = 15.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 155.0;

/// Left inset of the time axis inside the plot area.
pub const PLOT_INSET: f64 = 10.0;

/// Plot area after margin subtraction.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            width: canvas_width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            height: canvas_height as f64 - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }
}

/// Linear mapping from a numeric domain onto drawing coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn scale(&self, v: f64) -> f64 {
        if self.d1 == self.d0 {
            // degenerate domain collapses onto the range start
            return self.r0;
        }
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Linear-in-time horizontal scale over millisecond instants.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new(
                (
                    start.timestamp_millis() as f64,
                    end.timestamp_millis() as f64,
                ),
                range,
            ),
        }
    }

    pub fn scale(&self, t: DateTime<Utc>) -> f64 {
        self.inner.scale(t.timestamp_millis() as f64)
    }
}

/// Vertical centerline of a lane. Lane 0 sits at the bottom of the plot.
pub fn lane_y(index: usize, lanes: usize, plot_height: f64) -> f64 {
    plot_height - index as f64 * (plot_height - PLOT_INSET) / lanes as f64
}
