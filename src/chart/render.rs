//! Static chart rendering: one lane per application, one marker per event.
//!
//! The pass is strictly linear. Draw order matters: axes, lane gridlines,
//! hour bands, lane labels, then markers in input row order so later rows
//! paint over earlier ones.

use chrono::{Duration, Timelike};

use crate::chart::layout::{self, Layout, TimeScale, lane_y};
use crate::chart::svg::SvgCanvas;
use crate::core::derive::Derived;
use crate::models::status::Status;
use crate::utils::time::{band_origin, format_tick};

pub const MARKER_RADIUS: f64 = 2.0;
pub const MARKER_OPACITY: f64 = 0.5;
pub const BAND_OPACITY: f64 = 0.1;

/// Marker vertical offset from the lane centerline.
const ACTIVATION_OFFSET: f64 = 4.0;

pub mod palette {
    pub const ACTIVATED: &str = "#2288ff";
    pub const DEACTIVATED: &str = "#ff8822";
    pub const LAUNCHED: &str = "#080";
    pub const TERMINATED: &str = "#f00";

    pub const AXIS: &str = "#aaa";
    pub const AXIS_LEFT: &str = "#000";
    pub const TICK_LABEL: &str = "#bbb";
    pub const GRIDLINE: &str = "#f6f6f6";
    pub const LANE_LABEL: &str = "#000";

    pub const BAND_MIDNIGHT_NOON: &str = "#aaa";
    pub const BAND_EVEN: &str = "#ddd";
    pub const BAND_ODD: &str = "#fff";
}

/// Chart dimensions and axis tuning, resolved from config plus CLI flags.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub time_ticks: u32,
    pub background: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1000,
            time_ticks: 16,
            background: "#fdfdfd".to_string(),
        }
    }
}

/// Visual encoding of a marker. A pure function of the event status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub dy: f64,
}

pub fn marker_style(status: &Status) -> MarkerStyle {
    match status {
        Status::Activated => MarkerStyle {
            fill: palette::ACTIVATED,
            stroke: "none",
            dy: ACTIVATION_OFFSET,
        },
        Status::Deactivated => MarkerStyle {
            fill: palette::DEACTIVATED,
            stroke: "none",
            dy: -ACTIVATION_OFFSET,
        },
        Status::Launched => MarkerStyle {
            fill: "none",
            stroke: palette::LAUNCHED,
            dy: 0.0,
        },
        Status::Terminated => MarkerStyle {
            fill: "none",
            stroke: palette::TERMINATED,
            dy: 0.0,
        },
        // unclassified events stay in the document but draw nothing
        Status::Other(_) => MarkerStyle {
            fill: "none",
            stroke: "none",
            dy: 0.0,
        },
    }
}

/// Render the derived dataset as a standalone SVG document.
/// An empty event set produces no output at all.
pub fn render_chart(data: &Derived, opts: &ChartOptions) -> String {
    if data.events.is_empty() {
        return String::new();
    }

    let plot = Layout::new(opts.width, opts.height);
    let lanes = data.catalog.len();
    let x = TimeScale::new(
        data.range.start,
        data.range.end,
        (layout::PLOT_INSET, plot.width),
    );

    let mut svg = SvgCanvas::new(opts.width as f64, opts.height as f64, &opts.background);
    svg.open_group(&format!(
        "translate({},{})",
        layout::MARGIN_LEFT,
        layout::MARGIN_TOP
    ));

    draw_axes(&mut svg, &plot, &x, data, opts.time_ticks);
    draw_lane_gridlines(&mut svg, &plot, lanes);
    draw_hour_bands(&mut svg, &plot, &x, data);
    draw_lane_labels(&mut svg, &plot, data);
    draw_markers(&mut svg, &plot, &x, data);

    svg.close_group();
    svg.finish()
}

/// Left axis line (ticks suppressed) and the bottom time axis.
fn draw_axes(svg: &mut SvgCanvas, plot: &Layout, x: &TimeScale, data: &Derived, ticks: u32) {
    svg.line(-153.0, 0.0, -153.0, plot.height, palette::AXIS_LEFT);

    svg.line(
        layout::PLOT_INSET,
        plot.height,
        plot.width,
        plot.height,
        palette::AXIS,
    );

    let n = ticks.max(2) as i64;
    let span_ms = data.range.duration_millis();
    for i in 0..n {
        let offset_ms = span_ms as f64 * i as f64 / (n - 1) as f64;
        let t = data.range.start + Duration::milliseconds(offset_ms as i64);
        let tx = x.scale(t);

        svg.raw(&format!(
            "<g class=\"axis\" transform=\"translate({:.2},{})\">\
             <line y2=\"6\" stroke=\"{}\"/>\
             <text x=\"9\" y=\"10\" dy=\".35em\" font-size=\"9\" fill=\"{}\" \
             text-anchor=\"start\" transform=\"rotate(35)\">{}</text></g>\n",
            tx,
            plot.height,
            palette::AXIS,
            palette::TICK_LABEL,
            format_tick(t)
        ));
    }
}

/// One faint horizontal line per catalog entry, full plot width.
fn draw_lane_gridlines(svg: &mut SvgCanvas, plot: &Layout, lanes: usize) {
    for i in 0..lanes {
        let y = lane_y(i, lanes, plot.height);
        svg.line(0.0, y, plot.width, y, palette::GRIDLINE);
    }
}

/// Translucent hour-wide background bands over the full plot height.
///
/// The grid is anchored one hour before the top of the hour containing the
/// range start. Bands whose starting hour is midnight or noon get the
/// darkest shade; the rest alternate by offset parity.
fn draw_hour_bands(svg: &mut SvgCanvas, plot: &Layout, x: &TimeScale, data: &Derived) {
    let origin = band_origin(data.range.start);

    for nh in 0..=data.hour_span {
        let band_start = origin + Duration::hours(nh);
        let band_end = origin + Duration::hours(nh + 1);

        let x0 = x.scale(band_start);
        let w = x.scale(band_end) - x0;

        let hour = band_start.hour();
        let fill = if hour == 0 || hour == 12 {
            palette::BAND_MIDNIGHT_NOON
        } else if nh % 2 == 0 {
            palette::BAND_EVEN
        } else {
            palette::BAND_ODD
        };

        svg.rect(x0, 0.0, w, plot.height, fill, BAND_OPACITY);
    }
}

/// Application names in the left margin, one per lane.
fn draw_lane_labels(svg: &mut SvgCanvas, plot: &Layout, data: &Derived) {
    let lanes = data.catalog.len();
    for (i, name) in data.catalog.iter().enumerate() {
        let y = lane_y(i, lanes, plot.height);
        svg.text(-150.0, y, 11, palette::LANE_LABEL, name);
    }
}

/// Event markers in input row order. Rows without a usable timestamp are
/// skipped; unknown statuses are emitted invisibly.
fn draw_markers(svg: &mut SvgCanvas, plot: &Layout, x: &TimeScale, data: &Derived) {
    let lanes = data.catalog.len();

    for ev in &data.events {
        let Some(ts) = ev.timestamp else {
            continue;
        };

        let style = marker_style(&ev.status);
        let cy = lane_y(ev.lane, lanes, plot.height) + style.dy;

        svg.circle(
            x.scale(ts),
            cy,
            MARKER_RADIUS,
            style.fill,
            style.stroke,
            MARKER_OPACITY,
        );
    }
}
