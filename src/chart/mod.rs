pub mod layout;
pub mod render;
pub mod svg;

pub use render::{ChartOptions, render_chart};
pub use svg::SvgCanvas;
