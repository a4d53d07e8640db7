//! PNG chart rendering for collected series.
//!
//! Charts are drawn onto a tiny-skia pixmap: a white canvas with a framed
//! plot area, light gridlines, and the data as a stroked polyline with point
//! markers (line chart) or filled bars (histogram).

use crate::error::{Result, SensorError};
use crate::sampling::series::Series;
use std::path::Path;
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

/// Canvas width in pixels.
const CHART_WIDTH: u32 = 1000;
/// Canvas height in pixels.
const CHART_HEIGHT: u32 = 600;
/// Margin between the canvas edge and the plot area.
const MARGIN: f32 = 60.0;
/// Gridline divisions per axis.
const GRID_DIVISIONS: u32 = 5;

const GRID_COLOR: u32 = 0xE0E0E0;
const FRAME_COLOR: u32 = 0x000000;

/// Stroke color for the standard line chart (time on x).
pub const LINE_COLOR_RED: u32 = 0xD62728;
/// Stroke color for the inverted-axis line chart.
pub const LINE_COLOR_GREEN: u32 = 0x2CA02C;
/// Fill color for histogram bars.
pub const BAR_COLOR_ORANGE: u32 = 0xFF9F1C;

/// Which axis carries elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAxis {
    /// Time on the x axis, values on the y axis.
    Horizontal,
    /// Values on the x axis, time on the y axis growing downward.
    VerticalInverted,
}

/// Appearance of a line chart.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    /// Stroke and marker color as 0xRRGGBB
    pub color: u32,
    /// Axis layout
    pub time_axis: TimeAxis,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: LINE_COLOR_RED,
            time_axis: TimeAxis::Horizontal,
        }
    }
}

/// Render a series as a line chart and save it as a PNG, overwriting any
/// existing file at `path`.
///
/// The label only feeds log output; charts carry no text. An empty series is
/// an error, callers are expected to guard before rendering.
pub fn render_line_chart(series: &Series, label: &str, style: LineStyle, path: &Path) -> Result<()> {
    if series.is_empty() {
        return Err(SensorError::render_error("no samples to plot"));
    }

    let mut pixmap = new_canvas()?;
    draw_frame(&mut pixmap);

    let times: Vec<f64> = series.iter().map(|s| s.elapsed).collect();
    let values = series.values();
    let time_range = axis_range(&times);
    let value_range = axis_range(&values);

    let plot = plot_area();
    let points: Vec<(f32, f32)> = series
        .iter()
        .map(|sample| {
            let t = project(sample.elapsed, time_range);
            let v = project(sample.value, value_range);
            match style.time_axis {
                // screen y grows downward, so high values map near the top
                TimeAxis::Horizontal => (plot.left + t * plot.width(), plot.bottom - v * plot.height()),
                TimeAxis::VerticalInverted => (plot.left + v * plot.width(), plot.top + t * plot.height()),
            }
        })
        .collect();

    stroke_polyline(&mut pixmap, &points, style.color);
    fill_markers(&mut pixmap, &points, style.color);

    save_png(&pixmap, path)?;
    tracing::info!("line chart for {} saved to {}", label, path.display());
    Ok(())
}

/// Render a value histogram and save it as a PNG, overwriting any existing
/// file at `path`.
pub fn render_histogram(values: &[f64], bins: usize, label: &str, path: &Path) -> Result<()> {
    if values.is_empty() {
        return Err(SensorError::render_error("no values to bin"));
    }
    if bins == 0 {
        return Err(SensorError::render_error("histogram needs at least one bin"));
    }

    let mut pixmap = new_canvas()?;
    draw_frame(&mut pixmap);

    let (lo, hi) = axis_range(values);
    let span = hi - lo;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let idx = (((value - lo) / span) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    let plot = plot_area();
    let bar_width = plot.width() / bins as f32;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let height = plot.height() * count as f32 / peak as f32;
        let x = plot.left + i as f32 * bar_width;
        let y = plot.bottom - height;
        fill_rect(&mut pixmap, x, y, bar_width, height, BAR_COLOR_ORANGE);
        outline_rect(&mut pixmap, x, y, bar_width, height, FRAME_COLOR);
    }

    save_png(&pixmap, path)?;
    tracing::info!("histogram for {} saved to {}", label, path.display());
    Ok(())
}

/// A padded data range for one axis; degenerate ranges widen to unit size.
fn axis_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo <= f64::EPSILON {
        (lo - 0.5, lo + 0.5)
    } else {
        (lo, hi)
    }
}

/// Map a value into [0, 1] within its axis range.
fn project(value: f64, (lo, hi): (f64, f64)) -> f32 {
    ((value - lo) / (hi - lo)) as f32
}

/// The framed region charts draw into.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl PlotArea {
    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

fn plot_area() -> PlotArea {
    PlotArea {
        left: MARGIN,
        top: MARGIN,
        right: CHART_WIDTH as f32 - MARGIN,
        bottom: CHART_HEIGHT as f32 - MARGIN,
    }
}

fn new_canvas() -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(CHART_WIDTH, CHART_HEIGHT)
        .ok_or_else(|| SensorError::render_error("failed to allocate chart canvas"))?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

/// Draw gridlines and the plot-area frame.
fn draw_frame(pixmap: &mut Pixmap) {
    let plot = plot_area();

    for i in 1..GRID_DIVISIONS {
        let fx = plot.left + plot.width() * i as f32 / GRID_DIVISIONS as f32;
        let fy = plot.top + plot.height() * i as f32 / GRID_DIVISIONS as f32;
        fill_rect(pixmap, fx, plot.top, 1.0, plot.height(), GRID_COLOR);
        fill_rect(pixmap, plot.left, fy, plot.width(), 1.0, GRID_COLOR);
    }

    outline_rect(pixmap, plot.left, plot.top, plot.width(), plot.height(), FRAME_COLOR);
}

fn solid_paint(color: u32) -> Paint<'static> {
    let r = ((color >> 16) & 0xFF) as u8;
    let g = ((color >> 8) & 0xFF) as u8;
    let b = (color & 0xFF) as u8;

    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(r, g, b, 0xFF));
    paint.anti_alias = true;
    paint
}

fn fill_rect(pixmap: &mut Pixmap, x: f32, y: f32, width: f32, height: f32, color: u32) {
    if let Some(rect) = Rect::from_xywh(x, y, width, height) {
        pixmap.fill_rect(rect, &solid_paint(color), Transform::identity(), None);
    }
}

fn outline_rect(pixmap: &mut Pixmap, x: f32, y: f32, width: f32, height: f32, color: u32) {
    fill_rect(pixmap, x, y, width, 1.0, color);
    fill_rect(pixmap, x, y + height - 1.0, width, 1.0, color);
    fill_rect(pixmap, x, y, 1.0, height, color);
    fill_rect(pixmap, x + width - 1.0, y, 1.0, height, color);
}

fn stroke_polyline(pixmap: &mut Pixmap, points: &[(f32, f32)], color: u32) {
    if points.len() < 2 {
        return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(points[0].0, points[0].1);
    for &(x, y) in &points[1..] {
        builder.line_to(x, y);
    }

    if let Some(path) = builder.finish() {
        let stroke = Stroke {
            width: 2.0,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
    }
}

fn fill_markers(pixmap: &mut Pixmap, points: &[(f32, f32)], color: u32) {
    let mut builder = PathBuilder::new();
    for &(x, y) in points {
        builder.push_circle(x, y, 4.0);
    }

    if let Some(path) = builder.finish() {
        pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    pixmap.save_png(path).map_err(|err| {
        SensorError::render_error(format!("failed to write {}: {}", path.display(), err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::series::Sample;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    fn series() -> Series {
        vec![
            Sample::new(0.0, 900.0),
            Sample::new(2.0, 940.0),
            Sample::new(4.0, 910.0),
            Sample::new(8.0, 980.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_line_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_graph.png");

        render_line_chart(&series(), "fan1", LineStyle::default(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_inverted_axis_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        let style = LineStyle {
            color: LINE_COLOR_GREEN,
            time_axis: TimeAxis::VerticalInverted,
        };

        render_line_chart(&series(), "fan1", style, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_line_chart_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_graph.png");
        std::fs::write(&path, b"stale").unwrap();

        render_line_chart(&series(), "fan1", LineStyle::default(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_graph.png");

        let result = render_line_chart(&Series::new(), "fan1", LineStyle::default(), &path);
        assert!(matches!(result, Err(SensorError::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_histogram_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_distribution.png");

        render_histogram(&series().values(), 10, "fan1", &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_histogram_of_constant_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_distribution.png");

        render_histogram(&[500.0, 500.0, 500.0], 10, "fan1", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_histogram_rejects_zero_bins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rpm_distribution.png");

        let result = render_histogram(&[1.0, 2.0], 0, "fan1", &path);
        assert!(matches!(result, Err(SensorError::Render(_))));
    }
}
