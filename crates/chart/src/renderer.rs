//! Two-series burndown chart rendering.

use std::path::Path;

use burndown_core::{IdealPoint, Observation};
use chrono::NaiveDate;
use plotters::prelude::*;
use tracing::debug;

/// Error type for chart rendering.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Both input series were empty
    #[error("nothing to render: no ideal points and no observations")]
    NothingToRender,

    /// The drawing backend failed
    #[error("chart backend error: {0}")]
    Backend(String),

    /// Writing the rendered chart to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,

    /// Draw a marker on each observation
    pub show_markers: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 600,
            show_markers: true,
        }
    }
}

/// A rendered chart, an immutable SVG value produced fresh per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    svg: String,
}

impl RenderedChart {
    /// The chart as an SVG document.
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    /// Consume the chart, returning the SVG document.
    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Write the SVG document to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }
}

/// Renders ideal and actual series into a single time chart.
///
/// Pure formatting over its inputs: identical data renders to an
/// identical document.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    /// Renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with explicit options.
    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Render the two series under a caption.
    ///
    /// Either series may be empty; both empty is reported as
    /// [`ChartError::NothingToRender`].
    pub fn render(
        &self,
        caption: &str,
        ideal: &[IdealPoint],
        actual: &[Observation],
    ) -> Result<RenderedChart> {
        if ideal.is_empty() && actual.is_empty() {
            return Err(ChartError::NothingToRender);
        }

        let (x_min, x_max) = date_bounds(ideal, actual);
        let y_max = work_ceiling(ideal, actual);
        debug!(%x_min, %x_max, y_max, "rendering chart");

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.config.width, self.config.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| ChartError::Backend(e.to_string()))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(caption, ("sans-serif", 28))
                .margin(16)
                .x_label_area_size(44)
                .y_label_area_size(56)
                .build_cartesian_2d(x_min..x_max, 0.0..y_max)
                .map_err(|e| ChartError::Backend(e.to_string()))?;

            chart
                .configure_mesh()
                .x_desc("Date")
                .y_desc("Remaining work")
                .x_labels(8)
                .draw()
                .map_err(|e| ChartError::Backend(e.to_string()))?;

            if !ideal.is_empty() {
                chart
                    .draw_series(LineSeries::new(
                        ideal.iter().map(|p| (p.date, p.remaining)),
                        BLUE.stroke_width(2),
                    ))
                    .map_err(|e| ChartError::Backend(e.to_string()))?
                    .label("Ideal")
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], BLUE.stroke_width(2))
                    });
            }

            if !actual.is_empty() {
                chart
                    .draw_series(LineSeries::new(
                        actual.iter().map(|o| (o.date, o.remaining)),
                        RED.stroke_width(2),
                    ))
                    .map_err(|e| ChartError::Backend(e.to_string()))?
                    .label("Actual")
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], RED.stroke_width(2))
                    });

                if self.config.show_markers {
                    chart
                        .draw_series(
                            actual
                                .iter()
                                .map(|o| Circle::new((o.date, o.remaining), 4, RED.filled())),
                        )
                        .map_err(|e| ChartError::Backend(e.to_string()))?;
                }
            }

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| ChartError::Backend(e.to_string()))?;

            root.present()
                .map_err(|e| ChartError::Backend(e.to_string()))?;
        }

        Ok(RenderedChart { svg })
    }
}

/// X-axis bounds over both series, widened to at least one day.
fn date_bounds(ideal: &[IdealPoint], actual: &[Observation]) -> (NaiveDate, NaiveDate) {
    let dates = ideal
        .iter()
        .map(|p| p.date)
        .chain(actual.iter().map(|o| o.date));
    let mut min = NaiveDate::MAX;
    let mut max = NaiveDate::MIN;
    for date in dates {
        min = min.min(date);
        max = max.max(date);
    }
    if min == max {
        max = max.succ_opt().unwrap_or(max);
    }
    (min, max)
}

/// Y-axis ceiling with a little headroom above the tallest sample.
fn work_ceiling(ideal: &[IdealPoint], actual: &[Observation]) -> f64 {
    let top = ideal
        .iter()
        .map(|p| p.remaining)
        .chain(actual.iter().map(|o| o.remaining))
        .fold(0.0_f64, f64::max);
    if top > 0.0 {
        top * 1.05
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burndown_core::ProjectPlan;
    use burndown_progress::{IdealLine, ProgressStore};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample_series() -> (Vec<IdealPoint>, Vec<Observation>) {
        let plan = ProjectPlan::new("Sample Project", day(1), day(11), 100.0).unwrap();
        let ideal: Vec<_> = IdealLine::new(&plan).unwrap().points().collect();

        let mut store = ProgressStore::for_plan(&plan);
        store.append(day(3), 85.0, None).unwrap();
        store.append(day(6), 60.0, None).unwrap();
        store.append(day(9), 30.0, None).unwrap();

        (ideal, store.observations())
    }

    #[test]
    fn test_empty_input_is_nothing_to_render() {
        let renderer = ChartRenderer::new();
        let result = renderer.render("empty", &[], &[]);
        assert!(matches!(result, Err(ChartError::NothingToRender)));
    }

    #[test]
    fn test_render_contains_both_series_labels() {
        let (ideal, actual) = sample_series();
        let chart = ChartRenderer::new()
            .render("Burndown Chart - Sample Project", &ideal, &actual)
            .unwrap();

        let svg = chart.as_svg();
        assert!(svg.starts_with("<?xml") || svg.contains("<svg"));
        assert!(svg.contains("Ideal"));
        assert!(svg.contains("Actual"));
        assert!(svg.contains("Remaining work"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let (ideal, actual) = sample_series();
        let renderer = ChartRenderer::new();

        let first = renderer.render("caption", &ideal, &actual).unwrap();
        let second = renderer.render("caption", &ideal, &actual).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_with_actual_only() {
        let (_, actual) = sample_series();
        let chart = ChartRenderer::new().render("actuals", &[], &actual).unwrap();
        assert!(chart.as_svg().contains("Actual"));
    }

    #[test]
    fn test_write_to_file() {
        let (ideal, actual) = sample_series();
        let chart = ChartRenderer::new().render("caption", &ideal, &actual).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burndown.svg");
        chart.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, chart.as_svg());
    }

    #[test]
    fn test_custom_dimensions() {
        let (ideal, actual) = sample_series();
        let renderer = ChartRenderer::with_config(ChartConfig {
            width: 640,
            height: 400,
            show_markers: false,
        });

        let chart = renderer.render("caption", &ideal, &actual).unwrap();
        assert!(chart.as_svg().contains("640"));
    }
}
