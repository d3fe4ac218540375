//! Log-log chart rendering.
use std::{ops::Range, path::PathBuf};

use plotters::{
    coord::Shift,
    drawing::DrawingAreaErrorKind,
    prelude::*,
};
use tracing::{debug, instrument, warn};

use benchplot_parser::{BenchmarkData, BRUTE_FORCE_LABEL};

use crate::{
    config::ChartConfig,
    constants::{X_AXIS_DESC, Y_AXIS_DESC},
};

/// Axis range used when there is nothing to plot on an axis.
const FALLBACK_RANGE: Range<f64> = 1.0..10.0;

/// Factor the data range is widened by on both ends.
const RANGE_MARGIN: f64 = 1.2;

/// Length of the line drawn next to each legend label, in pixels.
const LEGEND_LINE_LEN: i32 = 20;

/// Chart rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The configured background is not a `#rrggbb` color.
    #[error("invalid color {0:?}, expected \"#rrggbb\"")]
    InvalidColor(String),

    /// The drawing backend failed.
    #[error("failed to draw: {0}")]
    Draw(String),
}

fn draw_err<E>(e: DrawingAreaErrorKind<E>) -> ChartError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Draw(e.to_string())
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(s: &str) -> Result<RGBColor, ChartError> {
    let invalid = || ChartError::InvalidColor(s.to_string());

    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// The log axis range covering `values`.
///
/// An empty input gives [`FALLBACK_RANGE`], a single value is
/// widened to one decade around it.
pub fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });

    if !(min.is_finite() && max.is_finite()) {
        return FALLBACK_RANGE;
    }

    if max <= min {
        let half_decade = 10_f64.sqrt();
        return (min / half_decade)..(max * half_decade);
    }

    (min / RANGE_MARGIN)..(max * RANGE_MARGIN)
}

/// The series of `data` as plottable points, in legend order.
///
/// Variants with nothing to plot are left out, the brute-force
/// baseline always keeps its legend entry.
fn plottable_series(data: &BenchmarkData) -> Vec<(&str, Vec<(f64, f64)>)> {
    data.labelled_series()
        .filter_map(|(label, series)| {
            let points = series.points();

            let dropped = series.len() - points.len();
            if dropped != 0 {
                warn!("{label}: dropped {dropped} value(s) that cannot be drawn on a log scale");
            }

            if points.is_empty() {
                if label == BRUTE_FORCE_LABEL {
                    warn!("{label}: nothing to plot");
                } else {
                    warn!("{label}: nothing to plot, leaving it out");
                    return None;
                }
            }

            Some((label, points))
        })
        .collect()
}

/// Render `data` to the PNG at [`ChartConfig::output`], returning its PATH.
///
/// # Errors
/// Returns an error if the background color is invalid or if drawing fails.
#[instrument(level = "debug", skip_all, fields(output = %config.output.display()))]
pub fn render(data: &BenchmarkData, config: &ChartConfig) -> Result<PathBuf, ChartError> {
    let background = parse_hex_color(&config.background)?;
    let series = plottable_series(data);

    let x_range = axis_range(series.iter().flat_map(|(_, p)| p.iter().map(|&(x, _)| x)));
    let y_range = axis_range(series.iter().flat_map(|(_, p)| p.iter().map(|&(_, y)| y)));
    debug!(?x_range, ?y_range, series = series.len(), "chart layout");

    let root = BitMapBackend::new(&config.output, (config.width, config.height)).into_drawing_area();
    draw(&root, series, x_range, y_range, background, config)?;
    root.present().map_err(draw_err)?;

    Ok(config.output.clone())
}

fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    series: Vec<(&str, Vec<(f64, f64)>)>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    background: RGBColor,
    config: &ChartConfig,
) -> Result<(), ChartError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);

    if !config.caption.is_empty() {
        builder.caption(&config.caption, ("sans-serif", 24));
    }

    let mut chart = builder
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
        .map_err(draw_err)?;

    chart.plotting_area().fill(&background).map_err(draw_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(X_AXIS_DESC).y_desc(Y_AXIS_DESC);
    if !config.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(draw_err)?;

    for (i, (label, points)) in series.into_iter().enumerate() {
        let style = Palette99::pick(i).mix(1.0).stroke_width(config.line_width);

        chart
            .draw_series(LineSeries::new(points, style))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_LINE_LEN, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    Ok(())
}
