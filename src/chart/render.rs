use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::ChartConfig;
use crate::error::AppError;

use super::table::LongTable;

fn draw_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Render one line per ticker on a shared time axis, labeling each line with
/// its ticker at the endpoint. The x axis is extended on the right by
/// `(end - start) / (size * 5)` to make room for the labels, and shows at
/// most `size` tick labels.
pub fn plot_data(table: &LongTable, config: &ChartConfig) -> Result<(), AppError> {
    let (start, end) = table
        .time_bounds()
        .ok_or_else(|| AppError::Chart("nothing to plot".to_string()))?;
    let (y_min, y_max) = table
        .value_bounds()
        .ok_or_else(|| AppError::Chart("nothing to plot".to_string()))?;

    let size = config.size.max(1);
    let offset = ((end - start) / (size as i64 * 5)).max(1);
    let y_pad = ((y_max - y_min) * 0.05).max(0.1);

    let pixels = size * 100;
    let root = BitMapBackend::new(&config.output_path, (pixels, pixels)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(start..end + offset, (y_min - y_pad)..(y_max + y_pad))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(size as usize)
        .x_desc("time")
        .y_desc("pct_change")
        .draw()
        .map_err(draw_err)?;

    let tickers = table.tickers();
    for (idx, ticker) in tickers.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                table.series(ticker),
                color.stroke_width(1),
            ))
            .map_err(draw_err)?;
    }

    // End labels sit in the right margin, vertically centered on the line's
    // final value, in the matching series color.
    for (idx, (ticker, value)) in table.last_values().into_iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let style = ("sans-serif", 12)
            .into_font()
            .color(&color)
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart
            .draw_series(std::iter::once(Text::new(ticker, (end, value), style)))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}
