// src/rendering/chart.rs
// Property comparison bar chart, drawn with plotters onto any backend.

use crate::model::PropertyKey;
use crate::views::chart::{axis_max, SeriesPoint};

use gtk4::cairo;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::TextStyle;
use plotters_cairo::CairoBackend;
use std::path::Path;

const TEXT: RGBColor = RGBColor(148, 163, 184);
const BAR_TOP: RGBColor = RGBColor(34, 211, 238);
const BAR_BOTTOM: RGBColor = RGBColor(167, 139, 250);
pub const BACKGROUND: RGBColor = RGBColor(5, 8, 15);

const CHART_MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 70;

/// Draws the series onto a plotters canvas. Works for screen and file backends.
pub fn draw_comparison_chart<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  series: &[SeriesPoint],
  property: PropertyKey,
) -> Result<(), Box<dyn std::error::Error>>
where
  DB::ErrorType: 'static,
{
  root.fill(&BACKGROUND)?;

  if series.is_empty() {
    let (w, h) = root.dim_in_pixel();
    let style = TextStyle::from(("sans-serif", 18).into_font()).color(&TEXT);
    root.draw_text(
      &format!("No {} data available", property.label()),
      &style,
      (w as i32 / 2 - 110, h as i32 / 2),
    )?;
    return Ok(());
  }

  let n = series.len();
  let y_max = axis_max(series);

  let mut chart = ChartBuilder::on(root)
    .caption(
      format!("{} ({})", property.label(), property.unit()),
      ("sans-serif", 18).into_font().color(&TEXT),
    )
    .margin(CHART_MARGIN)
    .x_label_area_size(X_LABEL_AREA)
    .y_label_area_size(Y_LABEL_AREA)
    .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)?;

  let label_of = |v: &SegmentValue<usize>| match v {
    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
      series.get(*i).map(|p| p.label.clone()).unwrap_or_default()
    }
    SegmentValue::Last => String::new(),
  };

  chart
    .configure_mesh()
    .disable_x_mesh()
    .light_line_style(TRANSPARENT.stroke_width(0))
    .bold_line_style(WHITE.mix(0.05).stroke_width(1))
    .axis_style(TEXT.mix(0.4).stroke_width(1))
    .label_style(("sans-serif", 10).into_font().color(&TEXT))
    .x_labels(n.min(60))
    .x_label_formatter(&label_of)
    .y_desc(property.unit())
    .axis_desc_style(("sans-serif", 12).into_font().color(&TEXT))
    .draw()?;

  // Blend from violet (low) to cyan (high) by relative height.
  chart.draw_series(
    Histogram::vertical(&chart)
      .style_func(move |_, v: &f64| bar_color(*v / y_max).mix(0.8).filled())
      .margin(1)
      .data(series.iter().enumerate().map(|(i, p)| (i, p.value))),
  )?;

  Ok(())
}

/// Index of the bar under pixel column `x` in a chart `width` pixels wide.
pub fn bar_at(width: i32, x: f64, bars: usize) -> Option<usize> {
  let left = (CHART_MARGIN + Y_LABEL_AREA) as f64;
  let right = width as f64 - CHART_MARGIN as f64;
  segment_at(x, left, right, bars)
}

/// `(0..n).into_segmented()` splits the axis into n + 1 equal slots; the last stays empty.
fn segment_at(x: f64, left: f64, right: f64, n: usize) -> Option<usize> {
  if n == 0 || right <= left || x < left || x >= right {
    return None;
  }
  let slot = (right - left) / (n + 1) as f64;
  let idx = ((x - left) / slot).floor() as usize;
  (idx < n).then_some(idx)
}

fn bar_color(t: f64) -> RGBColor {
  let t = t.clamp(0.0, 1.0);
  RGBColor(
    lerp(BAR_BOTTOM.0, BAR_TOP.0, t),
    lerp(BAR_BOTTOM.1, BAR_TOP.1, t),
    lerp(BAR_BOTTOM.2, BAR_TOP.2, t),
  )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
  (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Draws onto a GTK drawing area's cairo context.
pub fn draw_on_context(
  cr: &cairo::Context,
  width: i32,
  height: i32,
  series: &[SeriesPoint],
  property: PropertyKey,
) -> Result<(), Box<dyn std::error::Error>> {
  let backend = CairoBackend::new(cr, (width.max(1) as u32, height.max(1) as u32))?;
  let root = backend.into_drawing_area();
  draw_comparison_chart(&root, series, property)
}

/// Writes the chart to disk. Format follows the extension: .pdf, .svg, else PNG.
pub fn export_chart(
  path: &Path,
  series: &[SeriesPoint],
  property: PropertyKey,
) -> Result<(), Box<dyn std::error::Error>> {
  let (width, height) = (1200.0, 600.0);
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| e.to_lowercase())
    .unwrap_or_default();

  match ext.as_str() {
    "pdf" => {
      let surface = cairo::PdfSurface::new(width, height, path)?;
      let ctx = cairo::Context::new(&surface)?;
      draw_on_context(&ctx, width as i32, height as i32, series, property)?;
      surface.finish();
    }
    "svg" => {
      let surface = cairo::SvgSurface::new(width, height, Some(path))?;
      let ctx = cairo::Context::new(&surface)?;
      draw_on_context(&ctx, width as i32, height as i32, series, property)?;
      surface.finish();
    }
    _ => {
      let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
      {
        let ctx = cairo::Context::new(&surface)?;
        draw_on_context(&ctx, width as i32, height as i32, series, property)?;
      }
      let mut file = std::fs::File::create(path)?;
      surface.write_to_png(&mut file)?;
    }
  }

  log::info!("Chart exported to {:?}", path);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lerp_endpoints() {
    assert_eq!(lerp(10, 200, 0.0), 10);
    assert_eq!(lerp(10, 200, 1.0), 200);
    assert_eq!(lerp(200, 10, 0.5), 105);
  }

  #[test]
  fn test_segment_at_maps_slots() {
    // 4 bars over 500 px: five 100 px slots, the fifth empty.
    assert_eq!(segment_at(0.0, 0.0, 500.0, 4), Some(0));
    assert_eq!(segment_at(99.9, 0.0, 500.0, 4), Some(0));
    assert_eq!(segment_at(250.0, 0.0, 500.0, 4), Some(2));
    assert_eq!(segment_at(399.0, 0.0, 500.0, 4), Some(3));
    assert_eq!(segment_at(450.0, 0.0, 500.0, 4), None);
    assert_eq!(segment_at(-1.0, 0.0, 500.0, 4), None);
    assert_eq!(segment_at(10.0, 0.0, 500.0, 0), None);
  }

  #[test]
  fn test_bar_at_skips_label_area() {
    let left = (CHART_MARGIN + Y_LABEL_AREA) as f64;
    assert_eq!(bar_at(800, left - 1.0, 3), None);
    assert_eq!(bar_at(800, left + 1.0, 3), Some(0));
    assert_eq!(bar_at(800, 795.0, 3), None);
    assert_eq!(bar_at(50, 10.0, 3), None);
  }

  #[test]
  fn test_bar_color_clamps() {
    assert_eq!(bar_color(-1.0), BAR_BOTTOM);
    assert_eq!(bar_color(2.0), BAR_TOP);
  }
}
