// src/rendering/grid.rs
// Element grid painter for the table and heatmap views.

use crate::model::palette::{classify, NEUTRAL};
use crate::model::Element;
use crate::state::{AppState, ViewMode};
use crate::views::detail::format_value;
use crate::views::emphasis::{resolve, Emphasis};
use crate::views::heatmap::{heat_color, HeatScale};
use crate::views::layout::{GridCell, Layout, PeriodicLayout};
use crate::views::style::CellStyle;
use gtk4::cairo;
use std::f64::consts::PI;

const MARGIN: f64 = 24.0;
pub const BACKGROUND: (f64, f64, f64) = (0.02, 0.03, 0.06);

// The hover preview floats over the empty block above the transition metals.
const PREVIEW_FROM: GridCell = GridCell { column: 4, row: 1 };
const PREVIEW_TO: GridCell = GridCell { column: 12, row: 3 };

// ============================================================================
// GEOMETRY
// ============================================================================

/// Pixel placement of the grid inside a widget of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
  pub origin_x: f64,
  pub origin_y: f64,
  pub cell: f64,
  pub gap: f64,
  pub columns: u32,
  pub rows: u32,
}

impl GridGeometry {
  /// Largest square cells that fit, centered.
  pub fn fit(width: f64, height: f64, extent: (u32, u32), gap: f64) -> Self {
    let columns = extent.0.max(1);
    let rows = extent.1.max(1);
    let (c, r) = (columns as f64, rows as f64);

    let avail_w = (width - 2.0 * MARGIN).max(0.0);
    let avail_h = (height - 2.0 * MARGIN).max(0.0);
    let cell = ((avail_w - gap * (c - 1.0)) / c)
      .min((avail_h - gap * (r - 1.0)) / r)
      .max(1.0);

    let total_w = c * cell + (c - 1.0) * gap;
    let total_h = r * cell + (r - 1.0) * gap;

    Self {
      origin_x: (width - total_w) / 2.0,
      origin_y: (height - total_h) / 2.0,
      cell,
      gap,
      columns,
      rows,
    }
  }

  /// (x, y, w, h) of a 1-indexed cell.
  pub fn cell_rect(&self, cell: GridCell) -> (f64, f64, f64, f64) {
    let pitch = self.cell + self.gap;
    (
      self.origin_x + (cell.column.saturating_sub(1)) as f64 * pitch,
      self.origin_y + (cell.row.saturating_sub(1)) as f64 * pitch,
      self.cell,
      self.cell,
    )
  }

  /// Rectangle covering an inclusive block of cells.
  pub fn span_rect(&self, from: GridCell, to: GridCell) -> (f64, f64, f64, f64) {
    let (x0, y0, _, _) = self.cell_rect(from);
    let (x1, y1, w, h) = self.cell_rect(to);
    (x0, y0, x1 + w - x0, y1 + h - y0)
  }

  /// Inverse of `cell_rect`. Points in the gaps hit nothing.
  pub fn cell_at(&self, x: f64, y: f64) -> Option<GridCell> {
    let pitch = self.cell + self.gap;
    let rx = x - self.origin_x;
    let ry = y - self.origin_y;
    if rx < 0.0 || ry < 0.0 {
      return None;
    }

    let col = (rx / pitch).floor();
    let row = (ry / pitch).floor();
    if rx - col * pitch > self.cell || ry - row * pitch > self.cell {
      return None;
    }

    let cell = GridCell {
      column: col as u32 + 1,
      row: row as u32 + 1,
    };
    (cell.column <= self.columns && cell.row <= self.rows).then_some(cell)
  }
}

/// Geometry for the current state and widget size.
pub fn geometry_for(state: &AppState, width: f64, height: f64) -> GridGeometry {
  let extent = PeriodicLayout.extent(&state.dataset);
  GridGeometry::fit(width, height, extent, state.config.cell_gap)
}

/// Element under a widget-space point, if any.
pub fn hit_test<'a>(state: &'a AppState, width: f64, height: f64, x: f64, y: f64) -> Option<&'a Element> {
  let cell = geometry_for(state, width, height).cell_at(x, y)?;
  PeriodicLayout.element_at(&state.dataset, cell)
}

// ============================================================================
// DRAWING
// ============================================================================

pub fn draw_grid(cr: &cairo::Context, state: &AppState, width: f64, height: f64) -> Result<(), cairo::Error> {
  let (bg_r, bg_g, bg_b) = BACKGROUND;
  cr.set_source_rgb(bg_r, bg_g, bg_b);
  cr.paint()?;

  let geo = geometry_for(state, width, height);
  let selection = &state.selection;

  let heat = match selection.view_mode {
    ViewMode::Heatmap => HeatScale::for_property(&state.dataset, selection.selected_property),
    _ => None,
  };

  let mut cells: Vec<(&Element, Emphasis)> = state
    .dataset
    .iter()
    .map(|e| (e, resolve(e, selection)))
    .collect();
  cells.sort_by_key(|(_, emph)| CellStyle::z_order(*emph));

  for (el, emphasis) in cells {
    let rgb = match (selection.view_mode, heat) {
      (ViewMode::Heatmap, Some(scale)) => scale.intensity(el).map(heat_color).unwrap_or(NEUTRAL.rgb_f64()),
      (ViewMode::Heatmap, None) => NEUTRAL.rgb_f64(),
      _ => classify(el.category).rgb_f64(),
    };
    let style = CellStyle::derive(rgb, emphasis);
    let rect = geo.cell_rect(PeriodicLayout.position_of(el));
    draw_cell(cr, rect, el, &style)?;
  }

  if let Some(hovered) = state.hovered_element() {
    let rect = geo.span_rect(PREVIEW_FROM, PREVIEW_TO);
    draw_hover_preview(cr, rect, hovered)?;
  }

  Ok(())
}

fn rounded_rect(cr: &cairo::Context, (x, y, w, h): (f64, f64, f64, f64), r: f64) {
  let r = r.min(w / 2.0).min(h / 2.0);
  cr.new_sub_path();
  cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
  cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
  cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
  cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
  cr.close_path();
}

fn lit(rgb: (f64, f64, f64), brightness: f64) -> (f64, f64, f64) {
  (
    (rgb.0 * brightness).min(1.0),
    (rgb.1 * brightness).min(1.0),
    (rgb.2 * brightness).min(1.0),
  )
}

fn centered_text(cr: &cairo::Context, text: &str, cx: f64, baseline: f64) -> Result<(), cairo::Error> {
  let ext = cr.text_extents(text)?;
  cr.move_to(cx - ext.width() / 2.0 - ext.x_bearing(), baseline);
  cr.show_text(text)
}

/// Cuts text to fit `max_w`, appending an ellipsis.
fn fit_text(cr: &cairo::Context, text: &str, max_w: f64) -> Result<String, cairo::Error> {
  if cr.text_extents(text)?.width() <= max_w {
    return Ok(text.to_string());
  }
  let mut chars: Vec<char> = text.chars().collect();
  while !chars.is_empty() {
    chars.pop();
    let candidate: String = chars.iter().collect::<String>() + "…";
    if cr.text_extents(&candidate)?.width() <= max_w {
      return Ok(candidate);
    }
  }
  Ok(String::new())
}

fn draw_cell(
  cr: &cairo::Context,
  rect: (f64, f64, f64, f64),
  el: &Element,
  style: &CellStyle,
) -> Result<(), cairo::Error> {
  let (x, y, w, h) = rect;
  let (r, g, b) = lit(style.rgb, style.brightness);
  let radius = w * 0.06;

  // Glow: a few widening translucent outlines
  let steps = 4;
  for i in (1..=steps).rev() {
    let spread = style.glow_radius * i as f64 / steps as f64 * 0.35;
    let alpha = style.glow_alpha * 0.12 * (steps - i + 1) as f64 / steps as f64;
    cr.set_source_rgba(r, g, b, alpha);
    rounded_rect(cr, (x - spread, y - spread, w + 2.0 * spread, h + 2.0 * spread), radius + spread);
    cr.fill()?;
  }

  // Body
  cr.set_source_rgb(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2);
  rounded_rect(cr, rect, radius);
  cr.fill_preserve()?;
  cr.set_source_rgba(r, g, b, style.background_alpha);
  cr.fill_preserve()?;
  cr.set_source_rgba(r, g, b, style.border_alpha);
  cr.set_line_width(1.0);
  cr.stroke()?;

  // Atomic number
  cr.select_font_face("Monospace", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
  cr.set_font_size(w * 0.16);
  cr.set_source_rgba(r, g, b, style.sub_text_alpha);
  cr.move_to(x + w * 0.08, y + w * 0.2);
  cr.show_text(&el.atomic_number.to_string())?;

  // Symbol
  cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
  cr.set_font_size(w * 0.34);
  cr.set_source_rgba(r, g, b, style.text_alpha);
  centered_text(cr, &el.symbol, x + w / 2.0, y + h * 0.58)?;

  // Name
  cr.set_font_size(w * 0.12);
  let name = fit_text(cr, &el.name.to_uppercase(), w * 0.9)?;
  centered_text(cr, &name, x + w / 2.0, y + h * 0.76)?;

  // Mass
  cr.select_font_face("Monospace", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
  cr.set_font_size(w * 0.11);
  cr.set_source_rgba(r, g, b, style.sub_text_alpha * 0.6);
  centered_text(cr, &format_value(Some(el.atomic_mass)), x + w / 2.0, y + h * 0.92)?;

  Ok(())
}

fn draw_hover_preview(
  cr: &cairo::Context,
  rect: (f64, f64, f64, f64),
  el: &Element,
) -> Result<(), cairo::Error> {
  let pad = 12.0;
  let (x, y, w, h) = (rect.0 + pad, rect.1 + pad, rect.2 - 2.0 * pad, rect.3 - 2.0 * pad);
  if w <= 0.0 || h <= 0.0 {
    return Ok(());
  }

  cr.set_source_rgba(0.06, 0.07, 0.11, 0.92);
  rounded_rect(cr, (x, y, w, h), 16.0);
  cr.fill_preserve()?;
  cr.set_source_rgba(1.0, 1.0, 1.0, 0.1);
  cr.set_line_width(1.0);
  cr.stroke()?;

  let (r, g, b) = classify(el.category).rgb_f64();
  let unit = h / 6.0;

  // Symbol block
  cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
  cr.set_font_size(unit * 2.4);
  cr.set_source_rgb(1.0, 1.0, 1.0);
  let sym_w = cr.text_extents(&el.symbol)?.x_advance();
  cr.move_to(x + unit, y + h / 2.0 + unit * 0.8);
  cr.show_text(&el.symbol)?;

  let tx = x + unit * 2.0 + sym_w;
  let text_w = (x + w - tx - unit).max(0.0);

  cr.set_font_size(unit * 0.75);
  cr.move_to(tx, y + unit * 1.3);
  cr.show_text(&el.name.to_uppercase())?;

  cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
  cr.set_font_size(unit * 0.4);
  cr.set_source_rgba(r, g, b, 0.9);
  cr.move_to(tx, y + unit * 2.0);
  cr.show_text(&el.category.label().to_uppercase())?;

  cr.set_source_rgba(1.0, 1.0, 1.0, 0.7);
  let facts = format!(
    "{}   ·   {} K   ·   {} g/cm³",
    el.electron_configuration,
    format_value(el.melting_point),
    format_value(el.density)
  );
  let facts = fit_text(cr, &facts, text_w)?;
  cr.move_to(tx, y + unit * 2.9);
  cr.show_text(&facts)?;

  cr.select_font_face("Sans", cairo::FontSlant::Italic, cairo::FontWeight::Normal);
  cr.set_source_rgba(1.0, 1.0, 1.0, 0.55);
  let mut line_y = y + unit * 3.9;
  for line in wrap_words(cr, &el.summary, text_w, 2)? {
    cr.move_to(tx, line_y);
    cr.show_text(&line)?;
    line_y += unit * 0.6;
  }

  Ok(())
}

/// Greedy word wrap, at most `max_lines`; the last line is ellipsized.
fn wrap_words(cr: &cairo::Context, text: &str, max_w: f64, max_lines: usize) -> Result<Vec<String>, cairo::Error> {
  let mut lines = Vec::new();
  let mut current = String::new();
  let mut words = text.split_whitespace();

  while let Some(word) = words.next() {
    let candidate = if current.is_empty() {
      word.to_string()
    } else {
      format!("{} {}", current, word)
    };
    if cr.text_extents(&candidate)?.width() <= max_w || current.is_empty() {
      current = candidate;
      continue;
    }
    if lines.len() + 1 == max_lines {
      let rest: Vec<&str> = words.by_ref().collect();
      let tail = format!("{} {} {}", current, word, rest.join(" "));
      lines.push(fit_text(cr, tail.trim_end(), max_w)?);
      return Ok(lines);
    }
    lines.push(std::mem::replace(&mut current, word.to_string()));
  }
  if !current.is_empty() && lines.len() < max_lines {
    lines.push(current);
  }
  Ok(lines)
}
