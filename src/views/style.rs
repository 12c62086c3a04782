// src/views/style.rs

use super::emphasis::Emphasis;

/// Per-cell glow styling derived from a base color and the cell's emphasis.
/// Channels are 0.0-1.0, alphas likewise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
  pub rgb: (f64, f64, f64),
  pub border_alpha: f64,
  pub background_alpha: f64,
  pub text_alpha: f64,
  pub sub_text_alpha: f64,
  pub glow_alpha: f64,
  pub glow_radius: f64,
  /// Brightness multiplier applied to the whole cell.
  pub brightness: f64,
}

impl CellStyle {
  pub fn derive(rgb: (f64, f64, f64), emphasis: Emphasis) -> Self {
    let muted = emphasis == Emphasis::Muted;
    let focused = emphasis == Emphasis::Focused;
    let text_alpha = if muted { 0.3 } else { 1.0 };

    Self {
      rgb,
      border_alpha: if muted { 0.2 } else { 0.7 },
      background_alpha: if focused { 0.15 } else { 0.05 },
      text_alpha,
      sub_text_alpha: text_alpha * 0.8,
      glow_alpha: if focused {
        0.8
      } else if muted {
        0.1
      } else {
        0.4
      },
      glow_radius: if focused { 15.0 } else { 8.0 },
      brightness: if muted { 0.6 } else { 1.1 },
    }
  }

  /// Muted cells are drawn first so focused glows land on top.
  pub fn z_order(emphasis: Emphasis) -> u8 {
    match emphasis {
      Emphasis::Muted => 0,
      Emphasis::Normal => 1,
      Emphasis::Focused => 2,
    }
  }
}
