// src/model/palette.rs
//
// Category -> color identity. A closed lookup table; every category owns exactly
// one palette entry and anything unrecognized falls back to NEUTRAL.

use super::elements::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteId {
  Sky,
  Violet,
  Red,
  Orange,
  Cyan,
  Emerald,
  Green,
  Yellow,
  Pink,
  Rose,
  Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIdentity {
  pub color_id: PaletteId,
  /// Glow / intensity family, 0-255 per channel.
  pub rgb: (u8, u8, u8),
  /// Accent used for text and borders in the detail panel.
  pub hex_accent: &'static str,
}

impl ColorIdentity {
  /// Cairo-friendly 0.0-1.0 channels.
  pub fn rgb_f64(&self) -> (f64, f64, f64) {
    let (r, g, b) = self.rgb;
    (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
  }
}

pub const NEUTRAL: ColorIdentity = ColorIdentity {
  color_id: PaletteId::Neutral,
  rgb: (148, 163, 184),
  hex_accent: "#94a3b8",
};

pub fn classify(category: Category) -> ColorIdentity {
  let (color_id, rgb, hex_accent) = match category {
    Category::AlkaliMetal => (PaletteId::Red, (239, 68, 68), "#ff1010"),
    Category::AlkalineEarthMetal => (PaletteId::Orange, (249, 115, 22), "#ff6b01"),
    Category::TransitionMetal => (PaletteId::Sky, (56, 189, 248), "#38bdf8"),
    Category::PostTransitionMetal => (PaletteId::Emerald, (52, 211, 153), "#34d399"),
    Category::Metalloid => (PaletteId::Yellow, (250, 204, 21), "#facc15"),
    Category::Nonmetal => (PaletteId::Green, (74, 222, 128), "#4ade80"),
    Category::Halogen => (PaletteId::Pink, (244, 114, 182), "#ff0084"),
    Category::NobleGas => (PaletteId::Violet, (167, 139, 250), "#a78bfa"),
    Category::Lanthanide => (PaletteId::Cyan, (34, 211, 238), "#22d3ee"),
    Category::Actinide => (PaletteId::Rose, (251, 113, 133), "#fb7185"),
  };
  ColorIdentity {
    color_id,
    rgb,
    hex_accent,
  }
}

/// Label-based lookup for untyped input. Never fails.
pub fn classify_label(label: &str) -> ColorIdentity {
  match Category::from_label(label) {
    Some(cat) => classify(cat),
    None => {
      log::warn!("Unknown category label {:?}, using neutral color", label);
      NEUTRAL
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_every_category_has_distinct_color() {
    let mut ids = HashSet::new();
    let mut rgbs = HashSet::new();
    for cat in Category::ALL {
      let c = classify(cat);
      assert_ne!(c.color_id, PaletteId::Neutral, "{} fell through", cat);
      assert!(ids.insert(c.color_id));
      assert!(rgbs.insert(c.rgb));
    }
    assert_eq!(ids.len(), 10);
  }

  #[test]
  fn test_unknown_label_is_neutral() {
    assert_eq!(classify_label("unobtainium"), NEUTRAL);
    assert_eq!(classify_label(""), NEUTRAL);
    // Substrings of real labels must not match.
    assert_eq!(classify_label("metal"), NEUTRAL);
    assert_eq!(classify_label("noble gas"), classify(Category::NobleGas));
  }

  #[test]
  fn test_classify_is_deterministic() {
    for cat in Category::ALL {
      assert_eq!(classify(cat), classify(cat));
    }
  }

  #[test]
  fn test_rgb_f64_scale() {
    let (r, g, b) = classify(Category::AlkaliMetal).rgb_f64();
    assert!((r - 239.0 / 255.0).abs() < 1e-9);
    assert!(g > 0.0 && g < 1.0);
    assert!(b > 0.0 && b < 1.0);
  }
}
