// src/views/heatmap.rs

use crate::model::{Dataset, Element, PropertyKey};

/// Min/max of one property over the dataset, for heatmap coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatScale {
  pub property: PropertyKey,
  pub min: f64,
  pub max: f64,
}

impl HeatScale {
  /// `None` when no element has the property.
  pub fn for_property(dataset: &Dataset, property: PropertyKey) -> Option<Self> {
    let mut values = dataset.iter().filter_map(|e| e.value(property));
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(Self { property, min, max })
  }

  /// Position of the element's value in [0, 1]. Flat scales sit at the middle.
  pub fn intensity(&self, element: &Element) -> Option<f64> {
    let v = element.value(self.property)?;
    let span = self.max - self.min;
    if span <= f64::EPSILON {
      return Some(0.5);
    }
    Some(((v - self.min) / span).clamp(0.0, 1.0))
  }
}

// Cold -> hot ramp stops: cyan, violet, rose.
const RAMP: [(f64, f64, f64); 3] = [
  (34.0 / 255.0, 211.0 / 255.0, 238.0 / 255.0),
  (167.0 / 255.0, 139.0 / 255.0, 250.0 / 255.0),
  (251.0 / 255.0, 113.0 / 255.0, 133.0 / 255.0),
];

/// Maps an intensity onto the ramp. Out-of-range input is clamped.
pub fn heat_color(t: f64) -> (f64, f64, f64) {
  let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
  let (a, b, local) = if t < 0.5 {
    (RAMP[0], RAMP[1], t * 2.0)
  } else {
    (RAMP[1], RAMP[2], (t - 0.5) * 2.0)
  };
  (
    a.0 + (b.0 - a.0) * local,
    a.1 + (b.1 - a.1) * local,
    a.2 + (b.2 - a.2) * local,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::dataset::test_fixture;

  #[test]
  fn test_scale_bounds() {
    let ds = test_fixture();
    let scale = HeatScale::for_property(&ds, PropertyKey::MeltingPoint).unwrap();
    assert_eq!(scale.min, 14.0);
    assert_eq!(scale.max, 454.0);
    assert_eq!(scale.intensity(ds.get(1).unwrap()), Some(0.0));
    assert_eq!(scale.intensity(ds.get(3).unwrap()), Some(1.0));
    assert_eq!(scale.intensity(ds.get(2).unwrap()), None);
  }

  #[test]
  fn test_no_values_no_scale() {
    let mut elements = test_fixture().elements().to_vec();
    for e in &mut elements {
      e.density = None;
    }
    let ds = Dataset::from_elements(elements).unwrap();
    assert!(HeatScale::for_property(&ds, PropertyKey::Density).is_none());
  }

  #[test]
  fn test_flat_scale_is_midpoint() {
    let mut elements = test_fixture().elements().to_vec();
    for e in &mut elements {
      e.atomic_radius = Some(100.0);
    }
    let ds = Dataset::from_elements(elements).unwrap();
    let scale = HeatScale::for_property(&ds, PropertyKey::AtomicRadius).unwrap();
    assert!(ds.iter().all(|e| scale.intensity(e) == Some(0.5)));
  }

  fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
  }

  #[test]
  fn test_ramp_endpoints() {
    assert!(close(heat_color(0.0), RAMP[0]));
    assert!(close(heat_color(0.5), RAMP[1]));
    assert!(close(heat_color(1.0), RAMP[2]));
    assert!(close(heat_color(-3.0), RAMP[0]));
    assert!(close(heat_color(7.0), RAMP[2]));
    assert!(close(heat_color(f64::NAN), RAMP[0]));
  }
}
