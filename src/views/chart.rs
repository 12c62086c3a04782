// src/views/chart.rs

use crate::model::{Dataset, PropertyKey};
use crate::views::detail::format_value;

/// One bar of the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
  /// Element symbol, used on the x-axis.
  pub label: String,
  pub value: f64,
  pub full_name: String,
}

/// Elements with a known value for `key`, in ascending atomic number order.
/// Order never depends on the values being charted.
pub fn build_series(dataset: &Dataset, key: PropertyKey) -> Vec<SeriesPoint> {
  let mut rows: Vec<(u32, SeriesPoint)> = dataset
    .iter()
    .filter_map(|e| {
      e.value(key).map(|value| {
        (
          e.atomic_number,
          SeriesPoint {
            label: e.symbol.clone(),
            value,
            full_name: e.name.clone(),
          },
        )
      })
    })
    .collect();
  rows.sort_by_key(|(z, _)| *z);
  rows.into_iter().map(|(_, p)| p).collect()
}

/// Hover text for one bar, e.g. "Iron (Fe): 7.874 g/cm³".
pub fn tooltip_text(point: &SeriesPoint, property: PropertyKey) -> String {
  format!(
    "{} ({}): {} {}",
    point.full_name,
    point.label,
    format_value(Some(point.value)),
    property.unit()
  )
}

/// Upper bound for the value axis, with headroom above the tallest bar.
pub fn axis_max(series: &[SeriesPoint]) -> f64 {
  let max = series.iter().map(|p| p.value).fold(0.0f64, f64::max);
  if max > 0.0 {
    max * 1.1
  } else {
    1.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::dataset::test_fixture;

  #[test]
  fn test_melting_point_skips_helium() {
    let ds = test_fixture();
    let series = build_series(&ds, PropertyKey::MeltingPoint);
    let got: Vec<(&str, f64)> = series.iter().map(|p| (p.label.as_str(), p.value)).collect();
    assert_eq!(got, vec![("H", 14.0), ("Li", 454.0)]);
    assert_eq!(series[0].full_name, "Hydrogen");
    assert_eq!(series[1].full_name, "Lithium");
  }

  #[test]
  fn test_order_is_by_atomic_number_not_value() {
    let ds = Dataset::embedded().unwrap();
    for key in PropertyKey::ALL {
      let series = build_series(&ds, key);
      let numbers: Vec<u32> = series
        .iter()
        .map(|p| ds.iter().find(|e| e.symbol == p.label).unwrap().atomic_number)
        .collect();
      assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", key);
      let expected = ds.iter().filter(|e| e.value(key).is_some()).count();
      assert_eq!(series.len(), expected);
    }
  }

  #[test]
  fn test_atomic_mass_covers_everything() {
    let ds = Dataset::embedded().unwrap();
    assert_eq!(build_series(&ds, PropertyKey::AtomicMass).len(), 118);
  }

  #[test]
  fn test_empty_when_nothing_has_value() {
    let mut elements = test_fixture().elements().to_vec();
    for e in &mut elements {
      e.electronegativity = None;
    }
    let ds = Dataset::from_elements(elements).unwrap();
    assert!(build_series(&ds, PropertyKey::Electronegativity).is_empty());
    assert_eq!(axis_max(&[]), 1.0);
  }

  #[test]
  fn test_tooltip_names_element_and_unit() {
    let series = build_series(&test_fixture(), PropertyKey::MeltingPoint);
    assert_eq!(tooltip_text(&series[1], PropertyKey::MeltingPoint), "Lithium (Li): 454 K");
  }

  #[test]
  fn test_unknown_sentinel_is_left_out() {
    let json = r#"[
      {"atomicNumber": 1, "name": "Hydrogen", "symbol": "H", "atomicMass": 1.008, "category": "nonmetal",
       "state": "gas", "density": 0.00008988, "yearDiscovered": 1766, "electronConfiguration": "1s1",
       "summary": "", "xpos": 1, "ypos": 1},
      {"atomicNumber": 2, "name": "Helium", "symbol": "He", "atomicMass": 4.0026, "category": "noble gas",
       "state": "gas", "density": "unknown", "yearDiscovered": 1868, "electronConfiguration": "1s2",
       "summary": "", "xpos": 18, "ypos": 1}
    ]"#;
    let ds = Dataset::from_json(json).unwrap();
    let labels: Vec<String> = build_series(&ds, PropertyKey::Density)
      .into_iter()
      .map(|p| p.label)
      .collect();
    assert_eq!(labels, vec!["H".to_string()]);
  }

  #[test]
  fn test_series_is_repeatable() {
    let ds = Dataset::embedded().unwrap();
    assert_eq!(
      build_series(&ds, PropertyKey::Density),
      build_series(&ds, PropertyKey::Density)
    );
  }
}
