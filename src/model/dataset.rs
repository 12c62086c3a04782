// src/model/dataset.rs

use super::elements::{Category, Element};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// The full periodic table, embedded at compile time.
const ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

/// Immutable element table, ordered by atomic number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
  elements: Vec<Element>,
}

impl Dataset {
  /// Parses the compiled-in table.
  pub fn embedded() -> io::Result<Self> {
    Self::from_json(ELEMENTS_JSON)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
    let text = fs::read_to_string(path)?;
    Self::from_json(&text)
  }

  pub fn from_json(text: &str) -> io::Result<Self> {
    let elements: Vec<Element> = serde_json::from_str(text)
      .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid element table: {}", e)))?;
    Self::from_elements(elements)
  }

  /// Checks the table invariants and sorts by atomic number.
  pub fn from_elements(mut elements: Vec<Element>) -> io::Result<Self> {
    let mut numbers = HashSet::new();
    let mut cells = HashSet::new();

    for el in &elements {
      if !numbers.insert(el.atomic_number) {
        return Err(invalid(format!("Duplicate atomic number {} ({})", el.atomic_number, el.symbol)));
      }
      if el.xpos == 0 || el.ypos == 0 {
        return Err(invalid(format!("{} has a zero grid coordinate", el.symbol)));
      }
      if !cells.insert((el.xpos, el.ypos)) {
        return Err(invalid(format!(
          "{} shares grid cell ({}, {}) with another element",
          el.symbol, el.xpos, el.ypos
        )));
      }
      for (field, value) in el.numeric_fields() {
        if let Some(v) = value {
          if !v.is_finite() || v < 0.0 {
            return Err(invalid(format!("{} has invalid {}: {}", el.symbol, field, v)));
          }
        }
      }
    }

    elements.sort_by_key(|e| e.atomic_number);
    log::debug!("Dataset validated: {} elements", elements.len());
    Ok(Self { elements })
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn elements(&self) -> &[Element] {
    &self.elements
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Element> {
    self.elements.iter()
  }

  pub fn get(&self, atomic_number: u32) -> Option<&Element> {
    self
      .elements
      .binary_search_by_key(&atomic_number, |e| e.atomic_number)
      .ok()
      .map(|i| &self.elements[i])
  }

  /// Distinct categories present, sorted alphabetically by label.
  pub fn categories(&self) -> Vec<Category> {
    let mut cats: Vec<Category> = Vec::new();
    for el in &self.elements {
      if !cats.contains(&el.category) {
        cats.push(el.category);
      }
    }
    cats.sort_by_key(|c| c.label());
    cats
  }

  /// (columns, rows) spanned by the table.
  pub fn grid_extent(&self) -> (u32, u32) {
    self
      .elements
      .iter()
      .fold((0, 0), |(c, r), e| (c.max(e.xpos), r.max(e.ypos)))
  }
}

impl<'a> IntoIterator for &'a Dataset {
  type Item = &'a Element;
  type IntoIter = std::slice::Iter<'a, Element>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

fn invalid(msg: String) -> io::Error {
  io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Small fixture shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn test_fixture() -> Dataset {
  // Listed out of order on purpose.
  let json = r#"[
    {"atomicNumber": 3, "name": "Lithium", "symbol": "Li", "atomicMass": 6.94, "category": "alkali metal",
     "state": "solid", "density": 0.534, "meltingPoint": 454, "boilingPoint": 1603, "electronegativity": 0.98,
     "atomicRadius": 145, "yearDiscovered": 1817, "electronConfiguration": "[He] 2s1",
     "summary": "A soft alkali metal.", "xpos": 1, "ypos": 2},
    {"atomicNumber": 1, "name": "Hydrogen", "symbol": "H", "atomicMass": 1.008, "category": "nonmetal",
     "state": "gas", "density": 0.00008988, "meltingPoint": 14, "boilingPoint": 20.28, "electronegativity": 2.2,
     "atomicRadius": 25, "yearDiscovered": 1766, "electronConfiguration": "1s1",
     "summary": "The lightest element.", "cpkHex": "FFFFFF", "xpos": 1, "ypos": 1},
    {"atomicNumber": 2, "name": "Helium", "symbol": "He", "atomicMass": 4.0026, "category": "noble gas",
     "state": "gas", "density": 0.0001785, "meltingPoint": null, "boilingPoint": 4.22, "electronegativity": null,
     "atomicRadius": 31, "yearDiscovered": 1868, "electronConfiguration": "1s2",
     "summary": "An inert gas.", "xpos": 18, "ypos": 1}
  ]"#;
  Dataset::from_json(json).expect("fixture is valid")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_embedded_table_is_complete() {
    let ds = Dataset::embedded().unwrap();
    assert_eq!(ds.len(), 118);
    for (i, el) in ds.iter().enumerate() {
      assert_eq!(el.atomic_number as usize, i + 1);
    }
    assert_eq!(ds.categories().len(), Category::ALL.len());
    assert_eq!(ds.grid_extent(), (18, 10));
  }

  #[test]
  fn test_lookup_by_atomic_number() {
    let ds = Dataset::embedded().unwrap();
    assert_eq!(ds.get(26).map(|e| e.symbol.as_str()), Some("Fe"));
    assert_eq!(ds.get(15).map(|e| e.name.as_str()), Some("Phosphorus"));
    assert!(ds.get(0).is_none());
    assert!(ds.get(119).is_none());
  }

  #[test]
  fn test_fixture_is_sorted() {
    let ds = test_fixture();
    let order: Vec<u32> = ds.iter().map(|e| e.atomic_number).collect();
    assert_eq!(order, vec![1, 2, 3]);
  }

  #[test]
  fn test_categories_sorted_by_label() {
    let ds = test_fixture();
    assert_eq!(
      ds.categories(),
      vec![Category::AlkaliMetal, Category::NobleGas, Category::Nonmetal]
    );
  }

  #[test]
  fn test_rejects_shared_cell() {
    let mut elements = test_fixture().elements().to_vec();
    elements[2].xpos = 1;
    elements[2].ypos = 1;
    let err = Dataset::from_elements(elements).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
  }

  #[test]
  fn test_rejects_duplicate_atomic_number() {
    let mut elements = test_fixture().elements().to_vec();
    elements[1].atomic_number = 1;
    assert!(Dataset::from_elements(elements).is_err());
  }

  #[test]
  fn test_rejects_negative_property() {
    let mut elements = test_fixture().elements().to_vec();
    elements[0].density = Some(-1.0);
    assert!(Dataset::from_elements(elements).is_err());
  }

  #[test]
  fn test_rejects_unknown_category() {
    let json = r#"[{"atomicNumber": 1, "name": "X", "symbol": "X", "atomicMass": 1.0,
      "category": "metal", "state": "gas", "yearDiscovered": 1900,
      "electronConfiguration": "", "summary": "", "xpos": 1, "ypos": 1}]"#;
    let err = Dataset::from_json(json).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
  }
}
