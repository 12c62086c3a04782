// src/views/layout.rs

use crate::model::{Dataset, Element};

/// 1-indexed grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
  pub column: u32,
  pub row: u32,
}

/// Places elements on the grid. Presentation code goes through this, never
/// through the raw coordinates.
pub trait Layout {
  fn position_of(&self, element: &Element) -> GridCell;

  /// (columns, rows) needed to show every element.
  fn extent(&self, dataset: &Dataset) -> (u32, u32) {
    dataset.iter().fold((0, 0), |(c, r), e| {
      let cell = self.position_of(e);
      (c.max(cell.column), r.max(cell.row))
    })
  }

  /// Hit test: the element occupying a cell, if any.
  fn element_at<'a>(&self, dataset: &'a Dataset, cell: GridCell) -> Option<&'a Element> {
    dataset.iter().find(|e| self.position_of(e) == cell)
  }
}

/// Conventional 18-column table with the f-block split out below.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicLayout;

impl Layout for PeriodicLayout {
  fn position_of(&self, element: &Element) -> GridCell {
    GridCell {
      column: element.xpos,
      row: element.ypos,
    }
  }
}

pub fn position_of(element: &Element) -> GridCell {
  PeriodicLayout.position_of(element)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_position_is_pass_through() {
    let ds = Dataset::embedded().unwrap();
    let fe = ds.get(26).unwrap();
    assert_eq!(position_of(fe), GridCell { column: 8, row: 4 });
    let la = ds.get(57).unwrap();
    assert_eq!(position_of(la), GridCell { column: 3, row: 9 });
  }

  #[test]
  fn test_cells_are_unique() {
    let ds = Dataset::embedded().unwrap();
    let cells: HashSet<GridCell> = ds.iter().map(position_of).collect();
    assert_eq!(cells.len(), ds.len());
    assert_eq!(PeriodicLayout.extent(&ds), (18, 10));
  }

  #[test]
  fn test_element_at() {
    let ds = Dataset::embedded().unwrap();
    let he = PeriodicLayout.element_at(&ds, GridCell { column: 18, row: 1 });
    assert_eq!(he.map(|e| e.symbol.as_str()), Some("He"));
    assert!(PeriodicLayout
      .element_at(&ds, GridCell { column: 5, row: 1 })
      .is_none());
  }
}
