// src/utils/report.rs

use crate::model::{Dataset, Element};
use crate::state::SelectionState;
use crate::views::detail::format_value;
use crate::views::emphasis::{resolve, Emphasis};

/// Console line for the element under the pointer.
pub fn hover_summary(element: &Element) -> String {
  format!(
    "{} {} ({}) | {} | mp {} K | {} g/cm³",
    element.atomic_number,
    element.symbol,
    element.name,
    element.category,
    format_value(element.melting_point),
    format_value(element.density),
  )
}

/// Console text after a selection change: what is selected and how many
/// elements are focused or muted.
pub fn selection_summary(selection: &SelectionState, dataset: &Dataset) -> String {
  let mut focused = 0;
  let mut muted = 0;
  for el in dataset {
    match resolve(el, selection) {
      Emphasis::Focused => focused += 1,
      Emphasis::Muted => muted += 1,
      Emphasis::Normal => {}
    }
  }

  let filter = match selection.selected_category {
    Some(cat) => cat.label().to_string(),
    None => "spectrum".to_string(),
  };

  let mut out = format!(
    "Filter: {} | View: {} | Property: {}",
    filter, selection.view_mode, selection.selected_property
  );
  if let Some(el) = selection.selected_element.and_then(|id| dataset.get(id)) {
    out.push_str(&format!(" | Selected: {} ({})", el.name, el.symbol));
  }
  if focused + muted > 0 {
    out.push_str(&format!(" | {} focused, {} muted", focused, muted));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::dataset::test_fixture;
  use crate::model::Category;
  use crate::state::Action;

  #[test]
  fn test_hover_summary_placeholders() {
    let ds = test_fixture();
    let line = hover_summary(ds.get(2).unwrap());
    assert_eq!(line, "2 He (Helium) | noble gas | mp — K | 0.0001785 g/cm³");
  }

  #[test]
  fn test_selection_summary_counts() {
    let ds = test_fixture();
    let s = SelectionState::default()
      .apply(Action::SelectCategory(Some(Category::AlkaliMetal)))
      .apply(Action::SelectElement(Some(3)));
    let text = selection_summary(&s, &ds);
    assert!(text.starts_with("Filter: alkali metal | View: table | Property: Atomic Mass"));
    assert!(text.contains("Selected: Lithium (Li)"));
    assert!(text.ends_with("1 focused, 2 muted"));
  }

  #[test]
  fn test_selection_summary_default() {
    let ds = test_fixture();
    let text = selection_summary(&SelectionState::default(), &ds);
    assert_eq!(text, "Filter: spectrum | View: table | Property: Atomic Mass");
  }
}
