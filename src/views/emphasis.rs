// src/views/emphasis.rs

use crate::model::Element;
use crate::state::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
  Normal,
  Muted,
  Focused,
}

/// Precedence is hover > category filter > nothing.
/// While anything is hovered, a category match never rescues another element.
pub fn resolve(element: &Element, selection: &SelectionState) -> Emphasis {
  if let Some(hovered) = selection.hovered_element {
    return if element.atomic_number == hovered {
      Emphasis::Focused
    } else {
      Emphasis::Muted
    };
  }

  match selection.selected_category {
    Some(cat) if element.category == cat => Emphasis::Focused,
    Some(_) => Emphasis::Muted,
    None => Emphasis::Normal,
  }
}

/// Emphasis for every element, in dataset order.
pub fn resolve_all<'a, I>(elements: I, selection: &SelectionState) -> Vec<(&'a Element, Emphasis)>
where
  I: IntoIterator<Item = &'a Element>,
{
  elements
    .into_iter()
    .map(|e| (e, resolve(e, selection)))
    .collect()
}
