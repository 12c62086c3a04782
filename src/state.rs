// src/state.rs

use crate::config::Config;
use crate::model::{Category, Dataset, Element, PropertyKey};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
  #[default]
  Table,
  Heatmap,
  Chart,
}

impl ViewMode {
  pub const ALL: [ViewMode; 3] = [ViewMode::Table, ViewMode::Heatmap, ViewMode::Chart];

  pub fn label(self) -> &'static str {
    match self {
      ViewMode::Table => "table",
      ViewMode::Heatmap => "heatmap",
      ViewMode::Chart => "chart",
    }
  }

  /// Table and heatmap share the element grid; chart replaces it.
  pub fn shows_grid(self) -> bool {
    !matches!(self, ViewMode::Chart)
  }
}

impl fmt::Display for ViewMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// One discrete user input. Each maps to exactly one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
  SelectCategory(Option<Category>),
  SetViewMode(ViewMode),
  SetProperty(PropertyKey),
  Hover(Option<u32>),
  SelectElement(Option<u32>),
  CloseDetail,
}

/// Every interaction choice the views derive from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionState {
  pub selected_category: Option<Category>,
  pub view_mode: ViewMode,
  pub selected_property: PropertyKey,
  pub selected_element: Option<u32>,
  pub hovered_element: Option<u32>,
}

impl SelectionState {
  /// Pure transition. Only the field named by the action changes.
  pub fn apply(self, action: Action) -> Self {
    match action {
      Action::SelectCategory(cat) => Self {
        selected_category: cat,
        ..self
      },
      Action::SetViewMode(mode) => Self {
        view_mode: mode,
        ..self
      },
      Action::SetProperty(key) => Self {
        selected_property: key,
        ..self
      },
      Action::Hover(id) => Self {
        hovered_element: id,
        ..self
      },
      Action::SelectElement(id) => Self {
        selected_element: id,
        ..self
      },
      Action::CloseDetail => Self {
        selected_element: None,
        ..self
      },
    }
  }
}

pub struct AppState {
  pub dataset: Dataset,
  pub selection: SelectionState,
  pub config: Config,
}

impl AppState {
  pub fn new(dataset: Dataset, config: Config) -> Self {
    Self {
      dataset,
      selection: SelectionState::default(),
      config,
    }
  }

  /// Applies an action, replacing the whole selection at once.
  /// Element ids that are not in the dataset are ignored.
  pub fn dispatch(&mut self, action: Action) -> bool {
    let unknown_id = match action {
      Action::Hover(Some(id)) | Action::SelectElement(Some(id)) => self.dataset.get(id).is_none(),
      _ => false,
    };
    if unknown_id {
      log::warn!("Ignoring {:?}: no element with that atomic number", action);
      return false;
    }

    let next = self.selection.apply(action);
    if next != self.selection {
      log::debug!("{:?}", action);
      self.selection = next;
    }
    true
  }

  pub fn set_category(&mut self, category: Option<Category>) {
    self.dispatch(Action::SelectCategory(category));
  }

  pub fn set_view_mode(&mut self, mode: ViewMode) {
    self.dispatch(Action::SetViewMode(mode));
  }

  pub fn set_selected_property(&mut self, key: PropertyKey) {
    self.dispatch(Action::SetProperty(key));
  }

  /// String entry point for the property picker. Unknown keys leave state untouched.
  pub fn set_selected_property_key(&mut self, key: &str) -> bool {
    match PropertyKey::parse(key) {
      Some(k) => self.dispatch(Action::SetProperty(k)),
      None => {
        log::warn!("Ignoring unknown comparison property {:?}", key);
        false
      }
    }
  }

  pub fn set_hovered(&mut self, id: Option<u32>) {
    self.dispatch(Action::Hover(id));
  }

  pub fn set_selected_element(&mut self, id: Option<u32>) {
    self.dispatch(Action::SelectElement(id));
  }

  pub fn close_detail(&mut self) {
    self.dispatch(Action::CloseDetail);
  }

  pub fn hovered_element(&self) -> Option<&Element> {
    self.selection.hovered_element.and_then(|id| self.dataset.get(id))
  }

  pub fn selected_element(&self) -> Option<&Element> {
    self.selection.selected_element.and_then(|id| self.dataset.get(id))
  }

  pub fn save_config(&self) {
    let msg = self.config.save();
    log::info!("{}", msg);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::dataset::test_fixture;

  fn app() -> AppState {
    AppState::new(test_fixture(), Config::default())
  }

  #[test]
  fn test_defaults() {
    let s = SelectionState::default();
    assert_eq!(s.selected_category, None);
    assert_eq!(s.view_mode, ViewMode::Table);
    assert_eq!(s.selected_property, PropertyKey::AtomicMass);
    assert_eq!(s.selected_element, None);
    assert_eq!(s.hovered_element, None);
  }

  #[test]
  fn test_transitions_are_independent() {
    let s = SelectionState::default()
      .apply(Action::SelectCategory(Some(Category::NobleGas)))
      .apply(Action::Hover(Some(2)))
      .apply(Action::SelectElement(Some(3)))
      .apply(Action::SetProperty(PropertyKey::Density))
      .apply(Action::SetViewMode(ViewMode::Heatmap));

    assert_eq!(s.selected_category, Some(Category::NobleGas));
    assert_eq!(s.hovered_element, Some(2));
    assert_eq!(s.selected_element, Some(3));
    assert_eq!(s.selected_property, PropertyKey::Density);
    assert_eq!(s.view_mode, ViewMode::Heatmap);
  }

  #[test]
  fn test_close_detail_keeps_hover_and_category() {
    let mut st = app();
    st.set_category(Some(Category::Nonmetal));
    st.set_hovered(Some(1));
    st.set_selected_element(Some(3));

    st.close_detail();
    assert_eq!(st.selection.selected_element, None);
    assert_eq!(st.selection.hovered_element, Some(1));
    assert_eq!(st.selection.selected_category, Some(Category::Nonmetal));
  }

  #[test]
  fn test_invalid_property_key_is_ignored() {
    let mut st = app();
    st.set_selected_property(PropertyKey::MeltingPoint);
    let before = st.selection;

    assert!(!st.set_selected_property_key("boilingPoint"));
    assert!(!st.set_selected_property_key("bogus"));
    assert_eq!(st.selection, before);

    assert!(st.set_selected_property_key("electronegativity"));
    assert_eq!(st.selection.selected_property, PropertyKey::Electronegativity);
  }

  #[test]
  fn test_unknown_element_id_is_ignored() {
    let mut st = app();
    st.set_hovered(Some(1));
    st.set_hovered(Some(99));
    assert_eq!(st.selection.hovered_element, Some(1));

    st.set_selected_element(Some(42));
    assert_eq!(st.selection.selected_element, None);
  }

  #[test]
  fn test_element_lookups() {
    let mut st = app();
    assert!(st.hovered_element().is_none());
    st.set_hovered(Some(3));
    st.set_selected_element(Some(1));
    assert_eq!(st.hovered_element().map(|e| e.symbol.as_str()), Some("Li"));
    assert_eq!(st.selected_element().map(|e| e.symbol.as_str()), Some("H"));
    st.set_hovered(None);
    assert!(st.hovered_element().is_none());
  }

  #[test]
  fn test_view_mode_grid() {
    assert!(ViewMode::Table.shows_grid());
    assert!(ViewMode::Heatmap.shows_grid());
    assert!(!ViewMode::Chart.shows_grid());
  }
}
