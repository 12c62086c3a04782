// src/panels/navbar.rs
// Top navigation: category filters, tools toggle, view modes, property picker.

use crate::model::palette::classify;
use crate::model::{Category, PropertyKey};
use crate::state::{AppState, SelectionState, ViewMode};
use crate::views::chart::build_series;

use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, Button, DropDown, FileChooserAction, FileChooserDialog, Label, Orientation,
  PolicyType, ResponseType, Revealer, RevealerTransitionType, ScrolledWindow, ToggleButton,
};
use std::cell::RefCell;
use std::rc::Rc;

pub struct NavBar {
  pub container: GtkBox,
  pub tools_row: Revealer,
  pub tools_toggle: ToggleButton,
  spectrum: Button,
  categories: Vec<(Category, Button)>,
  views: Vec<(ViewMode, Button)>,
  property: DropDown,
  export: Button,
}

/// CSS class carrying a category's accent color.
pub fn category_css_class(cat: Category) -> String {
  format!("cat-{:?}", classify(cat).color_id).to_lowercase()
}

impl NavBar {
  pub fn new(categories: &[Category], show_tools: bool) -> Self {
    let container = GtkBox::new(Orientation::Horizontal, 24);
    container.add_css_class("navbar");
    container.set_margin_start(24);
    container.set_margin_end(24);
    container.set_margin_top(8);
    container.set_margin_bottom(8);

    let brand = Label::new(Some("ELEMENTX"));
    brand.add_css_class("brand");
    container.append(&brand);

    // --- Category strip (scrolls when the window is narrow) ---
    let strip = GtkBox::new(Orientation::Horizontal, 18);
    let spectrum = Button::with_label("SPECTRUM");
    spectrum.add_css_class("nav-item");
    strip.append(&spectrum);

    let categories: Vec<(Category, Button)> = categories
      .iter()
      .map(|&cat| {
        let btn = Button::with_label(&cat.label().to_uppercase());
        btn.add_css_class("nav-item");
        btn.add_css_class(&category_css_class(cat));
        strip.append(&btn);
        (cat, btn)
      })
      .collect();

    let scroll = ScrolledWindow::builder()
      .hscrollbar_policy(PolicyType::Automatic)
      .vscrollbar_policy(PolicyType::Never)
      .hexpand(true)
      .child(&strip)
      .build();
    container.append(&scroll);

    let tools_toggle = ToggleButton::new();
    tools_toggle.set_icon_name("view-fullscreen-symbolic");
    tools_toggle.set_tooltip_text(Some("View tools (F9)"));
    tools_toggle.add_css_class("nav-item");
    tools_toggle.set_active(show_tools);
    container.append(&tools_toggle);

    // --- Tools row: view mode pills + property picker ---
    let tools = GtkBox::new(Orientation::Horizontal, 6);
    tools.add_css_class("tools");
    tools.set_halign(Align::Center);
    tools.set_margin_top(8);
    tools.set_margin_bottom(8);

    let views: Vec<(ViewMode, Button)> = ViewMode::ALL
      .iter()
      .map(|&mode| {
        let btn = Button::with_label(&mode.label().to_uppercase());
        btn.add_css_class("pill");
        tools.append(&btn);
        (mode, btn)
      })
      .collect();

    let labels: Vec<&str> = PropertyKey::ALL.iter().map(|p| p.label()).collect();
    let property = DropDown::from_strings(&labels);
    property.set_margin_start(12);
    tools.append(&property);

    let export = Button::with_label("Export Chart…");
    export.add_css_class("pill");
    tools.append(&export);

    let tools_row = Revealer::builder()
      .transition_type(RevealerTransitionType::SlideDown)
      .child(&tools)
      .reveal_child(show_tools)
      .build();

    Self {
      container,
      tools_row,
      tools_toggle,
      spectrum,
      categories,
      views,
      property,
      export,
    }
  }

  /// Wires every control to its state transition. `refresh` redraws the UI.
  pub fn connect(&self, state: Rc<RefCell<AppState>>, refresh: Rc<dyn Fn()>) {
    let s = state.clone();
    let r = refresh.clone();
    self.spectrum.connect_clicked(move |_| {
      s.borrow_mut().set_category(None);
      r();
    });

    for (cat, btn) in &self.categories {
      let s = state.clone();
      let r = refresh.clone();
      let cat = *cat;
      btn.connect_clicked(move |_| {
        s.borrow_mut().set_category(Some(cat));
        r();
      });
    }

    for (mode, btn) in &self.views {
      let s = state.clone();
      let r = refresh.clone();
      let mode = *mode;
      btn.connect_clicked(move |_| {
        s.borrow_mut().set_view_mode(mode);
        r();
      });
    }

    let s = state.clone();
    let r = refresh.clone();
    self.property.connect_selected_notify(move |d| {
      let Some(key) = PropertyKey::ALL.get(d.selected() as usize).copied() else {
        log::warn!("Property picker returned index {}", d.selected());
        return;
      };
      s.borrow_mut().set_selected_property(key);
      r();
    });

    let rev = self.tools_row.clone();
    self.tools_toggle.connect_toggled(move |t| {
      rev.set_reveal_child(t.is_active());
    });

    let s = state;
    self.export.connect_clicked(move |btn| {
      let window = btn.root().and_then(|root| root.downcast::<gtk4::Window>().ok());
      let (series, property) = {
        let st = s.borrow();
        let key = st.selection.selected_property;
        (build_series(&st.dataset, key), key)
      };

      let dialog = FileChooserDialog::new(
        Some("Export Chart"),
        window.as_ref(),
        FileChooserAction::Save,
        &[("Cancel", ResponseType::Cancel), ("Save", ResponseType::Accept)],
      );
      dialog.set_current_name(&format!("{}.png", property.key()));

      dialog.connect_response(move |d, response| {
        if response == ResponseType::Accept {
          if let Some(path) = d.file().and_then(|f| f.path()) {
            if let Err(e) = crate::rendering::export_chart(&path, &series, property) {
              log::error!("Chart export failed: {}", e);
            }
          }
        }
        d.destroy();
      });

      dialog.present();
    });
  }

  pub fn update(&self, selection: &SelectionState) {
    set_active(&self.spectrum, selection.selected_category.is_none());
    for (cat, btn) in &self.categories {
      set_active(btn, selection.selected_category == Some(*cat));
    }
    for (mode, btn) in &self.views {
      set_active(btn, selection.view_mode == *mode);
    }

    let idx = PropertyKey::ALL
      .iter()
      .position(|p| *p == selection.selected_property)
      .unwrap_or(0) as u32;
    // Only touch the dropdown on a real change, or it re-emits selected-notify.
    if self.property.selected() != idx {
      self.property.set_selected(idx);
    }
    self.property.set_visible(selection.view_mode != ViewMode::Table);
    self.export.set_visible(selection.view_mode == ViewMode::Chart);
  }
}

fn set_active(btn: &Button, active: bool) {
  if active {
    btn.add_css_class("active");
  } else {
    btn.remove_css_class("active");
  }
}
