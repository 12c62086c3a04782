// src/ui/mod.rs
// Window assembly: nav bar, grid/chart stack, detail panel, console.

pub mod interactions;

use crate::config::Config;
use crate::model::palette::classify;
use crate::model::Category;
use crate::panels::navbar::category_css_class;
use crate::panels::{DetailPanel, NavBar};
use crate::rendering;
use crate::state::{AppState, ViewMode};
use crate::views::chart::{build_series, tooltip_text};
use crate::views::detail::project;

use gtk4::prelude::*;
use gtk4::{
  Application, ApplicationWindow, Box as GtkBox, CssProvider, DrawingArea, Frame, Orientation,
  ScrolledWindow, Stack, StackTransitionType, TextView,
};
use std::cell::RefCell;
use std::rc::Rc;

const BASE_CSS: &str = "
window { background-color: #05070f; color: #e2e8f0; }
.navbar { border-bottom: 1px solid alpha(white, 0.08); }
.brand { font-weight: 800; letter-spacing: 4px; color: #f8fafc; }
.nav-item { background: none; border: none; box-shadow: none; color: #64748b;
  font-size: 10px; font-weight: 700; letter-spacing: 2px; }
.nav-item:hover { color: #cbd5e1; }
.nav-item.active { color: #f8fafc; }
.tools { background-color: alpha(white, 0.04); border-radius: 999px; padding: 4px 8px; }
.pill { border-radius: 999px; background: none; border: none; color: #94a3b8;
  font-size: 10px; font-weight: 700; letter-spacing: 2px; }
.pill.active { background-color: alpha(white, 0.12); color: #f8fafc; }
.detail { background-color: #0b1020; }
.node-label { color: #64748b; font-size: 10px; letter-spacing: 3px; }
.detail-symbol { font-size: 56px; font-weight: 800; }
.detail-name { font-size: 22px; font-weight: 300; }
.section-title { color: #64748b; font-size: 10px; font-weight: 700; letter-spacing: 3px; }
.param-card { background-color: alpha(white, 0.04); border-radius: 8px; padding: 8px; }
.param-label { color: #64748b; font-size: 9px; letter-spacing: 2px; }
.console textview text { background-color: #070a14; color: #cbd5e1; }
";

/// Base stylesheet plus one accent rule per category.
pub fn stylesheet() -> String {
  let mut css = String::from(BASE_CSS);
  for cat in Category::ALL {
    let class = category_css_class(cat);
    let accent = classify(cat).hex_accent;
    css.push_str(&format!(
      ".{c}.active, .{c}:hover {{ color: {a}; }}\n",
      c = class,
      a = accent
    ));
  }
  css
}

pub fn install_css() {
  let provider = CssProvider::new();
  provider.load_from_data(&stylesheet());

  match gdk4::Display::default() {
    Some(display) => gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    ),
    None => log::warn!("No display available, skipping stylesheet"),
  }
}

pub struct Ui {
  pub window: ApplicationWindow,
  pub nav: NavBar,
  pub stack: Stack,
  pub grid_area: DrawingArea,
  pub chart_area: DrawingArea,
  pub detail: DetailPanel,
}

/// Builds the console widget first so the logger can attach before anything else runs.
pub fn build_console() -> (Frame, TextView) {
  let console = TextView::builder()
    .editable(false)
    .cursor_visible(false)
    .monospace(true)
    .left_margin(10)
    .right_margin(10)
    .top_margin(6)
    .bottom_margin(6)
    .build();
  let scroll = ScrolledWindow::builder()
    .min_content_height(110)
    .child(&console)
    .build();
  let frame = Frame::new(None);
  frame.add_css_class("console");
  frame.set_child(Some(&scroll));
  (frame, console)
}

impl Ui {
  pub fn build(
    app: &Application,
    config: &Config,
    console_frame: &Frame,
    state: &Rc<RefCell<AppState>>,
  ) -> Rc<Self> {
    let categories = state.borrow().dataset.categories();

    let window = ApplicationWindow::builder()
      .application(app)
      .title("ElementX - Periodic Table Explorer")
      .default_width(config.window_width)
      .default_height(config.window_height)
      .build();

    let root = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root));

    let nav = NavBar::new(&categories, config.show_tools);
    root.append(&nav.container);
    root.append(&nav.tools_row);

    // --- Main area: stack on the left, detail on the right ---
    let main = GtkBox::new(Orientation::Horizontal, 0);
    main.set_vexpand(true);

    let grid_area = DrawingArea::new();
    grid_area.set_hexpand(true);
    grid_area.set_vexpand(true);
    let chart_area = DrawingArea::new();
    chart_area.set_hexpand(true);
    chart_area.set_vexpand(true);

    let stack = Stack::new();
    stack.set_transition_type(StackTransitionType::Crossfade);
    stack.add_named(&grid_area, Some("grid"));
    stack.add_named(&chart_area, Some("chart"));
    stack.set_hexpand(true);
    main.append(&stack);

    let detail = DetailPanel::new();
    main.append(&detail.revealer);

    root.append(&main);
    root.append(console_frame);

    let s = state.clone();
    grid_area.set_draw_func(move |_, cr, w, h| {
      let st = s.borrow();
      if let Err(e) = rendering::draw_grid(cr, &st, w as f64, h as f64) {
        log::error!("Grid draw failed: {}", e);
      }
    });

    let s = state.clone();
    chart_area.set_draw_func(move |_, cr, w, h| {
      let st = s.borrow();
      let key = st.selection.selected_property;
      let series = build_series(&st.dataset, key);
      if let Err(e) = rendering::draw_on_context(cr, w, h, &series, key) {
        log::error!("Chart draw failed: {}", e);
      }
    });

    chart_area.set_has_tooltip(true);
    let s = state.clone();
    chart_area.connect_query_tooltip(move |area, x, _y, _keyboard, tooltip| {
      let st = s.borrow();
      if st.selection.view_mode != ViewMode::Chart {
        return false;
      }
      let key = st.selection.selected_property;
      let series = build_series(&st.dataset, key);
      match rendering::bar_at(area.width(), x as f64, series.len()).and_then(|i| series.get(i)) {
        Some(point) => {
          tooltip.set_text(Some(tooltip_text(point, key).as_str()));
          true
        }
        None => false,
      }
    });

    Rc::new(Self {
      window,
      nav,
      stack,
      grid_area,
      chart_area,
      detail,
    })
  }

  /// Pushes the current state into every widget.
  pub fn refresh(&self, st: &AppState) {
    self.nav.update(&st.selection);

    let page = if st.selection.view_mode.shows_grid() {
      "grid"
    } else {
      "chart"
    };
    self.stack.set_visible_child_name(page);

    self.grid_area.queue_draw();
    self.chart_area.queue_draw();
    self.detail.update(project(st.selected_element()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stylesheet_has_a_rule_per_category() {
    let css = stylesheet();
    for cat in Category::ALL {
      assert!(css.contains(&format!(".{}.active", category_css_class(cat))));
      assert!(css.contains(classify(cat).hex_accent));
    }
  }
}
