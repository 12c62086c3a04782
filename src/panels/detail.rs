// src/panels/detail.rs
// Sliding side panel with the full record of the selected element.

use crate::state::AppState;
use crate::views::detail::DetailViewModel;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, Button, Grid, Label, Orientation, PolicyType, Revealer,
  RevealerTransitionType, ScrolledWindow,
};
use std::cell::RefCell;
use std::rc::Rc;

const PANEL_WIDTH: i32 = 380;

pub struct DetailPanel {
  pub revealer: Revealer,
  node: Label,
  symbol: Label,
  name: Label,
  category: Label,
  params: Grid,
  configuration: Label,
  summary: Label,
  provenance: Label,
  close: Button,
}

fn section_title(text: &str) -> Label {
  let l = Label::new(Some(text));
  l.add_css_class("section-title");
  l.set_halign(Align::Start);
  l.set_margin_top(12);
  l
}

fn body_label() -> Label {
  let l = Label::new(None);
  l.set_halign(Align::Start);
  l.set_wrap(true);
  l.set_xalign(0.0);
  l
}

impl DetailPanel {
  pub fn new() -> Self {
    let vbox = GtkBox::new(Orientation::Vertical, 6);
    vbox.add_css_class("detail");
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);
    vbox.set_margin_top(16);
    vbox.set_margin_bottom(16);

    // --- Header ---
    let header = GtkBox::new(Orientation::Horizontal, 6);
    let node = Label::new(None);
    node.add_css_class("node-label");
    node.set_hexpand(true);
    node.set_halign(Align::Start);
    let close = Button::from_icon_name("window-close-symbolic");
    close.add_css_class("flat");
    close.set_tooltip_text(Some("Close (Esc)"));
    header.append(&node);
    header.append(&close);
    vbox.append(&header);

    let symbol = Label::new(None);
    symbol.add_css_class("detail-symbol");
    symbol.set_halign(Align::Start);
    let name = Label::new(None);
    name.add_css_class("detail-name");
    name.set_halign(Align::Start);
    let category = Label::new(None);
    category.set_halign(Align::Start);
    vbox.append(&symbol);
    vbox.append(&name);
    vbox.append(&category);

    // --- Parameters ---
    vbox.append(&section_title("ATOMIC PARAMETERS"));
    let params = Grid::new();
    params.set_row_spacing(8);
    params.set_column_spacing(8);
    params.set_column_homogeneous(true);
    vbox.append(&params);

    vbox.append(&section_title("CONFIGURATION"));
    let configuration = body_label();
    configuration.add_css_class("monospace");
    configuration.set_selectable(true);
    vbox.append(&configuration);

    vbox.append(&section_title("DESCRIPTOR"));
    let summary = body_label();
    vbox.append(&summary);

    vbox.append(&section_title("PROVENANCE"));
    let provenance = body_label();
    vbox.append(&provenance);

    let scroll = ScrolledWindow::builder()
      .hscrollbar_policy(PolicyType::Never)
      .vscrollbar_policy(PolicyType::Automatic)
      .width_request(PANEL_WIDTH)
      .vexpand(true)
      .child(&vbox)
      .build();

    let revealer = Revealer::builder()
      .transition_type(RevealerTransitionType::SlideLeft)
      .child(&scroll)
      .reveal_child(false)
      .build();

    Self {
      revealer,
      node,
      symbol,
      name,
      category,
      params,
      configuration,
      summary,
      provenance,
      close,
    }
  }

  pub fn connect(&self, state: Rc<RefCell<AppState>>, refresh: Rc<dyn Fn()>) {
    self.close.connect_clicked(move |_| {
      state.borrow_mut().close_detail();
      refresh();
    });
  }

  pub fn update(&self, model: Option<DetailViewModel>) {
    let Some(vm) = model else {
      self.revealer.set_reveal_child(false);
      return;
    };

    let accent = vm.accent.hex_accent;
    self.node.set_text(&format!("Atomic Node {}", vm.atomic_number));
    self.symbol.set_markup(&format!(
      "<span foreground=\"{}\">{}</span>",
      accent,
      glib::markup_escape_text(&vm.symbol)
    ));
    self.name.set_text(&vm.name);
    self.category.set_markup(&format!(
      "<span foreground=\"{}\">{}</span>  ·  {}",
      accent,
      glib::markup_escape_text(&vm.category.label().to_uppercase()),
      vm.state.label()
    ));

    while let Some(child) = self.params.first_child() {
      self.params.remove(&child);
    }
    for (i, card) in vm.parameters().into_iter().enumerate() {
      let cell = GtkBox::new(Orientation::Vertical, 2);
      cell.add_css_class("param-card");

      let label = Label::new(Some(card.label.to_uppercase().as_str()));
      label.add_css_class("param-label");
      label.set_halign(Align::Start);
      let value = Label::new(None);
      value.set_markup(&format!(
        "<b>{}</b> <small>{}</small>",
        glib::markup_escape_text(&card.value),
        glib::markup_escape_text(card.unit)
      ));
      value.set_halign(Align::Start);

      cell.append(&label);
      cell.append(&value);
      self.params.attach(&cell, (i % 2) as i32, (i / 2) as i32, 1, 1);
    }

    self.configuration.set_text(&vm.electron_configuration);
    self.summary.set_text(&vm.summary);
    self.provenance.set_text(&vm.provenance_text);
    self.revealer.set_reveal_child(true);
  }
}

impl Default for DetailPanel {
  fn default() -> Self {
    Self::new()
  }
}
