// src/ui/interactions.rs

use super::Ui;
use crate::rendering;
use crate::state::AppState;
use crate::utils::report;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{EventControllerKey, EventControllerMotion, GestureClick};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup_interactions(ui: &Rc<Ui>, state: Rc<RefCell<AppState>>, refresh: Rc<dyn Fn()>) {
  ui.nav.connect(state.clone(), refresh.clone());
  ui.detail.connect(state.clone(), refresh.clone());

  // 1. KEYBOARD CONTROLLER
  let key_controller = EventControllerKey::new();
  let s = state.clone();
  let r = refresh.clone();
  let toggle = ui.nav.tools_toggle.clone();

  key_controller.connect_key_pressed(move |_, keyval, _keycode, _modifiers| {
    if keyval == gdk4::Key::Escape {
      s.borrow_mut().close_detail();
      r();
      return glib::Propagation::Stop;
    }

    if keyval == gdk4::Key::F9 {
      toggle.set_active(!toggle.is_active());
      return glib::Propagation::Stop;
    }

    glib::Propagation::Proceed
  });
  ui.window.add_controller(key_controller);

  // 2. HOVER
  let motion = EventControllerMotion::new();
  let s = state.clone();
  let r = refresh.clone();
  let da = ui.grid_area.clone();
  motion.connect_motion(move |_, x, y| {
    let (w, h) = (da.width() as f64, da.height() as f64);
    let hit = {
      let st = s.borrow();
      rendering::hit_test(&st, w, h, x, y).map(|el| (el.atomic_number, report::hover_summary(el)))
    };

    let id = hit.as_ref().map(|(n, _)| *n);
    if s.borrow().selection.hovered_element == id {
      return;
    }
    if let Some((_, summary)) = hit {
      log::debug!("{}", summary);
    }
    s.borrow_mut().set_hovered(id);
    r();
  });

  let s = state.clone();
  let r = refresh.clone();
  motion.connect_leave(move |_| {
    if s.borrow().selection.hovered_element.is_none() {
      return;
    }
    s.borrow_mut().set_hovered(None);
    r();
  });
  ui.grid_area.add_controller(motion);

  // 3. CLICK TO SELECT
  let click = GestureClick::new();
  click.set_button(1);
  let s = state.clone();
  let r = refresh.clone();
  let da = ui.grid_area.clone();
  click.connect_pressed(move |_, _n_press, x, y| {
    let (w, h) = (da.width() as f64, da.height() as f64);
    let id = {
      let st = s.borrow();
      rendering::hit_test(&st, w, h, x, y).map(|el| el.atomic_number)
    };
    // Clicking empty space leaves the selection alone.
    let Some(id) = id else { return };

    {
      let mut st = s.borrow_mut();
      st.set_selected_element(Some(id));
      log::info!("{}", report::selection_summary(&st.selection, &st.dataset));
    }
    r();
  });
  ui.grid_area.add_controller(click);

  // 4. PERSIST WINDOW PREFERENCES ON CLOSE
  let s = state;
  let toggle = ui.nav.tools_toggle.clone();
  ui.window.connect_close_request(move |win| {
    let mut st = s.borrow_mut();
    let (w, h) = win.default_size();
    if w > 0 && h > 0 {
      st.config.window_width = w;
      st.config.window_height = h;
    }
    st.config.show_tools = toggle.is_active();
    st.save_config();
    glib::Propagation::Proceed
  });
}
