// src/main.rs

use elementx::config::Config;
use elementx::model::Dataset;
use elementx::state::AppState;
use elementx::ui::interactions::setup_interactions;
use elementx::ui::{self, Ui};
use elementx::utils::logger;

use gtk4::prelude::*;
use gtk4::Application;
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> gtk4::glib::ExitCode {
  let app = Application::builder()
    .application_id("org.elementx.ElementX")
    .build();

  app.connect_activate(build_ui);
  app.run()
}

/// Configured file first, then the bundled table, then an empty table.
fn load_dataset(config: &Config) -> Dataset {
  if let Some(path) = &config.dataset_path {
    match Dataset::load(path) {
      Ok(ds) => {
        log::info!("Loaded {} elements from {:?}", ds.len(), path);
        return ds;
      }
      Err(e) => log::error!("Failed to load dataset {:?}: {}", path, e),
    }
  }

  match Dataset::embedded() {
    Ok(ds) => {
      log::info!("Loaded {} bundled elements", ds.len());
      ds
    }
    Err(e) => {
      log::error!("Bundled dataset is invalid: {}", e);
      Dataset::default()
    }
  }
}

fn build_ui(app: &Application) {
  let (config, config_msg) = Config::load();

  // Console first so every later message lands in it.
  let (console_frame, console_view) = ui::build_console();
  if let Err(e) = logger::init(&console_view, config.log_level.to_filter()) {
    eprintln!("Logger already installed: {}", e);
  }
  log::info!("{}", config_msg);

  ui::install_css();

  let dataset = load_dataset(&config);
  let state = Rc::new(RefCell::new(AppState::new(dataset, config.clone())));

  let ui = Ui::build(app, &config, &console_frame, &state);

  let refresh: Rc<dyn Fn()> = {
    let ui = ui.clone();
    let s = state.clone();
    Rc::new(move || ui.refresh(&s.borrow()))
  };

  setup_interactions(&ui, state.clone(), refresh.clone());
  refresh();

  ui.window.present();
}
