// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Console lines kept before the oldest are dropped.
const MAX_LINES: i32 = 500;

struct ConsoleLogger;

/// Routes `log` records into the status console.
pub fn init(view: &TextView, level: LevelFilter) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, color) in [
    ("error", "#ff4444"),
    ("warn", "#ffbb33"),
    ("info", "#33b5e5"),
    ("debug", "#8a8fa3"),
  ] {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if name == "error" {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let (icon, tag_name) = match record.level() {
      Level::Error => ("●", "error"),
      Level::Warn => ("▲", "warn"),
      Level::Info => ("■", "info"),
      Level::Debug | Level::Trace => ("·", "debug"),
    };
    let msg = format!("{}  {}\n", icon, record.args());

    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) else {
        return;
      };
      let buffer = view.buffer();

      // Cap the scrollback
      if buffer.line_count() > MAX_LINES {
        let mut start = buffer.start_iter();
        if let Some(mut cut) = buffer.iter_at_line(buffer.line_count() - MAX_LINES) {
          buffer.delete(&mut start, &mut cut);
        }
      }

      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
