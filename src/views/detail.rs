// src/views/detail.rs

use crate::model::{classify, Category, ColorIdentity, Discovery, Element, PhysicalState};

/// Shown in place of an unknown measurement.
pub const PLACEHOLDER: &str = "—";

/// Everything the detail panel shows for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
  pub atomic_number: u32,
  pub name: String,
  pub symbol: String,
  pub category: Category,
  pub state: PhysicalState,
  pub atomic_mass: f64,
  pub density: Option<f64>,
  pub melting_point: Option<f64>,
  pub boiling_point: Option<f64>,
  pub electronegativity: Option<f64>,
  pub atomic_radius: Option<f64>,
  pub electron_configuration: String,
  pub summary: String,
  pub provenance_text: String,
  pub accent: ColorIdentity,
}

/// One "Atomic Parameters" card: (label, formatted value, unit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCard {
  pub label: &'static str,
  pub value: String,
  pub unit: &'static str,
}

impl DetailViewModel {
  pub fn parameters(&self) -> Vec<ParameterCard> {
    vec![
      card("Atomic Mass", Some(self.atomic_mass), "AMU"),
      card("Density", self.density, "g/cm³"),
      card("Melting Point", self.melting_point, "K"),
      card("Boiling Point", self.boiling_point, "K"),
      card("Electronegativity", self.electronegativity, "Pauling"),
      card("Atomic Radius", self.atomic_radius, "pm"),
    ]
  }
}

fn card(label: &'static str, value: Option<f64>, unit: &'static str) -> ParameterCard {
  ParameterCard {
    label,
    value: format_value(value),
    unit,
  }
}

/// `None` means no selection: the panel is hidden.
pub fn project(element: Option<&Element>) -> Option<DetailViewModel> {
  let el = element?;
  Some(DetailViewModel {
    atomic_number: el.atomic_number,
    name: el.name.clone(),
    symbol: el.symbol.clone(),
    category: el.category,
    state: el.state,
    atomic_mass: el.atomic_mass,
    density: el.density,
    melting_point: el.melting_point,
    boiling_point: el.boiling_point,
    electronegativity: el.electronegativity,
    atomic_radius: el.atomic_radius,
    electron_configuration: el.electron_configuration.clone(),
    summary: el.summary.clone(),
    provenance_text: provenance_text(el.year_discovered),
    accent: classify(el.category),
  })
}

pub fn provenance_text(discovery: Discovery) -> String {
  match discovery {
    Discovery::Ancient => "Antiquity".to_string(),
    Discovery::Year(year) => format!("Documented {}", year),
  }
}

/// Integers print bare; long fractions are cut to six decimals.
/// Tiny values that would round to zero switch to scientific notation.
pub fn format_value(value: Option<f64>) -> String {
  match value {
    None => PLACEHOLDER.to_string(),
    Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
    Some(v) => {
      let s = format!("{}", v);
      if s.len() <= 10 {
        return s;
      }
      let fixed = format!("{:.6}", v);
      let fixed = trim_fraction(&fixed);
      if fixed.trim_start_matches('-') != "0" {
        return fixed.to_string();
      }
      let sci = format!("{:.4e}", v);
      match sci.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None => sci,
      }
    }
  }
}

fn trim_fraction(s: &str) -> &str {
  if s.contains('.') {
    s.trim_end_matches('0').trim_end_matches('.')
  } else {
    s
  }
}
