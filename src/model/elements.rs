// src/model/elements.rs

use serde::{Deserialize, Deserializer};
use std::fmt;

// --- Enums ---

/// Closed classification of an element. Drives both filtering and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
  #[serde(rename = "alkali metal")]
  AlkaliMetal,
  #[serde(rename = "alkaline earth metal")]
  AlkalineEarthMetal,
  #[serde(rename = "transition metal")]
  TransitionMetal,
  #[serde(rename = "post-transition metal")]
  PostTransitionMetal,
  #[serde(rename = "metalloid")]
  Metalloid,
  #[serde(rename = "nonmetal")]
  Nonmetal,
  #[serde(rename = "halogen")]
  Halogen,
  #[serde(rename = "noble gas")]
  NobleGas,
  #[serde(rename = "lanthanide")]
  Lanthanide,
  #[serde(rename = "actinide")]
  Actinide,
}

impl Category {
  pub const ALL: [Category; 10] = [
    Category::AlkaliMetal,
    Category::AlkalineEarthMetal,
    Category::TransitionMetal,
    Category::PostTransitionMetal,
    Category::Metalloid,
    Category::Nonmetal,
    Category::Halogen,
    Category::NobleGas,
    Category::Lanthanide,
    Category::Actinide,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Category::AlkaliMetal => "alkali metal",
      Category::AlkalineEarthMetal => "alkaline earth metal",
      Category::TransitionMetal => "transition metal",
      Category::PostTransitionMetal => "post-transition metal",
      Category::Metalloid => "metalloid",
      Category::Nonmetal => "nonmetal",
      Category::Halogen => "halogen",
      Category::NobleGas => "noble gas",
      Category::Lanthanide => "lanthanide",
      Category::Actinide => "actinide",
    }
  }

  /// Exact label match. Labels overlap textually ("metal"), so no fuzzy matching.
  pub fn from_label(label: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|c| c.label() == label)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
  Solid,
  Liquid,
  Gas,
  Unknown,
}

impl PhysicalState {
  pub fn label(self) -> &'static str {
    match self {
      PhysicalState::Solid => "Solid",
      PhysicalState::Liquid => "Liquid",
      PhysicalState::Gas => "Gas",
      PhysicalState::Unknown => "Unknown",
    }
  }
}

/// When an element was discovered. Source data uses a year or the word "Ancient".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
  Ancient,
  Year(u16),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDiscovery {
  Year(u16),
  Text(String),
}

impl<'de> Deserialize<'de> for Discovery {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    match RawDiscovery::deserialize(deserializer)? {
      RawDiscovery::Year(y) => Ok(Discovery::Year(y)),
      RawDiscovery::Text(s) if s.trim().eq_ignore_ascii_case("ancient") => Ok(Discovery::Ancient),
      RawDiscovery::Text(s) => s
        .trim()
        .parse()
        .map(Discovery::Year)
        .map_err(|_| serde::de::Error::custom(format!("invalid discovery year: {:?}", s))),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
  Num(f64),
  Text(String),
}

/// A measured value: a number, `null`, or the word "unknown" in any case.
fn measurement<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
  match Option::<RawMeasurement>::deserialize(deserializer)? {
    None => Ok(None),
    Some(RawMeasurement::Num(v)) => Ok(Some(v)),
    Some(RawMeasurement::Text(s)) if s.trim().eq_ignore_ascii_case("unknown") => Ok(None),
    Some(RawMeasurement::Text(s)) => Err(serde::de::Error::custom(format!(
      "invalid measurement: {:?}",
      s
    ))),
  }
}

// --- Comparable properties ---

/// The numeric fields that can be charted or heat-mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyKey {
  #[default]
  AtomicMass,
  Density,
  MeltingPoint,
  Electronegativity,
  AtomicRadius,
}

impl PropertyKey {
  pub const ALL: [PropertyKey; 5] = [
    PropertyKey::AtomicMass,
    PropertyKey::Density,
    PropertyKey::MeltingPoint,
    PropertyKey::Electronegativity,
    PropertyKey::AtomicRadius,
  ];

  /// Stable identifier, matching the dataset field name.
  pub fn key(self) -> &'static str {
    match self {
      PropertyKey::AtomicMass => "atomicMass",
      PropertyKey::Density => "density",
      PropertyKey::MeltingPoint => "meltingPoint",
      PropertyKey::Electronegativity => "electronegativity",
      PropertyKey::AtomicRadius => "atomicRadius",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      PropertyKey::AtomicMass => "Atomic Mass",
      PropertyKey::Density => "Density",
      PropertyKey::MeltingPoint => "Melting Point",
      PropertyKey::Electronegativity => "Electronegativity",
      PropertyKey::AtomicRadius => "Atomic Radius",
    }
  }

  pub fn unit(self) -> &'static str {
    match self {
      PropertyKey::AtomicMass => "AMU",
      PropertyKey::Density => "g/cm³",
      PropertyKey::MeltingPoint => "K",
      PropertyKey::Electronegativity => "Pauling",
      PropertyKey::AtomicRadius => "pm",
    }
  }

  /// Returns `None` for anything outside the five comparable keys.
  pub fn parse(key: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|p| p.key() == key)
  }
}

impl fmt::Display for PropertyKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// --- Element ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
  pub atomic_number: u32,
  pub name: String,
  pub symbol: String,
  pub atomic_mass: f64,
  pub category: Category,
  pub state: PhysicalState,
  #[serde(default, deserialize_with = "measurement")]
  pub density: Option<f64>,
  #[serde(default, deserialize_with = "measurement")]
  pub melting_point: Option<f64>,
  #[serde(default, deserialize_with = "measurement")]
  pub boiling_point: Option<f64>,
  #[serde(default, deserialize_with = "measurement")]
  pub electronegativity: Option<f64>,
  #[serde(default, deserialize_with = "measurement")]
  pub atomic_radius: Option<f64>,
  pub year_discovered: Discovery,
  pub electron_configuration: String,
  pub summary: String,
  #[serde(default)]
  pub cpk_hex: Option<String>,
  pub xpos: u32,
  pub ypos: u32,
}

impl Element {
  pub fn value(&self, key: PropertyKey) -> Option<f64> {
    match key {
      PropertyKey::AtomicMass => Some(self.atomic_mass),
      PropertyKey::Density => self.density,
      PropertyKey::MeltingPoint => self.melting_point,
      PropertyKey::Electronegativity => self.electronegativity,
      PropertyKey::AtomicRadius => self.atomic_radius,
    }
  }

  /// Every numeric field, used when validating a dataset.
  pub(crate) fn numeric_fields(&self) -> [(&'static str, Option<f64>); 6] {
    [
      ("atomicMass", Some(self.atomic_mass)),
      ("density", self.density),
      ("meltingPoint", self.melting_point),
      ("boilingPoint", self.boiling_point),
      ("electronegativity", self.electronegativity),
      ("atomicRadius", self.atomic_radius),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_category_labels_round_trip() {
    for cat in Category::ALL {
      assert_eq!(Category::from_label(cat.label()), Some(cat));
    }
    assert_eq!(Category::from_label("metal"), None);
    assert_eq!(Category::from_label("Noble Gas"), None);
  }

  #[test]
  fn test_property_key_parse_rejects_unknown() {
    assert_eq!(PropertyKey::parse("meltingPoint"), Some(PropertyKey::MeltingPoint));
    assert_eq!(PropertyKey::parse("boilingPoint"), None);
    assert_eq!(PropertyKey::parse(""), None);
    assert_eq!(PropertyKey::default(), PropertyKey::AtomicMass);
  }

  #[test]
  fn test_discovery_accepts_year_and_ancient() {
    let d: Discovery = serde_json::from_str("1669").unwrap();
    assert_eq!(d, Discovery::Year(1669));
    let d: Discovery = serde_json::from_str("\"Ancient\"").unwrap();
    assert_eq!(d, Discovery::Ancient);
    let d: Discovery = serde_json::from_str("\"ancient\"").unwrap();
    assert_eq!(d, Discovery::Ancient);
    let d: Discovery = serde_json::from_str("\"1898\"").unwrap();
    assert_eq!(d, Discovery::Year(1898));
    assert!(serde_json::from_str::<Discovery>("\"someday\"").is_err());
  }

  #[test]
  fn test_atomic_mass_always_present() {
    let json = r#"{"atomicNumber": 2, "name": "Helium", "symbol": "He", "atomicMass": 4.0026,
      "category": "noble gas", "state": "gas", "density": 0.0001785, "meltingPoint": null,
      "yearDiscovered": 1868, "electronConfiguration": "1s2", "summary": "", "xpos": 18, "ypos": 1}"#;
    let he: Element = serde_json::from_str(json).unwrap();
    assert_eq!(he.value(PropertyKey::AtomicMass), Some(4.0026));
    assert_eq!(he.value(PropertyKey::MeltingPoint), None);
    assert_eq!(he.value(PropertyKey::AtomicRadius), None);
    assert_eq!(he.cpk_hex, None);
  }

  #[test]
  fn test_unknown_measurement_reads_as_absent() {
    let json = r#"{"atomicNumber": 2, "name": "Helium", "symbol": "He", "atomicMass": 4.0026,
      "category": "noble gas", "state": "gas", "density": "unknown", "meltingPoint": "Unknown",
      "atomicRadius": 31, "yearDiscovered": 1868, "electronConfiguration": "1s2", "summary": "",
      "xpos": 18, "ypos": 1}"#;
    let he: Element = serde_json::from_str(json).unwrap();
    assert_eq!(he.density, None);
    assert_eq!(he.melting_point, None);
    assert_eq!(he.atomic_radius, Some(31.0));
  }

  #[test]
  fn test_other_measurement_text_is_rejected() {
    let json = r#"{"atomicNumber": 2, "name": "Helium", "symbol": "He", "atomicMass": 4.0026,
      "category": "noble gas", "state": "gas", "density": "n/a", "yearDiscovered": 1868,
      "electronConfiguration": "1s2", "summary": "", "xpos": 18, "ypos": 1}"#;
    assert!(serde_json::from_str::<Element>(json).is_err());
  }
}
