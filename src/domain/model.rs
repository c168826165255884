use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A loosely typed scalar as the backend sends it. Records are not validated,
/// so any JSON scalar is accepted, including `null` and booleans.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// True for the values a fresh form carries: empty text or zero.
    pub fn is_blank_or_zero(&self) -> bool {
        match self {
            FieldValue::Null | FieldValue::Bool(false) => true,
            FieldValue::Bool(true) => false,
            FieldValue::Int(n) => *n == 0,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
            }
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Serialized as displayed, so form bodies carry the same text as the table
/// and the CSV export.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    FieldValue::deserialize(deserializer).map(|value| value.to_string())
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Car {
    #[serde(default)]
    pub id: FieldValue,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: String,
    #[serde(default)]
    pub year: FieldValue,
    #[serde(default)]
    pub price: FieldValue,
    #[serde(default, deserialize_with = "lenient_text")]
    pub color: String,
    /// Name of the style record this car belongs to.
    #[serde(rename = "styleSelect", default, deserialize_with = "lenient_text")]
    pub style_select: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `GET /cars` and of every car mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub records: Vec<Car>,
}

/// Body of `GET /styleCar` and `POST /stylesCar`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleList {
    #[serde(default)]
    pub records: Vec<Style>,
}

/// Line format of an exported CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvFormat {
    /// `id, model, brand, year, price, color, styleSelect` joined by `", "`, unquoted.
    /// A value containing a comma or newline breaks the line structure.
    #[default]
    Plain,
    /// RFC 4180 output: `,` separators, fields quoted when needed.
    Quoted,
}

impl std::str::FromStr for CsvFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(CsvFormat::Plain),
            "quoted" => Ok(CsvFormat::Quoted),
            other => Err(format!("unknown CSV format: {} (expected plain or quoted)", other)),
        }
    }
}
