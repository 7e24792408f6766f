//! Candidate records offered by the typeahead.
//!
//! The controller is generic over [`Candidate`]: anything that can hand out a
//! text value for a named field. [`Record`] is the JSON-backed implementation
//! used for catalogs loaded from disk.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TypeaheadError;

/// A selectable record with named text fields and optional display attributes
pub trait Candidate {
    /// Text value of a named field, `None` when absent or not text
    fn text(&self, field: &str) -> Option<&str>;

    /// Whether the field exists at all, whatever its type
    fn has_field(&self, field: &str) -> bool {
        self.text(field).is_some()
    }

    fn norm(&self) -> Option<&str> {
        None
    }

    fn price(&self) -> Option<&Price> {
        None
    }

    fn duration(&self) -> Option<&str> {
        None
    }

    fn accredited(&self) -> bool {
        false
    }

    /// Codes that must be quoted together with this one
    fn related_codes(&self) -> &[String] {
        &[]
    }
}

/// A price as it appears in catalog data: either a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Numeric value, parsing text prices that use a decimal comma
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(value) => Some(*value),
            Price::Text(text) => text.trim().replace(',', ".").parse().ok(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(value) => write!(f, "{value}"),
            Price::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Amount(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

const NORM_KEY: &str = "norma";
const PRICE_KEY: &str = "precio";
const DURATION_KEY: &str = "tiempo";
const ACCREDITED_KEY: &str = "acreditado";
const RELATED_CODES_KEY: &str = "codigosRelacionados";

/// Catalog entry deserialized from a JSON object
///
/// Display attributes use the catalog's key names; every other key lands in
/// `fields`. [`Candidate::text`] reaches both, so any text attribute can serve
/// as the code or label field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "norma", default, skip_serializing_if = "Option::is_none")]
    pub norm: Option<String>,

    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(rename = "tiempo", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// "SI" marks an accredited entry
    #[serde(rename = "acreditado", default, skip_serializing_if = "Option::is_none")]
    pub accredited: Option<String>,

    /// `null` reads as an empty list
    #[serde(
        rename = "codigosRelacionados",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_codes: Vec<String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Value::String(value.into()));
        self
    }

    pub fn with_norm(mut self, norm: impl Into<String>) -> Self {
        self.norm = Some(norm.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Price>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_accredited(mut self, accredited: bool) -> Self {
        self.accredited = accredited.then(|| "SI".to_string());
        self
    }

    pub fn with_related_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Text of a display attribute looked up by its catalog key
    fn attribute_text(&self, field: &str) -> Option<&str> {
        match field {
            NORM_KEY => self.norm.as_deref(),
            DURATION_KEY => self.duration.as_deref(),
            ACCREDITED_KEY => self.accredited.as_deref(),
            PRICE_KEY => match &self.price {
                Some(Price::Text(text)) => Some(text.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    fn has_attribute(&self, field: &str) -> bool {
        match field {
            NORM_KEY => self.norm.is_some(),
            DURATION_KEY => self.duration.is_some(),
            ACCREDITED_KEY => self.accredited.is_some(),
            PRICE_KEY => self.price.is_some(),
            RELATED_CODES_KEY => !self.related_codes.is_empty(),
            _ => false,
        }
    }
}

impl Candidate for Record {
    fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(value) => value.as_str(),
            None => self.attribute_text(field),
        }
    }

    fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field) || self.has_attribute(field)
    }

    fn norm(&self) -> Option<&str> {
        self.norm.as_deref()
    }

    fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    fn accredited(&self) -> bool {
        self.accredited
            .as_deref()
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("SI"))
    }

    fn related_codes(&self) -> &[String] {
        &self.related_codes
    }
}

/// Names of the code and label fields the typeahead matches and displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelectors<'a> {
    pub code: &'a str,
    pub label: &'a str,
}

impl<'a> FieldSelectors<'a> {
    pub fn new(code: &'a str, label: &'a str) -> Self {
        Self { code, label }
    }

    pub fn code_of<'c, C: Candidate>(&self, candidate: &'c C) -> Option<&'c str> {
        candidate.text(self.code)
    }

    pub fn label_of<'c, C: Candidate>(&self, candidate: &'c C) -> Option<&'c str> {
        candidate.text(self.label)
    }

    /// Verify every candidate carries both fields as text.
    /// Returns the first offending candidate.
    pub fn check<C: Candidate>(&self, candidates: &[C]) -> Result<(), TypeaheadError> {
        for (index, candidate) in candidates.iter().enumerate() {
            for field in [self.code, self.label] {
                if candidate.text(field).is_some() {
                    continue;
                }

                let field = field.to_string();
                return Err(if candidate.has_field(&field) {
                    TypeaheadError::NotText { index, field }
                } else {
                    TypeaheadError::MissingField { index, field }
                });
            }
        }
        Ok(())
    }
}
