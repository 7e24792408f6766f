use serde::{Deserialize, Serialize};

use crate::candidate::FieldSelectors;

pub const DEFAULT_CODE_FIELD: &str = "codigo";
pub const DEFAULT_LABEL_FIELD: &str = "descripcion";
pub const DEFAULT_PLACEHOLDER: &str = "Buscar...";

/// Host-supplied typeahead configuration
///
/// The defaults match every query against code and label with no minimum
/// length and no cap on the number of suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeaheadConfig {
    pub code_field: String,
    pub label_field: String,
    pub placeholder: String,
    /// Queries shorter than this (in chars) produce no suggestions
    pub min_chars: usize,
    pub max_suggestions: Option<usize>,
    /// Also match the query against the norm attribute
    pub match_norm: bool,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            code_field: DEFAULT_CODE_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_chars: 0,
            max_suggestions: None,
            match_norm: false,
        }
    }
}

impl TypeaheadConfig {
    pub fn selectors(&self) -> FieldSelectors<'_> {
        FieldSelectors::new(&self.code_field, &self.label_field)
    }

    pub fn with_fields(mut self, code_field: &str, label_field: &str) -> Self {
        self.code_field = code_field.to_string();
        self.label_field = label_field.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = Some(max_suggestions);
        self
    }

    pub fn with_norm_matching(mut self, enabled: bool) -> Self {
        self.match_norm = enabled;
        self
    }

    /// Whether a query is long enough to produce suggestions
    pub fn accepts_query(&self, query: &str) -> bool {
        query.chars().count() >= self.min_chars
    }
}
