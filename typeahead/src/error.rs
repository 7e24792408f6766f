use thiserror::Error;

/// Candidate data that breaks the typeahead's field contract.
///
/// The controller itself never returns these: a malformed candidate simply
/// never matches. Hosts run [`FieldSelectors::check`](crate::candidate::FieldSelectors::check)
/// when they accept a candidate list to surface the problem at their boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadError {
    #[error("candidate {index} is missing the `{field}` field")]
    MissingField { index: usize, field: String },

    #[error("candidate {index} has a non-text `{field}` field")]
    NotText { index: usize, field: String },
}
