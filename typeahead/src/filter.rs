use crate::candidate::Candidate;
use crate::config::TypeaheadConfig;

/// Filter candidates by query string for the typeahead dropdown
///
/// Keeps the candidates whose code or label contains the query
/// case-insensitively, in their original order. Queries below `min_chars`
/// yield nothing and `max_suggestions` caps the result.
pub fn filter_candidates<'a, C: Candidate>(
    candidates: &'a [C],
    query: &str,
    config: &TypeaheadConfig,
) -> Vec<&'a C> {
    if !config.accepts_query(query) {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| matches_query(*candidate, &query_lower, config))
        .take(config.max_suggestions.unwrap_or(usize::MAX))
        .collect()
}

/// Match one candidate against an already lowercased query.
/// Candidates missing the code or label text never match.
pub fn matches_query<C: Candidate>(candidate: &C, query_lower: &str, config: &TypeaheadConfig) -> bool {
    let selectors = config.selectors();
    let (Some(code), Some(label)) = (selectors.code_of(candidate), selectors.label_of(candidate))
    else {
        tracing::trace!(
            code_field = selectors.code,
            label_field = selectors.label,
            "Skipping candidate without code/label text"
        );
        return false;
    };

    code.to_lowercase().contains(query_lower)
        || label.to_lowercase().contains(query_lower)
        || (config.match_norm
            && candidate
                .norm()
                .is_some_and(|norm| norm.to_lowercase().contains(query_lower)))
}
