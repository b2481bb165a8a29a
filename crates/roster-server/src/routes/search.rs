use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use roster_model::{FilterField, FilterSet};
use roster_normalization::{CleanRecord, Cleanse, decorate_all};
use serde::Serialize;

use crate::error::ServerError;
use crate::logging::redact_value;
use crate::state::AppState;

/// Builds the search criteria from raw query pairs.
///
/// Only the first occurrence of each filter key counts, even when it is blank.
/// Unknown keys are ignored.
pub fn criteria_from_query(pairs: &[(String, String)]) -> FilterSet {
    let mut first: BTreeMap<FilterField, &str> = BTreeMap::new();
    for (key, value) in pairs {
        if let Some(field) = FilterField::from_key(key) {
            first.entry(field).or_insert(value.as_str());
        }
    }
    FilterSet::from_optional(first.into_iter().map(|(field, value)| (field, Some(value))))
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub members: Vec<CleanRecord>,
    pub total_count: usize,
    pub filtered_count: usize,
}

fn describe_criteria(criteria: &FilterSet) -> String {
    criteria
        .iter()
        .map(|(field, value)| format!("{field}={}", redact_value(value)))
        .collect::<Vec<_>>()
        .join(",")
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ServerError> {
    let criteria = criteria_from_query(&pairs);
    tracing::debug!(criteria = %describe_criteria(&criteria), "Search requested");
    let records = state.load_roster().await?;
    let outcome = roster_query::search(&records, &criteria);
    let members = decorate_all(&outcome.members).cleanse();
    Ok(Json(SearchResponse {
        members,
        total_count: outcome.total_count,
        filtered_count: outcome.filtered_count,
    }))
}
