use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use roster_normalization::{CleanRecord, Cleanse, decorate};
use roster_query::member_at;

use crate::error::ServerError;
use crate::state::AppState;

/// Parses a path id made of ASCII digits only; signs and whitespace are rejected.
fn parse_member_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Member detail by roster position.
///
/// Ids that are not plain digits, or past the end of the roster, all yield the
/// same not-found body.
pub async fn member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CleanRecord>, ServerError> {
    let id = parse_member_id(&id).ok_or(ServerError::MemberNotFound)?;
    let records = state.load_roster().await?;
    let record = member_at(&records, id).ok_or(ServerError::MemberNotFound)?;
    Ok(Json(decorate(record).cleanse()))
}
