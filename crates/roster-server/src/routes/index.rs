use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use roster_normalization::decorate_all;
use roster_query::Facets;

use crate::error::ServerError;
use crate::render::render_index;
use crate::state::AppState;

/// Index page: every member with its flag plus the facet selection lists.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let records = state.load_roster().await?;
    let facets = Facets::collect(&records);
    let members = decorate_all(&records);
    Ok(Html(render_index(&members, &facets)))
}
