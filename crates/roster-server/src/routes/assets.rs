use axum::http::header;
use axum::response::IntoResponse;

const MAIN_JS: &str = include_str!("../../assets/main.js");

/// Client script for live search and the member detail dialog.
pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
