//! The single-page question/answer UI.
//!
//! GET / - a text input, a submit button and an output field wired to
//! `POST /api/v1/ask`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET / - Serve the UI page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
