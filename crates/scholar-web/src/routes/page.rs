//! Home page

use crate::state::AppState;
use crate::WebError;
use axum::{extract::State, response::Html, routing::get, Router};

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let html = state.surface.render(&state.shell)?;
    Ok(Html(html))
}
