//! `/days`: the keyed year grid.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::super::state::AppState;
use super::{png_response, render_result};
use crate::params::Params;
use crate::render::days::{DaysOptions, render_days};

/// GET /days - Render the year grid as PNG. Requires `key`.
pub async fn days(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Params>,
) -> Result<Response, (StatusCode, String)> {
    // Checked before the options are parsed or anything is rendered.
    if !state.is_authorized(params.get("key").map(String::as_str)) {
        debug!("rejected /days request without a valid key");
        return Ok(StatusCode::UNAUTHORIZED.into_response());
    }

    let options = DaysOptions::from_params(&params);
    let today = state.config.clock.today();
    let fonts = state.fonts.clone();

    let result =
        tokio::task::spawn_blocking(move || render_days(&options, today, &fonts).encode_png())
            .await;

    render_result(result).map(png_response)
}
