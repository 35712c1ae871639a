//! `/wallpaper`: the month mosaic.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

use super::super::state::AppState;
use super::{png_response, render_result};
use crate::params::Params;
use crate::render::wallpaper::{WallpaperOptions, load_background, render_wallpaper};

/// GET /wallpaper - Render the month mosaic as PNG.
pub async fn wallpaper(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Params>,
) -> Result<Response, (StatusCode, String)> {
    let options = WallpaperOptions::from_params(&params);
    let background = load_background(&state.http_client, &options).await;
    let today = state.config.clock.today();
    let fonts = state.fonts.clone();

    let result = tokio::task::spawn_blocking(move || {
        render_wallpaper(&options, background.as_ref(), today, &fonts).encode_png()
    })
    .await;

    render_result(result).map(png_response)
}
