//! HTTP handlers for the server.

pub mod days;
pub mod wallpaper;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio::task::JoinError;

use crate::error::DotcalError;

/// Wrap encoded PNG bytes in a response.
fn png_response(png_bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response()
}

/// Flatten the result of a blocking render task into a handler error.
fn render_result(
    result: Result<Result<Vec<u8>, DotcalError>, JoinError>,
) -> Result<Vec<u8>, (StatusCode, String)> {
    match result {
        Ok(Ok(png_bytes)) => Ok(png_bytes),
        Ok(Err(e)) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Render task failed: {}", e),
        )),
    }
}
