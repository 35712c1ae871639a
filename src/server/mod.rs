//! # HTTP Server for Dot Calendar Wallpapers
//!
//! Serves freshly rendered PNG wallpapers.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /wallpaper` | Month mosaic |
//! | `GET /days?key=…` | Year grid, requires the shared key |
//! | `GET /static/*` | Files from the static directory |
//!
//! ## Usage
//!
//! ```bash
//! DAYS_SECRET=changeme dotcal serve --listen 0.0.0.0:3000 --fonts ./fonts
//! ```
//!
//! Then open http://localhost:3000/wallpaper in a browser.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::error::DotcalError;

/// Build the application router around shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/wallpaper", get(handlers::wallpaper::wallpaper))
        .route("/days", get(handlers::days::days))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Fonts are loaded before the listener is bound, so a bad font directory
/// stops the process before any request is accepted.
///
/// ## Example
///
/// ```no_run
/// use dotcal::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), dotcal::error::DotcalError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3000".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), DotcalError> {
    let state = Arc::new(AppState::new(config.clone())?);
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            DotcalError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(
        listen = %config.listen_addr,
        builtin_fonts = state.fonts.is_builtin(),
        days_enabled = config.days_secret.is_some(),
        clock = ?config.clock,
        "dotcal server listening"
    );
    info!("try http://{}/wallpaper", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DotcalError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
