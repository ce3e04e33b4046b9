use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use distserve_core::{CoreResult, ResolvedFile};
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /assets/{*file_path}`
pub async fn asset_handler(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Result<Response, AppError> {
    let file = state
        .resolver
        .resolve_asset(&file_path)
        .await
        .map_err(|e| state.app_error(e))?;

    file_response(&file).await.map_err(|e| state.app_error(e))
}

/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_shell(&state, "").await
}

/// `GET /{*full_path}`: every path the asset route does not claim.
///
/// `full_path` arrives percent-decoded, so `/assets%2Fx.js` is treated as
/// `assets/x.js`.
pub async fn shell_handler(
    State(state): State<AppState>,
    Path(full_path): Path<String>,
) -> Result<Response, AppError> {
    serve_shell(&state, &full_path).await
}

async fn serve_shell(state: &AppState, path: &str) -> Result<Response, AppError> {
    let file = state
        .resolver
        .resolve_shell(path)
        .map_err(|e| state.app_error(e))?;

    file_response(&file).await.map_err(|e| state.app_error(e))
}

async fn file_response(file: &ResolvedFile) -> CoreResult<Response> {
    let (handle, len) = file.open().await?;
    let body = Body::from_stream(ReaderStream::new(handle));

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type().to_string()),
            (header::CONTENT_LENGTH, len.to_string()),
        ],
        body,
    )
        .into_response())
}
