use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::{
    state::AppState,
    utils::{cache_control, first_param, path_allowed},
};
use crate::api::error::ApiError;
use crate::upstream::WallpaperSource;
use crate::wallpaper::{self, OutputMode, Resolution, ResolvedInfo, WallpaperQuery};

/// Wallpaper endpoint (any method, any path passing the prefix guard)
///
/// ## Flow:
/// 1. Reject paths outside `server.route_prefix` with a plain 404
/// 2. Compute the archive query (day offset, market)
/// 3. Fetch the archive descriptor and build the cover table
/// 4. `type=image`: stream the selected image; otherwise return the info JSON
pub async fn get_wallpaper(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let server = &state.config.server;
    if !path_allowed(uri.path(), server.route_prefix.as_deref()) {
        debug!(path = uri.path(), "Path outside route prefix");
        state.metrics.not_found();
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    let query = wallpaper_query(&params);

    match serve_wallpaper(&state, query).await {
        Ok(response) => response,
        Err(err) => {
            if matches!(err, ApiError::Upstream(_)) {
                state.metrics.upstream_failed();
            }
            err.into_response()
        }
    }
}

fn wallpaper_query(params: &[(String, String)]) -> WallpaperQuery {
    let param = |name: &str| first_param(params, name).map(str::to_owned);

    WallpaperQuery {
        region: param("region"),
        date: param("date"),
        dpi: param("dpi"),
        kind: param("type"),
    }
}

async fn serve_wallpaper(state: &AppState, query: WallpaperQuery) -> Result<Response, ApiError> {
    let resolution = lookup(
        state.source.as_ref(),
        &query,
        &state.config.resolver.default_dimension,
        Utc::now(),
    )
    .await?;

    match query.output_mode() {
        OutputMode::Image => {
            let body = state.source.fetch_image(&resolution.image_url).await?;
            state.metrics.image_served();

            let headers = [
                (header::CONTENT_TYPE, mime::IMAGE_JPEG.to_string()),
                (
                    header::CACHE_CONTROL,
                    cache_control(state.config.server.cache_max_age),
                ),
            ];
            Ok((StatusCode::OK, headers, body).into_response())
        }
        OutputMode::Info => {
            state.metrics.info_served();
            Ok(info_response(
                resolution.info,
                state.config.server.emit_cors_header,
            ))
        }
    }
}

fn info_response(info: ResolvedInfo, emit_cors_header: bool) -> Response {
    let mut response = (StatusCode::OK, Json(info)).into_response();
    if emit_cors_header {
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
    }
    response
}

/// Queries the archive and resolves the cover table for one request.
///
/// Shared by the HTTP endpoint and the `info` command.
pub async fn lookup(
    source: &dyn WallpaperSource,
    query: &WallpaperQuery,
    default_dimension: &str,
    now: DateTime<Utc>,
) -> Result<Resolution, ApiError> {
    let archive_query = wallpaper::archive_query(query, now)?;
    let image = source.fetch_archive(&archive_query).await?;

    let resolution = wallpaper::resolve(&image, query.dpi(), source.host(), default_dimension);

    info!(
        idx = archive_query.idx,
        mkt = %archive_query.mkt,
        dpi = query.dpi().unwrap_or("-"),
        selected = resolution.info.selected_cover.is_some(),
        "Resolved wallpaper"
    );

    Ok(resolution)
}
