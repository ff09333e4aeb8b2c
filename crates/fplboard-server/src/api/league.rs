use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use fplboard_league::{aggregate_league, export, GameweekRange, PicksMode};

use crate::middleware::RequestId;

use super::{error_response, AppState};

/// Shared request body for both league operations.
#[derive(Debug, Deserialize)]
pub(super) struct LeagueRequest {
    #[serde(rename = "leagueCode")]
    league_code: String,
    #[serde(rename = "startGW")]
    start_gw: i32,
    #[serde(rename = "endGW")]
    end_gw: i32,
}

#[derive(Debug, Serialize)]
pub(super) struct ExportResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

/// `POST /api/v1/league/aggregate` — full aggregation with captain picks.
pub(super) async fn aggregate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<LeagueRequest>, JsonRejection>,
) -> Response {
    let (request, range) = match validate(payload) {
        Ok(validated) => validated,
        Err(response) => return response,
    };

    tracing::info!(
        request_id = %req_id.0,
        league = %request.league_code,
        "aggregate operation started"
    );
    match aggregate_league(
        state.client.as_ref(),
        &request.league_code,
        range,
        PicksMode::Include,
    )
    .await
    {
        Ok(dataset) => (StatusCode::OK, Json(dataset)).into_response(),
        Err(e) => {
            tracing::error!(
                request_id = %req_id.0,
                league = %request.league_code,
                error = %e,
                "aggregate operation failed"
            );
            error_response(&e.to_string())
        }
    }
}

/// `POST /api/v1/league/export` — same aggregation without the per-gameweek
/// picks fan-out, encoded as a CSV `data:` URI.
pub(super) async fn export_csv(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<LeagueRequest>, JsonRejection>,
) -> Response {
    let (request, range) = match validate(payload) {
        Ok(validated) => validated,
        Err(response) => return response,
    };

    tracing::info!(
        request_id = %req_id.0,
        league = %request.league_code,
        "export operation started"
    );
    match aggregate_league(
        state.client.as_ref(),
        &request.league_code,
        range,
        PicksMode::Skip,
    )
    .await
    {
        Ok(dataset) => {
            let csv = export::to_csv(&dataset, range);
            Json(ExportResponse {
                file_url: export::to_data_uri(&csv),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %req_id.0,
                league = %request.league_code,
                error = %e,
                "export operation failed"
            );
            error_response(&e.to_string())
        }
    }
}

/// Rejects malformed bodies and invalid gameweek windows before any
/// upstream traffic is issued.
fn validate(
    payload: Result<Json<LeagueRequest>, JsonRejection>,
) -> Result<(LeagueRequest, GameweekRange), Response> {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return Err(error_response(&format!("invalid request body: {rejection}")));
        }
    };
    let range = GameweekRange::new(request.start_gw, request.end_gw)
        .map_err(|e| error_response(&e.to_string()))?;
    Ok((request, range))
}
