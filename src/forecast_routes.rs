use crate::app::AppState;
use crate::error::ApiError;
use crate::forecast::{FORECAST_DAYS, ForecastRecord, generate_forecast};
use axum::{
    Router,
    body::Bytes,
    extract::{Json, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

/// Optional request model. The id is accepted but does not influence the forecast,
/// so a missing or null id is fine.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct ForecastRequest {
    #[serde(default)]
    pub id: Option<i32>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/list", get(get_forecast_list))
        .with_state(state)
}

fn parse_request(body: &[u8]) -> Result<Option<ForecastRequest>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    // A literal `null` body is the same as no body.
    Ok(serde_json::from_slice::<Option<ForecastRequest>>(body)?)
}

async fn get_forecast_list(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ForecastRecord>>, ApiError> {
    if let Some(ForecastRequest { id: Some(id) }) = parse_request(&body)? {
        log::debug!("Forecast requested with id {}", id);
    }
    let forecast = generate_forecast(FORECAST_DAYS, state.settings.description.as_deref());
    log::trace!("Generated {} forecast records", forecast.len());
    Ok(Json(forecast))
}
