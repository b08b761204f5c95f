use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::forecast_routes;

/// The default has no description, so records leave the `description` field out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ForecastSettings {
    /// Attached to every generated record when set.
    pub description: Option<String>,
}

// Anything that goes in here must be a handle or pointer that can be cloned.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ForecastSettings>,
}

impl AppState {
    pub fn new(settings: ForecastSettings) -> AppState {
        AppState {
            settings: Arc::new(settings),
        }
    }
}

pub fn create_app(settings: ForecastSettings) -> Router {
    let state = AppState::new(settings);
    log::debug!("creating app with settings {:?}", state.settings);

    Router::new()
        .nest("/api/weather-forecast", forecast_routes::routes(state))
        .layer(TraceLayer::new_for_http())
}
