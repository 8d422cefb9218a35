// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dispense_medicine, health_check, list_panels, render_panel, send_message,
    start_video_consultation, stream_flight_status, stream_telemetry,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/panels", get(list_panels))
        .route("/panels/:slug", get(render_panel))
        .route("/panels/ai-triage/status", get(stream_flight_status))
        .route("/panels/bird-avoidance/telemetry", get(stream_telemetry))
        .route("/panels/teleconsultation/video", post(start_video_consultation))
        .route("/panels/teleconsultation/messages", post(send_message))
        .route("/panels/medicine-dispenser/:medicine", post(dispense_medicine))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
