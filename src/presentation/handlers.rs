// HTTP request handlers
use crate::domain::control::{ControlMode, ControlPanel};
use crate::domain::dashboard::{Panel, PanelRequest};
use crate::domain::error::DashboardError;
use crate::domain::triage::SeverityLevel;
use crate::domain::vitals::VitalsConfig;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

/// Every panel input, all optional; missing values fall back to the widget defaults
#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    pub severity: Option<String>,
    pub mode: Option<String>,
    pub sound_deterrent: Option<bool>,
    pub heart_rate: Option<u32>,
    pub ecg_noise: Option<f64>,
    pub spo2: Option<u32>,
    pub temp: Option<f64>,
}

impl PanelQuery {
    pub fn into_request(self, panel: Panel) -> Result<PanelRequest, DashboardError> {
        let request = match panel {
            Panel::AiTriage => PanelRequest::AiTriage {
                severity: match self.severity.as_deref() {
                    Some(s) => s.parse()?,
                    None => SeverityLevel::default(),
                },
            },
            Panel::BirdAvoidance => {
                let defaults = ControlPanel::default();
                let mode = match self.mode.as_deref() {
                    Some(m) => m.parse::<ControlMode>()?,
                    None => defaults.mode,
                };
                PanelRequest::BirdAvoidance {
                    control: ControlPanel {
                        mode,
                        sound_deterrent: self.sound_deterrent.unwrap_or(defaults.sound_deterrent),
                    },
                }
            }
            Panel::Teleconsultation => PanelRequest::Teleconsultation,
            Panel::VitalsMonitoring => {
                let defaults = VitalsConfig::default();
                let config = VitalsConfig {
                    heart_rate: self.heart_rate.unwrap_or(defaults.heart_rate),
                    ecg_noise: self.ecg_noise.unwrap_or(defaults.ecg_noise),
                    spo2_baseline: self.spo2.unwrap_or(defaults.spo2_baseline),
                    temp_baseline: self.temp.unwrap_or(defaults.temp_baseline),
                };
                PanelRequest::VitalsMonitoring {
                    config: config.validate()?,
                }
            }
            Panel::MedicineDispenser => PanelRequest::MedicineDispenser,
        };

        Ok(request)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub message: String,
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Sidebar menu entries
pub async fn list_panels(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let menu = state.dashboard_service.menu();
    into_response(json_response(StatusCode::OK, &menu, accepts_brotli(&headers)).await)
}

/// Render one panel from its query inputs
pub async fn render_panel(
    Path(slug): Path<String>,
    Query(query): Query<PanelQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let panel = Panel::from_slug(&slug)?;
    let request = query.into_request(panel)?;
    let view = state.dashboard_service.render(request)?;

    Ok(into_response(
        json_response(StatusCode::OK, &view, accepts_brotli(&headers)).await,
    ))
}

/// Paced drone status feed for the triage panel
pub async fn stream_flight_status(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.streaming_service.stream_flight_status();
    stream_from_receiver(rx, accepts_brotli(&headers)).await
}

/// Paced telemetry log feed for the bird avoidance panel
pub async fn stream_telemetry(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.streaming_service.stream_telemetry();
    stream_from_receiver(rx, accepts_brotli(&headers)).await
}

pub async fn start_video_consultation(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard_service.start_video_consultation())
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(chat): Json<ChatMessage>,
) -> impl IntoResponse {
    Json(state.dashboard_service.send_message(&chat.message))
}

pub async fn dispense_medicine(
    Path(medicine): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, DashboardError> {
    Ok(Json(state.dashboard_service.dispense(&medicine)?))
}
