//! # Demo Server Handlers
//!
//! File: cli/src/commands/srv/handlers.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Axum handlers for the single-page demo and its JSON API:
//!
//! | Method | Path             | Body / Response                                         |
//! |--------|------------------|---------------------------------------------------------|
//! | GET    | `/`              | the rendered page                                       |
//! | POST   | `/api/predict`   | `{rainfall, temperature, humidity}` → `Assessment`      |
//! | POST   | `/api/chat`      | `{query, rainfall?, temperature?, humidity?}` → `ChatReply` |
//! | GET    | `/api/checklist` | `{title, items}`                                        |
//! | GET    | `/health`        | `ok`                                                    |
//!
//! Handlers share an `Arc<AppState>` and never mutate it.
//!
use crate::alert::Assessment;
use crate::bot::{Intent, Responder};
use crate::checklist::{self, ChecklistItem};
use crate::core::error::FloodAlertError;
use crate::model::FloodModel;
use crate::weather::WeatherReading;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the handlers read. Built once at startup.
#[derive(Debug)]
pub struct AppState {
    pub model: FloodModel,
    pub responder: Responder,
    /// The pre-rendered page served at `/`.
    pub page: String,
}

pub type SharedState = Arc<AppState>;

/// Body of `POST /api/chat`. Missing readings default to `0.0`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
    #[serde(flatten)]
    pub reading: WeatherReading,
}

/// Response of `POST /api/chat`. Both fields are `null` for an empty query.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub intent: Option<Intent>,
    pub reply: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

/// Errors surfaced to API clients as `{ "error": ... }`.
#[derive(Debug)]
pub struct ApiError(FloodAlertError);

impl From<FloodAlertError> for ApiError {
    fn from(e: FloodAlertError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            FloodAlertError::InvalidReading { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("API request failed ({}): {}", status, self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.page.clone())
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn predict(
    State(state): State<SharedState>,
    Json(reading): Json<WeatherReading>,
) -> Result<Json<Assessment>, ApiError> {
    reading.validate()?;
    let label = state.model.predict_one(&reading);
    debug!("Predicted {:?} for {:?}", label, reading);
    Ok(Json(Assessment::from_label(label)))
}

pub async fn chat(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    request.reading.validate()?;
    let reply = match state.responder.try_respond(&request.query, &request.reading) {
        Ok(response) => ChatReply {
            intent: Some(response.intent),
            reply: Some(response.text),
        },
        Err(FloodAlertError::EmptyQuery) => ChatReply {
            intent: None,
            reply: None,
        },
        Err(e) => return Err(e.into()),
    };
    Ok(Json(reply))
}

pub async fn checklist() -> Json<ChecklistResponse> {
    Json(ChecklistResponse {
        title: checklist::TITLE,
        items: &checklist::ITEMS,
    })
}
