use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{info, warn};

use crate::parser::{read_meetings_csv, TestCase};
use crate::samples::sample_cases;
use crate::schedule::{find_meeting_subsets, Meeting, MeetingSelection};

// Last computed selection, kept in memory only
pub struct AppState {
    pub selection: Mutex<Option<MeetingSelection>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            selection: Mutex::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
pub struct SelectRequest {
    meetings: TestCase,
}

#[derive(Serialize)]
pub struct SampleResponse {
    name: String,
    meetings: Vec<Meeting>,
    total_attendees: usize,
}

fn store_selection(state: &AppState, selection: MeetingSelection) -> Result<HttpResponse> {
    let mut slot = state
        .selection
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Selection state unavailable"))?;
    let response = HttpResponse::Ok().json(&selection);
    *slot = Some(selection);
    Ok(response)
}

// Run the selector on a JSON meeting list
async fn select_meetings(
    req: web::Json<SelectRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let meetings = req.into_inner().meetings;
    let selection = find_meeting_subsets(&meetings);
    info!(
        "Selected {} of {} meetings ({} attendees)",
        selection.meetings.len(),
        meetings.len(),
        selection.total_attendees
    );
    store_selection(&state, selection)
}

// Run the selector on an uploaded CSV body
async fn upload_csv(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match read_meetings_csv(body.as_ref()) {
        Ok(meetings) => {
            let selection = find_meeting_subsets(&meetings);
            info!(
                "Selected {} of {} uploaded meetings ({} attendees)",
                selection.meetings.len(),
                meetings.len(),
                selection.total_attendees
            );
            store_selection(&state, selection)
        }
        Err(e) => {
            warn!("Rejected CSV upload: {}", e);
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to process CSV: {}", e)
            })))
        }
    }
}

// Last selection endpoint
async fn get_selection(state: web::Data<AppState>) -> Result<HttpResponse> {
    let selection = state
        .selection
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Selection state unavailable"))?;

    if let Some(ref selection) = *selection {
        Ok(HttpResponse::Ok().json(selection))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No selection available"})))
    }
}

// Built-in samples endpoint
async fn get_samples() -> Result<HttpResponse> {
    let samples: Vec<SampleResponse> = sample_cases()
        .into_iter()
        .map(|sample| {
            let (meetings, total_attendees) = find_meeting_subsets(&sample.meetings).into_parts();
            SampleResponse {
                name: sample.name.to_string(),
                meetings,
                total_attendees,
            }
        })
        .collect();
    Ok(HttpResponse::Ok().json(samples))
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

/// Registers every route; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/select", web::post().to(select_meetings))
        .route("/api/upload", web::post().to(upload_csv))
        .route("/api/selection", web::get().to(get_selection))
        .route("/api/samples", web::get().to(get_samples));
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new());

    info!("Listening on http://0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
