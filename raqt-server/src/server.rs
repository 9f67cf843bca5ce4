//! Axum HTTP server: the survey page, its form endpoints and the JSON export.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Survey page for the caller's session |
//! | POST | `/categories/{letter}` | Submit the answers of one category |
//! | POST | `/view` | Sidebar, goal and export checkboxes |
//! | GET | `/export` | Snapshot of the session as JSON |
//! | GET | `/health` | Health check |

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use raqt::{
    AnswerValue, Catalog, GOAL_COUNT, ParseAnswerError, Renderer, SubmittedAnswer, SurveyEvent,
    export_snapshot,
};
use raqt_html::HtmlRenderer;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::sessions::{SessionStore, session_cookie, session_id};

#[derive(Clone)]
pub struct AppState {
    catalog: &'static Catalog,
    sessions: SessionStore,
    renderer: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(catalog: &'static Catalog, renderer: HtmlRenderer, session_ttl: Duration) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(session_ttl),
            renderer: Arc::new(renderer),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/categories/{letter}", post(handle_submit_category))
        .route("/view", post(handle_view))
        .route("/export", get(handle_export))
        .route("/health", get(handle_health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Errors returned to the browser.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error(transparent)]
    InvalidAnswer(#[from] ParseAnswerError),

    #[error("Unknown view form '{0}'")]
    UnknownViewForm(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidAnswer(_) | ServerError::UnknownViewForm(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "rejected request");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ExportQuery {
    include_questions: Option<bool>,
}

type NewSessionCookie = AppendHeaders<Option<(HeaderName, String)>>;

/// The caller's session id, plus a `Set-Cookie` header when it is new.
fn resolve_session(headers: &HeaderMap) -> (Uuid, NewSessionCookie) {
    match session_id(headers) {
        Some(id) => (id, AppendHeaders(None)),
        None => {
            let id = Uuid::new_v4();
            (id, AppendHeaders(Some((SET_COOKIE, session_cookie(id)))))
        }
    }
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let (id, cookie) = resolve_session(&headers);
    let html = state
        .sessions
        .update(id, |session| state.renderer.render(state.catalog, session))
        .await;
    (cookie, Html(html))
}

async fn handle_export(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ExportQuery>,
) -> impl IntoResponse {
    let (id, cookie) = resolve_session(&headers);
    let snapshot = state
        .sessions
        .update(id, |session| {
            let include_questions = params
                .include_questions
                .unwrap_or(session.include_questions());
            export_snapshot(session.answers(), state.catalog, include_questions)
        })
        .await;
    (cookie, Json(snapshot))
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_submit_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(letter): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, ServerError> {
    let category = single_char(&letter)
        .filter(|c| state.catalog.category(*c).is_some())
        .ok_or_else(|| ServerError::UnknownCategory(letter.clone()))?;

    // Only questions of this category are read; other fields are ignored.
    let mut answers = Vec::new();
    for question in state.catalog.questions_in(category) {
        let id = question.id();
        let Some(raw) = fields.get(&id.answer_field()) else {
            continue;
        };
        let value: AnswerValue = raw.parse()?;
        let justification = fields.get(&id.description_field()).cloned();
        answers.push(SubmittedAnswer::new(id.clone(), value, justification));
    }

    let (id, cookie) = resolve_session(&headers);
    tracing::debug!(%id, %category, submitted = answers.len(), "category submitted");
    state
        .sessions
        .update(id, |session| {
            session.apply(SurveyEvent::SubmitCategory { category, answers });
        })
        .await;

    Ok((cookie, Redirect::to(&format!("/#category-{category}"))))
}

async fn handle_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, ServerError> {
    // Unchecked boxes are absent from the form, so each form reports its full state.
    let form = fields.get("form").map(String::as_str).unwrap_or_default();
    let (events, anchor) = match form {
        "sidebar" => {
            let events = state
                .catalog
                .categories()
                .iter()
                .map(|c| SurveyEvent::ShowCategory {
                    category: c.letter(),
                    visible: fields.contains_key(&format!("show_{}", c.letter())),
                })
                .collect::<Vec<_>>();
            (events, "/")
        }
        "goals" => {
            let events = (0..GOAL_COUNT)
                .map(|index| SurveyEvent::SetGoal {
                    index,
                    checked: fields.contains_key(&format!("goal_{index}")),
                })
                .collect();
            (events, "/")
        }
        "export" => (
            vec![
                SurveyEvent::SetExport(fields.contains_key("export")),
                SurveyEvent::SetIncludeQuestions(fields.contains_key("include_questions")),
            ],
            "/#export",
        ),
        other => return Err(ServerError::UnknownViewForm(other.to_string())),
    };

    let (id, cookie) = resolve_session(&headers);
    state
        .sessions
        .update(id, |session| {
            for event in events {
                session.apply(event);
            }
        })
        .await;

    Ok((cookie, Redirect::to(anchor)))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
