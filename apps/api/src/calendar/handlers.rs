//! Axum route handlers for the calendar page and JSON API.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::calendar::generator::generate_calendar;
use crate::calendar::models::{
    CalendarRequest, CalendarResponse, ContentFocus, Profile, Settings, Tone, MAX_HEADLINES,
    MIN_HEADLINES,
};
use crate::errors::AppError;
use crate::llm_client::ModelId;
use crate::render::{render_page, Notice};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub models: Vec<&'static str>,
    pub tones: Vec<&'static str>,
    pub focus_areas: Vec<&'static str>,
    pub headline_count: HeadlineRange,
}

#[derive(Debug, Serialize)]
pub struct HeadlineRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// Urlencoded form body decoded into a request, plus any settings that failed to parse.
#[derive(Debug)]
pub struct FormSubmission {
    pub request: CalendarRequest,
    pub problems: Vec<String>,
}

const FALLBACK_WARNING: &str =
    "Limited recent news found. Proceeded with general industry topics.";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(
        &Profile::default(),
        &Settings::default(),
        &[],
        None,
    ))
}

/// POST /generate
///
/// Form submission from the page. Always answers with the page: the calendar on
/// success, or the refilled form with an error banner.
pub async fn handle_generate_form(State(state): State<AppState>, body: Bytes) -> Response {
    let FormSubmission { request, problems } = parse_form(&body);
    let profile = request.profile.clone();
    let settings = request.settings.clone();

    if !problems.is_empty() {
        let message = problems.join(" ");
        let html = render_page(&profile, &settings, &[Notice::Error(&message)], None);
        return (StatusCode::BAD_REQUEST, Html(html)).into_response();
    }

    match generate_calendar(state.news.as_ref(), state.llm.as_ref(), request).await {
        Ok(calendar) => {
            let mut notices = Vec::new();
            if calendar.used_fallback_headlines {
                notices.push(Notice::Warning(FALLBACK_WARNING));
            }
            Html(render_page(&profile, &settings, &notices, Some(&calendar))).into_response()
        }
        Err(e) => {
            tracing::warn!("Calendar generation failed: {e}");
            let message = e.user_message();
            let html = render_page(&profile, &settings, &[Notice::Error(&message)], None);
            (e.status(), Html(html)).into_response()
        }
    }
}

/// POST /api/v1/calendar
///
/// JSON variant of the same pipeline.
pub async fn handle_generate_json(
    State(state): State<AppState>,
    Json(request): Json<CalendarRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let calendar = generate_calendar(state.news.as_ref(), state.llm.as_ref(), request).await?;
    Ok(Json(calendar))
}

/// GET /api/v1/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        models: ModelId::ALL.iter().map(ModelId::as_str).collect(),
        tones: Tone::ALL.iter().map(Tone::label).collect(),
        focus_areas: ContentFocus::ALL.iter().map(ContentFocus::label).collect(),
        headline_count: HeadlineRange {
            min: MIN_HEADLINES,
            max: MAX_HEADLINES,
            default: Settings::default().headline_count,
        },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Form decoding
// ────────────────────────────────────────────────────────────────────────────

/// Decodes an `application/x-www-form-urlencoded` body.
///
/// Unchecked focus boxes are simply absent, so a form with none checked yields an
/// empty focus list. Missing settings keep their defaults.
pub fn parse_form(body: &[u8]) -> FormSubmission {
    let mut profile = Profile::default();
    let mut api_key = String::new();
    let mut settings = Settings {
        focus: Vec::new(),
        ..Settings::default()
    };
    let mut problems = Vec::new();

    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "bio" => profile.bio = value.into_owned(),
            "sample_post" => profile.sample_post = value.into_owned(),
            "industry" => profile.industry = value.into_owned(),
            "api_key" => api_key = value.into_owned(),
            "model" => match value.parse::<ModelId>() {
                Ok(model) => settings.model = model,
                Err(e) => problems.push(e),
            },
            "tone" => match value.parse::<Tone>() {
                Ok(tone) => settings.tone = tone,
                Err(e) => problems.push(e),
            },
            "headline_count" => match value.trim().parse::<u8>() {
                Ok(count) => settings.headline_count = count,
                Err(_) => problems.push(format!("headline_count must be a number, got '{value}'")),
            },
            "focus" => match value.parse::<ContentFocus>() {
                Ok(focus) if !settings.focus.contains(&focus) => settings.focus.push(focus),
                Ok(_) => {}
                Err(e) => problems.push(e),
            },
            _ => {}
        }
    }

    FormSubmission {
        request: CalendarRequest {
            profile,
            api_key,
            settings,
        },
        problems,
    }
}
