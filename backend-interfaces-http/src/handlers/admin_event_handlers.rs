use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::event_commands;
use backend_application::dtos::{EventDetailView, EventListQuery, EventView, MessageResponse};
use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{Event, EventPatch, NewEvent};

use crate::error::HttpError;

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), HttpError> {
    let event = event_commands::create_event(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventView>>, HttpError> {
    let events = event_queries::list_events(&state, query).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<EventDetailView>, HttpError> {
    let event = event_queries::get_event(&state, event_id).await?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, HttpError> {
    let event = event_commands::update_event(&state, event_id, patch).await?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    event_commands::delete_event(&state, event_id).await?;
    Ok(Json(MessageResponse {
        message: "event deleted along with its shows".to_string(),
    }))
}
