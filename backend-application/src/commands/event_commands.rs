use backend_domain::{Event, EventPatch, NewEvent};

use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, payload: NewEvent) -> Result<Event, AppError> {
    if payload.event_name.trim().is_empty() {
        return Err(AppError::InvalidInput("event_name is required".to_string()));
    }
    let event = state.event_repo.create_event(&payload).await?;
    Ok(event)
}

pub async fn update_event(
    state: &AppState,
    event_id: i64,
    patch: EventPatch,
) -> Result<Event, AppError> {
    if event_id <= 0 {
        return Err(AppError::InvalidInput("invalid event id".to_string()));
    }
    if let Some(name) = &patch.event_name {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "event_name must not be empty".to_string(),
            ));
        }
    }
    match state.event_repo.update_event(event_id, &patch).await? {
        Some(event) => Ok(event),
        None => Err(AppError::NotFound(format!("event {event_id}"))),
    }
}

/// Deletes the event and, through the cascade, its shows and tickets.
pub async fn delete_event(state: &AppState, event_id: i64) -> Result<(), AppError> {
    if event_id <= 0 {
        return Err(AppError::InvalidInput("invalid event id".to_string()));
    }
    if state.event_repo.delete_event(event_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("event {event_id}")))
    }
}
