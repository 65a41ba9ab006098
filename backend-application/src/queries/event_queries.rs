use backend_domain::ShowFilter;

use crate::dtos::{EventDetailView, EventListQuery, EventView, ShowView};
use crate::{AppError, AppState};

pub async fn list_events(
    state: &AppState,
    query: EventListQuery,
) -> Result<Vec<EventView>, AppError> {
    let events = state
        .event_repo
        .list_events(query.active.unwrap_or(false))
        .await?;

    let mut views = Vec::with_capacity(events.len());
    for event in events {
        let idr_price = state.rate_service.sol_to_idr(event.default_sol_price).await;
        views.push(EventView { event, idr_price });
    }
    Ok(views)
}

pub async fn get_event(state: &AppState, event_id: i64) -> Result<EventDetailView, AppError> {
    if event_id <= 0 {
        return Err(AppError::InvalidInput("invalid event id".to_string()));
    }
    let Some(event) = state.event_repo.fetch_event(event_id).await? else {
        return Err(AppError::NotFound(format!("event {event_id}")));
    };

    let shows = state
        .show_repo
        .list_shows(&ShowFilter {
            event_id: Some(event_id),
            active: None,
        })
        .await?;

    let mut show_views = Vec::with_capacity(shows.len());
    for show in shows {
        let idr_price = match show.sol_price {
            Some(price) => state.rate_service.sol_to_idr(price).await,
            None => None,
        };
        show_views.push(ShowView {
            show,
            idr_price,
            is_owned: None,
        });
    }

    let idr_price = state.rate_service.sol_to_idr(event.default_sol_price).await;
    Ok(EventDetailView {
        event,
        idr_price,
        shows: show_views,
    })
}
