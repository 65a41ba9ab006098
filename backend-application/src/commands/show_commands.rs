use tracing::info;

use backend_domain::{NewShow, Show, ShowPatch, TicketMetadata};

use crate::dtos::MetadataTemplateInput;
use crate::{AppError, AppState};

pub async fn create_show(state: &AppState, payload: NewShow) -> Result<Show, AppError> {
    if payload.event_id <= 0 {
        return Err(AppError::InvalidInput("event_id is required".to_string()));
    }
    if payload.total_tickets.is_some_and(|total| total < 0) {
        return Err(AppError::InvalidInput(
            "total_tickets must not be negative".to_string(),
        ));
    }
    if state.event_repo.fetch_event(payload.event_id).await?.is_none() {
        return Err(AppError::NotFound(format!("event {}", payload.event_id)));
    }
    let show = state.show_repo.create_show(&payload).await?;
    Ok(show)
}

pub async fn update_show(
    state: &AppState,
    show_id: i64,
    patch: ShowPatch,
) -> Result<Show, AppError> {
    if show_id <= 0 {
        return Err(AppError::InvalidInput("invalid show id".to_string()));
    }
    if patch.total_tickets.is_some_and(|total| total < 0) {
        return Err(AppError::InvalidInput(
            "total_tickets must not be negative".to_string(),
        ));
    }
    match state.show_repo.update_show(show_id, &patch).await? {
        Some(show) => Ok(show),
        None => Err(AppError::NotFound(format!("show {show_id}"))),
    }
}

/// Publish a show's metadata template to content-addressed storage and
/// record the returned CID on the show. Prepare refuses to run until
/// this has happened.
pub async fn set_metadata_template(
    state: &AppState,
    show_id: i64,
    payload: MetadataTemplateInput,
) -> Result<(Show, String), AppError> {
    if show_id <= 0 {
        return Err(AppError::InvalidInput("invalid show id".to_string()));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::InvalidInput("name is required".to_string()));
    }
    let Some(show) = state.show_repo.fetch_show(show_id).await? else {
        return Err(AppError::NotFound(format!("show {show_id}")));
    };

    let document = TicketMetadata {
        name: payload.name,
        description: payload.description.unwrap_or_default(),
        image: payload.image_url,
        attributes: payload.attributes,
    };
    let pin_name = format!(
        "Show-{}-MetadataTemplate-{}.json",
        show.show_id,
        chrono::Utc::now().timestamp_millis()
    );
    let cid = tokio::time::timeout(
        std::time::Duration::from_secs(state.config.upstream_timeout_seconds),
        state.metadata_store.publish_json(&document, &pin_name),
    )
    .await
    .map_err(|_| {
        state.metrics.record_upstream_error();
        AppError::UpstreamUnavailable("template publish timed out".to_string())
    })?
    .map_err(|err| {
        state.metrics.record_upstream_error();
        tracing::warn!(show_id, "template publish failed: {err:#}");
        AppError::UpstreamUnavailable("failed to publish metadata template".to_string())
    })?;

    let Some(updated) = state
        .show_repo
        .set_metadata_template_cid(show_id, &cid)
        .await?
    else {
        return Err(AppError::NotFound(format!("show {show_id}")));
    };

    info!(show_id, cid = %cid, "metadata template linked");
    Ok((updated, cid))
}
