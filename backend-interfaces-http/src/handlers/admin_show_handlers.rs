use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::show_commands;
use backend_application::dtos::{
    MetadataTemplateInput,
    MetadataTemplateResponse,
    ShowListQuery,
    ShowView,
};
use backend_application::queries::show_queries;
use backend_application::AppState;
use backend_domain::{NewShow, Show, ShowPatch};

use crate::error::HttpError;

pub async fn create_show(
    State(state): State<AppState>,
    Json(payload): Json<NewShow>,
) -> Result<(StatusCode, Json<Show>), HttpError> {
    let show = show_commands::create_show(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

pub async fn list_shows(
    State(state): State<AppState>,
    Query(query): Query<ShowListQuery>,
) -> Result<Json<Vec<ShowView>>, HttpError> {
    let shows = show_queries::list_shows(&state, query).await?;
    Ok(Json(shows))
}

pub async fn get_show(
    State(state): State<AppState>,
    Path(show_id): Path<i64>,
) -> Result<Json<ShowView>, HttpError> {
    let show = show_queries::get_show(&state, show_id).await?;
    Ok(Json(show))
}

pub async fn update_show(
    State(state): State<AppState>,
    Path(show_id): Path<i64>,
    Json(patch): Json<ShowPatch>,
) -> Result<Json<Show>, HttpError> {
    let show = show_commands::update_show(&state, show_id, patch).await?;
    Ok(Json(show))
}

pub async fn setup_metadata_template(
    State(state): State<AppState>,
    Path(show_id): Path<i64>,
    Json(payload): Json<MetadataTemplateInput>,
) -> Result<Json<MetadataTemplateResponse>, HttpError> {
    let (show, cid) = show_commands::set_metadata_template(&state, show_id, payload).await?;
    Ok(Json(MetadataTemplateResponse {
        message: "show metadata template uploaded and linked".to_string(),
        show_id: show.show_id,
        metadata_template_cid: cid,
        updated_show: show,
    }))
}
