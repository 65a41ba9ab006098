use axum::extract::{Path, State};
use axum::Json;

use backend_application::commands::purchase_commands;
use backend_application::dtos::{
    FinalizeTicketRequest,
    FinalizeTicketResponse,
    PrepareTicketRequest,
    PrepareTicketResponse,
};
use backend_application::queries::ticket_queries;
use backend_application::AppState;
use backend_domain::OwnedTicketRow;

use crate::error::HttpError;

pub async fn prepare_ticket(
    State(state): State<AppState>,
    Json(payload): Json<PrepareTicketRequest>,
) -> Result<Json<PrepareTicketResponse>, HttpError> {
    let response = purchase_commands::prepare_ticket(&state, payload).await?;
    Ok(Json(response))
}

pub async fn finalize_ticket(
    State(state): State<AppState>,
    Json(payload): Json<FinalizeTicketRequest>,
) -> Result<Json<FinalizeTicketResponse>, HttpError> {
    let ticket = purchase_commands::finalize_ticket(&state, payload).await?;
    Ok(Json(FinalizeTicketResponse {
        message: "ticket purchase finalized and NFT minted".to_string(),
        ticket,
    }))
}

pub async fn list_user_tickets(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<Vec<OwnedTicketRow>>, HttpError> {
    let tickets = ticket_queries::list_user_tickets(&state, &wallet).await?;
    Ok(Json(tickets))
}
