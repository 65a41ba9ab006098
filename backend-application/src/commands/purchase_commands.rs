// The two-phase ticket purchase workflow.
//
// `prepare` locks the show row, validates inventory and state, publishes
// the per-ticket metadata document and inserts a pending ticket, all in
// one transaction. `finalize` locks the ticket and its show, mints the
// on-chain asset, records the sale and claims capacity in a second
// transaction. Capacity is only ever claimed at finalize, under the same
// lock that re-checks it.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::timeout;
use tracing::{error, info, warn};

use backend_domain::services::{compose_ticket_metadata, unique_ticket_suffix};
use backend_domain::{
    MintRequest,
    PendingTicket,
    RuntimeConfig,
    Ticket,
    TicketSale,
    WalletAddress,
};

use crate::dtos::{FinalizeTicketRequest, PrepareTicketRequest, PrepareTicketResponse};
use crate::{AppError, AppState};

pub async fn prepare_ticket(
    state: &AppState,
    request: PrepareTicketRequest,
) -> Result<PrepareTicketResponse, AppError> {
    state.metrics.record_prepare_request();
    if request.show_id <= 0 {
        return Err(AppError::InvalidInput("show_id is required".to_string()));
    }

    // Every early return below drops the transaction, which rolls back
    // the row lock and anything staged in it.
    let mut tx = state.inventory.begin().await?;

    let Some(purchase) = tx.lock_show_for_purchase(request.show_id).await? else {
        return Err(AppError::NotFound(format!("show {}", request.show_id)));
    };
    let show = &purchase.show;

    if !show.is_active || !purchase.event_is_active {
        return Err(AppError::InvalidState(
            "show or event is not active".to_string(),
        ));
    }
    if !show.has_capacity() {
        state.metrics.record_sold_out();
        return Err(AppError::SoldOut(format!("show {}", show.show_id)));
    }
    let Some(template_cid) = show.metadata_template_cid.clone() else {
        return Err(AppError::Misconfigured(format!(
            "show {} has no metadata template",
            show.show_id
        )));
    };

    let template = with_upstream_timeout(
        &state.config,
        state.metadata_store.fetch_template(&template_cid),
    )
    .await
    .map_err(|err| {
        state.metrics.record_upstream_error();
        warn!(cid = %template_cid, "metadata template fetch failed: {err:#}");
        AppError::UpstreamUnavailable("failed to fetch metadata template".to_string())
    })?;

    let serial = show.tickets_sold + 1;
    let issued_at = chrono::Utc::now().timestamp_millis();
    let image_url = pick_nft_image(&state.config);
    let document = compose_ticket_metadata(
        &template,
        show,
        &purchase.event_name,
        serial,
        issued_at,
        image_url.clone(),
    );

    let suffix = unique_ticket_suffix(show.show_id, serial, issued_at);
    let pin_name = format!("TicketMetadata-{suffix}.json");
    let metadata_cid = with_upstream_timeout(
        &state.config,
        state.metadata_store.publish_json(&document, &pin_name),
    )
    .await
    .map_err(|err| {
        state.metrics.record_upstream_error();
        warn!(show_id = show.show_id, "ticket metadata publish failed: {err:#}");
        AppError::UpstreamUnavailable("failed to publish ticket metadata".to_string())
    })?;

    let ticket = tx
        .insert_pending_ticket(&PendingTicket {
            show_id: show.show_id,
            nft_metadata_url: format!("ipfs://{metadata_cid}"),
            nft_name: Some(document.name.clone()),
            nft_image_url: Some(document.image.clone()),
        })
        .await?;

    let show_id = show.show_id;
    let sol_price = show.sol_price;
    tx.commit().await?;

    info!(
        ticket_id = ticket.ticket_id,
        show_id,
        cid = %metadata_cid,
        "pending ticket prepared"
    );

    let idr_price = match sol_price {
        Some(price) => state.rate_service.sol_to_idr(price).await,
        None => None,
    };

    Ok(PrepareTicketResponse {
        message: "ticket prepared for purchase, proceed to payment and finalize".to_string(),
        ticket_id: ticket.ticket_id,
        metadata_ipfs_cid: metadata_cid,
        nft_image_url: image_url,
        sol_price,
        idr_price,
    })
}

pub async fn finalize_ticket(
    state: &AppState,
    request: FinalizeTicketRequest,
) -> Result<Ticket, AppError> {
    state.metrics.record_finalize_request();
    if request.ticket_id <= 0 {
        return Err(AppError::InvalidInput("ticket_id is required".to_string()));
    }
    let wallet = WalletAddress::parse(&request.user_wallet_address)
        .map_err(|err| AppError::InvalidInput(err.to_string()))?;

    let mut tx = state.inventory.begin().await?;

    let Some(ticket) = tx.lock_ticket(request.ticket_id).await? else {
        return Err(AppError::NotFound(format!("ticket {}", request.ticket_id)));
    };
    // Replay guard: a finalized ticket never transitions again.
    if !ticket.is_pending() {
        return Err(AppError::AlreadyFinalized);
    }
    let Some(show) = tx.lock_show(ticket.show_id).await? else {
        return Err(AppError::Inconsistent(format!(
            "show {} missing for ticket {}",
            ticket.show_id, ticket.ticket_id
        )));
    };

    let mint_request = MintRequest {
        metadata_url: ticket.nft_metadata_url.clone(),
        name: show
            .show_name
            .clone()
            .unwrap_or_else(|| state.config.nft_fallback_name.clone()),
        recipient: wallet.clone(),
    };
    let minted = with_upstream_timeout(&state.config, state.mint_service.mint(&mint_request))
        .await
        .map_err(|err| {
            state.metrics.record_mint_error();
            error!(ticket_id = ticket.ticket_id, "mint failed: {err:#}");
            AppError::MintFailed("failed to mint ticket asset".to_string())
        })?;

    let idr_price = match show.sol_price {
        Some(price) => state.rate_service.sol_to_idr(price).await,
        None => None,
    };
    let sale = TicketSale {
        owner_wallet_address: wallet.as_str().to_string(),
        nft_mint_address: minted.mint_address.clone(),
        purchase_price_sol: show.sol_price,
        purchase_price_idr: idr_price,
    };
    let finalized = tx.finalize_ticket(ticket.ticket_id, &sale).await?;

    // The capacity check from prepare may have gone stale: prepare holds
    // no capacity, so the locked re-check here is the sole enforcement
    // point against oversell.
    if !show.has_capacity() {
        state.metrics.record_sold_out();
        error!(
            ticket_id = ticket.ticket_id,
            show_id = show.show_id,
            mint_address = %minted.mint_address,
            "capacity exhausted after mint, rolling back sale; minted asset is orphaned"
        );
        return Err(AppError::SoldOut(format!(
            "show {} (race during finalize)",
            show.show_id
        )));
    }
    tx.increment_tickets_sold(show.show_id).await?;
    tx.commit().await?;

    state.metrics.record_ticket_minted();
    info!(
        ticket_id = finalized.ticket_id,
        show_id = show.show_id,
        mint_address = %minted.mint_address,
        owner = %wallet,
        "ticket purchase finalized"
    );
    Ok(finalized)
}

/// Bound a collaborator call so a hung upstream cannot pin the row locks
/// of the surrounding transaction.
async fn with_upstream_timeout<T>(
    config: &RuntimeConfig,
    call: impl Future<Output = anyhow::Result<T>>,
) -> anyhow::Result<T> {
    let limit = Duration::from_secs(config.upstream_timeout_seconds);
    match timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "upstream call timed out after {}s",
            config.upstream_timeout_seconds
        )),
    }
}

fn pick_nft_image(config: &RuntimeConfig) -> String {
    let pool = config.nft_image_pool_size.max(1);
    let index = rand::thread_rng().gen_range(1..=pool);
    format!(
        "{}/{}.png",
        config.nft_image_base_url.trim_end_matches('/'),
        index
    )
}
