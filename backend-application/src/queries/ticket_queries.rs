use backend_domain::{OwnedTicketRow, WalletAddress};

use crate::{AppError, AppState};

/// Finalized tickets owned by a wallet, newest purchase first. Pending
/// rows never appear here: their sentinel addresses are filtered out at
/// the store.
pub async fn list_user_tickets(
    state: &AppState,
    wallet: &str,
) -> Result<Vec<OwnedTicketRow>, AppError> {
    let wallet =
        WalletAddress::parse(wallet).map_err(|err| AppError::InvalidInput(err.to_string()))?;
    let tickets = state
        .ticket_repo
        .list_finalized_by_owner(wallet.as_str())
        .await?;
    Ok(tickets)
}
