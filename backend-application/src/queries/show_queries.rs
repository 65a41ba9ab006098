use backend_domain::{Show, ShowFilter, WalletAddress};

use crate::dtos::{ShowListQuery, ShowView};
use crate::{AppError, AppState};

pub async fn list_shows(
    state: &AppState,
    query: ShowListQuery,
) -> Result<Vec<ShowView>, AppError> {
    let wallet = match &query.wallet {
        Some(raw) => Some(
            WalletAddress::parse(raw).map_err(|err| AppError::InvalidInput(err.to_string()))?,
        ),
        None => None,
    };

    let shows = state
        .show_repo
        .list_shows(&ShowFilter {
            event_id: query.event_id,
            active: query.active,
        })
        .await?;

    let mut views = Vec::with_capacity(shows.len());
    for show in shows {
        views.push(view_for(state, show, wallet.as_ref()).await?);
    }
    Ok(views)
}

pub async fn get_show(state: &AppState, show_id: i64) -> Result<ShowView, AppError> {
    if show_id <= 0 {
        return Err(AppError::InvalidInput("invalid show id".to_string()));
    }
    let Some(show) = state.show_repo.fetch_show(show_id).await? else {
        return Err(AppError::NotFound(format!("show {show_id}")));
    };
    view_for(state, show, None).await
}

async fn view_for(
    state: &AppState,
    show: Show,
    wallet: Option<&WalletAddress>,
) -> Result<ShowView, AppError> {
    let idr_price = match show.sol_price {
        Some(price) => state.rate_service.sol_to_idr(price).await,
        None => None,
    };
    let is_owned = match wallet {
        Some(wallet) => Some(
            state
                .ticket_repo
                .has_finalized_ticket(show.show_id, wallet.as_str())
                .await?,
        ),
        None => None,
    };
    Ok(ShowView {
        show,
        idr_price,
        is_owned,
    })
}
