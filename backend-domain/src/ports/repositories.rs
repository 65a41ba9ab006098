use async_trait::async_trait;

use crate::entities::{
    Event,
    EventPatch,
    NewEvent,
    NewShow,
    OwnedTicketRow,
    PendingTicket,
    Show,
    ShowFilter,
    ShowForPurchase,
    ShowPatch,
    Ticket,
    TicketSale,
};

/// Transactional access to the shows/tickets inventory.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn begin(&self) -> anyhow::Result<Box<dyn InventoryTx>>;
}

/// One open inventory transaction. Every read takes an exclusive row
/// lock held until commit; dropping the object without calling `commit`
/// rolls back every mutation performed through it.
#[async_trait]
pub trait InventoryTx: Send {
    /// Lock the show row and return it joined with the owning event's
    /// display name and active flag. `None` when the show (or its event)
    /// does not exist.
    async fn lock_show_for_purchase(
        &mut self,
        show_id: i64,
    ) -> anyhow::Result<Option<ShowForPurchase>>;

    async fn lock_ticket(&mut self, ticket_id: i64) -> anyhow::Result<Option<Ticket>>;

    async fn lock_show(&mut self, show_id: i64) -> anyhow::Result<Option<Show>>;

    /// Insert a ticket in pending state (sentinel owner and mint address).
    async fn insert_pending_ticket(&mut self, draft: &PendingTicket) -> anyhow::Result<Ticket>;

    /// Write the sale fields onto a previously locked pending ticket.
    async fn finalize_ticket(
        &mut self,
        ticket_id: i64,
        sale: &TicketSale,
    ) -> anyhow::Result<Ticket>;

    /// Increment the sold counter of a previously locked show.
    async fn increment_tickets_sold(&mut self, show_id: i64) -> anyhow::Result<()>;

    async fn commit(self: Box<Self>) -> anyhow::Result<()>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, event: &NewEvent) -> anyhow::Result<Event>;
    async fn fetch_event(&self, event_id: i64) -> anyhow::Result<Option<Event>>;
    /// Newest first; optionally restricted to active events.
    async fn list_events(&self, only_active: bool) -> anyhow::Result<Vec<Event>>;
    async fn update_event(
        &self,
        event_id: i64,
        patch: &EventPatch,
    ) -> anyhow::Result<Option<Event>>;
    /// Cascades to the event's shows and their tickets.
    async fn delete_event(&self, event_id: i64) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn create_show(&self, show: &NewShow) -> anyhow::Result<Show>;
    async fn fetch_show(&self, show_id: i64) -> anyhow::Result<Option<Show>>;
    /// Ordered by date, then start time.
    async fn list_shows(&self, filter: &ShowFilter) -> anyhow::Result<Vec<Show>>;
    async fn update_show(&self, show_id: i64, patch: &ShowPatch) -> anyhow::Result<Option<Show>>;
    async fn set_metadata_template_cid(
        &self,
        show_id: i64,
        cid: &str,
    ) -> anyhow::Result<Option<Show>>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Finalized tickets owned by the wallet, newest purchase first.
    /// Pending (sentinel-addressed) rows are excluded.
    async fn list_finalized_by_owner(&self, wallet: &str) -> anyhow::Result<Vec<OwnedTicketRow>>;
    async fn has_finalized_ticket(&self, show_id: i64, wallet: &str) -> anyhow::Result<bool>;
}
