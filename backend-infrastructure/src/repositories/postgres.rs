use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use backend_domain::ports::{
    EventRepository,
    InventoryStore,
    InventoryTx,
    ShowRepository,
    TicketRepository,
};
use backend_domain::{
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
    PENDING_MINT,
    PENDING_OWNER,
};

/// Postgres-backed inventory: the transactional purchase store and the
/// plain event/show/ticket repositories, all over one pool.
pub struct PostgresInventory {
    pool: PgPool,
}

impl PostgresInventory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent schema bootstrap, run once at startup.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                event_id BIGSERIAL PRIMARY KEY,
                event_name TEXT NOT NULL,
                event_description TEXT,
                event_image_url TEXT,
                event_overall_start_date DATE,
                event_overall_end_date DATE,
                event_overall_start_time TIME,
                event_overall_end_time TIME,
                venue_address TEXT,
                default_sol_price NUMERIC(20, 8) NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS shows (
                show_id BIGSERIAL PRIMARY KEY,
                event_id BIGINT NOT NULL REFERENCES events(event_id) ON DELETE CASCADE,
                show_name TEXT,
                show_date DATE NOT NULL,
                show_start_time TIME NOT NULL,
                show_end_time TIME,
                sol_price NUMERIC(20, 8),
                metadata_template_cid TEXT,
                total_tickets INT NOT NULL DEFAULT 0,
                tickets_sold INT NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                ticket_id BIGSERIAL PRIMARY KEY,
                show_id BIGINT NOT NULL REFERENCES shows(show_id) ON DELETE CASCADE,
                owner_wallet_address TEXT NOT NULL,
                nft_mint_address TEXT NOT NULL,
                nft_metadata_url TEXT NOT NULL,
                nft_name TEXT,
                nft_image_url TEXT,
                purchase_price_sol NUMERIC(20, 8),
                purchase_price_idr NUMERIC(15, 2),
                seat_info TEXT,
                is_checked_in BOOLEAN NOT NULL DEFAULT FALSE,
                purchased_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_event ON shows(event_id)")
            .execute(&self.pool)
            .await?;

        // Every pending row shares the mint sentinel; only real mint
        // addresses are globally unique.
        sqlx::query(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_tickets_mint_address \
             ON tickets(nft_mint_address) WHERE nft_mint_address <> '{PENDING_MINT}'"
        ))
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_tickets_owner \
             ON tickets(owner_wallet_address, purchased_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl InventoryStore for PostgresInventory {
    async fn begin(&self) -> Result<Box<dyn InventoryTx>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PostgresInventoryTx { tx }))
    }
}

/// Dropping the wrapped `sqlx::Transaction` without commit rolls back,
/// which is exactly the contract of the port.
struct PostgresInventoryTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl InventoryTx for PostgresInventoryTx {
    async fn lock_show_for_purchase(&mut self, show_id: i64) -> Result<Option<ShowForPurchase>> {
        let row = sqlx::query_as::<_, ShowForPurchase>(
            r#"
            SELECT s.*, e.event_name AS event_name, e.is_active AS event_is_active
            FROM shows s
            JOIN events e ON e.event_id = s.event_id
            WHERE s.show_id = $1
            FOR UPDATE OF s
            "#,
        )
        .bind(show_id)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(row)
    }

    async fn lock_ticket(&mut self, ticket_id: i64) -> Result<Option<Ticket>> {
        let row = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE ticket_id = $1 FOR UPDATE",
        )
        .bind(ticket_id)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(row)
    }

    async fn lock_show(&mut self, show_id: i64) -> Result<Option<Show>> {
        let row = sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE show_id = $1 FOR UPDATE")
            .bind(show_id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row)
    }

    async fn insert_pending_ticket(&mut self, draft: &PendingTicket) -> Result<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets
                (show_id, owner_wallet_address, nft_mint_address,
                 nft_metadata_url, nft_name, nft_image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(draft.show_id)
        .bind(PENDING_OWNER)
        .bind(PENDING_MINT)
        .bind(&draft.nft_metadata_url)
        .bind(&draft.nft_name)
        .bind(&draft.nft_image_url)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(ticket)
    }

    async fn finalize_ticket(&mut self, ticket_id: i64, sale: &TicketSale) -> Result<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET owner_wallet_address = $2,
                nft_mint_address = $3,
                purchase_price_sol = $4,
                purchase_price_idr = $5
            WHERE ticket_id = $1
            RETURNING *
            "#,
        )
        .bind(ticket_id)
        .bind(&sale.owner_wallet_address)
        .bind(&sale.nft_mint_address)
        .bind(sale.purchase_price_sol)
        .bind(sale.purchase_price_idr)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(ticket)
    }

    async fn increment_tickets_sold(&mut self, show_id: i64) -> Result<()> {
        sqlx::query(
            "UPDATE shows SET tickets_sold = tickets_sold + 1, updated_at = now() \
             WHERE show_id = $1",
        )
        .bind(show_id)
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for PostgresInventory {
    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        let created = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events
                (event_name, event_description, event_image_url,
                 event_overall_start_date, event_overall_end_date,
                 event_overall_start_time, event_overall_end_time,
                 venue_address, default_sol_price, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&event.event_name)
        .bind(&event.event_description)
        .bind(&event.event_image_url)
        .bind(event.event_overall_start_date)
        .bind(event.event_overall_end_date)
        .bind(event.event_overall_start_time)
        .bind(event.event_overall_end_time)
        .bind(&event.venue_address)
        .bind(event.default_sol_price.unwrap_or(Decimal::ZERO))
        .bind(event.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn fetch_event(&self, event_id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    async fn list_events(&self, only_active: bool) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE ($1 = FALSE OR is_active) ORDER BY created_at DESC",
        )
        .bind(only_active)
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn update_event(&self, event_id: i64, patch: &EventPatch) -> Result<Option<Event>> {
        let updated = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET event_name = COALESCE($2, event_name),
                event_description = COALESCE($3, event_description),
                event_image_url = COALESCE($4, event_image_url),
                event_overall_start_date = COALESCE($5, event_overall_start_date),
                event_overall_end_date = COALESCE($6, event_overall_end_date),
                event_overall_start_time = COALESCE($7, event_overall_start_time),
                event_overall_end_time = COALESCE($8, event_overall_end_time),
                venue_address = COALESCE($9, venue_address),
                default_sol_price = COALESCE($10, default_sol_price),
                is_active = COALESCE($11, is_active),
                updated_at = now()
            WHERE event_id = $1
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&patch.event_name)
        .bind(&patch.event_description)
        .bind(&patch.event_image_url)
        .bind(patch.event_overall_start_date)
        .bind(patch.event_overall_end_date)
        .bind(patch.event_overall_start_time)
        .bind(patch.event_overall_end_time)
        .bind(&patch.venue_address)
        .bind(patch.default_sol_price)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_event(&self, event_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ShowRepository for PostgresInventory {
    async fn create_show(&self, show: &NewShow) -> Result<Show> {
        let created = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows
                (event_id, show_name, show_date, show_start_time,
                 show_end_time, sol_price, total_tickets, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(show.event_id)
        .bind(&show.show_name)
        .bind(show.show_date)
        .bind(show.show_start_time)
        .bind(show.show_end_time)
        .bind(show.sol_price)
        .bind(show.total_tickets.unwrap_or(0))
        .bind(show.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn fetch_show(&self, show_id: i64) -> Result<Option<Show>> {
        let show = sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE show_id = $1")
            .bind(show_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(show)
    }

    async fn list_shows(&self, filter: &ShowFilter) -> Result<Vec<Show>> {
        let shows = sqlx::query_as::<_, Show>(
            r#"
            SELECT * FROM shows
            WHERE ($1::BIGINT IS NULL OR event_id = $1)
              AND ($2::BOOLEAN IS NULL OR is_active = $2)
            ORDER BY show_date ASC, show_start_time ASC
            "#,
        )
        .bind(filter.event_id)
        .bind(filter.active)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    async fn update_show(&self, show_id: i64, patch: &ShowPatch) -> Result<Option<Show>> {
        let updated = sqlx::query_as::<_, Show>(
            r#"
            UPDATE shows
            SET show_name = COALESCE($2, show_name),
                show_date = COALESCE($3, show_date),
                show_start_time = COALESCE($4, show_start_time),
                show_end_time = COALESCE($5, show_end_time),
                sol_price = COALESCE($6, sol_price),
                total_tickets = COALESCE($7, total_tickets),
                is_active = COALESCE($8, is_active),
                updated_at = now()
            WHERE show_id = $1
            RETURNING *
            "#,
        )
        .bind(show_id)
        .bind(&patch.show_name)
        .bind(patch.show_date)
        .bind(patch.show_start_time)
        .bind(patch.show_end_time)
        .bind(patch.sol_price)
        .bind(patch.total_tickets)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn set_metadata_template_cid(&self, show_id: i64, cid: &str) -> Result<Option<Show>> {
        let updated = sqlx::query_as::<_, Show>(
            "UPDATE shows SET metadata_template_cid = $2, updated_at = now() \
             WHERE show_id = $1 RETURNING *",
        )
        .bind(show_id)
        .bind(cid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }
}

#[async_trait]
impl TicketRepository for PostgresInventory {
    async fn list_finalized_by_owner(&self, wallet: &str) -> Result<Vec<OwnedTicketRow>> {
        let tickets = sqlx::query_as::<_, OwnedTicketRow>(
            r#"
            SELECT t.ticket_id, t.nft_mint_address, t.nft_name, t.nft_image_url,
                   t.purchased_at, e.event_name, s.show_name, s.show_date,
                   s.show_start_time
            FROM tickets t
            JOIN shows s ON s.show_id = t.show_id
            JOIN events e ON e.event_id = s.event_id
            WHERE t.owner_wallet_address = $1
              AND t.nft_mint_address <> $2
            ORDER BY t.purchased_at DESC
            "#,
        )
        .bind(wallet)
        .bind(PENDING_MINT)
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    async fn has_finalized_ticket(&self, show_id: i64, wallet: &str) -> Result<bool> {
        let owned: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM tickets \
             WHERE show_id = $1 AND owner_wallet_address = $2 AND nft_mint_address <> $3)",
        )
        .bind(show_id)
        .bind(wallet)
        .bind(PENDING_MINT)
        .fetch_one(&self.pool)
        .await?;
        Ok(owned)
    }
}
