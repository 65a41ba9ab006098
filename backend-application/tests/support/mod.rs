// In-memory fakes of the domain ports, shared by the workflow test
// binaries.
//
// The fake store keeps the whole database behind one async mutex that is
// acquired at `begin` and held until commit or drop. That serializes
// transactions the same way row locks serialize them in Postgres, and
// staging writes in the transaction makes rollback-on-drop observable.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, OwnedMutexGuard};

use backend_application::{AppState, Metrics};
use backend_domain::ports::{
    EventRepository,
    ExchangeRateService,
    InventoryStore,
    InventoryTx,
    MetadataStore,
    MintRequest,
    MintService,
    MintedAsset,
    ShowRepository,
    TicketRepository,
};
use backend_domain::{
    Event,
    EventPatch,
    MetadataTemplate,
    NewEvent,
    NewShow,
    OwnedTicketRow,
    PendingTicket,
    RuntimeConfig,
    Show,
    ShowFilter,
    ShowForPurchase,
    ShowPatch,
    Ticket,
    TicketMetadata,
    TicketSale,
    PENDING_MINT,
    PENDING_OWNER,
};

#[derive(Debug, Default, Clone)]
pub struct InventoryData {
    pub events: HashMap<i64, Event>,
    pub shows: HashMap<i64, Show>,
    pub tickets: HashMap<i64, Ticket>,
    pub next_event_id: i64,
    pub next_show_id: i64,
    pub next_ticket_id: i64,
}

pub struct FakeInventory {
    data: Arc<Mutex<InventoryData>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(InventoryData::default())),
        }
    }

    pub async fn insert_event(&self, name: &str, active: bool) -> i64 {
        let mut data = self.data.lock().await;
        data.next_event_id += 1;
        let event_id = data.next_event_id;
        data.events.insert(
            event_id,
            Event {
                event_id,
                event_name: name.to_string(),
                event_description: None,
                event_image_url: None,
                event_overall_start_date: None,
                event_overall_end_date: None,
                event_overall_start_time: None,
                event_overall_end_time: None,
                venue_address: None,
                default_sol_price: Decimal::ZERO,
                is_active: active,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        event_id
    }

    pub async fn insert_show(&self, seed: ShowSeed) -> i64 {
        let mut data = self.data.lock().await;
        data.next_show_id += 1;
        let show_id = data.next_show_id;
        data.shows.insert(
            show_id,
            Show {
                show_id,
                event_id: seed.event_id,
                show_name: seed.name,
                show_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                show_start_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
                show_end_time: None,
                sol_price: seed.sol_price,
                metadata_template_cid: seed.template_cid,
                total_tickets: seed.total,
                tickets_sold: seed.sold,
                is_active: seed.active,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        show_id
    }

    pub async fn insert_finalized_ticket(
        &self,
        show_id: i64,
        owner: &str,
        mint_address: &str,
        purchased_at: DateTime<Utc>,
    ) -> i64 {
        let mut data = self.data.lock().await;
        data.next_ticket_id += 1;
        let ticket_id = data.next_ticket_id;
        data.tickets.insert(
            ticket_id,
            Ticket {
                ticket_id,
                show_id,
                owner_wallet_address: owner.to_string(),
                nft_mint_address: mint_address.to_string(),
                nft_metadata_url: format!("ipfs://seed-{ticket_id}"),
                nft_name: Some(format!("Seed Ticket {ticket_id}")),
                nft_image_url: None,
                purchase_price_sol: None,
                purchase_price_idr: None,
                seat_info: None,
                is_checked_in: false,
                purchased_at,
            },
        );
        ticket_id
    }

    pub async fn ticket(&self, ticket_id: i64) -> Option<Ticket> {
        self.data.lock().await.tickets.get(&ticket_id).cloned()
    }

    pub async fn show(&self, show_id: i64) -> Option<Show> {
        self.data.lock().await.shows.get(&show_id).cloned()
    }

    pub async fn ticket_count(&self) -> usize {
        self.data.lock().await.tickets.len()
    }
}

#[derive(Debug, Clone)]
pub struct ShowSeed {
    pub event_id: i64,
    pub name: Option<String>,
    pub total: i32,
    pub sold: i32,
    pub active: bool,
    pub template_cid: Option<String>,
    pub sol_price: Option<Decimal>,
}

impl ShowSeed {
    pub fn new(event_id: i64, total: i32) -> Self {
        Self {
            event_id,
            name: Some("Gala Night".to_string()),
            total,
            sold: 0,
            active: true,
            template_cid: Some(TEMPLATE_CID.to_string()),
            sol_price: Some(Decimal::new(15, 1)),
        }
    }
}

pub const TEMPLATE_CID: &str = "QmTemplateSeed";

#[async_trait]
impl InventoryStore for FakeInventory {
    async fn begin(&self) -> anyhow::Result<Box<dyn InventoryTx>> {
        let guard = self.data.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(FakeTx { guard, staged }))
    }
}

struct FakeTx {
    guard: OwnedMutexGuard<InventoryData>,
    staged: InventoryData,
}

#[async_trait]
impl InventoryTx for FakeTx {
    async fn lock_show_for_purchase(
        &mut self,
        show_id: i64,
    ) -> anyhow::Result<Option<ShowForPurchase>> {
        let Some(show) = self.staged.shows.get(&show_id) else {
            return Ok(None);
        };
        let Some(event) = self.staged.events.get(&show.event_id) else {
            return Ok(None);
        };
        Ok(Some(ShowForPurchase {
            show: show.clone(),
            event_name: event.event_name.clone(),
            event_is_active: event.is_active,
        }))
    }

    async fn lock_ticket(&mut self, ticket_id: i64) -> anyhow::Result<Option<Ticket>> {
        Ok(self.staged.tickets.get(&ticket_id).cloned())
    }

    async fn lock_show(&mut self, show_id: i64) -> anyhow::Result<Option<Show>> {
        Ok(self.staged.shows.get(&show_id).cloned())
    }

    async fn insert_pending_ticket(&mut self, draft: &PendingTicket) -> anyhow::Result<Ticket> {
        self.staged.next_ticket_id += 1;
        let ticket = Ticket {
            ticket_id: self.staged.next_ticket_id,
            show_id: draft.show_id,
            owner_wallet_address: PENDING_OWNER.to_string(),
            nft_mint_address: PENDING_MINT.to_string(),
            nft_metadata_url: draft.nft_metadata_url.clone(),
            nft_name: draft.nft_name.clone(),
            nft_image_url: draft.nft_image_url.clone(),
            purchase_price_sol: None,
            purchase_price_idr: None,
            seat_info: None,
            is_checked_in: false,
            purchased_at: Utc::now(),
        };
        self.staged.tickets.insert(ticket.ticket_id, ticket.clone());
        Ok(ticket)
    }

    async fn finalize_ticket(
        &mut self,
        ticket_id: i64,
        sale: &TicketSale,
    ) -> anyhow::Result<Ticket> {
        let ticket = self
            .staged
            .tickets
            .get_mut(&ticket_id)
            .ok_or_else(|| anyhow!("ticket {ticket_id} vanished mid-transaction"))?;
        ticket.owner_wallet_address = sale.owner_wallet_address.clone();
        ticket.nft_mint_address = sale.nft_mint_address.clone();
        ticket.purchase_price_sol = sale.purchase_price_sol;
        ticket.purchase_price_idr = sale.purchase_price_idr;
        Ok(ticket.clone())
    }

    async fn increment_tickets_sold(&mut self, show_id: i64) -> anyhow::Result<()> {
        let show = self
            .staged
            .shows
            .get_mut(&show_id)
            .ok_or_else(|| anyhow!("show {show_id} vanished mid-transaction"))?;
        show.tickets_sold += 1;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> anyhow::Result<()> {
        let FakeTx { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for FakeInventory {
    async fn create_event(&self, event: &NewEvent) -> anyhow::Result<Event> {
        let mut data = self.data.lock().await;
        data.next_event_id += 1;
        let event_id = data.next_event_id;
        let created = Event {
            event_id,
            event_name: event.event_name.clone(),
            event_description: event.event_description.clone(),
            event_image_url: event.event_image_url.clone(),
            event_overall_start_date: event.event_overall_start_date,
            event_overall_end_date: event.event_overall_end_date,
            event_overall_start_time: event.event_overall_start_time,
            event_overall_end_time: event.event_overall_end_time,
            venue_address: event.venue_address.clone(),
            default_sol_price: event.default_sol_price.unwrap_or(Decimal::ZERO),
            is_active: event.is_active.unwrap_or(true),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        data.events.insert(event_id, created.clone());
        Ok(created)
    }

    async fn fetch_event(&self, event_id: i64) -> anyhow::Result<Option<Event>> {
        Ok(self.data.lock().await.events.get(&event_id).cloned())
    }

    async fn list_events(&self, only_active: bool) -> anyhow::Result<Vec<Event>> {
        let data = self.data.lock().await;
        let mut events: Vec<Event> = data
            .events
            .values()
            .filter(|event| !only_active || event.is_active)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn update_event(
        &self,
        event_id: i64,
        patch: &EventPatch,
    ) -> anyhow::Result<Option<Event>> {
        let mut data = self.data.lock().await;
        let Some(event) = data.events.get_mut(&event_id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.event_name {
            event.event_name = name.clone();
        }
        if let Some(description) = &patch.event_description {
            event.event_description = Some(description.clone());
        }
        if let Some(price) = patch.default_sol_price {
            event.default_sol_price = price;
        }
        if let Some(active) = patch.is_active {
            event.is_active = active;
        }
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, event_id: i64) -> anyhow::Result<bool> {
        let mut data = self.data.lock().await;
        if data.events.remove(&event_id).is_none() {
            return Ok(false);
        }
        let show_ids: Vec<i64> = data
            .shows
            .values()
            .filter(|show| show.event_id == event_id)
            .map(|show| show.show_id)
            .collect();
        for show_id in show_ids {
            data.shows.remove(&show_id);
            data.tickets.retain(|_, ticket| ticket.show_id != show_id);
        }
        Ok(true)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ShowRepository for FakeInventory {
    async fn create_show(&self, show: &NewShow) -> anyhow::Result<Show> {
        let mut data = self.data.lock().await;
        data.next_show_id += 1;
        let show_id = data.next_show_id;
        let created = Show {
            show_id,
            event_id: show.event_id,
            show_name: show.show_name.clone(),
            show_date: show.show_date,
            show_start_time: show.show_start_time,
            show_end_time: show.show_end_time,
            sol_price: show.sol_price,
            metadata_template_cid: None,
            total_tickets: show.total_tickets.unwrap_or(0),
            tickets_sold: 0,
            is_active: show.is_active.unwrap_or(true),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        data.shows.insert(show_id, created.clone());
        Ok(created)
    }

    async fn fetch_show(&self, show_id: i64) -> anyhow::Result<Option<Show>> {
        Ok(self.data.lock().await.shows.get(&show_id).cloned())
    }

    async fn list_shows(&self, filter: &ShowFilter) -> anyhow::Result<Vec<Show>> {
        let data = self.data.lock().await;
        let mut shows: Vec<Show> = data
            .shows
            .values()
            .filter(|show| {
                filter.event_id.is_none_or(|id| show.event_id == id)
                    && filter.active.is_none_or(|active| show.is_active == active)
            })
            .cloned()
            .collect();
        shows.sort_by(|a, b| {
            (a.show_date, a.show_start_time).cmp(&(b.show_date, b.show_start_time))
        });
        Ok(shows)
    }

    async fn update_show(&self, show_id: i64, patch: &ShowPatch) -> anyhow::Result<Option<Show>> {
        let mut data = self.data.lock().await;
        let Some(show) = data.shows.get_mut(&show_id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.show_name {
            show.show_name = Some(name.clone());
        }
        if let Some(total) = patch.total_tickets {
            show.total_tickets = total;
        }
        if let Some(price) = patch.sol_price {
            show.sol_price = Some(price);
        }
        if let Some(active) = patch.is_active {
            show.is_active = active;
        }
        show.updated_at = Utc::now();
        Ok(Some(show.clone()))
    }

    async fn set_metadata_template_cid(
        &self,
        show_id: i64,
        cid: &str,
    ) -> anyhow::Result<Option<Show>> {
        let mut data = self.data.lock().await;
        let Some(show) = data.shows.get_mut(&show_id) else {
            return Ok(None);
        };
        show.metadata_template_cid = Some(cid.to_string());
        show.updated_at = Utc::now();
        Ok(Some(show.clone()))
    }
}

#[async_trait]
impl TicketRepository for FakeInventory {
    async fn list_finalized_by_owner(&self, wallet: &str) -> anyhow::Result<Vec<OwnedTicketRow>> {
        let data = self.data.lock().await;
        let mut rows: Vec<OwnedTicketRow> = data
            .tickets
            .values()
            .filter(|ticket| {
                ticket.owner_wallet_address == wallet && ticket.nft_mint_address != PENDING_MINT
            })
            .filter_map(|ticket| {
                let show = data.shows.get(&ticket.show_id)?;
                let event = data.events.get(&show.event_id)?;
                Some(OwnedTicketRow {
                    ticket_id: ticket.ticket_id,
                    nft_mint_address: ticket.nft_mint_address.clone(),
                    nft_name: ticket.nft_name.clone(),
                    nft_image_url: ticket.nft_image_url.clone(),
                    purchased_at: ticket.purchased_at,
                    event_name: event.event_name.clone(),
                    show_name: show.show_name.clone(),
                    show_date: show.show_date,
                    show_start_time: show.show_start_time,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.purchased_at.cmp(&a.purchased_at));
        Ok(rows)
    }

    async fn has_finalized_ticket(&self, show_id: i64, wallet: &str) -> anyhow::Result<bool> {
        let data = self.data.lock().await;
        Ok(data.tickets.values().any(|ticket| {
            ticket.show_id == show_id
                && ticket.owner_wallet_address == wallet
                && ticket.nft_mint_address != PENDING_MINT
        }))
    }
}

pub struct FakeMetadataStore {
    templates: std::sync::Mutex<HashMap<String, MetadataTemplate>>,
    documents: std::sync::Mutex<HashMap<String, TicketMetadata>>,
    counter: AtomicUsize,
    fail_publish: AtomicBool,
}

impl FakeMetadataStore {
    pub fn new() -> Self {
        Self {
            templates: std::sync::Mutex::new(HashMap::new()),
            documents: std::sync::Mutex::new(HashMap::new()),
            counter: AtomicUsize::new(0),
            fail_publish: AtomicBool::new(false),
        }
    }

    pub fn add_template(&self, cid: &str, template: MetadataTemplate) {
        self.templates
            .lock()
            .unwrap()
            .insert(cid.to_string(), template);
    }

    pub fn set_fail_publish(&self, fail: bool) {
        self.fail_publish.store(fail, Ordering::SeqCst);
    }

    pub fn document(&self, cid: &str) -> Option<TicketMetadata> {
        self.documents.lock().unwrap().get(cid).cloned()
    }
}

#[async_trait]
impl MetadataStore for FakeMetadataStore {
    async fn publish_json(
        &self,
        document: &TicketMetadata,
        _name_hint: &str,
    ) -> anyhow::Result<String> {
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(anyhow!("pinning service unavailable"));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let cid = format!("QmFakeCid{n:04}");
        self.documents
            .lock()
            .unwrap()
            .insert(cid.clone(), document.clone());
        Ok(cid)
    }

    async fn fetch_template(&self, cid: &str) -> anyhow::Result<MetadataTemplate> {
        self.templates
            .lock()
            .unwrap()
            .get(cid)
            .cloned()
            .ok_or_else(|| anyhow!("unknown cid {cid}"))
    }
}

pub struct FakeMintService {
    counter: AtomicI64,
    fail: AtomicBool,
}

impl FakeMintService {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(0),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn mint_count(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MintService for FakeMintService {
    async fn mint(&self, request: &MintRequest) -> anyhow::Result<MintedAsset> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("rpc node unavailable"));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MintedAsset {
            mint_address: format!("FakeMint111111111111111111111111111{n:06}"),
            name: request.name.clone(),
        })
    }
}

pub struct FixedRateService(pub Option<Decimal>);

#[async_trait]
impl ExchangeRateService for FixedRateService {
    async fn sol_to_idr(&self, amount: Decimal) -> Option<Decimal> {
        self.0.map(|rate| (amount * rate).round_dp(2))
    }
}

pub struct TestHarness {
    pub state: AppState,
    pub inventory: Arc<FakeInventory>,
    pub metadata: Arc<FakeMetadataStore>,
    pub mint: Arc<FakeMintService>,
}

pub fn harness() -> TestHarness {
    let inventory = Arc::new(FakeInventory::new());
    let metadata = Arc::new(FakeMetadataStore::new());
    let mint = Arc::new(FakeMintService::new());
    metadata.add_template(
        TEMPLATE_CID,
        MetadataTemplate {
            name: Some("Gala Night Pass".to_string()),
            description: Some("Front row access".to_string()),
            image: None,
            attributes: Vec::new(),
        },
    );

    let state = AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:3001".to_string(),
            nft_image_base_url: "https://assets.test/nfts".to_string(),
            nft_image_pool_size: 3,
            nft_fallback_name: "StagePass Ticket".to_string(),
            upstream_timeout_seconds: 2,
            request_timeout_seconds: 15,
            max_body_bytes: 1024 * 1024,
        },
        inventory: inventory.clone(),
        event_repo: inventory.clone(),
        show_repo: inventory.clone(),
        ticket_repo: inventory.clone(),
        metadata_store: metadata.clone(),
        mint_service: mint.clone(),
        rate_service: Arc::new(FixedRateService(Some(Decimal::new(2_500_000, 0)))),
        metrics: Arc::new(Metrics::default()),
    };

    TestHarness {
        state,
        inventory,
        metadata,
        mint,
    }
}

/// Distinct, plausibly base58 wallet addresses for tests.
pub fn wallet(index: usize) -> String {
    let digits = [
        '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    ];
    let digit = digits[index % digits.len()];
    format!("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus{digit}{digit}")
}
