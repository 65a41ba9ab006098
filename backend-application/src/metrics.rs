use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    prepare_requests: AtomicU64,
    finalize_requests: AtomicU64,
    tickets_minted: AtomicU64,
    sold_out_rejections: AtomicU64,
    upstream_errors: AtomicU64,
    mint_errors: AtomicU64,
}

impl Metrics {
    pub fn record_prepare_request(&self) {
        self.prepare_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_finalize_request(&self) {
        self.finalize_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ticket_minted(&self) {
        self.tickets_minted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sold_out(&self) {
        self.sold_out_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_error(&self) {
        self.upstream_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_mint_error(&self) {
        self.mint_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let prepares = self.prepare_requests.load(Ordering::Relaxed);
        let finalizes = self.finalize_requests.load(Ordering::Relaxed);
        let minted = self.tickets_minted.load(Ordering::Relaxed);
        let sold_out = self.sold_out_rejections.load(Ordering::Relaxed);
        let upstream = self.upstream_errors.load(Ordering::Relaxed);
        let mint_errors = self.mint_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE stagepass_prepare_requests_total counter\n\
stagepass_prepare_requests_total {}\n\
# TYPE stagepass_finalize_requests_total counter\n\
stagepass_finalize_requests_total {}\n\
# TYPE stagepass_tickets_minted_total counter\n\
stagepass_tickets_minted_total {}\n\
# TYPE stagepass_sold_out_rejections_total counter\n\
stagepass_sold_out_rejections_total {}\n\
# TYPE stagepass_upstream_errors_total counter\n\
stagepass_upstream_errors_total {}\n\
# TYPE stagepass_mint_errors_total counter\n\
stagepass_mint_errors_total {}\n",
            prepares, finalizes, minted, sold_out, upstream, mint_errors
        )
    }
}
