use std::rc::Rc;

use futures::future::join_all;

use crate::application::store::StateStore;
use crate::domain::{
    activity::{ActivityCategory, ActivityEntry},
    errors::{FetchError, FetchResult, ValidationError},
    logging::{LogComponent, get_time_provider},
    market_data::{DashboardRepository, Symbol, Timestamp},
};
use crate::{log_debug, log_info, log_warn};

/// Which categories of one overview cycle were applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewRefresh {
    pub status: bool,
    pub transactions: bool,
    pub logs: bool,
    pub snapshot: bool,
}

impl OverviewRefresh {
    pub fn any(&self) -> bool {
        self.status || self.transactions || self.logs || self.snapshot
    }
}

fn now() -> (Timestamp, String) {
    let clock = get_time_provider();
    let ts = clock.current_timestamp();
    (Timestamp::from_millis(ts), clock.format_timestamp(ts))
}

fn report(category: &str, error: &FetchError) {
    log_warn!(LogComponent::Application("DashboardService"), "{} fetch failed, keeping last value: {}", category, error);
}

/// Fetch, apply and log for one dashboard. Every refresh leaves the previous
/// value untouched when its fetch fails; errors are logged and handed back so
/// callers may ignore them.
pub struct DashboardService<R, S> {
    repository: Rc<R>,
    store: S,
}

impl<R, S: Clone> Clone for DashboardService<R, S> {
    fn clone(&self) -> Self {
        Self { repository: Rc::clone(&self.repository), store: self.store.clone() }
    }
}

impl<R, S> DashboardService<R, S>
where
    R: DashboardRepository + 'static,
    S: StateStore,
{
    pub fn new(repository: R, store: S) -> Self {
        Self { repository: Rc::new(repository), store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn announce_ready(&self) {
        let (_, clock) = now();
        self.store.update(|s| {
            s.mark_online();
            s.push_activity(ActivityEntry::new(clock, ActivityCategory::Other, "System initialized. Dashboard ready."));
        });
    }

    /// Poll one watchlist symbol. `Ok(true)` when a tick was applied.
    pub async fn refresh_quote(&self, symbol: &Symbol) -> FetchResult<bool> {
        let tick = match self.repository.fetch_quote(symbol).await {
            Ok(Some(tick)) => tick,
            Ok(None) => {
                log_debug!(LogComponent::Application("DashboardService"), "Quote for {} had no data", symbol);
                return Ok(false);
            }
            Err(e) => {
                report(&format!("Quote {}", symbol), &e);
                return Err(e);
            }
        };

        let (at, clock) = now();
        let applied = self.store.update(|s| {
            if s.apply_quote(&tick, at) {
                s.push_activity(ActivityEntry::new(
                    clock,
                    ActivityCategory::Other,
                    format!("⚡ [Tick] {}: {}", tick.symbol, tick.close_price.value()),
                ));
            }
        });
        Ok(applied.is_some())
    }

    /// One tick of the quote poll: every tracked symbol, concurrently. A
    /// failing symbol does not hold back the others. Returns how many applied.
    pub async fn refresh_quotes(&self) -> usize {
        let symbols = self.store.read(|s| s.watchlist.symbols()).unwrap_or_default();
        let results = join_all(symbols.iter().map(|symbol| self.refresh_quote(symbol))).await;
        results.into_iter().filter(|r| matches!(r, Ok(true))).count()
    }

    pub async fn refresh_status(&self) -> FetchResult<()> {
        let status = self.repository.fetch_status().await.inspect_err(|e| report("Status", e))?;
        self.store.update(|s| s.apply_status(status));
        Ok(())
    }

    pub async fn refresh_transactions(&self) -> FetchResult<()> {
        let transactions = self.repository.fetch_transactions().await.inspect_err(|e| report("Transactions", e))?;
        self.store.update(|s| s.replace_transactions(transactions));
        Ok(())
    }

    pub async fn refresh_logs(&self) -> FetchResult<()> {
        let entries = self.repository.fetch_logs().await.inspect_err(|e| report("Logs", e))?;
        self.store.update(|s| s.replace_backend_logs(entries));
        Ok(())
    }

    pub async fn refresh_snapshot(&self) -> FetchResult<()> {
        let quotes = self.repository.fetch_snapshot().await.inspect_err(|e| report("Snapshot", e))?;
        let (at, _) = now();
        self.store.update(|s| s.apply_snapshot(quotes, at));
        Ok(())
    }

    /// One overview cycle: four independent fetches in flight together.
    pub async fn refresh_overview(&self) -> OverviewRefresh {
        let (status, transactions, logs, snapshot) = futures::join!(
            self.refresh_status(),
            self.refresh_transactions(),
            self.refresh_logs(),
            self.refresh_snapshot(),
        );
        let outcome = OverviewRefresh {
            status: status.is_ok(),
            transactions: transactions.is_ok(),
            logs: logs.is_ok(),
            snapshot: snapshot.is_ok(),
        };
        if outcome.any() {
            let (at, _) = now();
            self.store.update(|s| s.touch(at));
        }
        outcome
    }

    /// Look up `query`. A blank query is ignored (`Ok(false)`); on failure the
    /// modal keeps whatever it showed before.
    pub async fn search(&self, query: &str) -> FetchResult<bool> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(false);
        }

        self.store.update(|s| s.begin_search());
        log_info!(LogComponent::Application("DashboardService"), "🔍 Searching {}", query);
        match self.repository.search(query).await {
            Ok(result) => {
                self.store.update(|s| s.finish_search(Some(result)));
                Ok(true)
            }
            Err(e) => {
                report("Search", &e);
                self.store.update(|s| s.finish_search(None));
                Err(e)
            }
        }
    }

    pub fn clear_search(&self) {
        self.store.update(|s| s.clear_search());
    }

    pub fn add_to_watchlist(&self, raw: &str) -> Result<bool, ValidationError> {
        let symbol = Symbol::new(raw)?;
        let (_, clock) = now();
        Ok(self.store.update(|s| s.add_to_watchlist(symbol, &clock)).unwrap_or(false))
    }

    pub fn simulate_trade(&self, symbol: &Symbol) {
        let (_, clock) = now();
        self.store.update(|s| s.simulate_trade(symbol, &clock));
    }

    pub fn settle_quote_flow(&self, generation: u64) {
        self.store.update(|s| s.quote_flow.settle(generation));
    }

    pub fn settle_trade_flow(&self, generation: u64) {
        self.store.update(|s| s.trade_flow.settle(generation));
    }
}
