use crate::domain::activity::{ActivityCategory, ActivityEntry, ActivityLog};
use crate::domain::market_data::{Quote, QuoteBook, QuoteTick, SearchResult, Symbol, Timestamp, Transaction};
use crate::domain::system::SystemStatus;

/// Backend reachability as shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Online,
    /// Reachable, but a backing store reports Offline/Error.
    Degraded,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Online => "Online",
            Self::Degraded => "Degraded",
        }
    }
}

/// One-shot animation trigger. The view settles it after the animation ran;
/// a stale settle (older generation) is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowPulse {
    generation: u64,
    active: bool,
}

impl FlowPulse {
    pub fn fire(&mut self) -> u64 {
        self.generation += 1;
        self.active = true;
        self.generation
    }

    pub fn settle(&mut self, generation: u64) {
        if generation == self.generation {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything a mounted dashboard renders. Owned by exactly one store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub watchlist: QuoteBook,
    pub snapshot: QuoteBook,
    pub status: Option<SystemStatus>,
    /// Row counter shown for the database; see `simulate_trade`.
    local_rows: u64,
    pub activity: ActivityLog,
    pub transactions: Vec<Transaction>,
    pub search: Option<SearchResult>,
    pub searching: bool,
    pub connection: ConnectionStatus,
    pub quote_flow: FlowPulse,
    pub trade_flow: FlowPulse,
    pub last_updated: Option<Timestamp>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            watchlist: QuoteBook::new(),
            snapshot: QuoteBook::new(),
            status: None,
            local_rows: 0,
            activity: ActivityLog::default(),
            transactions: Vec::new(),
            search: None,
            searching: false,
            connection: ConnectionStatus::Connecting,
            quote_flow: FlowPulse::default(),
            trade_flow: FlowPulse::default(),
            last_updated: None,
        }
    }
}

impl DashboardState {
    pub fn with_watchlist(watchlist: QuoteBook) -> Self {
        Self { watchlist, ..Default::default() }
    }

    /// Merge a watchlist tick. Returns true when the close price moved.
    pub fn apply_quote(&mut self, tick: &QuoteTick, at: Timestamp) -> bool {
        let change = self.watchlist.upsert(tick, at);
        self.quote_flow.fire();
        change.price_moved(tick.close_price.value())
    }

    pub fn apply_snapshot(&mut self, quotes: Vec<Quote>, at: Timestamp) {
        for quote in quotes {
            let tick = QuoteTick {
                symbol: quote.symbol,
                name: Some(quote.name),
                close_price: quote.close_price,
                change: quote.change,
                source: quote.source,
            };
            self.snapshot.upsert(&tick, at);
        }
    }

    /// Wholesale replacement, except that a degraded database keeps the
    /// locally held row count.
    pub fn apply_status(&mut self, incoming: SystemStatus) {
        let mut held = self.status.take().unwrap_or_default();
        held.database.row_count = self.local_rows;
        held.merge_from_backend(incoming);
        self.local_rows = held.database.row_count;
        self.connection = if held.is_degraded() { ConnectionStatus::Degraded } else { ConnectionStatus::Online };
        self.status = Some(held);
    }

    pub fn row_count(&self) -> u64 {
        self.local_rows
    }

    pub fn push_activity(&mut self, entry: ActivityEntry) {
        self.activity.push(entry);
    }

    pub fn replace_backend_logs(&mut self, entries: Vec<ActivityEntry>) {
        self.activity.replace(entries);
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn begin_search(&mut self) {
        self.searching = true;
    }

    pub fn finish_search(&mut self, result: Option<SearchResult>) {
        self.searching = false;
        if let Some(result) = result {
            self.search = Some(result);
        }
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    /// Admit a symbol to the watchlist. Returns false if already tracked.
    pub fn add_to_watchlist(&mut self, symbol: Symbol, clock: &str) -> bool {
        let name = symbol.value().to_string();
        let added = self.watchlist.admit(symbol, &name);
        if added {
            self.push_activity(ActivityEntry::new(
                clock,
                ActivityCategory::Other,
                format!("Info: Added {} to watchlist", name),
            ));
        }
        added
    }

    /// Optimistic, unconfirmed "buy": one more row and an order line in the
    /// feed. Overwritten by the next non-degraded status from the backend.
    pub fn simulate_trade(&mut self, symbol: &Symbol, clock: &str) {
        self.trade_flow.fire();
        let price = self.watchlist.get(symbol).map(|q| q.close_price.value()).unwrap_or_default();
        self.push_activity(ActivityEntry::new(
            clock,
            ActivityCategory::Database,
            format!("🛒 [Order] Buy {} @ {}", symbol, price),
        ));
        self.local_rows += 1;
        if let Some(status) = self.status.as_mut() {
            status.database.row_count = self.local_rows;
        }
    }

    pub fn mark_online(&mut self) {
        if self.connection == ConnectionStatus::Connecting {
            self.connection = ConnectionStatus::Online;
        }
    }

    pub fn touch(&mut self, at: Timestamp) {
        self.last_updated = Some(at);
    }
}
