use std::cell::Cell;
use std::collections::HashMap;

use futures::executor::block_on;
use stock_dashboard_wasm::application::{DashboardService, LocalStore, SessionGuard, StateStore};
use stock_dashboard_wasm::domain::activity::{ActivityCategory, ActivityEntry};
use stock_dashboard_wasm::domain::errors::{FetchError, FetchResult, ValidationError};
use stock_dashboard_wasm::domain::market_data::{
    DashboardRepository, Price, Quote, QuoteBook, QuoteTick, SearchAnalysis, SearchMarketData, SearchResult, Symbol,
    Transaction,
};
use stock_dashboard_wasm::domain::state::DashboardState;
use stock_dashboard_wasm::domain::system::{CacheHealth, DatabaseHealth, SystemStatus};

/// Canned backend. Missing entries answer with a network failure.
#[derive(Default)]
struct MockRepository {
    quotes: HashMap<String, f64>,
    status: Option<SystemStatus>,
    logs: Option<Vec<ActivityEntry>>,
    snapshot: Option<Vec<Quote>>,
    search: Option<SearchResult>,
    quote_calls: Cell<usize>,
}

fn offline() -> FetchError {
    FetchError::NetworkFailure("connection refused".to_string())
}

impl DashboardRepository for MockRepository {
    async fn fetch_status(&self) -> FetchResult<SystemStatus> {
        self.status.clone().ok_or_else(offline)
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> FetchResult<Option<QuoteTick>> {
        self.quote_calls.set(self.quote_calls.get() + 1);
        let price = self.quotes.get(symbol.value()).ok_or_else(offline)?;
        Ok(Some(QuoteTick {
            symbol: symbol.clone(),
            name: None,
            close_price: Price::from(*price),
            change: 0.1,
            source: "Redis Cache".to_string(),
        }))
    }

    async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>> {
        Err(FetchError::HttpStatus { code: 500, text: "Internal Server Error".to_string() })
    }

    async fn fetch_logs(&self) -> FetchResult<Vec<ActivityEntry>> {
        self.logs.clone().ok_or_else(offline)
    }

    async fn fetch_snapshot(&self) -> FetchResult<Vec<Quote>> {
        self.snapshot.clone().ok_or_else(offline)
    }

    async fn search(&self, _query: &str) -> FetchResult<SearchResult> {
        self.search.clone().ok_or_else(offline)
    }
}

fn online_status(rows: u64) -> SystemStatus {
    SystemStatus {
        cache: CacheHealth { status: "Online 🟢".into(), ops_per_sec: 2.0, key_count: 1, memory: None },
        database: DatabaseHealth { status: "Online 🟢".into(), ops_per_sec: 1.0, row_count: rows },
        data_source_label: "Market Simulator".into(),
    }
}

fn search_result(symbol: &str) -> SearchResult {
    SearchResult {
        symbol: Symbol::from(symbol),
        market_data: SearchMarketData { close_price: Price::from(900.0), change: 0.0, history: vec![1.0, 2.0] },
        transactions: Vec::new(),
        trace_log: vec!["✅ SQL: done".to_string()],
        analysis: SearchAnalysis { total_trades: 0, data_sources: Vec::new() },
    }
}

fn service(repository: MockRepository) -> DashboardService<MockRepository, LocalStore> {
    let state = DashboardState::with_watchlist(QuoteBook::with_symbols(vec![
        (Symbol::from("2330"), "台積電".to_string()),
        (Symbol::from("2603"), "長榮".to_string()),
    ]));
    DashboardService::new(repository, LocalStore::new(state, SessionGuard::new()))
}

#[test]
fn failing_symbol_does_not_block_others() {
    let repository = MockRepository { quotes: HashMap::from([("2330".to_string(), 1005.0)]), ..Default::default() };
    let service = service(repository);

    let applied = block_on(service.refresh_quotes());
    assert_eq!(applied, 1);

    let state = service.store().snapshot();
    assert_eq!(state.watchlist.get(&Symbol::from("2330")).map(|q| q.close_price.value()), Some(1005.0));
    assert_eq!(state.watchlist.get(&Symbol::from("2603")).and_then(|q| q.last_update), None);
    assert_eq!(state.activity.iter().next().map(|e| e.message.as_str()), Some("⚡ [Tick] 2330: 1005"));
}

#[test]
fn each_tick_fetches_every_tracked_symbol_once() {
    let repository = MockRepository {
        quotes: HashMap::from([("2330".to_string(), 1000.0), ("2603".to_string(), 180.0)]),
        ..Default::default()
    };
    let service = service(repository);

    assert_eq!(block_on(service.refresh_quotes()), 2);
    assert_eq!(service.repository().quote_calls.get(), 2);

    service.add_to_watchlist("2454").ok();
    block_on(service.refresh_quotes());
    assert_eq!(service.repository().quote_calls.get(), 5);
}

#[test]
fn unchanged_price_is_not_logged_twice() {
    let repository = MockRepository { quotes: HashMap::from([("2330".to_string(), 1000.0)]), ..Default::default() };
    let service = service(repository);

    block_on(service.refresh_quotes());
    block_on(service.refresh_quotes());

    let state = service.store().snapshot();
    assert_eq!(state.activity.len(), 1);
    assert_eq!(state.quote_flow.generation(), 2);
}

#[test]
fn failed_status_keeps_previous_value() {
    let service = service(MockRepository { status: Some(online_status(5)), ..Default::default() });
    assert!(block_on(service.refresh_status()).is_ok());

    let failing = DashboardService::new(MockRepository::default(), service.store().clone());
    assert!(block_on(failing.refresh_status()).is_err());
    assert_eq!(service.store().snapshot().row_count(), 5);
}

#[test]
fn overview_cycle_isolates_failures() {
    let repository = MockRepository {
        status: Some(online_status(2)),
        logs: Some(vec![ActivityEntry::new("10:00:00", ActivityCategory::Cache, "HIT")]),
        ..Default::default()
    };
    let service = service(repository);

    let outcome = block_on(service.refresh_overview());
    assert!(outcome.status && outcome.logs);
    assert!(!outcome.transactions && !outcome.snapshot);

    let state = service.store().snapshot();
    assert_eq!(state.activity.len(), 1);
    assert!(state.transactions.is_empty());
    assert!(state.last_updated.is_some());
}

#[test]
fn blank_search_is_ignored() {
    let service = service(MockRepository { search: Some(search_result("2330")), ..Default::default() });
    assert_eq!(block_on(service.search("   ")), Ok(false));
    assert!(service.store().snapshot().search.is_none());
}

#[test]
fn search_opens_and_clears() {
    let service = service(MockRepository { search: Some(search_result("2454")), ..Default::default() });
    assert_eq!(block_on(service.search(" 2454 ")), Ok(true));

    let state = service.store().snapshot();
    assert!(!state.searching);
    assert_eq!(state.search.as_ref().map(|r| r.has_transactions()), Some(false));

    service.clear_search();
    assert!(service.store().snapshot().search.is_none());
}

#[test]
fn failed_search_keeps_the_open_modal() {
    let service = service(MockRepository { search: Some(search_result("2454")), ..Default::default() });
    assert_eq!(block_on(service.search("2454")), Ok(true));

    let failing = DashboardService::new(MockRepository::default(), service.store().clone());
    assert!(block_on(failing.search("2330")).is_err());

    let state = service.store().snapshot();
    assert!(!state.searching);
    assert_eq!(state.search.map(|r| r.symbol), Some(Symbol::from("2454")));
}

#[test]
fn watchlist_input_is_validated() {
    let service = service(MockRepository::default());
    assert_eq!(service.add_to_watchlist("  "), Err(ValidationError::EmptySymbol));
    assert_eq!(service.add_to_watchlist("2454"), Ok(true));
    assert_eq!(service.add_to_watchlist("2454"), Ok(false));
    assert_eq!(service.store().snapshot().watchlist.len(), 3);
}

#[test]
fn closed_session_drops_late_responses() {
    let repository = MockRepository { quotes: HashMap::from([("2330".to_string(), 1010.0)]), ..Default::default() };
    let service = service(repository);
    service.announce_ready();
    let before = service.store().snapshot();

    service.store().session().close();
    let applied = block_on(service.refresh_quotes());
    service.simulate_trade(&Symbol::from("2330"));

    assert_eq!(applied, 0);
    assert_eq!(service.store().snapshot(), before);
}
