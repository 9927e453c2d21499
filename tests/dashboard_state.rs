use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::activity::ActivityCategory;
use stock_dashboard_wasm::domain::market_data::{
    Price, QuoteBook, QuoteTick, SearchAnalysis, SearchMarketData, SearchResult, Symbol, Timestamp,
};
use stock_dashboard_wasm::domain::state::{ConnectionStatus, DashboardState};
use stock_dashboard_wasm::domain::system::{CacheHealth, DatabaseHealth, SystemStatus};

fn tick(symbol: &str, price: f64) -> QuoteTick {
    QuoteTick {
        symbol: Symbol::from(symbol),
        name: None,
        close_price: Price::from(price),
        change: 0.5,
        source: "Market Simulator (Live)".to_string(),
    }
}

fn status(db: &str, rows: u64) -> SystemStatus {
    SystemStatus {
        cache: CacheHealth { status: "Online 🟢".into(), ops_per_sec: 1.0, key_count: 3, memory: Some("1M".into()) },
        database: DatabaseHealth { status: db.into(), ops_per_sec: 0.0, row_count: rows },
        data_source_label: "Yahoo Finance / Mock Mode".into(),
    }
}

fn watchlist_state() -> DashboardState {
    DashboardState::with_watchlist(QuoteBook::with_symbols(vec![
        (Symbol::from("2330"), "台積電".to_string()),
        (Symbol::from("2603"), "長榮".to_string()),
    ]))
}

#[test]
fn quote_updates_in_place() {
    let mut state = watchlist_state();
    assert!(state.apply_quote(&tick("2330", 1000.0), Timestamp::from_millis(1)));
    assert!(!state.apply_quote(&tick("2330", 1000.0), Timestamp::from_millis(2)));

    let quote = state.watchlist.get(&Symbol::from("2330")).cloned();
    assert_eq!(state.watchlist.len(), 2);
    assert_eq!(quote.as_ref().map(|q| q.name.as_str()), Some("台積電"));
    assert_eq!(quote.and_then(|q| q.last_update), Some(Timestamp::from_millis(2)));
    assert_eq!(state.quote_flow.generation(), 2);
}

#[test]
fn unknown_symbol_is_appended() {
    let mut state = watchlist_state();
    state.apply_quote(&tick("2454", 900.0), Timestamp::from_millis(1));
    let symbols: Vec<_> = state.watchlist.symbols().iter().map(|s| s.value().to_string()).collect();
    assert_eq!(symbols, vec!["2330", "2603", "2454"]);
}

#[test]
fn offline_database_keeps_local_rows() {
    let mut state = watchlist_state();
    state.apply_status(status("Online 🟢", 7));
    state.simulate_trade(&Symbol::from("2330"), "10:00:00");
    state.simulate_trade(&Symbol::from("2330"), "10:00:01");
    assert_eq!(state.row_count(), 9);

    state.apply_status(status("Offline", 0));
    assert_eq!(state.row_count(), 9);
    assert_eq!(state.status.as_ref().map(|s| s.database.row_count), Some(9));
    assert_eq!(state.connection, ConnectionStatus::Degraded);

    state.apply_status(status("Online 🟢", 4));
    assert_eq!(state.row_count(), 4);
    assert_eq!(state.connection, ConnectionStatus::Online);
}

#[test]
fn simulated_trade_logs_an_order() {
    let mut state = watchlist_state();
    state.apply_quote(&tick("2603", 180.5), Timestamp::from_millis(1));
    state.simulate_trade(&Symbol::from("2603"), "09:30:00");

    assert_eq!(state.row_count(), 1);
    assert!(state.trade_flow.is_active());
    let latest = state.activity.iter().next().cloned();
    assert_eq!(latest.as_ref().map(|e| e.message.as_str()), Some("🛒 [Order] Buy 2603 @ 180.5"));
    assert_eq!(latest.map(|e| e.category), Some(ActivityCategory::Database));
}

#[test]
fn flow_pulse_ignores_stale_settle() {
    let mut state = DashboardState::default();
    let first = state.trade_flow.fire();
    let second = state.trade_flow.fire();
    state.trade_flow.settle(first);
    assert!(state.trade_flow.is_active());
    state.trade_flow.settle(second);
    assert!(!state.trade_flow.is_active());
}

#[test]
fn adding_a_tracked_symbol_is_a_no_op() {
    let mut state = watchlist_state();
    assert!(!state.add_to_watchlist(Symbol::from("2330"), "10:00:00"));
    assert!(state.activity.is_empty());
    assert!(state.add_to_watchlist(Symbol::from("2317"), "10:00:00"));
    assert_eq!(
        state.activity.iter().next().map(|e| e.message.as_str()),
        Some("Info: Added 2317 to watchlist")
    );
}

#[test]
fn failed_search_keeps_previous_result() {
    let mut state = DashboardState::default();
    let previous = SearchResult {
        symbol: Symbol::from("2454"),
        market_data: SearchMarketData { close_price: Price::from(1200.0), change: 0.0, history: Vec::new() },
        transactions: Vec::new(),
        trace_log: Vec::new(),
        analysis: SearchAnalysis::default(),
    };
    state.finish_search(Some(previous.clone()));

    state.begin_search();
    assert!(state.searching);
    state.finish_search(None);
    assert!(!state.searching);
    assert_eq!(state.search, Some(previous));
}

#[quickcheck]
fn watchlist_symbols_stay_unique(ops: Vec<(u8, bool)>) -> bool {
    let mut state = watchlist_state();
    for (n, via_tick) in ops {
        let raw = format!("{}", 2300 + (n % 16) as u32);
        if via_tick {
            state.apply_quote(&tick(&raw, n as f64), Timestamp::from_millis(n as u64));
        } else {
            state.add_to_watchlist(Symbol::from(raw.as_str()), "00:00:00");
        }
    }
    let symbols = state.watchlist.symbols();
    let unique: HashSet<_> = symbols.iter().collect();
    unique.len() == symbols.len()
}

#[quickcheck]
fn activity_feed_stays_bounded(trades: u8) -> bool {
    let mut state = watchlist_state();
    for _ in 0..trades {
        state.simulate_trade(&Symbol::from("2330"), "00:00:00");
    }
    state.activity.len() <= 50 && state.row_count() == trades as u64
}
