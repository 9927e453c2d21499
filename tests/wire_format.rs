use stock_dashboard_wasm::domain::activity::ActivityCategory;
use stock_dashboard_wasm::domain::errors::FetchError;
use stock_dashboard_wasm::domain::market_data::{Symbol, TraceTone, TradeSide};
use stock_dashboard_wasm::domain::system::HealthSignal;
use stock_dashboard_wasm::infrastructure::http::decode_body;
use stock_dashboard_wasm::infrastructure::http::dto::{
    LogDto, QuoteDataDto, QuoteEnvelopeDto, SearchDto, StatusDto, TransactionsDto,
};

#[test]
fn status_payload() {
    let body = r#"{
        "redis": {"status": "Online 🟢", "keys": 12, "memory": "1.02M", "ops": 40},
        "mysql": {"status": "Error 🔴", "rows": 0, "ops": 3},
        "broker": "Yahoo Finance / Mock Mode"
    }"#;
    let status = decode_body::<StatusDto>(body).map(StatusDto::to_domain);
    let status = status.as_ref().ok();

    assert_eq!(status.map(|s| s.cache.key_count), Some(12));
    assert_eq!(status.and_then(|s| s.cache.memory.as_deref()), Some("1.02M"));
    assert_eq!(status.map(|s| s.database.signal()), Some(HealthSignal::Error));
    assert_eq!(status.map(|s| s.data_source_label.as_str()), Some("Yahoo Finance / Mock Mode"));
}

#[test]
fn quote_envelope_without_data_is_skipped() {
    let symbol = Symbol::from("2330");
    let empty = decode_body::<QuoteEnvelopeDto>(r#"{"source": "Redis Cache"}"#).map(|d| d.to_domain(&symbol));
    assert!(matches!(empty, Ok(None)));
}

#[test]
fn quote_envelope_defaults_source() {
    let symbol = Symbol::from("2330");
    let body = r#"{"data": {"symbol": "2330", "name": "TSMC (台積電)", "closePrice": 1012.5, "change": 1.25, "ts": 1700000000000}}"#;
    let tick = decode_body::<QuoteEnvelopeDto>(body).ok().and_then(|d| d.to_domain(&symbol));

    assert_eq!(tick.as_ref().map(|t| t.close_price.value()), Some(1012.5));
    assert_eq!(tick.as_ref().map(|t| t.change), Some(1.25));
    assert_eq!(tick.map(|t| t.source), Some("Unknown".to_string()));
}

#[test]
fn snapshot_rows_use_short_names() {
    let body = r#"[
        {"symbol": "2317", "name": "Foxconn (鴻海)", "closePrice": 105.0, "change": -0.4, "ts": 1},
        {"name": "no symbol", "closePrice": 1.0}
    ]"#;
    let quotes: Vec<_> = decode_body::<Vec<QuoteDataDto>>(body)
        .map(|rows| rows.into_iter().filter_map(QuoteDataDto::to_snapshot_quote).collect())
        .unwrap_or_default();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].name, "Foxconn");
    assert!(!quotes[0].is_up());
}

#[test]
fn transactions_payload() {
    let body = r#"{"data": [
        {"id": 42, "symbol": "2330", "action": "BUY", "price": 1000.0, "quantity": 3, "time": "10:15:02"},
        {"id": 41, "symbol": "2603", "action": "SELL", "price": 180.0, "quantity": 1, "time": "10:14:58"}
    ]}"#;
    let transactions = decode_body::<TransactionsDto>(body).map(TransactionsDto::to_domain).unwrap_or_default();

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].side, TradeSide::Buy);
    assert_eq!(transactions[0].timestamp, "10:15:02");
    assert_eq!(transactions[1].side, TradeSide::Sell);
}

#[test]
fn empty_transactions_payload() {
    let transactions = decode_body::<TransactionsDto>(r#"{"data": []}"#).map(TransactionsDto::to_domain);
    assert!(matches!(transactions, Ok(ref t) if t.is_empty()));
}

#[test]
fn log_payload() {
    let body = r#"[
        {"time": "10:15:02", "msg": "Cache SET stock:realtime:2330", "type": "redis", "icon": "⚡"},
        {"time": "10:15:01", "msg": "INSERT transaction", "type": "sql", "icon": "💾"},
        {"time": "10:15:00", "msg": "Tick generated", "type": "sim", "icon": "🎲"}
    ]"#;
    let entries: Vec<_> = decode_body::<Vec<LogDto>>(body)
        .map(|logs| logs.into_iter().map(LogDto::to_domain).collect())
        .unwrap_or_default();

    let categories: Vec<_> = entries.iter().map(|e| e.category).collect();
    assert_eq!(categories, vec![ActivityCategory::Cache, ActivityCategory::Database, ActivityCategory::Other]);
    assert_eq!(entries[0].icon.as_deref(), Some("⚡"));
}

#[test]
fn search_with_no_trades() {
    let body = r#"{
        "symbol": "2454",
        "market_data": {"closePrice": 900.0, "change": 0.0, "history": [899.0, 900.5, 900.0]},
        "transactions": [],
        "trace_log": ["🔍 Redis: Checking cache...", "🔄 Simulation: Generating", "✅ SQL: Found 0 trades"],
        "analysis": {"total_trades": 0, "data_sources": ["Market Engine (Live)", "Trade DB (Persistent)"]}
    }"#;
    let result = decode_body::<SearchDto>(body).map(SearchDto::to_domain);
    let result = result.as_ref().ok();

    assert_eq!(result.map(|r| r.has_transactions()), Some(false));
    assert_eq!(result.map(|r| r.analysis.total_trades), Some(0));
    assert_eq!(result.map(|r| r.market_data.history.len()), Some(3));
    let tones: Vec<_> = result.map(|r| r.trace_lines().map(|(_, _, tone)| tone).collect()).unwrap_or_default();
    assert_eq!(tones, vec![TraceTone::Cache, TraceTone::Simulation, TraceTone::Success]);
}

#[test]
fn search_trades_inherit_the_symbol() {
    let body = r#"{
        "symbol": "2330",
        "market_data": {"closePrice": 1000.0, "change": 0.2, "history": []},
        "transactions": [{"id": 1, "action": "BUY", "price": 990.0, "quantity": 2, "date": "2024-05-01 09:01:00"}],
        "trace_log": []
    }"#;
    let result = decode_body::<SearchDto>(body).map(SearchDto::to_domain);
    let result = result.as_ref().ok();

    assert_eq!(result.map(|r| r.transactions[0].symbol.value()), Some("2330"));
    assert_eq!(result.map(|r| r.transactions[0].date()), Some("2024-05-01"));
    assert_eq!(result.map(|r| r.analysis.total_trades), Some(1));
}

#[test]
fn malformed_json_is_a_parse_failure() {
    assert!(matches!(decode_body::<StatusDto>("{\"redis\": 1}"), Err(FetchError::ParseFailure(_))));
}
