use leptos::*;

use crate::config::DashboardConfig;
use crate::domain::activity::ActivityCategory;
use crate::domain::market_data::SearchResult;
use crate::domain::state::DashboardState;
use crate::domain::logging::get_time_provider;
use crate::presentation::console::ActivityConsole;
use crate::presentation::sparkline::Sparkline;
use crate::presentation::store::{DashboardSession, LiveService};
use crate::time_utils::format_last_update;

/// 🌐 Overview layout: system health, market snapshot, cache and database
/// monitors, recent trades and symbol search.
#[component]
pub fn OverviewDashboard(config: DashboardConfig) -> impl IntoView {
    let DashboardSession { state, service } = DashboardSession::mount(&config);
    let write_rate = Signal::derive(move || {
        state.with(|s| s.status.as_ref().map(|st| st.cache.clone()).unwrap_or_default().write_rate_label())
    });
    let insert_rate = Signal::derive(move || {
        state.with(|s| s.status.as_ref().map(|st| st.database.clone()).unwrap_or_default().insert_rate_label())
    });

    view! {
        <div class="dashboard overview">
            <SearchBar state=state service=service />
            <SearchModal state=state service=service />
            <div class="dashboard-grid">
                <SystemHealth state=state />
                <MarketSnapshot state=state />
                <ActivityConsole
                    state=state
                    title="⚡ Redis Monitor"
                    category=ActivityCategory::Cache
                    rate=write_rate
                    empty_text="Waiting for cache activity..."
                />
                <ActivityConsole
                    state=state
                    title="🗄️ SQL Monitor"
                    category=ActivityCategory::Database
                    rate=insert_rate
                    empty_text="Waiting for DB transactions..."
                />
                <TransactionTable state=state />
            </div>
        </div>
    }
}

#[component]
fn SystemHealth(state: RwSignal<DashboardState>) -> impl IntoView {
    let last_updated = move || {
        state.with(|s| {
            format_last_update(s.last_updated.map(|t| t.value()), |ts| get_time_provider().format_timestamp(ts))
        })
    };

    view! {
        <div class="card wide">
            <div class="card-header">
                <span>"System Health"</span>
                <span class="card-meta">"Updated " {last_updated}</span>
            </div>
            {move || match state.with(|s| s.status.clone()) {
                Some(status) => {
                    let degraded = status.database.signal().is_degraded();
                    view! {
                        <div class="status-grid">
                            <div class="status-item">
                                <span class="status-label">"Redis Cache"</span>
                                <span class="status-value">{status.cache.status}</span>
                            </div>
                            <div class="status-item">
                                <span class="status-label">"Database"</span>
                                <span class="status-value" class:degraded=degraded>
                                    {status.database.status}
                                </span>
                            </div>
                            <div class="status-item">
                                <span class="status-label">"Data Source"</span>
                                <span class="status-value">{status.data_source_label}</span>
                            </div>
                        </div>
                    }
                    .into_view()
                }
                None => view! { <div class="loading">"Connecting to backend..."</div> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn MarketSnapshot(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="card wide">
            <div class="card-header">
                <span>"Simulation Market Snapshot"</span>
            </div>
            <div class="snapshot-grid">
                {move || {
                    let quotes = state.with(|s| s.snapshot.quotes().to_vec());
                    if quotes.is_empty() {
                        return view! { <div class="loading">"Loading snapshot..."</div> }.into_view();
                    }
                    quotes
                        .into_iter()
                        .map(|quote| {
                            // Taiwan convention: red up, green down.
                            let (trend, arrow) = if quote.is_up() { ("up", "▲") } else { ("down", "▼") };
                            view! {
                                <div class="snapshot-cell">
                                    <div class="snapshot-symbol">{quote.symbol.to_string()}</div>
                                    <div class="snapshot-price">{format!("{:.1}", quote.close_price.value())}</div>
                                    <div class=format!("snapshot-change {}", trend)>
                                        {format!("{} {:.2}%", arrow, quote.change.abs())}
                                    </div>
                                    <div class="snapshot-name">{quote.name}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn TransactionTable(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="card wide">
            <div class="card-header">
                <span>"Database Operations"</span>
                <span class="card-meta">"Live Sync"</span>
            </div>
            <table class="transaction-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Time"</th>
                        <th>"Symbol"</th>
                        <th>"Side"</th>
                        <th>"Price"</th>
                        <th>"Qty"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let transactions = state.with(|s| s.transactions.clone());
                        if transactions.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="6" class="placeholder">"Waiting for data..."</td>
                                </tr>
                            }
                            .into_view();
                        }
                        transactions
                            .into_iter()
                            .map(|tx| {
                                view! {
                                    <tr class="fade-in-row">
                                        <td>{format!("#{}", tx.id)}</td>
                                        <td>{tx.timestamp}</td>
                                        <td>{tx.symbol.to_string()}</td>
                                        <td>
                                            <span class=format!("badge {}", tx.side.css_class())>{tx.side.to_string()}</span>
                                        </td>
                                        <td>{format!("{:.1}", tx.price.value())}</td>
                                        <td>{tx.quantity}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SearchBar(state: RwSignal<DashboardState>, service: StoredValue<LiveService>) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let searching = move || state.with(|s| s.searching);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        let svc = service.get_value();
        spawn_local(async move {
            // Failures are already logged; the modal keeps its last result.
            let _ = svc.search(&text).await;
        });
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <input
                type="text"
                placeholder="Stock ID (Ex: 2330)"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button type="submit" disabled=searching>
                {move || if searching() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}

#[component]
fn SearchModal(state: RwSignal<DashboardState>, service: StoredValue<LiveService>) -> impl IntoView {
    let result = create_memo(move |_| state.with(|s| s.search.clone()));

    move || {
        result.get().map(|result| {
            view! {
                <div class="search-overlay">
                    <div class="search-modal">
                        <div class="modal-header">
                            <h2>"Analysis: " {result.symbol.to_string()}</h2>
                            <button class="close-btn" on:click=move |_| service.with_value(|svc| svc.clear_search())>
                                "×"
                            </button>
                        </div>
                        <SearchBody result=result />
                    </div>
                </div>
            }
        })
    }
}

const NO_TRADES: &str = "No recorded trades for this symbol";
const NO_TRACE: &str = "No trace data available.";

/// Text shown instead of the trade list when the backend recorded none.
fn trade_history_placeholder(result: &SearchResult) -> Option<&'static str> {
    (!result.has_transactions()).then_some(NO_TRADES)
}

fn trace_placeholder(result: &SearchResult) -> Option<&'static str> {
    result.trace_log.is_empty().then_some(NO_TRACE)
}

#[component]
fn SearchBody(result: SearchResult) -> impl IntoView {
    let trace: Vec<_> = result
        .trace_lines()
        .map(|(n, line, tone)| (n, line.to_string(), tone.css_class()))
        .collect();
    let sources = result.analysis.data_sources.join(" + ");

    view! {
        <div class="search-grid">
            <div class="search-card market-card">
                <h3>"Market Data"</h3>
                <div class="price-huge">
                    {result.market_data.close_price.value().to_string()} <small>"TWD"</small>
                </div>
                <div class="chart-container">
                    <Sparkline history=result.market_data.history.clone() />
                </div>
            </div>
            <div class="search-card tx-card">
                <h3>"Trade History"</h3>
                <div class="card-meta">{format!("{} trade(s) · {}", result.analysis.total_trades, sources)}</div>
                <div class="tx-list">
                    {match trade_history_placeholder(&result) {
                        Some(text) => view! { <div class="no-data">{text}</div> }.into_view(),
                        None => result
                            .transactions
                            .iter()
                            .map(|tx| {
                                view! {
                                    <div class="mini-tx-row">
                                        <span class=format!("pill {}", tx.side.css_class())>{tx.side.to_string()}</span>
                                        <span>{tx.price.value().to_string()}</span>
                                        <span class="date">{tx.date().to_string()}</span>
                                    </div>
                                }
                            })
                            .collect_view(),
                    }}
                </div>
            </div>
            <div class="console-log">
                <div class="console-header">"System Trace Log (SQL/Redis Flow)"</div>
                {if let Some(text) = trace_placeholder(&result) {
                    view! { <div class="log-entry">{text}</div> }.into_view()
                } else {
                    trace
                        .into_iter()
                        .map(|(n, line, tone)| {
                            view! {
                                <div class=format!("log-entry {}", tone)>
                                    <span class="trace-index">{format!("{}.", n)}</span>
                                    " "
                                    {line}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Price, SearchAnalysis, SearchMarketData, Symbol, TradeSide, Transaction};

    fn result(transactions: Vec<Transaction>, trace_log: Vec<String>) -> SearchResult {
        SearchResult {
            symbol: Symbol::from("2454"),
            market_data: SearchMarketData { close_price: Price::from(1200.0), change: 0.3, history: vec![1.0, 2.0] },
            transactions,
            trace_log,
            analysis: SearchAnalysis::default(),
        }
    }

    #[test]
    fn empty_search_sections_show_placeholders() {
        let empty = result(Vec::new(), Vec::new());
        assert_eq!(trade_history_placeholder(&empty), Some("No recorded trades for this symbol"));
        assert_eq!(trace_placeholder(&empty), Some("No trace data available."));
    }

    #[test]
    fn filled_search_sections_list_rows() {
        let trade = Transaction {
            id: 1,
            timestamp: "2024-05-01 10:00:00".into(),
            symbol: Symbol::from("2454"),
            side: TradeSide::Buy,
            price: Price::from(1200.0),
            quantity: 1,
        };
        let filled = result(vec![trade], vec!["✅ SQL: done".into()]);
        assert_eq!(trade_history_placeholder(&filled), None);
        assert_eq!(trace_placeholder(&filled), None);
    }
}
