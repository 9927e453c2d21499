use leptos::*;

use crate::config::DashboardConfig;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market_data::Quote;
use crate::domain::state::DashboardState;
use crate::domain::system::SystemStatus;
use crate::log_warn;
use crate::presentation::console::ActivityConsole;
use crate::presentation::store::{DashboardSession, LiveService};
use crate::time_utils::format_last_update;

fn last_update_label(quote: &Quote) -> String {
    format_last_update(quote.last_update.map(|t| t.value()), |ts| get_time_provider().format_timestamp(ts))
}

/// 📊 Watchlist layout: per-symbol quotes, health cards, data-flow lights
/// and the local activity console.
#[component]
pub fn WatchlistDashboard(config: DashboardConfig) -> impl IntoView {
    let DashboardSession { state, service } = DashboardSession::mount(&config);

    view! {
        <div class="dashboard watchlist">
            <ConnectionBar state=state />
            <FlowDiagram state=state />
            <HealthCards state=state />
            <QuoteTable state=state service=service />
            <AddSymbolForm service=service />
            <ActivityConsole state=state title="📟 Activity" />
        </div>
    }
}

#[component]
fn ConnectionBar(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="connection-bar">
            <span class="indicator-dot"></span>
            <span>{move || state.with(|s| s.connection.label())}</span>
        </div>
    }
}

/// Lights up broker → cache → dashboard on quote ticks and
/// dashboard → database on simulated orders.
#[component]
fn FlowDiagram(state: RwSignal<DashboardState>) -> impl IntoView {
    let quote_active = move || state.with(|s| s.quote_flow.is_active());
    let trade_active = move || state.with(|s| s.trade_flow.is_active());

    view! {
        <div class="flow-diagram">
            <span class="flow-node">"Broker"</span>
            <span class="flow-link" class:flowing=quote_active>"→"</span>
            <span class="flow-node cache">"Redis"</span>
            <span class="flow-link" class:flowing=quote_active>"→"</span>
            <span class="flow-node">"Dashboard"</span>
            <span class="flow-link" class:flowing=trade_active>"→"</span>
            <span class="flow-node database">"MySQL"</span>
        </div>
    }
}

#[component]
fn HealthCards(state: RwSignal<DashboardState>) -> impl IntoView {
    let status = move || state.with(|s| s.status.clone().unwrap_or_else(SystemStatus::unknown));
    let rows = move || state.with(|s| s.row_count());

    view! {
        <div class="status-grid">
            <div class="status-item">
                <span class="status-label">"Redis Cache"</span>
                <span class="status-value">{move || status().cache.status}</span>
                <span class="status-detail">
                    {move || {
                        let cache = status().cache;
                        format!("{} keys · {}", cache.key_count, cache.memory.unwrap_or_else(|| "-".to_string()))
                    }}
                </span>
            </div>
            <div class="status-item">
                <span class="status-label">"MySQL"</span>
                <span class="status-value" class:degraded=move || status().database.signal().is_degraded()>
                    {move || status().database.status}
                </span>
                <span class="status-detail">{move || format!("{} rows", rows())}</span>
            </div>
            <div class="status-item">
                <span class="status-label">"Data Source"</span>
                <span class="status-value">{move || status().data_source_label}</span>
            </div>
        </div>
    }
}

#[component]
fn QuoteTable(state: RwSignal<DashboardState>, service: StoredValue<LiveService>) -> impl IntoView {
    view! {
        <table class="quote-table">
            <thead>
                <tr>
                    <th>"Symbol"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Change"</th>
                    <th>"Source"</th>
                    <th>"Updated"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    state
                        .with(|s| s.watchlist.quotes().to_vec())
                        .into_iter()
                        .map(|quote| {
                            let symbol = quote.symbol.clone();
                            let trend = if quote.is_up() { "up" } else { "down" };
                            let updated = last_update_label(&quote);
                            view! {
                                <tr>
                                    <td>{quote.symbol.to_string()}</td>
                                    <td>{quote.name}</td>
                                    <td>{format!("{:.2}", quote.close_price.value())}</td>
                                    <td class=trend>{format!("{:+.2}", quote.change)}</td>
                                    <td>{quote.source}</td>
                                    <td>{updated}</td>
                                    <td>
                                        <button
                                            class="buy-btn"
                                            on:click=move |_| service.with_value(|svc| svc.simulate_trade(&symbol))
                                        >
                                            "Buy"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn AddSymbolForm(service: StoredValue<LiveService>) -> impl IntoView {
    let input = create_rw_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let raw = input.get_untracked();
        if let Err(e) = service.with_value(|svc| svc.add_to_watchlist(&raw)) {
            log_warn!(LogComponent::Presentation("AddSymbolForm"), "Ignored symbol input: {}", e);
        }
        input.set(String::new());
    };

    view! {
        <form class="add-symbol" on:submit=submit>
            <input
                type="text"
                placeholder="Stock ID (Ex: 2454)"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

