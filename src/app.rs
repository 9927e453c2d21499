use leptos::*;
use strum::IntoEnumIterator;

use crate::config::{DashboardConfig, DashboardVariant};
use crate::domain::logging::LogComponent;
use crate::log_info;
use crate::presentation::{OverviewDashboard, WatchlistDashboard};

/// 🦀 Root component: header, layout switch and the mounted dashboard.
///
/// Switching layouts unmounts the previous dashboard, which stops its polling.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let variant = create_rw_signal(config.variant);

    view! {
        <style>{STYLE}</style>
        <div class="stock-dashboard-app">
            <header class="header">
                <div class="mode-indicator">
                    <span class="indicator-dot"></span>
                    <span>{move || variant.get().title()}</span>
                </div>
                <h1 class="title">"TW-Stock-Quant"</h1>
                <div class="subtitle">"Real-time Quantitative Trading System Core"</div>
                <nav class="variant-switch">
                    {DashboardVariant::iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="switch-btn"
                                    class:selected=move || variant.get() == option
                                    on:click=move |_| {
                                        if variant.get_untracked() != option {
                                            log_info!(LogComponent::Presentation("App"), "🔀 Switching to {}", option.title());
                                            variant.set(option);
                                        }
                                    }
                                >
                                    {option.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            {move || {
                let config = config.clone().with_variant(variant.get());
                match config.variant {
                    DashboardVariant::Watchlist => view! { <WatchlistDashboard config=config /> }.into_view(),
                    DashboardVariant::Overview => view! { <OverviewDashboard config=config /> }.into_view(),
                }
            }}
        </div>
    }
}

const STYLE: &str = r#"
.stock-dashboard-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #0d1117;
    min-height: 100vh;
    padding: 20px;
    color: #c9d1d9;
}

.header {
    text-align: center;
    margin-bottom: 20px;
}

.title { margin: 8px 0 4px; }
.subtitle { color: #8b949e; font-size: 0.9rem; }

.mode-indicator, .connection-bar {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    font-size: 0.8rem;
}

.indicator-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #7ee787;
    box-shadow: 0 0 8px #7ee787;
}

.variant-switch { margin-top: 12px; display: flex; justify-content: center; gap: 8px; }

.switch-btn, .buy-btn, .search-bar button, .add-symbol button, .close-btn {
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid #30363d;
    color: #c9d1d9;
    padding: 6px 14px;
    border-radius: 6px;
    cursor: pointer;
}

.switch-btn.selected { border-color: #58a6ff; color: #58a6ff; }

.dashboard-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
}

.card, .console {
    background: #161b22;
    border: 1px solid #30363d;
    border-radius: 10px;
    padding: 1rem;
}

.card.wide { grid-column: span 2; }
.card-header, .console-header { display: flex; justify-content: space-between; margin-bottom: 0.8rem; font-weight: 600; }
.card-meta { font-size: 0.7rem; opacity: 0.7; }

.console.cache { border-color: #ff7b72; }
.console.cache .console-header { color: #ff7b72; }
.console.database { border-color: #79c0ff; }
.console.database .console-header { color: #79c0ff; }
.console-body { font-family: monospace; font-size: 0.8rem; max-height: 260px; overflow-y: auto; }
.console-rate { font-size: 0.75rem; color: #8b949e; margin-bottom: 0.5rem; }
.console-empty, .loading, .placeholder, .no-data { color: #8b949e; text-align: center; padding: 1rem; }
.log-line { margin: 2px 0; padding: 1px 5px; border-radius: 3px; }
.log-line:hover { background: rgba(255, 255, 255, 0.1); }
.log-time { opacity: 0.5; margin-right: 6px; }

.status-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.status-item { display: flex; flex-direction: column; gap: 4px; }
.status-label { font-size: 0.75rem; color: #8b949e; }
.status-value.degraded { color: #ff7b72; }

.snapshot-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
.snapshot-cell { background: rgba(255, 255, 255, 0.05); padding: 0.8rem; border-radius: 8px; text-align: center; }
.snapshot-symbol, .snapshot-name { font-size: 0.75rem; color: #8b949e; }
.snapshot-price { font-weight: bold; margin: 0.2rem 0; }

.up, .snapshot-change.up { color: #ff7b72; }
.down, .snapshot-change.down { color: #7ee787; }

.quote-table, .transaction-table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
.quote-table td, .quote-table th, .transaction-table td, .transaction-table th { padding: 6px; border-bottom: 1px solid #21262d; }
.badge.buy, .pill.buy { color: #ff7b72; }
.badge.sell, .pill.sell { color: #7ee787; }

.flow-diagram { display: flex; justify-content: center; gap: 10px; margin: 1rem 0; }
.flow-node { padding: 4px 10px; border: 1px solid #30363d; border-radius: 6px; }
.flow-link { opacity: 0.3; transition: opacity 0.2s; }
.flow-link.flowing { opacity: 1; color: #f2cc60; }

.search-bar, .add-symbol { display: flex; justify-content: center; gap: 8px; margin: 1rem 0; }
.search-bar input, .add-symbol input {
    background: #0d1117;
    border: 1px solid #30363d;
    color: #c9d1d9;
    padding: 6px 10px;
    border-radius: 6px;
}

.search-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10;
}

.search-modal { background: #161b22; border: 1px solid #30363d; border-radius: 12px; padding: 1.5rem; width: min(900px, 95vw); }
.modal-header { display: flex; justify-content: space-between; align-items: center; }
.search-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.price-huge { font-size: 2rem; font-weight: bold; }
.chart-container { height: 100px; }
.mini-tx-row { display: flex; justify-content: space-between; font-size: 0.8rem; }
.console-log { grid-column: span 2; font-family: monospace; font-size: 0.8rem; }
.log-entry.red { color: #ff7b72; }
.log-entry.blue { color: #79c0ff; }
.log-entry.yellow { color: #f2cc60; }
.log-entry.green { color: #7ee787; }
.trace-index { opacity: 0.5; }
"#;
