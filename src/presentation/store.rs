use leptos::*;

use crate::application::{DashboardService, PollScheduler, SessionGuard, StateStore, start_polling};
use crate::config::{DashboardConfig, FLOW_PULSE_DURATION};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::QuoteBook;
use crate::domain::state::DashboardState;
use crate::infrastructure::http::DashboardHttpClient;
use crate::log_info;

/// Reactive store: the dashboard state lives in one Leptos signal.
#[derive(Clone)]
pub struct SignalStore {
    state: RwSignal<DashboardState>,
    session: SessionGuard,
}

impl SignalStore {
    pub fn new(initial: DashboardState, session: SessionGuard) -> Self {
        Self { state: create_rw_signal(initial), session }
    }

    pub fn signal(&self) -> RwSignal<DashboardState> {
        self.state
    }
}

impl StateStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        if !self.session.is_open() {
            return None;
        }
        // `try_update` tolerates a signal already disposed with its owner.
        self.state.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.state.try_with_untracked(f)
    }

    fn session(&self) -> &SessionGuard {
        &self.session
    }
}

pub type LiveService = DashboardService<DashboardHttpClient, SignalStore>;

/// Handles a mounted dashboard view works with. Both are `Copy`.
#[derive(Clone, Copy)]
pub struct DashboardSession {
    pub state: RwSignal<DashboardState>,
    pub service: StoredValue<LiveService>,
}

impl DashboardSession {
    /// Build store, client and scheduler for one view, start polling and
    /// register the teardown with the current reactive owner.
    pub fn mount(config: &DashboardConfig) -> Self {
        let initial = DashboardState::with_watchlist(QuoteBook::with_symbols(config.watchlist.clone()));
        let store = SignalStore::new(initial, SessionGuard::new());
        let state = store.signal();
        let service = DashboardService::new(DashboardHttpClient::new(config.api_base.clone()), store);

        service.announce_ready();
        let scheduler: PollScheduler = start_polling(&service, config);
        log_info!(
            LogComponent::Presentation("DashboardSession"),
            "🚀 {} mounted, {} poll task(s) against {}",
            config.variant.title(),
            scheduler.active_tasks(),
            config.api_base
        );
        on_cleanup(move || {
            let mut scheduler = scheduler;
            scheduler.cancel_all();
        });

        let session = Self { state, service: store_value(service) };
        session.settle_pulses();
        session
    }

    /// Switch each flow animation off once it has played.
    fn settle_pulses(&self) {
        let state = self.state;
        let service = self.service;
        let millis = FLOW_PULSE_DURATION.as_millis() as u32;

        let quote_generation = create_memo(move |_| state.with(|s| s.quote_flow.generation()));
        create_effect(move |_| {
            let generation = quote_generation.get();
            if generation > 0 {
                let svc = service.get_value();
                gloo_timers::callback::Timeout::new(millis, move || svc.settle_quote_flow(generation)).forget();
            }
        });

        let trade_generation = create_memo(move |_| state.with(|s| s.trade_flow.generation()));
        create_effect(move |_| {
            let generation = trade_generation.get();
            if generation > 0 {
                let svc = service.get_value();
                gloo_timers::callback::Timeout::new(millis, move || svc.settle_trade_flow(generation)).forget();
            }
        });
    }
}
