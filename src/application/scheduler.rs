use std::future::Future;
use std::time::Duration;

use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::IntervalStream;
use wasm_bindgen_futures::spawn_local;

use crate::application::dashboard_service::DashboardService;
use crate::application::store::{SessionGuard, StateStore};
use crate::config::{DashboardConfig, DashboardVariant};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::DashboardRepository;
use crate::{log_debug, log_info};

/// What a repeating task refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollJob {
    /// Every watchlist symbol, one request each.
    Quotes,
    Status,
    /// Status, transactions, logs and snapshot together.
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTask {
    pub job: PollJob,
    pub period: Duration,
    pub fire_immediately: bool,
}

impl PollTask {
    pub fn name(&self) -> &'static str {
        match self.job {
            PollJob::Quotes => "quotes",
            PollJob::Status => "status",
            PollJob::Overview => "overview",
        }
    }
}

/// Repeating tasks a variant runs while mounted.
pub fn plan_for(config: &DashboardConfig) -> Vec<PollTask> {
    match config.variant {
        DashboardVariant::Watchlist => vec![
            PollTask { job: PollJob::Quotes, period: config.quote_interval, fire_immediately: false },
            PollTask { job: PollJob::Status, period: config.status_interval, fire_immediately: true },
        ],
        DashboardVariant::Overview => {
            vec![PollTask { job: PollJob::Overview, period: config.overview_interval, fire_immediately: true }]
        }
    }
}

/// Independently timed repeating tasks on the browser event loop.
///
/// Ticks are never coalesced: each one spawns its own future, so a slow
/// request may still be in flight when the next tick fires. Teardown aborts
/// every interval and closes the session in one go.
pub struct PollScheduler {
    session: SessionGuard,
    handles: Vec<(&'static str, AbortHandle)>,
}

impl PollScheduler {
    pub fn new(session: SessionGuard) -> Self {
        Self { session, handles: Vec::new() }
    }

    pub fn every<F, Fut>(&mut self, task: PollTask, tick: F)
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let session = self.session.clone();
        let millis = u32::try_from(task.period.as_millis()).unwrap_or(u32::MAX);
        let mut tick = tick;

        let driver = async move {
            if task.fire_immediately {
                spawn_local(tick());
            }
            let mut ticks = IntervalStream::new(millis);
            while ticks.next().await.is_some() {
                if !session.is_open() {
                    break;
                }
                spawn_local(tick());
            }
        };
        spawn_local(async move {
            let _ = Abortable::new(driver, registration).await;
        });

        log_debug!(LogComponent::Application("PollScheduler"), "⏱️ {} every {:?}", task.name(), task.period);
        self.handles.push((task.name(), abort));
    }

    pub fn active_tasks(&self) -> usize {
        self.handles.len()
    }

    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    /// Abort all intervals and drop any late writes. Idempotent.
    pub fn cancel_all(&mut self) {
        self.session.close();
        if self.handles.is_empty() {
            return;
        }
        for (_, handle) in self.handles.drain(..) {
            handle.abort();
        }
        log_info!(LogComponent::Application("PollScheduler"), "🛑 Polling stopped");
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Start every task of `config.variant` against `service`.
pub fn start_polling<R, S>(service: &DashboardService<R, S>, config: &DashboardConfig) -> PollScheduler
where
    R: DashboardRepository + 'static,
    S: StateStore,
{
    let mut scheduler = PollScheduler::new(service.store().session().clone());
    for task in plan_for(config) {
        let service = service.clone();
        match task.job {
            PollJob::Quotes => scheduler.every(task, move || {
                let service = service.clone();
                async move {
                    service.refresh_quotes().await;
                }
            }),
            PollJob::Status => scheduler.every(task, move || {
                let service = service.clone();
                async move {
                    let _ = service.refresh_status().await;
                }
            }),
            PollJob::Overview => scheduler.every(task, move || {
                let service = service.clone();
                async move {
                    service.refresh_overview().await;
                }
            }),
        }
    }
    scheduler
}
