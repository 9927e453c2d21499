use crate::domain::activity::ActivityEntry;
use crate::domain::errors::FetchResult;
use crate::domain::market_data::{Quote, QuoteTick, SearchResult, Symbol, Transaction};
use crate::domain::system::SystemStatus;

/// Read side of the dashboard backend. Every call is a single GET.
///
/// Futures are not `Send`: the client runs on the browser event loop only.
#[allow(async_fn_in_trait)]
pub trait DashboardRepository {
    async fn fetch_status(&self) -> FetchResult<SystemStatus>;

    /// `Ok(None)` when the backend answered without a `data` payload.
    async fn fetch_quote(&self, symbol: &Symbol) -> FetchResult<Option<QuoteTick>>;

    async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>>;

    /// Backend event feed, newest first.
    async fn fetch_logs(&self) -> FetchResult<Vec<ActivityEntry>>;

    async fn fetch_snapshot(&self) -> FetchResult<Vec<Quote>>;

    async fn search(&self, query: &str) -> FetchResult<SearchResult>;
}
