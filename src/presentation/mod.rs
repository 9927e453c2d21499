pub mod console;
pub mod overview;
pub mod sparkline;
pub mod store;
pub mod watchlist;

pub use overview::OverviewDashboard;
pub use store::{DashboardSession, LiveService, SignalStore};
pub use watchlist::WatchlistDashboard;
