pub mod dashboard_service;
pub mod scheduler;
pub mod store;

pub use dashboard_service::*;
pub use scheduler::*;
pub use store::*;
