//! Stock record lifecycle: service, persistence seam, endpoint surface

pub mod handlers;
pub mod service;
pub mod store;

pub use handlers::AppState;
pub use service::StockService;
pub use store::StockStore;
