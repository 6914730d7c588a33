pub mod adapter;
pub mod app;
pub mod charts;
pub mod config;
pub mod data_access;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use data_access::DataAccess;
pub use state::AppState;
