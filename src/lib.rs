pub mod aggregate;
pub mod app;
pub mod bucket;
pub mod classify;
pub mod config;
pub mod currency;
pub mod errors;
pub mod goal;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod ranking;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use stats::{build_stats, build_stats_at};
pub use storage::load_data;
