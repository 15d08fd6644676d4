use crate::models::LedgerData;
use rust_decimal::Decimal;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub default_goal: Decimal,
    pub data: Arc<Mutex<LedgerData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, default_goal: Decimal, data: LedgerData) -> Self {
        Self {
            data_path,
            default_goal,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
