use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::ledger::ExpenseLedger;
use crate::services::store_api::StoreApiClient;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ledger: Arc<RwLock<ExpenseLedger>>,
    pub store_api: StoreApiClient,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let ledger = if config.seed_samples {
            ExpenseLedger::with_samples()
        } else {
            ExpenseLedger::new()
        };
        let store_api = StoreApiClient::new(config.store_api_url.clone())?;

        Ok(Self {
            config: Arc::new(config),
            ledger: Arc::new(RwLock::new(ledger)),
            store_api,
        })
    }

    pub fn read_ledger(&self) -> AppResult<RwLockReadGuard<'_, ExpenseLedger>> {
        self.ledger
            .read()
            .map_err(|_| AppError::Internal("Expense ledger lock poisoned".into()))
    }

    pub fn write_ledger(&self) -> AppResult<RwLockWriteGuard<'_, ExpenseLedger>> {
        self.ledger
            .write()
            .map_err(|_| AppError::Internal("Expense ledger lock poisoned".into()))
    }
}
