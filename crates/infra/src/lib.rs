mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IAlertRepo, ILegalCaseRepo, InMemoryAlertRepo, InMemoryLegalCaseRepo, Repos,
};
pub use system::{ISys, RealSys};

use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct PrazoContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PrazoContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    /// Today's date in the firm's configured timezone. Deadline scans
    /// resolve "today" through this, never through the system clock
    /// directly.
    pub fn local_today(&self) -> NaiveDate {
        self.sys
            .get_utc_datetime()
            .with_timezone(&self.config.timezone)
            .date_naive()
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> PrazoContext {
    PrazoContext::create_inmemory()
}
