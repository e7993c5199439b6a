mod alert;
mod legal_case;
mod shared;

use std::sync::Arc;

pub use alert::{IAlertRepo, InMemoryAlertRepo};
pub use legal_case::{ILegalCaseRepo, InMemoryLegalCaseRepo};
pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub legal_cases: Arc<dyn ILegalCaseRepo>,
    pub alerts: Arc<dyn IAlertRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            legal_cases: Arc::new(InMemoryLegalCaseRepo::new()),
            alerts: Arc::new(InMemoryAlertRepo::new()),
        }
    }
}
