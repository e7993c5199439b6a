mod inmemory;

pub use inmemory::InMemoryLegalCaseRepo;

use chrono::NaiveDate;
use prazo_domain::{LegalCase, ID};

#[async_trait::async_trait]
pub trait ILegalCaseRepo: Send + Sync {
    async fn insert(&self, case: &LegalCase) -> anyhow::Result<()>;
    async fn save(&self, case: &LegalCase) -> anyhow::Result<()>;
    async fn find(&self, case_id: &ID) -> Option<LegalCase>;
    /// Active cases with an appeal deadline, clarification deadline or
    /// hearing date inside the inclusive `[from, to]` window.
    async fn find_active_with_upcoming_dates(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<LegalCase>>;
    async fn update_deadlines(
        &self,
        case_id: &ID,
        appeal_deadline: Option<NaiveDate>,
        clarification_deadline: Option<NaiveDate>,
    ) -> anyhow::Result<()>;
    async fn delete(&self, case_id: &ID) -> Option<LegalCase>;
}
