mod inmemory;

pub use inmemory::InMemoryAlertRepo;

use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDate;
use prazo_domain::{Alert, DeadlineType, ID};

#[async_trait::async_trait]
pub trait IAlertRepo: Send + Sync {
    async fn insert(&self, alert: &Alert) -> anyhow::Result<()>;
    /// The deduplication query: an unread alert for the same
    /// (type, case, due date), if one exists.
    async fn find_unread(
        &self,
        alert_type: DeadlineType,
        case_id: &ID,
        due_date: NaiveDate,
    ) -> Option<Alert>;
    async fn find_by_case(&self, case_id: &ID) -> Vec<Alert>;
    async fn delete_by_case(&self, case_id: &ID) -> anyhow::Result<DeleteResult>;
}
