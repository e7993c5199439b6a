use super::IAlertRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDate;
use prazo_domain::{Alert, DeadlineType, ID};

pub struct InMemoryAlertRepo {
    alerts: std::sync::Mutex<Vec<Alert>>,
}

impl InMemoryAlertRepo {
    pub fn new() -> Self {
        Self {
            alerts: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAlertRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAlertRepo for InMemoryAlertRepo {
    async fn insert(&self, alert: &Alert) -> anyhow::Result<()> {
        insert(alert, &self.alerts);
        Ok(())
    }

    async fn find_unread(
        &self,
        alert_type: DeadlineType,
        case_id: &ID,
        due_date: NaiveDate,
    ) -> Option<Alert> {
        find_by(&self.alerts, |alert: &Alert| {
            !alert.read
                && alert.alert_type == alert_type
                && alert.case_id == *case_id
                && alert.due_date == due_date
        })
        .into_iter()
        .next()
    }

    async fn find_by_case(&self, case_id: &ID) -> Vec<Alert> {
        find_by(&self.alerts, |alert: &Alert| alert.case_id == *case_id)
    }

    async fn delete_by_case(&self, case_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.alerts, |alert: &Alert| {
            alert.case_id == *case_id
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn finds_only_unread_alerts() {
        let repo = InMemoryAlertRepo::new();
        let case_id = ID::new();
        let due_date = date(2024, 3, 11);

        let mut alert = Alert::new(
            DeadlineType::Hearing,
            &case_id,
            "Upcoming hearing",
            "Hearing on 11/03/2024",
            due_date,
            date(2024, 3, 10),
        );
        alert.read = true;
        repo.insert(&alert).await.unwrap();

        assert!(repo
            .find_unread(DeadlineType::Hearing, &case_id, due_date)
            .await
            .is_none());

        let unread = Alert::new(
            DeadlineType::Hearing,
            &case_id,
            "Upcoming hearing",
            "Hearing on 11/03/2024",
            due_date,
            date(2024, 3, 10),
        );
        repo.insert(&unread).await.unwrap();

        let found = repo
            .find_unread(DeadlineType::Hearing, &case_id, due_date)
            .await;
        assert_eq!(found, Some(unread));
    }

    #[tokio::test]
    async fn deletes_alerts_by_case() {
        let repo = InMemoryAlertRepo::new();
        let case_id = ID::new();

        for due in &[date(2024, 3, 11), date(2024, 3, 12)] {
            let alert = Alert::new(
                DeadlineType::Appeal,
                &case_id,
                "Appeal deadline approaching",
                "",
                *due,
                date(2024, 3, 10),
            );
            repo.insert(&alert).await.unwrap();
        }

        let res = repo.delete_by_case(&case_id).await.unwrap();
        assert_eq!(res.deleted_count, 2);
        assert!(repo.find_by_case(&case_id).await.is_empty());
    }
}
