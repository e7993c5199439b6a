use super::ILegalCaseRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use prazo_domain::{LegalCase, ID};

pub struct InMemoryLegalCaseRepo {
    cases: std::sync::Mutex<Vec<LegalCase>>,
}

impl InMemoryLegalCaseRepo {
    pub fn new() -> Self {
        Self {
            cases: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryLegalCaseRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ILegalCaseRepo for InMemoryLegalCaseRepo {
    async fn insert(&self, case: &LegalCase) -> anyhow::Result<()> {
        insert(case, &self.cases);
        Ok(())
    }

    async fn save(&self, case: &LegalCase) -> anyhow::Result<()> {
        save(case, &self.cases);
        Ok(())
    }

    async fn find(&self, case_id: &ID) -> Option<LegalCase> {
        find(case_id, &self.cases)
    }

    async fn find_active_with_upcoming_dates(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<LegalCase>> {
        let res = find_by(&self.cases, |case: &LegalCase| {
            case.active
                && case
                    .tracked_dates()
                    .iter()
                    .any(|(_, due_date)| from <= *due_date && *due_date <= to)
        });
        Ok(res)
    }

    async fn update_deadlines(
        &self,
        case_id: &ID,
        appeal_deadline: Option<NaiveDate>,
        clarification_deadline: Option<NaiveDate>,
    ) -> anyhow::Result<()> {
        update_many(
            &self.cases,
            |case: &LegalCase| case.id == *case_id,
            |case| {
                case.appeal_deadline = appeal_deadline;
                case.clarification_deadline = clarification_deadline;
            },
        );
        Ok(())
    }

    async fn delete(&self, case_id: &ID) -> Option<LegalCase> {
        delete(case_id, &self.cases)
    }
}
