use crate::alert::sweep_deadline_alerts::{SweepDeadlineAlertsUseCase, SweepScope};
use crate::shared::usecase::{execute, Subscriber, UseCase};
use chrono::NaiveDate;
use prazo_domain::{
    derive_from_judgment, BusinessCalendar, DateArithmeticError, HolidayCalendar, LegalCase, ID,
};
use prazo_infra::PrazoContext;
use tracing::error;

/// Records the judgment date on a `LegalCase` and derives the statutory
/// deadlines that follow from it.
///
/// A deadline supplied manually in the same update always wins; only the
/// missing ones are derived. Derivation runs synchronously so the new
/// deadlines are visible before the next periodic sweep.
#[derive(Debug)]
pub struct RecordJudgmentUseCase {
    pub case_id: ID,
    pub judgment_date: NaiveDate,
    /// Manually entered appeal deadline, if the update carried one.
    pub appeal_deadline: Option<NaiveDate>,
    /// Manually entered clarification-motion deadline, if the update carried
    /// one.
    pub clarification_deadline: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum UseCaseError {
    CaseNotFound(ID),
    InvalidInput(DateArithmeticError),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for RecordJudgmentUseCase {
    type Response = LegalCase;

    type Errors = UseCaseError;

    const NAME: &'static str = "RecordJudgment";

    async fn execute(&mut self, ctx: &PrazoContext) -> Result<Self::Response, Self::Errors> {
        let mut case = ctx
            .repos
            .legal_cases
            .find(&self.case_id)
            .await
            .ok_or_else(|| UseCaseError::CaseNotFound(self.case_id.clone()))?;

        let calendar = BusinessCalendar::new(HolidayCalendar::new(ctx.config.include_carnival));
        let derived = derive_from_judgment(&calendar, self.judgment_date)
            .map_err(UseCaseError::InvalidInput)?;

        case.judgment_date = Some(self.judgment_date);
        ctx.repos
            .legal_cases
            .save(&case)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let appeal = self.appeal_deadline.unwrap_or(derived.appeal);
        let clarification = self
            .clarification_deadline
            .unwrap_or(derived.clarification_motion);
        ctx.repos
            .legal_cases
            .update_deadlines(&case.id, Some(appeal), Some(clarification))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        case.appeal_deadline = Some(appeal);
        case.clarification_deadline = Some(clarification);
        Ok(case)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SweepRecordedDeadlines)]
    }
}

/// Runs the alert pass for the case as soon as its deadlines are recorded,
/// without waiting for the next periodic sweep.
struct SweepRecordedDeadlines;

#[async_trait::async_trait]
impl Subscriber<RecordJudgmentUseCase> for SweepRecordedDeadlines {
    async fn notify(&self, case: &LegalCase, ctx: &PrazoContext) {
        let usecase = SweepDeadlineAlertsUseCase {
            scope: SweepScope::SingleCase(case.id.clone()),
        };
        if execute(usecase, ctx).await.is_err() {
            error!("Initial alert pass failed for case: {}", case.id);
        }
    }
}
