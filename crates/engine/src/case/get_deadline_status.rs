use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use prazo_domain::{classify_urgency, BusinessCalendar, DeadlineType, HolidayCalendar, Urgency, ID};
use prazo_infra::PrazoContext;

/// The upcoming-deadlines view for one case: every tracked date classified
/// against today.
#[derive(Debug)]
pub struct GetDeadlineStatusUseCase {
    pub case_id: ID,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineStatus {
    pub deadline_type: DeadlineType,
    pub due_date: NaiveDate,
    pub urgency: Urgency,
}

#[derive(Debug)]
pub enum UseCaseError {
    CaseNotFound(ID),
}

#[async_trait::async_trait]
impl UseCase for GetDeadlineStatusUseCase {
    type Response = Vec<DeadlineStatus>;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetDeadlineStatus";

    async fn execute(&mut self, ctx: &PrazoContext) -> Result<Self::Response, Self::Errors> {
        let case = ctx
            .repos
            .legal_cases
            .find(&self.case_id)
            .await
            .ok_or_else(|| UseCaseError::CaseNotFound(self.case_id.clone()))?;

        let today = ctx.local_today();
        let calendar = BusinessCalendar::new(HolidayCalendar::new(ctx.config.include_carnival));

        Ok(case
            .tracked_dates()
            .into_iter()
            .map(|(deadline_type, due_date)| DeadlineStatus {
                deadline_type,
                due_date,
                urgency: classify_urgency(
                    &calendar,
                    due_date,
                    today,
                    ctx.config.urgent_threshold_business_days,
                ),
            })
            .collect())
    }
}
