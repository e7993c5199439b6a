use crate::shared::usecase::UseCase;
use chrono::{Duration, NaiveDate};
use prazo_domain::{date::format_date, Alert, DeadlineType, LegalCase, ID};
use prazo_infra::PrazoContext;
use tracing::{error, info};

/// One pass of the deadline scan: finds active cases whose tracked dates
/// fall inside the lookahead window and emits at most one unread alert per
/// (type, case, due date).
#[derive(Debug)]
pub struct SweepDeadlineAlertsUseCase {
    pub scope: SweepScope,
}

#[derive(Debug)]
pub enum SweepScope {
    /// The periodic sweep over every active case.
    AllActiveCases,
    /// A single case, right after its deadlines were recorded.
    SingleCase(ID),
}

#[derive(Debug, Default, PartialEq)]
pub struct SweepReport {
    pub cases_scanned: usize,
    pub alerts_created: usize,
    pub case_failures: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for SweepDeadlineAlertsUseCase {
    type Response = SweepReport;

    type Errors = UseCaseError;

    const NAME: &'static str = "SweepDeadlineAlerts";

    async fn execute(&mut self, ctx: &PrazoContext) -> Result<Self::Response, Self::Errors> {
        let today = ctx.local_today();
        let window_end = today + Duration::days(ctx.config.alert_lookahead_days);

        let cases = match &self.scope {
            SweepScope::AllActiveCases => ctx
                .repos
                .legal_cases
                .find_active_with_upcoming_dates(today, window_end)
                .await
                .map_err(|_| UseCaseError::StorageError)?,
            SweepScope::SingleCase(case_id) => ctx
                .repos
                .legal_cases
                .find(case_id)
                .await
                .into_iter()
                .collect(),
        };

        let mut report = SweepReport::default();
        for case in &cases {
            report.cases_scanned += 1;
            // One failing case must not starve the rest of the sweep
            match process_case(case, today, window_end, ctx).await {
                Ok(created) => report.alerts_created += created,
                Err(e) => {
                    error!("Sweep failed for case {}: {:?}", case.id, e);
                    report.case_failures += 1;
                }
            }
        }

        if report.alerts_created > 0 {
            info!(
                "Deadline sweep created {} alert(s) across {} case(s)",
                report.alerts_created, report.cases_scanned
            );
        }
        Ok(report)
    }
}

async fn process_case(
    case: &LegalCase,
    today: NaiveDate,
    window_end: NaiveDate,
    ctx: &PrazoContext,
) -> anyhow::Result<usize> {
    if !case.active {
        return Ok(0);
    }

    let mut created = 0;
    for (deadline_type, due_date) in case.tracked_dates() {
        if due_date < today || due_date > window_end {
            continue;
        }

        // An unread alert for the same (type, case, due date) already
        // covers this deadline
        if ctx
            .repos
            .alerts
            .find_unread(deadline_type, &case.id, due_date)
            .await
            .is_some()
        {
            continue;
        }

        let alert = build_alert(case, deadline_type, due_date, today);
        ctx.repos.alerts.insert(&alert).await?;
        created += 1;
    }
    Ok(created)
}

fn build_alert(
    case: &LegalCase,
    deadline_type: DeadlineType,
    due_date: NaiveDate,
    today: NaiveDate,
) -> Alert {
    let (title, noun) = match deadline_type {
        DeadlineType::Appeal => ("Appeal deadline approaching", "appeal deadline"),
        DeadlineType::ClarificationMotion => (
            "Clarification motion deadline approaching",
            "clarification motion deadline",
        ),
        DeadlineType::Hearing => ("Upcoming hearing", "hearing"),
        DeadlineType::DocketUpdate => ("Docket update", "docket update"),
    };
    let message = format!(
        "Case {} has a {} on {}",
        case.case_number,
        noun,
        format_date(&due_date)
    );
    Alert::new(deadline_type, &case.id, title, &message, due_date, today)
}
