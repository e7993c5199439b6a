mod alert;
mod case;
mod job_schedulers;
mod shared;

pub use alert::sweep_deadline_alerts::{SweepDeadlineAlertsUseCase, SweepReport, SweepScope};
pub use case::get_deadline_status::{DeadlineStatus, GetDeadlineStatusUseCase};
pub use case::record_judgment::RecordJudgmentUseCase;
pub use job_schedulers::AlertScheduler;
pub use shared::usecase::{execute, Subscriber, UseCase};
