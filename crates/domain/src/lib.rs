mod alert;
mod business_day;
pub mod date;
mod deadline;
mod holiday;
mod legal_case;
mod shared;

pub use alert::{Alert, AlertPriority};
pub use business_day::{BusinessCalendar, DateArithmeticError};
pub use deadline::{
    classify_urgency, derive_from_judgment, DeadlineType, StatutoryDeadlines, Urgency,
    APPEAL_DEADLINE_BUSINESS_DAYS, CLARIFICATION_DEADLINE_BUSINESS_DAYS,
};
pub use holiday::{easter_sunday, Holiday, HolidayCalendar};
pub use legal_case::LegalCase;
pub use shared::entity::{Entity, InvalidIDError, ID};
