use crate::deadline::DeadlineType;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `LegalCase` carries the procedural dates the deadline engine watches:
/// the judgment date that triggers statutory deadlines, the derived or
/// manually entered deadlines themselves, and the next scheduled hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    pub id: ID,
    pub owner_user_id: ID,
    pub case_number: String,
    pub judgment_date: Option<NaiveDate>,
    pub appeal_deadline: Option<NaiveDate>,
    pub clarification_deadline: Option<NaiveDate>,
    pub next_hearing_date: Option<NaiveDate>,
    pub active: bool,
}

impl LegalCase {
    pub fn new(owner_user_id: &ID, case_number: &str) -> Self {
        Self {
            id: Default::default(),
            owner_user_id: owner_user_id.clone(),
            case_number: case_number.to_string(),
            judgment_date: None,
            appeal_deadline: None,
            clarification_deadline: None,
            next_hearing_date: None,
            active: true,
        }
    }

    /// The (type, due date) pairs currently present on the case, in the
    /// order the sweep reports them.
    pub fn tracked_dates(&self) -> Vec<(DeadlineType, NaiveDate)> {
        let mut dates = Vec::new();
        if let Some(due_date) = self.appeal_deadline {
            dates.push((DeadlineType::Appeal, due_date));
        }
        if let Some(due_date) = self.clarification_deadline {
            dates.push((DeadlineType::ClarificationMotion, due_date));
        }
        if let Some(due_date) = self.next_hearing_date {
            dates.push((DeadlineType::Hearing, due_date));
        }
        dates
    }
}

impl Entity for LegalCase {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tracked_dates_skips_missing_fields() {
        let mut case = LegalCase::new(&Default::default(), "0001234-56.2024.8.26.0100");
        assert!(case.tracked_dates().is_empty());

        let hearing = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        case.next_hearing_date = Some(hearing);
        assert_eq!(case.tracked_dates(), vec![(DeadlineType::Hearing, hearing)]);
    }
}
