use crate::deadline::DeadlineType;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertPriority {
    Medium,
    High,
    Urgent,
}

impl AlertPriority {
    /// Alert priority is fixed per deadline type.
    pub fn for_deadline_type(deadline_type: DeadlineType) -> Self {
        match deadline_type {
            DeadlineType::Appeal | DeadlineType::ClarificationMotion => Self::Urgent,
            DeadlineType::Hearing => Self::High,
            DeadlineType::DocketUpdate => Self::Medium,
        }
    }
}

/// An `Alert` notifies the owner of a `LegalCase` that a tracked date falls
/// inside the sweep window. Created by the alert sweep, marked read by the
/// user; the sweep never mutates an alert after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: ID,
    pub alert_type: DeadlineType,
    pub case_id: ID,
    pub title: String,
    pub message: String,
    pub due_date: NaiveDate,
    pub notification_date: NaiveDate,
    pub priority: AlertPriority,
    pub read: bool,
}

impl Alert {
    pub fn new(
        alert_type: DeadlineType,
        case_id: &ID,
        title: &str,
        message: &str,
        due_date: NaiveDate,
        notification_date: NaiveDate,
    ) -> Self {
        Self {
            id: Default::default(),
            alert_type,
            case_id: case_id.clone(),
            title: title.to_string(),
            message: message.to_string(),
            due_date,
            notification_date,
            priority: AlertPriority::for_deadline_type(alert_type),
            read: false,
        }
    }
}

impl Entity for Alert {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn priority_is_fixed_per_type() {
        assert_eq!(
            AlertPriority::for_deadline_type(DeadlineType::Appeal),
            AlertPriority::Urgent
        );
        assert_eq!(
            AlertPriority::for_deadline_type(DeadlineType::ClarificationMotion),
            AlertPriority::Urgent
        );
        assert_eq!(
            AlertPriority::for_deadline_type(DeadlineType::Hearing),
            AlertPriority::High
        );
        assert_eq!(
            AlertPriority::for_deadline_type(DeadlineType::DocketUpdate),
            AlertPriority::Medium
        );
    }

    #[test]
    fn new_alerts_start_unread() {
        let alert = Alert::new(
            DeadlineType::Hearing,
            &Default::default(),
            "Upcoming hearing",
            "Hearing on 11/03/2024",
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );
        assert!(!alert.read);
        assert_eq!(alert.priority, AlertPriority::High);
    }
}
