pub mod sweep_deadline_alerts;
