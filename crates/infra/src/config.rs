use chrono_tz::Tz;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// IANA timezone the firm operates in. "Today" for deadline scans is
    /// resolved in this timezone.
    pub timezone: Tz,
    /// How many calendar days past today the alert sweep looks for due
    /// dates. The sweep window is the inclusive range
    /// `[today, today + lookahead]`.
    pub alert_lookahead_days: i64,
    /// Upcoming deadlines within this many business days are classified as
    /// urgent on the case dashboard. Independent of the sweep lookahead.
    pub urgent_threshold_business_days: i64,
    /// Hour of day, local time, at which the daily sweep runs.
    pub daily_sweep_hour: u32,
    /// Whether Carnival counts as a non-working day. It is customary rather
    /// than statutory, so firms can opt out.
    pub include_carnival: bool,
}

const DEFAULT_DAILY_SWEEP_HOUR: u32 = 8;

impl Config {
    pub fn new() -> Self {
        let default_timezone = chrono_tz::America::Sao_Paulo;
        let timezone = match std::env::var("PRAZO_TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given PRAZO_TIMEZONE: {} is not a valid IANA timezone, falling back to the default: {}.",
                        tz, default_timezone
                    );
                    default_timezone
                }
            },
            Err(_) => default_timezone,
        };

        let alert_lookahead_days = parse_env_var("PRAZO_ALERT_LOOKAHEAD_DAYS", 1);
        let urgent_threshold_business_days = parse_env_var("PRAZO_URGENT_THRESHOLD", 3);
        let include_carnival = parse_env_var("PRAZO_INCLUDE_CARNIVAL", true);

        let daily_sweep_hour: u32 = parse_env_var("PRAZO_DAILY_SWEEP_HOUR", DEFAULT_DAILY_SWEEP_HOUR);
        let daily_sweep_hour = if daily_sweep_hour > 23 {
            warn!(
                "The given PRAZO_DAILY_SWEEP_HOUR: {} is not a valid hour of day, falling back to the default: {}.",
                daily_sweep_hour, DEFAULT_DAILY_SWEEP_HOUR
            );
            DEFAULT_DAILY_SWEEP_HOUR
        } else {
            daily_sweep_hour
        };

        Self {
            timezone,
            alert_lookahead_days,
            urgent_threshold_business_days,
            daily_sweep_hour,
            include_carnival,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_var<T: FromStr + Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
