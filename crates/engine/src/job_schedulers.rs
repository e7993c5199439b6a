use crate::alert::sweep_deadline_alerts::{SweepDeadlineAlertsUseCase, SweepScope};
use crate::shared::usecase::execute;
use chrono::{DateTime, LocalResult, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

use prazo_infra::PrazoContext;

/// Drives the periodic deadline sweeps: an hourly tick plus a daily tick
/// aligned to the configured local hour. Constructed and owned by the host;
/// `start` and `stop` are idempotent.
pub struct AlertScheduler {
    ctx: PrazoContext,
    sweep_guard: Arc<tokio::sync::Mutex<()>>,
    state: Mutex<SchedulerState>,
}

enum SchedulerState {
    Stopped,
    Running {
        hourly: JoinHandle<()>,
        daily: JoinHandle<()>,
    },
}

impl AlertScheduler {
    pub fn new(ctx: PrazoContext) -> Self {
        Self {
            ctx,
            sweep_guard: Arc::new(tokio::sync::Mutex::new(())),
            state: Mutex::new(SchedulerState::Stopped),
        }
    }

    /// Registers both periodic triggers. Calling `start` while already
    /// running is a no-op.
    pub fn start(&self) {
        let mut state = self.state.lock().unwrap();
        if let SchedulerState::Running { .. } = *state {
            warn!("Alert scheduler is already running");
            return;
        }
        *state = SchedulerState::Running {
            hourly: self.spawn_hourly_ticker(),
            daily: self.spawn_daily_ticker(),
        };
    }

    /// Cancels both periodic triggers. An in-flight sweep runs as its own
    /// task and is left to complete, so no partial writes are interrupted.
    /// Calling `stop` while stopped is a no-op.
    pub fn stop(&self) {
        let mut state = self.state.lock().unwrap();
        match std::mem::replace(&mut *state, SchedulerState::Stopped) {
            SchedulerState::Running { hourly, daily } => {
                hourly.abort();
                daily.abort();
            }
            SchedulerState::Stopped => warn!("Alert scheduler is not running"),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock().unwrap(), SchedulerState::Running { .. })
    }

    fn spawn_hourly_ticker(&self) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        let guard = self.sweep_guard.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60 * 60));
            loop {
                interval.tick().await;
                tokio::spawn(run_sweep(ctx.clone(), guard.clone()));
            }
        })
    }

    fn spawn_daily_ticker(&self) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        let guard = self.sweep_guard.clone();
        tokio::spawn(async move {
            let delay = millis_until_next_daily_run(
                ctx.sys.get_utc_datetime(),
                ctx.config.timezone,
                ctx.config.daily_sweep_hour,
            );
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
            let mut interval = tokio::time::interval(Duration::from_secs(24 * 60 * 60));
            loop {
                interval.tick().await;
                tokio::spawn(run_sweep(ctx.clone(), guard.clone()));
            }
        })
    }
}

async fn run_sweep(ctx: PrazoContext, guard: Arc<tokio::sync::Mutex<()>>) {
    // Sweeps must never run concurrently against the same repositories. A
    // tick that lands while one is still in flight is skipped; the next
    // tick covers the same window.
    let _lock = match guard.try_lock() {
        Ok(lock) => lock,
        Err(_) => {
            warn!("Deadline sweep still in progress, skipping this tick");
            return;
        }
    };

    let usecase = SweepDeadlineAlertsUseCase {
        scope: SweepScope::AllActiveCases,
    };
    let _ = execute(usecase, &ctx).await;
}

/// Millis from `now` until the next daily run at `hour` o'clock local time
/// in `tz`.
pub fn millis_until_next_daily_run(now: DateTime<Utc>, tz: Tz, hour: u32) -> i64 {
    let local_now = now.with_timezone(&tz);
    let run_time = NaiveTime::from_hms_opt(hour, 0, 0).expect("Invalid hour of day");

    let mut run_date = local_now.date_naive();
    if local_now.time() >= run_time {
        run_date = run_date + chrono::Duration::days(1);
    }

    let run_local = match tz.from_local_datetime(&run_date.and_time(run_time)) {
        LocalResult::Single(run) => run,
        LocalResult::Ambiguous(run, _) => run,
        // The wall-clock time falls in a DST gap; reading it as UTC keeps
        // the tick within the same hour
        LocalResult::None => tz.from_utc_datetime(&run_date.and_time(run_time)),
    };

    (run_local.timestamp_millis() - local_now.timestamp_millis()).max(0)
}
