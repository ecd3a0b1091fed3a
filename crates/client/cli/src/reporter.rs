//! Rate-limited error reporting with a one-time global panic hook.
//!
//! [`ErrorReporter`] is an ordinary value until [`ErrorReporter::install`]
//! moves it into process-wide storage and routes panics through it. Reports
//! go to `tracing::error!`; bursts beyond the configured limit are counted
//! and summarised once the window has room again.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use tracing::{error, warn};

static INSTALLED: OnceLock<ErrorReporter> = OnceLock::new();

/// Rate limit applied to reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Reports allowed within one `window`.
    pub max_reports: usize,
    pub window: Duration,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            max_reports: 5,
            window: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReporterError {
    #[error("error reporter already installed")]
    AlreadyInstalled,
}

/// Whether a report was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    Reported,
    Suppressed,
}

#[derive(Debug, Default)]
struct ReportWindow {
    recent: VecDeque<Instant>,
    suppressed: usize,
}

#[derive(Debug)]
pub struct ErrorReporter {
    config: ReporterConfig,
    state: Mutex<ReportWindow>,
}

impl ErrorReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            state: Mutex::new(ReportWindow::default()),
        }
    }

    /// Logs `message` unless the window is already full.
    pub fn report(&self, message: impl fmt::Display) -> ReportOutcome {
        self.report_at(message, Instant::now())
    }

    fn report_at(&self, message: impl fmt::Display, now: Instant) -> ReportOutcome {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        while let Some(&oldest) = state.recent.front() {
            if now.saturating_duration_since(oldest) < self.config.window {
                break;
            }
            state.recent.pop_front();
        }

        if state.recent.len() >= self.config.max_reports {
            state.suppressed += 1;
            return ReportOutcome::Suppressed;
        }

        if state.suppressed > 0 {
            warn!(suppressed = state.suppressed, "error reports suppressed by rate limit");
            state.suppressed = 0;
        }
        state.recent.push_back(now);
        drop(state);

        error!("{}", message);
        ReportOutcome::Reported
    }

    /// Makes this reporter the process-wide one and routes panics through it.
    ///
    /// The previous panic hook still runs after the report.
    pub fn install(self) -> Result<&'static ErrorReporter, ReporterError> {
        let mut installed_now = false;
        let reporter = INSTALLED.get_or_init(|| {
            installed_now = true;
            self
        });
        if !installed_now {
            return Err(ReporterError::AlreadyInstalled);
        }

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            reporter.report(format_args!("panic: {info}"));
            previous(info);
        }));

        Ok(reporter)
    }
}
