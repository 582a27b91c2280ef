use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::core::constants::error_messages;
use crate::core::types::RequestOutcome;

/// Live percentage indicator plus the failure lines printed around it.
///
/// Failure lines are always printed; only the indicator itself can be
/// disabled.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            if let Ok(style) = ProgressStyle::with_template("{msg}") {
                bar.set_style(style);
            }
            bar
        });

        Self { bar }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    pub fn start(&self, total_urls: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_length(total_urls as u64);
        }
    }

    /// Refresh the indicator in place.
    pub fn update(&self, completed: usize, percent: f64) {
        if let Some(ref bar) = self.bar {
            bar.set_position(completed as u64);
            bar.set_message(format_percent(percent));
        }
    }

    /// Print `<url> <error>`, clearing the indicator first.
    pub fn report_failure(&self, outcome: &RequestOutcome) {
        self.println(&outcome.to_string());
    }

    pub fn report_abort(&self) {
        self.println(error_messages::TOO_MANY_ERRORS);
    }

    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish();
        }
    }

    fn println(&self, line: &str) {
        match self.bar {
            Some(ref bar) => bar.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }
}

/// Percentage with two decimals, e.g. `12.50%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}
