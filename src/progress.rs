//! Spinner display for the long installer wait

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the vendor installer runs in silent mode
pub struct InstallSpinner {
    pb: ProgressBar,
}

impl InstallSpinner {
    /// Start a steady-tick spinner with the given status message
    pub fn start(message: String) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(120));

        Self { pb }
    }

    /// Clear the spinner after the installer finished
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }

    /// Leave the spinner line behind on error
    pub fn abandon(self) {
        self.pb.abandon();
    }
}
