//! Console collaborator for a run
//!
//! Solutions are written as whole lines with the status line suspended, so
//! concurrent workers and the status redraw never interleave within a line.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Line output for solutions plus one overwritable status line
///
/// Cloning is cheap; clones share the same status line.
#[derive(Clone)]
pub struct Console {
    status: ProgressBar,
    echo: bool,
}

impl Console {
    /// Print solutions to stdout, with a live status line when `show_status` is set
    ///
    /// The status line is only drawn when stdout is a terminal.
    #[must_use]
    pub fn stdout(show_status: bool) -> Self {
        let status = if show_status {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template("{msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { status, echo: true }
    }

    /// Discard all output
    #[must_use]
    pub fn silent() -> Self {
        Self {
            status: ProgressBar::hidden(),
            echo: false,
        }
    }

    /// Print one accepted word on its own line
    pub fn solution(&self, word: &str) {
        if self.echo {
            self.status.suspend(|| println!("{word}"));
        }
    }

    /// Replace the status line
    pub fn status(&self, line: String) {
        self.status.set_message(line);
    }

    /// Remove the status line from the terminal
    pub fn clear_status(&self) {
        self.status.finish_and_clear();
    }
}
