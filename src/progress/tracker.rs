//! Live progress reporting on a dedicated timer thread
//!
//! One thread drives two fixed-rate tasks: a fast redraw of the status line and a
//! slower sample of the shared counter. Workers never wait on it.

use super::counter::ProgressCounter;
use crate::output::Console;
use crate::output::formatters::{SPINNER, status_line};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Timer settings for the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Period of the status line redraw
    pub redraw_interval: Duration,
    /// Delay before the first counter sample
    pub sample_delay: Duration,
    /// Period of counter samples after the first
    pub sample_interval: Duration,
    /// Cells in the status bar
    pub bar_width: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            redraw_interval: Duration::from_millis(500),
            sample_delay: Duration::from_secs(2),
            sample_interval: Duration::from_secs(10),
            bar_width: 40,
        }
    }
}

/// Marker that bounces from one end of the bar to the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    position: usize,
    backwards: bool,
}

impl Bounce {
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Move one cell, turning around at either end of a `width`-cell bar
    pub fn advance(&mut self, width: usize) {
        if width <= 1 {
            self.position = 0;
            return;
        }

        if self.backwards {
            if self.position == 0 {
                self.backwards = false;
                self.position = 1;
            } else {
                self.position -= 1;
            }
        } else if self.position + 1 >= width {
            self.backwards = true;
            self.position = width - 2;
        } else {
            self.position += 1;
        }
    }
}

/// What the timer thread remembers between ticks
struct Display {
    console: Console,
    goal: Option<u64>,
    width: usize,
    marker: Bounce,
    frame: usize,
    sampled: u64,
}

impl Display {
    fn redraw(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
        self.console.status(status_line(
            self.sampled,
            self.goal,
            self.width,
            self.marker.position(),
            SPINNER[self.frame],
        ));
        self.marker.advance(self.width);
    }
}

/// Owns the timer thread for one run
///
/// Stopping is deterministic: [`ProgressTracker::finish`] (or dropping the
/// tracker) joins the thread and clears the status line, after which the
/// tracker never writes to the console again.
pub struct ProgressTracker {
    counter: Arc<ProgressCounter>,
    console: Console,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTracker {
    /// Start reporting progress of `counter` towards `goal`
    ///
    /// # Errors
    /// Returns an I/O error if the timer thread cannot be spawned.
    pub fn start(
        counter: Arc<ProgressCounter>,
        goal: Option<u64>,
        console: Console,
        config: ProgressConfig,
    ) -> std::io::Result<Self> {
        let (stop, stopped) = mpsc::channel::<()>();
        let display = Display {
            console: console.clone(),
            goal,
            width: config.bar_width,
            marker: Bounce::default(),
            frame: 0,
            sampled: 0,
        };

        let sampler = Arc::clone(&counter);
        let handle = thread::Builder::new()
            .name("progress".to_string())
            .spawn(move || run_timer(&sampler, display, config, &stopped))?;

        log::trace!("progress tracker started (goal {goal:?})");
        Ok(Self {
            counter,
            console,
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Current aggregate count, read directly from the counter
    #[must_use]
    pub fn current_count(&self) -> u64 {
        self.counter.current_count()
    }

    /// Stop both timer tasks and return the final count
    #[must_use]
    pub fn finish(mut self) -> u64 {
        self.shutdown();
        self.counter.current_count()
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the timer thread immediately
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("progress thread panicked");
            }
            self.console.clear_status();
            log::trace!("progress tracker stopped");
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_timer(
    counter: &ProgressCounter,
    mut display: Display,
    config: ProgressConfig,
    stopped: &mpsc::Receiver<()>,
) {
    let start = Instant::now();
    let mut next_redraw = start;
    let mut next_sample = start + config.sample_delay;

    loop {
        let now = Instant::now();
        if now >= next_sample {
            display.sampled = counter.current_count();
            next_sample = next_tick(next_sample, config.sample_interval, now);
        }
        if now >= next_redraw {
            display.redraw();
            next_redraw = next_tick(next_redraw, config.redraw_interval, now);
        }

        let wait = next_redraw
            .min(next_sample)
            .saturating_duration_since(Instant::now());
        match stopped.recv_timeout(wait) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Next fixed-rate deadline after `now`, skipping ticks that were missed
fn next_tick(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let interval = interval.max(Duration::from_millis(1));
    let mut next = previous + interval;
    while next <= now {
        next += interval;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> ProgressConfig {
        ProgressConfig {
            redraw_interval: Duration::from_millis(5),
            sample_delay: Duration::from_millis(1),
            sample_interval: Duration::from_millis(10),
            bar_width: 10,
        }
    }

    #[test]
    fn bounce_turns_at_both_ends() {
        let mut bounce = Bounce::default();
        let mut path = vec![bounce.position()];
        for _ in 0..8 {
            bounce.advance(4);
            path.push(bounce.position());
        }
        assert_eq!(path, vec![0, 1, 2, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn bounce_on_tiny_bars() {
        let mut bounce = Bounce::default();
        bounce.advance(1);
        assert_eq!(bounce.position(), 0);
        bounce.advance(0);
        assert_eq!(bounce.position(), 0);

        bounce.advance(2);
        assert_eq!(bounce.position(), 1);
        bounce.advance(2);
        assert_eq!(bounce.position(), 0);
    }

    #[test]
    fn next_tick_skips_missed_deadlines() {
        let start = Instant::now();
        let interval = Duration::from_millis(10);
        let late = start + Duration::from_millis(35);
        assert_eq!(next_tick(start, interval, late), start + Duration::from_millis(40));
        assert_eq!(next_tick(start, interval, start), start + interval);
    }

    #[test]
    fn finish_returns_final_count() {
        let counter = Arc::new(ProgressCounter::default());
        let tracker = ProgressTracker::start(
            Arc::clone(&counter),
            Some(10),
            Console::silent(),
            fast_config(),
        )
        .unwrap();

        for _ in 0..10 {
            counter.increment();
        }
        assert_eq!(tracker.current_count(), 10);
        assert_eq!(tracker.finish(), 10);
    }

    #[test]
    fn redraws_while_running() {
        let counter = Arc::new(ProgressCounter::default());
        let tracker = ProgressTracker::start(
            Arc::clone(&counter),
            None,
            Console::silent(),
            fast_config(),
        )
        .unwrap();

        counter.increment();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(tracker.finish(), 1);
    }

    #[test]
    fn stop_is_prompt_with_long_intervals() {
        let config = ProgressConfig {
            redraw_interval: Duration::from_secs(3600),
            sample_delay: Duration::from_secs(3600),
            sample_interval: Duration::from_secs(3600),
            bar_width: 10,
        };
        let tracker = ProgressTracker::start(
            Arc::new(ProgressCounter::default()),
            Some(1),
            Console::silent(),
            config,
        )
        .unwrap();

        let begun = Instant::now();
        let _ = tracker.finish();
        assert!(begun.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn dropping_stops_the_thread() {
        let tracker = ProgressTracker::start(
            Arc::new(ProgressCounter::default()),
            None,
            Console::silent(),
            fast_config(),
        )
        .unwrap();
        drop(tracker);
    }
}
