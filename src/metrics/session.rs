use std::time::{Duration, Instant};

use crate::game::Outcome;

/// Counters for the current terminal session, across runs
pub struct SessionMetrics {
    pub run_start: Instant,
    pub elapsed_time: Duration,
    pub runs_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub fastest_win: Option<Duration>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            run_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            runs_played: 0,
            wins: 0,
            losses: 0,
            fastest_win: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.run_start.elapsed();
    }

    pub fn on_run_start(&mut self) {
        self.run_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_outcome(&mut self, outcome: Outcome) {
        self.runs_played += 1;
        match outcome {
            Outcome::Won => {
                self.wins += 1;
                let run_time = self.run_start.elapsed();
                if self.fastest_win.is_none_or(|best| run_time < best) {
                    self.fastest_win = Some(run_time);
                }
            }
            Outcome::Lost => self.losses += 1,
        }
    }

    pub fn format_time(&self) -> String {
        Self::format_duration(self.elapsed_time)
    }

    pub fn format_fastest_win(&self) -> Option<String> {
        self.fastest_win.map(Self::format_duration)
    }

    fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
