use std::time::{Duration, Instant};

/// Interval gate for one tick track (snake or predator).
///
/// `fire` accepts at most one tick per interval; missed intervals are
/// dropped, never queued, so a stalled frame loop resumes at the normal
/// rate instead of bursting to catch up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    /// Begin a fresh track: the first tick fires one full interval from `now`
    pub fn restart(&mut self, now: Instant) {
        self.last_fire = Some(now);
    }

    /// Returns true if a tick is due, advancing the track's last-fire mark
    pub fn fire(&mut self, now: Instant) -> bool {
        let due = match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };
        if due {
            self.last_fire = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(250);

    #[test]
    fn test_unstarted_track_fires_immediately() {
        let mut cadence = Cadence::new(INTERVAL);
        let now = Instant::now();
        assert!(cadence.fire(now));
        assert!(!cadence.fire(now));
    }

    #[test]
    fn test_restarted_track_waits_a_full_interval() {
        let mut cadence = Cadence::new(INTERVAL);
        let start = Instant::now();
        cadence.restart(start);

        assert!(!cadence.fire(start));
        assert!(!cadence.fire(start + INTERVAL / 2));
        assert!(cadence.fire(start + INTERVAL));
    }

    #[test]
    fn test_at_most_once_per_interval() {
        let mut cadence = Cadence::new(INTERVAL);
        let start = Instant::now();
        cadence.restart(start);

        assert!(cadence.fire(start + INTERVAL));
        assert!(!cadence.fire(start + INTERVAL));
        assert!(!cadence.fire(start + INTERVAL + INTERVAL / 2));
        assert!(cadence.fire(start + INTERVAL * 2));
    }

    #[test]
    fn test_missed_intervals_are_dropped() {
        let mut cadence = Cadence::new(INTERVAL);
        let start = Instant::now();
        cadence.restart(start);

        // Three intervals pass unobserved; only one tick is owed
        let late = start + INTERVAL * 3;
        assert!(cadence.fire(late));
        assert!(!cadence.fire(late + INTERVAL / 2));
        assert!(cadence.fire(late + INTERVAL));
    }

    #[test]
    fn test_tracks_are_independent() {
        let mut snake = Cadence::new(Duration::from_millis(250));
        let mut predator = Cadence::new(Duration::from_millis(500));
        let start = Instant::now();
        snake.restart(start);
        predator.restart(start);

        let quarter = start + Duration::from_millis(250);
        assert!(snake.fire(quarter));
        assert!(!predator.fire(quarter));

        let half = start + Duration::from_millis(500);
        assert!(snake.fire(half));
        assert!(predator.fire(half));
    }
}
