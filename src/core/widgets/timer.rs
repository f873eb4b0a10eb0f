//! Countdown timer.
//!
//! `Running(remaining)` counts down by one `interval` per tick and goes idle
//! when it hits zero. Each `start` opens a new tick generation, so ticks left
//! over from a previous run are ignored instead of doubling the pace.

use std::time::Duration;

use crate::core::action::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub remaining: Duration,
    pub running: bool,
    pub interval: Duration,
    pub generation: u64,
}

impl TimerState {
    /// An idle timer with nothing left on the clock.
    pub fn new(interval: Duration) -> Self {
        Self {
            remaining: Duration::ZERO,
            running: false,
            interval,
            generation: 0,
        }
    }

    /// Restart the countdown from `duration`.
    ///
    /// Returns the tick to schedule, or `None` for a zero duration.
    pub fn start(mut self, duration: Duration) -> (Self, Option<Command>) {
        self.generation += 1;
        self.remaining = duration;
        self.running = !duration.is_zero();
        let cmd = self.running.then(|| self.tick_command());
        (self, cmd)
    }

    /// Handle a `TimerFired` for `generation`.
    pub fn tick(mut self, generation: u64) -> (Self, Option<Command>) {
        if !self.running || generation != self.generation {
            return (self, None);
        }
        self.remaining = self.remaining.saturating_sub(self.interval);
        if self.remaining.is_zero() {
            self.running = false;
            return (self, None);
        }
        let cmd = self.tick_command();
        (self, Some(cmd))
    }

    pub fn timed_out(&self) -> bool {
        !self.running && self.remaining.is_zero()
    }

    fn tick_command(&self) -> Command {
        Command::StartTimerTick {
            interval: self.interval,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_start_emits_tick() {
        let (timer, cmd) = TimerState::new(SEC).start(Duration::from_secs(3));
        assert!(timer.running);
        assert_eq!(timer.remaining, Duration::from_secs(3));
        assert_eq!(
            cmd,
            Some(Command::StartTimerTick {
                interval: SEC,
                generation: 1
            })
        );
    }

    #[test]
    fn test_counts_down_to_idle() {
        let (mut timer, _) = TimerState::new(SEC).start(Duration::from_secs(3));
        let generation = timer.generation;

        let mut ticks = 0;
        loop {
            let before = timer.remaining;
            let (next, cmd) = timer.tick(generation);
            assert!(next.remaining < before);
            timer = next;
            ticks += 1;
            if cmd.is_none() {
                break;
            }
        }

        assert_eq!(ticks, 3);
        assert!(timer.timed_out());

        // Idle timer ignores further ticks
        let (after, cmd) = timer.clone().tick(generation);
        assert_eq!(after, timer);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_uneven_interval_saturates_at_zero() {
        let (timer, _) =
            TimerState::new(Duration::from_millis(400)).start(Duration::from_millis(500));
        let g = timer.generation;
        let (timer, cmd) = timer.tick(g);
        assert_eq!(timer.remaining, Duration::from_millis(100));
        assert!(cmd.is_some());
        let (timer, cmd) = timer.tick(g);
        assert_eq!(timer.remaining, Duration::ZERO);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_stale_generation_ignored() {
        let (timer, _) = TimerState::new(SEC).start(Duration::from_secs(10));
        let stale = timer.generation;
        let (timer, _) = timer.start(Duration::from_secs(10));

        let (after, cmd) = timer.clone().tick(stale);
        assert_eq!(after, timer);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_zero_duration_does_not_run() {
        let (timer, cmd) = TimerState::new(SEC).start(Duration::ZERO);
        assert!(!timer.running);
        assert!(cmd.is_none());
    }
}
