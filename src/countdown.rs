//! Countdown
//!
//! Remaining time to the event, decomposed into zero-padded fields.

use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Minimum two digits, never truncated
pub fn pad(n: i64) -> String {
    format!("{:02}", n)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::zero()
    }
}

impl Countdown {
    pub fn zero() -> Self {
        Self {
            days: pad(0),
            hours: pad(0),
            minutes: pad(0),
            seconds: pad(0),
        }
    }

    /// Non-positive input clamps to all zeros
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::zero();
        }
        Self {
            days: pad(remaining_ms / MS_PER_DAY),
            hours: pad((remaining_ms % MS_PER_DAY) / MS_PER_HOUR),
            minutes: pad((remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE),
            seconds: pad((remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Running(Countdown),
    Finished,
}

pub fn tick(target_ms: i64, now_ms: i64) -> Tick {
    let remaining = target_ms - now_ms;
    if remaining <= 0 {
        Tick::Finished
    } else {
        Tick::Running(Countdown::from_remaining_ms(remaining))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Active,
    Finished,
    Stopped,
}

/// State behind the periodic countdown callback.
///
/// Once the target passes the task emits zeros one last time and goes
/// quiet; `stop` (teardown) silences it immediately. Neither transition is
/// ever undone.
#[derive(Debug, Clone)]
pub struct CountdownTask {
    target_ms: i64,
    state: TaskState,
}

impl CountdownTask {
    pub fn new(target_ms: i64) -> Self {
        Self {
            target_ms,
            state: TaskState::Active,
        }
    }

    /// Value to display for this tick, `None` once the task is done
    pub fn on_tick(&mut self, now_ms: i64) -> Option<Countdown> {
        if self.state != TaskState::Active {
            return None;
        }
        match tick(self.target_ms, now_ms) {
            Tick::Running(countdown) => Some(countdown),
            Tick::Finished => {
                self.state = TaskState::Finished;
                Some(Countdown::zero())
            }
        }
    }

    pub fn stop(&mut self) {
        self.state = TaskState::Stopped;
    }

    pub fn is_active(&self) -> bool {
        self.state == TaskState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: i64 = 1_773_061_200_000;

    fn total_seconds(c: &Countdown) -> i64 {
        let field = |s: &str| s.parse::<i64>().unwrap();
        field(&c.days) * 86_400 + field(&c.hours) * 3_600 + field(&c.minutes) * 60 + field(&c.seconds)
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(0), "00");
        assert_eq!(pad(7), "07");
        assert_eq!(pad(42), "42");
        assert_eq!(pad(365), "365");
    }

    #[test]
    fn test_decomposition() {
        let ms = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        let c = Countdown::from_remaining_ms(ms);
        assert_eq!(c.days, "02");
        assert_eq!(c.hours, "03");
        assert_eq!(c.minutes, "04");
        assert_eq!(c.seconds, "05");
    }

    #[test]
    fn test_days_beyond_two_digits() {
        let c = Countdown::from_remaining_ms(150 * MS_PER_DAY + 1);
        assert_eq!(c.days, "150");
        assert_eq!(c.hours, "00");
    }

    #[test]
    fn test_sum_matches_floor_of_remaining() {
        let mut now = TARGET - 400 * MS_PER_DAY;
        while now < TARGET {
            let Tick::Running(c) = tick(TARGET, now) else {
                panic!("expected running countdown at {}", now);
            };
            assert_eq!(total_seconds(&c), (TARGET - now) / 1000);
            for field in [&c.days, &c.hours, &c.minutes, &c.seconds] {
                assert!(field.len() >= 2);
                assert!(!field.starts_with('-'));
            }
            now += 7_919_317;
        }
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        assert_eq!(tick(TARGET, TARGET), Tick::Finished);
        assert_eq!(tick(TARGET, TARGET + 5_000), Tick::Finished);
        assert!(Countdown::from_remaining_ms(-1).is_zero());
    }

    #[test]
    fn test_task_finishes_once_and_stays_finished() {
        let mut task = CountdownTask::new(TARGET);
        assert!(task.on_tick(TARGET - 1_500).is_some());
        assert_eq!(task.on_tick(TARGET + 10), Some(Countdown::zero()));
        assert!(!task.is_active());
        assert_eq!(task.on_tick(TARGET + 1_010), None);
        // Clock stepping backwards does not revive it
        assert_eq!(task.on_tick(TARGET - 60_000), None);
    }

    #[test]
    fn test_stop_before_target_prevents_further_ticks() {
        let mut task = CountdownTask::new(TARGET);
        assert!(task.on_tick(TARGET - 10 * MS_PER_DAY).is_some());
        task.stop();
        assert!(!task.is_active());
        assert_eq!(task.on_tick(TARGET - 10 * MS_PER_DAY + 1_000), None);
    }
}
