//! Campaign countdown.
//!
//! `Countdown` is a two-state machine (running, expired) recomputed from
//! wall-clock time on every tick. `Countdown::spawn` drives it once a second
//! on a tokio interval; the returned `CountdownHandle` aborts the ticker when
//! dropped, and the ticker stops by itself once the target is reached.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

const TICK: Duration = Duration::from_secs(1);

const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Source of the current time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time left until the target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a millisecond delta into days/hours/minutes/seconds.
    /// Zero or negative deltas give all-zero fields.
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::ZERO;
        }

        let total_seconds = delta_ms as u64 / MS_PER_SECOND;
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CountdownState {
    Running(Remaining),
    Expired,
}

impl CountdownState {
    pub fn remaining(&self) -> Remaining {
        match self {
            CountdownState::Running(remaining) => *remaining,
            CountdownState::Expired => Remaining::ZERO,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }
}

#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    state: CountdownState,
}

impl Countdown {
    /// Start a countdown, computing the first state from `now`.
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut countdown = Self {
            target,
            state: CountdownState::Running(Remaining::ZERO),
        };
        countdown.tick(now);
        countdown
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining(&self) -> Remaining {
        self.state.remaining()
    }

    pub fn is_expired(&self) -> bool {
        self.state.is_expired()
    }

    /// Recompute from `now`. Coming within one second of the target (or
    /// passing it) expires the countdown for good, so an all-zero running
    /// state is never shown; later ticks leave it expired.
    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownState {
        if self.state.is_expired() {
            return self.state;
        }

        let delta_ms = (self.target - now).num_milliseconds();
        self.state = if delta_ms < MS_PER_SECOND as i64 {
            CountdownState::Expired
        } else {
            CountdownState::Running(Remaining::from_millis(delta_ms))
        };
        self.state
    }

    /// Drive a countdown once per second on the current tokio runtime.
    pub fn spawn<C: Clock>(target: DateTime<Utc>, clock: C) -> CountdownHandle {
        let mut countdown = Countdown::new(target, clock.now());
        let (tx, rx) = watch::channel(countdown.state());

        let task = tokio::spawn(async move {
            if countdown.is_expired() {
                debug!("Countdown target {} already passed", target);
                return;
            }

            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                let state = countdown.tick(clock.now());
                if tx.send(state).is_err() {
                    break;
                }
                if state.is_expired() {
                    info!("Countdown reached {}", target);
                    break;
                }
            }
        });

        CountdownHandle { state: rx, task }
    }
}

/// Live view of a spawned countdown. Dropping it stops the ticker.
#[derive(Debug)]
pub struct CountdownHandle {
    state: watch::Receiver<CountdownState>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Latest published state.
    pub fn current(&self) -> CountdownState {
        *self.state.borrow()
    }

    /// Receiver notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state.clone()
    }

    /// True once the ticker has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
