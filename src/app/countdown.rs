// src/app/countdown.rs

use std::time::Duration;
use web_time::Instant;

const TICK: Duration = Duration::from_secs(1);

/// Identifies one run of the countdown. A new token is issued on every reset,
/// so an expiry reported for an older token can be told apart and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Per-question countdown in whole seconds, advanced by polling with the current time.
#[derive(Clone, Debug)]
pub struct Countdown {
    token: TimerToken,
    remaining: u32,
    next_tick: Option<Instant>,
}

impl Countdown {
    pub fn start(seconds: u32, now: Instant) -> Self {
        Self {
            token: TimerToken(0),
            remaining: seconds,
            next_tick: Some(now + TICK),
        }
    }

    /// Starts over from `seconds` under a fresh token.
    pub fn reset(&mut self, seconds: u32, now: Instant) -> TimerToken {
        self.token = TimerToken(self.token.0 + 1);
        self.remaining = seconds;
        self.next_tick = Some(now + TICK);
        self.token
    }

    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn token(&self) -> TimerToken {
        self.token
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Applies every whole second elapsed up to `now`. Returns the token when
    /// the countdown hits zero; it stops ticking at that point.
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        let mut next = self.next_tick?;

        while now >= next && self.remaining > 0 {
            self.remaining -= 1;
            next += TICK;
        }

        if self.remaining == 0 {
            self.next_tick = None;
            return Some(self.token);
        }

        self.next_tick = Some(next);
        None
    }

    /// How long until the next tick, for scheduling a repaint.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|next| next.saturating_duration_since(now))
    }
}
