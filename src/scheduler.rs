//! Tick scheduler
//!
//! Converts a continuous time signal (one callback per animation frame)
//! into discrete `step()` invocations at the currently configured interval,
//! independent of the frame rate. The host keeps re-arming the callback;
//! this type only decides whether enough time has elapsed to step.

use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, StepEvent, step};

/// Linear interval mapping: level 1 is the slowest, level 10 the fastest.
/// Out-of-range levels are clamped.
pub fn interval_for_level(level: u8) -> f64 {
    let level = level.clamp(1, 10);
    let t = (level - 1) as f64 / 9.0;
    (MAX_INTERVAL_MS + (MIN_INTERVAL_MS - MAX_INTERVAL_MS) * t).round()
}

/// Drives the simulation at a configurable cadence from host timestamps
#[derive(Debug, Clone)]
pub struct TickScheduler {
    speed_level: u8,
    interval_ms: f64,
    /// Timestamp of the last step; None until the first signal arms it
    last_step_ms: Option<f64>,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_LEVEL)
    }
}

impl TickScheduler {
    pub fn new(speed_level: u8) -> Self {
        let speed_level = speed_level.clamp(1, 10);
        Self {
            speed_level,
            interval_ms: interval_for_level(speed_level),
            last_step_ms: None,
        }
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Change the speed level; takes effect on the next scheduling decision
    pub fn set_speed_level(&mut self, level: u8) {
        let level = level.clamp(1, 10);
        self.speed_level = level;
        self.interval_ms = interval_for_level(level);
        log::debug!("speed level {} -> interval {}ms", level, self.interval_ms);
    }

    /// Forget the elapsed-time accounting (call on game reset)
    pub fn rearm(&mut self) {
        self.last_step_ms = None;
    }

    /// Handle one time signal with timestamp `now_ms` (milliseconds).
    ///
    /// Steps at most once per signal, and only when the game is Running and
    /// the configured interval has elapsed since the previous step. While
    /// Paused the reference timestamp slides forward so accumulated pause
    /// time is discarded rather than replayed as queued steps on resume.
    pub fn on_time_signal(
        &mut self,
        now_ms: f64,
        state: &mut GameState,
        rng: &mut Pcg32,
    ) -> StepEvent {
        match state.phase {
            GamePhase::Paused => {
                self.last_step_ms = Some(now_ms);
                return StepEvent::Idle;
            }
            GamePhase::Running => {}
            // Ready and terminal phases never advance; being signalled
            // after game over is harmless.
            _ => return StepEvent::Idle,
        }

        let last = match self.last_step_ms {
            Some(t) => t,
            None => {
                self.last_step_ms = Some(now_ms);
                return StepEvent::Idle;
            }
        };

        if now_ms - last >= self.interval_ms {
            self.last_step_ms = Some(now_ms);
            step(state, rng)
        } else {
            StepEvent::Idle
        }
    }
}
