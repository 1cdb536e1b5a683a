use log::{debug, info};
use rand::Rng;

use crate::picking::PickResult;
use crate::scene::BubblePool;

pub const DEFAULT_SESSION_SECONDS: u32 = 60;

/// One-shot notification emitted when the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Finished { final_score: u32 },
}

/// Score and countdown state for one play session.
///
/// Two states only: Active and Over. Once over, the session is terminal and
/// every mutation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub score: u32,
    pub remaining_seconds: u32,
    pub is_over: bool,
}

impl GameSession {
    pub fn new(seconds: u32) -> Self {
        Self {
            score: 0,
            remaining_seconds: seconds,
            is_over: false,
        }
    }

    /// A click or touch-move landed while the pointer ray intersects a
    /// bubble: hide it, score it, refill the pool with a replacement.
    ///
    /// Returns true when a bubble was actually popped. A stale pick whose
    /// bubble is already hidden scores nothing.
    pub fn on_trigger(
        &mut self,
        pick: PickResult,
        bubbles: &mut BubblePool,
        rng: &mut impl Rng,
    ) -> bool {
        if self.is_over {
            return false;
        }
        let Some(hit) = pick.hit else {
            return false;
        };
        if !bubbles.pop(hit.id) {
            return false;
        }

        self.score += 1;
        // Constant-pool-size policy: every pop spawns a replacement.
        bubbles.respawn(hit.id, rng);
        debug!("popped bubble {} (score {})", hit.id, self.score);
        true
    }

    /// One countdown tick. Flips the session to Over exactly on the tick
    /// that reaches zero and reports the final score once.
    pub fn on_tick(&mut self) -> Option<SessionEvent> {
        if self.is_over {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.is_over = true;
            info!("session over, final score {}", self.score);
            return Some(SessionEvent::Finished {
                final_score: self.score,
            });
        }
        None
    }
}

/// 1 Hz tick source driven by frame deltas.
///
/// Stopping is one-way; a finished session can never receive another tick
/// from the same clock. A new session gets a new clock.
#[derive(Debug, Clone, Copy)]
pub struct SecondsClock {
    accumulator: f32,
    active: bool,
}

impl SecondsClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance by a frame delta, returning how many whole seconds elapsed.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.accumulator += delta;
        let ticks = self.accumulator.floor() as u32;
        self.accumulator -= ticks as f32;
        ticks
    }
}

impl Default for SecondsClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the live session and its tick source.
///
/// The clock is stopped exactly once, on the tick that ends the session, and
/// restarting replaces both so no stale tick source survives a reset.
#[derive(Debug, Clone, Copy)]
pub struct PopGame {
    pub session: GameSession,
    clock: SecondsClock,
    duration_seconds: u32,
}

impl PopGame {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            session: GameSession::new(duration_seconds),
            clock: SecondsClock::new(),
            duration_seconds,
        }
    }

    /// Per-frame countdown driver. Emits the terminal event at most once
    /// over the whole session lifetime.
    pub fn advance(&mut self, delta: f32) -> Option<SessionEvent> {
        for _ in 0..self.clock.advance(delta) {
            if let Some(event) = self.session.on_tick() {
                self.clock.stop();
                return Some(event);
            }
        }
        None
    }

    pub fn trigger(
        &mut self,
        pick: PickResult,
        bubbles: &mut BubblePool,
        rng: &mut impl Rng,
    ) -> bool {
        self.session.on_trigger(pick, bubbles, rng)
    }

    /// Full reset: fresh session, fresh clock, fresh pool.
    pub fn restart(&mut self, bubbles: &mut BubblePool, rng: &mut impl Rng) {
        info!("restarting session ({} s)", self.duration_seconds);
        self.session = GameSession::new(self.duration_seconds);
        self.clock = SecondsClock::new();
        bubbles.reset(rng);
    }
}
