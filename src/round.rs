//! Round timing: three shrinking phases, then `Finished`.
//!
//! The difficulty curve lives in one table, [`DIFFICULTY_CURVE`]: how long
//! each phase lasts and what a wrong button costs while it runs. The
//! [`RoundClock`] walks that table strictly in order, one entry at a time.

use embassy_time::{Duration, Instant};

/// Duration and wrong-button penalty of one phase.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseSpec {
    pub duration: Duration,
    pub penalty: i32,
}

impl PhaseSpec {
    const fn new(duration_ms: u64, penalty: i32) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            penalty,
        }
    }
}

/// Phases in play order: each is 5 s shorter and one point harsher than the last.
pub const DIFFICULTY_CURVE: [PhaseSpec; 3] = [
    PhaseSpec::new(15_000, 1),
    PhaseSpec::new(10_000, 2),
    PhaseSpec::new(5_000, 3),
];

/// One of the entries of [`DIFFICULTY_CURVE`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase(usize);

impl Phase {
    /// The 15-second opening phase.
    pub const FIRST: Self = Self(0);

    /// The table entry for this phase.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "Phase values are only built from in-range table positions"
    )]
    pub const fn spec(self) -> PhaseSpec {
        DIFFICULTY_CURVE[self.0]
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        self.spec().duration
    }

    #[must_use]
    pub const fn penalty(self) -> i32 {
        self.spec().penalty
    }

    /// 1-based position, for logs and screens.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "at most the table length")]
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    /// The phase that follows, or `None` after the last one.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "at most the table length")]
    pub const fn next(self) -> Option<Self> {
        if self.0 + 1 < DIFFICULTY_CURVE.len() {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

/// Penalty for a wrong button while a phase of `duration` is running.
///
/// A step function over the table: 15 s → 1, 10 s → 2, 5 s → 3. Durations
/// not in the table cost the harshest penalty.
#[must_use]
pub fn penalty_for(duration: Duration) -> i32 {
    DIFFICULTY_CURVE
        .iter()
        .find(|spec| spec.duration == duration)
        .or(DIFFICULTY_CURVE.last())
        .map_or(0, |spec| spec.penalty)
}

/// Where the round stands.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    Active(Phase),
    Finished,
}

/// What one [`RoundClock::poll`] found.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The current phase still has time left (or the round is already over).
    Running,
    /// The previous phase expired; this one has just begun.
    Advanced(Phase),
    /// The last phase expired.
    Finished,
}

/// The current phase and when it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundClock {
    phase: RoundPhase,
    phase_start: Instant,
}

impl RoundClock {
    /// Starts the first phase at `now`.
    #[must_use]
    pub const fn start(now: Instant) -> Self {
        Self {
            phase: RoundPhase::Active(Phase::FIRST),
            phase_start: now,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub const fn phase_start(&self) -> Instant {
        self.phase_start
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Finished)
    }

    /// Duration of the running phase, or `None` once finished.
    #[must_use]
    pub const fn current_duration(&self) -> Option<Duration> {
        match self.phase {
            RoundPhase::Active(phase) => Some(phase.duration()),
            RoundPhase::Finished => None,
        }
    }

    /// Time left in the running phase. A clock reading before `phase_start` counts as no time elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.current_duration().map_or(Duration::from_ticks(0), |duration| {
            let elapsed = now.saturating_duration_since(self.phase_start);
            duration.checked_sub(elapsed).unwrap_or(Duration::from_ticks(0))
        })
    }

    /// Checks for expiry; call once per tick.
    ///
    /// When the running phase has lasted its full duration the clock moves to the
    /// next phase (restarting at `now`) or to `Finished` after the last one.
    /// Callers that play the between-phase animation should follow an
    /// [`PhaseEvent::Advanced`] with [`RoundClock::restart`] once it completes.
    pub fn poll(&mut self, now: Instant) -> PhaseEvent {
        let RoundPhase::Active(phase) = self.phase else {
            return PhaseEvent::Running;
        };
        if now.saturating_duration_since(self.phase_start) < phase.duration() {
            return PhaseEvent::Running;
        }
        if let Some(next) = phase.next() {
            self.phase = RoundPhase::Active(next);
            self.phase_start = now;
            PhaseEvent::Advanced(next)
        } else {
            self.phase = RoundPhase::Finished;
            PhaseEvent::Finished
        }
    }

    /// Resets the start of the running phase to `now`.
    pub const fn restart(&mut self, now: Instant) {
        self.phase_start = now;
    }
}
