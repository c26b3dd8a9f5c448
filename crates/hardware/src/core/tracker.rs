//! Completion Tracker.
//!
//! A small state machine that counts ticks since a multiply was accepted and
//! raises `result_valid` on the tick the final reduction layer becomes ready.
//! It also gates the input latch: a start is only accepted while idle.
//!
//! Transitions are evaluated in priority order each tick:
//! 1. Reset: go idle, drop valid, clear the counter.
//! 2. Busy with `counter == latency - 1`: pulse valid and go idle.
//! 3. Idle with start: go busy, counter = 0.
//! 4. Busy: increment the counter.
//! 5. Idle without start: hold.
//!
//! Only one multiply occupies the pipeline; a start seen while busy is
//! ignored.

/// Externally observable phase of the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No multiply in flight.
    Idle,
    /// A multiply is in flight.
    Running {
        /// Ticks since the accepting tick, starting at 0.
        cycle: u32,
    },
    /// Idle, with the valid pulse raised on this tick.
    Done,
}

/// What the tracker did on one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Reset was asserted; `aborted` is true if a multiply was in flight.
    Reset {
        /// A multiply was abandoned.
        aborted: bool,
    },
    /// The multiply in flight completed; valid pulses on this tick.
    Completed {
        /// A start was requested on this tick and ignored.
        start_ignored: bool,
    },
    /// A new multiply was accepted; the latch and layer 0 load on this tick.
    Accepted,
    /// The multiply in flight advanced one layer.
    Advanced {
        /// A start was requested on this tick and ignored.
        start_ignored: bool,
    },
    /// Nothing in flight and no start requested.
    Idle,
}

impl TrackerEvent {
    /// True if this event loads a new multiply.
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// True if a start request was dropped because the pipeline was busy.
    pub const fn start_ignored(self) -> bool {
        matches!(
            self,
            Self::Completed {
                start_ignored: true
            } | Self::Advanced {
                start_ignored: true
            }
        )
    }
}

/// Busy flag, cycle counter, and registered valid flag.
#[derive(Clone, Copy, Debug)]
pub struct CompletionTracker {
    latency: u32,
    busy: bool,
    counter: u32,
    valid: bool,
}

impl CompletionTracker {
    /// Creates an idle tracker that completes `latency` ticks after a start.
    ///
    /// `latency` is clamped to at least one tick.
    pub const fn new(latency: u32) -> Self {
        Self {
            latency: if latency == 0 { 1 } else { latency },
            busy: false,
            counter: 0,
            valid: false,
        }
    }

    /// Evaluates one tick and returns what happened.
    pub const fn step(&mut self, reset: bool, start: bool) -> TrackerEvent {
        if reset {
            let aborted = self.busy;
            self.busy = false;
            self.valid = false;
            self.counter = 0;
            return TrackerEvent::Reset { aborted };
        }

        if self.busy && self.counter == self.latency - 1 {
            self.valid = true;
            self.busy = false;
            self.counter = 0;
            return TrackerEvent::Completed {
                start_ignored: start,
            };
        }

        self.valid = false;

        if !self.busy && start {
            self.busy = true;
            self.counter = 0;
            return TrackerEvent::Accepted;
        }

        if self.busy {
            self.counter += 1;
            return TrackerEvent::Advanced {
                start_ignored: start,
            };
        }

        TrackerEvent::Idle
    }

    /// True while a multiply occupies the pipeline.
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Registered valid flag.
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// Ticks counted since the current multiply was accepted.
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Ticks from accepted start to valid.
    pub const fn latency(&self) -> u32 {
        self.latency
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        if self.busy {
            Phase::Running {
                cycle: self.counter,
            }
        } else if self.valid {
            Phase::Done
        } else {
            Phase::Idle
        }
    }
}
