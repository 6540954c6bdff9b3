//! Drop clock - turns elapsed host time into gravity ticks
//!
//! The engine does not own a timer. The host keeps a `DropClock`, feeds it the
//! time elapsed since the last frame together with the engine's current drop
//! interval, and calls [`GameState::tick`](crate::GameState::tick) once for every
//! tick it reports due.

/// Accumulates elapsed milliseconds against a drop interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropClock {
    elapsed_ms: u32,
}

impl DropClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms` and return how many ticks are now due
    ///
    /// An inert interval (`None`) means gravity is suspended: nothing is due
    /// and the accumulator restarts, so resuming waits a full interval.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: Option<u32>) -> u32 {
        let Some(interval) = interval_ms.filter(|&ms| ms > 0) else {
            self.elapsed_ms = 0;
            return 0;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / interval;
        self.elapsed_ms %= interval;
        due
    }

    /// Time accumulated towards the next tick
    pub fn pending_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Drop any partial interval (after a reset, for example)
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_until_interval() {
        let mut clock = DropClock::new();
        assert_eq!(clock.advance(600, Some(1000)), 0);
        assert_eq!(clock.pending_ms(), 600);
        assert_eq!(clock.advance(600, Some(1000)), 1);
        assert_eq!(clock.pending_ms(), 200);
    }

    #[test]
    fn test_long_frame_yields_several_ticks() {
        let mut clock = DropClock::new();
        assert_eq!(clock.advance(3500, Some(1000)), 3);
        assert_eq!(clock.pending_ms(), 500);
    }

    #[test]
    fn test_inert_interval_suspends_and_restarts() {
        let mut clock = DropClock::new();
        clock.advance(900, Some(1000));
        assert_eq!(clock.advance(5000, None), 0);
        assert_eq!(clock.pending_ms(), 0);
        assert_eq!(clock.advance(999, Some(1000)), 0);
        assert_eq!(clock.advance(1, Some(1000)), 1);
    }

    #[test]
    fn test_restart() {
        let mut clock = DropClock::new();
        clock.advance(700, Some(1000));
        clock.restart();
        assert_eq!(clock.advance(700, Some(1000)), 0);
    }
}
