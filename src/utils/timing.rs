//! # Fixed Timestep
//!
//! Converts variable frame times into a whole number of fixed simulation ticks.

/// Accumulator that yields fixed-length ticks from real elapsed time.
///
/// # Examples
///
/// ```
/// use tilehop::FixedTimestep;
///
/// let mut timestep = FixedTimestep::new(60, 5);
/// assert_eq!(timestep.advance(1.0 / 30.0), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    /// Length of one tick in seconds
    pub step: f64,
    /// Most ticks a single frame may run
    pub max_ticks: u32,
    accumulator: f64,
}

impl FixedTimestep {
    /// Creates a timestep running `ticks_per_second` ticks.
    pub fn new(ticks_per_second: u32, max_ticks: u32) -> Self {
        Self {
            step: 1.0 / f64::from(ticks_per_second.max(1)),
            max_ticks,
            accumulator: 0.0,
        }
    }

    /// Adds `elapsed` seconds and returns how many ticks are now due.
    ///
    /// When a frame hits `max_ticks` the leftover time is dropped, so a long
    /// stall is followed by normal-speed play instead of a catch-up burst.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        // Small tolerance so a 1/60 s frame counts as a full tick despite rounding
        const EPSILON: f64 = 1e-9;

        self.accumulator += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulator + EPSILON >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks {
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);

        ticks
    }
}
