//! Fixed-timestep driver.
//!
//! Real time is poured into an accumulator every frame and drained in whole
//! tick intervals, so the snake moves at the same speed whatever the frame
//! rate. Durations are integer nanoseconds: deltas that add up to
//! `n * interval` always yield exactly `n` ticks, however they are chunked.

use std::time::{Duration, Instant};

use super::config::GameConfig;

/// What the tick callback wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    /// The game ended during this tick; run no more ticks
    Halt,
}

/// Controller-level run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Over,
}

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: Duration,
    accumulator: Duration,
    max_catch_up: Option<u32>,
    state: LoopState,
}

impl FixedTimestep {
    pub fn new(interval: Duration, max_catch_up: Option<u32>) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
            max_catch_up,
            state: LoopState::Running,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.tick_interval(), config.max_catch_up_ticks)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == LoopState::Over
    }

    /// Add elapsed real time.
    ///
    /// With a catch-up cap the accumulator never holds more than `cap`
    /// intervals; time beyond that (a suspended process, a debugger pause)
    /// is dropped rather than replayed as a burst of moves.
    pub fn accumulate(&mut self, delta: Duration) {
        self.accumulator = self.accumulator.saturating_add(delta);

        if let Some(cap) = self.max_catch_up {
            let limit = self.interval.saturating_mul(cap);
            if self.accumulator > limit {
                tracing::debug!(
                    dropped_ms = (self.accumulator - limit).as_millis() as u64,
                    "clamped catch-up ticks"
                );
                self.accumulator = limit;
            }
        }
    }

    /// Run `tick` once per whole interval held in the accumulator.
    ///
    /// Returns the number of ticks run. Once a tick answers
    /// [`TickFlow::Halt`] the loop is over: the remainder stays in the
    /// accumulator but no further ticks run.
    pub fn run_pending<F>(&mut self, mut tick: F) -> u32
    where
        F: FnMut() -> TickFlow,
    {
        let mut ran = 0;

        while self.state == LoopState::Running && self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            ran += 1;

            if tick() == TickFlow::Halt {
                self.state = LoopState::Over;
            }
        }

        ran
    }

    /// Accumulate `delta` and run whatever ticks are owed
    pub fn advance<F>(&mut self, delta: Duration, tick: F) -> u32
    where
        F: FnMut() -> TickFlow,
    {
        self.accumulate(delta);
        self.run_pending(tick)
    }
}

/// Measures wall time between loop iterations
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous lap (or construction)
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn count_ticks(timestep: &mut FixedTimestep, deltas: &[Duration]) -> u32 {
        let mut ticks = 0;
        for delta in deltas {
            timestep.advance(*delta, || {
                ticks += 1;
                TickFlow::Continue
            });
        }
        ticks
    }

    #[test]
    fn test_no_tick_before_interval() {
        let mut timestep = FixedTimestep::new(TICK, None);
        let ran = timestep.advance(Duration::from_millis(99), || TickFlow::Continue);
        assert_eq!(ran, 0);
        assert_eq!(timestep.accumulator(), Duration::from_millis(99));
    }

    #[test]
    fn test_chunking_does_not_change_tick_count() {
        let n = 12;

        let mut one_big = FixedTimestep::new(TICK, None);
        assert_eq!(count_ticks(&mut one_big, &[TICK * n]), n);

        let mut even = FixedTimestep::new(TICK, None);
        assert_eq!(count_ticks(&mut even, &vec![TICK; n as usize]), n);

        // Uneven chunks summing to the same total
        let mut uneven = FixedTimestep::new(TICK, None);
        let mut deltas = vec![Duration::from_millis(37); 20];
        deltas.push(TICK * n - Duration::from_millis(37) * 20);
        assert_eq!(count_ticks(&mut uneven, &deltas), n);

        assert_eq!(one_big.accumulator(), Duration::ZERO);
        assert_eq!(uneven.accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_non_round_interval_is_exact() {
        let config = GameConfig {
            ticks_per_second: 6,
            max_catch_up_ticks: None,
            ..Default::default()
        };
        let interval = config.tick_interval();

        let mut big = FixedTimestep::from_config(&config);
        let mut small = FixedTimestep::from_config(&config);
        assert_eq!(count_ticks(&mut big, &[interval * 30]), 30);
        assert_eq!(count_ticks(&mut small, &vec![interval; 30]), 30);
    }

    #[test]
    fn test_remainder_carries_forward() {
        let mut timestep = FixedTimestep::new(TICK, None);
        assert_eq!(count_ticks(&mut timestep, &[Duration::from_millis(250)]), 2);
        assert_eq!(timestep.accumulator(), Duration::from_millis(50));

        assert_eq!(count_ticks(&mut timestep, &[Duration::from_millis(50)]), 1);
        assert_eq!(timestep.accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_halt_stops_ticks_and_keeps_remainder() {
        let mut timestep = FixedTimestep::new(TICK, None);
        let mut calls = 0;

        let ran = timestep.advance(TICK * 5, || {
            calls += 1;
            if calls == 2 {
                TickFlow::Halt
            } else {
                TickFlow::Continue
            }
        });

        assert_eq!(ran, 2);
        assert!(timestep.is_over());
        assert_eq!(timestep.accumulator(), TICK * 3);

        let ran = timestep.advance(TICK, || TickFlow::Continue);
        assert_eq!(ran, 0);
        assert_eq!(timestep.accumulator(), TICK * 4);
    }

    #[test]
    fn test_catch_up_cap() {
        let mut timestep = FixedTimestep::new(TICK, Some(3));
        let ran = timestep.advance(Duration::from_secs(60), || TickFlow::Continue);
        assert_eq!(ran, 3);
        assert_eq!(timestep.accumulator(), Duration::ZERO);

        // Below the cap nothing is dropped
        let ran = timestep.advance(Duration::from_millis(250), || TickFlow::Continue);
        assert_eq!(ran, 2);
        assert_eq!(timestep.accumulator(), Duration::from_millis(50));
    }

    #[test]
    fn test_frame_clock_is_monotonic() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let first = clock.lap();
        assert!(first >= Duration::from_millis(5));

        let second = clock.lap();
        assert!(second < first + Duration::from_secs(1));
    }
}
