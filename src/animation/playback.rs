use crate::constants::CYCLE_DURATION_MS;
use std::time::Duration;

/// Playback cursor over a precomputed frame sequence.
///
/// The cursor lives in `[0, frame_count)` and wraps modulo the frame count;
/// the loop count is unbounded. Advancing is driven by an external timer
/// (the event loop's interval tick), which keeps the animation state
/// independent of any particular rendering backend.
#[derive(Debug, Clone)]
pub struct Playback {
    cursor: usize,
    frame_count: usize,
}

impl Playback {
    /// Creates a playback cursor at frame zero.
    ///
    /// A frame count of zero is treated as one; the owning cache rejects
    /// zero before this point, so the clamp only guards direct construction.
    pub fn new(frame_count: usize) -> Self {
        Self {
            cursor: 0,
            frame_count: frame_count.max(1),
        }
    }

    /// Current frame index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of discrete steps in one full cycle.
    #[allow(dead_code)] // Used in tests
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Advances the cursor by one step, wrapping at the end of the cycle,
    /// and returns the new frame index. Every advance requires a redraw of
    /// the attached surface.
    pub fn tick(&mut self) -> usize {
        self.cursor = (self.cursor + 1) % self.frame_count;
        self.cursor
    }

    /// Interval between steps so that one full cycle takes
    /// [`CYCLE_DURATION_MS`] regardless of the frame count.
    pub fn tick_interval(frame_count: usize) -> Duration {
        Duration::from_nanos(CYCLE_DURATION_MS * 1_000_000 / frame_count.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_closure_over_one_period() {
        // After exactly F ticks the cursor must equal its starting value
        for frame_count in [1, 2, 5, 30, 36] {
            let mut playback = Playback::new(frame_count);
            let before = playback.cursor();
            for _ in 0..frame_count {
                playback.tick();
            }
            assert_eq!(
                playback.cursor(),
                before,
                "cycle of {frame_count} frames did not close"
            );
        }
    }

    #[test]
    fn test_tick_advances_by_one_and_wraps() {
        let mut playback = Playback::new(4);
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.tick(), 1);
        assert_eq!(playback.tick(), 2);
        assert_eq!(playback.tick(), 3);
        assert_eq!(playback.tick(), 0, "cursor should wrap modulo frame count");
    }

    #[test]
    fn test_full_cycle_duration_is_preserved() {
        // 36 frames at a 1000ms cycle: each tick is ~27.8ms and a full
        // cycle of 36 ticks lands back on ~1 second
        let interval = Playback::tick_interval(36);
        let cycle = interval * 36;
        let target = Duration::from_millis(CYCLE_DURATION_MS);
        let drift = if cycle > target {
            cycle - target
        } else {
            target - cycle
        };
        assert!(drift < Duration::from_micros(100), "cycle drift {drift:?}");
    }

    #[test]
    fn test_zero_frame_count_clamps_to_one() {
        let mut playback = Playback::new(0);
        assert_eq!(playback.frame_count(), 1);
        assert_eq!(playback.tick(), 0);
        assert_eq!(Playback::tick_interval(0), Duration::from_millis(CYCLE_DURATION_MS));
    }
}
