use std::time::{Duration, Instant};

/// Timestamp taken at the top of a frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameStart {
    t0: Instant,
}

/// Fixed-rate frame pacer.
///
/// The loop never skips work and never catches up: a frame that overruns
/// its budget simply proceeds into the next one without sleeping. The
/// end-of-frame sleep is unconditional and runs to completion; a close
/// request is only observed at the top of the next iteration.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    frame_index: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        debug_assert!(target_fps > 0);
        Self {
            target: Duration::from_secs_f64(1.0 / target_fps as f64),
            frame_index: 0,
        }
    }

    /// Target duration of one frame.
    #[inline]
    pub fn target(&self) -> Duration {
        self.target
    }

    /// Monotonic count of completed frames.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Marks the top of a frame.
    #[inline]
    pub fn begin(&self) -> FrameStart {
        FrameStart { t0: Instant::now() }
    }

    /// Sleeps off whatever remains of the frame budget, then counts the
    /// frame. Returns immediately when the frame overran its budget.
    pub fn pace(&mut self, start: FrameStart) {
        if let Some(remaining) = sleep_budget(self.target, start.t0.elapsed()) {
            std::thread::sleep(remaining);
        }

        self.frame_index = self.frame_index.wrapping_add(1);
    }
}

/// Time left in the frame budget, or `None` when the frame overran it.
#[inline]
pub fn sleep_budget(target: Duration, elapsed: Duration) -> Option<Duration> {
    target.checked_sub(elapsed).filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_remainder_when_under_target() {
        let budget = sleep_budget(Duration::from_millis(16), Duration::from_millis(4));
        assert_eq!(budget, Some(Duration::from_millis(12)));
    }

    #[test]
    fn no_budget_when_frame_overruns() {
        assert_eq!(
            sleep_budget(Duration::from_millis(16), Duration::from_millis(30)),
            None
        );
    }

    #[test]
    fn no_budget_when_exactly_on_target() {
        assert_eq!(
            sleep_budget(Duration::from_millis(16), Duration::from_millis(16)),
            None
        );
    }

    #[test]
    fn pacer_targets_sixty_hz() {
        let pacer = FramePacer::new(60);
        let target = pacer.target();
        assert!(target > Duration::from_millis(16));
        assert!(target < Duration::from_millis(17));
    }

    #[test]
    fn pace_counts_frames() {
        let mut pacer = FramePacer::new(1000);
        for _ in 0..3 {
            let start = pacer.begin();
            pacer.pace(start);
        }
        assert_eq!(pacer.frame_index(), 3);
    }
}
