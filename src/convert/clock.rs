use super::number::round_to_fixed;

/// Running timeline position in seconds. Each step is rounded to four
/// decimals before the next duration is added, so rounding error carries
/// over from frame to frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameClock {
    position: f64,
    frame_rate: f64,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self { position: 0.0, frame_rate: frame_rate as f64 }
    }

    /// Returns the start time of a frame lasting `duration` ticks and moves
    /// past it.
    pub fn tick(&mut self, duration: u32) -> f64 {
        let time = self.position;
        self.position = round_to_fixed(self.position + duration as f64 / self.frame_rate, 4);
        time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_accumulate_frame_durations() {
        let mut clock = FrameClock::new(24);
        assert_eq!(clock.tick(12), 0.0);
        assert_eq!(clock.tick(12), 0.5);
        assert_eq!(clock.tick(12), 1.0);
    }

    #[test]
    fn rounding_is_applied_at_every_step() {
        let mut clock = FrameClock::new(30);
        let times: Vec<f64> = (0..4).map(|_| clock.tick(1)).collect();
        assert_eq!(times, vec![0.0, 0.0333, 0.0666, 0.0999]);
    }
}
