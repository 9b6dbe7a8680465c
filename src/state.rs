#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RecordState {
    Displaying,    // Holding the current slide
    Transitioning, // Fading to the next slide
    Finished,      // Every slide has been recorded
}

/// Cosmetic fade between two slides. Never feeds back into navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: usize,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    pub fn new(from: usize, duration: f32) -> Self {
        Self { from, elapsed: 0.0, duration }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Fade progress in `[0, 1]`, eased out.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3) // easeOutCubic
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_runs_to_completion() {
        let mut t = Transition::new(0, 0.5);
        assert_eq!(t.progress(), 0.0);
        t.update(0.25);
        assert!(t.progress() > 0.5 && t.progress() < 1.0);
        assert!(!t.is_done());
        t.update(0.3);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_done());
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t = Transition::new(3, 0.0);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_done());
    }
}
