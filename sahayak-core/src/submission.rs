use crate::config::SubmissionProfile;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    Running(u8),
    Complete,
}

/// Fabricated progress for a simulated upload. Driven by a repeating timer
/// in the UI; each tick advances by a fixed step until 100.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSubmission {
    step: u8,
    progress: u8,
}

impl MockSubmission {
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, 100),
            progress: 0,
        }
    }

    pub fn from_profile(profile: &SubmissionProfile) -> Self {
        Self::new(profile.step)
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_complete() {
            return Tick::Complete;
        }
        self.progress = self.progress.saturating_add(self.step).min(100);
        if self.is_complete() {
            tracing::info!("mock submission complete");
            Tick::Complete
        } else {
            Tick::Running(self.progress)
        }
    }

    /// Number of ticks needed to reach 100 from zero.
    pub fn total_ticks(&self) -> u32 {
        u32::from(100u8.div_ceil(self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(step: u8) -> Vec<u8> {
        let mut sub = MockSubmission::new(step);
        let mut seen = vec![sub.progress()];
        for _ in 0..500 {
            let tick = sub.tick();
            seen.push(sub.progress());
            if tick == Tick::Complete {
                break;
            }
        }
        seen
    }

    #[test]
    fn progress_is_monotone_and_ends_at_100() {
        for step in [1, 3, 7, 10, 20, 33, 100, 255] {
            let seen = drive(step);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "step {step}: {seen:?}");
            assert_eq!(*seen.last().unwrap(), 100);
        }
    }

    #[test]
    fn emergency_profile_completes_in_five_ticks() {
        let mut sub = MockSubmission::new(20);
        assert_eq!(sub.total_ticks(), 5);
        for expected in [20, 40, 60, 80] {
            assert_eq!(sub.tick(), Tick::Running(expected));
        }
        assert_eq!(sub.tick(), Tick::Complete);
        assert_eq!(sub.tick(), Tick::Complete);
        assert_eq!(sub.progress(), 100);
    }

    #[test]
    fn zero_step_still_terminates() {
        assert_eq!(*drive(0).last().unwrap(), 100);
    }
}
