//! Random faults with the hardware's odds.

use super::FaultGenerator;
use crate::config::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Odds of each simulated fault, expressed as inclusive uniform draws.
///
/// Money is recognized when a draw from `0..=recognition_draw_max` is at
/// least `recognition_floor`. A dispenser jams when a draw from
/// `0..=jam_draw_max` is below `jam_threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultProfile {
    pub recognition_draw_max: u32,
    pub recognition_floor: u32,
    pub jam_draw_max: u32,
    pub jam_threshold: u32,
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self {
            recognition_draw_max: 50,
            recognition_floor: 10,
            jam_draw_max: 100,
            jam_threshold: 10,
        }
    }
}

impl FaultProfile {
    /// A profile under which nothing ever fails.
    pub const fn reliable() -> Self {
        Self {
            recognition_draw_max: 50,
            recognition_floor: 0,
            jam_draw_max: 100,
            jam_threshold: 0,
        }
    }

    /// Reject floors and thresholds that lie outside their draw range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recognition_floor > self.recognition_draw_max.saturating_add(1) {
            return Err(ConfigError::InvalidFaultProfile(format!(
                "recognition_floor {} exceeds draw range 0..={}",
                self.recognition_floor, self.recognition_draw_max
            )));
        }
        if self.jam_threshold > self.jam_draw_max.saturating_add(1) {
            return Err(ConfigError::InvalidFaultProfile(format!(
                "jam_threshold {} exceeds draw range 0..={}",
                self.jam_threshold, self.jam_draw_max
            )));
        }
        Ok(())
    }
}

/// Fault generator backed by a pseudo-random number generator.
#[derive(Clone, Debug)]
pub struct RandomFaults {
    rng: StdRng,
    profile: FaultProfile,
}

impl RandomFaults {
    /// Seed from the operating system's entropy source.
    pub fn new(profile: FaultProfile) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            profile,
        }
    }

    /// Reproducible sequence of outcomes for a given seed.
    pub fn seeded(seed: u64, profile: FaultProfile) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            profile,
        }
    }

    pub fn profile(&self) -> &FaultProfile {
        &self.profile
    }

    fn jammed(&mut self, dispenser: &'static str) -> bool {
        let draw = self.rng.gen_range(0..=self.profile.jam_draw_max);
        trace!(dispenser, draw, threshold = self.profile.jam_threshold, "jam draw");
        draw < self.profile.jam_threshold
    }
}

impl Default for RandomFaults {
    fn default() -> Self {
        Self::new(FaultProfile::default())
    }
}

impl FaultGenerator for RandomFaults {
    fn money_recognized(&mut self) -> bool {
        let draw = self.rng.gen_range(0..=self.profile.recognition_draw_max);
        trace!(draw, floor = self.profile.recognition_floor, "recognition draw");
        draw >= self.profile.recognition_floor
    }

    fn product_jammed(&mut self) -> bool {
        self.jammed("product")
    }

    fn change_jammed(&mut self) -> bool {
        self.jammed("change")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_hardware_odds() {
        let profile = FaultProfile::default();
        assert_eq!(profile.recognition_draw_max, 50);
        assert_eq!(profile.recognition_floor, 10);
        assert_eq!(profile.jam_draw_max, 100);
        assert_eq!(profile.jam_threshold, 10);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn reliable_profile_never_faults() {
        let mut faults = RandomFaults::seeded(7, FaultProfile::reliable());

        for _ in 0..500 {
            assert!(faults.money_recognized());
            assert!(!faults.product_jammed());
            assert!(!faults.change_jammed());
        }
    }

    #[test]
    fn saturated_profile_always_faults() {
        let profile = FaultProfile {
            recognition_draw_max: 50,
            recognition_floor: 51,
            jam_draw_max: 100,
            jam_threshold: 101,
        };
        assert!(profile.validate().is_ok());

        let mut faults = RandomFaults::seeded(7, profile);
        for _ in 0..500 {
            assert!(!faults.money_recognized());
            assert!(faults.product_jammed());
            assert!(faults.change_jammed());
        }
    }

    #[test]
    fn same_seed_replays_same_outcomes() {
        let mut first = RandomFaults::seeded(42, FaultProfile::default());
        let mut second = RandomFaults::seeded(42, FaultProfile::default());

        for _ in 0..100 {
            assert_eq!(first.money_recognized(), second.money_recognized());
            assert_eq!(first.product_jammed(), second.product_jammed());
        }
    }

    #[test]
    fn default_odds_are_roughly_observed() {
        let mut faults = RandomFaults::seeded(2024, FaultProfile::default());
        let rejections = (0..10_000).filter(|_| !faults.money_recognized()).count();
        let jams = (0..10_000).filter(|_| faults.product_jammed()).count();

        // 10/51 and 10/101
        assert!((1_500..2_500).contains(&rejections), "rejections: {rejections}");
        assert!((600..1_400).contains(&jams), "jams: {jams}");
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let profile = FaultProfile {
            jam_threshold: 500,
            ..FaultProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::InvalidFaultProfile(_))
        ));
    }

    #[test]
    fn profile_fields_default_when_missing() {
        let profile: FaultProfile = serde_json::from_str(r#"{"jam_threshold": 0}"#).unwrap();
        assert_eq!(profile.jam_threshold, 0);
        assert_eq!(profile.recognition_floor, 10);
    }
}
