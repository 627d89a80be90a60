//! Difficulty-driven interpolation tables for hazard parameters.
//!
//! Every scaled parameter is a `(min, max)` pair interpolated linearly over
//! the multiplier range `[DIFFICULTY_FLOOR, DIFFICULTY_CEILING]`. Hazards read
//! these values once when they spawn and keep them for their whole lifetime.

use serde::{Deserialize, Serialize};

use crate::{DIFFICULTY_CEILING, DIFFICULTY_FLOOR};

/// Minimum and maximum values for every difficulty-scaled hazard parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyScaling {
    /// Wildfire burst size at the lowest difficulty.
    pub wildfire_min_projectiles: u32,
    /// Wildfire burst size at the highest difficulty.
    pub wildfire_max_projectiles: u32,
    /// Wildfire fragment speed at the lowest difficulty.
    pub wildfire_min_speed: f32,
    /// Wildfire fragment speed at the highest difficulty.
    pub wildfire_max_speed: f32,
    /// Acid rain droplet budget at the lowest difficulty.
    pub acid_rain_min_droplets: u32,
    /// Acid rain droplet budget at the highest difficulty.
    pub acid_rain_max_droplets: u32,
    /// Seconds between droplet emissions at the lowest difficulty.
    pub acid_rain_min_period: f32,
    /// Seconds between droplet emissions at the highest difficulty.
    pub acid_rain_max_period: f32,
    /// Toxic cloud travel speed at the lowest difficulty.
    pub toxic_cloud_min_speed: f32,
    /// Toxic cloud travel speed at the highest difficulty.
    pub toxic_cloud_max_speed: f32,
}

impl Default for DifficultyScaling {
    fn default() -> Self {
        Self {
            wildfire_min_projectiles: 4,
            wildfire_max_projectiles: 16,
            wildfire_min_speed: 3.0,
            wildfire_max_speed: 12.0,
            acid_rain_min_droplets: 4,
            acid_rain_max_droplets: 32,
            acid_rain_min_period: 1.0,
            acid_rain_max_period: 0.5,
            toxic_cloud_min_speed: 3.0,
            toxic_cloud_max_speed: 16.0,
        }
    }
}

impl DifficultyScaling {
    /// Number of fragments a wildfire bursts into.
    #[must_use]
    pub fn wildfire_projectiles(&self, multiplier: f32) -> u32 {
        lerp_count(
            self.wildfire_min_projectiles,
            self.wildfire_max_projectiles,
            multiplier,
        )
    }

    /// Speed of each wildfire fragment.
    #[must_use]
    pub fn wildfire_speed(&self, multiplier: f32) -> f32 {
        lerp(self.wildfire_min_speed, self.wildfire_max_speed, multiplier)
    }

    /// Droplet budget an acid rain cloud distributes per emission.
    #[must_use]
    pub fn acid_rain_droplets(&self, multiplier: f32) -> u32 {
        lerp_count(
            self.acid_rain_min_droplets,
            self.acid_rain_max_droplets,
            multiplier,
        )
    }

    /// Seconds between acid rain emissions; shrinks as difficulty grows.
    #[must_use]
    pub fn acid_rain_period(&self, multiplier: f32) -> f32 {
        lerp(
            self.acid_rain_min_period,
            self.acid_rain_max_period,
            multiplier,
        )
    }

    /// Travel speed of a toxic cloud.
    #[must_use]
    pub fn toxic_cloud_speed(&self, multiplier: f32) -> f32 {
        lerp(
            self.toxic_cloud_min_speed,
            self.toxic_cloud_max_speed,
            multiplier,
        )
    }
}

/// Position of `value` within `[from, to]`, clamped to `[0, 1]`.
#[must_use]
pub fn inverse_lerp(from: f32, to: f32, value: f32) -> f32 {
    if (to - from).abs() <= f32::EPSILON {
        return 0.0;
    }
    ((value - from) / (to - from)).clamp(0.0, 1.0)
}

/// Interpolates between `min` and `max` by the multiplier's position in the
/// difficulty range.
#[must_use]
pub fn lerp(min: f32, max: f32, multiplier: f32) -> f32 {
    let t = inverse_lerp(DIFFICULTY_FLOOR, DIFFICULTY_CEILING, multiplier);
    min + (max - min) * t
}

/// Integer variant of [`lerp`]; halves round to the nearest even count.
#[must_use]
pub fn lerp_count(min: u32, max: u32, multiplier: f32) -> u32 {
    let value = lerp(min as f32, max as f32, multiplier).round_ties_even();
    value.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_table() {
        let scaling = DifficultyScaling::default();
        assert_eq!(scaling.wildfire_projectiles(1.0), 4);
        assert_eq!(scaling.wildfire_projectiles(3.0), 16);
        assert_eq!(scaling.acid_rain_droplets(1.0), 4);
        assert_eq!(scaling.acid_rain_droplets(3.0), 32);
        assert!((scaling.acid_rain_period(3.0) - 0.5).abs() < f32::EPSILON);
        assert!((scaling.toxic_cloud_speed(1.0) - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let scaling = DifficultyScaling::default();
        assert_eq!(scaling.wildfire_projectiles(2.0), 10);
        assert!((scaling.wildfire_speed(2.0) - 7.5).abs() < 1e-5);
        assert!((scaling.acid_rain_period(2.0) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn multipliers_outside_range_are_clamped() {
        let scaling = DifficultyScaling::default();
        assert_eq!(scaling.wildfire_projectiles(0.5), 4);
        assert_eq!(scaling.wildfire_projectiles(5.0), 16);
    }

    #[test]
    fn counts_round_half_to_even() {
        // 4 + 28 * 0.125 = 7.5 rounds to the even neighbour.
        assert_eq!(lerp_count(4, 32, 1.25), 8);
        // 0 + 5 * 0.5 = 2.5 rounds to 2.
        assert_eq!(lerp_count(0, 5, 2.0), 2);
    }
}
