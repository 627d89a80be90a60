//! Acid rain clouds: settle below the top edge, drift, and rain droplets.

use std::f32::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use skyward_core::{
    AcidRainPattern, AcidRainTuning, MovementType, ProjectileRequest, ProjectileSource,
    ScreenBounds, Vec2,
};

use crate::HazardEffect;

const ARRIVAL_TOLERANCE: f32 = 0.01;
const DRIZZLE_JITTER: f32 = 1.0;
const POUR_JITTER: f32 = 2.0;
const CURTAIN_MIN_DROPS: u32 = 5;
const CURTAIN_WIDTH: f32 = 2.0;

#[derive(Clone, Debug)]
pub(crate) struct AcidRain {
    pattern: AcidRainPattern,
    tuning: AcidRainTuning,
    max_droplets: u32,
    period: f32,
    target: Vec2,
    anchor: Vec2,
    drift_time: f32,
    drop_cooldown: f32,
}

impl AcidRain {
    pub(crate) fn new(
        pattern: AcidRainPattern,
        tuning: AcidRainTuning,
        max_droplets: u32,
        period: f32,
        spawn: Vec2,
        bounds: &ScreenBounds,
    ) -> Self {
        let target = Vec2::new(spawn.x, bounds.max().y - tuning.y_target_offset);
        Self {
            pattern,
            tuning,
            max_droplets,
            period,
            target,
            anchor: target,
            drift_time: 0.0,
            drop_cooldown: 0.0,
        }
    }

    pub(crate) const fn max_droplets(&self) -> u32 {
        self.max_droplets
    }

    pub(crate) const fn period(&self) -> f32 {
        self.period
    }

    /// Moves the cloud toward its resting point; returns `true` on arrival.
    pub(crate) fn enter(&mut self, position: &mut Vec2, dt: f32) -> bool {
        *position = move_towards(*position, self.target, self.tuning.entry_speed * dt);
        if position.distance(self.target) > ARRIVAL_TOLERANCE {
            return false;
        }
        *position = self.target;
        self.anchor = self.target;
        true
    }

    pub(crate) fn activate(&mut self) {
        self.drop_cooldown = 0.0;
    }

    pub(crate) fn update(
        &mut self,
        dt: f32,
        position: &mut Vec2,
        source: ProjectileSource,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<HazardEffect>,
    ) {
        self.drift_time += dt * self.tuning.drift_speed;
        *position = self.anchor + Vec2::new(0.0, self.drift_time.sin() * self.tuning.drift_range);

        self.drop_cooldown -= dt;
        if self.drop_cooldown > 0.0 {
            return;
        }
        self.drop_cooldown = self.period;

        for (offset, direction) in droplet_layout(self.pattern, self.max_droplets, self.drift_time, rng)
        {
            out.push(HazardEffect::Projectile(ProjectileRequest {
                source,
                position: *position + offset,
                direction,
                speed: self.tuning.drop_speed,
                movement: MovementType::Linear,
                wave_amplitude: 0.0,
                wave_frequency: 0.0,
                asset: self.tuning.droplet_asset.clone(),
            }));
        }
    }
}

/// Spawn offsets and directions of one emission.
pub(crate) fn droplet_layout(
    pattern: AcidRainPattern,
    max_droplets: u32,
    drift_time: f32,
    rng: &mut ChaCha8Rng,
) -> Vec<(Vec2, Vec2)> {
    match pattern {
        AcidRainPattern::SteadyDrizzle => {
            jittered_column((max_droplets / 4).max(1), DRIZZLE_JITTER, rng)
        }
        AcidRainPattern::IntensePour => jittered_column(max_droplets, POUR_JITTER, rng),
        AcidRainPattern::WavingCurtain => {
            let count = (max_droplets / 2).max(CURTAIN_MIN_DROPS);
            (0..count)
                .map(|index| {
                    let t = index as f32 / count as f32;
                    let x = (t * TAU + drift_time * 2.0).sin() * CURTAIN_WIDTH;
                    let direction = Vec2::new((drift_time + t).sin(), -1.0).normalize();
                    (Vec2::new(x, 0.0), direction)
                })
                .collect()
        }
    }
}

fn jittered_column(count: u32, jitter: f32, rng: &mut ChaCha8Rng) -> Vec<(Vec2, Vec2)> {
    (0..count)
        .map(|_| (Vec2::new(rng.gen_range(-jitter..=jitter), 0.0), Vec2::NEG_Y))
        .collect()
}

fn move_towards(current: Vec2, target: Vec2, max_step: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_step || distance <= f32::EPSILON {
        target
    } else {
        current + delta / distance * max_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn drizzle_uses_a_quarter_of_the_budget() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let drops = droplet_layout(AcidRainPattern::SteadyDrizzle, 32, 0.0, &mut rng);
        assert_eq!(drops.len(), 8);
        assert!(drops
            .iter()
            .all(|(offset, dir)| offset.x.abs() <= DRIZZLE_JITTER && *dir == Vec2::NEG_Y));

        assert_eq!(
            droplet_layout(AcidRainPattern::SteadyDrizzle, 3, 0.0, &mut rng).len(),
            1
        );
    }

    #[test]
    fn pour_uses_the_whole_budget_with_wide_jitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let drops = droplet_layout(AcidRainPattern::IntensePour, 20, 0.0, &mut rng);
        assert_eq!(drops.len(), 20);
        assert!(drops.iter().all(|(offset, _)| offset.x.abs() <= POUR_JITTER));
    }

    #[test]
    fn curtain_has_a_floor_and_slants_downward() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            droplet_layout(AcidRainPattern::WavingCurtain, 4, 0.0, &mut rng).len(),
            5
        );

        let drops = droplet_layout(AcidRainPattern::WavingCurtain, 32, 1.3, &mut rng);
        assert_eq!(drops.len(), 16);
        for (offset, direction) in drops {
            assert!(offset.x.abs() <= CURTAIN_WIDTH + 1e-5);
            assert!(direction.y < 0.0);
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn entry_settles_below_the_top_edge() {
        let bounds = ScreenBounds::centered(5.0, 9.0);
        let mut cloud = AcidRain::new(
            AcidRainPattern::SteadyDrizzle,
            AcidRainTuning::default(),
            4,
            1.0,
            Vec2::new(1.5, 10.0),
            &bounds,
        );
        let mut position = Vec2::new(1.5, 10.0);
        assert!(!cloud.enter(&mut position, 0.5));
        assert!((position.y - 8.5).abs() < 1e-5);
        assert!(cloud.enter(&mut position, 0.5));
        assert_eq!(position, Vec2::new(1.5, 8.0));
    }
}
