//! Wildfires: fireballs that travel inward and burst into fragments.

use std::f32::consts::FRAC_1_SQRT_2;

use skyward_core::{
    AudioCue, MovementType, ProjectileRequest, ProjectileSource, Vec2, WildfirePattern,
    WildfireTuning,
};

use crate::HazardEffect;

/// Where a wildfire is within its detonation sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WildfireProgress {
    Travelling,
    Exploding,
    Finished,
}

#[derive(Clone, Debug)]
pub(crate) struct Wildfire {
    pattern: WildfirePattern,
    tuning: WildfireTuning,
    projectile_count: u32,
    projectile_speed: f32,
    direction: Vec2,
    exploded: bool,
    explosion_timer: f32,
    chain_timer: f32,
    bursts: u32,
}

impl Wildfire {
    pub(crate) fn new(
        pattern: WildfirePattern,
        tuning: WildfireTuning,
        projectile_count: u32,
        projectile_speed: f32,
        direction: Vec2,
    ) -> Self {
        Self {
            pattern,
            tuning,
            projectile_count,
            projectile_speed,
            direction,
            exploded: false,
            explosion_timer: 0.0,
            chain_timer: 0.0,
            bursts: 0,
        }
    }

    pub(crate) const fn projectile_count(&self) -> u32 {
        self.projectile_count
    }

    pub(crate) const fn projectile_speed(&self) -> f32 {
        self.projectile_speed
    }

    pub(crate) fn activate(&mut self) {
        self.exploded = false;
        self.explosion_timer = 0.0;
        self.chain_timer = 0.0;
        self.bursts = 0;
    }

    pub(crate) fn update(
        &mut self,
        dt: f32,
        position: &mut Vec2,
        source: ProjectileSource,
        out: &mut Vec<HazardEffect>,
    ) -> WildfireProgress {
        if !self.exploded {
            *position += self.direction * self.tuning.travel_speed * dt;
            self.explosion_timer += dt;
            if self.explosion_timer >= self.tuning.explosion_delay {
                return self.detonate(*position, source, out);
            }
            return WildfireProgress::Travelling;
        }

        self.chain_timer += dt;
        if self.bursts < self.tuning.chain_count
            && self.chain_timer >= self.tuning.chain_interval * self.bursts as f32
        {
            self.burst(*position, radial_directions(self.projectile_count), source, out);
        }
        self.progress()
    }

    /// Fires the first burst on the fuse timer, shaped by the pattern.
    fn detonate(
        &mut self,
        position: Vec2,
        source: ProjectileSource,
        out: &mut Vec<HazardEffect>,
    ) -> WildfireProgress {
        let directions = match self.pattern {
            WildfirePattern::CrossPattern => cross_directions().to_vec(),
            WildfirePattern::SingleExplosion | WildfirePattern::ChainReaction => {
                radial_directions(self.projectile_count)
            }
        };
        self.explode(position, directions, source, out)
    }

    /// Bursts radially on player contact unless the fireball already went
    /// off. Every pattern uses the full radial burst here.
    pub(crate) fn detonate_on_contact(
        &mut self,
        position: Vec2,
        source: ProjectileSource,
        out: &mut Vec<HazardEffect>,
    ) -> WildfireProgress {
        self.explode(position, radial_directions(self.projectile_count), source, out)
    }

    fn explode(
        &mut self,
        position: Vec2,
        directions: Vec<Vec2>,
        source: ProjectileSource,
        out: &mut Vec<HazardEffect>,
    ) -> WildfireProgress {
        if self.exploded {
            return self.progress();
        }
        self.exploded = true;
        self.chain_timer = 0.0;
        self.burst(position, directions, source, out);
        self.progress()
    }

    fn progress(&self) -> WildfireProgress {
        if !self.exploded {
            return WildfireProgress::Travelling;
        }
        match self.pattern {
            WildfirePattern::ChainReaction if self.bursts < self.tuning.chain_count => {
                WildfireProgress::Exploding
            }
            _ => WildfireProgress::Finished,
        }
    }

    fn burst(
        &mut self,
        position: Vec2,
        directions: Vec<Vec2>,
        source: ProjectileSource,
        out: &mut Vec<HazardEffect>,
    ) {
        self.bursts += 1;
        out.push(HazardEffect::Exploded {
            burst: self.bursts,
            projectiles: directions.len() as u32,
        });
        out.push(HazardEffect::Cue(AudioCue::Impact));
        for direction in directions {
            out.push(HazardEffect::Projectile(ProjectileRequest {
                source,
                position,
                direction,
                speed: self.projectile_speed,
                movement: MovementType::Linear,
                wave_amplitude: 0.0,
                wave_frequency: 0.0,
                asset: self.tuning.fireball_asset.clone(),
            }));
        }
    }
}

/// `count` unit vectors evenly spaced around the circle, starting at +x.
pub(crate) fn radial_directions(count: u32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count)
        .map(|index| {
            let radians = (index as f32 * step).to_radians();
            Vec2::new(radians.cos(), radians.sin())
        })
        .collect()
}

/// The four cardinal directions followed by the four diagonals.
pub(crate) fn cross_directions() -> [Vec2; 8] {
    [
        Vec2::Y,
        Vec2::NEG_Y,
        Vec2::NEG_X,
        Vec2::X,
        Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyward_core::HazardId;

    fn bursts(effects: &[HazardEffect]) -> Vec<u32> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                HazardEffect::Exploded { burst, .. } => Some(*burst),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn radial_directions_are_evenly_spaced_unit_vectors() {
        let directions = radial_directions(8);
        assert_eq!(directions.len(), 8);
        assert!((directions[0] - Vec2::X).length() < 1e-6);
        for pair in directions.windows(2) {
            assert!((pair[0].angle_between(pair[1]) - 45f32.to_radians()).abs() < 1e-4);
        }
        for direction in &directions {
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
        let sum = directions.iter().fold(Vec2::ZERO, |acc, d| acc + *d);
        assert!(sum.length() < 1e-4);
    }

    #[test]
    fn cross_covers_cardinals_and_diagonals() {
        let directions = cross_directions();
        for direction in directions {
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
        let axis_aligned = directions
            .iter()
            .filter(|d| d.x == 0.0 || d.y == 0.0)
            .count();
        assert_eq!(axis_aligned, 4);
    }

    #[test]
    fn single_explosion_finishes_after_delay() {
        let mut fire = Wildfire::new(
            WildfirePattern::SingleExplosion,
            WildfireTuning::default(),
            6,
            5.0,
            Vec2::NEG_Y,
        );
        fire.activate();
        let source = ProjectileSource::Hazard(HazardId::new(1));
        let mut position = Vec2::new(0.0, 10.0);
        let mut out = Vec::new();

        assert_eq!(
            fire.update(0.5, &mut position, source, &mut out),
            WildfireProgress::Travelling
        );
        assert!((position.y - 7.0).abs() < 1e-5);
        assert_eq!(
            fire.update(0.5, &mut position, source, &mut out),
            WildfireProgress::Finished
        );
        assert_eq!(bursts(&out), vec![1]);
        let fragments = out
            .iter()
            .filter(|effect| matches!(effect, HazardEffect::Projectile(_)))
            .count();
        assert_eq!(fragments, 6);
    }

    #[test]
    fn chain_reaction_spaces_bursts_by_interval() {
        let tuning = WildfireTuning {
            explosion_delay: 0.0,
            ..WildfireTuning::default()
        };
        let mut fire = Wildfire::new(WildfirePattern::ChainReaction, tuning, 4, 5.0, Vec2::X);
        fire.activate();
        let source = ProjectileSource::Hazard(HazardId::new(2));
        let mut position = Vec2::ZERO;
        let mut out = Vec::new();
        let mut fired_at = Vec::new();
        let dt = 0.125;

        for step in 1..=16 {
            let before = bursts(&out).len();
            let progress = fire.update(dt, &mut position, source, &mut out);
            if bursts(&out).len() > before {
                fired_at.push(step as f32 * dt);
            }
            if progress == WildfireProgress::Finished {
                break;
            }
        }

        // Activation happens at t = 0; the first tick detonates immediately.
        assert_eq!(fired_at, vec![0.125, 0.625, 1.125]);
        assert_eq!(bursts(&out), vec![1, 2, 3]);
    }

    #[test]
    fn contact_detonation_bursts_radially_for_every_pattern() {
        let mut fire = Wildfire::new(
            WildfirePattern::CrossPattern,
            WildfireTuning::default(),
            16,
            5.0,
            Vec2::NEG_X,
        );
        fire.activate();
        let mut out = Vec::new();
        let progress = fire.detonate_on_contact(
            Vec2::ZERO,
            ProjectileSource::Hazard(HazardId::new(3)),
            &mut out,
        );
        assert_eq!(progress, WildfireProgress::Finished);
        assert_eq!(bursts(&out), vec![1]);
        assert!(out.contains(&HazardEffect::Exploded {
            burst: 1,
            projectiles: 16
        }));

        let mut again = Vec::new();
        let _ = fire.detonate_on_contact(
            Vec2::ZERO,
            ProjectileSource::Hazard(HazardId::new(3)),
            &mut again,
        );
        assert!(again.is_empty(), "a spent fireball cannot detonate twice");
    }

    #[test]
    fn cross_pattern_keeps_its_shape_on_the_fuse() {
        let tuning = WildfireTuning {
            explosion_delay: 0.0,
            ..WildfireTuning::default()
        };
        let mut fire = Wildfire::new(WildfirePattern::CrossPattern, tuning, 16, 5.0, Vec2::Y);
        fire.activate();
        let mut position = Vec2::ZERO;
        let mut out = Vec::new();
        let progress = fire.update(
            0.1,
            &mut position,
            ProjectileSource::Hazard(HazardId::new(4)),
            &mut out,
        );
        assert_eq!(progress, WildfireProgress::Finished);
        assert!(out.contains(&HazardEffect::Exploded {
            burst: 1,
            projectiles: 8
        }));
    }
}
