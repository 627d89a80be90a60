//! Toxic clouds: persistent bodies that keep hurting whoever stays inside.

use std::{collections::BTreeSet, f32::consts::TAU};

use skyward_core::{PlayerId, ToxicCloudPattern, ToxicCloudTuning, Vec2};

use crate::HazardEffect;

#[derive(Clone, Debug)]
pub(crate) struct ToxicCloud {
    pattern: ToxicCloudPattern,
    tuning: ToxicCloudTuning,
    speed: f32,
    direction: Vec2,
    orbit_center: Vec2,
    movement_time: f32,
    damage_cooldown: f32,
    overlapping: BTreeSet<PlayerId>,
}

impl ToxicCloud {
    pub(crate) fn new(
        pattern: ToxicCloudPattern,
        tuning: ToxicCloudTuning,
        speed: f32,
        direction: Vec2,
        orbit_center: Vec2,
    ) -> Self {
        Self {
            pattern,
            tuning,
            speed,
            direction,
            orbit_center,
            movement_time: 0.0,
            damage_cooldown: 0.0,
            overlapping: BTreeSet::new(),
        }
    }

    pub(crate) const fn speed(&self) -> f32 {
        self.speed
    }

    pub(crate) fn activate(&mut self) {
        self.movement_time = 0.0;
        self.damage_cooldown = 0.0;
    }

    pub(crate) fn begin_overlap(&mut self, player: PlayerId) {
        let _ = self.overlapping.insert(player);
    }

    pub(crate) fn end_overlap(&mut self, player: PlayerId) {
        let _ = self.overlapping.remove(&player);
    }

    pub(crate) fn overlapping(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.overlapping.iter().copied()
    }

    pub(crate) fn update(
        &mut self,
        dt: f32,
        position: &mut Vec2,
        damage: u32,
        out: &mut Vec<HazardEffect>,
    ) {
        self.movement_time += dt;
        *position = self.step(*position, dt);

        if !self.tuning.continuous_damage {
            return;
        }
        self.damage_cooldown -= dt;
        if self.damage_cooldown > 0.0 {
            return;
        }
        self.damage_cooldown = self.tuning.damage_interval;
        for player in &self.overlapping {
            out.push(HazardEffect::Damage {
                player: *player,
                amount: damage,
            });
        }
    }

    fn step(&self, position: Vec2, dt: f32) -> Vec2 {
        match self.pattern {
            ToxicCloudPattern::LinearDrift => position + self.direction * self.speed * dt,
            ToxicCloudPattern::ZigzagSweep => {
                let perpendicular = Vec2::new(-self.direction.y, self.direction.x);
                let sweep = (self.movement_time * self.tuning.zigzag_frequency * TAU).sin()
                    * self.tuning.zigzag_amplitude;
                position + self.direction * self.speed * dt + perpendicular * sweep * dt
            }
            ToxicCloudPattern::CircularOrbit => {
                let angle = self.movement_time * self.tuning.orbit_speed;
                self.orbit_center + Vec2::new(angle.cos(), angle.sin()) * self.tuning.orbit_radius
            }
        }
    }
}
