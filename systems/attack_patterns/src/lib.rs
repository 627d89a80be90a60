#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Executor for the legacy bullet-hell attack patterns.
//!
//! A burst fires one fan of projectiles at launch. A stream fires a fan at
//! launch and then every `1 / fire_rate` seconds until its duration runs out,
//! rotating the fan by `spin_speed` degrees per second.

use skyward_core::{
    AttackPatternConfig, AttackPatternId, PatternType, ProjectileRequest, ProjectileSource, Vec2,
};

/// Whether an execution keeps firing after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// More fans may follow.
    Running,
    /// The execution is complete and can be dropped.
    Finished,
}

/// Angles in degrees of a fan of `count` projectiles spanning `spread`
/// degrees and centred on `base`.
///
/// Every projectile sits in the middle of its own slice of the spread, so a
/// full 360 degree ring never doubles up its first and last shots.
#[must_use]
pub fn fan_angles(base: f32, spread: f32, count: u32) -> Vec<f32> {
    let step = spread / count.max(1) as f32;
    let start = base - spread / 2.0;
    (0..count)
        .map(|index| start + index as f32 * step + step / 2.0)
        .collect()
}

/// Unit vector for an angle in degrees (0 = right, 90 = up).
#[must_use]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Stream pattern in flight.
#[derive(Clone, Debug)]
pub struct AttackPatternExecution {
    pattern: AttackPatternId,
    config: AttackPatternConfig,
    origin: Vec2,
    angle: f32,
    elapsed: f32,
    cooldown: f32,
}

impl AttackPatternExecution {
    /// Fires the opening fan and returns the execution when more fans follow.
    ///
    /// Aimed patterns lock onto the player's position at launch; without a
    /// player they fall back to the configured base angle. A stream with no
    /// duration fires nothing.
    #[must_use]
    pub fn launch(
        pattern: AttackPatternId,
        config: &AttackPatternConfig,
        origin: Vec2,
        player: Option<Vec2>,
        out: &mut Vec<ProjectileRequest>,
    ) -> Option<Self> {
        if config.pattern_type == PatternType::Stream && config.duration <= 0.0 {
            tracing::debug!(pattern = pattern.get(), name = %config.name, "empty stream skipped");
            return None;
        }
        let angle = initial_angle(config, origin, player);
        let mut execution = Self {
            pattern,
            config: config.clone(),
            origin,
            angle,
            elapsed: 0.0,
            cooldown: 0.0,
        };
        execution.fire(out);
        tracing::debug!(
            pattern = pattern.get(),
            name = %config.name,
            angle,
            "attack pattern launched"
        );

        match config.pattern_type {
            PatternType::Burst => None,
            PatternType::Stream => {
                execution.cooldown = 1.0 / config.fire_rate;
                Some(execution)
            }
        }
    }

    /// Advances a stream by `dt` seconds, firing any fan that came due.
    pub fn advance(&mut self, dt: f32, out: &mut Vec<ProjectileRequest>) -> ExecutionStatus {
        self.angle += self.config.spin_speed * dt;
        self.elapsed += dt;
        if self.elapsed >= self.config.duration {
            return ExecutionStatus::Finished;
        }

        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.fire(out);
            self.cooldown = 1.0 / self.config.fire_rate;
        }
        ExecutionStatus::Running
    }

    /// Catalog entry being executed.
    #[must_use]
    pub const fn pattern(&self) -> AttackPatternId {
        self.pattern
    }

    /// Origin of the projectiles.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Current centre angle of the fan in degrees.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    fn fire(&self, out: &mut Vec<ProjectileRequest>) {
        let config = &self.config;
        for angle in fan_angles(self.angle, config.spread_angle, config.projectile_count) {
            out.push(ProjectileRequest {
                source: ProjectileSource::AttackPattern(self.pattern),
                position: self.origin,
                direction: direction_from_degrees(angle),
                speed: config.projectile_speed,
                movement: config.movement_type,
                wave_amplitude: config.wave_amplitude,
                wave_frequency: config.wave_frequency,
                asset: config.projectile_asset.clone(),
            });
        }
    }
}

fn initial_angle(config: &AttackPatternConfig, origin: Vec2, player: Option<Vec2>) -> f32 {
    if !config.aim_at_player {
        return config.base_angle;
    }
    player
        .and_then(|target| (target - origin).try_normalize())
        .map_or(config.base_angle, |to_player| {
            to_player.y.atan2(to_player.x).to_degrees()
        })
}
