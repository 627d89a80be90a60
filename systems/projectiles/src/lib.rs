#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Per-tick projectile motion shared by hazard emissions and attack patterns.

use skyward_core::{
    AssetKey, MovementType, ProjectileDespawnReason, ProjectileId, ProjectileRequest,
    ProjectileSource, ScreenBounds, Vec2,
};

/// Margin around the screen rectangle beyond which projectiles are culled.
pub const DEFAULT_CULL_MARGIN: f32 = 2.0;
/// Seconds after which a projectile is removed even if still on screen.
pub const DEFAULT_MAX_LIFETIME: f32 = 12.0;

/// Outcome of advancing a projectile by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileStatus {
    /// The projectile keeps flying.
    Alive,
    /// The projectile must be removed.
    Despawn(ProjectileDespawnReason),
}

/// Offset travelled during one step.
///
/// `time_alive` must already include the step being evaluated.
#[must_use]
pub fn displacement(
    direction: Vec2,
    perpendicular: Vec2,
    speed: f32,
    movement: MovementType,
    wave_amplitude: f32,
    wave_frequency: f32,
    time_alive: f32,
    dt: f32,
) -> Vec2 {
    let forward = direction * speed * dt;
    match movement {
        MovementType::Linear => forward,
        MovementType::Sinusoidal => {
            let wave = (time_alive * wave_frequency).sin() * wave_amplitude;
            forward + perpendicular * wave * dt
        }
    }
}

/// Live projectile owned by the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    id: ProjectileId,
    source: ProjectileSource,
    position: Vec2,
    direction: Vec2,
    perpendicular: Vec2,
    speed: f32,
    movement: MovementType,
    wave_amplitude: f32,
    wave_frequency: f32,
    time_alive: f32,
    max_lifetime: f32,
    asset: Option<AssetKey>,
}

impl Projectile {
    /// Instantiates a projectile, normalising the requested direction.
    ///
    /// A zero direction falls back to straight down.
    #[must_use]
    pub fn from_request(id: ProjectileId, request: ProjectileRequest, max_lifetime: f32) -> Self {
        let direction = request.direction.try_normalize().unwrap_or(Vec2::NEG_Y);
        Self {
            id,
            source: request.source,
            position: request.position,
            direction,
            perpendicular: Vec2::new(-direction.y, direction.x),
            speed: request.speed,
            movement: request.movement,
            wave_amplitude: request.wave_amplitude,
            wave_frequency: request.wave_frequency,
            time_alive: 0.0,
            max_lifetime,
            asset: request.asset,
        }
    }

    /// Moves the projectile by one step and reports whether it survives.
    pub fn advance(&mut self, dt: f32, culling: &ScreenBounds) -> ProjectileStatus {
        self.time_alive += dt;
        self.position += displacement(
            self.direction,
            self.perpendicular,
            self.speed,
            self.movement,
            self.wave_amplitude,
            self.wave_frequency,
            self.time_alive,
            dt,
        );

        if !culling.contains(self.position) {
            ProjectileStatus::Despawn(ProjectileDespawnReason::LeftScreen)
        } else if self.time_alive >= self.max_lifetime {
            ProjectileStatus::Despawn(ProjectileDespawnReason::LifetimeElapsed)
        } else {
            ProjectileStatus::Alive
        }
    }

    /// Identifier of the projectile.
    #[must_use]
    pub const fn id(&self) -> ProjectileId {
        self.id
    }

    /// Entity that emitted the projectile.
    #[must_use]
    pub const fn source(&self) -> ProjectileSource {
        self.source
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit travel direction.
    #[must_use]
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Travel speed.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Movement model.
    #[must_use]
    pub const fn movement(&self) -> MovementType {
        self.movement
    }

    /// Seconds since the projectile was instantiated.
    #[must_use]
    pub const fn time_alive(&self) -> f32 {
        self.time_alive
    }

    /// Visual asset rendered for the projectile.
    #[must_use]
    pub fn asset(&self) -> Option<&AssetKey> {
        self.asset.as_ref()
    }
}
