#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Skyward hazard engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

pub mod catalog;
pub mod scaling;
pub mod seed;

pub use catalog::{
    AcidRainPattern, AcidRainTuning, AttackPatternConfig, BaseTuning, CatalogError,
    CollectibleConfig, HazardCatalog, HazardConfig, HazardVariant, ToxicCloudPattern,
    ToxicCloudTuning, WildfirePattern, WildfireTuning,
};
pub use scaling::DifficultyScaling;

/// Lower bound of the difficulty multiplier range used by scaling tables.
pub const DIFFICULTY_FLOOR: f32 = 1.0;
/// Upper bound of the difficulty multiplier range used by scaling tables.
pub const DIFFICULTY_CEILING: f32 = 3.0;

/// Axis-aligned viewport rectangle expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBounds {
    min: Vec2,
    max: Vec2,
}

impl ScreenBounds {
    /// Creates bounds from two opposite corners, normalising their order.
    #[must_use]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates bounds centred on the origin with the provided half extents.
    #[must_use]
    pub fn centered(half_width: f32, half_height: f32) -> Self {
        let half = Vec2::new(half_width.abs(), half_height.abs());
        Self::new(-half, half)
    }

    /// Lower-left corner of the rectangle.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner of the rectangle.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Centre point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half of the rectangle's width and height.
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Returns a copy grown by `margin` world units on every side.
    #[must_use]
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// Reports whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::centered(5.0, 9.0)
    }
}

/// Screen edge a hazard enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnSide {
    /// Above the visible area.
    Top,
    /// Below the visible area.
    Bottom,
    /// Left of the visible area.
    Left,
    /// Right of the visible area.
    Right,
}

impl SpawnSide {
    /// Unit vector pointing from the edge toward the play field.
    #[must_use]
    pub const fn inward(self) -> Vec2 {
        match self {
            Self::Top => Vec2::NEG_Y,
            Self::Bottom => Vec2::Y,
            Self::Left => Vec2::X,
            Self::Right => Vec2::NEG_X,
        }
    }
}

/// Hazard archetypes available to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    /// Cloud that drifts near the top edge and rains droplets.
    AcidRain,
    /// Persistent gas cloud that damages while overlapped.
    ToxicCloud,
    /// Fireball that detonates into a ring of projectiles.
    Wildfire,
}

/// Lifecycle stage of a hazard instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Moving into its anchor before the telegraph starts.
    Entering,
    /// Telegraph playing; collision disabled.
    Warning,
    /// Collision enabled and the kind behaviour running.
    Active,
    /// Detonation sequence in progress.
    Exploding,
    /// Terminal state; the instance is removed.
    Expired,
}

/// Per-projectile movement model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Straight travel along the initial direction.
    #[default]
    Linear,
    /// Straight travel plus a sine offset along the perpendicular axis.
    Sinusoidal,
}

/// Firing mode of an attack pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// One fan of projectiles fired at launch.
    #[default]
    Burst,
    /// Repeated fans at a fixed rate for a fixed duration.
    Stream,
}

/// Where an attack pattern originates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnOrigin {
    /// Random point above the top edge.
    #[default]
    Top,
    /// Random point below the bottom edge.
    Bottom,
    /// Random point left of the left edge.
    Left,
    /// Random point right of the right edge.
    Right,
    /// Centre of the screen.
    Center,
    /// The player's current position.
    AtPlayerLocation,
}

/// Name of a visual asset the host engine instantiates for a spawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    /// Creates a new asset key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the asset name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u32);

        impl $name {
            /// Creates a new identifier with the provided numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Retrieves the numeric representation of the identifier.
            #[must_use]
            pub const fn get(&self) -> u32 {
                self.0
            }
        }
    };
}

numeric_id!(
    /// Unique identifier assigned to a live hazard instance.
    HazardId
);
numeric_id!(
    /// Unique identifier assigned to a live projectile.
    ProjectileId
);
numeric_id!(
    /// Unique identifier assigned to a spawned collectible.
    CollectibleId
);
numeric_id!(
    /// Identifier of a player-controlled body (the lead bird or a flock companion).
    PlayerId
);
numeric_id!(
    /// Index of a hazard configuration within the catalog.
    HazardConfigId
);
numeric_id!(
    /// Index of an attack pattern within the catalog.
    AttackPatternId
);
numeric_id!(
    /// Index of a collectible configuration within the catalog.
    CollectibleConfigId
);

/// Entity responsible for emitting a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileSource {
    /// Droplet or fireball fragment emitted by a hazard.
    Hazard(HazardId),
    /// Shot fired by an attack pattern execution.
    AttackPattern(AttackPatternId),
}

/// Everything required to instantiate a projectile.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileRequest {
    /// Entity that emitted the projectile.
    pub source: ProjectileSource,
    /// World position the projectile starts from.
    pub position: Vec2,
    /// Travel direction; normalised on instantiation.
    pub direction: Vec2,
    /// Travel speed in world units per second.
    pub speed: f32,
    /// Movement model applied every tick.
    pub movement: MovementType,
    /// Perpendicular sine amplitude for sinusoidal movement.
    pub wave_amplitude: f32,
    /// Sine frequency for sinusoidal movement.
    pub wave_frequency: f32,
    /// Visual asset used by the host engine; `None` skips the spawn.
    pub asset: Option<AssetKey>,
}

/// Audio cues requested from the host engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Telegraph started.
    Warning,
    /// Hazard became dangerous.
    Activated,
    /// Hazard hit the player or detonated.
    Impact,
}

/// Reasons a hazard left the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardDespawnReason {
    /// The configured lifetime elapsed.
    LifetimeElapsed,
    /// The detonation sequence completed.
    Detonated,
    /// The hazard drifted outside the culling rectangle.
    LeftScreen,
    /// The run was reset.
    RunReset,
}

/// Reasons a projectile left the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileDespawnReason {
    /// The projectile left the expanded screen rectangle.
    LeftScreen,
    /// The projectile exceeded its maximum lifetime.
    LifetimeElapsed,
    /// The projectile struck a player body.
    HitPlayer,
    /// The run was reset.
    RunReset,
}

/// What dealt damage to a player body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageSource {
    /// Direct contact with a hazard body.
    Hazard(HazardId),
    /// Contact with a projectile.
    Projectile(ProjectileId),
}

/// Reasons a requested spawn or emission was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpawnSkipReason {
    /// The hazard configuration has no visual asset.
    MissingHazardAsset(HazardConfigId),
    /// The hazard configuration index is not registered.
    UnknownHazardConfig(HazardConfigId),
    /// The attack pattern index is not registered.
    UnknownAttackPattern(AttackPatternId),
    /// The emitted projectile has no visual asset.
    MissingProjectileAsset(ProjectileSource),
    /// The collectible configuration has no visual asset.
    MissingCollectibleAsset(CollectibleConfigId),
    /// The collectible configuration index is not registered.
    UnknownCollectibleConfig(CollectibleConfigId),
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the viewport rectangle used for spawning and culling.
    ConfigureScreen {
        /// New viewport bounds in world units.
        bounds: ScreenBounds,
    },
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of game time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Updates (or registers) a player body's world position.
    SetPlayerPosition {
        /// Player body being moved.
        player: PlayerId,
        /// New world position.
        position: Vec2,
    },
    /// Removes a player body, e.g. a flock companion that absorbed a hit.
    RemovePlayer {
        /// Player body that no longer exists.
        player: PlayerId,
    },
    /// Instantiates a hazard from the catalog.
    SpawnHazard {
        /// Catalog entry to instantiate.
        config: HazardConfigId,
        /// Edge the hazard enters from.
        side: SpawnSide,
        /// Initial world position.
        position: Vec2,
    },
    /// Launches an attack pattern execution.
    StartAttackPattern {
        /// Catalog entry to execute.
        pattern: AttackPatternId,
        /// World position the projectiles originate from.
        origin: Vec2,
    },
    /// Spawns a collectible pickup.
    SpawnCollectible {
        /// Catalog entry to spawn.
        config: CollectibleConfigId,
        /// World position of the pickup.
        position: Vec2,
    },
    /// Reports that a player body started overlapping a hazard.
    PlayerContactBegan {
        /// Hazard being touched.
        hazard: HazardId,
        /// Player body touching it.
        player: PlayerId,
    },
    /// Reports that a player body stopped overlapping a hazard.
    PlayerContactEnded {
        /// Hazard no longer touched.
        hazard: HazardId,
        /// Player body that left it.
        player: PlayerId,
    },
    /// Reports that a projectile touched a player body.
    ProjectileContact {
        /// Projectile involved in the contact.
        projectile: ProjectileId,
        /// Player body that was hit.
        player: PlayerId,
    },
    /// Overrides the difficulty multiplier (clamped to the model's range).
    SetDifficulty {
        /// Requested multiplier.
        value: f32,
    },
    /// Stops difficulty accrual without resetting it.
    PauseDifficulty,
    /// Resumes difficulty accrual.
    ResumeDifficulty,
    /// Clears live hazards, executions, projectiles and difficulty progress.
    ResetRun,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of game time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the viewport rectangle changed.
    ScreenConfigured {
        /// Bounds now in effect.
        bounds: ScreenBounds,
    },
    /// Announces a new difficulty multiplier.
    DifficultyChanged {
        /// Multiplier now in effect.
        multiplier: f32,
    },
    /// Confirms that a hazard was instantiated.
    HazardSpawned {
        /// Identifier assigned to the hazard.
        hazard: HazardId,
        /// Catalog entry it was built from.
        config: HazardConfigId,
        /// Archetype of the hazard.
        kind: HazardKind,
        /// Edge it entered from.
        side: SpawnSide,
        /// Initial world position.
        position: Vec2,
    },
    /// Announces that a hazard finished its telegraph and became dangerous.
    HazardActivated {
        /// Hazard that activated.
        hazard: HazardId,
    },
    /// Announces a detonation burst.
    HazardExploded {
        /// Hazard that detonated.
        hazard: HazardId,
        /// One-based burst number within the detonation sequence.
        burst: u32,
        /// Projectiles requested by the burst.
        projectiles: u32,
    },
    /// Confirms that a hazard left the simulation.
    HazardDespawned {
        /// Hazard that was removed.
        hazard: HazardId,
        /// Why it was removed.
        reason: HazardDespawnReason,
    },
    /// Confirms that an attack pattern execution started.
    AttackPatternStarted {
        /// Catalog entry being executed.
        pattern: AttackPatternId,
        /// Origin of the execution's projectiles.
        origin: Vec2,
    },
    /// Confirms that an attack pattern execution finished.
    AttackPatternFinished {
        /// Catalog entry that finished.
        pattern: AttackPatternId,
    },
    /// Confirms that a projectile was instantiated.
    ProjectileSpawned {
        /// Identifier assigned to the projectile.
        projectile: ProjectileId,
        /// Entity that emitted it.
        source: ProjectileSource,
        /// Initial world position.
        position: Vec2,
    },
    /// Confirms that a projectile left the simulation.
    ProjectileDespawned {
        /// Projectile that was removed.
        projectile: ProjectileId,
        /// Why it was removed.
        reason: ProjectileDespawnReason,
    },
    /// Confirms that a collectible was spawned.
    CollectibleSpawned {
        /// Identifier assigned to the collectible.
        collectible: CollectibleId,
        /// Catalog entry it was built from.
        config: CollectibleConfigId,
        /// World position of the pickup.
        position: Vec2,
    },
    /// Requests damage on a player body.
    PlayerDamaged {
        /// Player body to damage.
        player: PlayerId,
        /// Damage amount.
        amount: u32,
        /// What caused the damage.
        source: DamageSource,
    },
    /// Requests an audio cue from the host engine.
    AudioCueRequested {
        /// Cue to play.
        cue: AudioCue,
        /// Hazard the cue belongs to.
        hazard: HazardId,
    },
    /// Reports that a spawn or emission was skipped.
    SpawnSkipped {
        /// Why the request was dropped.
        reason: SpawnSkipReason,
    },
    /// Confirms that the run was reset.
    RunReset,
}
