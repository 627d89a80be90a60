//! Declarative hazard, attack-pattern and collectible definitions.
//!
//! The catalog is authored offline (see `data/catalog.toml`) and validated
//! once when it is loaded. Everything downstream indexes into it through the
//! typed identifiers defined in the crate root.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    AssetKey, AttackPatternId, CollectibleConfigId, DifficultyScaling, HazardConfigId,
    HazardKind, MovementType, PatternType, SpawnOrigin, SpawnSide,
};

/// Droplet layouts an acid rain cloud can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidRainPattern {
    /// A quarter of the droplet budget with narrow jitter.
    SteadyDrizzle,
    /// The whole droplet budget with wide jitter.
    IntensePour,
    /// Half the budget laid out along a moving sine curtain.
    WavingCurtain,
}

/// Movement paths a toxic cloud can follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToxicCloudPattern {
    /// Straight drift away from the spawn edge.
    LinearDrift,
    /// Drift with a perpendicular sine sweep.
    ZigzagSweep,
    /// Circular orbit around the screen centre.
    CircularOrbit,
}

/// Detonation variants a wildfire can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildfirePattern {
    /// One radial burst, then the fireball is gone.
    SingleExplosion,
    /// Several radial bursts spaced by a fixed interval.
    ChainReaction,
    /// One burst along the four cardinal and four diagonal directions.
    CrossPattern,
}

/// Lifecycle tuning shared by every hazard kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseTuning {
    /// Seconds a hazard stays active before it expires.
    pub lifetime: f32,
    /// Damage applied per hit.
    pub damage: u32,
    /// Seconds the telegraph plays before the hazard activates.
    pub warning_duration: f32,
    /// Whether the telegraph flashes.
    pub warning_flash: bool,
    /// Flash cycles per second while telegraphing.
    pub flash_speed: f32,
    /// Peak opacity of the telegraph.
    pub warning_alpha: f32,
}

impl Default for BaseTuning {
    fn default() -> Self {
        Self {
            lifetime: 10.0,
            damage: 1,
            warning_duration: 1.0,
            warning_flash: true,
            flash_speed: 8.0,
            warning_alpha: 0.5,
        }
    }
}

/// Tuning for acid rain clouds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcidRainTuning {
    /// Fall speed of each droplet.
    pub drop_speed: f32,
    /// Rate at which the drift phase advances.
    pub drift_speed: f32,
    /// Vertical amplitude of the drift around the anchor.
    pub drift_range: f32,
    /// Distance below the top edge where the cloud settles.
    pub y_target_offset: f32,
    /// Speed of the entry approach.
    pub entry_speed: f32,
    /// Visual asset for droplets.
    pub droplet_asset: Option<AssetKey>,
}

impl Default for AcidRainTuning {
    fn default() -> Self {
        Self {
            drop_speed: 5.0,
            drift_speed: 0.5,
            drift_range: 2.0,
            y_target_offset: 1.0,
            entry_speed: 3.0,
            droplet_asset: Some(AssetKey::new("acid_droplet")),
        }
    }
}

/// Tuning for toxic clouds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToxicCloudTuning {
    /// Perpendicular amplitude of the zigzag sweep.
    pub zigzag_amplitude: f32,
    /// Full zigzag cycles per second.
    pub zigzag_frequency: f32,
    /// Radius of the circular orbit.
    pub orbit_radius: f32,
    /// Angular speed of the orbit in radians per second.
    pub orbit_speed: f32,
    /// Whether overlapping players are damaged repeatedly.
    pub continuous_damage: bool,
    /// Seconds between repeated damage ticks.
    pub damage_interval: f32,
}

impl Default for ToxicCloudTuning {
    fn default() -> Self {
        Self {
            zigzag_amplitude: 2.0,
            zigzag_frequency: 1.0,
            orbit_radius: 3.0,
            orbit_speed: 1.0,
            continuous_damage: true,
            damage_interval: 0.5,
        }
    }
}

/// Tuning for wildfires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WildfireTuning {
    /// Speed of the fireball before it detonates.
    pub travel_speed: f32,
    /// Seconds after activation before the fireball detonates.
    pub explosion_delay: f32,
    /// Seconds between chained bursts.
    pub chain_interval: f32,
    /// Bursts in a chain reaction.
    pub chain_count: u32,
    /// Visual asset for fragments.
    pub fireball_asset: Option<AssetKey>,
}

impl Default for WildfireTuning {
    fn default() -> Self {
        Self {
            travel_speed: 6.0,
            explosion_delay: 1.0,
            chain_interval: 0.5,
            chain_count: 3,
            fireball_asset: Some(AssetKey::new("fireball")),
        }
    }
}

/// Kind-specific pattern and tuning of a hazard configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HazardVariant {
    /// Acid rain cloud.
    AcidRain {
        /// Droplet layout.
        pattern: AcidRainPattern,
        /// Kind tuning.
        #[serde(default)]
        tuning: AcidRainTuning,
    },
    /// Toxic cloud.
    ToxicCloud {
        /// Movement path.
        pattern: ToxicCloudPattern,
        /// Kind tuning.
        #[serde(default)]
        tuning: ToxicCloudTuning,
    },
    /// Wildfire.
    Wildfire {
        /// Detonation variant.
        pattern: WildfirePattern,
        /// Kind tuning.
        #[serde(default)]
        tuning: WildfireTuning,
    },
}

impl HazardVariant {
    /// Archetype described by the variant.
    #[must_use]
    pub const fn kind(&self) -> HazardKind {
        match self {
            Self::AcidRain { .. } => HazardKind::AcidRain,
            Self::ToxicCloud { .. } => HazardKind::ToxicCloud,
            Self::Wildfire { .. } => HazardKind::Wildfire,
        }
    }
}

/// Immutable description of one hazard archetype and pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardConfig {
    /// Human-readable label used in logs.
    pub name: String,
    /// Kind, pattern and kind tuning.
    pub variant: HazardVariant,
    /// Edges the hazard may enter from.
    pub allowed_sides: Vec<SpawnSide>,
    /// Probability in `[0, 1]` that the config survives the selection roll.
    #[serde(default = "default_spawn_chance")]
    pub spawn_chance: f32,
    /// Shortest wait after spawning this config, before difficulty scaling.
    #[serde(default = "default_min_wait")]
    pub min_time_between_spawns: f32,
    /// Longest wait after spawning this config, before difficulty scaling.
    #[serde(default = "default_max_wait")]
    pub max_time_between_spawns: f32,
    /// Visual asset for the hazard body; `None` skips the spawn.
    #[serde(default)]
    pub hazard_asset: Option<AssetKey>,
    /// Lifecycle tuning.
    #[serde(default)]
    pub base: BaseTuning,
}

impl HazardConfig {
    /// Archetype of the configuration.
    #[must_use]
    pub const fn kind(&self) -> HazardKind {
        self.variant.kind()
    }
}

fn default_spawn_chance() -> f32 {
    1.0
}

fn default_min_wait() -> f32 {
    5.0
}

fn default_max_wait() -> f32 {
    10.0
}

/// Immutable description of a legacy bullet-hell attack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackPatternConfig {
    /// Human-readable label used in logs.
    pub name: String,
    /// Burst or stream firing.
    pub pattern_type: PatternType,
    /// Where the projectiles originate.
    pub spawn_origin: SpawnOrigin,
    /// Firing direction in degrees (0 = right, 90 = up, 270 = down).
    pub base_angle: f32,
    /// Aim at the player at launch instead of using `base_angle`.
    pub aim_at_player: bool,
    /// Projectile speed.
    pub projectile_speed: f32,
    /// Projectile movement model.
    pub movement_type: MovementType,
    /// Sine amplitude for sinusoidal projectiles.
    pub wave_amplitude: f32,
    /// Sine frequency for sinusoidal projectiles.
    pub wave_frequency: f32,
    /// Projectiles per fan.
    pub projectile_count: u32,
    /// Total fan width in degrees; 360 forms a ring.
    pub spread_angle: f32,
    /// Seconds a stream keeps firing.
    pub duration: f32,
    /// Fans per second while streaming.
    pub fire_rate: f32,
    /// Degrees per second the stream rotates.
    pub spin_speed: f32,
    /// Visual asset for the projectiles.
    pub projectile_asset: Option<AssetKey>,
}

impl Default for AttackPatternConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            pattern_type: PatternType::Burst,
            spawn_origin: SpawnOrigin::Top,
            base_angle: 270.0,
            aim_at_player: false,
            projectile_speed: 8.0,
            movement_type: MovementType::Linear,
            wave_amplitude: 1.0,
            wave_frequency: 2.0,
            projectile_count: 8,
            spread_angle: 360.0,
            duration: 3.0,
            fire_rate: 5.0,
            spin_speed: 0.0,
            projectile_asset: Some(AssetKey::new("hazard_projectile")),
        }
    }
}

/// Immutable description of a collectible pickup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    /// Human-readable label used in logs.
    pub name: String,
    /// Visual asset for the pickup.
    pub asset: Option<AssetKey>,
    /// Probability in `[0, 1]` that a due spawn actually happens.
    pub spawn_chance: f32,
    /// Shortest wait between spawn attempts, before difficulty scaling.
    pub min_time_between_spawns: f32,
    /// Longest wait between spawn attempts, before difficulty scaling.
    pub max_time_between_spawns: f32,
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            asset: None,
            spawn_chance: 0.5,
            min_time_between_spawns: 5.0,
            max_time_between_spawns: 10.0,
        }
    }
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML document could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// A hazard config lists no spawn sides.
    #[error("hazard `{name}` has no allowed spawn sides")]
    NoSpawnSides {
        /// Offending config.
        name: String,
    },
    /// A spawn chance lies outside `[0, 1]`.
    #[error("`{name}` has spawn chance {chance} outside [0, 1]")]
    ChanceOutOfRange {
        /// Offending config.
        name: String,
        /// Configured chance.
        chance: f32,
    },
    /// A spawn window is negative or inverted.
    #[error("`{name}` has invalid spawn window [{min}, {max}]")]
    InvalidSpawnWindow {
        /// Offending config.
        name: String,
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// An attack pattern fires no projectiles.
    #[error("attack pattern `{name}` fires zero projectiles")]
    EmptyFan {
        /// Offending pattern.
        name: String,
    },
    /// A stream pattern has a non-positive fire rate.
    #[error("attack pattern `{name}` streams with fire rate {rate}")]
    InvalidFireRate {
        /// Offending pattern.
        name: String,
        /// Configured rate.
        rate: f32,
    },
    /// A tuning value is out of its valid range.
    #[error("`{name}` has invalid `{field}`")]
    InvalidTuning {
        /// Offending config.
        name: String,
        /// Offending field.
        field: &'static str,
    },
    /// A time or rate is NaN or infinite.
    #[error("`{name}` has non-finite `{field}` ({value})")]
    NonFinite {
        /// Offending config.
        name: String,
        /// Offending field.
        field: &'static str,
        /// Configured value.
        value: f32,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    hazards: Vec<HazardConfig>,
    #[serde(default)]
    attack_patterns: Vec<AttackPatternConfig>,
    #[serde(default)]
    collectibles: Vec<CollectibleConfig>,
    #[serde(default)]
    scaling: DifficultyScaling,
}

/// Validated set of everything the scheduler can spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardCatalog {
    hazards: Vec<HazardConfig>,
    attack_patterns: Vec<AttackPatternConfig>,
    collectibles: Vec<CollectibleConfig>,
    scaling: DifficultyScaling,
}

impl HazardCatalog {
    /// Validates and assembles a catalog.
    pub fn new(
        hazards: Vec<HazardConfig>,
        attack_patterns: Vec<AttackPatternConfig>,
        collectibles: Vec<CollectibleConfig>,
        scaling: DifficultyScaling,
    ) -> Result<Self, CatalogError> {
        for hazard in &hazards {
            validate_hazard(hazard)?;
        }
        for pattern in &attack_patterns {
            validate_pattern(pattern)?;
        }
        for collectible in &collectibles {
            validate_chance(&collectible.name, collectible.spawn_chance)?;
            validate_window(
                &collectible.name,
                collectible.min_time_between_spawns,
                collectible.max_time_between_spawns,
            )?;
        }
        validate_scaling(&scaling)?;

        Ok(Self {
            hazards,
            attack_patterns,
            collectibles,
            scaling,
        })
    }

    /// Parses and validates a TOML catalog document.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(contents)?;
        Self::new(
            document.hazards,
            document.attack_patterns,
            document.collectibles,
            document.scaling,
        )
    }

    /// Catalog shipped with the game: every hazard pattern plus the classic
    /// bullet-hell attacks and the two flock pickups.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            hazards: builtin_hazards(),
            attack_patterns: builtin_attack_patterns(),
            collectibles: builtin_collectibles(),
            scaling: DifficultyScaling::default(),
        }
    }

    /// Registered hazard configurations in identifier order.
    #[must_use]
    pub fn hazards(&self) -> &[HazardConfig] {
        &self.hazards
    }

    /// Registered attack patterns in identifier order.
    #[must_use]
    pub fn attack_patterns(&self) -> &[AttackPatternConfig] {
        &self.attack_patterns
    }

    /// Registered collectibles in identifier order.
    #[must_use]
    pub fn collectibles(&self) -> &[CollectibleConfig] {
        &self.collectibles
    }

    /// Difficulty interpolation tables.
    #[must_use]
    pub const fn scaling(&self) -> &DifficultyScaling {
        &self.scaling
    }

    /// Looks up a hazard configuration.
    #[must_use]
    pub fn hazard(&self, id: HazardConfigId) -> Option<&HazardConfig> {
        self.hazards.get(id.get() as usize)
    }

    /// Looks up an attack pattern.
    #[must_use]
    pub fn attack_pattern(&self, id: AttackPatternId) -> Option<&AttackPatternConfig> {
        self.attack_patterns.get(id.get() as usize)
    }

    /// Looks up a collectible configuration.
    #[must_use]
    pub fn collectible(&self, id: CollectibleConfigId) -> Option<&CollectibleConfig> {
        self.collectibles.get(id.get() as usize)
    }
}

fn validate_hazard(hazard: &HazardConfig) -> Result<(), CatalogError> {
    if hazard.allowed_sides.is_empty() {
        return Err(CatalogError::NoSpawnSides {
            name: hazard.name.clone(),
        });
    }
    validate_chance(&hazard.name, hazard.spawn_chance)?;
    validate_window(
        &hazard.name,
        hazard.min_time_between_spawns,
        hazard.max_time_between_spawns,
    )?;

    validate_finite(&hazard.name, "lifetime", hazard.base.lifetime)?;
    validate_finite(&hazard.name, "warning_duration", hazard.base.warning_duration)?;
    let invalid = |field| CatalogError::InvalidTuning {
        name: hazard.name.clone(),
        field,
    };
    if hazard.base.lifetime <= 0.0 {
        return Err(invalid("lifetime"));
    }
    if hazard.base.warning_duration < 0.0 {
        return Err(invalid("warning_duration"));
    }
    match &hazard.variant {
        HazardVariant::AcidRain { tuning, .. } => {
            if tuning.entry_speed <= 0.0 {
                return Err(invalid("entry_speed"));
            }
        }
        HazardVariant::ToxicCloud { tuning, .. } => {
            if tuning.continuous_damage && tuning.damage_interval <= 0.0 {
                return Err(invalid("damage_interval"));
            }
        }
        HazardVariant::Wildfire { tuning, .. } => {
            if tuning.chain_count == 0 {
                return Err(invalid("chain_count"));
            }
            if tuning.explosion_delay < 0.0 || tuning.chain_interval < 0.0 {
                return Err(invalid("explosion_delay"));
            }
        }
    }
    Ok(())
}

fn validate_pattern(pattern: &AttackPatternConfig) -> Result<(), CatalogError> {
    if pattern.projectile_count == 0 {
        return Err(CatalogError::EmptyFan {
            name: pattern.name.clone(),
        });
    }
    if pattern.pattern_type == PatternType::Stream && pattern.fire_rate <= 0.0 {
        return Err(CatalogError::InvalidFireRate {
            name: pattern.name.clone(),
            rate: pattern.fire_rate,
        });
    }
    Ok(())
}

fn validate_chance(name: &str, chance: f32) -> Result<(), CatalogError> {
    if (0.0..=1.0).contains(&chance) {
        Ok(())
    } else {
        Err(CatalogError::ChanceOutOfRange {
            name: name.to_owned(),
            chance,
        })
    }
}

fn validate_window(name: &str, min: f32, max: f32) -> Result<(), CatalogError> {
    validate_finite(name, "min_time_between_spawns", min)?;
    validate_finite(name, "max_time_between_spawns", max)?;
    if min < 0.0 || max < min {
        return Err(CatalogError::InvalidSpawnWindow {
            name: name.to_owned(),
            min,
            max,
        });
    }
    Ok(())
}

fn validate_scaling(scaling: &DifficultyScaling) -> Result<(), CatalogError> {
    const NAME: &str = "scaling";
    for (field, value) in [
        ("wildfire_min_speed", scaling.wildfire_min_speed),
        ("wildfire_max_speed", scaling.wildfire_max_speed),
        ("acid_rain_min_period", scaling.acid_rain_min_period),
        ("acid_rain_max_period", scaling.acid_rain_max_period),
        ("toxic_cloud_min_speed", scaling.toxic_cloud_min_speed),
        ("toxic_cloud_max_speed", scaling.toxic_cloud_max_speed),
    ] {
        validate_finite(NAME, field, value)?;
    }
    if scaling.acid_rain_min_period <= 0.0 || scaling.acid_rain_max_period <= 0.0 {
        return Err(CatalogError::InvalidTuning {
            name: NAME.to_owned(),
            field: "acid_rain_period",
        });
    }
    Ok(())
}

fn validate_finite(name: &str, field: &'static str, value: f32) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::NonFinite {
            name: name.to_owned(),
            field,
            value,
        })
    }
}

fn builtin_hazards() -> Vec<HazardConfig> {
    let all_sides = vec![
        SpawnSide::Top,
        SpawnSide::Bottom,
        SpawnSide::Left,
        SpawnSide::Right,
    ];
    let acid_rain = |name: &str, pattern, chance, min, max| HazardConfig {
        name: name.to_owned(),
        variant: HazardVariant::AcidRain {
            pattern,
            tuning: AcidRainTuning::default(),
        },
        allowed_sides: vec![SpawnSide::Top],
        spawn_chance: chance,
        min_time_between_spawns: min,
        max_time_between_spawns: max,
        hazard_asset: Some(AssetKey::new("acid_cloud")),
        base: BaseTuning::default(),
    };
    let toxic_cloud = |name: &str, pattern, chance, sides: Vec<SpawnSide>| HazardConfig {
        name: name.to_owned(),
        variant: HazardVariant::ToxicCloud {
            pattern,
            tuning: ToxicCloudTuning::default(),
        },
        allowed_sides: sides,
        spawn_chance: chance,
        min_time_between_spawns: 6.0,
        max_time_between_spawns: 12.0,
        hazard_asset: Some(AssetKey::new("toxic_cloud")),
        base: BaseTuning {
            lifetime: 12.0,
            ..BaseTuning::default()
        },
    };
    let wildfire = |name: &str, pattern, chance| HazardConfig {
        name: name.to_owned(),
        variant: HazardVariant::Wildfire {
            pattern,
            tuning: WildfireTuning::default(),
        },
        allowed_sides: all_sides.clone(),
        spawn_chance: chance,
        min_time_between_spawns: 4.0,
        max_time_between_spawns: 8.0,
        hazard_asset: Some(AssetKey::new("wildfire")),
        base: BaseTuning::default(),
    };

    vec![
        acid_rain("steady drizzle", AcidRainPattern::SteadyDrizzle, 0.8, 5.0, 10.0),
        acid_rain("intense pour", AcidRainPattern::IntensePour, 0.3, 8.0, 14.0),
        acid_rain("waving curtain", AcidRainPattern::WavingCurtain, 0.5, 6.0, 12.0),
        toxic_cloud(
            "drifting fog",
            ToxicCloudPattern::LinearDrift,
            0.7,
            all_sides.clone(),
        ),
        toxic_cloud(
            "zigzag smog",
            ToxicCloudPattern::ZigzagSweep,
            0.5,
            vec![SpawnSide::Left, SpawnSide::Right],
        ),
        toxic_cloud(
            "orbiting miasma",
            ToxicCloudPattern::CircularOrbit,
            0.3,
            vec![SpawnSide::Top],
        ),
        wildfire("fireball", WildfirePattern::SingleExplosion, 0.8),
        wildfire("chain blaze", WildfirePattern::ChainReaction, 0.4),
        wildfire("cross flare", WildfirePattern::CrossPattern, 0.5),
    ]
}

fn builtin_attack_patterns() -> Vec<AttackPatternConfig> {
    vec![
        AttackPatternConfig {
            name: "ring".to_owned(),
            spawn_origin: SpawnOrigin::Top,
            ..AttackPatternConfig::default()
        },
        AttackPatternConfig {
            name: "aimed spread".to_owned(),
            spawn_origin: SpawnOrigin::Top,
            aim_at_player: true,
            projectile_count: 5,
            spread_angle: 60.0,
            projectile_speed: 6.0,
            ..AttackPatternConfig::default()
        },
        AttackPatternConfig {
            name: "spiral".to_owned(),
            pattern_type: PatternType::Stream,
            spawn_origin: SpawnOrigin::Center,
            projectile_count: 4,
            spread_angle: 360.0,
            duration: 3.0,
            fire_rate: 5.0,
            spin_speed: 90.0,
            projectile_speed: 4.0,
            ..AttackPatternConfig::default()
        },
        AttackPatternConfig {
            name: "serpent stream".to_owned(),
            pattern_type: PatternType::Stream,
            spawn_origin: SpawnOrigin::Left,
            base_angle: 0.0,
            movement_type: MovementType::Sinusoidal,
            wave_amplitude: 3.0,
            wave_frequency: 4.0,
            projectile_count: 1,
            spread_angle: 0.0,
            duration: 2.0,
            fire_rate: 4.0,
            ..AttackPatternConfig::default()
        },
    ]
}

fn builtin_collectibles() -> Vec<CollectibleConfig> {
    vec![
        CollectibleConfig {
            name: "flock bird".to_owned(),
            asset: Some(AssetKey::new("flock_bird")),
            spawn_chance: 0.6,
            min_time_between_spawns: 6.0,
            max_time_between_spawns: 12.0,
        },
        CollectibleConfig {
            name: "magnet bird".to_owned(),
            asset: Some(AssetKey::new("magnet_bird")),
            spawn_chance: 0.3,
            min_time_between_spawns: 15.0,
            max_time_between_spawns: 30.0,
        },
    ]
}
