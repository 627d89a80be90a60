#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for the Skyward hazard engine.
//!
//! The world owns the difficulty model, every live hazard, attack-pattern
//! execution and projectile, plus the positions of the player bodies. All
//! mutation goes through [`apply`], which reports what happened as events.

use std::collections::BTreeMap;

use skyward_core::{
    seed::{derive_indexed_seed, RNG_STREAM_HAZARD_INSTANCE},
    AttackPatternId, CollectibleId, Command, DamageSource, Event, HazardCatalog, HazardDespawnReason,
    HazardId, PlayerId, ProjectileDespawnReason, ProjectileId, ProjectileRequest, ScreenBounds,
    SpawnSkipReason, Vec2,
};
use skyward_system_attack_patterns::{AttackPatternExecution, ExecutionStatus};
use skyward_system_difficulty::DifficultyModel;
use skyward_system_hazards::{HazardEffect, HazardInstance, HazardStatus, SpawnRequest};
use skyward_system_projectiles::{
    Projectile, ProjectileStatus, DEFAULT_CULL_MARGIN, DEFAULT_MAX_LIFETIME,
};

const DEFAULT_HAZARD_CULL_MARGIN: f32 = 3.0;
const PROJECTILE_DAMAGE: u32 = 1;

/// Configuration parameters required to construct a world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    bounds: ScreenBounds,
    difficulty: skyward_system_difficulty::Config,
    rng_seed: u64,
    projectile_margin: f32,
    projectile_lifetime: f32,
    hazard_margin: f32,
}

impl Config {
    /// Creates a configuration with the default difficulty curve and culling
    /// margins.
    #[must_use]
    pub fn new(bounds: ScreenBounds, rng_seed: u64) -> Self {
        Self {
            bounds,
            difficulty: skyward_system_difficulty::Config::default(),
            rng_seed,
            projectile_margin: DEFAULT_CULL_MARGIN,
            projectile_lifetime: DEFAULT_MAX_LIFETIME,
            hazard_margin: DEFAULT_HAZARD_CULL_MARGIN,
        }
    }

    /// Replaces the difficulty curve.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: skyward_system_difficulty::Config) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the projectile culling margin and maximum lifetime.
    #[must_use]
    pub const fn with_projectile_culling(mut self, margin: f32, lifetime: f32) -> Self {
        self.projectile_margin = margin;
        self.projectile_lifetime = lifetime;
        self
    }

    /// Overrides the margin outside of which active hazards are culled.
    #[must_use]
    pub const fn with_hazard_margin(mut self, margin: f32) -> Self {
        self.hazard_margin = margin;
        self
    }

    /// Initial screen rectangle.
    #[must_use]
    pub const fn bounds(&self) -> ScreenBounds {
        self.bounds
    }

    /// Difficulty curve.
    #[must_use]
    pub const fn difficulty(&self) -> skyward_system_difficulty::Config {
        self.difficulty
    }

    /// Seed the per-hazard random streams are derived from.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ScreenBounds::default(), 0)
    }
}

/// Represents the authoritative hazard engine state.
#[derive(Debug)]
pub struct World {
    config: Config,
    bounds: ScreenBounds,
    catalog: HazardCatalog,
    difficulty: DifficultyModel,
    hazards: Vec<HazardInstance>,
    executions: Vec<AttackPatternExecution>,
    projectiles: Vec<Projectile>,
    players: BTreeMap<PlayerId, Vec2>,
    next_hazard: u32,
    next_projectile: u32,
    next_collectible: u32,
    tick_index: u64,
}

impl World {
    /// Creates an empty world around the provided catalog.
    #[must_use]
    pub fn new(catalog: HazardCatalog, config: Config) -> Self {
        Self {
            bounds: config.bounds,
            difficulty: DifficultyModel::new(config.difficulty),
            config,
            catalog,
            hazards: Vec::new(),
            executions: Vec::new(),
            projectiles: Vec::new(),
            players: BTreeMap::new(),
            next_hazard: 0,
            next_projectile: 0,
            next_collectible: 0,
            tick_index: 0,
        }
    }

    fn allocate_projectile(&mut self) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile);
        self.next_projectile = self.next_projectile.wrapping_add(1);
        id
    }

    fn allocate_collectible(&mut self) -> CollectibleId {
        let id = CollectibleId::new(self.next_collectible);
        self.next_collectible = self.next_collectible.wrapping_add(1);
        id
    }

    fn lead_player(&self) -> Option<Vec2> {
        self.players.values().next().copied()
    }

    fn hazard_index(&self, hazard: HazardId) -> Option<usize> {
        self.hazards.iter().position(|instance| instance.id() == hazard)
    }

    fn spawn_projectile(
        &mut self,
        request: ProjectileRequest,
        spawned: &mut Vec<Projectile>,
        out_events: &mut Vec<Event>,
    ) {
        if request.asset.is_none() {
            tracing::warn!(source = ?request.source, "projectile has no asset, skipping");
            out_events.push(Event::SpawnSkipped {
                reason: SpawnSkipReason::MissingProjectileAsset(request.source),
            });
            return;
        }
        let id = self.allocate_projectile();
        out_events.push(Event::ProjectileSpawned {
            projectile: id,
            source: request.source,
            position: request.position,
        });
        spawned.push(Projectile::from_request(
            id,
            request,
            self.config.projectile_lifetime,
        ));
    }

    fn emit_hazard_effects(
        &mut self,
        hazard: HazardId,
        effects: Vec<HazardEffect>,
        spawned: &mut Vec<Projectile>,
        out_events: &mut Vec<Event>,
    ) {
        for effect in effects {
            match effect {
                HazardEffect::Projectile(request) => {
                    self.spawn_projectile(request, spawned, out_events);
                }
                HazardEffect::Damage { player, amount } => out_events.push(Event::PlayerDamaged {
                    player,
                    amount,
                    source: DamageSource::Hazard(hazard),
                }),
                HazardEffect::Cue(cue) => {
                    out_events.push(Event::AudioCueRequested { cue, hazard });
                }
                HazardEffect::Activated => out_events.push(Event::HazardActivated { hazard }),
                HazardEffect::Exploded { burst, projectiles } => {
                    out_events.push(Event::HazardExploded {
                        hazard,
                        burst,
                        projectiles,
                    });
                }
            }
        }
    }

    fn tick_hazards(&mut self, dt: f32, spawned: &mut Vec<Projectile>, out_events: &mut Vec<Event>) {
        let culling = self.bounds.expanded(self.config.hazard_margin);
        let mut index = 0;
        while index < self.hazards.len() {
            let mut effects = Vec::new();
            let hazard = &mut self.hazards[index];
            let id = hazard.id();
            let status = hazard.tick(dt, &culling, &mut effects);
            self.emit_hazard_effects(id, effects, spawned, out_events);
            match status {
                HazardStatus::Alive => index += 1,
                HazardStatus::Expired(reason) => {
                    let _ = self.hazards.remove(index);
                    out_events.push(Event::HazardDespawned { hazard: id, reason });
                }
            }
        }
    }

    fn tick_executions(
        &mut self,
        dt: f32,
        spawned: &mut Vec<Projectile>,
        out_events: &mut Vec<Event>,
    ) {
        let mut index = 0;
        while index < self.executions.len() {
            let mut requests = Vec::new();
            let execution = &mut self.executions[index];
            let pattern = execution.pattern();
            let status = execution.advance(dt, &mut requests);
            for request in requests {
                self.spawn_projectile(request, spawned, out_events);
            }
            match status {
                ExecutionStatus::Running => index += 1,
                ExecutionStatus::Finished => {
                    let _ = self.executions.remove(index);
                    out_events.push(Event::AttackPatternFinished { pattern });
                }
            }
        }
    }

    fn tick_projectiles(&mut self, dt: f32, out_events: &mut Vec<Event>) {
        let culling = self.bounds.expanded(self.config.projectile_margin);
        self.projectiles
            .retain_mut(|projectile| match projectile.advance(dt, &culling) {
                ProjectileStatus::Alive => true,
                ProjectileStatus::Despawn(reason) => {
                    out_events.push(Event::ProjectileDespawned {
                        projectile: projectile.id(),
                        reason,
                    });
                    false
                }
            });
    }

    fn start_attack_pattern(
        &mut self,
        pattern: AttackPatternId,
        origin: Vec2,
        out_events: &mut Vec<Event>,
    ) {
        let Some(config) = self.catalog.attack_pattern(pattern) else {
            tracing::warn!(pattern = pattern.get(), "unknown attack pattern");
            out_events.push(Event::SpawnSkipped {
                reason: SpawnSkipReason::UnknownAttackPattern(pattern),
            });
            return;
        };

        out_events.push(Event::AttackPatternStarted { pattern, origin });
        let mut requests = Vec::new();
        let execution =
            AttackPatternExecution::launch(pattern, config, origin, self.lead_player(), &mut requests);
        let mut spawned = Vec::new();
        for request in requests {
            self.spawn_projectile(request, &mut spawned, out_events);
        }
        self.projectiles.append(&mut spawned);
        match execution {
            Some(execution) => self.executions.push(execution),
            None => out_events.push(Event::AttackPatternFinished { pattern }),
        }
    }

    fn reset_run(&mut self, out_events: &mut Vec<Event>) {
        for mut hazard in self.hazards.drain(..) {
            hazard.clear();
            out_events.push(Event::HazardDespawned {
                hazard: hazard.id(),
                reason: HazardDespawnReason::RunReset,
            });
        }
        for projectile in self.projectiles.drain(..) {
            out_events.push(Event::ProjectileDespawned {
                projectile: projectile.id(),
                reason: ProjectileDespawnReason::RunReset,
            });
        }
        self.executions.clear();
        self.difficulty.reset();
        out_events.push(Event::DifficultyChanged {
            multiplier: self.difficulty.multiplier(),
        });
        out_events.push(Event::RunReset);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(HazardCatalog::builtin(), Config::default())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureScreen { bounds } => {
            world.bounds = bounds;
            out_events.push(Event::ScreenConfigured { bounds });
        }
        Command::Tick { dt } => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced { dt });

            if let Some(multiplier) = world.difficulty.tick(dt) {
                out_events.push(Event::DifficultyChanged { multiplier });
            }

            let seconds = dt.as_secs_f32();
            let mut spawned = Vec::new();
            world.tick_hazards(seconds, &mut spawned, out_events);
            world.tick_executions(seconds, &mut spawned, out_events);
            world.tick_projectiles(seconds, out_events);
            world.projectiles.append(&mut spawned);
        }
        Command::SetPlayerPosition { player, position } => {
            let _ = world.players.insert(player, position);
        }
        Command::RemovePlayer { player } => {
            if world.players.remove(&player).is_some() {
                for hazard in &mut world.hazards {
                    hazard.contact_ended(player);
                }
            }
        }
        Command::SpawnHazard {
            config,
            side,
            position,
        } => {
            let Some(hazard_config) = world.catalog.hazard(config) else {
                tracing::warn!(config = config.get(), "unknown hazard config");
                out_events.push(Event::SpawnSkipped {
                    reason: SpawnSkipReason::UnknownHazardConfig(config),
                });
                return;
            };
            if hazard_config.hazard_asset.is_none() {
                tracing::warn!(hazard = %hazard_config.name, "hazard has no asset, skipping");
                out_events.push(Event::SpawnSkipped {
                    reason: SpawnSkipReason::MissingHazardAsset(config),
                });
                return;
            }

            let kind = hazard_config.kind();
            let id = HazardId::new(world.next_hazard);
            world.next_hazard = world.next_hazard.wrapping_add(1);
            let mut effects = Vec::new();
            let instance = HazardInstance::spawn(
                SpawnRequest {
                    id,
                    config_id: config,
                    config: hazard_config,
                    scaling: world.catalog.scaling(),
                    multiplier: world.difficulty.multiplier(),
                    side,
                    position,
                    bounds: world.bounds,
                    rng_seed: derive_indexed_seed(
                        world.config.rng_seed,
                        RNG_STREAM_HAZARD_INSTANCE,
                        id.get(),
                    ),
                },
                &mut effects,
            );
            world.hazards.push(instance);
            out_events.push(Event::HazardSpawned {
                hazard: id,
                config,
                kind,
                side,
                position,
            });
            let mut spawned = Vec::new();
            world.emit_hazard_effects(id, effects, &mut spawned, out_events);
            world.projectiles.append(&mut spawned);
        }
        Command::StartAttackPattern { pattern, origin } => {
            world.start_attack_pattern(pattern, origin, out_events);
        }
        Command::SpawnCollectible { config, position } => {
            let Some(collectible) = world.catalog.collectible(config) else {
                tracing::warn!(config = config.get(), "unknown collectible config");
                out_events.push(Event::SpawnSkipped {
                    reason: SpawnSkipReason::UnknownCollectibleConfig(config),
                });
                return;
            };
            if collectible.asset.is_none() {
                tracing::warn!(collectible = %collectible.name, "collectible has no asset, skipping");
                out_events.push(Event::SpawnSkipped {
                    reason: SpawnSkipReason::MissingCollectibleAsset(config),
                });
                return;
            }
            let id = world.allocate_collectible();
            out_events.push(Event::CollectibleSpawned {
                collectible: id,
                config,
                position,
            });
        }
        Command::PlayerContactBegan { hazard, player } => {
            if !world.players.contains_key(&player) {
                tracing::debug!(player = player.get(), "contact from unknown player");
                return;
            }
            let Some(index) = world.hazard_index(hazard) else {
                tracing::debug!(hazard = hazard.get(), "contact with unknown hazard");
                return;
            };
            let mut effects = Vec::new();
            let status = world.hazards[index].contact_began(player, &mut effects);
            let mut spawned = Vec::new();
            world.emit_hazard_effects(hazard, effects, &mut spawned, out_events);
            world.projectiles.append(&mut spawned);
            if let HazardStatus::Expired(reason) = status {
                let _ = world.hazards.remove(index);
                out_events.push(Event::HazardDespawned { hazard, reason });
            }
        }
        Command::PlayerContactEnded { hazard, player } => {
            if let Some(index) = world.hazard_index(hazard) {
                world.hazards[index].contact_ended(player);
            }
        }
        Command::ProjectileContact { projectile, player } => {
            let Some(index) = world
                .projectiles
                .iter()
                .position(|candidate| candidate.id() == projectile)
            else {
                return;
            };
            let _ = world.projectiles.remove(index);
            out_events.push(Event::PlayerDamaged {
                player,
                amount: PROJECTILE_DAMAGE,
                source: DamageSource::Projectile(projectile),
            });
            out_events.push(Event::ProjectileDespawned {
                projectile,
                reason: ProjectileDespawnReason::HitPlayer,
            });
        }
        Command::SetDifficulty { value } => {
            let multiplier = world.difficulty.set_difficulty(value);
            out_events.push(Event::DifficultyChanged { multiplier });
        }
        Command::PauseDifficulty => world.difficulty.pause(),
        Command::ResumeDifficulty => world.difficulty.resume(),
        Command::ResetRun => world.reset_run(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::World;
    use skyward_core::{
        HazardCatalog, HazardConfigId, HazardId, HazardKind, LifecycleState, PlayerId,
        ScreenBounds, SpawnSide, Vec2,
    };
    use skyward_system_difficulty::DifficultyModel;
    use skyward_system_hazards::HazardInstance;
    use skyward_system_projectiles::Projectile;

    /// Current screen rectangle.
    #[must_use]
    pub fn bounds(world: &World) -> ScreenBounds {
        world.bounds
    }

    /// Catalog the world instantiates hazards from.
    #[must_use]
    pub fn catalog(world: &World) -> &HazardCatalog {
        &world.catalog
    }

    /// Difficulty multiplier currently in effect.
    #[must_use]
    pub fn multiplier(world: &World) -> f32 {
        world.difficulty.multiplier()
    }

    /// Provides read-only access to the difficulty model.
    #[must_use]
    pub fn difficulty(world: &World) -> &DifficultyModel {
        &world.difficulty
    }

    /// Unpaused play time accrued by the difficulty model.
    #[must_use]
    pub fn elapsed(world: &World) -> Duration {
        world.difficulty.elapsed()
    }

    /// Number of ticks processed since construction.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Position of the lowest-numbered player body, the flock leader.
    #[must_use]
    pub fn lead_player_position(world: &World) -> Option<Vec2> {
        world.lead_player()
    }

    /// Position of a specific player body.
    #[must_use]
    pub fn player_position(world: &World, player: PlayerId) -> Option<Vec2> {
        world.players.get(&player).copied()
    }

    /// Looks up a live hazard.
    #[must_use]
    pub fn hazard(world: &World, hazard: HazardId) -> Option<&HazardInstance> {
        world.hazards.iter().find(|instance| instance.id() == hazard)
    }

    /// Live projectiles in spawn order.
    #[must_use]
    pub fn projectiles(world: &World) -> &[Projectile] {
        &world.projectiles
    }

    /// Number of stream patterns still firing.
    #[must_use]
    pub fn active_executions(world: &World) -> usize {
        world.executions.len()
    }

    /// Captures a read-only view of the live hazards.
    #[must_use]
    pub fn hazard_view(world: &World) -> HazardView {
        let mut snapshots: Vec<HazardSnapshot> = world
            .hazards
            .iter()
            .map(|hazard| HazardSnapshot {
                id: hazard.id(),
                config: hazard.config(),
                kind: hazard.kind(),
                side: hazard.side(),
                position: hazard.position(),
                state: hazard.state(),
                warning_alpha: hazard.warning_alpha(),
                collision_enabled: hazard.collision_enabled(),
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        HazardView { snapshots }
    }

    /// Read-only snapshot describing the live hazards.
    #[derive(Clone, Debug, PartialEq)]
    pub struct HazardView {
        snapshots: Vec<HazardSnapshot>,
    }

    impl HazardView {
        /// Iterator over the captured hazard snapshots in id order.
        pub fn iter(&self) -> impl Iterator<Item = &HazardSnapshot> {
            self.snapshots.iter()
        }

        /// Number of live hazards.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether no hazard is alive.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        pub fn into_vec(self) -> Vec<HazardSnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single hazard used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct HazardSnapshot {
        /// Unique identifier assigned to the hazard.
        pub id: HazardId,
        /// Catalog entry the hazard was built from.
        pub config: HazardConfigId,
        /// Archetype of the hazard.
        pub kind: HazardKind,
        /// Edge the hazard entered from.
        pub side: SpawnSide,
        /// Current world position.
        pub position: Vec2,
        /// Current lifecycle stage.
        pub state: LifecycleState,
        /// Telegraph opacity while warning.
        pub warning_alpha: Option<f32>,
        /// Whether player contacts currently have an effect.
        pub collision_enabled: bool,
    }
}
