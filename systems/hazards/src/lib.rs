#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hazard lifecycle state machine.
//!
//! Every hazard is a single [`HazardInstance`] carrying the shared lifecycle
//! (`Entering → Warning → Active → Exploding → Expired`) and a kind-specific
//! behaviour. The world owns the instances, feeds them ticks and contacts,
//! and turns the returned [`HazardEffect`] values into events.

mod acid_rain;
mod toxic_cloud;
mod wildfire;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward_core::{
    AudioCue, BaseTuning, DifficultyScaling, HazardConfig, HazardConfigId, HazardDespawnReason,
    HazardId, HazardKind, HazardVariant, LifecycleState, PlayerId, ProjectileRequest,
    ProjectileSource, ScreenBounds, SpawnSide, Vec2,
};

use acid_rain::AcidRain;
use toxic_cloud::ToxicCloud;
use wildfire::{Wildfire, WildfireProgress};

/// Side effect requested by a hazard during a tick or contact.
#[derive(Clone, Debug, PartialEq)]
pub enum HazardEffect {
    /// Spawn a droplet or fragment.
    Projectile(ProjectileRequest),
    /// Damage a player body.
    Damage {
        /// Player body to damage.
        player: PlayerId,
        /// Damage amount.
        amount: u32,
    },
    /// Play an audio cue.
    Cue(AudioCue),
    /// The telegraph finished and collision is now enabled.
    Activated,
    /// A detonation burst went off.
    Exploded {
        /// One-based burst number.
        burst: u32,
        /// Fragments requested by the burst.
        projectiles: u32,
    },
}

/// Whether a hazard survives the step that was just applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardStatus {
    /// The hazard stays in the simulation.
    Alive,
    /// The hazard must be removed.
    Expired(HazardDespawnReason),
}

/// Difficulty-derived values captured when the hazard spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaledParameters {
    /// Acid rain droplet budget and emission period.
    AcidRain {
        /// Droplet budget per emission before the pattern share is applied.
        droplets: u32,
        /// Seconds between emissions.
        period: f32,
    },
    /// Toxic cloud travel speed.
    ToxicCloud {
        /// Travel speed.
        speed: f32,
    },
    /// Wildfire burst size and fragment speed.
    Wildfire {
        /// Fragments per radial burst.
        projectiles: u32,
        /// Fragment speed.
        speed: f32,
    },
}

/// Everything needed to instantiate a hazard.
#[derive(Clone, Copy, Debug)]
pub struct SpawnRequest<'a> {
    /// Identifier assigned by the world.
    pub id: HazardId,
    /// Catalog index of the configuration.
    pub config_id: HazardConfigId,
    /// Configuration to instantiate.
    pub config: &'a HazardConfig,
    /// Interpolation tables used to freeze scaled values.
    pub scaling: &'a DifficultyScaling,
    /// Difficulty multiplier at spawn time.
    pub multiplier: f32,
    /// Edge the hazard enters from.
    pub side: SpawnSide,
    /// Initial world position.
    pub position: Vec2,
    /// Screen rectangle at spawn time.
    pub bounds: ScreenBounds,
    /// Seed of the instance's private random stream.
    pub rng_seed: u64,
}

#[derive(Clone, Debug)]
enum HazardBehavior {
    AcidRain(AcidRain),
    ToxicCloud(ToxicCloud),
    Wildfire(Wildfire),
}

/// Live hazard owned by the world.
#[derive(Clone, Debug)]
pub struct HazardInstance {
    id: HazardId,
    config: HazardConfigId,
    kind: HazardKind,
    side: SpawnSide,
    position: Vec2,
    facing: Vec2,
    state: LifecycleState,
    warning_elapsed: f32,
    time_alive: f32,
    base: BaseTuning,
    behavior: HazardBehavior,
    rng: ChaCha8Rng,
    despawn: Option<HazardDespawnReason>,
}

impl HazardInstance {
    /// Instantiates a hazard and freezes its difficulty-scaled parameters.
    ///
    /// Acid rain starts by entering its resting point; every other kind
    /// starts telegraphing immediately, which requests the warning cue.
    #[must_use]
    pub fn spawn(request: SpawnRequest<'_>, out: &mut Vec<HazardEffect>) -> Self {
        let SpawnRequest {
            id,
            config_id,
            config,
            scaling,
            multiplier,
            side,
            position,
            bounds,
            rng_seed,
        } = request;
        let facing = side.inward();

        let (behavior, state) = match &config.variant {
            HazardVariant::AcidRain { pattern, tuning } => (
                HazardBehavior::AcidRain(AcidRain::new(
                    *pattern,
                    tuning.clone(),
                    scaling.acid_rain_droplets(multiplier),
                    scaling.acid_rain_period(multiplier),
                    position,
                    &bounds,
                )),
                LifecycleState::Entering,
            ),
            HazardVariant::ToxicCloud { pattern, tuning } => (
                HazardBehavior::ToxicCloud(ToxicCloud::new(
                    *pattern,
                    tuning.clone(),
                    scaling.toxic_cloud_speed(multiplier),
                    facing,
                    bounds.center(),
                )),
                LifecycleState::Warning,
            ),
            HazardVariant::Wildfire { pattern, tuning } => (
                HazardBehavior::Wildfire(Wildfire::new(
                    *pattern,
                    tuning.clone(),
                    scaling.wildfire_projectiles(multiplier),
                    scaling.wildfire_speed(multiplier),
                    facing,
                )),
                LifecycleState::Warning,
            ),
        };

        let instance = Self {
            id,
            config: config_id,
            kind: config.kind(),
            side,
            position,
            facing,
            state,
            warning_elapsed: 0.0,
            time_alive: 0.0,
            base: config.base.clone(),
            behavior,
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            despawn: None,
        };
        tracing::debug!(
            hazard = id.get(),
            name = %config.name,
            multiplier,
            scaled = ?instance.scaled(),
            "hazard spawned"
        );
        if state == LifecycleState::Warning {
            out.push(HazardEffect::Cue(AudioCue::Warning));
        }
        instance
    }

    /// Advances the lifecycle by `dt` seconds.
    ///
    /// `culling` is the rectangle outside of which an active hazard counts as
    /// having left the screen.
    pub fn tick(
        &mut self,
        dt: f32,
        culling: &ScreenBounds,
        out: &mut Vec<HazardEffect>,
    ) -> HazardStatus {
        match self.state {
            LifecycleState::Entering => {
                self.enter(dt, out);
                HazardStatus::Alive
            }
            LifecycleState::Warning => {
                self.warning_elapsed += dt;
                if self.warning_elapsed >= self.base.warning_duration {
                    self.activate(out);
                }
                HazardStatus::Alive
            }
            LifecycleState::Active | LifecycleState::Exploding => {
                self.time_alive += dt;
                self.run_behavior(dt, out);
                if self.state == LifecycleState::Expired {
                    return self.status();
                }
                if self.time_alive >= self.base.lifetime {
                    self.expire(HazardDespawnReason::LifetimeElapsed);
                } else if !culling.contains(self.position) {
                    self.expire(HazardDespawnReason::LeftScreen);
                }
                self.status()
            }
            LifecycleState::Expired => self.status(),
        }
    }

    /// Reports that a player body started overlapping the hazard.
    ///
    /// Contacts are ignored until the telegraph finishes, although toxic
    /// clouds still remember the overlap so the periodic damage picks it up
    /// once they activate.
    pub fn contact_began(&mut self, player: PlayerId, out: &mut Vec<HazardEffect>) -> HazardStatus {
        if let HazardBehavior::ToxicCloud(cloud) = &mut self.behavior {
            cloud.begin_overlap(player);
        }
        if !self.collision_enabled() {
            return self.status();
        }

        out.push(HazardEffect::Damage {
            player,
            amount: self.base.damage,
        });
        out.push(HazardEffect::Cue(AudioCue::Impact));

        let source = ProjectileSource::Hazard(self.id);
        let position = self.position;
        if let HazardBehavior::Wildfire(fire) = &mut self.behavior {
            let progress = fire.detonate_on_contact(position, source, out);
            self.apply_wildfire_progress(progress);
        }
        self.status()
    }

    /// Reports that a player body stopped overlapping the hazard.
    pub fn contact_ended(&mut self, player: PlayerId) {
        if let HazardBehavior::ToxicCloud(cloud) = &mut self.behavior {
            cloud.end_overlap(player);
        }
    }

    /// Marks the hazard as removed by a run reset.
    pub fn clear(&mut self) {
        self.expire(HazardDespawnReason::RunReset);
    }

    /// Opacity of the telegraph while warning, `None` otherwise.
    #[must_use]
    pub fn warning_alpha(&self) -> Option<f32> {
        if self.state != LifecycleState::Warning {
            return None;
        }
        if !self.base.warning_flash {
            return Some(self.base.warning_alpha);
        }
        Some(ping_pong(self.warning_elapsed * self.base.flash_speed, 1.0) * self.base.warning_alpha)
    }

    /// Reports whether player contacts currently have an effect.
    #[must_use]
    pub fn collision_enabled(&self) -> bool {
        matches!(
            self.state,
            LifecycleState::Active | LifecycleState::Exploding
        )
    }

    /// Identifier of the hazard.
    #[must_use]
    pub const fn id(&self) -> HazardId {
        self.id
    }

    /// Catalog entry the hazard was built from.
    #[must_use]
    pub const fn config(&self) -> HazardConfigId {
        self.config
    }

    /// Archetype of the hazard.
    #[must_use]
    pub const fn kind(&self) -> HazardKind {
        self.kind
    }

    /// Edge the hazard entered from.
    #[must_use]
    pub const fn side(&self) -> SpawnSide {
        self.side
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit vector pointing from the spawn edge into the play field.
    #[must_use]
    pub const fn facing(&self) -> Vec2 {
        self.facing
    }

    /// Current lifecycle stage.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Seconds spent active.
    #[must_use]
    pub const fn time_alive(&self) -> f32 {
        self.time_alive
    }

    /// Difficulty-derived values frozen at spawn.
    #[must_use]
    pub fn scaled(&self) -> ScaledParameters {
        match &self.behavior {
            HazardBehavior::AcidRain(rain) => ScaledParameters::AcidRain {
                droplets: rain.max_droplets(),
                period: rain.period(),
            },
            HazardBehavior::ToxicCloud(cloud) => ScaledParameters::ToxicCloud {
                speed: cloud.speed(),
            },
            HazardBehavior::Wildfire(fire) => ScaledParameters::Wildfire {
                projectiles: fire.projectile_count(),
                speed: fire.projectile_speed(),
            },
        }
    }

    /// Player bodies a toxic cloud is currently tracking, in id order.
    #[must_use]
    pub fn overlapping_players(&self) -> Vec<PlayerId> {
        match &self.behavior {
            HazardBehavior::ToxicCloud(cloud) => cloud.overlapping().collect(),
            HazardBehavior::AcidRain(_) | HazardBehavior::Wildfire(_) => Vec::new(),
        }
    }

    fn enter(&mut self, dt: f32, out: &mut Vec<HazardEffect>) {
        let arrived = match &mut self.behavior {
            HazardBehavior::AcidRain(rain) => rain.enter(&mut self.position, dt),
            HazardBehavior::ToxicCloud(_) | HazardBehavior::Wildfire(_) => true,
        };
        if arrived {
            self.state = LifecycleState::Warning;
            out.push(HazardEffect::Cue(AudioCue::Warning));
        }
    }

    fn activate(&mut self, out: &mut Vec<HazardEffect>) {
        self.state = LifecycleState::Active;
        match &mut self.behavior {
            HazardBehavior::AcidRain(rain) => rain.activate(),
            HazardBehavior::ToxicCloud(cloud) => cloud.activate(),
            HazardBehavior::Wildfire(fire) => fire.activate(),
        }
        tracing::debug!(hazard = self.id.get(), kind = ?self.kind, "hazard activated");
        out.push(HazardEffect::Activated);
        out.push(HazardEffect::Cue(AudioCue::Activated));
    }

    fn run_behavior(&mut self, dt: f32, out: &mut Vec<HazardEffect>) {
        let source = ProjectileSource::Hazard(self.id);
        match &mut self.behavior {
            HazardBehavior::AcidRain(rain) => {
                rain.update(dt, &mut self.position, source, &mut self.rng, out);
            }
            HazardBehavior::ToxicCloud(cloud) => {
                cloud.update(dt, &mut self.position, self.base.damage, out);
            }
            HazardBehavior::Wildfire(fire) => {
                let progress = fire.update(dt, &mut self.position, source, out);
                self.apply_wildfire_progress(progress);
            }
        }
    }

    fn apply_wildfire_progress(&mut self, progress: WildfireProgress) {
        match progress {
            WildfireProgress::Travelling => {}
            WildfireProgress::Exploding => self.state = LifecycleState::Exploding,
            WildfireProgress::Finished => self.expire(HazardDespawnReason::Detonated),
        }
    }

    fn expire(&mut self, reason: HazardDespawnReason) {
        if self.despawn.is_some() {
            return;
        }
        self.state = LifecycleState::Expired;
        self.despawn = Some(reason);
        tracing::debug!(hazard = self.id.get(), ?reason, "hazard expired");
    }

    fn status(&self) -> HazardStatus {
        match self.despawn {
            Some(reason) => HazardStatus::Expired(reason),
            None => HazardStatus::Alive,
        }
    }
}

/// Triangle wave bouncing between `0` and `length`.
#[must_use]
pub fn ping_pong(value: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(length * 2.0);
    length - (wrapped - length).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyward_core::{
        AcidRainPattern, AcidRainTuning, HazardCatalog, ToxicCloudPattern, ToxicCloudTuning,
        WildfirePattern, WildfireTuning,
    };

    fn config(variant: HazardVariant, side: SpawnSide) -> HazardConfig {
        HazardConfig {
            name: "test".to_owned(),
            variant,
            allowed_sides: vec![side],
            spawn_chance: 1.0,
            min_time_between_spawns: 1.0,
            max_time_between_spawns: 2.0,
            hazard_asset: None,
            base: BaseTuning::default(),
        }
    }

    fn spawn(
        config: &HazardConfig,
        multiplier: f32,
        side: SpawnSide,
        position: Vec2,
        out: &mut Vec<HazardEffect>,
    ) -> HazardInstance {
        let scaling = DifficultyScaling::default();
        HazardInstance::spawn(
            SpawnRequest {
                id: HazardId::new(1),
                config_id: HazardConfigId::new(0),
                config,
                scaling: &scaling,
                multiplier,
                side,
                position,
                bounds: ScreenBounds::centered(5.0, 9.0),
                rng_seed: 11,
            },
            out,
        )
    }

    fn culling() -> ScreenBounds {
        ScreenBounds::centered(5.0, 9.0).expanded(3.0)
    }

    fn run_for(hazard: &mut HazardInstance, seconds: f32, dt: f32, out: &mut Vec<HazardEffect>) {
        let steps = (seconds / dt).round() as u32;
        for _ in 0..steps {
            if hazard.tick(dt, &culling(), out) != HazardStatus::Alive {
                break;
            }
        }
    }

    fn projectile_count(effects: &[HazardEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, HazardEffect::Projectile(_)))
            .count()
    }

    #[test]
    fn ping_pong_bounces() {
        assert!((ping_pong(0.25, 1.0) - 0.25).abs() < 1e-6);
        assert!((ping_pong(1.5, 1.0) - 0.5).abs() < 1e-6);
        assert!((ping_pong(2.0, 1.0)).abs() < 1e-6);
    }

    #[test]
    fn warning_precedes_activation_and_blocks_contacts() {
        let wildfire = config(
            HazardVariant::Wildfire {
                pattern: WildfirePattern::SingleExplosion,
                tuning: WildfireTuning::default(),
            },
            SpawnSide::Left,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&wildfire, 1.0, SpawnSide::Left, Vec2::new(-6.0, 0.0), &mut out);
        assert_eq!(hazard.state(), LifecycleState::Warning);
        assert_eq!(out, vec![HazardEffect::Cue(AudioCue::Warning)]);
        assert!(hazard.warning_alpha().is_some());

        out.clear();
        let status = hazard.contact_began(PlayerId::new(0), &mut out);
        assert_eq!(status, HazardStatus::Alive);
        assert!(out.is_empty(), "contacts are ignored while warning");

        run_for(&mut hazard, 1.0, 0.25, &mut out);
        assert_eq!(hazard.state(), LifecycleState::Active);
        assert!(out.contains(&HazardEffect::Activated));
        assert_eq!(hazard.position(), Vec2::new(-6.0, 0.0), "no travel while warning");
        assert!(hazard.warning_alpha().is_none());
    }

    #[test]
    fn scaled_values_are_frozen_at_spawn() {
        let wildfire = config(
            HazardVariant::Wildfire {
                pattern: WildfirePattern::SingleExplosion,
                tuning: WildfireTuning::default(),
            },
            SpawnSide::Top,
        );
        let mut out = Vec::new();
        let hazard = spawn(&wildfire, 2.0, SpawnSide::Top, Vec2::new(0.0, 10.0), &mut out);
        assert_eq!(
            hazard.scaled(),
            ScaledParameters::Wildfire {
                projectiles: 10,
                speed: 7.5
            }
        );
    }

    #[test]
    fn wildfire_detonates_into_evenly_spaced_ring() {
        let wildfire = config(
            HazardVariant::Wildfire {
                pattern: WildfirePattern::SingleExplosion,
                tuning: WildfireTuning::default(),
            },
            SpawnSide::Top,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&wildfire, 3.0, SpawnSide::Top, Vec2::new(0.0, 10.0), &mut out);
        let mut status = HazardStatus::Alive;
        for _ in 0..40 {
            status = hazard.tick(0.1, &culling(), &mut out);
            if status != HazardStatus::Alive {
                break;
            }
        }
        assert_eq!(status, HazardStatus::Expired(HazardDespawnReason::Detonated));

        let directions: Vec<Vec2> = out
            .iter()
            .filter_map(|effect| match effect {
                HazardEffect::Projectile(request) => Some(request.direction),
                _ => None,
            })
            .collect();
        assert_eq!(directions.len(), 16);
        for (index, direction) in directions.iter().enumerate() {
            let expected = (index as f32 * 22.5).to_radians();
            assert!((direction.x - expected.cos()).abs() < 1e-4);
            assert!((direction.y - expected.sin()).abs() < 1e-4);
        }
    }

    #[test]
    fn wildfire_contact_damages_and_detonates() {
        let wildfire = config(
            HazardVariant::Wildfire {
                pattern: WildfirePattern::SingleExplosion,
                tuning: WildfireTuning::default(),
            },
            SpawnSide::Right,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&wildfire, 1.0, SpawnSide::Right, Vec2::new(6.0, 0.0), &mut out);
        run_for(&mut hazard, 1.0, 0.5, &mut out);
        assert!(hazard.collision_enabled());

        out.clear();
        let status = hazard.contact_began(PlayerId::new(4), &mut out);
        assert_eq!(status, HazardStatus::Expired(HazardDespawnReason::Detonated));
        assert_eq!(
            out[0],
            HazardEffect::Damage {
                player: PlayerId::new(4),
                amount: 1
            }
        );
        assert_eq!(projectile_count(&out), 4);
    }

    #[test]
    fn acid_rain_enters_then_rains_on_first_active_tick() {
        let acid = config(
            HazardVariant::AcidRain {
                pattern: AcidRainPattern::IntensePour,
                tuning: AcidRainTuning::default(),
            },
            SpawnSide::Top,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&acid, 1.0, SpawnSide::Top, Vec2::new(2.0, 10.0), &mut out);
        assert_eq!(hazard.state(), LifecycleState::Entering);
        assert!(out.is_empty());

        run_for(&mut hazard, 1.0, 0.5, &mut out);
        assert_eq!(hazard.state(), LifecycleState::Warning);
        assert_eq!(hazard.position(), Vec2::new(2.0, 8.0));
        assert_eq!(out, vec![HazardEffect::Cue(AudioCue::Warning)]);

        run_for(&mut hazard, 1.0, 0.5, &mut out);
        assert_eq!(hazard.state(), LifecycleState::Active);
        assert_eq!(projectile_count(&out), 0, "no rain on the activation tick");

        let _ = hazard.tick(0.1, &culling(), &mut out);
        assert_eq!(projectile_count(&out), 4);
    }

    #[test]
    fn acid_rain_expires_after_lifetime() {
        let acid = config(
            HazardVariant::AcidRain {
                pattern: AcidRainPattern::SteadyDrizzle,
                tuning: AcidRainTuning::default(),
            },
            SpawnSide::Top,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&acid, 1.0, SpawnSide::Top, Vec2::new(0.0, 10.0), &mut out);
        let mut status = HazardStatus::Alive;
        let mut ticks = 0;
        while status == HazardStatus::Alive && ticks < 1_000 {
            status = hazard.tick(0.05, &culling(), &mut out);
            ticks += 1;
        }
        assert_eq!(
            status,
            HazardStatus::Expired(HazardDespawnReason::LifetimeElapsed)
        );
        assert!(hazard.time_alive() >= BaseTuning::default().lifetime);
    }

    #[test]
    fn toxic_cloud_persists_through_contact() {
        let toxic = config(
            HazardVariant::ToxicCloud {
                pattern: ToxicCloudPattern::CircularOrbit,
                tuning: ToxicCloudTuning::default(),
            },
            SpawnSide::Top,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&toxic, 1.0, SpawnSide::Top, Vec2::new(0.0, 10.0), &mut out);
        let player = PlayerId::new(9);
        run_for(&mut hazard, 1.0, 0.5, &mut out);

        out.clear();
        assert_eq!(hazard.contact_began(player, &mut out), HazardStatus::Alive);
        assert!(out.contains(&HazardEffect::Damage { player, amount: 1 }));
        assert_eq!(hazard.overlapping_players(), vec![player]);

        out.clear();
        run_for(&mut hazard, 1.0, 0.25, &mut out);
        let hits = out
            .iter()
            .filter(|effect| matches!(effect, HazardEffect::Damage { .. }))
            .count();
        assert!(hits >= 2, "continuous damage keeps ticking, got {hits}");

        hazard.contact_ended(player);
        assert!(hazard.overlapping_players().is_empty());
    }

    #[test]
    fn drifting_cloud_leaves_the_screen() {
        let toxic = config(
            HazardVariant::ToxicCloud {
                pattern: ToxicCloudPattern::LinearDrift,
                tuning: ToxicCloudTuning::default(),
            },
            SpawnSide::Left,
        );
        let mut out = Vec::new();
        let mut hazard = spawn(&toxic, 3.0, SpawnSide::Left, Vec2::new(-6.0, 0.0), &mut out);
        let mut status = HazardStatus::Alive;
        for _ in 0..200 {
            status = hazard.tick(0.05, &culling(), &mut out);
            if status != HazardStatus::Alive {
                break;
            }
        }
        assert_eq!(status, HazardStatus::Expired(HazardDespawnReason::LeftScreen));
        assert!(hazard.position().x > 8.0);
    }

    #[test]
    fn builtin_catalog_spawns_every_config() {
        let catalog = HazardCatalog::builtin();
        for (index, config) in catalog.hazards().iter().enumerate() {
            let mut out = Vec::new();
            let side = config.allowed_sides[0];
            let hazard = HazardInstance::spawn(
                SpawnRequest {
                    id: HazardId::new(index as u32),
                    config_id: HazardConfigId::new(index as u32),
                    config,
                    scaling: catalog.scaling(),
                    multiplier: 1.5,
                    side,
                    position: Vec2::ZERO,
                    bounds: ScreenBounds::default(),
                    rng_seed: index as u64,
                },
                &mut out,
            );
            assert_eq!(hazard.kind(), config.kind());
            assert_eq!(hazard.facing(), side.inward());
        }
    }
}
